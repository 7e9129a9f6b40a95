use serde::ser::{Serialize, SerializeMap, Serializer};

/// Share of a sale's net amount that is not VAT (19%).
pub const TAX_DIVISOR: f64 = 1.19;

/// Net amount with the tax component removed, rounded down.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn remove_tax(gross: f64) -> i64 {
    (gross / TAX_DIVISOR).floor() as i64
}

/// Earnings for one year-month, one total per configured category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyEarnings {
    /// `YYYY-MM`
    pub period: String,
    /// `(category key, total)` in configured order
    pub totals: Vec<(String, i64)>,
}

/// Serialized flat: `{"mes": "2024-03", "cabello": 100, ...}`
impl Serialize for MonthlyEarnings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.totals.len() + 1))?;
        map.serialize_entry("mes", &self.period)?;
        for (key, total) in &self.totals {
            map.serialize_entry(key, total)?;
        }
        map.end()
    }
}
