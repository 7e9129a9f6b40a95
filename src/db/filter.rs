//! Catalog hierarchy filters.
//!
//! A listing request is turned into a [`FilterSpec`]: an ordered list of
//! `(level, value)` equality constraints. [`FilterSpec::condition`] is the
//! only place a filter becomes SQL, and every value is bound as a parameter.

use sea_orm::{ColumnTrait, Condition, QueryFilter};

use crate::entities::prices;

/// One of the four nested classification levels of the price catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Family,
    Level2,
    Level3,
    Level4,
}

impl Level {
    pub const ALL: [Self; 4] = [Self::Family, Self::Level2, Self::Level3, Self::Level4];

    #[must_use]
    pub const fn column(self) -> prices::Column {
        match self {
            Self::Family => prices::Column::Family,
            Self::Level2 => prices::Column::Level2,
            Self::Level3 => prices::Column::Level3,
            Self::Level4 => prices::Column::Level4,
        }
    }

    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Family => 0,
            Self::Level2 => 1,
            Self::Level3 => 2,
            Self::Level4 => 3,
        }
    }

    /// Levels above this one, outermost first.
    #[must_use]
    pub fn parents(self) -> &'static [Self] {
        &Self::ALL[..self.depth()]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Level2 => "level2",
            Self::Level3 => "level3",
            Self::Level4 => "level4",
        }
    }
}

/// Values supplied for each level of a listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyFilter {
    pub family: Option<String>,
    pub level2: Option<String>,
    pub level3: Option<String>,
    pub level4: Option<String>,
}

impl HierarchyFilter {
    #[must_use]
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with(mut self, level: Level, value: impl Into<String>) -> Self {
        *self.slot_mut(level) = Some(value.into());
        self
    }

    #[must_use]
    pub fn value(&self, level: Level) -> Option<&str> {
        match level {
            Level::Family => self.family.as_deref(),
            Level::Level2 => self.level2.as_deref(),
            Level::Level3 => self.level3.as_deref(),
            Level::Level4 => self.level4.as_deref(),
        }
    }

    fn slot_mut(&mut self, level: Level) -> &mut Option<String> {
        match level {
            Level::Family => &mut self.family,
            Level::Level2 => &mut self.level2,
            Level::Level3 => &mut self.level3,
            Level::Level4 => &mut self.level4,
        }
    }

    /// True when the top level carries a non-empty value.
    #[must_use]
    pub fn has_family(&self) -> bool {
        self.value(Level::Family).is_some_and(|v| !v.is_empty())
    }

    /// Constraints for every supplied level.
    #[must_use]
    pub fn spec(&self) -> FilterSpec {
        self.spec_for(&Level::ALL)
    }

    /// Constraints for the supplied levels among `levels`.
    #[must_use]
    pub fn spec_for(&self, levels: &[Level]) -> FilterSpec {
        levels
            .iter()
            .fold(FilterSpec::new(), |spec, &level| spec.with(level, self.value(level)))
    }
}

/// Ordered equality constraints on catalog levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    constraints: Vec<(Level, String)>,
}

impl FilterSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Appends `level = value` unless the value is absent or empty.
    #[must_use]
    pub fn with(mut self, level: Level, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.constraints.push((level, value.to_string()));
        }
        self
    }

    #[must_use]
    pub fn constraints(&self) -> &[(Level, String)] {
        &self.constraints
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    #[must_use]
    pub fn condition(&self) -> Condition {
        self.constraints
            .iter()
            .fold(Condition::all(), |cond, (level, value)| {
                cond.add(level.column().eq(value.as_str()))
            })
    }

    /// Adds the constraints to `query`; an empty spec leaves it untouched.
    #[must_use]
    pub fn apply<Q: QueryFilter>(&self, query: Q) -> Q {
        if self.is_empty() {
            query
        } else {
            query.filter(self.condition())
        }
    }
}

/// Row ordering for the full catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceOrder {
    /// family, level2, level3, level4, then service key
    #[default]
    Levels,
    ServiceKey,
}

impl PriceOrder {
    #[must_use]
    pub fn columns(self) -> Vec<prices::Column> {
        match self {
            Self::Levels => {
                let mut cols: Vec<prices::Column> = Level::ALL.iter().map(|l| l.column()).collect();
                cols.push(prices::Column::Servicekey);
                cols
            }
            Self::ServiceKey => vec![prices::Column::Servicekey],
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "levels" | "niveles" => Some(Self::Levels),
            "key" | "servicekey" | "clave" => Some(Self::ServiceKey),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, EntityTrait, QueryTrait};

    #[test]
    fn test_parents() {
        assert!(Level::Family.parents().is_empty());
        assert_eq!(Level::Level2.parents(), &[Level::Family]);
        assert_eq!(
            Level::Level4.parents(),
            &[Level::Family, Level::Level2, Level::Level3]
        );
    }

    #[test]
    fn test_spec_skips_missing_and_empty_values() {
        let filter = HierarchyFilter {
            family: Some("CABELLO".to_string()),
            level2: Some(String::new()),
            level3: Some("CORTE".to_string()),
            level4: None,
        };

        let spec = filter.spec();
        assert_eq!(
            spec.constraints(),
            &[
                (Level::Family, "CABELLO".to_string()),
                (Level::Level3, "CORTE".to_string()),
            ]
        );
    }

    #[test]
    fn test_spec_keeps_level_order() {
        let filter = HierarchyFilter::family("CABELLO")
            .with(Level::Level4, "LARGO")
            .with(Level::Level2, "TINTE");

        let levels: Vec<Level> = filter.spec().constraints().iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, vec![Level::Family, Level::Level2, Level::Level4]);
    }

    #[test]
    fn test_spec_for_parents_ignores_deeper_levels() {
        let filter = HierarchyFilter::family("CABELLO")
            .with(Level::Level2, "TINTE")
            .with(Level::Level3, "RAIZ");

        let spec = filter.spec_for(Level::Level3.parents());
        assert_eq!(spec.constraints().len(), 2);
        assert!(spec.constraints().iter().all(|(l, _)| *l != Level::Level3));
    }

    #[test]
    fn test_has_family() {
        assert!(HierarchyFilter::family("UNAS").has_family());
        assert!(!HierarchyFilter::family("").has_family());
        assert!(!HierarchyFilter::default().has_family());
    }

    #[test]
    fn test_condition_binds_values() {
        let spec = HierarchyFilter::family("CABELLO'; DROP TABLE prices; --")
            .with(Level::Level2, "TINTE")
            .spec();

        let stmt = spec
            .apply(prices::Entity::find())
            .build(DatabaseBackend::Postgres);

        assert!(stmt.sql.contains(r#""prices"."family" = $1"#));
        assert!(stmt.sql.contains(r#""prices"."level2" = $2"#));
        assert!(!stmt.sql.contains("DROP TABLE"));
        assert_eq!(stmt.values.map(|v| v.0.len()), Some(2));
    }

    #[test]
    fn test_empty_spec_adds_no_filter() {
        let stmt = FilterSpec::new()
            .apply(prices::Entity::find())
            .build(DatabaseBackend::Postgres);

        assert!(!stmt.sql.contains("WHERE"));
    }

    #[test]
    fn test_price_order_parse() {
        assert_eq!(PriceOrder::parse(""), Some(PriceOrder::Levels));
        assert_eq!(PriceOrder::parse("key"), Some(PriceOrder::ServiceKey));
        assert_eq!(PriceOrder::parse("KEY"), Some(PriceOrder::ServiceKey));
        assert_eq!(PriceOrder::parse("price"), None);

        let by_key = PriceOrder::ServiceKey.columns();
        assert_eq!(by_key.len(), 1);
        assert!(matches!(by_key[0], prices::Column::Servicekey));

        let by_levels = PriceOrder::Levels.columns();
        assert_eq!(by_levels.len(), 5);
        assert!(matches!(by_levels[0], prices::Column::Family));
        assert!(matches!(by_levels[4], prices::Column::Servicekey));
    }
}
