use axum::extract::{Query, rejection::QueryRejection};

use super::ApiError;
use crate::db::PriceOrder;

/// Unwraps query parameters, turning a rejection into a 400 with a JSON body.
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|e| ApiError::validation(e.body_text()))
}

pub fn validate_price_order(order: Option<&str>) -> Result<PriceOrder, ApiError> {
    let Some(order) = order else {
        return Ok(PriceOrder::default());
    };

    PriceOrder::parse(order).ok_or_else(|| {
        ApiError::validation(format!(
            "Invalid order: '{}'. Expected 'levels' or 'key'",
            order
        ))
    })
}

pub fn require_param<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{} is required", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price_order() {
        assert_eq!(validate_price_order(None).unwrap(), PriceOrder::Levels);
        assert_eq!(validate_price_order(Some("levels")).unwrap(), PriceOrder::Levels);
        assert_eq!(validate_price_order(Some("key")).unwrap(), PriceOrder::ServiceKey);
        assert!(validate_price_order(Some("price")).is_err());
    }

    #[test]
    fn test_require_param() {
        assert_eq!(require_param("mes", Some("03")).unwrap(), "03");
        assert!(require_param("mes", Some("")).is_err());
        assert!(require_param("mes", None).is_err());
    }
}
