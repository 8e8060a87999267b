use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::db::propertydb::PropertySearchFilters;

/// Optional catalog filters on `GET /api/properties`.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_price_range", skip_on_field_errors = true))]
pub struct PropertyQueryDto {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub location: Option<String>,
    #[validate(range(min = 0, message = "minPrice cannot be negative"))]
    pub min_price: Option<i64>,
    #[validate(range(min = 0, message = "maxPrice cannot be negative"))]
    pub max_price: Option<i64>,
}

fn validate_price_range(query: &PropertyQueryDto) -> Result<(), ValidationError> {
    match (query.min_price, query.max_price) {
        (Some(min), Some(max)) if min > max => {
            let mut err = ValidationError::new("price_range");
            err.message = Some(Cow::from("minPrice must not exceed maxPrice"));
            Err(err)
        }
        _ => Ok(()),
    }
}

impl From<PropertyQueryDto> for PropertySearchFilters {
    fn from(query: PropertyQueryDto) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        PropertySearchFilters {
            property_type: non_blank(query.property_type),
            status: non_blank(query.status),
            featured: query.featured,
            location: non_blank(query.location),
            min_price: query.min_price,
            max_price: query.max_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_bounds_fail_validation() {
        let query = PropertyQueryDto {
            min_price: Some(-1),
            ..Default::default()
        };

        assert!(query.validate().is_err());
    }

    #[test]
    fn inverted_range_fails_validation() {
        let query = PropertyQueryDto {
            min_price: Some(500),
            max_price: Some(100),
            ..Default::default()
        };

        assert!(query.validate().is_err());
    }

    #[test]
    fn blank_text_filters_are_dropped() {
        let filters: PropertySearchFilters = PropertyQueryDto {
            property_type: Some("  ".into()),
            location: Some("Marina".into()),
            ..Default::default()
        }
        .into();

        assert!(filters.property_type.is_none());
        assert_eq!(filters.location.as_deref(), Some("Marina"));
    }
}
