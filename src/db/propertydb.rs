use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{
    db::{store::StoreError, DBClient},
    models::propertymodel::{next_property_id, Property},
    utils::timestamp,
};

#[derive(Debug, Default, Clone)]
pub struct PropertySearchFilters {
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub location: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl PropertySearchFilters {
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.status.is_none()
            && self.featured.is_none()
            && self.location.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(ref wanted) = self.property_type {
            if property.property_type() != Some(wanted.as_str()) {
                return false;
            }
        }

        if let Some(ref wanted) = self.status {
            if property.status() != Some(wanted.as_str()) {
                return false;
            }
        }

        if let Some(wanted) = self.featured {
            if property.featured() != wanted {
                return false;
            }
        }

        if let Some(ref needle) = self.location {
            let needle = needle.to_lowercase();
            let found = property
                .location()
                .map(|location| location.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !found {
                return false;
            }
        }

        // Listings without a numeric price never satisfy a price bound
        if self.min_price.is_some() || self.max_price.is_some() {
            let Some(price) = property.price() else {
                return false;
            };
            if self.min_price.map_or(false, |min| price < min as f64)
                || self.max_price.map_or(false, |max| price > max as f64)
            {
                return false;
            }
        }

        true
    }
}

#[async_trait]
pub trait PropertyExt {
    async fn get_properties(&self) -> Result<Vec<Property>, StoreError>;

    async fn search_properties(
        &self,
        filters: &PropertySearchFilters,
    ) -> Result<Vec<Property>, StoreError>;

    async fn get_property_by_id(&self, property_id: &str) -> Result<Option<Property>, StoreError>;

    async fn create_property(&self, fields: Map<String, Value>) -> Result<Property, StoreError>;

    async fn update_property(
        &self,
        property_id: &str,
        fields: Map<String, Value>,
    ) -> Result<Option<Property>, StoreError>;

    /// `Ok(false)` when nothing matched; the store is not rewritten then.
    async fn delete_property(&self, property_id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
impl PropertyExt for DBClient {
    async fn get_properties(&self) -> Result<Vec<Property>, StoreError> {
        self.properties.load().await
    }

    async fn search_properties(
        &self,
        filters: &PropertySearchFilters,
    ) -> Result<Vec<Property>, StoreError> {
        let properties = self.properties.load().await?;

        if filters.is_empty() {
            return Ok(properties);
        }

        Ok(properties
            .into_iter()
            .filter(|property| filters.matches(property))
            .collect())
    }

    async fn get_property_by_id(&self, property_id: &str) -> Result<Option<Property>, StoreError> {
        let properties = self.properties.load().await?;

        Ok(properties.into_iter().find(|p| p.id == property_id))
    }

    async fn create_property(&self, fields: Map<String, Value>) -> Result<Property, StoreError> {
        let mut properties = self.properties.load().await?;

        // Length-based: only unique while records are never deleted
        let id = next_property_id(properties.len());
        let property = Property::from_fields(id, timestamp::now(), fields);

        properties.push(property.clone());
        self.properties.save(&properties).await?;

        Ok(property)
    }

    async fn update_property(
        &self,
        property_id: &str,
        fields: Map<String, Value>,
    ) -> Result<Option<Property>, StoreError> {
        let mut properties = self.properties.load().await?;

        let Some(existing) = properties.iter_mut().find(|p| p.id == property_id) else {
            return Ok(None);
        };

        let updated = existing.merged(fields);
        *existing = updated.clone();

        self.properties.save(&properties).await?;

        Ok(Some(updated))
    }

    async fn delete_property(&self, property_id: &str) -> Result<bool, StoreError> {
        let mut properties = self.properties.load().await?;
        let before = properties.len();

        properties.retain(|p| p.id != property_id);

        if properties.len() == before {
            return Ok(false);
        }

        self.properties.save(&properties).await?;

        Ok(true)
    }
}
