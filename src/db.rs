pub mod admindb;
pub mod propertydb;
pub mod store;

use serde_json::Map;

use crate::{
    config::{AdminSeed, Config},
    models::{adminmodel::AdminAccount, propertymodel::Property},
};
use store::{JsonStore, StoreError};

#[derive(Debug, Clone)]
pub struct DBClient {
    properties: JsonStore<Vec<Property>>,
    admin: JsonStore<AdminAccount>,
}

impl DBClient {
    pub fn new(properties: JsonStore<Vec<Property>>, admin: JsonStore<AdminAccount>) -> Self {
        DBClient { properties, admin }
    }

    pub fn from_config(config: &Config) -> Self {
        DBClient::new(
            JsonStore::new(config.properties_file.clone()),
            JsonStore::new(config.admin_file.clone()),
        )
    }

    /// First-run provisioning. Creates an empty catalog and, when a seed is
    /// configured, the admin account. Existing files are left alone.
    pub async fn bootstrap(&self, admin_seed: Option<&AdminSeed>) -> Result<(), StoreError> {
        if !self.properties.exists().await {
            self.properties.save(&Vec::new()).await?;
            tracing::info!(
                "Created empty property catalog at {}",
                self.properties.path().display()
            );
        }

        if !self.admin.exists().await {
            match admin_seed {
                Some(seed) => {
                    let account = AdminAccount {
                        username: seed.username.clone(),
                        password: seed.password.clone(),
                        email: seed.email.clone(),
                        last_login: None,
                        extra: Map::new(),
                    };
                    self.admin.save(&account).await?;
                    tracing::info!("Provisioned admin account '{}'", account.username);
                }
                None => tracing::warn!(
                    "No admin account at {} and ADMIN_USERNAME/ADMIN_PASSWORD not set; admin login is unavailable",
                    self.admin.path().display()
                ),
            }
        }

        Ok(())
    }
}
