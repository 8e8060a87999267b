use async_trait::async_trait;

use crate::{
    db::{store::StoreError, DBClient},
    dtos::admindtos::UpdateAdminSettingsDto,
    models::adminmodel::AdminAccount,
    utils::{password, timestamp},
};

#[async_trait]
pub trait AdminExt {
    /// `Ok(None)` on a credential mismatch. A match stamps `lastLogin` and
    /// persists it before returning.
    async fn verify_admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminAccount>, StoreError>;

    async fn get_admin(&self) -> Result<AdminAccount, StoreError>;

    async fn update_admin_settings(
        &self,
        changes: UpdateAdminSettingsDto,
    ) -> Result<AdminAccount, StoreError>;
}

#[async_trait]
impl AdminExt for DBClient {
    async fn verify_admin_login(
        &self,
        username: &str,
        candidate: &str,
    ) -> Result<Option<AdminAccount>, StoreError> {
        let mut admin = self.admin.load().await?;

        // Evaluate both so a wrong username costs the same as a wrong password
        let username_ok = admin.username == username;
        let password_ok = password::matches(&admin.password, candidate);
        if !(username_ok && password_ok) {
            return Ok(None);
        }

        admin.last_login = Some(timestamp::now());
        self.admin.save(&admin).await?;

        Ok(Some(admin))
    }

    async fn get_admin(&self) -> Result<AdminAccount, StoreError> {
        self.admin.load().await
    }

    async fn update_admin_settings(
        &self,
        changes: UpdateAdminSettingsDto,
    ) -> Result<AdminAccount, StoreError> {
        let mut admin = self.admin.load().await?;

        changes.apply_to(&mut admin);
        self.admin.save(&admin).await?;

        Ok(admin)
    }
}
