use serde::{Deserialize, Serialize};

use crate::models::adminmodel::AdminAccount;

// Missing fields deserialize to empty strings and simply fail the comparison
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AdminLoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateAdminSettingsDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

impl UpdateAdminSettingsDto {
    /// Writes every supplied, non-empty field onto `account`.
    pub fn apply_to(self, account: &mut AdminAccount) {
        if let Some(username) = self.username.filter(|v| !v.is_empty()) {
            account.username = username;
        }
        if let Some(password) = self.password.filter(|v| !v.is_empty()) {
            account.password = password;
        }
        if let Some(email) = self.email.filter(|v| !v.is_empty()) {
            account.email = email;
        }
    }
}

/// Public view of the admin account. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterAdminDto {
    pub username: String,
    pub email: String,
}

impl FilterAdminDto {
    pub fn filter_admin(account: &AdminAccount) -> Self {
        FilterAdminDto {
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminLoginResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<FilterAdminDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminSettingsResponseDto {
    pub success: bool,
    pub user: FilterAdminDto,
}
