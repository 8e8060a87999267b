use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The single admin account held in `admin.json`. Keys other than the four
/// below are provisioned out-of-band and written back untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
