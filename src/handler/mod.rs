pub mod admin;
pub mod properties;

use crate::error::HttpError;

/// Fallback for known paths hit with a method they do not serve. `OPTIONS`
/// never gets here: the CORS layer answers it.
pub async fn method_not_allowed() -> HttpError {
    HttpError::method_not_allowed()
}
