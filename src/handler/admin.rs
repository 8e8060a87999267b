use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::WithRejection;

use crate::{
    db::admindb::AdminExt,
    dtos::admindtos::{
        AdminLoginDto, AdminLoginResponseDto, AdminSettingsResponseDto, FilterAdminDto,
        UpdateAdminSettingsDto,
    },
    error::{ErrorMessage, HttpError},
    handler::method_not_allowed,
    AppState,
};

pub fn admin_handler() -> Router {
    Router::new()
        .route("/login", post(login).fallback(method_not_allowed))
        .route(
            "/settings",
            get(get_settings)
                .put(update_settings)
                .fallback(method_not_allowed),
        )
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    WithRejection(Json(body), _): WithRejection<Json<AdminLoginDto>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    let admin = app_state
        .db_client
        .verify_admin_login(&body.username, &body.password)
        .await
        .map_err(|e| {
            tracing::error!("Admin login could not complete: {}", e);
            HttpError::server_error(ErrorMessage::LoginFailed.to_string())
        })?;

    let response = match admin {
        Some(admin) => {
            tracing::info!("Admin '{}' logged in", admin.username);
            (
                StatusCode::OK,
                Json(AdminLoginResponseDto {
                    success: true,
                    user: Some(FilterAdminDto::filter_admin(&admin)),
                    error: None,
                }),
            )
        }
        None => {
            tracing::warn!("Rejected admin login attempt");
            (
                StatusCode::UNAUTHORIZED,
                Json(AdminLoginResponseDto {
                    success: false,
                    user: None,
                    error: Some(ErrorMessage::InvalidCredentials.to_string()),
                }),
            )
        }
    };

    Ok(response)
}

pub async fn get_settings(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let admin = app_state
        .db_client
        .get_admin()
        .await
        .map_err(|e| {
            tracing::error!("Admin store read failed: {}", e);
            HttpError::server_error(ErrorMessage::SettingsLoadFailed.to_string())
        })?;

    Ok(Json(FilterAdminDto::filter_admin(&admin)))
}

pub async fn update_settings(
    Extension(app_state): Extension<Arc<AppState>>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateAdminSettingsDto>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    let admin = app_state
        .db_client
        .update_admin_settings(body)
        .await
        .map_err(|e| {
            tracing::error!("Admin settings update failed: {}", e);
            if e.is_write() {
                HttpError::server_error(ErrorMessage::SettingsSaveFailed.to_string())
            } else {
                HttpError::server_error(ErrorMessage::SettingsLoadFailed.to_string())
            }
        })?;

    tracing::info!("Admin settings updated for '{}'", admin.username);

    Ok(Json(AdminSettingsResponseDto {
        success: true,
        user: FilterAdminDto::filter_admin(&admin),
    }))
}
