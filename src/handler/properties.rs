use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{Map, Value};
use validator::Validate;

use crate::{
    db::{
        propertydb::{PropertyExt, PropertySearchFilters},
        store::StoreError,
    },
    dtos::propertydtos::{MessageResponse, PropertyQueryDto},
    error::{ErrorMessage, HttpError},
    handler::method_not_allowed,
    AppState,
};

pub fn property_handler() -> Router {
    Router::new()
        .route(
            "/",
            get(get_properties)
                .post(create_property)
                .fallback(method_not_allowed),
        )
        .route(
            "/:property_id",
            get(get_property_by_id)
                .put(update_property)
                .delete(delete_property)
                .fallback(method_not_allowed),
        )
}

/// Maps a store failure to a generic 500. The cause, including the file
/// path, only goes to the log.
fn store_error(err: StoreError, on_write: ErrorMessage) -> HttpError {
    if err.is_write() {
        tracing::error!("Property store write failed: {}", err);
        HttpError::server_error(on_write.to_string())
    } else {
        tracing::error!("Property store read failed: {}", err);
        HttpError::server_error(ErrorMessage::PropertiesLoadFailed.to_string())
    }
}

pub async fn get_properties(
    Extension(app_state): Extension<Arc<AppState>>,
    WithRejection(Query(query_params), _): WithRejection<Query<PropertyQueryDto>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let filters = PropertySearchFilters::from(query_params);

    let properties = app_state
        .db_client
        .search_properties(&filters)
        .await
        .map_err(|e| store_error(e, ErrorMessage::PropertiesLoadFailed))?;

    Ok(Json(properties))
}

pub async fn get_property_by_id(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(property_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .get_property_by_id(&property_id)
        .await
        .map_err(|e| store_error(e, ErrorMessage::PropertiesLoadFailed))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    Ok(Json(property))
}

pub async fn create_property(
    Extension(app_state): Extension<Arc<AppState>>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .create_property(body)
        .await
        .map_err(|e| store_error(e, ErrorMessage::PropertySaveFailed))?;

    tracing::info!("Created property {}", property.id);

    Ok((StatusCode::CREATED, Json(property)))
}

pub async fn update_property(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(property_id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .update_property(&property_id, body)
        .await
        .map_err(|e| store_error(e, ErrorMessage::PropertySaveFailed))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    tracing::info!("Updated property {}", property.id);

    Ok(Json(property))
}

pub async fn delete_property(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(property_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_property(&property_id)
        .await
        .map_err(|e| store_error(e, ErrorMessage::PropertiesSaveFailed))?;

    if !deleted {
        return Err(HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()));
    }

    tracing::info!("Deleted property {}", property_id);

    Ok(Json(MessageResponse {
        message: "Property deleted successfully".to_string(),
    }))
}
