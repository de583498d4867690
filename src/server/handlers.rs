use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

use crate::{
    error::VtoError,
    models::{VtoRequestWithAvatar, VtoRequestWithSelfie, VtoResponse},
    vto,
};

use super::AppState;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub with_avatar: &'static str,
    pub with_selfie: &'static str,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub gemini_configured: bool,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for VtoError {
    fn into_response(self) -> Response {
        let status = match &self {
            VtoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            VtoError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            VtoError::Config(_)
            | VtoError::Generation(_)
            | VtoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "VTO API is running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            with_avatar: "/vto/with-avatar",
            with_selfie: "/vto/with-selfie",
        },
    })
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        gemini_configured: state.config.gemini.is_configured(),
    })
}

/// Workflow for users with an account (existing avatar): a single synthesis
/// call.
pub async fn vto_with_avatar(
    State(state): State<AppState>,
    Json(request): Json<VtoRequestWithAvatar>,
) -> Result<Json<VtoResponse>, VtoError> {
    log::info!("=== Workflow: user with avatar ===");
    let _timer = crate::logger::timer("vto_with_avatar");

    let image_base64 = vto::run_with_avatar(
        &state.gemini,
        &request.avatar_base64,
        &request.vetement_base64,
    )
    .await
    .map_err(|e| {
        log::error!("with-avatar workflow failed: {}", e);
        e
    })?;

    log::info!("✓ Generation succeeded");
    Ok(Json(VtoResponse::ok(image_base64, "VTO généré avec succès")))
}

/// Workflow for users without an account: avatar generation from the selfie,
/// then the garment transfer, chained. Measurements are checked before any
/// external call.
pub async fn vto_with_selfie(
    State(state): State<AppState>,
    Json(request): Json<VtoRequestWithSelfie>,
) -> Result<Json<VtoResponse>, VtoError> {
    log::info!("=== Workflow: user without avatar ===");
    let _timer = crate::logger::timer("vto_with_selfie");

    request.validate().map_err(|e| {
        log::warn!("with-selfie request rejected: {}", e);
        e
    })?;

    let image_base64 = vto::run_with_selfie(&state.gemini, &request)
        .await
        .map_err(|e| {
            log::error!("with-selfie workflow failed: {}", e);
            e
        })?;

    log::info!("✓ Generation succeeded (avatar created)");
    Ok(Json(VtoResponse::ok(
        image_base64,
        "Avatar créé et VTO généré avec succès",
    )))
}
