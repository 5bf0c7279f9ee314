use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use shared::{
    domain::Target,
    error::{ApiError, ApiException, ErrorCode},
    protocol::{ConvertRequest, ConvertResponse, HealthResponse, CONVERT_ROUTE, HEALTH_ROUTE},
};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{app_state::AppState, config::Settings, prompts::system_prompt};

type Rejection = (StatusCode, Json<ApiError>);

pub(crate) fn build_router(state: Arc<AppState>, settings: &Settings) -> Router {
    let mut router = Router::new()
        .route(HEALTH_ROUTE, get(health))
        .route(CONVERT_ROUTE, post(convert))
        .with_state(state);

    if let Some(dir) = &settings.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn convert(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ConvertResponse>, Rejection> {
    let request_id = Uuid::new_v4();

    let Some(rewriter) = state.rewriter.clone() else {
        error!(%request_id, "conversion requested but no provider is configured");
        return Err(reject(ApiException::new(
            ErrorCode::NotConfigured,
            "Conversion provider is not initialized. Check API key.",
        )));
    };

    let request: ConvertRequest = serde_json::from_slice(&body).map_err(|error| {
        warn!(%request_id, %error, "malformed conversion request");
        reject(ApiException::new(
            ErrorCode::Validation,
            r#"Invalid request. "text" and "target" fields are required."#,
        ))
    })?;

    let Some(target) = Target::from_label(&request.target) else {
        warn!(%request_id, requested = %request.target, "unknown conversion target");
        return Err(reject(ApiException::new(
            ErrorCode::InvalidTarget,
            format!("Invalid target: {}", request.target),
        )));
    };

    let converted = rewriter
        .rewrite(system_prompt(target), &request.text)
        .await
        .map_err(|error| {
            error!(%request_id, error = %format!("{error:#}"), "provider call failed");
            reject(ApiException::new(
                ErrorCode::Upstream,
                "Failed to communicate with AI service.",
            ))
        })?;

    info!(
        %request_id,
        conversion_target = target.key(),
        input_chars = request.text.chars().count(),
        output_chars = converted.chars().count(),
        "conversion completed"
    );
    Ok(Json(ConvertResponse {
        converted_text: converted.trim().to_string(),
        original_text: Some(request.text),
    }))
}

fn reject(exception: ApiException) -> Rejection {
    let status = match exception.code {
        ErrorCode::Validation | ErrorCode::InvalidTarget => StatusCode::BAD_REQUEST,
        ErrorCode::Upstream => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::NotConfigured | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiError::from(exception)))
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
