//! HTTP surface: one deploy endpoint, POST only
use crate::{packer, DeployPayload};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;

const SUCCESS_BODY: &str = "Packer configuration file 'kong.pkr.hcl' generated successfully.";
const RENDER_FAILURE_BODY: &str = "Failed to generate Packer configuration";

#[derive(Clone)]
struct AppState {
    out_file: std::path::PathBuf,
}

/// Build the service router. Registering the route with `post` makes axum
/// answer 405 for every other method on it.
pub fn router(out_file: std::path::PathBuf) -> Router {
    Router::new()
        .route("/deployKongApiGateway", post(deploy_kong_api_gateway))
        .with_state(AppState { out_file })
}

/// Decode and validate the payload, then write the Packer configuration.
///
/// Decode and validation errors go back to the caller verbatim as 400.
/// Write failures are logged with their cause but reported to the caller
/// only as a generic 500; the request never takes the process down.
async fn deploy_kong_api_gateway(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, String) {
    let payload = match DeployPayload::from_json(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::debug!("rejected deploy request: {}", err);
            return (StatusCode::BAD_REQUEST, err.to_string());
        }
    };

    if let Err(err) = packer::write_packer_config(&payload, &state.out_file) {
        tracing::error!(
            "failed to write Packer configuration {}: {}",
            state.out_file.display(),
            err
        );
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            RENDER_FAILURE_BODY.to_string(),
        );
    }

    tracing::info!(
        "generated Packer configuration for {} at {}",
        payload.kong_api_gateway_domain(),
        state.out_file.display()
    );
    (StatusCode::OK, SUCCESS_BODY.to_string())
}
