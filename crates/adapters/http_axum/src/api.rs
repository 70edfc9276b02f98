//! JSON inspection handlers for the profile document.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;

use folio_app::ports::ProfileSource;
use folio_domain::profile::ProfileDocument;
use folio_domain::render::RenderPlan;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile))
        .route("/render", get(render))
}

/// `GET /api/profile` — the parsed document; malformed sections are `null`.
async fn profile(State(state): State<AppState>) -> Result<Json<ProfileDocument>, ApiError> {
    let document = state.render_service.source().fetch().await?;
    Ok(Json(document))
}

/// `GET /api/render` — the patches the page would apply, plus the sections
/// that were skipped.
async fn render(State(state): State<AppState>) -> Result<Json<RenderPlan>, ApiError> {
    let plan = state.render_service.plan().await?;
    Ok(Json(plan))
}
