//! HTTP routes over the activity catalog.
//!
//! | Route                           | Method | Success                    |
//! |---------------------------------|--------|----------------------------|
//! | `/`                             | GET    | 307 to `/static/index.html` |
//! | `/health`                       | GET    | 200 health report          |
//! | `/activities`                   | GET    | 200 full catalog           |
//! | `/activities/{name}/signup`     | POST   | 200 confirmation message   |
//! | `/activities/{name}/unregister` | DELETE | 200 confirmation message   |

use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use mergington_core::{Catalog, CatalogSnapshot};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Location the root route redirects to.
pub const INDEX_PATH: &str = "/static/index.html";

/// Shared router state.
pub type AppState = Arc<Catalog>;

/// `?email=` query accepted by the registration routes.
///
/// When `email` is repeated the last value wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailQuery {
    /// Participant email. Not validated.
    pub email: String,
}

impl EmailQuery {
    /// Pick the `email` value out of decoded query pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, email)| Self { email })
            .ok_or_else(|| {
                Error::InvalidQuery(
                    "Failed to deserialize query string: missing field `email`".to_string(),
                )
            })
    }
}

type QueryPairs = std::result::Result<Query<Vec<(String, String)>>, QueryRejection>;
type ActivityPath = std::result::Result<Path<String>, PathRejection>;

/// Body of a successful registration change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server version.
    pub version: String,
    /// Number of activities in the catalog.
    pub activity_count: usize,
}

/// Build the API router over `catalog`.
pub fn router(catalog: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
        .with_state(catalog)
}

#[tracing::instrument]
async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

#[tracing::instrument(skip(catalog))]
async fn health(State(catalog): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        activity_count: catalog.len(),
    })
}

#[tracing::instrument(skip(catalog))]
async fn list_activities(State(catalog): State<AppState>) -> Json<CatalogSnapshot> {
    Json(catalog.list().await)
}

#[tracing::instrument(skip_all, fields(activity))]
async fn signup(
    State(catalog): State<AppState>,
    path: ActivityPath,
    query: QueryPairs,
) -> Result<Json<MessageResponse>> {
    let Path(name) = path.map_err(invalid_path)?;
    let EmailQuery { email } = email_query(query)?;
    tracing::Span::current().record("activity", name.as_str());
    catalog.add_participant(&name, &email).await?;
    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {name}"),
    }))
}

#[tracing::instrument(skip_all, fields(activity))]
async fn unregister(
    State(catalog): State<AppState>,
    path: ActivityPath,
    query: QueryPairs,
) -> Result<Json<MessageResponse>> {
    let Path(name) = path.map_err(invalid_path)?;
    let EmailQuery { email } = email_query(query)?;
    tracing::Span::current().record("activity", name.as_str());
    catalog.remove_participant(&name, &email).await?;
    Ok(Json(MessageResponse {
        message: format!("Removed {email} from {name}"),
    }))
}

fn email_query(query: QueryPairs) -> Result<EmailQuery> {
    let Query(pairs) = query.map_err(|rejection| Error::InvalidQuery(rejection.body_text()))?;
    EmailQuery::from_pairs(pairs)
}

fn invalid_path(rejection: PathRejection) -> Error {
    Error::InvalidPath(rejection.body_text())
}
