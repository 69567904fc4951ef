use axum::{Router, routing::get};
use storage::Database;

use crate::features::{health, picks, results};
use crate::middleware::auth::ApiKeys;

pub fn router(api_keys: ApiKeys) -> Router<Database> {
    let api = Router::new()
        .nest("/results", results::routes::routes(api_keys))
        .nest("/picks", picks::routes::routes());

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
}
