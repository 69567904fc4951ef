use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_accuracy, get_fight_result, get_leaderboard, record_result};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(record_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/accuracy/:user_id/:event_id", get(get_accuracy))
        .route("/leaderboard/:event_id", get(get_leaderboard))
        .route("/fight/:fight_id", get(get_fight_result))
        .merge(protected)
}
