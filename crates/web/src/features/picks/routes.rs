use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_picks, submit_picks};

pub fn routes() -> Router<Database> {
    Router::new().route("/event/:event_id", get(get_picks).post(submit_picks))
}
