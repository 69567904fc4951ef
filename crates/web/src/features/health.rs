use axum::{Json, extract::State};
use serde_json::{Value, json};
use storage::Database;

pub async fn health_check(State(db): State<Database>) -> Json<Value> {
    match db.ping().await {
        Ok(()) => Json(json!({ "status": "healthy", "database": "connected" })),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            Json(json!({ "status": "unhealthy", "database": "disconnected" }))
        }
    }
}
