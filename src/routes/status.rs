use axum::{Json, Router, routing::get};

use crate::models::ServiceStatus;

pub fn routes() -> Router {
    Router::new().route("/", get(get_status))
}

async fn get_status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "API running".to_string(),
    })
}
