//! Queue handlers.

use actix_web::{HttpResponse, web};

use jobengine_core::domain::Queue;
use jobengine_shared::ApiResponse;
use jobengine_shared::dto::{CreateQueueRequest, QueueResponse};

use crate::middleware::access::AccessKey;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn queue_response(queue: &Queue) -> QueueResponse {
    QueueResponse {
        name: queue.name.clone(),
        size: queue.size,
    }
}

/// POST /api/queues
pub async fn create_queue(
    state: web::Data<AppState>,
    body: web::Json<CreateQueueRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state.controller.create_queue(&req.name, &req.access_key).await?;

    let created = QueueResponse {
        name: req.name,
        size: 0,
    };
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(created, "Queue created")))
}

/// GET /api/queues/{name}
pub async fn get_queue(
    state: web::Data<AppState>,
    name: web::Path<String>,
    key: AccessKey,
) -> AppResult<HttpResponse> {
    let queue = state
        .controller
        .get_queue(&name, &key.0)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("queue '{}'", name)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(queue_response(&queue))))
}

/// DELETE /api/queues/{name}
pub async fn delete_queue(
    state: web::Data<AppState>,
    name: web::Path<String>,
    key: AccessKey,
) -> AppResult<HttpResponse> {
    state.controller.delete_queue(&name, &key.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
