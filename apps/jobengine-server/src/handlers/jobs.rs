//! Job handlers.

use actix_web::{HttpResponse, web};

use jobengine_core::domain::{Job, unix_now};
use jobengine_shared::ApiResponse;
use jobengine_shared::dto::{AddJobRequest, JobResponse, UpdateJobStatusRequest};

use crate::config::JobDefaults;
use crate::middleware::access::AccessKey;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn job_response(job: Job) -> JobResponse {
    JobResponse {
        uid: job.uid,
        state: job.state.to_string(),
        priority: job.priority,
        last_updated: job.last_updated,
        keep_minutes: job.keep_minutes,
        timeout_minutes: job.timeout_minutes,
        timeout_time: job.timeout_time,
        content: job.content,
    }
}

/// Build a queued job from the request, filling gaps from the defaults.
fn job_from_request(req: AddJobRequest, defaults: &JobDefaults) -> Job {
    let uid = req.uid.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let deadline = req
        .timeout_time
        .unwrap_or_else(|| unix_now().saturating_add(defaults.queued_ttl_secs));

    Job::new(uid, req.priority)
        .with_keep_minutes(req.keep_minutes.unwrap_or(defaults.keep_minutes))
        .with_timeout_minutes(req.timeout_minutes.unwrap_or(defaults.timeout_minutes))
        .with_timeout_time(deadline)
        .with_content(req.content.unwrap_or_default())
}

/// POST /api/queues/{name}/jobs
pub async fn add_job(
    state: web::Data<AppState>,
    name: web::Path<String>,
    key: AccessKey,
    body: web::Json<AddJobRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let sort = req.sort.unwrap_or(true);
    let job = job_from_request(req, &state.job_defaults);
    let response = job_response(job.clone());

    state.controller.add_job(job, &name, &key.0, sort).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(response)))
}

/// GET /api/queues/{name}/jobs
pub async fn get_all_jobs(
    state: web::Data<AppState>,
    name: web::Path<String>,
    key: AccessKey,
) -> AppResult<HttpResponse> {
    let jobs: Vec<JobResponse> = state
        .controller
        .get_all_jobs(&name, &key.0)
        .await?
        .into_iter()
        .map(job_response)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(jobs)))
}

/// GET /api/queues/{name}/jobs/next
///
/// Answers with the first in-progress job from the head of the queue.
pub async fn get_next_job(
    state: web::Data<AppState>,
    name: web::Path<String>,
    key: AccessKey,
) -> AppResult<HttpResponse> {
    let job = state
        .controller
        .get_next_job(&name, &key.0)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no in-progress job in queue '{}'", name)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(job_response(job))))
}

/// GET /api/queues/{name}/jobs/{uid}
pub async fn get_job(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    key: AccessKey,
) -> AppResult<HttpResponse> {
    let (name, uid) = path.into_inner();
    let job = state
        .controller
        .get_job(&uid, &name, &key.0)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("job '{uid}' in queue '{name}'")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(job_response(job))))
}

/// PUT /api/queues/{name}/jobs/{uid}/status
pub async fn update_job_status(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    key: AccessKey,
    body: web::Json<UpdateJobStatusRequest>,
) -> AppResult<HttpResponse> {
    let (name, uid) = path.into_inner();
    state
        .controller
        .update_job_status(&uid, &body.status, &name, &key.0)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
