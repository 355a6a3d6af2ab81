//! HTTP handlers and route configuration.

mod health;
mod jobs;
mod queues;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/queues")
                    .route("", web::post().to(queues::create_queue))
                    .route("/{name}", web::get().to(queues::get_queue))
                    .route("/{name}", web::delete().to(queues::delete_queue))
                    .route("/{name}/jobs", web::post().to(jobs::add_job))
                    .route("/{name}/jobs", web::get().to(jobs::get_all_jobs))
                    // Must stay ahead of the `{uid}` route.
                    .route("/{name}/jobs/next", web::get().to(jobs::get_next_job))
                    .route("/{name}/jobs/{uid}", web::get().to(jobs::get_job))
                    .route(
                        "/{name}/jobs/{uid}/status",
                        web::put().to(jobs::update_job_status),
                    ),
            ),
    );
}
