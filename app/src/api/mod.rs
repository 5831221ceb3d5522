pub mod cluster;
mod error;
pub mod job;
pub mod root;

use actix_web::web;

pub use self::error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::index)
        .service(cluster::get_clusters)
        .service(job::get_jobs)
        .service(job::get_job);
}
