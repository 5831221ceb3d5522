use actix_web::{get, web};
use domain::{
    model::entity::{JobDetailsResponse, JobResponse},
    service::SlurmViewService,
};

use super::ApiError;

#[get("/jobs")]
pub async fn get_jobs(
    service: web::Data<dyn SlurmViewService>,
) -> Result<web::Json<JobResponse>, ApiError> {
    Ok(web::Json(service.jobs().await?))
}

#[get("/job/{job_id}")]
pub async fn get_job(
    service: web::Data<dyn SlurmViewService>,
    job_id: web::Path<String>,
) -> Result<web::Json<JobDetailsResponse>, ApiError> {
    Ok(web::Json(service.job(&job_id).await?))
}
