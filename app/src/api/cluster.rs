use actix_web::{get, web};
use domain::{model::entity::ClusterResponse, service::SlurmViewService};

use super::ApiError;

#[get("/clusters")]
pub async fn get_clusters(
    service: web::Data<dyn SlurmViewService>,
) -> Result<web::Json<ClusterResponse>, ApiError> {
    Ok(web::Json(service.clusters().await?))
}
