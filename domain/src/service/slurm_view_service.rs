use crate::error::UpstreamError;
use crate::model::entity::{ClusterResponse, JobDetailsResponse, JobResponse};

/// What the HTTP handlers serve: upstream data in the frontend's shape.
#[async_trait::async_trait]
pub trait SlurmViewService: Send + Sync {
    async fn clusters(&self) -> Result<ClusterResponse, UpstreamError>;
    async fn jobs(&self) -> Result<JobResponse, UpstreamError>;
    async fn job(&self, job_id: &str) -> Result<JobDetailsResponse, UpstreamError>;
}
