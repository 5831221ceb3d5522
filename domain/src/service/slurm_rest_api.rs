use crate::error::UpstreamError;
use crate::model::entity::{ClusterResponse, JobDetailsResponse};
use crate::model::vo::SlurmJobsResponse;

/// Read access to slurmrestd. Every call is exactly one outbound request.
#[async_trait::async_trait]
pub trait SlurmRestApi: Send + Sync {
    async fn get_clusters(&self) -> Result<ClusterResponse, UpstreamError>;
    async fn get_jobs(&self) -> Result<SlurmJobsResponse, UpstreamError>;
    async fn get_job(&self, job_id: &str) -> Result<JobDetailsResponse, UpstreamError>;
}
