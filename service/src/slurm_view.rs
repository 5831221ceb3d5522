use std::sync::Arc;

use domain::{
    model::{
        entity::{ClusterResponse, Job, JobDetailsResponse, JobResponse},
        vo::{SlurmJobInfo, SlurmJobsResponse},
    },
    service::{SlurmRestApi, SlurmViewService},
    UpstreamError,
};

pub struct SlurmViewServiceImpl {
    client: Arc<dyn SlurmRestApi>,
}

impl SlurmViewServiceImpl {
    pub fn new(client: Arc<dyn SlurmRestApi>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl SlurmViewService for SlurmViewServiceImpl {
    async fn clusters(&self) -> Result<ClusterResponse, UpstreamError> {
        let resp = self.client.get_clusters().await?;
        tracing::debug!(
            clusters = ?resp.clusters().filter_map(|c| c.name()).collect::<Vec<_>>(),
            "passing clusters through"
        );
        Ok(resp)
    }

    async fn jobs(&self) -> Result<JobResponse, UpstreamError> {
        let SlurmJobsResponse { jobs } = self.client.get_jobs().await?;
        tracing::debug!("summarizing {} jobs", jobs.len());
        Ok(JobResponse {
            jobs: jobs.into_iter().map(summarize).collect(),
        })
    }

    async fn job(&self, job_id: &str) -> Result<JobDetailsResponse, UpstreamError> {
        self.client.get_job(job_id).await
    }
}

/// Flattens one upstream job: unwraps the number wrappers and keeps only the
/// first state.
pub fn summarize(job: SlurmJobInfo) -> Job {
    let SlurmJobInfo {
        job_id,
        name,
        user_name,
        partition,
        job_state,
        submit_time,
        start_time,
        end_time,
        nodes,
        cpus,
        memory_per_node,
    } = job;

    Job {
        job_id,
        name,
        user_name,
        partition,
        state: job_state.into_iter().next().unwrap_or_default(),
        submit_time: submit_time.value(),
        start_time: start_time.value(),
        end_time: end_time.value(),
        nodes,
        cpus: cpus.value(),
        memory_per_node: memory_per_node.value(),
    }
}
