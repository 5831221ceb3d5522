pub mod cluster;
pub mod job;
pub mod job_detail;

#[rustfmt::skip]
pub use self::{
    cluster::{Cluster, ClusterResponse},
    job::{Job, JobResponse},
    job_detail::{JobDetail, JobDetailsResponse},
};
