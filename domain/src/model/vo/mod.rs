pub mod number;
pub mod resource;
pub mod slurm_job;

#[rustfmt::skip]
pub use self::{
    number::SlurmNumber,
    resource::SlurmResource,
    slurm_job::{SlurmJobInfo, SlurmJobsResponse},
};
