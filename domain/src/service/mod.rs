mod slurm_rest_api;
mod slurm_view_service;

#[rustfmt::skip]
pub use self::{
    slurm_rest_api::SlurmRestApi,
    slurm_view_service::SlurmViewService,
};
