use std::sync::Arc;

use domain::service::SlurmViewService;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct Container {
    pub slurm_view: Arc<dyn SlurmViewService>,
}
