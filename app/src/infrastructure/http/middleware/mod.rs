mod slurm_auth;

use std::sync::Arc;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use typed_builder::TypedBuilder;

pub use self::slurm_auth::SlurmAuthMiddleware;

#[derive(TypedBuilder)]
pub struct MiddlewareMenu {
    auth: Arc<SlurmAuthMiddleware>,
}

impl MiddlewareMenu {
    pub fn make(self) -> ClientWithMiddleware {
        let Self { auth } = self;

        ClientBuilder::new(reqwest::Client::new()).with_arc(auth).build()
    }
}
