mod container;

use std::sync::Arc;

use anyhow::Context;
use domain::service::SlurmRestApi;
use service::prelude::*;

use crate::{
    config::ProxyConfig,
    infrastructure::{
        http::middleware::{MiddlewareMenu, SlurmAuthMiddleware},
        service::slurm_rest::SlurmRestClient,
    },
};

pub use self::container::Container;

impl Container {
    pub fn new(config: &ProxyConfig) -> anyhow::Result<Self> {
        let auth_middleware = Arc::new(
            SlurmAuthMiddleware::new(&config.slurm_user_name, &config.slurm_user_token)
                .context("SLURM credentials are not valid header values")?,
        );
        let http_client = MiddlewareMenu::builder().auth(auth_middleware).build().make();

        let slurm_rest: Arc<dyn SlurmRestApi> = Arc::new(SlurmRestClient::new(
            config.restd_base(),
            http_client,
            config.request_timeout(),
        ));

        let container = Container::builder()
            .slurm_view(Arc::new(SlurmViewServiceImpl::new(slurm_rest)))
            .build();

        Ok(container)
    }
}
