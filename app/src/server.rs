use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use domain::service::SlurmViewService;

use crate::api;
use crate::config::ProxyConfig;
use crate::infrastructure::ioc::Container;

pub async fn initialize_web_host(config: &ProxyConfig, container: Container) -> std::io::Result<()> {
    let slurm_view: web::Data<dyn SlurmViewService> = web::Data::from(container.slurm_view);
    let allowed_origin = config.allowed_origin.clone();

    tracing::info!(
        "Server listening on {}:{}",
        config.bind_address,
        config.bind_port
    );
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origin))
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(slurm_view.clone())
            .configure(api::configure)
    })
    .bind((config.bind_address.as_str(), config.bind_port))?
    .run()
    .await
}

/// Only `origin` may read responses cross-site.
pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(["GET"])
        .allow_any_header()
        .max_age(86400)
}
