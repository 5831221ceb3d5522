pub mod http;
pub mod ioc;
pub mod service;
pub mod telemetry;
