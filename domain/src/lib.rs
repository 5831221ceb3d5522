pub mod error;
pub mod model;
pub mod service;

pub use self::error::UpstreamError;
