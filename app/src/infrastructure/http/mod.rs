pub mod header;
pub mod middleware;
