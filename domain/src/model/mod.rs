pub mod entity;
pub mod nullable;
pub mod vo;
