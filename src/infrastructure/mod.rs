pub mod config;
pub mod gcp;
pub mod http;
pub mod repositories;
