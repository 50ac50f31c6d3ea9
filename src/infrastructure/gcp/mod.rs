pub mod token;

pub use token::{AccessTokenProvider, ServiceAccountTokenProvider, StaticTokenProvider};
