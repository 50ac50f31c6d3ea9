pub mod speech;
pub mod translation;
