//! HTTP client and endpoint wrappers

pub mod client;
pub mod deployments;
pub mod repos;
