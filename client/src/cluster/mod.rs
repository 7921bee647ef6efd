//! Cluster connection endpoints of the server API.

mod api;

pub use api::ClusterApi;
