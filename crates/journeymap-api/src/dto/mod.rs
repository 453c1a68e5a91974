mod request;
mod response;

pub use request::{ClustersQuery, FilterQuery, ViewQuery};
pub use response::{ClustersResponse, HealthResponse, LocationsResponse, ViewportResponse};
