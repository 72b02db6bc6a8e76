//! Data transfer objects for the move service.
//!
//! Request and response bodies for the three game endpoints, serializable
//! via `serde`. These types bridge the domain model and the JSON payloads.
mod request;
mod response;

pub use request::*;
pub use response::*;
