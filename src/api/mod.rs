//! Backend API module for the HTTP update endpoints

mod client;
mod error;
mod payload;
mod traits;

pub use client::BackendClient;
pub use error::ApiError;
pub use payload::UpdateRequest;
pub use traits::BackendClientTrait;

#[cfg(test)]
pub use payload::{BusDetailsUpdate, BusFareUpdate, BusRouteUpdate, BusTimingUpdate, BusTypeUpdate};
#[cfg(test)]
pub use traits::MockBackendClientTrait;
