//! Trait abstraction for the backend client to enable mocking in tests

use super::error::ApiError;
use super::payload::{
    BusDetailsUpdate, BusFareUpdate, BusRouteUpdate, BusTimingUpdate, BusTypeUpdate,
};
use async_trait::async_trait;

/// Trait for backend operations, enabling mocking in tests
///
/// Each call is one POST; the returned string is the raw response body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClientTrait: Send + Sync {
    /// POST /api/update-bus-details (multipart)
    async fn update_bus_details(&self, update: &BusDetailsUpdate) -> Result<String, ApiError>;

    /// POST /api/update-bus-route
    async fn update_bus_route(&self, update: &BusRouteUpdate) -> Result<String, ApiError>;

    /// POST /api/update-bus-fare
    async fn update_bus_fare(&self, update: &BusFareUpdate) -> Result<String, ApiError>;

    /// POST /api/update-bus-timing
    async fn update_bus_timing(&self, update: &BusTimingUpdate) -> Result<String, ApiError>;

    /// POST /api/update-bus-type
    async fn update_bus_type(&self, update: &BusTypeUpdate) -> Result<String, ApiError>;
}
