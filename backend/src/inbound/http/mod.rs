//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod shipping;
pub mod state;

pub use error::ApiResult;
