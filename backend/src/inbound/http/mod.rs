//! HTTP inbound adapter exposing the pet REST endpoints.

pub mod error;
pub mod health;
pub mod payload;
pub mod pets;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
