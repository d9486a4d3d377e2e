//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local pet store backing both pet ports.

pub mod memory;
