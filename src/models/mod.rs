//! Data models: the Load domain record and the TMS wire schema

pub mod auth;
pub mod common;
pub mod details;
pub mod load;
pub mod shipment;

pub use auth::*;
pub use common::*;
pub use details::*;
pub use load::*;
pub use shipment::*;
