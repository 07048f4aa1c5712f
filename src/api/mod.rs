//! API client module

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod pagination;

pub use auth::TokenManager;
pub use client::{with_cancellation, PageResult, ShipmentClient, DEFAULT_TIMEOUT};
pub use pagination::{to_offset, PageQuery, DEFAULT_PAGE_SIZE};
