//! Command implementations

pub mod activation;
pub mod banners;
