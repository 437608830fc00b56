//! Data transfer objects returned by the HTTP layer.

pub mod member;
