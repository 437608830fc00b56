//! Domain aggregates exposed by the member search service.

pub mod condition;
pub mod member;
pub mod team;
pub mod types;
