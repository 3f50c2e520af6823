//! HTTP handlers for all web routes.

pub mod page;
pub mod upload;
