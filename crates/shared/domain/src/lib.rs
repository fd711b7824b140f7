//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, settings sources or decision logic, just data and simple helpers.

pub mod auth;
pub mod constants;
pub mod extension;
pub mod registry;
