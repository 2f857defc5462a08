//! Task authorization and lifecycle management.
//!
//! Tasks are the messages organizations exchange to drive a shared
//! process. This module decides, for every create, read, update, delete
//! and search on a task, whether the caller may perform it, and enforces
//! the lifecycle
//!
//! ```text
//! draft -> requested -> in-progress -> completed | failed
//! ```
//!
//! where the requester organization drafts and issues a task and the local
//! recipient organization moves it forward. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Structural validation and immutability checks in [`validation`]
//! - The lifecycle authorization engine in [`authorization`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod authorization;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
