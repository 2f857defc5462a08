//! Taskgate: task authorization and lifecycle engine for federated
//! process-exchange nodes.
//!
//! Organizations run independent nodes that exchange task messages to drive
//! a shared business process. This crate decides, for every operation on a
//! task, whether the calling principal may perform it, and enforces the
//! multi-party lifecycle a task follows from the requester organization to
//! the recipient organization.
//!
//! # Architecture
//!
//! Taskgate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for directories, catalogs, stores
//!   and notifiers
//! - **Adapters**: In-memory implementations of the ports
//!
//! # Modules
//!
//! - [`config`]: Node configuration
//! - [`identity`]: Organizations, principals and certificate authentication
//! - [`process`]: Process URIs and the process allow-list catalog
//! - [`task`]: Task validation, authorization and access

pub mod config;
pub mod identity;
pub mod process;
pub mod task;
