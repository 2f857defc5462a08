//! Adapter implementations for the identity ports.

pub mod memory;
