//! Adapter implementations for the process catalog port.

pub mod memory;
