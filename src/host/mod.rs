//! Host-facing contract and stdio bridge for driving the engine from another process.

pub mod contract;
pub mod handler;
pub mod stdio;
