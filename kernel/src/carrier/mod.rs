//! Carrier module: the element model and the instrumentation state.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod element;
pub mod instrument;
