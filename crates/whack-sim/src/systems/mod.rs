//! Per-tick systems, run by the engine in order.

pub mod moles;
