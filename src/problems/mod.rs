//! Problem implementations for the scan engine.
//!
//! - [`linear`]   : maximum non-adjacent subset sum over a slice.
//! - [`circular`] : the same on a cycle, solved as two linear passes.

pub mod circular;
pub mod linear;
