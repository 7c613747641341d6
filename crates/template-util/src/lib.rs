//! combine-template-util - JSON value helpers shared by the combine-template crates.
//!
//! The combiner needs two capabilities from its environment: a deep clone that
//! never shares containers with its input, and an exact equality check used
//! to tell which positions of a snapshot actually changed.

pub mod json_clone;
pub mod json_equal;

pub use json_clone::clone;
pub use json_equal::deep_equal;
