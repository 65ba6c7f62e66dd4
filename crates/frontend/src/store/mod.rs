//! Application state partitions.
//!
//! Each partition is a [`slice::Slice`] with its own initial value and
//! transition tables; reactive stores wrap a slice and expose a single
//! `dispatch` entry point for writes.

pub mod api;
pub mod slice;

pub use api::{api_slice, use_api_store, ApiState, ApiStore};
pub use slice::{Action, ExtraReducers, Phase, Slice};
