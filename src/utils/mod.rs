//! Shared utilities for the condition.
//!
//! These helpers are intentionally small and deterministic, as they run inside Stylus / WASM.

pub mod bytes;
