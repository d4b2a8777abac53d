//! Common types and utilities for the argbind workspace.
//!
//! This crate provides foundational types used across all argbind crates:
//! - Source spans (`Span`) over parameter-list text
//! - Parser limits and thresholds

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Centralized limits and thresholds
pub mod limits;
