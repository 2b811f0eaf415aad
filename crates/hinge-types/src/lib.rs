//! Foundation types for hinge.
//!
//! hinge is the platform-integration layer between a dual-screen handheld's
//! input hardware and an immediate-mode UI library. This crate contains the
//! platform-agnostic types shared by all hinge crates: logical keys, UI input
//! events, the abstract UI IO trait, backend configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
pub mod ui;
