//! `phillips-curve` library crate.
//!
//! The binary (`phillips`) is a thin wrapper around this library so that:
//!
//! - the load/segment/render pipeline is testable without spawning processes
//! - modules are reusable (e.g., alternate front-ends or batch exports)
//! - code stays easy to navigate as the project grows

pub mod anim;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod render;
pub mod segment;
