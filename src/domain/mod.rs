//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - joined monthly observations (`TimeSeriesPoint`)
//! - the chair tenure configuration (`ChairTenure`, `default_chairs`)
//! - derived per-chair paths (`TenurePath`)
//! - run configuration (`DataConfig`, `RenderConfig`, `TargetZone`)

pub mod chairs;
pub mod types;

pub use chairs::*;
pub use types::*;
