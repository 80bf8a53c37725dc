//! Frame rendering.
//!
//! Split in two halves so a frame stays a pure function of
//! `(frame index, dataset, config)`:
//!
//! - `plan`: backend-free classification of what each frame shows
//! - `frame`: Plotters drawing of a computed plan

pub mod frame;
pub mod plan;

pub use frame::*;
pub use plan::*;
