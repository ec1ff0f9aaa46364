//! Gradient stop synthesis core
//!
//! # Architecture
//!
//! - `color` - packed ARGB codec and conversion to/from `palette` colors
//! - `types` - `ColorStop` and `ColorSpace`
//! - `reserved` - the fixed reserved positions and related constants
//! - `segment` - per-pair interpolation segments
//! - `synthesize` - inserting interpolated stops at reserved positions
//! - `undo` - removing them again

pub mod color;
pub mod reserved;
pub mod segment;
mod synthesize;
pub mod types;
mod undo;

pub use color::{Argb, ArgbComponents};
pub use reserved::{reserved_positions, DELTA_STOP, NUMBER_OF_CHROMATIC_STOPS};
pub use segment::{build_segments, Segment};
pub use synthesize::synthesize;
pub use types::{ColorSpace, ColorStop};
pub use undo::undo;
