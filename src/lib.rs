/*!
# chromatic - perceptual color stops for design-tool gradients

Augments a user-authored gradient with dense, perceptually interpolated color
stops at fixed reserved positions, and removes them again on request.

## Architecture

```text
document / host selection
        │
        ▼
 host::apply_command ──► gradient::synthesize ──► gradient::build_segments
        │                       │                          │
        │                       └──────── gradient::color (ARGB codec, palette)
        ▼
 gradient::undo
```

- [`gradient`] - the stop synthesis core: color codec, segments, synthesis, undo
- [`host`] - capability traits for the host scene graph and the apply loop
- [`host::document`] - a JSON document implementing the host traits

## Example

```rust
use chromatic::gradient::{synthesize, undo, Argb, ColorSpace, ColorStop};

let stops = vec![
    ColorStop::new(0.0, Argb::from_components(255, 255, 0, 0)),
    ColorStop::new(1.0, Argb::from_components(255, 0, 0, 255)),
];

let dense = synthesize(&stops, ColorSpace::Lab).unwrap();
assert_eq!(dense.len(), 17);
assert_eq!(undo(&dense), stops);
```
*/

pub mod gradient;
pub mod host;

pub use gradient::{Argb, ColorSpace, ColorStop};
pub use host::{apply_command, ApplyReport, Command};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum ChromaticError {
    #[error("Item is not eligible: {0}")]
    IneligibleItem(String),

    #[error("Synthesis precondition failed: {0}")]
    SynthesisPrecondition(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Document error: {0}")]
    DocumentError(String),
}

pub type Result<T> = std::result::Result<T, ChromaticError>;
