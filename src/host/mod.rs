//! Host scene-graph capabilities and the command apply loop
//!
//! The design tool owns shapes and their fills. This module only describes
//! what it needs from them:
//!
//! - `Fill` - a cloneable paint that may expose color stops
//! - `SceneItem` - a selected shape whose fill can be read and replaced
//! - `Notifier` - shows a message when nothing in the selection could be used
//!
//! [`apply_command`] runs one of the four [`Command`]s over a selection. Each
//! item is handled independently; a failure on one item is logged and
//! counted but never stops the rest.
//!
//! # Example
//!
//! ```rust
//! use chromatic::host::document::{Document, DocumentFill, DocumentItem};
//! use chromatic::host::{apply_command, Command, Notifier};
//! use chromatic::{Argb, ColorStop};
//!
//! struct Silent;
//! impl Notifier for Silent {
//!     fn notify(&mut self, _title: &str, _message: &str) {}
//! }
//!
//! let mut doc = Document {
//!     items: vec![DocumentItem {
//!         name: "rect".to_string(),
//!         fill: Some(DocumentFill::LinearGradient {
//!             stops: vec![
//!                 ColorStop::new(0.0, Argb(0xffff0000)),
//!                 ColorStop::new(1.0, Argb(0xff0000ff)),
//!             ],
//!         }),
//!     }],
//! };
//!
//! let report = apply_command(&mut doc.items, Command::LabGradient, &mut Silent);
//! assert_eq!(report.updated, 1);
//! ```

pub mod document;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::gradient::{synthesize, undo, ColorSpace, ColorStop};
use crate::{ChromaticError, Result};

pub const DIALOG_TITLE: &str = "Chromatic Gradients Plugin";
pub const DIALOG_MESSAGE: &str = "Please select at least one shape with a gradient fill.";

/// A paint attached to a scene item.
///
/// `Clone` must produce an independent copy; the apply loop edits the clone
/// and writes it back, leaving the original untouched on failure.
pub trait Fill: Clone {
    /// Color stops, or `None` for fills that have none (e.g. solid colors).
    fn color_stops(&self) -> Option<Vec<ColorStop>>;

    /// Replace the color stops. Hosts may reject lists they consider invalid.
    fn set_color_stops(&mut self, stops: Vec<ColorStop>) -> Result<()>;
}

/// A selected shape.
pub trait SceneItem {
    type Fill: Fill;

    /// Label used in logs.
    fn name(&self) -> &str;

    fn fill(&self) -> Option<&Self::Fill>;

    fn set_fill(&mut self, fill: Self::Fill) -> Result<()>;
}

/// User-facing message channel.
pub trait Notifier {
    fn notify(&mut self, title: &str, message: &str);
}

/// Commands exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    LabGradient,
    LrgbGradient,
    LchGradient,
    UndoChromaticGradient,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::LabGradient,
        Command::LrgbGradient,
        Command::LchGradient,
        Command::UndoChromaticGradient,
    ];

    /// Name the host registers the command under
    pub fn name(&self) -> &'static str {
        match self {
            Command::LabGradient => "labGradient",
            Command::LrgbGradient => "lrgbGradient",
            Command::LchGradient => "lchGradient",
            Command::UndoChromaticGradient => "undoChromaticGradient",
        }
    }

    /// Color space for synthesis commands, `None` for undo.
    pub fn color_space(&self) -> Option<ColorSpace> {
        match self {
            Command::LabGradient => Some(ColorSpace::Lab),
            Command::LrgbGradient => Some(ColorSpace::Lrgb),
            Command::LchGradient => Some(ColorSpace::Lch),
            Command::UndoChromaticGradient => None,
        }
    }

    /// Compute the new stops for one gradient.
    pub fn transform(&self, stops: &[ColorStop]) -> Result<Vec<ColorStop>> {
        match self.color_space() {
            Some(space) => synthesize(stops, space),
            None => Ok(undo(stops)),
        }
    }
}

impl From<ColorSpace> for Command {
    fn from(space: ColorSpace) -> Self {
        match space {
            ColorSpace::Lab => Command::LabGradient,
            ColorSpace::Lrgb => Command::LrgbGradient,
            ColorSpace::Lch => Command::LchGradient,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Command {
    type Err = ChromaticError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ChromaticError::DocumentError(format!("Unknown command '{}'", s)))
    }
}

/// Outcome of one command over a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ApplyReport {
    /// Items whose fill was rewritten
    pub updated: usize,
    /// Items skipped because of an error
    pub failed: usize,
}

impl ApplyReport {
    /// True when nothing in the selection could be processed. An empty
    /// selection counts as all-failed.
    pub fn all_failed(&self) -> bool {
        self.updated == 0
    }
}

/// Run `command` over every item, isolating per-item failures.
///
/// If no item could be processed, `notifier` receives a single message.
pub fn apply_command<I: SceneItem>(
    items: &mut [I],
    command: Command,
    notifier: &mut impl Notifier,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for item in items.iter_mut() {
        match apply_to_item(item, command) {
            Ok(stops) => {
                debug!(item = item.name(), command = %command, stops, "updated fill");
                report.updated += 1;
            }
            Err(e) => {
                warn!(item = item.name(), command = %command, "skipping item: {}", e);
                report.failed += 1;
            }
        }
    }

    if report.all_failed() {
        notifier.notify(DIALOG_TITLE, DIALOG_MESSAGE);
    }

    report
}

/// Returns the number of stops written.
fn apply_to_item<I: SceneItem>(item: &mut I, command: Command) -> Result<usize> {
    let mut fill = item
        .fill()
        .ok_or_else(|| ChromaticError::IneligibleItem("item has no fill".to_string()))?
        .clone();

    let stops = fill.color_stops().ok_or_else(|| {
        ChromaticError::IneligibleItem("fill has no color stops".to_string())
    })?;

    let new_stops = command.transform(&stops)?;
    let count = new_stops.len();

    fill.set_color_stops(new_stops)?;
    item.set_fill(fill)?;

    Ok(count)
}
