mod rect;

use std::collections::HashMap;

pub use rect::Rect;

/// Screen positions by element ID, supplied by the host's layout pass.
/// This crate never computes positions itself; it only reads them for
/// hit-testing.
pub type LayoutResult = HashMap<String, Rect>;
