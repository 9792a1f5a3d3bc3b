mod fallback;
mod locator;
mod timecode;
mod types;

pub use locator::locate_markers;
pub(crate) use locator::locate_with_schema;
pub use timecode::parse_seconds;
pub use types::{Marker, MarkerSchema};

// Exports for testing
pub use fallback::{LABEL_FIELDS, TIME_FIELDS};
