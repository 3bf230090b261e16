//! Raw-vs-visible filtering – decides which entries count toward the
//! position space the widget renders.

use super::entry::{Entry, EntryFlags};

/// Presentation knobs that affect which raw positions are visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOptions {
    /// Hide markers that carry a channel number of their own.
    pub hide_numbered_markers: bool,
}

impl ViewOptions {
    /// True when `entry` does not count toward visible positions.
    pub fn excludes(&self, entry: &Entry) -> bool {
        entry.flags.contains(EntryFlags::INVISIBLE)
            || (self.hide_numbered_markers
                && entry.flags.contains(EntryFlags::NUMBERED_MARKER))
    }
}
