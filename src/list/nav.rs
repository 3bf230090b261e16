//! Navigation reads around the cursor – neighbours, marker jumps and
//! find-by-initial.

use crate::core::entry::{Entry, EntryFlags};

use super::ServiceList;

impl ServiceList {
    /// Entry under the cursor, `None` while the cursor is invalid.
    pub fn current(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Entry before the cursor, wrapping to the last entry at the top.
    pub fn prev(&self) -> Option<&Entry> {
        if !self.cursor_valid() {
            return None;
        }
        let index = if self.cursor == 0 {
            self.entries.len() - 1
        } else {
            self.cursor - 1
        };
        self.entries.get(index)
    }

    /// Entry after the cursor, wrapping to the first entry at the bottom.
    pub fn next(&self) -> Option<&Entry> {
        if !self.cursor_valid() {
            return None;
        }
        let index = (self.cursor + 1) % self.entries.len();
        self.entries.get(index)
    }

    /// Raw index of the first entry whose display name starts with `c`.
    ///
    /// Entries the catalog has no info provider for are skipped. The
    /// comparison uses the first ASCII-printable character of the name,
    /// case-sensitively. Returns 0 when nothing matches.
    pub fn next_beginning_with(&self, c: char) -> usize {
        for (index, entry) in self.entries.iter().enumerate() {
            let Ok(info) = self.catalog.info(&entry.service) else {
                continue;
            };
            let name = info.name(&entry.service);
            let Some(initial) = name
                .chars()
                .find(|ch| ch.is_ascii_graphic() || *ch == ' ')
            else {
                continue;
            };
            if initial == c {
                return index;
            }
        }
        0
    }

    /// Visible position of the marker opening the previous section.
    ///
    /// Walks back to the nearest marker first. When that marker sits
    /// directly above the cursor in visible space (the cursor was at the
    /// top of its section), the walk continues one section further, so
    /// the result is always strictly before the section the cursor left.
    pub fn prev_marker_pos(&self) -> usize {
        if !self.sink.is_attached() {
            return 0;
        }

        let mut index = self.cursor;
        while index > 0 {
            index -= 1;
            if self.entries[index].flags.contains(EntryFlags::MARKER) {
                break;
            }
        }

        // Started mid-section: this marker already is the previous one.
        if self.resolve_visible(index) + 1 != self.resolve_visible(self.cursor) {
            return self.resolve_visible(index);
        }

        while index > 0 {
            index -= 1;
            if self.entries[index].flags.contains(EntryFlags::MARKER) {
                break;
            }
        }
        self.resolve_visible(index)
    }

    /// Visible position of the next marker below the cursor, or of the
    /// last entry when no marker follows.
    pub fn next_marker_pos(&self) -> usize {
        if !self.sink.is_attached() {
            return 0;
        }

        let len = self.entries.len();
        let mut index = self.cursor;
        while index + 1 < len {
            index += 1;
            if self.entries[index].flags.contains(EntryFlags::MARKER) {
                break;
            }
        }
        self.resolve_visible(index)
    }

    /// Whether navigation may rest on the cursored entry.
    ///
    /// Markers only become selectable while a marking session is active,
    /// so the user has a way to remove them during edits.
    pub fn current_selectable(&self) -> bool {
        match self.current() {
            Some(entry) => {
                !(entry.flags.contains(EntryFlags::MARKER) && self.marked.is_empty())
            }
            None => false,
        }
    }
}
