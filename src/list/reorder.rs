//! Move mode – relocating the cursored entry through adjacent swaps.
//!
//! While the grab is active, every cursor step drags the grabbed entry one
//! row and displaces the neighbour the other way. Leaving the mode commits
//! the final visible position to the catalog's editable list.

use tracing::debug;

use super::ServiceList;

impl ServiceList {
    /// Whether the cursored entry is currently grabbed.
    pub fn is_current_marked(&self) -> bool {
        self.current_marked
    }

    /// Swapping is live only while grabbed and no snapshot suspends it.
    fn reorder_active(&self) -> bool {
        self.current_marked && self.saved_cursor.is_none()
    }

    /// Exchange two rows while keeping channel numbers attached to their
    /// list positions: identities move, numbering stays with the slot.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        let channel = self.entries[a].channel;
        self.entries[a].channel = self.entries[b].channel;
        self.entries[b].channel = channel;
    }

    /// Step the cursor by `count` visible rows (negative steps up).
    ///
    /// Hidden rows are walked over without consuming a step. With a live
    /// grab, each raw step swaps the grabbed entry with its neighbour and
    /// repaints the displaced row, except when the displaced row is the
    /// start or the end of the whole run.
    pub fn cursor_move(&mut self, count: i32) {
        let start = self.cursor as i64;
        let stop = start + i64::from(count);
        let mut count = count;
        let len = self.entries.len();

        if count > 0 {
            while count != 0 && self.cursor < len {
                let leaving = self.cursor;
                let entering = leaving + 1;
                if self.reorder_active() && entering < len {
                    self.swap_entries(leaving, entering);
                    if self.sink.is_attached()
                        && leaving as i64 != start
                        && leaving as i64 != stop
                    {
                        self.sink.entry_changed(self.resolve_visible(leaving));
                    }
                }
                self.cursor = entering;
                if entering < len && !self.view.excludes(&self.entries[entering]) {
                    count -= 1;
                }
            }
        } else if count < 0 {
            while count != 0 && self.cursor > 0 {
                let leaving = self.cursor;
                let entering = leaving - 1;
                if self.reorder_active() && leaving < len {
                    self.swap_entries(leaving, entering);
                    if self.sink.is_attached()
                        && leaving as i64 != start
                        && leaving as i64 != stop
                    {
                        self.sink.entry_changed(self.resolve_visible(leaving));
                    }
                }
                self.cursor = entering;
                if !self.view.excludes(&self.entries[entering]) {
                    count += 1;
                }
            }
            // Settle forward off hidden rows so the cursor never rests on one.
            while self.cursor < len && self.view.excludes(&self.entries[self.cursor]) {
                self.cursor += 1;
            }
        }
    }

    /// Jump to the first visible row. With a live grab, bubble the grabbed
    /// entry all the way to the front instead, repainting each row it
    /// passes through.
    pub fn cursor_home(&mut self) {
        if self.reorder_active() {
            if self.entries.is_empty() {
                self.cursor = 0;
                return;
            }
            if self.cursor >= self.entries.len() {
                self.cursor = self.entries.len() - 1;
            }
            while self.cursor > 0 {
                self.swap_entries(self.cursor, self.cursor - 1);
                self.cursor -= 1;
                if self.sink.is_attached() && self.cursor > 0 {
                    self.sink.entry_changed(self.resolve_visible(self.cursor));
                }
            }
        } else {
            self.cursor = 0;
            while self.cursor < self.entries.len()
                && self.view.excludes(&self.entries[self.cursor])
            {
                self.cursor += 1;
            }
        }
    }

    /// Jump past the last row. With a live grab, bubble the grabbed entry
    /// to the very end instead; the cursor finishes past-end either way.
    pub fn cursor_end(&mut self) {
        if self.reorder_active() {
            let len = self.entries.len();
            while self.cursor < len {
                let leaving = self.cursor;
                self.cursor += 1;
                if self.cursor < len {
                    self.swap_entries(self.cursor, leaving);
                    if self.sink.is_attached() {
                        self.sink.entry_changed(self.resolve_visible(self.cursor));
                    }
                }
            }
        } else {
            self.cursor = self.entries.len();
        }
    }

    /// Absolute positioning in visible space: home, then step down `n`.
    pub fn cursor_set(&mut self, n: i32) {
        self.cursor_home();
        self.cursor_move(n);
    }

    /// Enter or leave move mode.
    ///
    /// Entering repaints the cursored row. Leaving additionally commits
    /// the entry's visible position to the catalog's editable list; commit
    /// failures are logged and the mode change stands either way, so the
    /// in-memory order is never rolled back.
    pub fn set_current_marked(&mut self, state: bool) {
        let prev = self.current_marked;
        self.current_marked = state;

        if state == prev || !self.sink.is_attached() {
            return;
        }
        self.sink.entry_changed(self.resolve_visible(self.cursor));
        if !state {
            self.commit_move();
        }
    }

    /// Persist the cursored entry's visible position to the catalog.
    fn commit_move(&mut self) {
        if self.handle.is_none() {
            self.handle = self.acquire_list();
        }
        let Some(handle) = self.handle.clone() else {
            debug!("no list available, reorder not persisted");
            return;
        };
        let mut editable = match handle.start_edit() {
            Ok(editable) => editable,
            Err(err) => {
                debug!("no editable list: {err}");
                return;
            }
        };
        let Some(service) = self.current().map(|entry| entry.service.clone()) else {
            debug!("no valid service selected, reorder not persisted");
            return;
        };
        let pos = self.cursor_visible();
        match editable.move_service(&service, pos) {
            Ok(()) => debug!("moved {service} to visible position {pos}"),
            Err(err) => debug!("move of {service} to {pos} failed: {err}"),
        }
    }
}
