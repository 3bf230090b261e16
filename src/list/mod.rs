//! The list model itself – ordered entry sequence, cursor and bookkeeping.
//!
//! One [`ServiceList`] backs one widget. Every mutation keeps the cursor
//! and the visible position space in sync incrementally, and the widget is
//! only ever told visible positions.

mod nav;
mod reorder;
pub mod row;


use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::catalog::{ListHandle, ServiceCatalog};
use crate::core::entry::{Entry, ServiceRef};
use crate::core::marked::MarkSet;
use crate::core::visibility::ViewOptions;
use crate::recordings::RecordingRegistry;
use crate::widget::{ListboxSink, RefreshMode, SinkHandle};

/// Backing model of a scrollable, selectable, reorderable service list.
///
/// The cursor is a raw index into the sequence; `cursor == len` is the
/// past-end "invalid" state. Visible positions are derived on demand via
/// [`ServiceList::resolve_visible`].
pub struct ServiceList {
    entries: Vec<Entry>,
    /// Raw cursor position; equals `entries.len()` when invalid.
    cursor: usize,
    /// One-level cursor snapshot, `None` when no snapshot is held.
    /// While set, move-mode swapping is suspended.
    saved_cursor: Option<usize>,
    /// Whether the cursored entry is grabbed for reordering.
    current_marked: bool,
    marked: MarkSet,
    view: ViewOptions,
    /// 0 disables the recording-indicator bits in row status.
    record_indicator_mode: u8,
    root: Option<ServiceRef>,
    /// Cached list handle for the current root.
    handle: Option<Rc<dyn ListHandle>>,
    sink: SinkHandle,
    catalog: Rc<dyn ServiceCatalog>,
    recordings: Rc<dyn RecordingRegistry>,
}

impl ServiceList {
    pub fn new(
        catalog: Rc<dyn ServiceCatalog>,
        recordings: Rc<dyn RecordingRegistry>,
    ) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            saved_cursor: None,
            current_marked: false,
            marked: MarkSet::default(),
            view: ViewOptions::default(),
            record_indicator_mode: 0,
            root: None,
            handle: None,
            sink: SinkHandle::default(),
            catalog,
            recordings,
        }
    }

    // ── widget wiring ─────────────────────────────────────────

    /// Wire the widget. The model holds only a weak handle; dropping the
    /// widget detaches it implicitly.
    pub fn attach_listbox<S: ListboxSink + 'static>(&mut self, sink: &Rc<RefCell<S>>) {
        self.sink.attach(sink);
    }

    pub fn detach_listbox(&mut self) {
        self.sink.detach();
    }

    /// Ask the widget to repaint the current selection.
    pub fn refresh(&self) {
        self.sink.refresh(RefreshMode::Selection);
    }

    // ── options ───────────────────────────────────────────────

    pub fn set_hide_numbered_markers(&mut self, hide: bool) {
        self.view.hide_numbered_markers = hide;
    }

    pub fn set_record_indicator_mode(&mut self, mode: u8) {
        self.record_indicator_mode = mode;
    }

    // ── sequence & raw cursor ─────────────────────────────────

    /// Raw element count, hidden entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read access to the entry at a raw position.
    pub fn entry(&self, raw: usize) -> Option<&Entry> {
        self.entries.get(raw)
    }

    pub fn root(&self) -> Option<&ServiceRef> {
        self.root.as_ref()
    }

    pub fn cursor_raw(&self) -> usize {
        self.cursor
    }

    pub fn cursor_valid(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn cursor_save(&mut self) {
        self.saved_cursor = Some(self.cursor);
    }

    /// Restore the snapshot and clear it back to the "none" sentinel.
    /// Without a snapshot this is a no-op.
    pub fn cursor_restore(&mut self) {
        if let Some(saved) = self.saved_cursor.take() {
            self.cursor = saved;
        }
    }

    // ── visible position mapping ──────────────────────────────

    /// Translate a raw position into visible space: the number of
    /// non-excluded entries strictly before it.
    ///
    /// Linear on purpose; the sequence mutates far more rarely than it is
    /// long, so nothing here is cached.
    pub fn resolve_visible(&self, raw: usize) -> usize {
        let mut visible = 0;
        for (index, entry) in self.entries.iter().enumerate() {
            if index == raw {
                break;
            }
            if !self.view.excludes(entry) {
                visible += 1;
            }
        }
        visible
    }

    /// Visible element count.
    pub fn visible_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !self.view.excludes(entry))
            .count()
    }

    /// Visible position of the cursor.
    pub fn cursor_visible(&self) -> usize {
        self.resolve_visible(self.cursor)
    }

    // ── structural mutation ───────────────────────────────────

    /// Insert one entry: before the cursor when `before_current` and the
    /// sequence is non-empty, appended otherwise.
    ///
    /// The widget is told the row at the pre-shift visible position was
    /// added; on the very first insert the cursor lands on row 0.
    pub fn add_service(&mut self, entry: Entry, before_current: bool) {
        let was_empty = self.entries.is_empty();
        if before_current && !was_empty {
            self.entries.insert(self.cursor.min(self.entries.len()), entry);
        } else {
            self.entries.push(entry);
        }

        if was_empty {
            self.cursor = 0;
            self.sink.entry_added(0);
        } else {
            self.cursor += 1;
            self.sink.entry_added(self.resolve_visible(self.cursor - 1));
        }
    }

    /// Erase the entry under the cursor.
    ///
    /// No-op while the cursor is invalid or no widget is attached. At the
    /// last raw position the cursor steps back, otherwise it stays put and
    /// inherits the next entry. Always drops a move-mode grab so it cannot
    /// dangle on the erased row.
    pub fn remove_current(&mut self) {
        if !self.cursor_valid() || !self.sink.is_attached() {
            return;
        }

        let last = self.entries.len() - 1;
        if self.cursor == last {
            self.entries.remove(self.cursor);
            if self.entries.is_empty() {
                self.sink.entry_removed(self.resolve_visible(self.cursor));
            } else {
                self.cursor -= 1;
                self.sink.entry_removed(self.resolve_visible(self.cursor + 1));
            }
        } else {
            self.entries.remove(self.cursor);
            self.sink.entry_removed(self.resolve_visible(self.cursor));
        }

        self.current_marked = false;
    }

    /// Reposition the cursor onto `service`, if present.
    ///
    /// Returns true only when the entry was found and an attached widget
    /// was told to move its selection there.
    pub fn set_current(&mut self, service: &ServiceRef) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.service == *service)
        else {
            return false;
        };
        self.cursor = index;
        if self.sink.is_attached() {
            self.sink.move_selection_to(self.resolve_visible(index));
            return true;
        }
        false
    }

    /// Raw index of `service`, with a fast path for the cursored entry.
    ///
    /// A miss returns `len()`; callers bounds-check instead of treating
    /// the result as an error.
    pub fn lookup_service(&self, service: &ServiceRef) -> usize {
        if let Some(current) = self.entries.get(self.cursor) {
            if current.service == *service {
                return self.cursor;
            }
        }
        self.entries
            .iter()
            .position(|entry| entry.service == *service)
            .unwrap_or(self.entries.len())
    }

    // ── wholesale load & sorting ──────────────────────────────

    /// Replace the whole sequence from the catalog list behind `root`.
    ///
    /// With `just_set` the sequence is left empty and no list is resolved;
    /// the caller then fills entries itself and finishes with
    /// [`ServiceList::fill_finished`].
    pub fn set_root(&mut self, root: ServiceRef, just_set: bool) {
        self.entries.clear();
        self.cursor = 0;
        self.root = Some(root);

        if just_set {
            self.handle = None;
            return;
        }

        self.handle = self.acquire_list();
        if let Some(handle) = self.handle.clone() {
            match handle.content() {
                Ok(entries) => self.entries = entries,
                Err(err) => debug!("could not read list content: {err}"),
            }
        }

        self.fill_finished();
    }

    /// End-of-batch hook: home the cursor and tell the widget to rebuild.
    pub fn fill_finished(&mut self) {
        self.cursor_home();
        self.sink.entry_reset();
    }

    /// Sort the sequence with the catalog's comparator, then reset the
    /// cursor and the widget's view wholesale.
    pub fn sort(&mut self) {
        if self.handle.is_none() {
            self.handle = self.acquire_list();
        }
        let Some(handle) = self.handle.clone() else {
            return;
        };
        self.entries.sort_by(|a, b| handle.compare(a, b));
        self.cursor_home();
        self.sink.entry_reset();
    }

    /// Resolve the catalog list for the current root.
    fn acquire_list(&self) -> Option<Rc<dyn ListHandle>> {
        let Some(root) = self.root.as_ref() else {
            debug!("no root set, cannot resolve a list");
            return None;
        };
        match self.catalog.list(root) {
            Ok(handle) => Some(handle),
            Err(err) => {
                debug!("no list available for {root}: {err}");
                None
            }
        }
    }

    // ── marking (multi-select) ────────────────────────────────

    /// Start a fresh marking session.
    pub fn init_marked(&mut self) {
        self.marked.clear();
    }

    /// Mark `service` and repaint its row.
    pub fn add_marked(&mut self, service: ServiceRef) {
        let raw = self.lookup_service(&service);
        self.marked.insert(service);
        self.sink.entry_changed(self.resolve_visible(raw));
    }

    /// Unmark `service` and repaint its row.
    pub fn remove_marked(&mut self, service: &ServiceRef) {
        self.marked.remove(service);
        self.sink
            .entry_changed(self.resolve_visible(self.lookup_service(service)));
    }

    pub fn is_marked(&self, service: &ServiceRef) -> bool {
        self.marked.contains(service)
    }

    /// Arm external enumeration of the marked set.
    pub fn marked_query_start(&mut self) {
        self.marked.query_start();
    }

    /// Next marked identity, or `None` once exhausted.
    pub fn marked_query_next(&mut self) -> Option<ServiceRef> {
        self.marked.query_next()
    }
}
