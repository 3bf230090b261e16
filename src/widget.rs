//! Widget-facing boundary – structural-change notifications.
//!
//! The model never owns the widget; it forwards events through a weak
//! handle that silently drops them once the widget is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// How much the widget should repaint on a [`ListboxSink::refresh`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Repaint the selected row only.
    Selection,
    /// Repaint every row.
    All,
}

/// Structural-change notifications consumed by the widget.
///
/// All positions are in visible space (hidden entries already stripped).
/// Callbacks must not re-enter the model's mutating operations; the model
/// gives no reentrancy guarantee and the shared cell will panic on it.
pub trait ListboxSink {
    fn entry_added(&mut self, visible_pos: usize);
    fn entry_removed(&mut self, visible_pos: usize);
    fn entry_changed(&mut self, visible_pos: usize);
    fn entry_reset(&mut self);
    fn move_selection_to(&mut self, visible_pos: usize);
    fn refresh(&mut self, mode: RefreshMode);
}

/// Non-owning forwarder in front of the sink.
///
/// Detached or dead handles swallow notifications instead of failing, so
/// the model keeps working after the widget is dropped.
#[derive(Default)]
pub struct SinkHandle {
    sink: Option<Weak<RefCell<dyn ListboxSink>>>,
}

impl SinkHandle {
    pub fn attach<S: ListboxSink + 'static>(&mut self, sink: &Rc<RefCell<S>>) {
        let sink: Rc<RefCell<dyn ListboxSink>> = sink.clone();
        let weak: Weak<RefCell<dyn ListboxSink>> = Rc::downgrade(&sink);
        self.sink = Some(weak);
    }

    pub fn detach(&mut self) {
        self.sink = None;
    }

    /// True while a widget is attached and still alive.
    pub fn is_attached(&self) -> bool {
        self.sink
            .as_ref()
            .map(|weak| weak.strong_count() > 0)
            .unwrap_or(false)
    }

    fn with(&self, forward: impl FnOnce(&mut dyn ListboxSink)) {
        if let Some(sink) = self.sink.as_ref().and_then(Weak::upgrade) {
            forward(&mut *sink.borrow_mut());
        }
    }

    pub fn entry_added(&self, visible_pos: usize) {
        self.with(|sink| sink.entry_added(visible_pos));
    }

    pub fn entry_removed(&self, visible_pos: usize) {
        self.with(|sink| sink.entry_removed(visible_pos));
    }

    pub fn entry_changed(&self, visible_pos: usize) {
        self.with(|sink| sink.entry_changed(visible_pos));
    }

    pub fn entry_reset(&self) {
        self.with(|sink| sink.entry_reset());
    }

    pub fn move_selection_to(&self, visible_pos: usize) {
        self.with(|sink| sink.move_selection_to(visible_pos));
    }

    pub fn refresh(&self, mode: RefreshMode) {
        self.with(|sink| sink.refresh(mode));
    }
}
