//! In-memory collaborators for the test suite.
//!
//! Everything is scriptable through shared cells, so a test can flip a
//! failure toggle mid-scenario and inspect what reached the other side.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

use crate::catalog::{CatalogError, EditableList, ListHandle, ServiceCatalog, ServiceInfo};
use crate::core::entry::{Entry, EntryFlags, ServiceRef};
use crate::list::ServiceList;
use crate::recordings::{RecordKinds, RecordingRegistry};
use crate::widget::{ListboxSink, RefreshMode};

/// Route `tracing` output to the test harness when `RUST_LOG` asks for it.
pub fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ── entry builders ────────────────────────────────────────────

/// Playable entry with `name` doubling as its identity.
pub fn svc(name: &str, channel: u32) -> Entry {
    Entry::new(ServiceRef::new(name), EntryFlags::empty(), channel)
}

pub fn marker(name: &str) -> Entry {
    Entry::new(ServiceRef::new(name), EntryFlags::MARKER, 0)
}

pub fn numbered_marker(name: &str, channel: u32) -> Entry {
    Entry::new(
        ServiceRef::new(name),
        EntryFlags::MARKER | EntryFlags::NUMBERED_MARKER,
        channel,
    )
}

pub fn hidden(name: &str, channel: u32) -> Entry {
    Entry::new(ServiceRef::new(name), EntryFlags::INVISIBLE, channel)
}

// ── widget sink ───────────────────────────────────────────────

/// Everything the widget was told, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added(usize),
    Removed(usize),
    Changed(usize),
    Reset,
    MoveTo(usize),
    Refresh(RefreshMode),
}

#[derive(Default)]
pub struct RecordedSink {
    pub notices: Vec<Notice>,
}

impl RecordedSink {
    /// Drain and return the notices collected so far.
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl ListboxSink for RecordedSink {
    fn entry_added(&mut self, visible_pos: usize) {
        self.notices.push(Notice::Added(visible_pos));
    }

    fn entry_removed(&mut self, visible_pos: usize) {
        self.notices.push(Notice::Removed(visible_pos));
    }

    fn entry_changed(&mut self, visible_pos: usize) {
        self.notices.push(Notice::Changed(visible_pos));
    }

    fn entry_reset(&mut self) {
        self.notices.push(Notice::Reset);
    }

    fn move_selection_to(&mut self, visible_pos: usize) {
        self.notices.push(Notice::MoveTo(visible_pos));
    }

    fn refresh(&mut self, mode: RefreshMode) {
        self.notices.push(Notice::Refresh(mode));
    }
}

// ── catalog ───────────────────────────────────────────────────

/// Shared script driving catalog behaviour in tests.
#[derive(Default)]
pub struct CatalogScript {
    /// Content handed out per root.
    pub content: HashMap<ServiceRef, Vec<Entry>>,
    /// Display names; services absent here have no info provider.
    pub names: HashMap<ServiceRef, String>,
    pub fail_list: bool,
    pub fail_content: bool,
    pub fail_edit: bool,
    pub fail_move: bool,
    /// Every `move_service` call that reached an edit session.
    pub moves: Vec<(ServiceRef, usize)>,
}

pub struct StubCatalog {
    script: Rc<RefCell<CatalogScript>>,
}

impl StubCatalog {
    pub fn new() -> (Rc<Self>, Rc<RefCell<CatalogScript>>) {
        let script = Rc::new(RefCell::new(CatalogScript::default()));
        (
            Rc::new(Self {
                script: script.clone(),
            }),
            script,
        )
    }
}

impl ServiceCatalog for StubCatalog {
    fn list(&self, root: &ServiceRef) -> Result<Rc<dyn ListHandle>, CatalogError> {
        if self.script.borrow().fail_list {
            return Err(CatalogError::NoList(root.clone()));
        }
        Ok(Rc::new(StubList {
            root: root.clone(),
            script: self.script.clone(),
        }))
    }

    fn info(&self, service: &ServiceRef) -> Result<Box<dyn ServiceInfo>, CatalogError> {
        match self.script.borrow().names.get(service) {
            Some(name) => Ok(Box::new(StubInfo { name: name.clone() })),
            None => Err(CatalogError::NoHandler(service.clone())),
        }
    }
}

struct StubList {
    root: ServiceRef,
    script: Rc<RefCell<CatalogScript>>,
}

impl ListHandle for StubList {
    fn content(&self) -> Result<Vec<Entry>, CatalogError> {
        let script = self.script.borrow();
        if script.fail_content {
            return Err(CatalogError::Content);
        }
        Ok(script.content.get(&self.root).cloned().unwrap_or_default())
    }

    fn start_edit(&self) -> Result<Box<dyn EditableList>, CatalogError> {
        if self.script.borrow().fail_edit {
            return Err(CatalogError::NotEditable);
        }
        Ok(Box::new(StubEdit {
            script: self.script.clone(),
        }))
    }

    fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        // Catalog order in tests: channel number, then identity.
        a.channel
            .cmp(&b.channel)
            .then_with(|| a.service.cmp(&b.service))
    }
}

struct StubEdit {
    script: Rc<RefCell<CatalogScript>>,
}

impl EditableList for StubEdit {
    fn move_service(
        &mut self,
        service: &ServiceRef,
        visible_pos: usize,
    ) -> Result<(), CatalogError> {
        let mut script = self.script.borrow_mut();
        if script.fail_move {
            return Err(CatalogError::MoveRejected {
                service: service.clone(),
                to: visible_pos,
            });
        }
        script.moves.push((service.clone(), visible_pos));
        Ok(())
    }
}

struct StubInfo {
    name: String,
}

impl ServiceInfo for StubInfo {
    fn name(&self, _service: &ServiceRef) -> String {
        self.name.clone()
    }
}

// ── recording registry ────────────────────────────────────────

#[derive(Default)]
pub struct StubRecordings {
    /// (kinds, identity) pairs of active sessions.
    pub active: RefCell<Vec<(RecordKinds, ServiceRef)>>,
    /// Group membership per group reference.
    pub bouquets: RefCell<HashMap<ServiceRef, Vec<ServiceRef>>>,
}

impl RecordingRegistry for StubRecordings {
    fn active_recordings(&self, kinds: RecordKinds) -> Vec<ServiceRef> {
        self.active
            .borrow()
            .iter()
            .filter(|(k, _)| k.intersects(kinds))
            .map(|(_, service)| service.clone())
            .collect()
    }

    fn bouquet_members(&self, group: &ServiceRef) -> Vec<ServiceRef> {
        self.bouquets
            .borrow()
            .get(group)
            .cloned()
            .unwrap_or_default()
    }
}

// ── wired-up model ────────────────────────────────────────────

/// A fully wired model plus handles onto its collaborators.
pub struct Rig {
    pub list: ServiceList,
    pub sink: Rc<RefCell<RecordedSink>>,
    pub script: Rc<RefCell<CatalogScript>>,
    pub recordings: Rc<StubRecordings>,
}

pub fn rig() -> Rig {
    init_logs();
    let (catalog, script) = StubCatalog::new();
    let recordings = Rc::new(StubRecordings::default());
    let mut list = ServiceList::new(catalog, recordings.clone());
    let sink = Rc::new(RefCell::new(RecordedSink::default()));
    list.attach_listbox(&sink);
    Rig {
        list,
        sink,
        script,
        recordings,
    }
}

/// Test root used by [`rig_with`].
pub fn test_root() -> ServiceRef {
    ServiceRef::new("bouquet:test")
}

/// Rig preloaded with `entries` behind [`test_root`].
pub fn rig_with(entries: Vec<Entry>) -> Rig {
    let mut r = rig();
    r.script
        .borrow_mut()
        .content
        .insert(test_root(), entries);
    r.list.set_root(test_root(), false);
    r.sink.borrow_mut().take();
    r
}
