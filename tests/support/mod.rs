//! Recording fakes for the toolkit seams.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use traydrop::lifecycle::{DropLifecycleCoordinator, PopupHost, SettingsHost};
use traydrop::model::Rect;
use traydrop::storage::{AppConfig, RecordContainer};
use traydrop::AppContext;

/// Shared, ordered log of everything the fakes and subscribers saw.
#[derive(Default)]
pub struct Journal(RefCell<Vec<String>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e == entry)
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Popover stand-in. Closes synchronously unless `defer_close` is set.
pub struct FakePopover {
    pub journal: Rc<Journal>,
    pub live_backdrops: RefCell<Vec<u32>>,
    pub defer_close: Cell<bool>,
    next_backdrop: Cell<u32>,
    listener: RefCell<Option<Box<dyn Fn()>>>,
}

impl FakePopover {
    pub fn new(journal: Rc<Journal>) -> Self {
        Self {
            journal,
            live_backdrops: RefCell::new(Vec::new()),
            defer_close: Cell::new(false),
            next_backdrop: Cell::new(0),
            listener: RefCell::new(None),
        }
    }

    /// Simulate a closure the app did not ask for (outside click, Escape).
    pub fn dismiss(&self) {
        self.journal.push("did-close");
        if let Some(l) = self.listener.borrow().as_ref() {
            l();
        }
    }

    pub fn backdrop_count(&self) -> usize {
        self.live_backdrops.borrow().len()
    }
}

impl PopupHost for FakePopover {
    type Backdrop = u32;

    fn show_anchored(&self) {
        self.journal.push("show");
    }

    fn focus_content(&self) {
        self.journal.push("focus");
    }

    fn request_close(&self) {
        self.journal.push("close");
        if !self.defer_close.get() {
            self.dismiss();
        }
    }

    fn insert_backdrop(&self) -> Option<u32> {
        let id = self.next_backdrop.get();
        self.next_backdrop.set(id + 1);
        self.live_backdrops.borrow_mut().push(id);
        self.journal.push("backdrop+");
        Some(id)
    }

    fn remove_backdrop(&self, backdrop: u32) {
        self.live_backdrops.borrow_mut().retain(|b| *b != backdrop);
        self.journal.push("backdrop-");
    }

    fn on_did_close(&self, listener: Box<dyn Fn()>) {
        *self.listener.borrow_mut() = Some(listener);
    }
}

/// Settings window stand-in with a single optional window.
pub struct FakeSettings {
    pub journal: Rc<Journal>,
    pub visible: Cell<Option<u32>>,
    pub created: RefCell<Vec<Rect>>,
}

impl FakeSettings {
    pub fn new(journal: Rc<Journal>) -> Self {
        Self {
            journal,
            visible: Cell::new(None),
            created: RefCell::new(Vec::new()),
        }
    }

    /// The user closed the settings window.
    pub fn close_window(&self) {
        self.visible.set(None);
    }
}

impl SettingsHost for FakeSettings {
    type Window = u32;

    fn visible_window(&self) -> Option<u32> {
        self.visible.get()
    }

    fn bring_to_front(&self, window: &u32) -> bool {
        self.journal.push(format!("front:{window}"));
        true
    }

    fn create_window(&self, frame: Rect) -> u32 {
        self.created.borrow_mut().push(frame);
        let id = self.created.borrow().len() as u32;
        self.visible.set(Some(id));
        self.journal.push(format!("create:{id}"));
        id
    }

    fn primary_display(&self) -> Rect {
        Rect::new(0.0, 0.0, 1440.0, 900.0)
    }
}

pub type TestCoordinator = DropLifecycleCoordinator<FakePopover, FakeSettings>;

pub struct Harness {
    pub ctx: AppContext,
    pub coordinator: Rc<TestCoordinator>,
    pub journal: Rc<Journal>,
    _dir: tempfile::TempDir,
}

impl Harness {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let container = RecordContainer::open(dir.path()).expect("container");
        let ctx = AppContext::new(AppConfig::default(), container);
        let journal = Rc::new(Journal::default());
        let coordinator = DropLifecycleCoordinator::start(
            &ctx,
            FakePopover::new(journal.clone()),
            FakeSettings::new(journal.clone()),
        );
        Self {
            ctx,
            coordinator,
            journal,
            _dir: dir,
        }
    }

    pub fn popover(&self) -> &FakePopover {
        self.coordinator.popup().host()
    }

    pub fn settings(&self) -> &FakeSettings {
        self.coordinator.settings().host()
    }

    /// Record every published event as "event:<n files>".
    pub fn record_events(&self) {
        let journal = self.journal.clone();
        self.ctx
            .events
            .subscribe(move |e: &traydrop::FileDropEvent| journal.push(format!("event:{}", e.len())));
    }
}
