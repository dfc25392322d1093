//! Tray affordance: the single persistent element in the menu bar.
//!
//! Owns the drop surface layered over its button and reports two
//! independent callbacks to its owner: a plain click and a file drop. The
//! surface's geometry is left to the toolkit, which resizes the overlay view
//! with the button.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::drop_surface::DropSurface;
use crate::model::DragPayload;

type ClickListener = Rc<dyn Fn()>;
type FilesListener = Rc<dyn Fn(DragPayload)>;

pub struct TrayAffordance {
    surface: DropSurface,
    on_click: RefCell<Option<ClickListener>>,
    on_files_dropped: RefCell<Option<FilesListener>>,
}

impl TrayAffordance {
    /// Create the affordance with its drop surface already wired.
    pub fn new() -> Rc<Self> {
        let tray = Rc::new(Self {
            surface: DropSurface::new(),
            on_click: RefCell::new(None),
            on_files_dropped: RefCell::new(None),
        });

        let weak: Weak<Self> = Rc::downgrade(&tray);
        tray.surface.set_drop_listener(move |payload| {
            if let Some(tray) = weak.upgrade() {
                tray.files_dropped(payload);
            }
        });
        tray
    }

    /// Register the click listener, replacing any previous one.
    pub fn set_click_listener<F>(&self, listener: F)
    where
        F: Fn() + 'static,
    {
        *self.on_click.borrow_mut() = Some(Rc::new(listener));
    }

    /// Register the files-dropped listener, replacing any previous one.
    pub fn set_drop_listener<F>(&self, listener: F)
    where
        F: Fn(DragPayload) + 'static,
    {
        *self.on_files_dropped.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn surface(&self) -> &DropSurface {
        &self.surface
    }

    /// The button was clicked (no drag involved).
    pub fn click(&self) {
        let listener = self.on_click.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    fn files_dropped(&self, payload: DragPayload) {
        let listener = self.on_files_dropped.borrow().clone();
        match listener {
            Some(listener) => listener(payload),
            None => log::warn!("Tray received {} file(s) with no owner", payload.len()),
        }
    }
}
