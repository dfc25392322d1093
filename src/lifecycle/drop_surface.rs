//! Drop surface: the part of the tray that accepts drag-and-drop.
//!
//! The platform view forwards `draggingEntered:`, `draggingExited:` and
//! `performDragOperation:` here and renders whatever `highlight()` says.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::model::{AcceptDecision, DragPayload, HighlightStyle, PasteboardItem, PayloadDescriptor};

/// Kind of pointer input reaching the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Clicks, moves, scrolls.
    Mouse,
    /// A drag session in progress.
    Drag,
}

impl PointerKind {
    /// Classify a hit test by the `NSEventType` the app is handling.
    ///
    /// Mouse button, movement, tracking and scroll events are the app's own
    /// pointer input. A file drag from another process reaches the surface
    /// while the app handles no such event (often no event at all).
    pub fn from_event_type(event_type: Option<u64>) -> Self {
        match event_type {
            // Left/right down/up, moved, left/right dragged, entered, exited.
            Some(1..=9) => PointerKind::Mouse,
            // Scroll wheel, other-mouse down/up/dragged.
            Some(22) | Some(25..=27) => PointerKind::Mouse,
            _ => PointerKind::Drag,
        }
    }
}

/// Who should receive a pointer event at the surface's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRouting {
    /// Let the view underneath (the tray button) handle it.
    PassThrough,
    /// The surface handles it.
    Capture,
}

type DropListener = Rc<dyn Fn(DragPayload)>;

#[derive(Default)]
pub struct DropSurface {
    highlight: Cell<HighlightStyle>,
    on_drop: RefCell<Option<DropListener>>,
}

impl DropSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the drop listener, replacing any previous one.
    ///
    /// Called synchronously, at most once per successful drop.
    pub fn set_drop_listener<F>(&self, listener: F)
    where
        F: Fn(DragPayload) + 'static,
    {
        *self.on_drop.borrow_mut() = Some(Rc::new(listener));
    }

    /// Current rendering of the surface.
    pub fn highlight(&self) -> HighlightStyle {
        self.highlight.get()
    }

    /// A drag entered the surface.
    pub fn drag_entered(&self, descriptor: &PayloadDescriptor) -> AcceptDecision {
        if descriptor.advertises_file_refs() {
            self.highlight.set(HighlightStyle::HOVER);
            AcceptDecision::Copy
        } else {
            log::debug!("Rejecting drag without file references: {:?}", descriptor.types());
            AcceptDecision::Reject
        }
    }

    /// The drag left without dropping.
    pub fn drag_exited(&self) {
        self.highlight.set(HighlightStyle::IDLE);
    }

    /// The drag was released over the surface.
    ///
    /// Returns false, and does nothing else, when no file references can be
    /// extracted. The highlight is cleared either way.
    pub fn perform_drop(&self, items: &[PasteboardItem]) -> bool {
        self.highlight.set(HighlightStyle::IDLE);

        let Some(payload) = DragPayload::from_items(items) else {
            log::debug!("Drop carried no file references ({} items)", items.len());
            return false;
        };

        // Clone out so the listener may re-register without a borrow conflict.
        let listener = self.on_drop.borrow().clone();
        match listener {
            Some(listener) => listener(payload),
            None => log::warn!("Drop accepted with no listener registered"),
        }
        true
    }

    /// Hit-test policy when the surface is layered over a clickable button.
    pub fn route(&self, kind: PointerKind) -> PointerRouting {
        match kind {
            PointerKind::Mouse => PointerRouting::PassThrough,
            PointerKind::Drag => PointerRouting::Capture,
        }
    }
}
