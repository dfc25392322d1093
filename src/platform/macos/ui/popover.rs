//! NSPopover behind the popup controller.
//!
//! The popover is created lazily on first show, uses transient behaviour
//! (closes on outside clicks and Escape), and reports every closure through
//! `NSPopoverDidCloseNotification`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use block2::RcBlock;
use objc2_app_kit::NSPopoverBehavior;

use super::backdrop_view;
use super::content::PopupContent;
use crate::lifecycle::PopupHost;
use crate::model::Size;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, Bool, NSApp, NSRect, NSSize, NO, YES,
};

/// NSRectEdgeMinY: below the menu bar button.
const EDGE_BELOW: u64 = 1;

type CloseListener = Rc<RefCell<Option<Box<dyn Fn()>>>>;

fn notify(listener: &CloseListener) {
    if let Some(listener) = listener.borrow().as_ref() {
        listener();
    }
}

/// A backdrop view living in the popover's frame view.
pub struct BackdropView(id);

pub struct AppKitPopoverHost {
    anchor: Cell<id>,
    size: Size,
    content: Rc<PopupContent>,
    popover: Cell<id>,
    on_close: CloseListener,
}

impl AppKitPopoverHost {
    pub fn new(size: Size, content: Rc<PopupContent>) -> Self {
        Self {
            anchor: Cell::new(nil),
            size,
            content,
            popover: Cell::new(nil),
            on_close: Rc::new(RefCell::new(None)),
        }
    }

    /// Point the popover at the status bar button.
    pub fn set_anchor(&self, button: id) {
        self.anchor.set(button);
    }

    pub fn content(&self) -> &Rc<PopupContent> {
        &self.content
    }

    fn notify_closed(&self) {
        notify(&self.on_close);
    }

    fn popover(&self) -> id {
        let existing = self.popover.get();
        if existing != nil {
            return existing;
        }
        let popover = unsafe { self.make_popover() };
        self.popover.set(popover);
        popover
    }

    unsafe fn make_popover(&self) -> id {
        let popover: id = msg_send![get_class("NSPopover"), alloc];
        let popover: id = msg_send![popover, init];
        let _: () = msg_send![popover, setBehavior: NSPopoverBehavior::Transient];
        let _: () = msg_send![popover, setAnimates: YES];
        let _: () = msg_send![
            popover,
            setContentSize: NSSize::new(self.size.width, self.size.height)
        ];
        let _: () = msg_send![popover, setContentViewController: self.content.controller()];

        let listener = self.on_close.clone();
        let block = RcBlock::new(move |_note: id| notify(&listener));

        let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
        let name: id = msg_send![
            get_class("NSString"),
            stringWithUTF8String: c"NSPopoverDidCloseNotification".as_ptr()
        ];
        let _: id = msg_send![
            center,
            addObserverForName: name,
            object: popover,
            queue: nil,
            usingBlock: &*block
        ];

        log::debug!("Popover created ({}x{})", self.size.width, self.size.height);
        popover
    }
}

impl PopupHost for AppKitPopoverHost {
    type Backdrop = BackdropView;

    fn show_anchored(&self) {
        let anchor = self.anchor.get();
        if anchor == nil {
            log::warn!("Popover has no anchor yet, not showing");
            return;
        }
        let popover = self.popover();
        self.content.refresh();
        unsafe {
            let _: () = msg_send![NSApp(), activateIgnoringOtherApps: YES];
            let bounds: NSRect = msg_send![anchor, bounds];
            let _: () = msg_send![
                popover,
                showRelativeToRect: bounds,
                ofView: anchor,
                preferredEdge: EDGE_BELOW
            ];
        }
    }

    fn focus_content(&self) {
        unsafe { self.content.focus() }
    }

    /// Closes without animation so the closure notification is posted
    /// before this returns. A popover that is not on screen posts nothing,
    /// so the listener is called directly.
    fn request_close(&self) {
        let popover = self.popover.get();
        let shown = popover != nil && unsafe {
            let shown: Bool = msg_send![popover, isShown];
            shown.as_bool()
        };
        if !shown {
            self.notify_closed();
            return;
        }
        unsafe {
            let _: () = msg_send![popover, setAnimates: NO];
            let _: () = msg_send![popover, performClose: nil];
            let _: () = msg_send![popover, setAnimates: YES];
        }
    }

    fn insert_backdrop(&self) -> Option<BackdropView> {
        unsafe {
            let content_view: id = msg_send![self.content.controller(), view];
            let frame_view: id = msg_send![content_view, superview];
            if frame_view == nil {
                return None;
            }
            Some(BackdropView(backdrop_view::insert_backdrop(frame_view)))
        }
    }

    fn remove_backdrop(&self, backdrop: BackdropView) {
        unsafe { backdrop_view::remove_backdrop(backdrop.0) }
    }

    fn on_did_close(&self, listener: Box<dyn Fn()>) {
        *self.on_close.borrow_mut() = Some(listener);
    }
}
