//! Popover content: hint text, dropped-file count, Settings and Quit.

use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;

use objc2_app_kit::NSBezelStyle;

use crate::model::{Rect, Size};
use crate::platform::macos::ffi::bridge::{
    get_class, id, ivar_ref, leak_into_ivar, msg_send, nil, nsstring_id, sel, to_ns_rect, AnyClass,
    AnyObject, ClassBuilder, NSApp, NSPoint, NSRect, NSSize, Sel, NO,
};
use crate::records_label;
use crate::storage::RecordContainer;

const MARGIN: f64 = 20.0;
const BUTTON_HEIGHT: f64 = 32.0;
const BUTTON_WIDTH: f64 = 110.0;

/// Targets for the content's buttons.
#[derive(Default)]
struct ContentActions {
    on_settings: RefCell<Option<Rc<dyn Fn()>>>,
}

pub struct PopupContent {
    controller: id,
    count_label: id,
    actions: Rc<ContentActions>,
    container: Rc<RecordContainer>,
}

impl PopupContent {
    /// Build the view controller and its views.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn new(size: Size, container: Rc<RecordContainer>) -> Self {
        let frame = to_ns_rect(Rect::bounds_of(size));
        let root: id = msg_send![get_class("NSView"), alloc];
        let root: id = msg_send![root, initWithFrame: frame];

        let hint = label(
            NSRect::new(
                NSPoint::new(MARGIN, size.height - MARGIN - 24.0),
                NSSize::new(size.width - 2.0 * MARGIN, 24.0),
            ),
            "Drop files on the menu bar icon",
        );
        let _: () = msg_send![root, addSubview: hint];

        let count_label = label(
            NSRect::new(
                NSPoint::new(MARGIN, size.height - MARGIN - 56.0),
                NSSize::new(size.width - 2.0 * MARGIN, 20.0),
            ),
            &records_label(container.len()),
        );
        let _: () = msg_send![root, addSubview: count_label];

        let actions = Rc::new(ContentActions::default());
        let target = actions_target(actions.clone());

        let settings = button(
            NSRect::new(NSPoint::new(MARGIN, MARGIN), NSSize::new(BUTTON_WIDTH, BUTTON_HEIGHT)),
            "Settings…",
            target,
            sel!(openSettings:),
        );
        let _: () = msg_send![root, addSubview: settings];

        let quit = button(
            NSRect::new(
                NSPoint::new(size.width - MARGIN - BUTTON_WIDTH, MARGIN),
                NSSize::new(BUTTON_WIDTH, BUTTON_HEIGHT),
            ),
            "Quit",
            target,
            sel!(quitApp:),
        );
        let _: () = msg_send![root, addSubview: quit];

        let controller: id = msg_send![get_class("NSViewController"), alloc];
        let controller: id = msg_send![controller, init];
        let _: () = msg_send![controller, setView: root];

        Self {
            controller,
            count_label,
            actions,
            container,
        }
    }

    pub fn controller(&self) -> id {
        self.controller
    }

    /// Route the Settings button, replacing any previous handler.
    pub fn set_settings_handler<F>(&self, handler: F)
    where
        F: Fn() + 'static,
    {
        *self.actions.on_settings.borrow_mut() = Some(Rc::new(handler));
    }

    /// Re-read the record count into the label.
    pub fn refresh(&self) {
        let text = records_label(self.container.len());
        unsafe {
            let _: () = msg_send![self.count_label, setStringValue: nsstring_id(&text)];
        }
    }

    /// Make the popover's window key so its buttons take keyboard input.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn focus(&self) {
        let view: id = msg_send![self.controller, view];
        let window: id = msg_send![view, window];
        if window == nil {
            log::debug!("Popover content has no window yet, skipping focus");
            return;
        }
        let _: () = msg_send![window, makeKeyWindow];
    }
}

unsafe fn label(frame: NSRect, text: &str) -> id {
    let lbl: id = msg_send![get_class("NSTextField"), alloc];
    let lbl: id = msg_send![lbl, initWithFrame: frame];
    let _: () = msg_send![lbl, setBezeled: NO];
    let _: () = msg_send![lbl, setDrawsBackground: NO];
    let _: () = msg_send![lbl, setEditable: NO];
    let _: () = msg_send![lbl, setSelectable: NO];
    let _: () = msg_send![lbl, setStringValue: nsstring_id(text)];
    lbl
}

unsafe fn button(frame: NSRect, title: &str, target: id, action: Sel) -> id {
    let btn: id = msg_send![get_class("NSButton"), alloc];
    let btn: id = msg_send![btn, initWithFrame: frame];
    let _: () = msg_send![btn, setTitle: nsstring_id(title)];
    let _: () = msg_send![btn, setBezelStyle: NSBezelStyle::Rounded];
    let _: () = msg_send![btn, setTarget: target];
    let _: () = msg_send![btn, setAction: action];
    btn
}

fn actions_class() -> &'static AnyClass {
    let class_name = c"TrayDropContentActions";
    if let Some(cls) = AnyClass::get(class_name) {
        return cls;
    }
    let mut builder = ClassBuilder::new(class_name, get_class("NSObject"))
        .expect("TrayDropContentActions registration");
    builder.add_ivar::<*const c_void>(c"_actions");
    unsafe {
        builder.add_method(
            sel!(openSettings:),
            open_settings as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(quitApp:),
            quit_app as unsafe extern "C-unwind" fn(_, _, _),
        );
    }
    builder.register()
}

unsafe fn actions_target(actions: Rc<ContentActions>) -> id {
    let target: id = msg_send![actions_class(), new];
    leak_into_ivar(target, "_actions", actions);
    target
}

unsafe extern "C-unwind" fn open_settings(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let Some(actions) = ivar_ref::<ContentActions>(this, "_actions") else {
        return;
    };
    let handler = actions.on_settings.borrow().clone();
    match handler {
        Some(handler) => handler(),
        None => log::warn!("Settings requested before the popup was wired"),
    }
}

unsafe extern "C-unwind" fn quit_app(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    log::info!("Quit requested from popup");
    let _: () = msg_send![NSApp(), terminate: nil];
}
