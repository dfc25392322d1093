//! Status bar (menu bar) item that accepts file drops.
//!
//! The item has no menu: a click goes to a small target object that calls
//! `TrayAffordance::click`, and a `TrayDropView` overlay covers the button to
//! receive drags.

use std::ffi::c_void;
use std::rc::Rc;

use objc2_app_kit::NSVariableStatusItemLength;

use super::drop_view::install_drop_view;
use crate::error::StartupError;
use crate::lifecycle::TrayAffordance;
use crate::model::constants::{STATUS_FALLBACK_TITLE, STATUS_ICON_FILE, STATUS_ICON_SIZE};
use crate::platform::macos::ffi::bridge::{
    get_class, id, ivar_ref, leak_into_ivar, msg_send, nil, nsstring_id, sel,
    AnyClass, AnyObject, ClassBuilder, NSRect, NSSize, Sel, YES,
};

/// The installed status item and its button, both kept alive for the
/// lifetime of the process.
#[derive(Clone, Copy)]
pub struct StatusBarItem {
    pub item: id,
    pub button: id,
}

/// Install the status bar item and route its click and drops to `tray`.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_status_bar(tray: Rc<TrayAffordance>) -> Result<StatusBarItem, StartupError> {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    let status_item: id = msg_send![status_bar, statusItemWithLength: NSVariableStatusItemLength];
    let _: id = msg_send![status_item, retain];

    let button: id = msg_send![status_item, button];
    if button == nil {
        return Err(StartupError::NoStatusButton);
    }

    set_icon(button);

    let target = click_target(tray.clone());
    let _: () = msg_send![button, setTarget: target];
    let _: () = msg_send![button, setAction: sel!(statusItemClicked:)];

    install_drop_view(button, tray);

    let bounds: NSRect = msg_send![button, bounds];
    log::debug!(
        "Status item installed, button {}x{}",
        bounds.size.width,
        bounds.size.height
    );

    Ok(StatusBarItem {
        item: status_item,
        button,
    })
}

/// Template icon from the bundle's Resources, or a short title when the
/// image is missing (e.g. running unbundled from `cargo run`).
unsafe fn set_icon(button: id) {
    let bundle: id = msg_send![get_class("NSBundle"), mainBundle];
    let resources_path: id = msg_send![bundle, resourcePath];

    let icon: id = if resources_path != nil {
        let icon_path: id = msg_send![
            resources_path,
            stringByAppendingPathComponent: nsstring_id(STATUS_ICON_FILE)
        ];
        let icon: id = msg_send![get_class("NSImage"), alloc];
        msg_send![icon, initWithContentsOfFile: icon_path]
    } else {
        nil
    };

    if icon != nil {
        let _: () = msg_send![icon, setSize: NSSize::new(STATUS_ICON_SIZE, STATUS_ICON_SIZE)];
        let _: () = msg_send![icon, setTemplate: YES];
        let _: () = msg_send![button, setImage: icon];
    } else {
        log::info!("{} not found, using text title", STATUS_ICON_FILE);
        let _: () = msg_send![button, setTitle: nsstring_id(STATUS_FALLBACK_TITLE)];
    }
}

fn click_target_class() -> &'static AnyClass {
    let class_name = c"TrayDropClickTarget";
    if let Some(cls) = AnyClass::get(class_name) {
        return cls;
    }
    let mut builder = ClassBuilder::new(class_name, get_class("NSObject"))
        .expect("TrayDropClickTarget registration");
    builder.add_ivar::<*const c_void>(c"_tray");
    unsafe {
        builder.add_method(
            sel!(statusItemClicked:),
            status_item_clicked as unsafe extern "C-unwind" fn(_, _, _),
        );
    }
    builder.register()
}

unsafe fn click_target(tray: Rc<TrayAffordance>) -> id {
    let target: id = msg_send![click_target_class(), new];
    leak_into_ivar(target, "_tray", tray);
    target
}

unsafe extern "C-unwind" fn status_item_clicked(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    if let Some(tray) = ivar_ref::<TrayAffordance>(this, "_tray") {
        tray.click();
    }
}
