//! Opaque backdrop placed behind the popover content.
//!
//! Fills the popover's frame view with the window background colour so the
//! translucent popover chrome reads as a solid panel. Never takes clicks.

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, sel, AnyClass, AnyObject, ClassBuilder, NSPoint, NSRect, Sel,
    AUTORESIZE_FILL, WINDOW_BELOW,
};

fn backdrop_class() -> &'static AnyClass {
    let class_name = c"TrayDropBackdropView";
    if let Some(cls) = AnyClass::get(class_name) {
        return cls;
    }
    let mut builder = ClassBuilder::new(class_name, get_class("NSView"))
        .expect("TrayDropBackdropView registration");
    unsafe {
        builder.add_method(
            sel!(hitTest:),
            hit_test as unsafe extern "C-unwind" fn(_, _, _) -> _,
        );
        builder.add_method(
            sel!(drawRect:),
            draw_rect as unsafe extern "C-unwind" fn(_, _, _),
        );
    }
    builder.register()
}

/// Insert a backdrop at the back of `frame_view`, sized to its bounds.
///
/// # Safety
/// Main thread only. `frame_view` must be a valid NSView.
pub unsafe fn insert_backdrop(frame_view: id) -> id {
    let bounds: NSRect = msg_send![frame_view, bounds];
    let view: id = msg_send![backdrop_class(), alloc];
    let view: id = msg_send![view, initWithFrame: bounds];
    let _: () = msg_send![view, setAutoresizingMask: AUTORESIZE_FILL];
    let _: () = msg_send![
        frame_view,
        addSubview: view,
        positioned: WINDOW_BELOW,
        relativeTo: nil
    ];
    view
}

/// Detach a backdrop from its superview and drop our reference.
///
/// # Safety
/// Main thread only. `view` must come from [`insert_backdrop`].
pub unsafe fn remove_backdrop(view: id) {
    let _: () = msg_send![view, removeFromSuperview];
    let _: () = msg_send![view, release];
}

unsafe extern "C-unwind" fn hit_test(_this: &mut AnyObject, _cmd: Sel, _point: NSPoint) -> id {
    nil
}

unsafe extern "C-unwind" fn draw_rect(this: &mut AnyObject, _cmd: Sel, _dirty: NSRect) {
    let bounds: NSRect = msg_send![this, bounds];
    let color: id = msg_send![get_class("NSColor"), windowBackgroundColor];
    let _: () = msg_send![color, setFill];
    let _: () = msg_send![get_class("NSBezierPath"), fillRect: bounds];
}
