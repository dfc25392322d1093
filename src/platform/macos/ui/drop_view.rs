//! NSView overlay that receives file drags on top of the status button.
//!
//! The view is transparent to the app's own mouse events (`hitTest:` returns
//! nil for them) so the button underneath keeps working. It registers for
//! file URLs and forwards the dragging callbacks to the tray's `DropSurface`.

use std::ffi::c_void;

use objc2_app_kit::{NSDragOperation, NSEventType};

use crate::lifecycle::{PointerKind, PointerRouting, TrayAffordance};
use crate::model::constants::PASTEBOARD_FILE_URL;
use crate::model::{PasteboardItem, PayloadDescriptor};
use crate::platform::macos::ffi::bridge::{
    get_class, id, ivar_ref, leak_into_ivar, msg_send, nil, nsstring_id, sel, string_from_ns,
    strings_from_array, AnyClass, AnyObject, Bool, ClassBuilder, NSApp, NSPoint, NSRect,
    ObjectExt, Sel, AUTORESIZE_FILL, NO, YES,
};

/// Register the drop view class (once) and create an instance covering
/// `button`, resizing with it.
///
/// # Safety
/// Main thread only. `button` must be a valid NSView.
pub unsafe fn install_drop_view(button: id, tray: std::rc::Rc<TrayAffordance>) -> id {
    let class = drop_view_class();
    let bounds: NSRect = msg_send![button, bounds];

    let view: id = msg_send![class, alloc];
    let view: id = msg_send![view, initWithFrame: bounds];
    (*view).store_ivar::<id>("_button", button);
    leak_into_ivar(view, "_tray", tray);

    let _: () = msg_send![view, setAutoresizingMask: AUTORESIZE_FILL];

    let types: id = msg_send![
        get_class("NSArray"),
        arrayWithObject: nsstring_id(PASTEBOARD_FILE_URL)
    ];
    let _: () = msg_send![view, registerForDraggedTypes: types];

    let _: () = msg_send![button, addSubview: view];
    view
}

fn drop_view_class() -> &'static AnyClass {
    let class_name = c"TrayDropView";
    if let Some(cls) = AnyClass::get(class_name) {
        return cls;
    }
    let superclass = get_class("NSView");
    let mut builder = ClassBuilder::new(class_name, superclass).expect("TrayDropView registration");

    builder.add_ivar::<id>(c"_button");
    builder.add_ivar::<*const c_void>(c"_tray");

    unsafe {
        builder.add_method(
            sel!(draggingEntered:),
            dragging_entered as unsafe extern "C-unwind" fn(_, _, _) -> _,
        );
        builder.add_method(
            sel!(draggingExited:),
            dragging_exited as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(prepareForDragOperation:),
            prepare_for_drag as unsafe extern "C-unwind" fn(_, _, _) -> _,
        );
        builder.add_method(
            sel!(performDragOperation:),
            perform_drag as unsafe extern "C-unwind" fn(_, _, _) -> _,
        );
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

unsafe fn tray_of(this: &AnyObject) -> Option<&TrayAffordance> {
    ivar_ref::<TrayAffordance>(this, "_tray")
}

/// Read the advertised pasteboard types of a dragging session.
unsafe fn descriptor_of(sender: id) -> PayloadDescriptor {
    let pasteboard: id = msg_send![sender, draggingPasteboard];
    let types: id = msg_send![pasteboard, types];
    PayloadDescriptor::new(strings_from_array(types))
}

/// Read every URL on the pasteboard; file URLs become paths.
unsafe fn items_of(sender: id) -> Vec<PasteboardItem> {
    let pasteboard: id = msg_send![sender, draggingPasteboard];
    let classes: id = msg_send![get_class("NSArray"), arrayWithObject: get_class("NSURL")];
    let urls: id = msg_send![pasteboard, readObjectsForClasses: classes, options: nil];
    if urls == nil {
        return Vec::new();
    }

    let count: usize = msg_send![urls, count];
    (0..count)
        .map(|i| {
            let url: id = msg_send![urls, objectAtIndex: i];
            let is_file: Bool = msg_send![url, isFileURL];
            if is_file.as_bool() {
                let path: id = msg_send![url, path];
                PasteboardItem::file(string_from_ns(path))
            } else {
                let abs: id = msg_send![url, absoluteString];
                PasteboardItem::Other(string_from_ns(abs))
            }
        })
        .collect()
}

/// Push the surface's highlight to the screen: tint the icon and redraw.
unsafe fn refresh(this: &mut AnyObject) {
    let Some(tray) = tray_of(this) else {
        return;
    };
    let style = tray.surface().highlight();
    let button: id = *this.load_ivar::<id>("_button");
    if button != nil {
        let tint: id = if style.tint_icon {
            msg_send![get_class("NSColor"), controlAccentColor]
        } else {
            nil
        };
        let _: () = msg_send![button, setContentTintColor: tint];
    }
    let _: () = msg_send![this, setNeedsDisplay: YES];
}

unsafe extern "C-unwind" fn dragging_entered(
    this: &mut AnyObject,
    _cmd: Sel,
    sender: id,
) -> NSDragOperation {
    let decision = match tray_of(this) {
        Some(tray) => tray.surface().drag_entered(&descriptor_of(sender)),
        None => return NSDragOperation::None,
    };
    refresh(this);
    if decision.is_accepted() {
        NSDragOperation::Copy
    } else {
        NSDragOperation::None
    }
}

unsafe extern "C-unwind" fn dragging_exited(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    if let Some(tray) = tray_of(this) {
        tray.surface().drag_exited();
    }
    refresh(this);
}

unsafe extern "C-unwind" fn prepare_for_drag(
    _this: &mut AnyObject,
    _cmd: Sel,
    _sender: id,
) -> Bool {
    YES
}

unsafe extern "C-unwind" fn perform_drag(this: &mut AnyObject, _cmd: Sel, sender: id) -> Bool {
    let items = items_of(sender);
    let accepted = match tray_of(this) {
        Some(tray) => tray.surface().perform_drop(&items),
        None => false,
    };
    refresh(this);
    if accepted {
        YES
    } else {
        NO
    }
}

/// `NSEventType` of the event the app is currently handling, if any.
unsafe fn current_event_type() -> Option<u64> {
    let event: id = msg_send![NSApp(), currentEvent];
    if event == nil {
        return None;
    }
    let event_type: NSEventType = msg_send![event, type];
    Some(event_type.0 as u64)
}

unsafe extern "C-unwind" fn hit_test(this: &mut AnyObject, _cmd: Sel, _point: NSPoint) -> id {
    let kind = PointerKind::from_event_type(current_event_type());
    match tray_of(this).map(|t| t.surface().route(kind)) {
        Some(PointerRouting::Capture) => this as *mut AnyObject,
        _ => nil,
    }
}

unsafe extern "C-unwind" fn draw_rect(this: &mut AnyObject, _cmd: Sel, _dirty: NSRect) {
    let Some(tray) = tray_of(this) else {
        return;
    };
    let style = tray.surface().highlight();
    if style.background_alpha <= 0.0 {
        return;
    }

    let bounds: NSRect = msg_send![this, bounds];
    let accent: id = msg_send![get_class("NSColor"), controlAccentColor];
    let fill: id = msg_send![accent, colorWithAlphaComponent: style.background_alpha];
    let _: () = msg_send![fill, setFill];
    let path: id = msg_send![
        get_class("NSBezierPath"),
        bezierPathWithRoundedRect: bounds,
        xRadius: style.corner_radius,
        yRadius: style.corner_radius
    ];
    let _: () = msg_send![path, fill];
}
