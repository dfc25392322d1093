//! Settings window.
//!
//! One titled, closable window showing where configuration and dropped-file
//! records live. Closing only orders it out, so the object stays valid and
//! `isVisible` tells us whether it can be reused.

use std::cell::RefCell;
use std::path::PathBuf;

use objc2_app_kit::{NSBackingStoreType, NSWindowStyleMask};

use crate::lifecycle::SettingsHost;
use crate::model::Rect;
use crate::platform::macos::ffi::bridge::{
    from_ns_rect, get_class, id, msg_send, nil, nsstring_id, to_ns_rect, Bool, NSApp, NSPoint,
    NSRect, NSSize, NO, YES,
};

const TITLE: &str = "TrayDrop Settings";

/// Paths shown in the settings window.
pub struct SettingsInfo {
    pub config_file: Option<PathBuf>,
    pub records_file: PathBuf,
}

pub struct AppKitSettingsHost {
    info: SettingsInfo,
    window: RefCell<Option<id>>,
}

impl AppKitSettingsHost {
    pub fn new(info: SettingsInfo) -> Self {
        Self {
            info,
            window: RefCell::new(None),
        }
    }

    unsafe fn populate(&self, window: id, frame: Rect) {
        let content: id = msg_send![window, contentView];
        let w = frame.size.width;
        let h = frame.size.height;

        let config_file = self
            .info
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(no configuration directory)".to_string());
        let rows = [
            ("Configuration file", config_file),
            ("Records file", self.info.records_file.display().to_string()),
        ];

        let mut y = h - 50.0;
        for (title, value) in rows {
            let heading = text_field(NSRect::new(NSPoint::new(20.0, y), NSSize::new(w - 40.0, 20.0)), title);
            let _: () = msg_send![content, addSubview: heading];
            let detail = text_field(
                NSRect::new(NSPoint::new(20.0, y - 22.0), NSSize::new(w - 40.0, 20.0)),
                &value,
            );
            let _: () = msg_send![detail, setSelectable: YES];
            let _: () = msg_send![content, addSubview: detail];
            y -= 60.0;
        }
    }
}

unsafe fn text_field(frame: NSRect, text: &str) -> id {
    let tf: id = msg_send![get_class("NSTextField"), alloc];
    let tf: id = msg_send![tf, initWithFrame: frame];
    let _: () = msg_send![tf, setBezeled: NO];
    let _: () = msg_send![tf, setDrawsBackground: NO];
    let _: () = msg_send![tf, setEditable: NO];
    let _: () = msg_send![tf, setSelectable: NO];
    let _: () = msg_send![tf, setStringValue: nsstring_id(text)];
    tf
}

impl SettingsHost for AppKitSettingsHost {
    type Window = id;

    fn visible_window(&self) -> Option<id> {
        let window = (*self.window.borrow())?;
        let visible: Bool = unsafe { msg_send![window, isVisible] };
        visible.as_bool().then_some(window)
    }

    fn bring_to_front(&self, window: &id) -> bool {
        if *self.window.borrow() != Some(*window) {
            return false;
        }
        unsafe {
            let _: () = msg_send![NSApp(), activateIgnoringOtherApps: YES];
            let _: () = msg_send![*window, makeKeyAndOrderFront: nil];
        }
        true
    }

    fn create_window(&self, frame: Rect) -> id {
        let style = NSWindowStyleMask::Titled | NSWindowStyleMask::Closable;
        let window = unsafe {
            let window: id = msg_send![get_class("NSWindow"), alloc];
            let window: id = msg_send![
                window,
                initWithContentRect: to_ns_rect(frame),
                styleMask: style,
                backing: NSBackingStoreType::Buffered,
                defer: NO
            ];
            let _: () = msg_send![window, setReleasedWhenClosed: NO];
            let _: () = msg_send![window, setTitle: nsstring_id(TITLE)];
            self.populate(window, frame);
            window
        };

        if let Some(old) = self.window.replace(Some(window)) {
            unsafe {
                let _: () = msg_send![old, release];
            }
        }
        log::debug!("Settings window created at {:?}", frame);
        window
    }

    fn primary_display(&self) -> Rect {
        unsafe {
            let screens: id = msg_send![get_class("NSScreen"), screens];
            let count: usize = if screens != nil { msg_send![screens, count] } else { 0 };
            let screen: id = if count > 0 {
                msg_send![screens, objectAtIndex: 0usize]
            } else {
                msg_send![get_class("NSScreen"), mainScreen]
            };
            if screen == nil {
                log::warn!("No screen attached, centring settings on a default frame");
                return Rect::new(0.0, 0.0, 1440.0, 900.0);
            }
            let frame: NSRect = msg_send![screen, frame];
            from_ns_rect(frame)
        }
    }
}
