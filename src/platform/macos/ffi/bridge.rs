//! Thin helpers over objc2 for the raw `msg_send!` style used by the UI code.
//!
//! Views and targets are built with `ClassBuilder` and talked to through
//! untyped `id` pointers, so this module collects the aliases, string and
//! geometry conversions, and ivar access they all need.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_void, CStr, CString};

pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel};
pub use objc2_app_kit::{NSAutoresizingMaskOptions, NSWindowOrderingMode};
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use objc2::encode::Encode;
use objc2::rc::Retained;

use crate::model::Rect;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL YES.
pub const YES: Bool = Bool::YES;

/// Objective-C BOOL NO.
pub const NO: Bool = Bool::NO;

/// Stretch with the superview in both directions.
pub const AUTORESIZE_FILL: NSAutoresizingMaskOptions = NSAutoresizingMaskOptions(
    NSAutoresizingMaskOptions::ViewWidthSizable.0 | NSAutoresizingMaskOptions::ViewHeightSizable.0,
);

/// For `addSubview:positioned:relativeTo:`.
pub const WINDOW_BELOW: NSWindowOrderingMode = NSWindowOrderingMode::Below;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![get_class("NSApplication"), sharedApplication] }
}

/// Create an autoreleased NSString and return it as a raw `id`.
///
/// Receivers that keep the string (`setStringValue:`, collections) retain
/// it themselves; the caller must be inside an autorelease pool, which the
/// run loop provides for every event.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::autorelease_ptr(ns) as id
}

/// Copy an NSString into a Rust `String`. `nil` gives an empty string.
///
/// # Safety
/// `s` must be nil or a valid NSString.
pub unsafe fn string_from_ns(s: id) -> String {
    if s.is_null() {
        return String::new();
    }
    let utf8: *const std::ffi::c_char = msg_send![s, UTF8String];
    if utf8.is_null() {
        return String::new();
    }
    CStr::from_ptr(utf8).to_string_lossy().into_owned()
}

/// Collect an NSArray of NSStrings.
///
/// # Safety
/// `array` must be nil or a valid NSArray whose elements are NSStrings.
pub unsafe fn strings_from_array(array: id) -> Vec<String> {
    if array.is_null() {
        return Vec::new();
    }
    let count: usize = msg_send![array, count];
    (0..count)
        .map(|i| {
            let s: id = msg_send![array, objectAtIndex: i];
            string_from_ns(s)
        })
        .collect()
}

/// Get a class by name, panicking if not found.
///
/// Only used for AppKit/Foundation classes that always exist.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

pub fn to_ns_rect(r: Rect) -> NSRect {
    NSRect::new(
        NSPoint::new(r.origin.x, r.origin.y),
        NSSize::new(r.size.width, r.size.height),
    )
}

pub fn from_ns_rect(r: NSRect) -> Rect {
    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
}

/// Extension trait for accessing instance variables on AnyObject.
pub trait ObjectExt {
    /// # Safety
    /// The ivar must exist and be of type T. Main thread only.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// # Safety
    /// The ivar must exist and be of type T. Main thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Stash a Rust value behind an object's `*const c_void` ivar for the rest
/// of the process.
///
/// # Safety
/// `obj` must have a `*const c_void` ivar called `name`.
pub unsafe fn leak_into_ivar<T>(obj: id, name: &str, value: std::rc::Rc<T>) {
    let raw = std::rc::Rc::into_raw(value) as *const c_void;
    (*obj).store_ivar::<*const c_void>(name, raw);
}

/// Borrow a value previously stored with [`leak_into_ivar`].
///
/// # Safety
/// The ivar must hold null or a pointer written by `leak_into_ivar::<T>`.
pub unsafe fn ivar_ref<'a, T>(obj: &'a AnyObject, name: &str) -> Option<&'a T> {
    let raw = *obj.load_ivar::<*const c_void>(name);
    (raw as *const T).as_ref()
}
