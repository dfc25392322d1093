//! Objective-C interop helpers.

pub mod bridge;
