//! Application bootstrap for macOS.
//!
//! Builds the AppKit hosts, starts the drop lifecycle, installs the status
//! item and runs the main loop.

use std::path::PathBuf;
use std::rc::{Rc, Weak};

use objc2::rc::autoreleasepool;
use objc2::MainThreadMarker;
use objc2_app_kit::NSApplicationActivationPolicy;

use crate::error::StartupError;
use crate::events::FileDropEvent;
use crate::lifecycle::{AppContext, DropLifecycleCoordinator};
use crate::platform::macos::ffi::bridge::{msg_send, NSApp};
use crate::platform::macos::ui::{
    install_status_bar, AppKitPopoverHost, AppKitSettingsHost, PopupContent, SettingsInfo,
};

type Coordinator = DropLifecycleCoordinator<AppKitPopoverHost, AppKitSettingsHost>;

/// Run the menu bar app until it terminates.
///
/// `config_file` is only shown in the settings window.
pub fn run(ctx: &AppContext, config_file: Option<PathBuf>) -> Result<(), StartupError> {
    if MainThreadMarker::new().is_none() {
        return Err(StartupError::NotMainThread);
    }

    autoreleasepool(|_| unsafe {
        let app = NSApp();
        let _: bool = msg_send![app, setActivationPolicy: NSApplicationActivationPolicy::Accessory];

        let content = Rc::new(PopupContent::new(
            ctx.config.popover_size(),
            ctx.container.clone(),
        ));
        let popup_host = AppKitPopoverHost::new(ctx.config.popover_size(), content.clone());
        let settings_host = AppKitSettingsHost::new(SettingsInfo {
            config_file,
            records_file: ctx.container.path().to_path_buf(),
        });

        let coordinator = DropLifecycleCoordinator::start(ctx, popup_host, settings_host);

        let status = install_status_bar(coordinator.tray().clone())?;
        coordinator.popup().host().set_anchor(status.button);

        let weak: Weak<Coordinator> = Rc::downgrade(&coordinator);
        content.set_settings_handler(move || {
            if let Some(c) = weak.upgrade() {
                c.request_open_settings();
            }
        });

        let refresh = content.clone();
        ctx.events.subscribe(move |_: &FileDropEvent| refresh.refresh());

        log::info!("TrayDrop running");
        let _: () = msg_send![app, run];

        drop(coordinator);
        Ok(())
    })
}
