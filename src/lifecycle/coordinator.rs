//! Drop lifecycle coordinator: the top-level controller.
//!
//! Wires tray clicks and drops to the popup controller and republishes
//! dropped files on the event bus.
//!
//! # Architecture
//!
//! ```text
//! TrayAffordance ── click ──► handle_click() ──► PopupController::toggle()
//!       │
//!       └── files ──► handle_drop() ──► PopupController::open() (if closed)
//!                                  └──► EventBus::publish(FileDropEvent)
//! ```

use std::rc::Rc;

use super::host::{PopupHost, SettingsHost};
use super::popup::PopupController;
use super::settings::{SettingsOutcome, SettingsPresenter};
use super::tray::TrayAffordance;
use crate::events::{EventBus, EventPublisher, FileDropEvent};
use crate::model::DragPayload;
use crate::storage::{AppConfig, RecordContainer};

/// Process-wide state, built once at startup and passed by reference.
pub struct AppContext {
    pub config: AppConfig,
    pub container: Rc<RecordContainer>,
    pub events: EventBus<FileDropEvent>,
}

impl AppContext {
    pub fn new(config: AppConfig, container: RecordContainer) -> Self {
        Self {
            config,
            container: Rc::new(container),
            events: EventBus::new(),
        }
    }
}

pub struct DropLifecycleCoordinator<P: PopupHost, S: SettingsHost> {
    tray: Rc<TrayAffordance>,
    popup: Rc<PopupController<P>>,
    settings: SettingsPresenter<S>,
    publisher: EventPublisher<FileDropEvent>,
}

impl<P, S> DropLifecycleCoordinator<P, S>
where
    P: PopupHost + 'static,
    S: SettingsHost + 'static,
{
    /// Build the tray and popup controller and wire their callbacks.
    pub fn start(ctx: &AppContext, popup_host: P, settings_host: S) -> Rc<Self> {
        let popup = Rc::new(PopupController::new(popup_host));
        popup.listen_for_close();

        let this = Rc::new(Self {
            tray: TrayAffordance::new(),
            popup,
            settings: SettingsPresenter::new(settings_host, ctx.config.settings_size()),
            publisher: ctx.events.publisher(),
        });

        let weak = Rc::downgrade(&this);
        this.tray.set_click_listener(move || {
            if let Some(c) = weak.upgrade() {
                c.handle_click();
            }
        });
        let weak = Rc::downgrade(&this);
        this.tray.set_drop_listener(move |payload| {
            if let Some(c) = weak.upgrade() {
                c.handle_drop(payload);
            }
        });

        log::info!("Drop lifecycle started");
        this
    }

    pub fn tray(&self) -> &Rc<TrayAffordance> {
        &self.tray
    }

    pub fn popup(&self) -> &PopupController<P> {
        &self.popup
    }

    pub fn settings(&self) -> &SettingsPresenter<S> {
        &self.settings
    }

    pub fn handle_click(&self) {
        self.popup.toggle();
    }

    /// Make sure the popup is open, then publish the files.
    pub fn handle_drop(&self, payload: DragPayload) {
        if !self.popup.is_open() {
            self.popup.open();
        }
        let event = FileDropEvent::dropped(payload);
        log::info!("Dropped {}", event.description());
        let delivered = self.publisher.publish(event);
        if delivered == 0 {
            log::warn!("No subscriber for dropped files");
        }
    }

    /// The popup content asked for configuration UI.
    pub fn request_open_settings(&self) -> SettingsOutcome {
        self.popup.close();
        let outcome = self.settings.present();
        log::debug!("Settings window {:?}", outcome);
        outcome
    }
}
