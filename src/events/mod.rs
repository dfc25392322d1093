//! Event system for decoupled inter-module communication.
//!
//! Drop detection and upload intake never reference each other. The
//! coordinator publishes a [`FileDropEvent`] and whoever subscribed picks it
//! up:
//!
//! - **Decoupled architecture**: the coordinator publishes without knowing who handles it
//! - **Synchronous delivery**: every listener has run when `publish()` returns
//! - **Testability**: event types are pure Rust, easily testable without FFI
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   drop    ┌─────────────────────────┐
//! │ DropSurface │ ────────► │ DropLifecycleCoordinator│
//! └─────────────┘           └────────────┬────────────┘
//!                                        │ publish(FileDropEvent)
//!                                        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                  EventBus<FileDropEvent>            │
//! │            (same-thread, synchronous fan-out)       │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ listener(&event)
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                  Upload subsystem                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`FileDropEvent`, `DropSource`)
//! - [`bus`]: `EventBus`, `EventPublisher` and `Subscription`

pub mod bus;
pub mod types;

// Re-export main types for convenient access
pub use bus::{EventBus, EventPublisher, Subscription};
pub use types::{DropSource, FileDropEvent};
