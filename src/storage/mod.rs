//! Persistence: the JSON config file and the record container.
//!
//! Both are plain files so they work (and are tested) on any host.

pub mod config;
pub mod container;

pub use config::{config_path, load_or_create, load_or_default, AppConfig};
pub use container::{RecordContainer, UploadRecord};
