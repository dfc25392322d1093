//! Configuration constants and default values.
//!
//! This module contains all application constants including visual defaults,
//! pasteboard type identifiers, file locations and validation limits.

// === Status Bar ===

/// Icon file looked up in the bundle's Resources directory.
pub const STATUS_ICON_FILE: &str = "StatusBarIcon.png";

/// Menu bar icon edge in points (18x18 is the standard).
pub const STATUS_ICON_SIZE: f64 = 18.0;

/// Title shown when the icon asset is missing.
pub const STATUS_FALLBACK_TITLE: &str = "TD";

// === Drop Highlight ===

/// Alpha of the accent-colour background tint while a drag hovers.
pub const HIGHLIGHT_BACKGROUND_ALPHA: f64 = 0.25;

/// Corner radius of the highlight tint in points.
pub const HIGHLIGHT_CORNER_RADIUS: f64 = 4.0;

// === Pasteboard Types ===

/// Uniform type identifier for file URLs (NSPasteboardTypeFileURL).
pub const PASTEBOARD_FILE_URL: &str = "public.file-url";

/// Legacy filenames pasteboard type still advertised by some sources.
pub const PASTEBOARD_LEGACY_FILENAMES: &str = "NSFilenamesPboardType";

// === Popover ===

/// Default popover content width in points.
pub const DEFAULT_POPOVER_WIDTH: f64 = 320.0;

/// Default popover content height in points.
pub const DEFAULT_POPOVER_HEIGHT: f64 = 400.0;

/// Minimum popover edge in points.
pub const MIN_POPOVER_EDGE: f64 = 200.0;

/// Maximum popover edge in points.
pub const MAX_POPOVER_EDGE: f64 = 1200.0;

// === Settings Window ===

/// Default settings window width in points.
pub const DEFAULT_SETTINGS_WIDTH: f64 = 480.0;

/// Default settings window height in points.
pub const DEFAULT_SETTINGS_HEIGHT: f64 = 320.0;

/// Minimum settings window edge in points.
pub const MIN_SETTINGS_EDGE: f64 = 240.0;

/// Maximum settings window edge in points.
pub const MAX_SETTINGS_EDGE: f64 = 1600.0;

// === Files ===

/// Directory name under the platform config/data directories.
pub const APP_DIR_NAME: &str = "TrayDrop";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Record store file name inside the data directory.
pub const RECORDS_FILE_NAME: &str = "records.json";

/// Environment variable overriding the config file path.
pub const ENV_CONFIG_PATH: &str = "TRAYDROP_CONFIG";

// === Logging ===

/// Log filter used when neither the config nor RUST_LOG set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
