use traydrop::{clamp, log_filter, records_label};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn log_filter_uses_configured_level_without_env() {
    assert_eq!(log_filter("warn", None), "warn");
}

#[test]
fn log_filter_prefers_rust_log() {
    assert_eq!(log_filter("info", Some("traydrop=debug")), "traydrop=debug");
}

#[test]
fn log_filter_ignores_blank_rust_log() {
    assert_eq!(log_filter(" info ", Some("   ")), "info");
}

#[test]
fn records_label_pluralizes() {
    assert_eq!(records_label(0), "No files yet");
    assert_eq!(records_label(1), "1 file dropped");
    assert_eq!(records_label(12), "12 files dropped");
}
