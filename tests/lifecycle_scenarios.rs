mod support;

use std::path::PathBuf;

use support::Harness;
use traydrop::lifecycle::SettingsOutcome;
use traydrop::model::constants::PASTEBOARD_FILE_URL;
use traydrop::model::{HighlightStyle, PasteboardItem, PayloadDescriptor};
use traydrop::{subscribe_upload_intake, FileDropEvent, PopupVisibility};

fn files(paths: &[&str]) -> Vec<PasteboardItem> {
    paths.iter().map(|p| PasteboardItem::file(*p)).collect()
}

#[test]
fn drop_without_files_changes_nothing() {
    let h = Harness::new();
    h.record_events();

    let accepted = h
        .coordinator
        .tray()
        .surface()
        .perform_drop(&[PasteboardItem::Other("https://example.com".into())]);

    assert!(!accepted);
    assert_eq!(h.coordinator.popup().state(), PopupVisibility::Closed);
    assert!(h.journal.entries().is_empty());
}

#[test]
fn drop_with_files_opens_popup_and_publishes_once() {
    let h = Harness::new();
    h.record_events();

    assert!(h.coordinator.tray().surface().perform_drop(&files(&["/tmp/one.png"])));

    assert!(h.coordinator.popup().is_open());
    assert_eq!(h.journal.count("event:1"), 1);
    assert_eq!(h.popover().backdrop_count(), 1);
}

#[test]
fn drop_while_closed_opens_before_publishing() {
    let h = Harness::new();
    h.record_events();

    h.coordinator.tray().surface().perform_drop(&files(&["/tmp/a"]));

    let show = h.journal.position("show").unwrap();
    let event = h.journal.position("event:1").unwrap();
    assert!(show < event);
}

#[test]
fn click_then_drop_keeps_popup_open_and_single_backdrop() {
    let h = Harness::new();
    h.record_events();

    h.coordinator.tray().click();
    h.coordinator
        .tray()
        .surface()
        .perform_drop(&files(&["/tmp/a", "/tmp/b", "/tmp/c"]));

    assert!(h.coordinator.popup().is_open());
    assert_eq!(h.journal.count("show"), 1);
    assert_eq!(h.journal.count("event:3"), 1);
    assert_eq!(h.popover().backdrop_count(), 1);
}

#[test]
fn repeated_open_requests_keep_one_backdrop() {
    let h = Harness::new();
    for _ in 0..3 {
        h.coordinator.popup().open();
    }
    assert_eq!(h.popover().backdrop_count(), 1);
}

#[test]
fn clicks_alternate_open_and_closed() {
    let h = Harness::new();
    for n in 1..=7 {
        h.coordinator.tray().click();
        assert_eq!(h.coordinator.popup().is_open(), n % 2 == 1, "after {n} clicks");
    }
}

#[test]
fn no_backdrop_survives_closure() {
    let h = Harness::new();
    h.coordinator.tray().click();
    h.coordinator.tray().click();
    assert_eq!(h.popover().backdrop_count(), 0);

    h.coordinator.tray().click();
    h.popover().dismiss();
    assert_eq!(h.popover().backdrop_count(), 0);
    assert!(!h.coordinator.popup().is_open());
}

#[test]
fn click_after_outside_dismiss_reopens_with_fresh_backdrop() {
    let h = Harness::new();
    h.coordinator.tray().click();
    h.popover().dismiss();
    h.coordinator.tray().click();

    assert!(h.coordinator.popup().is_open());
    assert_eq!(*h.popover().live_backdrops.borrow(), vec![1]);
}

#[test]
fn drop_during_pending_close_survives_late_notification() {
    let h = Harness::new();
    h.record_events();
    h.popover().defer_close.set(true);

    h.coordinator.tray().click();
    h.coordinator.tray().click();
    h.coordinator.tray().surface().perform_drop(&files(&["/tmp/a"]));
    assert!(h.coordinator.popup().is_open());
    assert_eq!(h.popover().backdrop_count(), 1);

    h.popover().dismiss();

    assert!(h.coordinator.popup().is_open());
    assert_eq!(h.popover().backdrop_count(), 1);
    assert_eq!(h.journal.count("event:1"), 1);

    h.popover().dismiss();
    assert!(!h.coordinator.popup().is_open());
    assert_eq!(h.popover().backdrop_count(), 0);
}

#[test]
fn settings_request_while_open_closes_popup_then_creates_window() {
    let h = Harness::new();
    h.coordinator.tray().click();

    let outcome = h.coordinator.request_open_settings();

    assert_eq!(outcome, SettingsOutcome::Created);
    assert!(!h.coordinator.popup().is_open());
    let close = h.journal.position("close").unwrap();
    let create = h.journal.position("create:1").unwrap();
    assert!(close < create);
    assert_eq!(h.settings().created.borrow().len(), 1);
}

#[test]
fn settings_window_is_reused_while_visible() {
    let h = Harness::new();
    h.coordinator.request_open_settings();
    assert_eq!(h.coordinator.request_open_settings(), SettingsOutcome::Reused);
    assert_eq!(h.settings().created.borrow().len(), 1);

    h.settings().close_window();
    assert_eq!(h.coordinator.request_open_settings(), SettingsOutcome::Created);
    assert_eq!(h.settings().created.borrow().len(), 2);
}

#[test]
fn settings_request_while_closed_does_not_touch_popup() {
    let h = Harness::new();
    h.coordinator.request_open_settings();
    assert_eq!(h.journal.count("close"), 0);
}

#[test]
fn hover_highlight_follows_drag() {
    let h = Harness::new();
    let surface = h.coordinator.tray().surface();

    let decision = surface.drag_entered(&PayloadDescriptor::new([PASTEBOARD_FILE_URL]));
    assert!(decision.is_accepted());
    assert_eq!(surface.highlight(), HighlightStyle::HOVER);

    surface.drag_exited();
    assert_eq!(surface.highlight(), HighlightStyle::IDLE);

    surface.drag_entered(&PayloadDescriptor::new([PASTEBOARD_FILE_URL]));
    surface.perform_drop(&files(&["/tmp/x"]));
    assert_eq!(surface.highlight(), HighlightStyle::IDLE);
}

#[test]
fn intake_records_dropped_files() {
    let h = Harness::new();
    subscribe_upload_intake(&h.ctx);

    h.coordinator
        .tray()
        .surface()
        .perform_drop(&files(&["/tmp/report.pdf", "/tmp/photo.jpg"]));

    let paths: Vec<PathBuf> = h.ctx.container.records().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![PathBuf::from("/tmp/report.pdf"), PathBuf::from("/tmp/photo.jpg")]
    );
}

#[test]
fn events_carry_paths_in_pasteboard_order() {
    let h = Harness::new();
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = seen.clone();
    h.ctx
        .events
        .subscribe(move |e: &FileDropEvent| sink.borrow_mut().extend(e.files.paths().to_vec()));

    h.coordinator
        .tray()
        .surface()
        .perform_drop(&files(&["/z/last", "/a/first"]));

    assert_eq!(
        *seen.borrow(),
        vec![PathBuf::from("/z/last"), PathBuf::from("/a/first")]
    );
}
