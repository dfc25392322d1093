//! Upload hand-off: the stand-in consumer of `FileDropEvent`s.
//!
//! Every dropped file is logged and appended to the record container. The
//! popup content reads the container back to show a count.

use std::rc::Rc;

use crate::events::{FileDropEvent, Subscription};
use crate::lifecycle::AppContext;
use crate::storage::{RecordContainer, UploadRecord};

/// Subscribe the intake to the context's event bus.
pub fn subscribe_upload_intake(ctx: &AppContext) -> Subscription {
    let container = ctx.container.clone();
    ctx.events.subscribe(move |event: &FileDropEvent| record_drop(&container, event))
}

fn record_drop(container: &Rc<RecordContainer>, event: &FileDropEvent) {
    for path in event.files.iter() {
        log::info!("Queued for upload: {}", path.display());
    }
    let records = event.files.iter().map(|p| UploadRecord::now(p.to_path_buf()));
    match container.append(records) {
        Ok(added) => log::debug!("Recorded {} file(s), {} total", added, container.len()),
        Err(e) => log::warn!("Could not record dropped files: {}", e),
    }
}
