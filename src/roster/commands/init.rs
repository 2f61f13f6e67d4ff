use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{LoadStatus, RecordStore, StorageBackend};

/// Write a header-only table when none exists yet.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match (&store.load_report().status, store.count()) {
        (LoadStatus::Missing, 0) => {
            store.save()?;
            result.add_message(CmdMessage::success(format!(
                "Initialized roster at {}",
                store.backend().location()
            )));
        }
        _ => result.add_message(CmdMessage::info(format!(
            "Roster already exists at {}",
            store.backend().location()
        ))),
    }
    Ok(result)
}
