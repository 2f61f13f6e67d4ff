use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed(store.students().to_vec());
    if store.count() == 0 {
        result.add_message(CmdMessage::info("No students found."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Total: {} {}",
            store.count(),
            plural(store.count())
        )));
    }
    Ok(result)
}
