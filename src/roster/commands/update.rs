use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentUpdate;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    id: i64,
    update: StudentUpdate,
) -> Result<CmdResult> {
    let report = store.update(id, update)?;

    let mut result = CmdResult::default();
    for rejection in &report.rejected {
        result.add_message(CmdMessage::warning(format!(
            "Kept current {}: {}",
            rejection.field, rejection.error
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Student updated ({}): {}",
        id,
        report.student.name()
    )));
    Ok(result.with_affected(vec![report.student]))
}
