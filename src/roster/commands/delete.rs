use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, id: i64) -> Result<CmdResult> {
    let student = store
        .find_by_id(id)
        .cloned()
        .ok_or(RosterError::NotFound(id))?;

    if !store.delete(id)? {
        return Err(RosterError::NotFound(id));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student deleted ({}): {}",
        id,
        student.name()
    )));
    Ok(result.with_affected(vec![student]))
}
