use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::{RecordStore, StorageBackend};

pub fn by_id<B: StorageBackend>(store: &RecordStore<B>, id: i64) -> Result<CmdResult> {
    let student = store.find_by_id(id).ok_or(RosterError::NotFound(id))?;
    Ok(CmdResult::default().with_listed(vec![student.clone()]))
}

pub fn by_name<B: StorageBackend>(store: &RecordStore<B>, text: &str) -> Result<CmdResult> {
    let matches: Vec<_> = store.find_by_name(text).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No students found with name containing: {}",
            text
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} {}",
            matches.len(),
            plural(matches.len())
        )));
    }
    Ok(result.with_listed(matches))
}
