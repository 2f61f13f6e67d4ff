use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, student: Student) -> Result<CmdResult> {
    store.add(student.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added ({}): {}",
        student.id(),
        student.name()
    )));
    Ok(result.with_affected(vec![student]))
}
