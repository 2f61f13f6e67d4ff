use crate::error::Result;

/// Abstract interface for raw table I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (parsing, ordering, validation).
pub trait StorageBackend {
    /// Read the whole table.
    /// Returns Ok(None) if the table does not exist yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_table(&self) -> Result<Option<String>>;

    /// Replace the whole table with `contents`.
    fn write_table(&self, contents: &str) -> Result<()>;

    /// Human readable location of the table, for messages and logs.
    fn location(&self) -> String;
}
