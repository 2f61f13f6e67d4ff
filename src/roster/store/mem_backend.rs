use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since roster is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    table: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing table, as if a previous session had saved it.
    pub fn with_table(contents: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.table.borrow_mut() = Some(contents.into());
        backend
    }

    /// Current table contents, if any have been written.
    pub fn table(&self) -> Option<String> {
        self.table.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Enable read error simulation for testing startup handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn read_table(&self) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(RosterError::Io(std::io::Error::other(
                "Simulated read error",
            )));
        }
        Ok(self.table.borrow().clone())
    }

    fn write_table(&self, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RosterError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        *self.table.borrow_mut() = Some(contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://students.csv".to_string()
    }
}
