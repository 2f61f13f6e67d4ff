//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for roster operations, whichever UI is driving them.
//!
//! The facade owns the [`RecordStore`], so a UI holds one `RosterApi` for the
//! whole session and never touches records directly.
//!
//! ## Generic Over StorageBackend
//!
//! `RosterApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `RosterApi<FsBackend>`
//! - Testing: `RosterApi<MemBackend>`
//!
//! API tests check dispatch only; command logic is tested in `commands/*.rs`
//! and storage behavior in `store/`.

use crate::commands;
use crate::error::Result;
use crate::model::{Student, StudentUpdate};
use crate::store::{RecordStore, StorageBackend};

pub struct RosterApi<B: StorageBackend> {
    store: RecordStore<B>,
}

impl<B: StorageBackend> RosterApi<B> {
    /// Open the store on `backend`, loading any saved table.
    pub fn new(backend: B) -> Self {
        Self {
            store: RecordStore::open(backend),
        }
    }

    pub fn startup_messages(&self) -> Vec<CmdMessage> {
        commands::load_messages(self.store.load_report(), self.store.backend())
    }

    pub fn add_student(&mut self, student: Student) -> Result<CmdResult> {
        commands::add::run(&mut self.store, student)
    }

    pub fn list_students(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_student(&self, id: i64) -> Result<CmdResult> {
        commands::find::by_id(&self.store, id)
    }

    pub fn search_students(&self, text: &str) -> Result<CmdResult> {
        commands::find::by_name(&self.store, text)
    }

    pub fn update_student(&mut self, id: i64, update: StudentUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_student(&mut self, id: i64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.store)
    }

    pub fn exists(&self, id: i64) -> bool {
        self.store.exists(id)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
