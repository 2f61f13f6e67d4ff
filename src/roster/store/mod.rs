//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`backend::StorageBackend`]: raw I/O of the table as a single string.
//!   It knows nothing about students.
//! - [`record_store::RecordStore`]: the ordered collection of students, the
//!   table format, and the CRUD and search operations.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production file-based storage
//!   - One delimited text file, `students.csv` by default
//!   - Written to a temporary sibling and renamed into place
//!
//! - [`mem_backend::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate read and write failures
//!
//! ## Storage Format
//!
//! ```text
//! id,name,age,grade,email        # header, always discarded on load
//! 1,Ann,20,A,ann@x.com
//! 2,Bob,22,B,bob@x.com
//! ```
//!
//! The whole file is rewritten after every add, update and delete.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::{FieldRejection, LoadReport, LoadStatus, RecordStore, UpdateReport};
