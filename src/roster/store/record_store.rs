use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::{self, Field, Student, StudentUpdate, HEADER};
use tracing::{debug, info, warn};

/// How the startup load went.
#[derive(Debug)]
pub enum LoadStatus {
    /// No table existed yet; the store starts empty.
    Missing,
    /// The table was read and this many records were kept.
    Loaded(usize),
    /// The table could not be read. The store starts empty.
    Failed(RosterError),
}

/// Outcome of [`RecordStore::load`].
///
/// Loading never fails outright: unreadable tables and bad lines are reported
/// here so the caller can tell the user, and the session carries on.
#[derive(Debug)]
pub struct LoadReport {
    pub status: LoadStatus,
    /// Lines that were skipped, as `Format` or `DuplicateId` errors.
    pub rejected: Vec<RosterError>,
}

impl LoadReport {
    fn new(status: LoadStatus) -> Self {
        Self {
            status,
            rejected: Vec::new(),
        }
    }
}

/// A supplied update value that was refused; the field kept its old value.
#[derive(Debug)]
pub struct FieldRejection {
    pub field: Field,
    pub error: RosterError,
}

/// Outcome of [`RecordStore::update`].
#[derive(Debug)]
pub struct UpdateReport {
    /// The record as it stands after the update.
    pub student: Student,
    pub rejected: Vec<FieldRejection>,
}

/// Ordered, in-memory collection of students, persisted through a backend.
///
/// Records keep insertion order. Every mutating call rewrites the whole table
/// before it returns; there is no separate commit.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    students: Vec<Student>,
    load_report: LoadReport,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Build a store and load whatever the backend already holds.
    pub fn open(backend: B) -> Self {
        let mut store = Self {
            backend,
            students: Vec::new(),
            load_report: LoadReport::new(LoadStatus::Missing),
        };
        store.load_report = store.load();
        store
    }

    /// Report from the load run by [`RecordStore::open`] (or the latest `load`).
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the in-memory records with the backend's table.
    ///
    /// The first line is the header and is always discarded. Blank lines are
    /// ignored. A malformed line or a repeated id is skipped and reported.
    pub fn load(&mut self) -> LoadReport {
        self.students.clear();

        let content = match self.backend.read_table() {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!("No table at {}, starting empty", self.backend.location());
                return LoadReport::new(LoadStatus::Missing);
            }
            Err(e) => {
                warn!("Failed to read {}: {}", self.backend.location(), e);
                return LoadReport::new(LoadStatus::Failed(e));
            }
        };

        let mut rejected = Vec::new();
        for (idx, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;

            match Student::from_line(line) {
                Ok(student) if self.exists(student.id()) => {
                    warn!("Skipping line {}: duplicate id {}", line_no, student.id());
                    rejected.push(RosterError::DuplicateId(student.id()));
                }
                Ok(student) => self.students.push(student),
                Err(e) => {
                    let e = e.at_line(line_no);
                    warn!("Skipping line {}: {}", line_no, e);
                    rejected.push(e);
                }
            }
        }

        debug!(
            "Loaded {} students from {}",
            self.students.len(),
            self.backend.location()
        );
        LoadReport {
            status: LoadStatus::Loaded(self.students.len()),
            rejected,
        }
    }

    /// Rewrite the whole table: header, then one line per student in order.
    ///
    /// A failed write leaves the in-memory records as they are.
    pub fn save(&self) -> Result<()> {
        let mut table = String::with_capacity(HEADER.len() + 1 + self.students.len() * 48);
        table.push_str(HEADER);
        table.push('\n');
        for student in &self.students {
            table.push_str(&student.to_line());
            table.push('\n');
        }

        self.backend.write_table(&table).inspect_err(|e| {
            warn!("Failed to save {}: {}", self.backend.location(), e);
        })?;
        debug!(
            "Saved {} students to {}",
            self.students.len(),
            self.backend.location()
        );
        Ok(())
    }

    pub fn exists(&self, id: i64) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Case-insensitive substring search on names, in store order.
    pub fn find_by_name(&self, text: &str) -> Vec<&Student> {
        let needle = text.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Validate, append and persist a new student.
    pub fn add(&mut self, student: Student) -> Result<()> {
        student.validate()?;
        if self.exists(student.id()) {
            return Err(RosterError::DuplicateId(student.id()));
        }

        info!("Adding student {}", student.id());
        self.students.push(student);
        self.save()
    }

    /// Apply the supplied fields of `update` to the student with `id`, then persist.
    ///
    /// Invalid values are skipped one by one and listed in the report; the
    /// rest of the update still applies.
    pub fn update(&mut self, id: i64, update: StudentUpdate) -> Result<UpdateReport> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(RosterError::NotFound(id))?;

        let mut rejected = Vec::new();
        let mut reject = |field: Field, error: RosterError| {
            warn!("Keeping {} of student {}: {}", field, id, error);
            rejected.push(FieldRejection { field, error });
        };

        if let Some(name) = update.name {
            match model::validate_name(&name) {
                Ok(()) => student.set_name(name),
                Err(e) => reject(Field::Name, e),
            }
        }
        if let Some(age) = update.age {
            match model::validate_age(age) {
                Ok(()) => student.set_age(age),
                Err(e) => reject(Field::Age, e),
            }
        }
        if let Some(grade) = update.grade {
            match model::validate_grade(&grade) {
                Ok(()) => student.set_grade(grade),
                Err(e) => reject(Field::Grade, e),
            }
        }
        if let Some(email) = update.email {
            match model::validate_email(&email) {
                Ok(()) => student.set_email(email),
                Err(e) => reject(Field::Email, e),
            }
        }

        let student = student.clone();
        info!("Updated student {}", id);
        self.save()?;
        Ok(UpdateReport { student, rejected })
    }

    /// Remove the student with `id`. Returns false, without writing, when absent.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let Some(pos) = self.students.iter().position(|s| s.id() == id) else {
            return Ok(false);
        };

        self.students.remove(pos);
        info!("Deleted student {}", id);
        self.save()?;
        Ok(true)
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }
}
