//! # Student Records
//!
//! A [`Student`] is one row of the roster table. Its persisted form is a single
//! comma-delimited line with the fields in a fixed order:
//!
//! ```text
//! id,name,age,grade,email
//! 7,Ann Lee,20,A,ann@example.com
//! ```
//!
//! The delimiter is never escaped. Instead, [`Student::validate`] refuses any
//! field containing a comma or a line break, so every record that passes
//! validation survives a `to_line` / `from_line` round trip unchanged.
//!
//! Construction does not validate: `Student::new` is a plain data holder and the
//! store checks records on the way in (see [`crate::store::record_store`]).

use crate::error::{Result, RosterError};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Header line written at the top of every table.
pub const HEADER: &str = "id,name,age,grade,email";

pub const DELIMITER: char = ',';

pub const FIELD_COUNT: usize = 5;

pub const VALID_AGES: RangeInclusive<i32> = 1..=149;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: i64,
    name: String,
    age: i32,
    grade: String,
    email: String,
}

impl Student {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i32,
        grade: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade: grade.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub(crate) fn set_grade(&mut self, grade: String) {
        self.grade = grade;
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Check every field against the roster rules.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_age(self.age)?;
        validate_grade(&self.grade)?;
        validate_email(&self.email)?;
        Ok(())
    }

    /// Serialize to one table line, without a trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.id,
            self.name,
            self.age,
            self.grade,
            self.email,
            d = DELIMITER
        )
    }

    /// Parse one table line. The inverse of [`Student::to_line`].
    ///
    /// Format errors report line 1; the store rewrites the number with the
    /// line's real position when loading a whole table.
    pub fn from_line(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split(DELIMITER).collect();
        if parts.len() != FIELD_COUNT {
            return Err(format_error(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                parts.len()
            )));
        }

        let id = parts[0]
            .parse::<i64>()
            .map_err(|_| format_error(format!("id '{}' is not an integer", parts[0])))?;
        let age = parts[2]
            .parse::<i32>()
            .map_err(|_| format_error(format!("age '{}' is not an integer", parts[2])))?;

        Ok(Self::new(id, parts[1], age, parts[3], parts[4]))
    }
}

impl FromStr for Student {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Student::from_line(s)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Age: {} | Grade: {} | Email: {}",
            self.id, self.name, self.age, self.grade, self.email
        )
    }
}

fn format_error(reason: String) -> RosterError {
    RosterError::Format { line: 1, reason }
}

/// Fields of a student to change. `None` keeps the current value.
///
/// The id is deliberately absent: it cannot be changed once a record exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub grade: Option<String>,
    pub email: Option<String>,
}

impl StudentUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.grade.is_none() && self.email.is_none()
    }
}

/// The mutable fields of a student, used to report which part of an update was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Grade,
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Grade => "grade",
            Field::Email => "email",
        };
        f.write_str(label)
    }
}

pub fn validate_name(name: &str) -> Result<()> {
    validate_text(Field::Name, name)
}

pub fn validate_grade(grade: &str) -> Result<()> {
    validate_text(Field::Grade, grade)
}

pub fn validate_age(age: i32) -> Result<()> {
    if VALID_AGES.contains(&age) {
        Ok(())
    } else {
        Err(RosterError::Validation(format!(
            "age must be between {} and {}, got {}",
            VALID_AGES.start(),
            VALID_AGES.end(),
            age
        )))
    }
}

pub fn validate_email(email: &str) -> Result<()> {
    validate_text(Field::Email, email)?;
    if !email.contains('@') {
        return Err(RosterError::Validation(format!(
            "email '{}' must contain '@'",
            email
        )));
    }
    Ok(())
}

fn validate_text(field: Field, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::Validation(format!("{} cannot be empty", field)));
    }
    // The table format has no escaping, so a comma would shift every later field.
    if value.contains(DELIMITER) {
        return Err(RosterError::Validation(format!(
            "{} cannot contain '{}'",
            field, DELIMITER
        )));
    }
    // Each record is exactly one line of the table.
    if value.contains(['\n', '\r']) {
        return Err(RosterError::Validation(format!("{} cannot contain a line break", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Student {
        Student::new(1, "Ann", 20, "A", "ann@x.com")
    }

    #[test]
    fn serializes_fields_in_fixed_order() {
        assert_eq!(ann().to_line(), "1,Ann,20,A,ann@x.com");
    }

    #[test]
    fn parses_what_it_serializes() {
        let student = Student::new(42, "Anand Rao", 149, "10th", "a.rao@school.org");
        let parsed = Student::from_line(&student.to_line()).unwrap();
        assert_eq!(parsed, student);
    }

    #[test]
    fn parses_via_from_str() {
        let parsed: Student = "3,Bob,31,B+,bob@x".parse().unwrap();
        assert_eq!(parsed.id(), 3);
        assert_eq!(parsed.name(), "Bob");
        assert_eq!(parsed.age(), 31);
        assert_eq!(parsed.grade(), "B+");
        assert_eq!(parsed.email(), "bob@x");
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = Student::from_line("1,Ann,20,A").unwrap_err();
        assert!(matches!(err, RosterError::Format { line: 1, .. }));

        let err = Student::from_line("1,Ann, Jr,20,A,ann@x.com").unwrap_err();
        assert!(matches!(err, RosterError::Format { .. }));
    }

    #[test]
    fn rejects_non_integer_id_and_age() {
        let err = Student::from_line("one,Ann,20,A,ann@x.com").unwrap_err();
        assert!(err.to_string().contains("id 'one'"));

        let err = Student::from_line("1,Ann,twenty,A,ann@x.com").unwrap_err();
        assert!(err.to_string().contains("age 'twenty'"));
    }

    #[test]
    fn display_labels_every_field() {
        assert_eq!(
            ann().to_string(),
            "ID: 1 | Name: Ann | Age: 20 | Grade: A | Email: ann@x.com"
        );
    }

    #[test]
    fn validate_accepts_well_formed_student() {
        assert!(ann().validate().is_ok());
    }

    #[test]
    fn validate_checks_age_bounds() {
        assert!(validate_age(1).is_ok());
        assert!(validate_age(149).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(150).is_err());
        assert!(validate_age(-3).is_err());
    }

    #[test]
    fn validate_requires_at_sign_in_email() {
        assert!(validate_email("ann@x.com").is_ok());
        assert!(validate_email("@").is_ok());
        assert!(validate_email("ann.x.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn validate_rejects_blank_and_comma_text() {
        assert!(validate_name("   ").is_err());
        assert!(validate_grade("").is_err());
        let err = validate_name("Lee, Ann").unwrap_err();
        assert!(err.to_string().contains("name cannot contain ','"));
    }

    #[test]
    fn validate_rejects_line_breaks() {
        let err = validate_name("Ann\nLee").unwrap_err();
        assert!(err.to_string().contains("name cannot contain a line break"));
        assert!(validate_grade("A\r\n").is_err());
        assert!(validate_email("a@x\r").is_err());
        assert!(Student::new(1, "Ann", 20, "A\nB", "a@x").validate().is_err());
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(StudentUpdate::new().is_empty());
        assert!(!StudentUpdate::new().age(3).is_empty());
    }
}
