//! Interactive menu.
//!
//! Reads raw lines from any `BufRead` and writes to any `Write`, so the whole
//! loop can be driven from a byte buffer in tests. Input problems are printed
//! and the loop carries on; only I/O failures on the console itself end it.

use super::print::{print_full_students, print_messages, print_students};
use roster::api::{CmdMessage, CmdResult, RosterApi};
use roster::error::Result;
use roster::model::{Student, StudentUpdate};
use roster::store::StorageBackend;
use std::io::{BufRead, Write};

const RULE_WIDTH: usize = 40;

/// Ask for a yes/no confirmation. Anything but `y`/`yes` (or EOF) is a no.
pub(crate) fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "Are you sure? (yes/no): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub(crate) struct Menu<'a, B: StorageBackend, R: BufRead, W: Write> {
    api: &'a mut RosterApi<B>,
    input: R,
    out: W,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub(crate) fn new(api: &'a mut RosterApi<B>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub(crate) fn run(mut self) -> Result<()> {
        writeln!(self.out, "Welcome to Roster!")?;
        let startup = self.api.startup_messages();
        print_messages(&mut self.out, &startup)?;

        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt("Choose an option (1-6): ")? else {
                break;
            };

            match choice.parse::<u8>() {
                Ok(1) => self.add()?,
                Ok(2) => self.view_all()?,
                Ok(3) => self.update()?,
                Ok(4) => self.delete()?,
                Ok(5) => self.search()?,
                Ok(6) => break,
                _ => self.error("Invalid choice! Please select 1-6.")?,
            }
        }

        writeln!(self.out, "Goodbye. All changes have been saved.")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "MAIN MENU")?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "1. Add New Student")?;
        writeln!(self.out, "2. View All Students")?;
        writeln!(self.out, "3. Update Student")?;
        writeln!(self.out, "4. Delete Student")?;
        writeln!(self.out, "5. Search Student")?;
        writeln!(self.out, "6. Exit")?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for an integer; prints `invalid` and returns `None` on bad input.
    fn prompt_number<T: std::str::FromStr>(
        &mut self,
        label: &str,
        invalid: &str,
    ) -> Result<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.parse::<T>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.error(invalid)?;
                Ok(None)
            }
        }
    }

    fn error(&mut self, text: &str) -> Result<()> {
        print_messages(&mut self.out, &[CmdMessage::error(text)])?;
        Ok(())
    }

    /// Print a command's messages, or its error, and keep going.
    fn report(&mut self, outcome: Result<CmdResult>) -> Result<Option<CmdResult>> {
        match outcome {
            Ok(result) => {
                print_messages(&mut self.out, &result.messages)?;
                Ok(Some(result))
            }
            Err(e) => {
                self.error(&e.to_string())?;
                Ok(None)
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.out, "\nAdding New Student")?;
        let invalid = "Please enter valid numbers for ID and age!";

        let Some(id) = self.prompt_number::<i64>("Enter Student ID: ", invalid)? else {
            return Ok(());
        };
        if self.api.exists(id) {
            return self.error(&format!("Student ID {} already exists!", id));
        }
        let Some(name) = self.prompt("Enter Student Name: ")? else {
            return Ok(());
        };
        let Some(age) = self.prompt_number::<i32>("Enter Student Age: ", invalid)? else {
            return Ok(());
        };
        let Some(grade) = self.prompt("Enter Student Grade: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter Student Email: ")? else {
            return Ok(());
        };

        let outcome = self
            .api
            .add_student(Student::new(id, name, age, grade, email));
        self.report(outcome)?;
        Ok(())
    }

    fn view_all(&mut self) -> Result<()> {
        let outcome = self.api.list_students();
        if let Ok(result) = &outcome {
            print_students(&mut self.out, &result.listed)?;
        }
        self.report(outcome)?;
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        writeln!(self.out, "\nUpdating Student")?;
        let invalid = "Please enter a valid student ID!";
        let Some(id) = self.prompt_number::<i64>("Enter Student ID to update: ", invalid)? else {
            return Ok(());
        };
        let current = match self.api.find_student(id) {
            Ok(result) => result.listed.into_iter().next(),
            Err(e) => return self.error(&e.to_string()),
        };
        let Some(current) = current else {
            return Ok(());
        };

        writeln!(self.out, "Current details: {}", current)?;
        writeln!(self.out, "Enter new details (press Enter to keep current value):")?;

        let mut update = StudentUpdate::new();
        let Some(name) = self.prompt(&format!("New name [{}]: ", current.name()))? else {
            return Ok(());
        };
        if !name.is_empty() {
            update.name = Some(name);
        }

        let Some(age) = self.prompt(&format!("New age [{}]: ", current.age()))? else {
            return Ok(());
        };
        if !age.is_empty() {
            match age.parse::<i32>() {
                Ok(age) => update.age = Some(age),
                Err(_) => print_messages(
                    &mut self.out,
                    &[CmdMessage::warning("Invalid age format. Keeping current age.")],
                )?,
            }
        }

        let Some(grade) = self.prompt(&format!("New grade [{}]: ", current.grade()))? else {
            return Ok(());
        };
        if !grade.is_empty() {
            update.grade = Some(grade);
        }

        let Some(email) = self.prompt(&format!("New email [{}]: ", current.email()))? else {
            return Ok(());
        };
        if !email.is_empty() {
            update.email = Some(email);
        }

        let outcome = self.api.update_student(id, update);
        self.report(outcome)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        writeln!(self.out, "\nDeleting Student")?;
        let invalid = "Please enter a valid student ID!";
        let Some(id) = self.prompt_number::<i64>("Enter Student ID to delete: ", invalid)? else {
            return Ok(());
        };
        let student = match self.api.find_student(id) {
            Ok(result) => result.listed.into_iter().next(),
            Err(e) => return self.error(&e.to_string()),
        };
        if let Some(student) = student {
            writeln!(self.out, "Student to delete: {}", student)?;
        }

        if !confirm(&mut self.input, &mut self.out)? {
            print_messages(&mut self.out, &[CmdMessage::info("Deletion cancelled.")])?;
            return Ok(());
        }

        let outcome = self.api.delete_student(id);
        self.report(outcome)?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.out, "\nSearch Student")?;
        writeln!(self.out, "1. Search by ID")?;
        writeln!(self.out, "2. Search by Name")?;
        let Some(kind) =
            self.prompt_number::<u8>("Choose search type (1 or 2): ", "Please enter valid input!")?
        else {
            return Ok(());
        };

        match kind {
            1 => {
                let Some(id) =
                    self.prompt_number::<i64>("Enter Student ID: ", "Please enter valid input!")?
                else {
                    return Ok(());
                };
                match self.api.find_student(id) {
                    Ok(result) => print_full_students(&mut self.out, &result.listed)?,
                    Err(e) => self.error(&e.to_string())?,
                }
            }
            2 => {
                let Some(text) = self.prompt("Enter Student Name (or part of name): ")? else {
                    return Ok(());
                };
                let outcome = self.api.search_students(&text);
                if let Some(result) = self.report(outcome)? {
                    print_full_students(&mut self.out, &result.listed)?;
                }
            }
            _ => self.error("Invalid search type!")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::store::mem_backend::MemBackend;
    use std::io::Cursor;

    fn drive(api: &mut RosterApi<MemBackend>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Menu::new(api, Cursor::new(script.to_string()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn api_with_ann() -> RosterApi<MemBackend> {
        let mut api = RosterApi::new(MemBackend::new());
        let ann = Student::new(1, "Ann", 20, "A", "ann@x.com");
        api.add_student(ann).unwrap();
        api
    }

    #[test]
    fn adds_a_student_and_exits() {
        let mut api = RosterApi::new(MemBackend::new());
        let out = drive(&mut api, "1\n7\nZoe\n19\nB\nzoe@x.com\n6\n");

        assert!(out.contains("Student added (7): Zoe"));
        assert!(out.contains("Goodbye"));
        assert_eq!(api.count(), 1);
    }

    #[test]
    fn add_rejects_existing_id_before_asking_more() {
        let mut api = api_with_ann();
        let out = drive(&mut api, "1\n1\n6\n");
        assert!(out.contains("Student ID 1 already exists!"));
        assert_eq!(api.count(), 1);
    }

    #[test]
    fn add_reports_validation_errors() {
        let mut api = RosterApi::new(MemBackend::new());
        let out = drive(&mut api, "1\n7\nZoe\n19\nB\nzoe.x.com\n6\n");
        assert!(out.contains("must contain '@'"));
        assert_eq!(api.count(), 0);
    }

    #[test]
    fn non_numeric_input_is_reported_not_fatal() {
        let mut api = RosterApi::new(MemBackend::new());
        let out = drive(&mut api, "abc\n1\nxx\n6\n");
        assert!(out.contains("Invalid choice! Please select 1-6."));
        assert!(out.contains("Please enter valid numbers for ID and age!"));
    }

    #[test]
    fn update_keeps_blank_answers() {
        let mut api = api_with_ann();
        let out = drive(&mut api, "3\n1\n\n200\nC\n\n6\n");

        assert!(out.contains("Kept current age"));
        let student = api.store().find_by_id(1).unwrap();
        assert_eq!(student.name(), "Ann");
        assert_eq!(student.age(), 20);
        assert_eq!(student.grade(), "C");
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut api = api_with_ann();
        let out = drive(&mut api, "4\n1\nno\n6\n");
        assert!(out.contains("Deletion cancelled."));
        assert_eq!(api.count(), 1);

        let out = drive(&mut api, "4\n1\nYES\n6\n");
        assert!(out.contains("Student deleted (1): Ann"));
        assert_eq!(api.count(), 0);
    }

    #[test]
    fn search_by_name_lists_matches() {
        let mut api = api_with_ann();
        let out = drive(&mut api, "5\n2\nAN\n6\n");
        assert!(out.contains("1. ID: 1 | Name: Ann"));
    }

    #[test]
    fn search_by_missing_id_reports_not_found() {
        let mut api = api_with_ann();
        let out = drive(&mut api, "5\n1\n9\n6\n");
        assert!(out.contains("Student with ID 9 not found"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut api = RosterApi::new(MemBackend::new());
        let out = drive(&mut api, "1\n5\n");
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn confirm_accepts_y_and_yes_only() {
        let mut sink = Vec::new();
        for (answer, expected) in [("y\n", true), ("Yes\n", true), ("n\n", false), ("", false)] {
            let mut input = Cursor::new(answer.to_string());
            assert_eq!(confirm(&mut input, &mut sink).unwrap(), expected);
        }
    }
}
