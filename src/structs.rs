//! Lesson 1: Structs and Methods
//!
//! Records with public fields, a method that works on its own copy of the
//! receiver, a method that mutates through `&mut self`, and composition of one
//! record inside another.
//!
//! Run with: cargo run --bin complete_01_structs_methods

use chrono::{DateTime, Local};
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

use crate::Result;

// =============================================================================
// Records
// =============================================================================

/// A person with contact details. Every field is public and can be changed
/// independently of the others.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: u32,
    pub birth_date: DateTime<Local>,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            age: 0,
            birth_date: Local::now(),
        }
    }

    /// Takes the receiver by value: the method owns a copy and the caller's
    /// record is never touched.
    pub fn full_name(self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Takes the receiver by exclusive reference, so the change is visible to
    /// the caller. No validation of `new_number`.
    pub fn set_phone_number(&mut self, new_number: impl Into<String>) {
        self.phone_number = new_number.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    pub fn new(city: impl Into<String>, state: impl Into<String>, zip_code: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }
}

/// An employee composed from a name and an [`Address`].
///
/// The address stays an ordinary field; the accessors below read through it
/// so callers can treat the city, state and zip code as the employee's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub address: Address,
}

impl Employee {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.address.city
    }

    pub fn state(&self) -> &str {
        &self.address.state
    }

    pub fn zip_code(&self) -> &str {
        &self.address.zip_code
    }

    /// Formats as `City, State - ZipCode`.
    pub fn full_address(&self) -> String {
        format!("{}, {} - {}", self.city(), self.state(), self.zip_code())
    }
}

// =============================================================================
// Visibility
// =============================================================================

// Private to this module, though its field is `pub`: code outside the lesson
// can neither name nor build one.
#[derive(Debug, Clone)]
struct MyStruct {
    pub first_name: String,
}

impl MyStruct {
    fn first_name(&self) -> &str {
        &self.first_name
    }
}

// =============================================================================
// Log-style output
// =============================================================================

pub const LOG_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Writes lines the way a standard logger does: `YYYY/MM/DD HH:MM:SS message`.
///
/// The timestamp comes from `clock`, which tests replace with a fixed instant.
pub struct LogWriter<W, C> {
    out: W,
    clock: C,
}

impl<W, C> LogWriter<W, C>
where
    W: Write,
    C: Fn() -> DateTime<Local>,
{
    pub fn new(out: W, clock: C) -> Self {
        Self { out, clock }
    }

    pub fn log(&mut self, message: impl fmt::Display) -> io::Result<()> {
        let stamp = (self.clock)().format(LOG_TIME_FORMAT);
        writeln!(self.out, "{} {}", stamp, message)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

// =============================================================================
// Lesson
// =============================================================================

pub fn run<W: Write>(out: W) -> Result<()> {
    run_with_clock(out, Local::now)
}

pub fn run_with_clock<W, C>(out: W, clock: C) -> Result<()>
where
    W: Write,
    C: Fn() -> DateTime<Local>,
{
    debug!(lesson = "structs", "lesson started");
    let mut log = LogWriter::new(out, clock);

    let mut user = User::new("Trevor", "Sawler", "1 555 555 1212");

    // full_name consumes a clone; `user` is still ours afterwards.
    log.log(format_args!("User's full name: {}", user.clone().full_name()))?;
    log.log(format_args!("User's phone number before change: {}", user.phone_number))?;

    user.set_phone_number("1 555 555 1234");
    log.log(format_args!("User's phone number after change: {}", user.phone_number))?;

    let emp = Employee::new("Asad", Address::new("Vienna", "Austria", "1010"));
    log.log(format_args!("Employee's name: {}", emp.name))?;
    log.log(format_args!("Employee's address: {}", emp.full_address()))?;

    let my_var = MyStruct {
        first_name: "John".to_string(),
    };
    log.log(format_args!("myVar's First Name: {}", my_var.first_name()))?;

    let my_var2 = MyStruct {
        first_name: "Mary".to_string(),
    };
    log.log(format_args!("myVar2's First Name: {}", my_var2.first_name()))?;

    log.into_inner().flush()?;
    debug!(lesson = "structs", "lesson finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn fixed_clock() -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        Local.from_local_datetime(&naive).unwrap()
    }

    fn sample_employee() -> Employee {
        Employee::new("Asad", Address::new("Vienna", "Austria", "1010"))
    }

    #[test]
    fn test_full_name_joins_first_and_last() {
        let user = User::new("Trevor", "Sawler", "1 555 555 1212");
        assert_eq!(user.full_name(), "Trevor Sawler");
    }

    #[test]
    fn test_full_name_leaves_original_untouched() {
        let user = User::new("Trevor", "Sawler", "1 555 555 1212");
        let before = user.clone();

        let _ = user.clone().full_name();
        assert_eq!(user, before);
    }

    #[test]
    fn test_set_phone_number_mutates_in_place() {
        let mut user = User::new("Trevor", "Sawler", "1 555 555 1212");
        let copy = user.clone();

        user.set_phone_number("1 555 555 1234");

        assert_eq!(user.phone_number, "1 555 555 1234");
        assert_eq!(copy.phone_number, "1 555 555 1212");
        assert_eq!(user.first_name, "Trevor");
    }

    #[test]
    fn test_set_phone_number_accepts_anything() {
        let mut user = User::new("Trevor", "Sawler", "1 555 555 1212");
        user.set_phone_number("");
        assert_eq!(user.phone_number, "");
    }

    #[test]
    fn test_new_user_defaults_age() {
        let user = User::new("Trevor", "Sawler", "1 555 555 1212");
        assert_eq!(user.age, 0);
    }

    #[test]
    fn test_new_user_birth_date_is_now_with_offset() {
        let before = Local::now();
        let user = User::new("Trevor", "Sawler", "1 555 555 1212");
        let after = Local::now();

        assert!(before <= user.birth_date && user.birth_date <= after);
        assert_eq!(user.birth_date.offset(), before.offset());
    }

    #[test]
    fn test_full_address_format() {
        assert_eq!(sample_employee().full_address(), "Vienna, Austria - 1010");
    }

    #[test]
    fn test_employee_reads_through_address() {
        let emp = sample_employee();
        assert_eq!(emp.city(), "Vienna");
        assert_eq!(emp.state(), "Austria");
        assert_eq!(emp.zip_code(), "1010");
        assert_eq!(emp.address(), &Address::new("Vienna", "Austria", "1010"));
    }

    #[test]
    fn test_my_struct_first_name() {
        let my_var = MyStruct {
            first_name: "John".to_string(),
        };
        assert_eq!(my_var.first_name(), "John");
    }

    #[test]
    fn test_log_writer_prefixes_timestamp() {
        let mut log = LogWriter::new(Vec::new(), fixed_clock);
        log.log("hello").unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(text, "2024/03/09 14:05:07 hello\n");
    }

    #[test]
    fn test_lesson_transcript() {
        let mut out = Vec::new();
        run_with_clock(&mut out, fixed_clock).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = [
            "User's full name: Trevor Sawler",
            "User's phone number before change: 1 555 555 1212",
            "User's phone number after change: 1 555 555 1234",
            "Employee's name: Asad",
            "Employee's address: Vienna, Austria - 1010",
            "myVar's First Name: John",
            "myVar2's First Name: Mary",
        ];

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), expected.len());
        for (line, message) in lines.iter().zip(expected) {
            assert_eq!(*line, format!("2024/03/09 14:05:07 {}", message));
        }
    }
}
