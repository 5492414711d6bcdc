//! Lesson 2: References
//!
//! Passing `&mut` to a function lets it write through to the caller's
//! variable. An `Option<&T>` that holds `None` is the absent reference, checked
//! before anything is read through it.
//!
//! Run with: cargo run --bin complete_02_pointers

use std::io::Write;
use tracing::debug;

use crate::Result;

/// Overwrites the caller's string with `"Orange"`, whatever it held before.
pub fn change_color(color: &mut String) {
    *color = String::from("Orange");
}

pub fn increment(n: &mut i32) {
    *n += 1;
}

/// Reports whether `ptr` refers to anything, reading through it only when it
/// does.
pub fn describe_pointer(ptr: Option<&i32>) -> String {
    match ptr {
        Some(value) => format!("Pointer is not nil, it points to: {}", value),
        None => "Pointer is nil".to_string(),
    }
}

pub fn run<W: Write>(mut out: W) -> Result<()> {
    debug!(lesson = "pointers", "lesson started");

    let mut color = String::from("Blue");
    writeln!(out, "Initial value of color: {}", color)?;

    change_color(&mut color);
    writeln!(out, "Value of color after function call: {}", color)?;

    let mut num = 42;
    increment(&mut num);
    writeln!(out, "Value of num after increment: {}", num)?;

    let ptr: Option<&i32> = None;
    writeln!(out, "{}", describe_pointer(ptr))?;

    out.flush()?;
    debug!(lesson = "pointers", "lesson finished");
    Ok(())
}
