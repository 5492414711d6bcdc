//! Lesson 3: Variables and Functions
//!
//! Deferred, inferred and destructured bindings; functions returning tuples;
//! a variadic sum; closures bound to names or called where they are written.
//!
//! Run with: cargo run --bin complete_03_variables_functions

use std::io::Write;
use tracing::debug;

use crate::Result;

/// Two independent values in one return, not a value-plus-error pair.
pub fn get_full_name() -> (&'static str, &'static str) {
    ("Asad", "Ali")
}

pub fn calculate_area(length: i32, width: i32) -> i32 {
    length * width
}

/// Returns `(sum, product)`.
pub fn arithmetic_operations(a: i32, b: i32) -> (i32, i32) {
    let sum = a + b;
    let product = a * b;
    (sum, product)
}

pub fn sum_all(numbers: &[i32]) -> i32 {
    numbers.iter().fold(0, |total, number| total + number)
}

/// Calls [`sum_all`] with any number of arguments: `sum_all!(1, 2, 3)`.
#[macro_export]
macro_rules! sum_all {
    ($($number:expr),* $(,)?) => {
        $crate::variables::sum_all(&[$($number),*])
    };
}

pub fn welcome() -> impl Fn(&str) -> String {
    |name| format!("Welcome, {}", name)
}

pub fn doubler() -> impl Fn(i32) -> i32 {
    |x| x * 2
}

pub fn run<W: Write>(mut out: W) -> Result<()> {
    debug!(lesson = "variables", "lesson started");
    writeln!(out, "Welcome to the tutorial on Variables and Functions!")?;

    // Declared with a type, assigned later. The compiler rejects any read
    // before the assignment.
    let greeting: &str;
    let number: i32;
    let decimal_number: f64;
    let is_active: bool;

    greeting = "Hello, World!";
    number = 42;
    decimal_number = 3.1415;
    is_active = true;

    writeln!(out, "Greeting: {}", greeting)?;
    writeln!(out, "Number: {}", number)?;
    writeln!(out, "Decimal Number: {}", decimal_number)?;
    writeln!(out, "Is Active: {}", is_active)?;

    // Types inferred from the initializer
    let city = "Vienna";
    let temperature = 18.5;
    let is_open = false;

    writeln!(out, "\nUsing shorthand declaration:")?;
    writeln!(out, "City: {}", city)?;
    writeln!(out, "Temperature: {}", temperature)?;
    writeln!(out, "Is Open: {}", is_open)?;

    let (country, capital, currency): (&str, &str, &str) = ("Austria", "Vienna", "Euro");
    writeln!(out, "\nMultiple variable declaration and initialization:")?;
    writeln!(
        out,
        "Country: {} , Capital: {} , Currency: {}",
        country, capital, currency
    )?;

    let (first_name, last_name) = get_full_name();
    writeln!(out, "\nFull Name: {} {}", first_name, last_name)?;

    let area = calculate_area(5, 10);
    writeln!(out, "Area of the rectangle: {}", area)?;

    let (sum, product) = arithmetic_operations(5, 3);
    writeln!(out, "Sum and Product of 5 and 3: {} {}", sum, product)?;

    let total_sum = sum_all!(1, 2, 3, 4, 5);
    writeln!(out, "Sum of all numbers: {}", total_sum)?;

    let message = welcome();
    writeln!(out, "{}", message("Asad"))?;

    let twice = doubler();
    let result = twice(7);
    writeln!(out, "\nThe double of 7 is: {}", result)?;

    writeln!(
        out,
        "Anonymous function with string: {}",
        (|name: &str| format!("Hello, {}", name))("Asad")
    )?;

    out.flush()?;
    debug!(lesson = "variables", "lesson finished");
    Ok(())
}
