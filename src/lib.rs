//! Basics Tour - Runnable Lessons
//!
//! Three small lessons on the building blocks of the language:
//!
//! - [`structs`]: records, methods that take `self` by copy or by `&mut`,
//!   composition and field visibility
//! - [`pointers`]: writing through `&mut` references and the absent
//!   reference (`Option<&T>`)
//! - [`variables`]: bindings, multiple return values, variadic sums and
//!   closures
//!
//! Each lesson writes its transcript to any [`std::io::Write`] sink. Run one
//! with:
//! ```bash
//! cargo run --bin complete_02_pointers
//! ```
//!
//! Or run the whole tour:
//! ```bash
//! cargo run --bin tour -- structs variables
//! ```

pub mod demo;
pub mod error;
pub mod pointers;
pub mod structs;
pub mod variables;

pub use demo::Demo;
pub use error::{Result, TourError};

use tracing_subscriber::EnvFilter;

/// Installs the stderr `tracing` subscriber shared by every binary.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown so stdout
/// carries nothing but the lesson transcript.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
