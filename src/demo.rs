use clap::ValueEnum;
use std::fmt;
use std::io::Write;
use tracing::info;

use crate::{pointers, structs, variables, Result};

/// One runnable lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Structs,
    Pointers,
    Variables,
}

impl Demo {
    /// Tour order.
    pub const ALL: [Demo; 3] = [Demo::Structs, Demo::Pointers, Demo::Variables];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Structs => "Structs and Methods",
            Demo::Pointers => "Pointers",
            Demo::Variables => "Variables and Functions",
        }
    }

    pub fn run<W: Write>(self, out: W) -> Result<()> {
        info!(lesson = %self, "running lesson");
        match self {
            Demo::Structs => structs::run(out),
            Demo::Pointers => pointers::run(out),
            Demo::Variables => variables::run(out),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Demo::Structs => "structs",
            Demo::Pointers => "pointers",
            Demo::Variables => "variables",
        };
        write!(f, "{}", name)
    }
}
