use basics_tour::{init_logging, Demo, Result};
use clap::builder::FalseyValueParser;
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// Runs the basics lessons one after another.
#[derive(Parser, Debug)]
#[command(name = "tour", version, about)]
struct Cli {
    /// Lessons to run, in order. Runs all of them when omitted.
    #[arg(value_enum)]
    demos: Vec<Demo>,

    /// Print banners without color. The env var takes `1`, `yes`, `on` as
    /// well as `true`; `0`, `no`, `off`, `false` or empty leave color on.
    #[arg(long, env = "TOUR_NO_COLOR", value_parser = FalseyValueParser::new())]
    no_color: bool,
}

impl Cli {
    fn selected(&self) -> Vec<Demo> {
        if self.demos.is_empty() {
            Demo::ALL.to_vec()
        } else {
            self.demos.clone()
        }
    }
}

fn banner(demo: Demo) -> String {
    format!("=== {} ===", demo.title()).bold().cyan().to_string()
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let selected = cli.selected();
    debug!(count = selected.len(), "starting tour");

    run_tour(&selected, io::stdout().lock())
}

/// Writes each lesson under its banner, with a blank line between lessons.
fn run_tour<W: Write>(demos: &[Demo], mut out: W) -> Result<()> {
    for (i, demo) in demos.iter().copied().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", banner(demo))?;
        demo.run(&mut out)?;
    }

    out.flush()?;
    Ok(())
}
