use basics_tour::{init_logging, pointers, Result};
use std::io;

fn main() -> Result<()> {
    init_logging();
    pointers::run(io::stdout().lock())
}
