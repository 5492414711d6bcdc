use basics_tour::{init_logging, variables, Result};
use std::io;

fn main() -> Result<()> {
    init_logging();
    variables::run(io::stdout().lock())
}
