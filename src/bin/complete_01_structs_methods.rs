use basics_tour::{init_logging, structs, Result};
use std::io;

fn main() -> Result<()> {
    init_logging();
    structs::run(io::stdout().lock())
}
