//! Weft styling compiler binary

use std::process;

fn main() {
    env_logger::init();
    process::exit(weft::cli::run());
}
