//! Declaring I/O failure kinds at a filesystem boundary.
//!
//! Run with: cargo run --example io_boundary --features std

use error_fence::{io_kind, BoxError, ResultExt};
use std::fs;
use std::io::ErrorKind;

/// Reads a config file, declaring only "not found" as a returnable error.
fn read_config(path: &str) -> Result<String, BoxError> {
    let missing = io_kind(ErrorKind::NotFound);
    fs::read_to_string(path)
        .map_err(BoxError::from)
        .fence(&[&missing])
}

fn main() {
    match read_config("definitely-not-here.toml") {
        Ok(config) => println!("loaded {} bytes", config.len()),
        Err(err) => {
            // A NotFound error is declared, so the io::Error survives intact.
            println!("declared: {}", err.downcast_ref::<std::io::Error>().is_some());
            println!("{err}");
        }
    }
}
