//! PIX BR Code CLI
//!
//! Reads payment requests from a CSV file and writes one BR Code per valid
//! row to stdout as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- requests.csv > codes.csv
//! ```
//!
//! Input header: `key,merchant_name,merchant_city,amount,txid`
//! (`amount` and `txid` are optional).
//!
//! Output header: `row,key,amount,txid,brcode`, one line per encoded request
//! in input order. `row` is the 1-based input line; rows that fail validation
//! or encoding are logged at warn level and left out.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use pix_brcode::{BrCodeBatch, BrCodeError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(BrCodeError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut batch = BrCodeBatch::new();
    batch.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    batch.write_output(handle)?;

    Ok(())
}
