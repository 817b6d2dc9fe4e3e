use std::io::{self, Stdout};

use csv::Writer;

/// Outcome rows go to stdout; logs go to stderr
pub fn build_csv_writer() -> Writer<Stdout> {
    return Writer::from_writer(io::stdout());
}
