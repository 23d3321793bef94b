#[tally_derive::tally_error]
pub enum ParseError {
    Parse { source: std::num::ParseIntError, context: String },
}

fn main() {}
