#[tally_derive::tally_error]
pub enum ShapeError {
    Broken(String),
}

fn main() {}
