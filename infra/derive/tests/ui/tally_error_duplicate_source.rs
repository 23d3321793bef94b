#[tally_derive::tally_error]
pub enum AmountError {
    First { source: std::num::ParseIntError, context: Option<std::borrow::Cow<'static, str>> },
    Second { source: std::num::ParseIntError, context: Option<std::borrow::Cow<'static, str>> },
}

fn main() {}
