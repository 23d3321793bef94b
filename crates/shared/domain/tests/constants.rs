use tally_domain::constants::{
    ANNUAL_RATE_PERCENT, DEBT_TO_INCOME_WARNING, INSTANT_APPROVAL_LIMIT, MAX_DEBT_TO_INCOME,
    MAX_TERM_MONTHS, MIN_MONTHLY_INCOME, MIN_PRINCIPAL, MIN_TERM_MONTHS, MONTHS_PER_YEAR,
};

#[test]
fn constants_match_the_loan_product() {
    assert_eq!(ANNUAL_RATE_PERCENT, 5.5);
    assert_eq!(MIN_PRINCIPAL, 100.0);
    assert_eq!(MIN_MONTHLY_INCOME, 500.0);
    assert_eq!(MIN_TERM_MONTHS, 6);
    assert_eq!(MAX_TERM_MONTHS, 60);
    assert_eq!(MAX_DEBT_TO_INCOME, 40.0);
    assert_eq!(DEBT_TO_INCOME_WARNING, 30.0);
    assert_eq!(INSTANT_APPROVAL_LIMIT, 10_000.0);
    assert_eq!(MONTHS_PER_YEAR, 12);
}

