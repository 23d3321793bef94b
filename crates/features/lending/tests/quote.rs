use tally_lending::{
    DtiBand, LendingPolicy, LoanQuote, Rejection, check_affordability, compute_loan_quote,
    debt_to_income_ratio,
};

#[test]
fn smallest_offered_loan() {
    let quote = compute_loan_quote(100.0, 6, 5.5, 2_000.0);
    assert!((quote.monthly_payment() - 16.94).abs() < 0.01);

    let summary = quote.summary(&LendingPolicy::default());
    assert_eq!(summary.monthly_payment, 16.94);
    assert_eq!(summary.total_payment, 101.61);
    assert_eq!(summary.total_interest, 1.61);
}

#[test]
fn blank_form_never_fails() {
    let quote = compute_loan_quote(0.0, 0, 5.5, 0.0);
    assert_eq!(quote.monthly_payment(), 0.0);
    assert_eq!(quote.total_payment(), 0.0);
    assert_eq!(quote.total_interest(), 0.0);
    assert_eq!(quote.debt_to_income_ratio(), 0.0);
}

#[test]
fn quote_at_zero_rate() {
    let quote = compute_loan_quote(1_200.0, 12, 0.0, 1_000.0);
    assert_eq!(quote.monthly_payment(), 100.0);
    assert_eq!(quote.total_payment(), 1_200.0);
    assert_eq!(quote.total_interest(), 0.0);
    assert_eq!(quote.debt_to_income_ratio(), 10.0);
}

#[test]
fn fifty_percent_ratio_is_blocking() {
    let ratio = debt_to_income_ratio(500.0, 1_000.0);
    assert_eq!(ratio, 50.0);

    let policy = LendingPolicy::default();
    assert_eq!(DtiBand::classify(ratio, &policy), DtiBand::Excessive);
    assert_eq!(
        check_affordability(ratio, &policy),
        Err(Rejection::DebtToIncomeExceeded { ratio: 50.0, ceiling: 40.0 })
    );
}

#[test]
fn quote_serializes_in_camel_case() {
    let quote = LoanQuote::compute(1_200.0, 12, 0.0, 1_000.0);
    let json = serde_json::to_value(quote).unwrap();

    assert_eq!(json["monthlyPayment"], 100.0);
    assert_eq!(json["debtToIncomeRatio"], 10.0);
    assert_eq!(json["termMonths"], 12);
}
