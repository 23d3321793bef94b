use proptest::prelude::*;
use tally_lending::{
    AmortizationSchedule, LendingPolicy, compute_loan_quote, monthly_payment, monthly_rate,
};

/// Product-like rates plus rates so small that `1 + r` is barely above one.
fn annual_rate() -> impl Strategy<Value = f64> {
    prop_oneof![0.0f64..30.0, 1e-13f64..1e-9]
}

proptest! {
    #[test]
    fn payment_is_positive_for_valid_inputs(
        principal in 0.01f64..5_000_000.0,
        term in 1u32..=2_000_000,
        rate in annual_rate(),
    ) {
        prop_assert!(monthly_payment(principal, term, rate) > 0.0);
    }

    #[test]
    fn payment_is_bounded_by_its_limits(
        principal in 1.0f64..5_000_000.0,
        term in 1u32..=2_000_000,
        rate in annual_rate(),
    ) {
        // Never below the interest-only payment, never above interest plus an even split.
        let payment = monthly_payment(principal, term, rate);
        let interest = principal * monthly_rate(rate);
        let even_split = principal / f64::from(term);

        prop_assert!(payment >= interest * (1.0 - 1e-12));
        prop_assert!(payment <= (interest + even_split) * (1.0 + 1e-12));
    }

    #[test]
    fn tiny_rates_repay_the_principal(
        principal in 100.0f64..1_000_000.0,
        term in 1u32..=600,
        rate in 1e-13f64..1e-9,
    ) {
        let repaid = monthly_payment(principal, term, rate) * f64::from(term);
        prop_assert!((repaid - principal).abs() <= 1e-9 * principal, "{repaid} vs {principal}");
    }

    #[test]
    fn zero_rate_divides_evenly(principal in 0.01f64..5_000_000.0, term in 1u32..=480) {
        prop_assert_eq!(monthly_payment(principal, term, 0.0), principal / f64::from(term));
    }

    #[test]
    fn interest_is_total_minus_principal(
        principal in 100.0f64..1_000_000.0,
        term in 1u32..=360,
        rate in 0.0f64..30.0,
        income in 0.0f64..100_000.0,
    ) {
        let quote = compute_loan_quote(principal, term, rate, income);
        let expected = quote.monthly_payment() * f64::from(term) - principal;
        prop_assert!((quote.total_interest() - expected).abs() <= 1e-9 * principal.max(1.0));
        prop_assert!(quote.total_interest() >= -1e-6);
    }

    #[test]
    fn longer_terms_lower_the_payment(
        principal in 100.0f64..1_000_000.0,
        term in 1u32..360,
        rate in annual_rate(),
    ) {
        let shorter = monthly_payment(principal, term, rate);
        let longer = monthly_payment(principal, term + 1, rate);
        prop_assert!(longer < shorter, "term {term}: {longer} !< {shorter}");
    }

    #[test]
    fn payment_never_undercuts_interest_free_split(
        principal in 100.0f64..1_000_000.0,
        term in 1u32..=360,
        rate in annual_rate(),
    ) {
        let payment = monthly_payment(principal, term, rate);
        prop_assert!(payment >= principal / f64::from(term) * (1.0 - 1e-12));
    }

    #[test]
    fn schedule_repays_exactly_the_principal(
        principal in 100.0f64..500_000.0,
        term in 1u32..=120,
        rate in 0.0f64..25.0,
    ) {
        let schedule = AmortizationSchedule::build(principal, term, rate);
        let repaid: f64 = schedule.installments().iter().map(|i| i.principal).sum();

        prop_assert_eq!(schedule.installments().len(), term as usize);
        prop_assert!((repaid - principal).abs() <= 1e-6 * principal);
        prop_assert_eq!(schedule.installments().last().map(|i| i.balance), Some(0.0));
    }

    #[test]
    fn ratio_matches_definition(
        principal in 100.0f64..100_000.0,
        income in 1.0f64..50_000.0,
    ) {
        let policy = LendingPolicy::default();
        let quote = compute_loan_quote(principal, 12, policy.annual_rate_percent, income);
        prop_assert_eq!(quote.debt_to_income_ratio(), quote.monthly_payment() / income * 100.0);
    }
}
