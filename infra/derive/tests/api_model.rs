use tally_derive::api_model;

#[api_model]
pub struct ApplyPayload {
    pub account_id: String,
    pub loan_amount: f64,
    pub term_months: u32,
}

#[api_model(deny_unknown_fields = false)]
pub struct LenientPayload {
    pub loan_id: String,
}

#[api_model(rename_all = "snake_case")]
pub struct SnakePayload {
    pub loan_id: String,
}

#[test]
fn api_model_uses_camel_case() {
    let payload =
        ApplyPayload { account_id: "acc-1".into(), loan_amount: 2500.0, term_months: 12 };

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "accountId": "acc-1", "loanAmount": 2500.0, "termMonths": 12 })
    );
}

#[test]
fn api_model_denies_unknown_fields_by_default() {
    let raw = r#"{ "accountId": "a", "loanAmount": 1.0, "termMonths": 6, "extra": true }"#;
    assert!(serde_json::from_str::<ApplyPayload>(raw).is_err());
}

#[test]
fn api_model_can_opt_out_of_strict_fields() {
    let raw = r#"{ "loanId": "l-1", "status": "active" }"#;
    let parsed: LenientPayload = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.loan_id, "l-1");
}

#[test]
fn api_model_honours_rename_override() {
    let json = serde_json::to_value(SnakePayload { loan_id: "x".into() }).unwrap();
    assert_eq!(json, serde_json::json!({ "loan_id": "x" }));
}
