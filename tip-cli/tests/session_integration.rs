//! Integration tests that drive a whole session through text input.
//!
//! These complement the unit tests inside session.rs by feeding command
//! lines through `Session::run` and checking both the rendered output and
//! the resulting widget state.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tip_cli::{AppConfig, Session};

/// Runs `script` through a fresh session and returns it with its output.
fn run_script(
    config: &AppConfig,
    script: &str,
) -> (Session, String) {
    let mut session = Session::new(config);
    let mut output = Vec::new();

    session
        .run(script.as_bytes(), &mut output)
        .expect("session should run to completion");

    (session, String::from_utf8(output).expect("output should be UTF-8"))
}

#[test]
fn test_two_payments_recorded_newest_first() {
    let script = "amount 50\npreset 10\npay\namount 20\npreset 25\npay\n";

    let (session, output) = run_script(&AppConfig::default(), script);

    let history: Vec<_> = session
        .widget()
        .history()
        .iter()
        .map(|r| (r.amount(), r.percentage_label().to_string(), r.tip(), r.total()))
        .collect();
    assert_eq!(
        history,
        vec![
            (dec!(20), "25%".to_string(), dec!(5.00), dec!(25.00)),
            (dec!(50), "10%".to_string(), dec!(5.00), dec!(55.00)),
        ]
    );
    assert!(output.contains("Paid $55.00 (10% tip)\n"));
    assert!(output.contains("Paid $25.00 (25% tip)\n"));
}

#[test]
fn test_inputs_reset_after_payment() {
    let (session, output) = run_script(&AppConfig::default(), "amount 100\npreset 15\npay\n");

    assert!(session.widget().amount().is_empty());
    assert!(!session.widget().can_commit());
    assert!(output.ends_with(
        "Bill amount: $—\n\
         Tip rate:    (-) 10%  (-) 15%  (-) 25%  (-) Custom\n\
         Tip:         $0.00\n\
         Total:       $0.00\n\
         (-) Pay\n\
         History hidden (1 entries)\n"
    ));
}

#[test]
fn test_custom_rate_is_sanitized_and_labelled_verbatim() {
    let script = "amount $80\ncustom\nrate 7.5abc\npay\n";

    let (session, _) = run_script(&AppConfig::default(), script);

    let latest = session.widget().history().latest().expect("one record");
    assert_eq!(latest.percentage_label(), "7.5%");
    assert_eq!(latest.tip(), dec!(6.00));
    assert_eq!(latest.total(), dec!(86.00));
}

#[test]
fn test_selection_without_amount_is_ignored() {
    let (session, _) = run_script(&AppConfig::default(), "preset 15\nrate 10\npay\n");

    assert!(session.widget().history().is_empty());
}

#[test]
fn test_invalid_commands_report_errors_and_continue() {
    let script = "preset 20\nfrobnicate\namount 10\npreset 10\npay\n";

    let (session, output) = run_script(&AppConfig::default(), script);

    assert!(output.contains("Error: '20' is not a preset tip rate (expected 10, 15 or 25)\n"));
    assert!(output.contains("Error: unknown command 'frobnicate' (type 'help' for a list)\n"));
    assert_eq!(session.widget().history().len(), 1);
}

#[test]
fn test_quit_stops_reading() {
    let (session, _) = run_script(&AppConfig::default(), "amount 10\nquit\npreset 10\npay\n");

    assert_eq!(session.widget().amount().text(), "10");
    assert!(session.widget().history().is_empty());
}

#[test]
fn test_history_toggle_and_currency_from_config() {
    let config = AppConfig::from_toml_str("currency_symbol = \"€\"").expect("valid config");

    let (_, output) = run_script(&config, "amount 40\npreset 25\npay\nhistory\n");

    assert!(output.ends_with(
        "History (1):\n\
         \x20 Amount: €40.00  Percentage: 25%  Tip: €10.00  Total: €50.00\n"
    ));
}
