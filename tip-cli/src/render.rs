//! Plain-text rendering of the calculator screen.

use std::fmt;

use tip_core::{PresetRate, TipRecord, TipWidget};

use crate::utils::{display_money, text_or_dash};

/// Button label: `[x]` selected, `[ ]` available, `(-)` disabled.
fn button(
    label: &str,
    enabled: bool,
    selected: bool,
) -> String {
    let marker = match (enabled, selected) {
        (false, _) => "(-)",
        (true, true) => "[x]",
        (true, false) => "[ ]",
    };
    format!("{marker} {label}")
}

/// The calculator screen for one widget state, rendered through `Display`.
pub struct Screen<'a> {
    widget: &'a TipWidget,
    symbol: &'a str,
}

impl<'a> Screen<'a> {
    pub fn new(
        widget: &'a TipWidget,
        symbol: &'a str,
    ) -> Self {
        Self { widget, symbol }
    }

    fn fmt_record(
        &self,
        f: &mut fmt::Formatter<'_>,
        record: &TipRecord,
    ) -> fmt::Result {
        writeln!(
            f,
            "  Amount: {}  Percentage: {}  Tip: {}  Total: {}",
            display_money(self.symbol, record.amount()),
            record.percentage_label(),
            display_money(self.symbol, record.tip()),
            display_money(self.symbol, record.total()),
        )
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let widget = self.widget;
        let symbol = self.symbol;
        let enabled = widget.is_selection_enabled();

        writeln!(f, "Bill amount: {symbol}{}", text_or_dash(widget.amount().text()))?;

        let mut buttons: Vec<String> = PresetRate::ALL
            .iter()
            .map(|preset| button(&preset.label(), enabled, widget.is_preset_selected(*preset)))
            .collect();
        buttons.push(button("Custom", enabled, widget.is_custom_highlighted()));
        writeln!(f, "Tip rate:    {}", buttons.join("  "))?;

        if widget.is_custom_input_visible() {
            let text = widget.choice().custom_text().unwrap_or("");
            writeln!(f, "Custom rate: {}%", text_or_dash(text))?;
        }

        let totals = widget.live_totals();
        writeln!(f, "Tip:         {}", display_money(symbol, totals.breakdown.tip))?;
        writeln!(f, "Total:       {}", display_money(symbol, totals.breakdown.total))?;
        if let Some(warning) = &totals.warning {
            writeln!(f, "Warning:     {warning}")?;
        }

        writeln!(f, "{}", button("Pay", widget.can_commit(), false))?;

        let history = widget.history();
        if !widget.is_history_visible() {
            return writeln!(f, "History hidden ({} entries)", history.len());
        }
        writeln!(f, "History ({}):", history.len())?;
        if history.is_empty() {
            writeln!(f, "  (no payments yet)")?;
        }
        for record in history {
            self.fmt_record(f, record)?;
        }
        Ok(())
    }
}

/// Renders the whole screen for the current widget state.
pub fn render_screen(
    widget: &TipWidget,
    symbol: &str,
) -> String {
    Screen::new(widget, symbol).to_string()
}
