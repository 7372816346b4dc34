//! Top-level state of the tip calculator.
//!
//! [`TipWidget`] owns the amount field, the percentage choice, the history
//! ledger and the history visibility flag. A front end forwards user events
//! to it and reads everything it renders back out of it; the live tip and
//! total are recomputed from the current state on every read.

use tracing::{debug, info, warn};

use crate::calculations::{TipBreakdown, TipCalculationError, TipCalculator};
use crate::sanitize::sanitize_numeric;
use crate::{AmountField, HistoryLedger, PercentageChoice, PresetRate, TipRecord};

/// Live tip and total for the current inputs.
///
/// When the calculation is rejected, `breakdown` is the zero result and
/// `warning` carries the reason to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveTotals {
    pub breakdown: TipBreakdown,
    pub warning: Option<TipCalculationError>,
}

/// Tip calculator state.
#[derive(Debug, Clone, Default)]
pub struct TipWidget {
    amount: AmountField,
    choice: PercentageChoice,
    history: HistoryLedger,
    history_visible: bool,
    calculator: TipCalculator,
}

impl TipWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a widget whose history panel starts shown or hidden.
    pub fn with_history_visible(visible: bool) -> Self {
        Self {
            history_visible: visible,
            ..Default::default()
        }
    }

    pub fn amount(&self) -> &AmountField {
        &self.amount
    }

    pub fn choice(&self) -> &PercentageChoice {
        &self.choice
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    // ─── input ──────────────────────────────────────────────────────────────

    /// Replace the amount text. The percentage choice is left as it is.
    pub fn set_amount_text(
        &mut self,
        raw: &str,
    ) {
        self.amount.set_text(raw);
        debug!(amount = self.amount.text(), "amount edited");
    }

    /// Select a preset rate, discarding any custom text.
    ///
    /// Ignored while the amount is empty.
    pub fn select_preset(
        &mut self,
        preset: PresetRate,
    ) {
        if !self.is_selection_enabled() {
            debug!(%preset, "preset ignored: no amount");
            return;
        }
        self.choice = PercentageChoice::Preset(preset);
        debug!(%preset, "preset selected");
    }

    /// Switch to custom mode with empty text.
    ///
    /// Already being in custom mode keeps the typed text. Ignored while the
    /// amount is empty.
    pub fn select_custom(&mut self) {
        if !self.is_selection_enabled() {
            debug!("custom mode ignored: no amount");
            return;
        }
        if !matches!(self.choice, PercentageChoice::Custom(_)) {
            self.choice = PercentageChoice::Custom(String::new());
            debug!("custom mode selected");
        }
    }

    /// Replace the custom rate text, adopting custom mode from any state.
    ///
    /// Ignored while the amount is empty.
    pub fn set_custom_text(
        &mut self,
        raw: &str,
    ) {
        if !self.is_selection_enabled() {
            debug!("custom rate ignored: no amount");
            return;
        }
        let text = sanitize_numeric(raw);
        debug!(rate = %text, "custom rate edited");
        self.choice = PercentageChoice::Custom(text);
    }

    /// Show or hide the history panel. History contents are unaffected.
    pub fn toggle_history(&mut self) {
        self.history_visible = !self.history_visible;
        debug!(visible = self.history_visible, "history visibility toggled");
    }

    // ─── derived state ──────────────────────────────────────────────────────

    /// Tip and total for the current inputs.
    pub fn live_totals(&self) -> LiveTotals {
        match self.calculator.calculate(&self.amount, &self.choice) {
            Ok(breakdown) => LiveTotals {
                breakdown,
                warning: None,
            },
            Err(error) => {
                warn!(%error, "tip calculation rejected, showing zero");
                LiveTotals {
                    breakdown: TipBreakdown::ZERO,
                    warning: Some(error),
                }
            }
        }
    }

    /// Preset and custom buttons are enabled only once an amount is present.
    pub fn is_selection_enabled(&self) -> bool {
        !self.amount.is_empty()
    }

    pub fn is_preset_selected(
        &self,
        preset: PresetRate,
    ) -> bool {
        self.choice.preset() == Some(preset)
    }

    /// The custom button shows as selected once custom text has been typed.
    pub fn is_custom_highlighted(&self) -> bool {
        self.choice.custom_text().is_some_and(|text| !text.is_empty())
    }

    /// The custom rate input is offered whenever no preset is selected.
    pub fn is_custom_input_visible(&self) -> bool {
        self.is_selection_enabled() && self.choice.preset().is_none()
    }

    pub fn is_history_visible(&self) -> bool {
        self.history_visible
    }

    /// Whether [`commit`](Self::commit) would create a record.
    pub fn can_commit(&self) -> bool {
        self.amount.value().is_some() && self.choice.is_committable()
    }

    // ─── commit ─────────────────────────────────────────────────────────────

    /// Record the current calculation and reset the inputs.
    ///
    /// Does nothing and returns `None` when the amount is missing or no rate
    /// has been chosen. A rejected calculation is stored as the zero result,
    /// the same values the live display showed.
    pub fn commit(&mut self) -> Option<&TipRecord> {
        let (Some(amount), Some(label)) = (self.amount.value(), self.choice.label()) else {
            debug!("commit ignored: incomplete input");
            return None;
        };

        let breakdown = self.live_totals().breakdown;
        let record = TipRecord::new(amount, label, breakdown);

        self.amount.clear();
        self.choice = PercentageChoice::Unset;

        let record = self.history.prepend(record);
        info!(
            amount = %record.amount(),
            percentage = record.percentage_label(),
            tip = %record.tip(),
            total = %record.total(),
            "tip recorded"
        );
        Some(record)
    }
}
