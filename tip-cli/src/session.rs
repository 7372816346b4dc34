//! Interactive session: reads commands, updates the widget, redraws.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tip_core::TipWidget;
use tracing::{debug, info};

use crate::{commands::Command, config::AppConfig, render::render_screen, utils::display_money};

/// Whether the session keeps reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// A calculator session bound to one widget.
#[derive(Debug, Clone)]
pub struct Session {
    widget: TipWidget,
    currency_symbol: String,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            widget: TipWidget::with_history_visible(config.show_history),
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    pub fn widget(&self) -> &TipWidget {
        &self.widget
    }

    /// Current screen as text.
    pub fn screen(&self) -> String {
        render_screen(&self.widget, &self.currency_symbol)
    }

    /// Applies one command and returns an optional message for the user.
    pub fn apply(
        &mut self,
        command: Command,
    ) -> (Flow, Option<String>) {
        debug!(?command, "applying command");
        let message = match command {
            Command::Amount(text) => {
                self.widget.set_amount_text(&text);
                None
            }
            Command::Preset(preset) => {
                self.widget.select_preset(preset);
                None
            }
            Command::Custom => {
                self.widget.select_custom();
                None
            }
            Command::Rate(text) => {
                self.widget.set_custom_text(&text);
                None
            }
            Command::Pay => self.widget.commit().map(|record| {
                format!(
                    "Paid {} ({} tip)",
                    display_money(&self.currency_symbol, record.total()),
                    record.percentage_label()
                )
            }),
            Command::ToggleHistory => {
                self.widget.toggle_history();
                None
            }
            Command::Show => None,
            Command::Help => Some(Command::HELP.to_string()),
            Command::Quit => return (Flow::Stop, None),
        };
        (Flow::Continue, message)
    }

    /// Runs until `quit` or end of input, drawing the screen after each line.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<()> {
        write!(output, "{}", self.screen()).context("failed to write screen")?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;

            let (flow, message) = match line.parse::<Command>() {
                Ok(command) => self.apply(command),
                Err(error) => (Flow::Continue, Some(format!("Error: {error}"))),
            };

            if flow == Flow::Stop {
                break;
            }
            if let Some(message) = message {
                writeln!(output, "{message}").context("failed to write message")?;
            }
            write!(output, "{}", self.screen()).context("failed to write screen")?;
        }

        info!(entries = self.widget.history().len(), "session finished");
        output.flush().context("failed to flush output")
    }
}
