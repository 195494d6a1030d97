use calc::Thresholds;

use crate::opts::Opts;
use crate::theme::Theme;
use crate::widget;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Calculator,
    Help,
}

pub struct App {
    pub mode: Mode,
    pub previous_mode: Mode,
    pub calculator: widget::CalculatorState,
    pub help: widget::HelpWidget,
    pub currency: String,
    pub thresholds: Thresholds,
    pub theme: Theme,
    pub hide_help: bool,
}

impl App {
    pub fn new(opts: &Opts) -> App {
        let theme = opts.theme();

        App {
            mode: Mode::Calculator,
            previous_mode: Mode::Calculator,
            calculator: widget::CalculatorState::new(opts.raw_input()),
            help: widget::HelpWidget { theme },
            currency: opts.currency().to_string(),
            thresholds: opts.thresholds(),
            theme,
            hide_help: opts.hide_help,
        }
    }

    pub fn calculate(&mut self) {
        self.calculator.enter(&self.thresholds, &self.currency);
    }
}
