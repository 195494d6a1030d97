use calc::{Field, RawInput, Report, Thresholds};
use tracing::{debug, warn};
use tui::buffer::Buffer;
use tui::layout::{Constraint, Direction, Layout, Rect};
use tui::text::{Span, Spans};
use tui::widgets::{Paragraph, StatefulWidget, Widget};

use super::block;
use crate::draw::{add_padding, PaddingDirection};
use crate::theme::Theme;

/// Width of each text input box
pub const INPUT_WIDTH: usize = 20;

/// Result of the last calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Report(Report),
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct CalculatorState {
    pub input: RawInput,
    pub selection: Field,
    pub outcome: Option<Outcome>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::new(RawInput::default())
    }
}

impl CalculatorState {
    pub fn new(input: RawInput) -> CalculatorState {
        CalculatorState {
            input,
            selection: Field::PropertyPrice,
            outcome: None,
        }
    }

    pub fn add_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || matches!(c, '.' | ',' | '-')) {
            return;
        }

        let input_field = self.input.get_mut(self.selection);

        if input_field.len() == INPUT_WIDTH {
            return;
        }

        input_field.push(c);
    }

    pub fn del_char(&mut self) {
        self.input.get_mut(self.selection).pop();
    }

    pub fn selection_down(&mut self) {
        self.selection = self.selection.next();
    }

    pub fn selection_up(&mut self) {
        self.selection = self.selection.prev();
    }

    pub fn clear(&mut self) {
        self.input = RawInput::default();
        self.selection = Field::PropertyPrice;
        self.outcome.take();
    }

    pub fn enter(&mut self, thresholds: &Thresholds, currency: &str) {
        debug!(input = ?self.input, "calculating");

        let outcome = match calc::evaluate(&self.input) {
            Ok(result) => {
                debug!(?result, "calculated");
                Outcome::Report(Report::new(&result, thresholds, currency))
            }
            Err(e) => {
                warn!(
                    property_price = e.property_price,
                    monthly_rent = e.monthly_rent,
                    "rejected input"
                );
                Outcome::Invalid(e.to_string())
            }
        };

        self.outcome = Some(outcome);
    }
}

pub struct CalculatorWidget {
    pub theme: Theme,
}

impl StatefulWidget for CalculatorWidget {
    type State = CalculatorState;

    fn render(self, mut area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = self.theme;

        block::new(" Calculator ", theme).render(area, buf);
        area = add_padding(area, 1, PaddingDirection::All);
        area = add_padding(area, 1, PaddingDirection::Left);
        area = add_padding(area, 1, PaddingDirection::Right);

        // layout[0] - Key hints
        // layout[1] - Form
        let mut layout = Layout::default()
            .constraints([Constraint::Length(4), Constraint::Min(0)].as_ref())
            .split(area);

        layout[0] = add_padding(layout[0], 1, PaddingDirection::Top);

        let hints = vec![
            Spans::from(Span::styled(
                "<Up / Down>: move between fields",
                theme.style().fg(theme.text_normal()),
            )),
            Spans::from(Span::styled(
                "<Enter>: calculate  <Esc>: clear",
                theme.style().fg(theme.text_normal()),
            )),
        ];

        Paragraph::new(hints)
            .style(theme.style().fg(theme.text_normal()))
            .render(layout[0], buf);

        render_form(layout[1], buf, state, theme);
    }
}

fn render_form(area: Rect, buf: &mut Buffer, state: &CalculatorState, theme: Theme) {
    // columns[0] - Labels
    // columns[1] - Divider
    // columns[2] - Inputs
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Length(19),
                Constraint::Length(2),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    let mut labels = vec![];
    let mut inputs = vec![];

    for field in Field::ALL.iter() {
        let selected = state.selection == *field;

        labels.push(Spans::default());
        labels.push(Spans::from(vec![
            Span::styled(
                if selected { "> " } else { "  " },
                theme.style().fg(theme.text_primary()),
            ),
            Span::styled(field.label(), theme.style().fg(theme.text_normal())),
        ]));

        inputs.push(Spans::default());
        inputs.push(Spans::from(Span::styled(
            format!("{: <22}", state.input.get(*field)),
            theme
                .style()
                .fg(if selected {
                    theme.text_secondary()
                } else {
                    theme.text_normal()
                })
                .bg(if selected {
                    theme.highlight_unfocused()
                } else {
                    theme.background()
                }),
        )));
    }

    Paragraph::new(labels)
        .style(theme.style().fg(theme.text_normal()))
        .render(columns[0], buf);

    Paragraph::new(inputs)
        .style(theme.style().fg(theme.text_normal()))
        .render(columns[2], buf);

    // Set "cursor" color
    let x = columns[2].left() + state.input.get(state.selection).len().min(INPUT_WIDTH) as u16;
    let y = columns[2].top() + 1 + 2 * state.selection.idx() as u16;

    if x < columns[2].right() && y < columns[2].bottom() {
        buf.get_mut(x, y).set_bg(theme.text_secondary());
    }
}
