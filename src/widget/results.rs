use calc::OutputField;
use tui::buffer::Buffer;
use tui::layout::{Constraint, Direction, Layout, Rect};
use tui::style::Modifier;
use tui::text::{Span, Spans};
use tui::widgets::{Paragraph, Widget, Wrap};

use super::block;
use super::Outcome;
use crate::draw::{add_padding, PaddingDirection};
use crate::theme::Theme;

pub struct ResultsWidget<'a> {
    pub outcome: Option<&'a Outcome>,
    pub theme: Theme,
}

impl<'a> Widget for ResultsWidget<'a> {
    fn render(self, mut area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        block::new(" Results ", theme).render(area, buf);
        area = add_padding(area, 1, PaddingDirection::All);
        area = add_padding(area, 1, PaddingDirection::Left);
        area = add_padding(area, 1, PaddingDirection::Right);

        // layout[0] - Error message
        // layout[1] - Output fields
        let mut layout = Layout::default()
            .constraints([Constraint::Length(4), Constraint::Min(0)].as_ref())
            .split(area);

        layout[0] = add_padding(layout[0], 1, PaddingDirection::Top);

        if let Some(Outcome::Invalid(msg)) = self.outcome {
            Paragraph::new(Spans::from(Span::styled(
                msg.as_str(),
                theme.style().fg(theme.error()),
            )))
            .wrap(Wrap { trim: true })
            .render(layout[0], buf);
        }

        // columns[0] - Labels
        // columns[1] - Values
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)].as_ref())
            .split(layout[1]);

        let mut labels = vec![];
        let mut values = vec![];

        for field in OutputField::ALL.iter() {
            labels.push(Spans::default());
            labels.push(Spans::from(Span::styled(
                field.label(),
                theme.style().fg(theme.text_normal()),
            )));

            let value = match self.outcome {
                Some(Outcome::Report(report)) if report.is_emphasized(*field) => Span::styled(
                    report.value(*field),
                    theme
                        .style()
                        .fg(theme.emphasis())
                        .add_modifier(Modifier::BOLD),
                ),
                Some(Outcome::Report(report)) => Span::styled(
                    report.value(*field),
                    theme.style().fg(theme.text_primary()),
                ),
                _ => Span::styled("-", theme.style().fg(theme.gray())),
            };

            values.push(Spans::default());
            values.push(Spans::from(value));
        }

        Paragraph::new(labels)
            .style(theme.style().fg(theme.text_normal()))
            .render(columns[0], buf);

        Paragraph::new(values)
            .style(theme.style().fg(theme.text_normal()))
            .render(columns[1], buf);
    }
}
