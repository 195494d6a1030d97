use anyhow::Result;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use tui::text::{Span, Spans};
use tui::widgets::Paragraph;
use tui::{Frame, Terminal};

use crate::app::{App, Mode};
use crate::widget::{self, CalculatorWidget, ResultsWidget, HELP_HEIGHT, HELP_WIDTH};

const MIN_WIDTH: u16 = 80;
const MIN_HEIGHT: u16 = 18;

pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.draw(|frame| {
        if app.mode == Mode::Help {
            draw_help(frame, app);
        } else {
            draw_main(frame, app);
        }
    })?;

    Ok(())
}

fn draw_main<B: Backend>(frame: &mut Frame<B>, app: &mut App) {
    let theme = app.theme;
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Increase screen size to display calculator",
                theme.style().fg(theme.text_normal()),
            )),
            size,
        );
        return;
    }

    // chunks[0] - Header
    // chunks[1] - Calculator + results
    let chunks = Layout::default()
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(size);

    frame.render_widget(widget::block::new(" Tartan Realty ", theme), chunks[0]);

    // header[0] - Title
    // header[1] - (Optional) help icon
    let mut header = if app.hide_help {
        vec![chunks[0]]
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(10)].as_ref())
            .split(chunks[0])
    };

    // Draw title
    {
        header[0] = add_padding(header[0], 1, PaddingDirection::Top);
        header[0] = add_padding(header[0], 2, PaddingDirection::Left);

        frame.render_widget(
            Paragraph::new(Spans::from(Span::styled(
                "Buy-to-Let ROI Calculator",
                theme.style().fg(theme.text_primary()),
            ))),
            header[0],
        );
    }

    // Draw help icon
    if !app.hide_help {
        header[1] = add_padding(header[1], 1, PaddingDirection::Top);
        header[1] = add_padding(header[1], 2, PaddingDirection::Right);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Help '?'",
                theme.style().fg(theme.text_normal()),
            ))
            .alignment(Alignment::Center),
            header[1],
        );
    }

    // body[0] - Calculator form
    // body[1] - Results
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(chunks[1]);

    frame.render_stateful_widget(CalculatorWidget { theme }, body[0], &mut app.calculator);

    frame.render_widget(
        ResultsWidget {
            outcome: app.calculator.outcome.as_ref(),
            theme,
        },
        body[1],
    );
}

fn draw_help<B: Backend>(frame: &mut Frame<B>, app: &mut App) {
    let mut rect = frame.size();

    if rect.width < HELP_WIDTH || rect.height < HELP_HEIGHT {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Increase screen size to display help",
                app.theme.style().fg(app.theme.text_normal()),
            )),
            rect,
        );
    } else {
        rect = app.help.get_rect(frame.size());

        frame.render_widget(app.help, rect);
    }
}

pub fn add_padding(mut rect: Rect, n: u16, direction: PaddingDirection) -> Rect {
    match direction {
        PaddingDirection::Top => {
            rect.y += n;
            rect.height = rect.height.saturating_sub(n);
            rect
        }
        PaddingDirection::Left => {
            rect.x += n;
            rect.width = rect.width.saturating_sub(n);
            rect
        }
        PaddingDirection::Right => {
            rect.width = rect.width.saturating_sub(n);
            rect
        }
        PaddingDirection::All => {
            rect.y += n;
            rect.height = rect.height.saturating_sub(n * 2);

            rect.x += n;
            rect.width = rect.width.saturating_sub(n * 2);

            rect
        }
    }
}

pub enum PaddingDirection {
    Top,
    Left,
    Right,
    All,
}
