use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::text::{Span, Spans};
use tui::widgets::{Paragraph, Widget};

use super::block;
use crate::draw::{add_padding, PaddingDirection};
use crate::theme::Theme;

const TEXT: &str = r#"
Quit: q or <Ctrl+c>
Edit Field:
  - 0-9 . , -: type value
  - <Backspace>: delete
Change Field:
  - <Tab> / <Down>: next field
  - <Shift+Tab> / <Up>: previous field
Calculate:
  - <Enter>: from any field
Clear Form:
  - <Escape>: reset inputs
Highlighted Results:
  - yield at or above threshold
  - ROI at or above threshold
"#;

pub const HELP_WIDTH: u16 = 44;
pub const HELP_HEIGHT: u16 = 18;

#[derive(Copy, Clone)]
pub struct HelpWidget {
    pub theme: Theme,
}

impl HelpWidget {
    pub fn get_rect(self, area: Rect) -> Rect {
        Rect {
            x: (area.width - HELP_WIDTH) / 2,
            y: (area.height - HELP_HEIGHT) / 2,
            width: HELP_WIDTH,
            height: HELP_HEIGHT,
        }
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        block::new(" Help - <ESC> to go back ", self.theme).render(area, buf);

        let text: Vec<_> = TEXT
            .lines()
            .map(|line| {
                Spans::from(Span::styled(
                    line,
                    self.theme.style().fg(self.theme.text_normal()),
                ))
            })
            .collect();

        let mut help_area = area;
        help_area = add_padding(help_area, 2, PaddingDirection::Left);
        help_area = add_padding(help_area, 1, PaddingDirection::Top);

        Paragraph::new(text).render(help_area, buf);
    }
}
