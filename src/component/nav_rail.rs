use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Theme;
use crate::navigation::{NavState, RAIL};

/// Width of the navigation rail, including its divider border.
pub const RAIL_WIDTH: u16 = 14;

/// Shared left navigation rail. Constructed exactly once by the app; the
/// highlight is derived from the injected [`NavState`] on every frame.
pub struct NavRail;

impl NavRail {
    pub const fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, nav: &NavState) {
        // The right border doubles as the divider between rail and content.
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.surface1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from("")];
        for (index, entry) in RAIL.iter().enumerate() {
            let selected = index == nav.selected_index();
            let icon = if selected {
                entry.icon_selected
            } else {
                entry.icon
            };
            let style = if selected {
                Style::default().fg(theme.lavender).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.subtext0)
            };
            lines.push(Line::from(Span::styled(
                format!(" {icon} {}", entry.label),
                style,
            )));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for NavRail {
    fn default() -> Self {
        Self::new()
    }
}
