use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::Theme;
use crate::config::{GlobalAction, KeyResolver};

/// Shared top bar: application title on the left, the settings action hint
/// on the right. Constructed exactly once by the app.
pub struct TopBar {
    resolver: Arc<KeyResolver>,
}

impl TopBar {
    pub const fn new(resolver: Arc<KeyResolver>) -> Self {
        Self { resolver }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        title: &str,
        show_settings_hint: bool,
    ) {
        let bar_style = Style::default().bg(theme.mantle);

        let title_line = Line::from(vec![
            Span::styled(
                " \u{25a6} ",
                Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                title.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title_line).style(bar_style), area);

        if show_settings_hint {
            let hint = Line::from(vec![
                Span::styled(
                    self.resolver.display_global(GlobalAction::Settings),
                    Style::default().fg(theme.peach),
                ),
                Span::styled(" Settings ", Style::default().fg(theme.subtext0)),
            ]);
            frame.render_widget(
                Paragraph::new(hint)
                    .style(bar_style)
                    .alignment(Alignment::Right),
                area,
            );
        }
    }
}
