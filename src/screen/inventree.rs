use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::Theme;
use crate::navigation::Route;
use crate::ui::Screen;

/// InvenTree sync screen. Placeholder until inventory sync lands.
pub struct InventreeScreen;

impl InventreeScreen {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for InventreeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for InventreeScreen {
    fn route(&self) -> Route {
        Route::Inventree
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let paragraph =
            Paragraph::new(" InvenTree").style(Style::default().fg(theme.subtext1));
        frame.render_widget(paragraph, area);
    }
}
