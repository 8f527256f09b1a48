use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::Theme;
use crate::navigation::Route;
use crate::ui::Screen;

/// KiCad library screen. Placeholder until footprint/symbol sync lands.
pub struct KicadScreen;

impl KicadScreen {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for KicadScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for KicadScreen {
    fn route(&self) -> Route {
        Route::Kicad
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let paragraph =
            Paragraph::new(" KiCad").style(Style::default().fg(theme.subtext1));
        frame.render_widget(paragraph, area);
    }
}
