use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::Theme;
use crate::config;
use crate::navigation::Route;
use crate::ui::{Chrome, Screen};

/// Static settings screen: no rail, no state, no transitions.
pub struct SettingsScreen;

impl SettingsScreen {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SettingsScreen {
    fn route(&self) -> Route {
        Route::Settings
    }

    fn chrome(&self) -> Chrome {
        Chrome::BarOnly
    }

    fn title(&self) -> &'static str {
        "User Settings"
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let location = config::config_path().map_or_else(
            || "no config directory available on this platform".to_string(),
            |path| path.display().to_string(),
        );

        let lines = vec![
            Line::from(""),
            Line::from(" Settings are read at startup from:"),
            Line::from(format!("   {location}")),
            Line::from(""),
            Line::from(" Edit the file and restart to apply changes."),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(theme.subtext1)),
            area,
        );
    }
}
