use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::Theme;
use crate::fuzzy::Matcher;
use crate::ui::{Component, Handled, Result};

pub enum SupplierSelectEvent {
    Selected(String),
    Cancelled,
}

/// Modal popup for choosing a supplier catalog, with fuzzy filtering.
pub struct SupplierSelect {
    items: Vec<String>,
    filter: String,
    selected: usize,
    matcher: Matcher,
}

impl SupplierSelect {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            filter: String::new(),
            selected: 0,
            matcher: Matcher::new(),
        }
    }

    /// Items matching the current filter, best match first. An empty filter
    /// keeps the configured order.
    fn filtered(&self) -> Vec<&str> {
        if self.filter.is_empty() {
            return self.items.iter().map(String::as_str).collect();
        }

        let mut scored: Vec<(i64, &str)> = self
            .items
            .iter()
            .filter_map(|item| {
                self.matcher
                    .score(item, &self.filter)
                    .map(|score| (score, item.as_str()))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, item)| item).collect()
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Component for SupplierSelect {
    type Output = SupplierSelectEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        Ok(match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => SupplierSelectEvent::Cancelled.into(),

            (KeyCode::Enter, _) => match self.filtered().get(self.selected) {
                Some(item) => SupplierSelectEvent::Selected((*item).to_string()).into(),
                None => Handled::Consumed,
            },

            (KeyCode::Up, _) => {
                self.selected = self.selected.saturating_sub(1);
                Handled::Consumed
            }
            (KeyCode::Down, _) => {
                self.selected += 1;
                self.clamp_selection();
                Handled::Consumed
            }

            (KeyCode::Backspace, _) => {
                self.filter.pop();
                self.selected = 0;
                Handled::Consumed
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.filter.push(c);
                self.selected = 0;
                Handled::Consumed
            }

            // Modal: swallow everything else.
            _ => Handled::Consumed,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = area.centered(Constraint::Percentage(40), Constraint::Percentage(60));
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Supplier ")
            .title_style(Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.lavender))
            .style(Style::default().bg(theme.base));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [filter_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let filter_line = Line::from(vec![
            Span::styled("/ ", Style::default().fg(theme.overlay1)),
            Span::styled(self.filter.clone(), Style::default().fg(theme.text)),
            Span::styled(
                " ",
                Style::default().fg(theme.base).bg(theme.text),
            ),
        ]);
        frame.render_widget(Paragraph::new(filter_line), filter_area);

        let items: Vec<ListItem> = self
            .filtered()
            .into_iter()
            .map(|item| ListItem::new(Line::from(item.to_string())))
            .collect();

        let list = List::new(items)
            .style(Style::default().fg(theme.subtext1))
            .highlight_style(
                Style::default()
                    .bg(theme.surface1)
                    .fg(theme.lavender)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("\u{25b6} ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, list_area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suppliers() -> Vec<String> {
        ["Digi-Key", "Mouser", "Farnell", "Newark", "Element14", "LCSC"]
            .map(String::from)
            .to_vec()
    }

    fn press(select: &mut SupplierSelect, code: KeyCode) -> Handled<SupplierSelectEvent> {
        select
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn enter_selects_highlighted_item() {
        let mut select = SupplierSelect::new(suppliers());
        press(&mut select, KeyCode::Down);
        match press(&mut select, KeyCode::Enter) {
            Handled::Event(SupplierSelectEvent::Selected(name)) => assert_eq!(name, "Mouser"),
            _ => panic!("expected selection"),
        }
    }

    #[test]
    fn filter_narrows_and_selection_resets() {
        let mut select = SupplierSelect::new(suppliers());
        press(&mut select, KeyCode::Down);
        for c in "lcsc".chars() {
            press(&mut select, KeyCode::Char(c));
        }
        assert_eq!(select.filtered(), vec!["LCSC"]);
        match press(&mut select, KeyCode::Enter) {
            Handled::Event(SupplierSelectEvent::Selected(name)) => assert_eq!(name, "LCSC"),
            _ => panic!("expected selection"),
        }
    }

    #[test]
    fn enter_with_no_matches_is_a_no_op() {
        let mut select = SupplierSelect::new(suppliers());
        for c in "zzz".chars() {
            press(&mut select, KeyCode::Char(c));
        }
        assert!(select.filtered().is_empty());
        assert!(matches!(
            press(&mut select, KeyCode::Enter),
            Handled::Consumed
        ));
    }

    #[test]
    fn escape_cancels() {
        let mut select = SupplierSelect::new(suppliers());
        assert!(matches!(
            press(&mut select, KeyCode::Esc),
            Handled::Event(SupplierSelectEvent::Cancelled)
        ));
    }
}
