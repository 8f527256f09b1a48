//! The part search screen.
//!
//! Workflow states: `Idle -> FieldsEditable` when the user triggers a search
//! with an empty query (manual entry escape hatch), or
//! `Idle -> Searching -> Populated`/`Idle` for a real lookup. The catalog
//! call runs as a spawned command; only its completion message mutates the
//! form. A trigger while `Searching` is rejected, so at most one query is in
//! flight per screen.

pub mod command;
pub mod message;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::Theme;
use crate::catalog::CatalogClient;
use crate::catalog::translate::translate_to_form;
use crate::command::{Command, CopyToClipboardCmd};
use crate::component::{Spinner, SupplierSelect, SupplierSelectEvent, TextInput, TextInputEvent};
use crate::config::{KeyResolver, SearchAction};
use crate::form::{FormField, SearchForm};
use crate::navigation::Route;
use crate::screen::search::command::SearchPartCmd;
use crate::screen::search::message::SearchMsg;
use crate::ui::{Component, Handled, Screen, ScreenMsg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Idle,
    FieldsEditable,
    Searching,
    Populated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    PartNumber,
    Supplier,
    Field(usize),
}

pub struct SearchScreen {
    catalog: Arc<dyn CatalogClient>,
    resolver: Arc<KeyResolver>,
    suppliers: Vec<String>,

    part_number: TextInput,
    supplier: Option<String>,
    selector: Option<SupplierSelect>,

    form: SearchForm,
    state: SearchState,
    focus: Focus,
    field_cursor: usize,
    /// Query captured when the in-flight search was triggered.
    last_query: Option<(String, String)>,

    spinner: Spinner,
    msg_tx: UnboundedSender<SearchMsg>,
    msg_rx: UnboundedReceiver<SearchMsg>,
}

impl SearchScreen {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        suppliers: Vec<String>,
        resolver: Arc<KeyResolver>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let mut part_number = TextInput::new("Part Number").with_placeholder("Part Number");
        part_number.set_focused(true);

        let mut spinner = Spinner::new();
        spinner.set_label("Searching...");

        Self {
            catalog,
            resolver,
            suppliers,
            part_number,
            supplier: None,
            selector: None,
            form: SearchForm::new(),
            state: SearchState::Idle,
            focus: Focus::PartNumber,
            field_cursor: 0,
            last_query: None,
            spinner,
            msg_tx,
            msg_rx,
        }
    }

    /// Prefill the query inputs (CLI startup arguments).
    pub fn with_query(mut self, supplier: Option<String>, part_number: Option<String>) -> Self {
        if let Some(supplier) = supplier {
            self.supplier = Some(supplier);
        }
        if let Some(part_number) = part_number {
            self.part_number.set_value(part_number);
        }
        self
    }

    /// Queue a message to be processed by `update()`.
    fn queue(&self, msg: SearchMsg) {
        let _ = self.msg_tx.send(msg);
    }

    fn process_message(&mut self, msg: SearchMsg) -> ScreenMsg {
        match msg {
            SearchMsg::Trigger => self.trigger_search(),

            SearchMsg::SupplierChosen(name) => {
                self.supplier = Some(name);
                ScreenMsg::Idle
            }

            SearchMsg::CopyField(field) => {
                let value = self.form.get(field).value.clone();
                if value.is_empty() {
                    ScreenMsg::Idle
                } else {
                    CopyToClipboardCmd::new(field.label(), value).into()
                }
            }

            SearchMsg::ResultLoaded(Some(record)) => {
                let supplier = self
                    .last_query
                    .as_ref()
                    .map(|(supplier, _)| supplier.clone())
                    .unwrap_or_default();
                let values = translate_to_form(&supplier, &record);
                self.form.apply(&values);
                self.state = SearchState::Populated;
                ScreenMsg::Idle
            }

            SearchMsg::ResultLoaded(None) => {
                self.state = SearchState::Idle;
                let query = self.query_display();
                ScreenMsg::Error(format!("No catalog results for {query}"))
            }

            SearchMsg::SearchFailed(error) => {
                self.state = SearchState::Idle;
                ScreenMsg::Error(format!("Search failed: {error}"))
            }
        }
    }

    fn trigger_search(&mut self) -> ScreenMsg {
        if self.state == SearchState::Searching {
            debug!("search already in flight; ignoring trigger");
            return ScreenMsg::Idle;
        }

        let part_number = self.part_number.value().trim().to_string();
        let supplier = self.supplier.clone().unwrap_or_default();

        // Empty query: reveal the form for manual entry, touch no values.
        if part_number.is_empty() && supplier.is_empty() {
            self.form.enable_all();
            self.state = SearchState::FieldsEditable;
            return ScreenMsg::Idle;
        }

        self.state = SearchState::Searching;
        self.last_query = Some((supplier.clone(), part_number.clone()));
        SearchPartCmd::new(
            Arc::clone(&self.catalog),
            supplier,
            part_number,
            self.msg_tx.clone(),
        )
        .into()
    }

    fn query_display(&self) -> String {
        match &self.last_query {
            Some((supplier, part_number)) if supplier.is_empty() => format!("'{part_number}'"),
            Some((supplier, part_number)) => format!("'{part_number}' at {supplier}"),
            None => String::new(),
        }
    }

    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::PartNumber, Focus::Supplier];
        if self.form.is_editable() {
            ring.extend((0..FormField::ALL.len()).map(Focus::Field));
        }
        ring
    }

    fn cycle_focus(&mut self, forward: bool) {
        let ring = self.focus_ring();
        let position = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (position + 1) % ring.len()
        } else {
            (position + ring.len() - 1) % ring.len()
        };
        self.set_focus(ring[next]);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.part_number.set_focused(focus == Focus::PartNumber);
        if let Focus::Field(index) = focus {
            self.field_cursor = self.form.get(FormField::ALL[index]).value.len();
        }
        self.focus = focus;
    }

    fn edit_field(&mut self, index: usize, key: KeyEvent) -> bool {
        let field = FormField::ALL[index];
        if !self.form.get(field).enabled {
            return false;
        }

        let mut value = self.form.get(field).value.clone();
        self.field_cursor = self.field_cursor.min(value.len());
        while !value.is_char_boundary(self.field_cursor) {
            self.field_cursor -= 1;
        }

        let consumed = match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                value.insert(self.field_cursor, c);
                self.field_cursor += c.len_utf8();
                true
            }
            (KeyCode::Backspace, _) => {
                if let Some((i, _)) = value[..self.field_cursor].char_indices().next_back() {
                    value.remove(i);
                    self.field_cursor = i;
                }
                true
            }
            (KeyCode::Delete, _) => {
                if self.field_cursor < value.len() {
                    value.remove(self.field_cursor);
                }
                true
            }
            (KeyCode::Left, _) => {
                if let Some((i, _)) = value[..self.field_cursor].char_indices().next_back() {
                    self.field_cursor = i;
                }
                true
            }
            (KeyCode::Right, _) => {
                if let Some(c) = value[self.field_cursor..].chars().next() {
                    self.field_cursor += c.len_utf8();
                }
                true
            }
            (KeyCode::Home, _) => {
                self.field_cursor = 0;
                true
            }
            (KeyCode::End, _) => {
                self.field_cursor = value.len();
                true
            }
            _ => false,
        };

        if consumed {
            self.form.set_value(field, value);
        }
        consumed
    }

    fn render_supplier_box(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == Focus::Supplier;
        let border_color = if focused { theme.lavender } else { theme.surface1 };
        let block = Block::default()
            .title(" Supplier ")
            .title_style(Style::default().fg(theme.subtext1))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let (content, style) = match &self.supplier {
            Some(name) => (name.clone(), Style::default().fg(theme.text)),
            None => (
                "(press Enter)".to_string(),
                Style::default().fg(theme.overlay0),
            ),
        };

        frame.render_widget(Paragraph::new(content).style(style).block(block), area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Vec::with_capacity(FormField::ALL.len() + 2);
        lines.push(Line::from(""));

        for (index, (field, state)) in self.form.iter().enumerate() {
            let focused = self.focus == Focus::Field(index);
            let marker = if focused { "\u{25b6} " } else { "  " };

            let label_style = if state.enabled {
                Style::default().fg(theme.subtext1)
            } else {
                Style::default().fg(theme.overlay0)
            };
            let value_style = if state.enabled {
                Style::default().fg(theme.text)
            } else {
                Style::default().fg(theme.overlay0)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(theme.lavender)),
                Span::styled(format!("{:<26}", field.label()), label_style),
            ];

            if focused && state.enabled {
                let cursor = self.field_cursor.min(state.value.len());
                let (before, after) = state.value.split_at(cursor);
                let cursor_char = after.chars().next().unwrap_or(' ');
                let rest: String = after.chars().skip(1).collect();
                spans.push(Span::styled(before.to_string(), value_style));
                spans.push(Span::styled(
                    cursor_char.to_string(),
                    Style::default()
                        .fg(theme.base)
                        .bg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(rest, value_style));
            } else {
                spans.push(Span::styled(state.value.clone(), value_style));
            }

            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "  Enter search \u{b7} Tab fields \u{b7} {} copy field",
                self.resolver.display_search(SearchAction::Copy)
            ),
            Style::default().fg(theme.overlay1),
        )));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Screen for SearchScreen {
    fn route(&self) -> Route {
        Route::Search
    }

    fn handle_tick(&mut self) {
        if self.state == SearchState::Searching {
            self.spinner.handle_tick();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(selector) = &mut self.selector {
            match selector.handle_key(key) {
                Ok(Handled::Event(SupplierSelectEvent::Selected(name))) => {
                    self.queue(SearchMsg::SupplierChosen(name));
                    self.selector = None;
                }
                Ok(Handled::Event(SupplierSelectEvent::Cancelled)) => {
                    self.selector = None;
                }
                _ => {}
            }
            return true;
        }

        if self.resolver.matches_search(&key, SearchAction::Copy)
            && let Focus::Field(index) = self.focus
        {
            self.queue(SearchMsg::CopyField(FormField::ALL[index]));
            return true;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.cycle_focus(true);
                return true;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.cycle_focus(false);
                return true;
            }
            _ => {}
        }

        match self.focus {
            Focus::PartNumber => match self.part_number.handle_key(key) {
                Ok(Handled::Event(TextInputEvent::Submitted(_))) => {
                    self.queue(SearchMsg::Trigger);
                    true
                }
                Ok(Handled::Consumed) => true,
                _ => false,
            },

            Focus::Supplier => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.selector = Some(SupplierSelect::new(self.suppliers.clone()));
                    true
                }
                _ => false,
            },

            Focus::Field(index) => self.edit_field(index, key),
        }
    }

    fn update(&mut self) -> ScreenMsg {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();

        while let Ok(msg) = self.msg_rx.try_recv() {
            match self.process_message(msg) {
                ScreenMsg::Idle => {}
                ScreenMsg::Commands(cmds) => commands.extend(cmds),
                error @ ScreenMsg::Error(_) => return error,
            }
        }

        if commands.is_empty() {
            ScreenMsg::Idle
        } else {
            ScreenMsg::Commands(commands)
        }
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [controls, form_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        let [part_area, supplier_area, status_area] = Layout::horizontal([
            Constraint::Min(30),
            Constraint::Length(26),
            Constraint::Length(18),
        ])
        .areas(controls);

        self.part_number.render(frame, part_area, theme);
        self.render_supplier_box(frame, supplier_area, theme);

        if self.state == SearchState::Searching && status_area.height > 1 && status_area.width > 2
        {
            let spinner_area = Rect {
                x: status_area.x + 1,
                y: status_area.y + 1,
                width: status_area.width - 1,
                height: 1,
            };
            self.spinner.render(frame, spinner_area, theme);
        }

        self.render_form(frame, form_area, theme);

        if let Some(selector) = &mut self.selector {
            selector.render(frame, area, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SupplierRecord;
    use crate::config::keybindings::KeybindingsConfig;
    use async_trait::async_trait;
    use serde_json::json;

    struct MockCatalog {
        response: Option<serde_json::Value>,
        fail: bool,
    }

    impl MockCatalog {
        fn found(value: serde_json::Value) -> Self {
            Self {
                response: Some(value),
                fail: false,
            }
        }

        const fn not_found() -> Self {
            Self {
                response: None,
                fail: false,
            }
        }

        const fn failing() -> Self {
            Self {
                response: None,
                fail: true,
            }
        }
    }

    #[async_trait]
    impl CatalogClient for MockCatalog {
        async fn search(
            &self,
            _supplier: &str,
            _part_number: &str,
        ) -> color_eyre::Result<Option<SupplierRecord>> {
            if self.fail {
                return Err(color_eyre::eyre::eyre!("backend unreachable"));
            }
            Ok(self.response.clone().and_then(SupplierRecord::from_value))
        }
    }

    fn screen_with(catalog: MockCatalog) -> SearchScreen {
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        let suppliers = vec!["Digi-Key".to_string(), "LCSC".to_string()];
        SearchScreen::new(Arc::new(catalog), suppliers, resolver)
    }

    /// Run one search round to completion against the mock catalog.
    async fn run_search(screen: &mut SearchScreen) -> ScreenMsg {
        screen.queue(SearchMsg::Trigger);
        let msg = screen.update();
        let ScreenMsg::Commands(mut commands) = msg else {
            panic!("expected a search command to be spawned");
        };
        assert_eq!(commands.len(), 1);
        assert_eq!(screen.state, SearchState::Searching);
        commands.remove(0).execute().await.unwrap();
        screen.update()
    }

    #[test]
    fn empty_trigger_enables_all_fields_without_changing_values() {
        let mut screen = screen_with(MockCatalog::not_found());

        screen.queue(SearchMsg::Trigger);
        assert!(matches!(screen.update(), ScreenMsg::Idle));

        assert_eq!(screen.state, SearchState::FieldsEditable);
        for (_, state) in screen.form.iter() {
            assert!(state.enabled);
            assert_eq!(state.value, "");
        }

        // Triggering again with edited values keeps them intact.
        screen.form.set_value(FormField::Name, "hand-entered".to_string());
        screen.queue(SearchMsg::Trigger);
        assert!(matches!(screen.update(), ScreenMsg::Idle));
        assert_eq!(screen.form.get(FormField::Name).value, "hand-entered");
    }

    #[tokio::test]
    async fn search_populates_translated_fields_and_enables_the_rest() {
        let mut screen = screen_with(MockCatalog::found(json!({
            "name": "Resistor 10k",
            "supplier_part_number": "C12345",
        })));
        screen.part_number.set_value("C12345");
        screen.queue(SearchMsg::SupplierChosen("LCSC".to_string()));

        let result = run_search(&mut screen).await;
        assert!(matches!(result, ScreenMsg::Idle));

        assert_eq!(screen.state, SearchState::Populated);
        assert_eq!(screen.form.get(FormField::Name).value, "Resistor 10k");
        assert_eq!(screen.form.get(FormField::SupplierPartNumber).value, "C12345");
        // Translation fills the supplier name from the query identity.
        assert_eq!(screen.form.get(FormField::SupplierName).value, "LCSC");
        for (field, state) in screen.form.iter() {
            assert!(state.enabled, "{field:?} should be enabled");
            if !matches!(
                field,
                FormField::Name | FormField::SupplierPartNumber | FormField::SupplierName
            ) {
                assert_eq!(state.value, "");
            }
        }
    }

    #[tokio::test]
    async fn empty_result_surfaces_an_error_and_leaves_the_form_untouched() {
        let mut screen = screen_with(MockCatalog::not_found());
        screen.part_number.set_value("NOPE-123");
        screen.queue(SearchMsg::SupplierChosen("Digi-Key".to_string()));

        let before = screen.form.clone();
        let result = run_search(&mut screen).await;

        assert!(matches!(result, ScreenMsg::Error(_)));
        assert_eq!(screen.state, SearchState::Idle);
        assert_eq!(screen.form, before);
    }

    #[tokio::test]
    async fn backend_failure_surfaces_an_error() {
        let mut screen = screen_with(MockCatalog::failing());
        screen.part_number.set_value("C12345");
        screen.queue(SearchMsg::SupplierChosen("LCSC".to_string()));

        let result = run_search(&mut screen).await;
        let ScreenMsg::Error(message) = result else {
            panic!("expected an error");
        };
        assert!(message.contains("backend unreachable"));
        assert_eq!(screen.state, SearchState::Idle);
    }

    #[test]
    fn trigger_while_searching_is_rejected() {
        let mut screen = screen_with(MockCatalog::not_found());
        screen.part_number.set_value("C12345");
        screen.queue(SearchMsg::SupplierChosen("LCSC".to_string()));
        screen.queue(SearchMsg::Trigger);

        let ScreenMsg::Commands(commands) = screen.update() else {
            panic!("expected a search command");
        };
        assert_eq!(commands.len(), 1);
        assert_eq!(screen.state, SearchState::Searching);

        // A second trigger while the first is outstanding spawns nothing.
        screen.queue(SearchMsg::Trigger);
        assert!(matches!(screen.update(), ScreenMsg::Idle));
        assert_eq!(screen.state, SearchState::Searching);
    }

    #[tokio::test]
    async fn repeated_identical_searches_are_idempotent() {
        let record = json!({"name": "Resistor 10k", "supplier_part_number": "C12345"});
        let mut screen = screen_with(MockCatalog::found(record));
        screen.part_number.set_value("C12345");
        screen.queue(SearchMsg::SupplierChosen("LCSC".to_string()));

        run_search(&mut screen).await;
        let first = screen.form.clone();

        run_search(&mut screen).await;
        assert_eq!(screen.form, first);
        assert_eq!(screen.state, SearchState::Populated);
    }

    #[test]
    fn copy_on_populated_field_spawns_a_clipboard_command() {
        let mut screen = screen_with(MockCatalog::not_found());
        screen.form.enable_all();
        screen.form.set_value(FormField::Datasheet, "https://example.com/ds.pdf".to_string());

        screen.queue(SearchMsg::CopyField(FormField::Datasheet));
        let ScreenMsg::Commands(commands) = screen.update() else {
            panic!("expected a clipboard command");
        };
        assert_eq!(commands.len(), 1);
        assert!(commands[0].name().contains("Datasheet"));

        // Copying an empty field is a no-op.
        screen.queue(SearchMsg::CopyField(FormField::Image));
        assert!(matches!(screen.update(), ScreenMsg::Idle));
    }
}
