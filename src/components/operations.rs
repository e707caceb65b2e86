use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::components::Component;
use crate::events::{Action, ActionKind, AppEvent};
use crate::theme::THEME;

/// The five write verbs as a selectable table; Enter opens an inline
/// parameter form. A submission only leaves this component once every
/// required field validates, so an incomplete form never reaches the
/// network.
pub struct Operations {
    pub selected: usize,
    pub input_mode: bool,
    pub current_param: usize,
    pub param_inputs: Vec<String>,
    pub error: Option<String>,
    table_state: TableState,
}

impl Operations {
    pub fn new() -> Self {
        Self {
            selected: 0,
            input_mode: false,
            current_param: 0,
            param_inputs: Vec::new(),
            error: None,
            table_state: TableState::default().with_selected(0),
        }
    }

    fn selected_kind(&self) -> ActionKind {
        ActionKind::all()[self.selected]
    }

    fn select_next(&mut self) {
        let last = ActionKind::all().len() - 1;
        if self.selected < last {
            self.selected += 1;
            self.table_state.select(Some(self.selected));
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.table_state.select(Some(self.selected));
    }

    fn enter_input_mode(&mut self) {
        let kind = self.selected_kind();
        self.input_mode = true;
        self.current_param = 0;
        self.param_inputs = vec![String::new(); kind.field_labels().len()];
        self.error = None;
    }

    fn submit(&mut self) -> Option<AppEvent> {
        let kind = self.selected_kind();
        match Action::from_inputs(kind, &self.param_inputs) {
            Ok(action) => {
                self.input_mode = false;
                self.param_inputs.clear();
                self.error = None;
                Some(AppEvent::SubmitAction(action))
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }
}

impl Component for Operations {
    fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        if self.input_mode {
            match key.code {
                KeyCode::Esc => {
                    self.input_mode = false;
                    self.error = None;
                    None
                }
                KeyCode::Tab => {
                    let fields = self.selected_kind().field_labels().len();
                    self.current_param = (self.current_param + 1) % fields;
                    None
                }
                KeyCode::BackTab => {
                    let fields = self.selected_kind().field_labels().len();
                    self.current_param = if self.current_param == 0 {
                        fields - 1
                    } else {
                        self.current_param - 1
                    };
                    None
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Char(c) => {
                    if let Some(input) = self.param_inputs.get_mut(self.current_param) {
                        input.push(c);
                    }
                    None
                }
                KeyCode::Backspace => {
                    if let Some(input) = self.param_inputs.get_mut(self.current_param) {
                        input.pop();
                    }
                    None
                }
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.select_next();
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.select_prev();
                    None
                }
                KeyCode::Char('g') => {
                    self.selected = 0;
                    self.table_state.select(Some(0));
                    None
                }
                KeyCode::Char('G') => {
                    let last = ActionKind::all().len() - 1;
                    self.selected = last;
                    self.table_state.select(Some(last));
                    None
                }
                KeyCode::Enter => {
                    self.enter_input_mode();
                    None
                }
                KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::Back),
                _ => None,
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer_block = Block::default()
            .title(" Contract Operations ")
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style());

        let inner = outer_block.inner(area);
        frame.render_widget(outer_block, area);

        let has_form = self.input_mode || self.error.is_some();
        let constraints = if has_form {
            vec![Constraint::Min(7), Constraint::Length(8)]
        } else {
            vec![Constraint::Min(7), Constraint::Length(0)]
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        // -- Verb table --
        let header = Row::new(vec![Cell::from("Operation"), Cell::from("Inputs")])
            .style(THEME.table_header_style());

        let rows: Vec<Row> = ActionKind::all()
            .iter()
            .map(|kind| {
                let inputs = format!("({})", kind.field_labels().join(", "));
                Row::new(vec![
                    Cell::from(kind.to_string()).style(THEME.accent_style()),
                    Cell::from(inputs).style(THEME.muted_style()),
                ])
            })
            .collect();

        let widths = [Constraint::Length(24), Constraint::Min(20)];

        let table_block = Block::default()
            .title(" Operations ")
            .borders(Borders::ALL)
            .border_style(THEME.border_style());

        let table = Table::new(rows, widths)
            .header(header)
            .block(table_block)
            .row_highlight_style(THEME.selected_style())
            .highlight_symbol(" > ");

        frame.render_stateful_widget(table, chunks[0], &mut self.table_state);

        // -- Parameter form --
        if has_form {
            let form_block = Block::default()
                .title(" Submit ")
                .borders(Borders::ALL)
                .border_style(THEME.border_style());
            let form_inner = form_block.inner(chunks[1]);
            frame.render_widget(form_block, chunks[1]);

            let kind = self.selected_kind();
            let mut lines: Vec<Line> = vec![Line::from(vec![
                Span::styled("  Operation: ", THEME.muted_style()),
                Span::styled(kind.to_string(), THEME.accent_style()),
            ])];

            if self.input_mode {
                for (i, label) in kind.field_labels().iter().enumerate() {
                    let value = self.param_inputs.get(i).cloned().unwrap_or_default();
                    let cursor = if i == self.current_param { "_" } else { "" };
                    let style = if i == self.current_param {
                        Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(THEME.text)
                    };
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {label}: "), THEME.muted_style()),
                        Span::styled(format!("{value}{cursor}"), style),
                    ]));
                }
                lines.push(Line::from(Span::styled(
                    "  [Enter] Submit  [Tab] Next field  [Esc] Cancel",
                    THEME.muted_style(),
                )));
            }

            if let Some(ref err) = self.error {
                lines.push(Line::from(vec![
                    Span::styled("  ! ", THEME.error_style()),
                    Span::styled(err.clone(), THEME.error_style()),
                ]));
            }

            let paragraph = Paragraph::new(lines).style(Style::default().fg(THEME.text));
            frame.render_widget(paragraph, form_inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    const GOOD_ADDR: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(ops: &mut Operations, text: &str) {
        for c in text.chars() {
            ops.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_empty_form_is_rejected_without_event() {
        let mut ops = Operations::new();
        ops.handle_key(key(KeyCode::Enter)); // open form for Add Team Member
        assert!(ops.input_mode);

        // Submit with both fields empty: no event may escape.
        let event = ops.handle_key(key(KeyCode::Enter));
        assert!(event.is_none());
        assert!(ops.error.is_some());
        assert!(ops.input_mode);
    }

    #[test]
    fn test_assign_task_without_description_is_rejected() {
        let mut ops = Operations::new();
        ops.handle_key(key(KeyCode::Down)); // Assign Task
        ops.handle_key(key(KeyCode::Enter));
        type_text(&mut ops, GOOD_ADDR);

        let event = ops.handle_key(key(KeyCode::Enter));
        assert!(event.is_none());
        let err = ops.error.clone().unwrap();
        assert!(err.contains("task description"));
    }

    #[test]
    fn test_valid_form_emits_submit_action() {
        let mut ops = Operations::new();
        ops.handle_key(key(KeyCode::Enter));
        type_text(&mut ops, GOOD_ADDR);
        ops.handle_key(key(KeyCode::Tab));
        type_text(&mut ops, "Alice");

        let event = ops.handle_key(key(KeyCode::Enter));
        match event {
            Some(AppEvent::SubmitAction(Action::AddMember { name, .. })) => {
                assert_eq!(name, "Alice");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(!ops.input_mode);
        assert!(ops.error.is_none());
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut ops = Operations::new();
        ops.handle_key(key(KeyCode::Enter)); // Add Team Member: 2 fields
        assert_eq!(ops.current_param, 0);
        ops.handle_key(key(KeyCode::Tab));
        assert_eq!(ops.current_param, 1);
        ops.handle_key(key(KeyCode::Tab));
        assert_eq!(ops.current_param, 0);
    }

    #[test]
    fn test_escape_leaves_form() {
        let mut ops = Operations::new();
        ops.handle_key(key(KeyCode::Enter));
        assert!(ops.input_mode);
        ops.handle_key(key(KeyCode::Esc));
        assert!(!ops.input_mode);
    }

    #[test]
    fn test_escape_outside_form_goes_back() {
        let mut ops = Operations::new();
        let event = ops.handle_key(key(KeyCode::Esc));
        assert!(matches!(event, Some(AppEvent::Back)));
    }

    #[test]
    fn test_selection_clamps() {
        let mut ops = Operations::new();
        for _ in 0..10 {
            ops.handle_key(key(KeyCode::Down));
        }
        assert_eq!(ops.selected, ActionKind::all().len() - 1);
        for _ in 0..10 {
            ops.handle_key(key(KeyCode::Up));
        }
        assert_eq!(ops.selected, 0);
    }
}
