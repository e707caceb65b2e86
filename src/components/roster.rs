use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::components::Component;
use crate::data::types::TeamMember;
use crate::events::AppEvent;
use crate::theme::THEME;
use crate::utils;

/// Table of fetched member records. The list is append-only and carries
/// no deduplication: fetching the same address twice shows two rows.
pub struct Roster {
    pub members: Vec<TeamMember>,
    table_state: TableState,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            table_state: TableState::default(),
        }
    }

    pub fn push(&mut self, member: TeamMember) {
        self.members.push(member);
    }

    fn select_next(&mut self) {
        if self.members.is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = if current + 1 >= self.members.len() {
            current
        } else {
            current + 1
        };
        self.table_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.members.is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(current.saturating_sub(1)));
    }

    fn select_first(&mut self) {
        if !self.members.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        if !self.members.is_empty() {
            self.table_state.select(Some(self.members.len() - 1));
        }
    }
}

fn build_rows(members: &[TeamMember]) -> Vec<Row<'static>> {
    members
        .iter()
        .map(|m| {
            let status = if m.active { "\u{25cf} active" } else { "\u{25cf} inactive" };
            Row::new(vec![
                Cell::from(utils::truncate_address(&m.wallet_address))
                    .style(THEME.address_style()),
                Cell::from(m.name.clone()),
                Cell::from(m.tasks_assigned.to_string()),
                Cell::from(m.tasks_completed.to_string()),
                Cell::from(status).style(THEME.member_status_style(m.active)),
            ])
        })
        .collect()
}

impl Component for Roster {
    fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
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
                self.select_first();
                None
            }
            KeyCode::Char('G') => {
                self.select_last();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Team Members ({}) ", self.members.len()))
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style());

        if self.members.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let empty = Paragraph::new("No members fetched yet. Press [f] to fetch one by address.")
                .style(THEME.muted_style())
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Address"),
            Cell::from("Name"),
            Cell::from("Assigned"),
            Cell::from("Completed"),
            Cell::from("Status"),
        ])
        .style(THEME.table_header_style());

        let widths = [
            Constraint::Length(17),
            Constraint::Min(12),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(12),
        ];

        let table = Table::new(build_rows(&self.members), widths)
            .header(header)
            .block(block)
            .row_highlight_style(THEME.selected_style())
            .highlight_symbol(" > ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};

    fn member(addr: u8, active: bool) -> TeamMember {
        TeamMember {
            wallet_address: Address::from_slice(&[addr; 20]),
            name: format!("member-{addr}"),
            tasks_assigned: U256::from(2u64),
            tasks_completed: U256::from(1u64),
            active,
        }
    }

    #[test]
    fn test_refetch_appends_duplicate_row() {
        // Append-only with no deduplication: fetching the same address
        // twice shows two rows.
        let mut roster = Roster::new();
        roster.push(member(0x01, true));
        roster.push(member(0x01, true));
        assert_eq!(roster.members.len(), 2);
        assert_eq!(
            roster.members[0].wallet_address,
            roster.members[1].wallet_address
        );
    }

    #[test]
    fn test_refetched_record_reflects_deactivation() {
        let mut roster = Roster::new();
        roster.push(member(0x01, true));
        roster.push(member(0x01, false));
        assert!(!roster.members.last().unwrap().active);
    }

    #[test]
    fn test_selection_clamps() {
        let mut roster = Roster::new();
        roster.push(member(0x01, true));
        roster.push(member(0x02, true));

        roster.select_next();
        roster.select_next();
        roster.select_next();
        assert_eq!(roster.table_state.selected(), Some(1));

        roster.select_prev();
        roster.select_prev();
        roster.select_prev();
        assert_eq!(roster.table_state.selected(), Some(0));
    }

    #[test]
    fn test_selection_noop_when_empty() {
        let mut roster = Roster::new();
        roster.select_next();
        assert_eq!(roster.table_state.selected(), None);
    }
}
