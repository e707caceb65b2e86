use alloy::primitives::Address;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::theme::THEME;
use crate::utils;

pub struct Header {
    pub chain_id: u64,
    pub current_tab: usize,
    pub connected_address: Option<Address>,
    pub chain_name: String,
}

const TABS: &[&str] = &["Roster [1]", "Operations [2]"];

impl Header {
    pub fn new() -> Self {
        Self {
            chain_id: 0,
            current_tab: 0,
            connected_address: None,
            chain_name: String::new(),
        }
    }

    fn display_chain_name(&self) -> &str {
        if !self.chain_name.is_empty() {
            return &self.chain_name;
        }
        match self.chain_id {
            1 => "Mainnet",
            17000 => "Holesky",
            11155111 => "Sepolia",
            _ => "Unknown",
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Background for the entire header bar
        let header_block = Block::default().style(THEME.header_style());
        frame.render_widget(header_block, area);

        // Split the header into three sections: left (title), center (tabs), right (session info)
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Min(0),
                Constraint::Length(32),
            ])
            .split(area);

        // Left: App title
        let title = Paragraph::new(Span::styled(
            " team-tui",
            Style::default()
                .fg(THEME.text_accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(THEME.header_style());
        frame.render_widget(title, chunks[0]);

        // Center: Tab navigation
        let tab_titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
        let tabs = Tabs::new(tab_titles)
            .select(self.current_tab)
            .style(THEME.muted_style())
            .highlight_style(THEME.accent_style().add_modifier(Modifier::BOLD))
            .divider(Span::raw(" | "));
        frame.render_widget(tabs, chunks[1]);

        // Right: chain name and connected account
        let account = self
            .connected_address
            .as_ref()
            .map(utils::truncate_address)
            .unwrap_or_else(|| "not connected".to_string());
        let session_info = Line::from(vec![
            Span::styled(self.display_chain_name(), Style::default().fg(THEME.text)),
            Span::styled(" | ", THEME.muted_style()),
            Span::styled(account, THEME.address_style()),
        ]);
        let session_paragraph = Paragraph::new(session_info)
            .alignment(Alignment::Right)
            .style(THEME.header_style());
        frame.render_widget(session_paragraph, chunks[2]);
    }
}
