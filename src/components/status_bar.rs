use alloy::primitives::U256;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::theme::THEME;
use crate::utils;

pub struct StatusBar {
    pub session_open: bool,
    pub balance: Option<U256>,
    pub notice: Option<String>,
    pub error_message: Option<String>,
    /// Number of in-flight contract calls. Submissions may overlap, so
    /// this is a counter rather than a flag.
    pub pending: usize,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            session_open: false,
            balance: None,
            notice: None,
            error_message: None,
            pending: 0,
        }
    }

    pub fn set_notice(&mut self, text: String) {
        self.notice = Some(text);
        self.error_message = None;
    }

    pub fn set_error(&mut self, text: String) {
        self.error_message = Some(text);
        self.notice = None;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Background
        let bg = Block::default().style(THEME.header_style());
        frame.render_widget(bg, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(area);

        // --- Left side: message or key hints ---
        let left_content = if let Some(ref err) = self.error_message {
            Line::from(vec![
                Span::styled(
                    " ! ",
                    Style::default()
                        .fg(THEME.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(err.as_str(), Style::default().fg(THEME.warning)),
            ])
        } else if let Some(ref notice) = self.notice {
            Line::from(vec![
                Span::styled(" \u{2713} ", Style::default().fg(THEME.success)),
                Span::styled(notice.as_str(), Style::default().fg(THEME.text)),
            ])
        } else if self.pending > 0 {
            Line::from(Span::styled(
                format!(" Submitting... ({} pending)", self.pending),
                Style::default().fg(THEME.text_accent),
            ))
        } else {
            Line::from(vec![
                Span::styled(" c", Style::default().fg(THEME.text_accent)),
                Span::styled(":Connect  ", Style::default().fg(THEME.text_muted)),
                Span::styled("f", Style::default().fg(THEME.text_accent)),
                Span::styled(":Fetch  ", Style::default().fg(THEME.text_muted)),
                Span::styled("e", Style::default().fg(THEME.text_accent)),
                Span::styled(":Export  ", Style::default().fg(THEME.text_muted)),
                Span::styled("Esc", Style::default().fg(THEME.text_accent)),
                Span::styled(":Back  ", Style::default().fg(THEME.text_muted)),
                Span::styled("?", Style::default().fg(THEME.text_accent)),
                Span::styled(":Help  ", Style::default().fg(THEME.text_muted)),
                Span::styled("q", Style::default().fg(THEME.text_accent)),
                Span::styled(":Quit", Style::default().fg(THEME.text_muted)),
            ])
        };

        let left = Paragraph::new(left_content).style(THEME.header_style());
        frame.render_widget(left, chunks[0]);

        // --- Right side: session status + balance ---
        let (dot_color, status_text) = if self.session_open {
            (THEME.success, "Connected")
        } else {
            (THEME.error, "Disconnected")
        };

        let balance_str = self
            .balance
            .map(utils::format_eth)
            .unwrap_or_else(|| "--".to_string());

        let right_content = Line::from(vec![
            Span::styled("\u{25cf} ", Style::default().fg(dot_color)),
            Span::styled(status_text, Style::default().fg(dot_color)),
            Span::styled(" | ", THEME.muted_style()),
            Span::styled(format!("{balance_str} "), THEME.eth_style()),
        ]);

        let right = Paragraph::new(right_content)
            .alignment(Alignment::Right)
            .style(THEME.header_style());
        frame.render_widget(right, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_clears_error() {
        let mut bar = StatusBar::new();
        bar.set_error("boom".to_string());
        bar.set_notice("done".to_string());
        assert!(bar.error_message.is_none());
        assert_eq!(bar.notice.as_deref(), Some("done"));
    }

    #[test]
    fn test_error_clears_notice() {
        let mut bar = StatusBar::new();
        bar.set_notice("done".to_string());
        bar.set_error("boom".to_string());
        assert!(bar.notice.is_none());
        assert_eq!(bar.error_message.as_deref(), Some("boom"));
    }
}
