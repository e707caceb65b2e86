use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::theme::THEME;

pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Returns true if it consumed the event
    pub fn handle_key(&mut self, _key: KeyEvent) -> bool {
        if self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let popup_width = area.width * 60 / 100;
        let popup_height = area.height * 70 / 100;
        let x = area.x + (area.width - popup_width) / 2;
        let y = area.y + (area.height - popup_height) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style())
            .style(Style::default().bg(THEME.surface));

        let entry = |keys: &str, desc: &str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<9}"), Style::default().fg(THEME.text_accent)),
                Span::styled(desc.to_string(), Style::default().fg(THEME.text)),
            ])
        };
        let section = |title: &str| {
            Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(THEME.text_accent)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let help_text = vec![
            section("Navigation"),
            entry("\u{2191}/k", "Move up"),
            entry("\u{2193}/j", "Move down"),
            entry("Enter", "Select / Open form"),
            entry("Esc", "Go back / Close"),
            entry("Tab", "Next form field"),
            Line::from(""),
            section("Views"),
            entry("1", "Roster"),
            entry("2", "Operations"),
            Line::from(""),
            section("Session"),
            entry("c", "Connect wallet"),
            Line::from(""),
            section("Roster Actions"),
            entry("f", "Fetch member by address"),
            entry("e", "Export roster to CSV"),
            Line::from(""),
            section("Other"),
            entry("?", "Toggle this help"),
            entry("q", "Quit"),
            entry("g", "Go to top"),
            entry("G", "Go to bottom"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}
