use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::*;
use ratatui::widgets::*;
use tokio::sync::mpsc;

use crate::components::Component;
use crate::components::header::Header;
use crate::components::help::HelpOverlay;
use crate::components::lookup::LookupBar;
use crate::components::operations::Operations;
use crate::components::roster::Roster;
use crate::components::status_bar::StatusBar;
use crate::data::ContractService;
use crate::data::addressbook::AddressBook;
use crate::events::{AppEvent, View};
use crate::theme::THEME;
use crate::utils;

pub struct App {
    // Navigation
    view_stack: Vec<View>,
    current_view: View,

    // Components
    header: Header,
    roster: Roster,
    operations: Operations,
    status_bar: StatusBar,
    lookup: LookupBar,
    help: HelpOverlay,

    // Data
    service: Arc<ContractService>,
    address_book: AddressBook,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,

    // State
    session: Option<Address>,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn with_service(
        service: Arc<ContractService>,
        address_book: AddressBook,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        tick_rate_ms: u64,
    ) -> Self {
        Self {
            view_stack: Vec::new(),
            current_view: View::Roster,
            header: Header::new(),
            roster: Roster::new(),
            operations: Operations::new(),
            status_bar: StatusBar::new(),
            lookup: LookupBar::new(),
            help: HelpOverlay::new(),
            service,
            address_book,
            event_rx,
            session: None,
            should_quit: false,
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn set_chain_info(&mut self, name: String) {
        self.header.chain_name = name;
    }

    pub async fn run(&mut self, mut terminal: ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        // Seed the roster from previously seen member addresses, one
        // read per address.
        self.service.fetch_known(self.address_book.addresses());

        let mut interval = tokio::time::interval(self.tick_rate);
        let mut events = EventStream::new();

        while !self.should_quit {
            tokio::select! {
                _ = interval.tick() => {
                    terminal.draw(|frame| self.render(frame))?;
                }
                Some(Ok(event)) = events.next() => {
                    self.handle_terminal_event(event);
                }
                Some(app_event) = self.event_rx.recv() => {
                    self.handle_app_event(app_event);
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Fill background
        frame.render_widget(
            Block::default().style(Style::default().bg(THEME.bg)),
            area,
        );

        // Layout: header (1) | content (fill) | status bar (1)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.header.render(frame, chunks[0]);

        match self.current_view {
            View::Roster => self.roster.render(frame, chunks[1]),
            View::Operations => self.operations.render(frame, chunks[1]),
        }

        self.status_bar.render(frame, chunks[2]);

        // Overlays (rendered on top)
        self.lookup.render(frame, area);
        self.help.render(frame, area);
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only handle key press events (not release/repeat) for cross-platform compat
            if key.kind != KeyEventKind::Press {
                return;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return;
            }

            // Help overlay consumes all keys when visible
            if self.help.handle_key(key) {
                return;
            }

            // Lookup popup consumes keys when active
            if self.lookup.active {
                if let Some(input) = self.lookup.handle_key(key) {
                    if !input.is_empty() {
                        match utils::parse_address(&input) {
                            Ok(address) => {
                                self.service.fetch_member(address);
                            }
                            Err(msg) => {
                                self.lookup.error = Some(msg);
                                self.lookup.active = true;
                            }
                        }
                    }
                }
                return;
            }

            // The operations form owns the keyboard while it is open
            if self.current_view == View::Operations && self.operations.input_mode {
                if let Some(event) = self.operations.handle_key(key) {
                    self.handle_app_event(event);
                }
                return;
            }

            // Global keys
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    self.help.toggle();
                    return;
                }
                KeyCode::Char('c') => {
                    self.service.connect_wallet();
                    return;
                }
                // Tab switching with number keys
                KeyCode::Char('1') => {
                    self.navigate_to(View::Roster);
                    return;
                }
                KeyCode::Char('2') => {
                    self.navigate_to(View::Operations);
                    return;
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    self.go_back();
                    return;
                }
                _ => {}
            }

            // Roster context actions
            if self.current_view == View::Roster {
                match key.code {
                    KeyCode::Char('f') => {
                        self.lookup.activate();
                        return;
                    }
                    KeyCode::Char('e') => {
                        self.service.export_roster(self.roster.members.clone());
                        return;
                    }
                    _ => {}
                }
            }

            // Delegate to current view's component
            let app_event = match self.current_view {
                View::Roster => self.roster.handle_key(key),
                View::Operations => self.operations.handle_key(key),
            };

            if let Some(event) = app_event {
                self.handle_app_event(event);
            }
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Connected(chain_id) => {
                self.header.chain_id = chain_id;
            }
            AppEvent::WalletConnected { address, balance } => {
                // The session is opened once and never refreshed.
                self.session = Some(address);
                self.header.connected_address = Some(address);
                self.status_bar.session_open = true;
                self.status_bar.balance = Some(balance);
                self.status_bar
                    .set_notice(format!("Connected: {}", utils::truncate_address(&address)));
                // The connected account may itself be a member; show it.
                self.service.fetch_member(address);
            }
            AppEvent::WalletFailed(msg) => {
                self.status_bar.set_error(msg);
            }
            AppEvent::MemberLoaded(record) => {
                if self.address_book.add(record.wallet_address, record.name.clone()) {
                    if let Err(e) = self.address_book.save() {
                        tracing::warn!(error = %e, "could not persist address book");
                    }
                }
                self.roster.push(*record);
            }
            AppEvent::MemberNotFound(address) => {
                self.status_bar.set_notice(format!(
                    "No member record for {}",
                    utils::truncate_address(&address)
                ));
            }
            AppEvent::SubmitAction(action) => {
                if self.session.is_none() {
                    self.status_bar
                        .set_error("Connect a wallet first (press c).".to_string());
                    return;
                }
                self.status_bar.pending += 1;
                self.service.submit(action);
            }
            AppEvent::ActionOutcome { kind, outcome } => {
                self.status_bar.pending = self.status_bar.pending.saturating_sub(1);
                if outcome.success {
                    self.status_bar.set_notice(format!(
                        "{} ({})",
                        kind.success_message(),
                        utils::truncate_hash(&outcome.tx_hash)
                    ));
                } else {
                    self.status_bar.set_error(format!(
                        "{kind} transaction reverted ({})",
                        utils::truncate_hash(&outcome.tx_hash)
                    ));
                }
            }
            AppEvent::ActionFailed { kind: _, message } => {
                self.status_bar.pending = self.status_bar.pending.saturating_sub(1);
                self.status_bar.set_error(message);
            }
            AppEvent::ExportComplete(msg) => {
                self.status_bar.set_notice(msg);
            }
            AppEvent::Navigate(view) => {
                self.navigate_to(view);
            }
            AppEvent::Back => {
                self.go_back();
            }
            AppEvent::Status(msg) => {
                self.status_bar.set_notice(msg);
            }
            AppEvent::Error(msg) => {
                self.status_bar.set_error(msg);
            }
        }
    }

    fn navigate_to(&mut self, view: View) {
        self.header.current_tab = match view {
            View::Roster => 0,
            View::Operations => 1,
        };

        // Clear error on navigation
        self.status_bar.error_message = None;

        let old_view = std::mem::replace(&mut self.current_view, view);
        self.view_stack.push(old_view);
    }

    fn go_back(&mut self) {
        if let Some(prev_view) = self.view_stack.pop() {
            self.current_view = prev_view;
            self.header.current_tab = match self.current_view {
                View::Roster => 0,
                View::Operations => 1,
            };
            self.status_bar.error_message = None;
        }
    }
}
