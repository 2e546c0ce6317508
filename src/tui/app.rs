use crate::tui::list::ListState;
use crate::tui::search::SearchCursor;
use crate::tui::ui;
use crate::{CandidateList, FilterWidget, WidgetConfig};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tracing::info;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

pub struct App {
    pub widget: FilterWidget,
    pub cursor: SearchCursor,
    pub list: ListState,
    pub placeholder: String,
    tick_rate: Duration,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(candidates: CandidateList, config: WidgetConfig) -> Self {
        let placeholder = config.placeholder.clone();
        Self {
            widget: FilterWidget::new(candidates, config),
            cursor: SearchCursor::default(),
            list: ListState::default(),
            placeholder,
            tick_rate: Duration::from_millis(50),
            should_quit: false,
        }
    }

    pub fn focus(&self) -> Focus {
        if self.widget.is_focused() {
            Focus::Input
        } else {
            Focus::Results
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        let result = self.event_loop(terminal);
        self.widget.unmount();
        info!("search box closed");
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.poll_timeout(Instant::now(), last_tick);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            self.on_tick(Instant::now());
            if last_tick.elapsed() >= self.tick_rate {
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Wait no longer than the next tick or the pending commit, whichever is first.
    fn poll_timeout(&self, now: Instant, last_tick: Instant) -> Duration {
        let tick = self
            .tick_rate
            .saturating_sub(now.saturating_duration_since(last_tick));
        match self.widget.next_deadline() {
            Some(deadline) => tick.min(deadline.saturating_duration_since(now)),
            None => tick,
        }
    }

    /// Fire the debounce timer if due. Returns true when results changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.widget.tick(now) {
            self.list.reset(self.widget.results().len());
            return true;
        }
        false
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear(now);
                return;
            }
            KeyCode::Esc => {
                if self.widget.raw_query().is_empty() {
                    self.should_quit = true;
                } else {
                    self.clear(now);
                }
                return;
            }
            _ => {}
        }

        match self.focus() {
            Focus::Input => self.handle_search_key(key, now),
            Focus::Results => self.handle_list_key(key, now),
        }
    }

    fn clear(&mut self, now: Instant) {
        self.widget.clear(now);
        self.cursor.home();
    }

    fn set_query(&mut self, text: String, now: Instant) {
        self.widget.set_query(text, now);
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        let text = self.widget.raw_query().to_string();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let next = self.cursor.insert(&text, c);
                self.set_query(next, now);
            }
            KeyCode::Backspace => {
                if let Some(next) = self.cursor.backspace(&text) {
                    self.set_query(next, now);
                }
            }
            KeyCode::Delete => {
                if let Some(next) = self.cursor.delete(&text) {
                    self.set_query(next, now);
                }
            }
            KeyCode::Left => self.cursor.move_left(&text),
            KeyCode::Right => self.cursor.move_right(&text),
            KeyCode::Home => self.cursor.home(),
            KeyCode::End => self.cursor.end(&text),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.widget.blur();
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, now: Instant) {
        let total = self.widget.results().len();
        match key.code {
            KeyCode::Up if self.list.at_top() => self.widget.focus(),
            KeyCode::Up => self.list.select_prev(),
            KeyCode::Down => self.list.select_next(total),
            KeyCode::PageUp => self.list.page_up(),
            KeyCode::PageDown => self.list.page_down(total),
            KeyCode::Home => self.list.select_first(total),
            KeyCode::End => self.list.select_last(total),

            KeyCode::Tab | KeyCode::Char('/') => self.widget.focus(),

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.widget.focus();
                let text = self.widget.raw_query().to_string();
                self.cursor.end(&text);
                let next = self.cursor.insert(&text, c);
                self.set_query(next, now);
            }

            _ => {}
        }
    }
}
