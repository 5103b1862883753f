use std::io;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::config::AppConfig;
use crate::model::list::TaskList;
use crate::model::task::TaskId;
use crate::ops::list_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the displayed list
    Navigate,
    /// Typing the next task into the pending input row
    Insert,
    /// Editing an existing task's text
    Edit,
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the displayed list
    pub cursor: usize,
    /// First visible row of the list viewport
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(config: &AppConfig, tasks: TaskList) -> Self {
        App {
            tasks,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
        }
    }

    /// Ids of the displayed rows, in display order
    pub fn displayed_ids(&self) -> Vec<TaskId> {
        list_ops::display_rows(&self.tasks)
            .iter()
            .map(|t| t.id)
            .collect()
    }

    pub fn displayed_len(&self) -> usize {
        list_ops::display_rows(&self.tasks).len()
    }

    /// The id of the task under the cursor, if any
    pub fn selected_id(&self) -> Option<TaskId> {
        self.displayed_ids().get(self.cursor).copied()
    }

    /// Keep the cursor inside the displayed list after a mutation
    pub fn clamp_cursor(&mut self) {
        let len = self.displayed_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Move the cursor to the displayed position of a task
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(pos) = self.displayed_ids().iter().position(|&x| x == id) {
            self.cursor = pos;
        }
    }

    /// Adjust the scroll offset so the cursor row is inside the viewport
    pub fn ensure_cursor_visible(&mut self, viewport_rows: usize) {
        if viewport_rows == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + viewport_rows {
            self.scroll_offset = self.cursor + 1 - viewport_rows;
        }
        let len = self.displayed_len();
        if self.scroll_offset + viewport_rows > len {
            self.scroll_offset = len.saturating_sub(viewport_rows);
        }
    }
}

/// Run the TUI application
pub fn run(config: AppConfig, tasks: TaskList) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config, tasks);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Nothing runs in the background, so block until the next event
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
            Event::Paste(text) => input::handle_paste(app, &text),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
