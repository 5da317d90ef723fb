//! Terminal UI event loop for the shortcut panel
//!
//! Wires the panel state, dispatcher and widgets into an interactive
//! session. Each key event is handled to completion before the next is
//! processed; dispatch errors surface on the status line instead of
//! aborting the session.

use crate::DeckError;
use crate::context::ExecutionContext;
use crate::dispatch::{ActionDispatcher, SystemClipboard, SystemOpener};
use crate::panel::{
    ActionMenu, DirectoryModal, DirectoryModalView, PanelState, ShortcutCard, Theme,
};
use crate::shortcuts::ShortcutDescriptor;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Paragraph, Widget},
};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Shared status line, written by the notify callback
type StatusLine = Arc<Mutex<Option<String>>>;

/// Interactive panel application
struct App {
    state: PanelState,
    dispatcher: ActionDispatcher,
    modal: DirectoryModal,
    theme: Theme,
    status: StatusLine,
    should_quit: bool,
}

impl App {
    fn new(context: ExecutionContext, shortcuts: &[ShortcutDescriptor]) -> Self {
        let status: StatusLine = Arc::new(Mutex::new(None));
        let notify_status = Arc::clone(&status);

        let mut dispatcher = ActionDispatcher::new(context)
            .with_opener(Box::new(SystemOpener::new()))
            .with_notify(Box::new(move |message: &str| {
                if let Ok(mut line) = notify_status.lock() {
                    *line = Some(message.to_string());
                }
            }));
        // A headless session without a clipboard still gets a working panel
        if let Ok(clipboard) = SystemClipboard::new() {
            dispatcher = dispatcher.with_clipboard(Box::new(clipboard));
        }

        let state = PanelState::new(&dispatcher, shortcuts, true);
        Self {
            state,
            dispatcher,
            modal: DirectoryModal::new(),
            theme: Theme::default(),
            status,
            should_quit: false,
        }
    }

    fn set_status(&self, message: impl Into<String>) {
        if let Ok(mut line) = self.status.lock() {
            *line = Some(message.into());
        }
    }

    fn status_text(&self) -> Option<String> {
        self.status.lock().ok().and_then(|line| line.clone())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.modal.visible() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.modal.hide();
            }
            return;
        }

        if self.state.menu.is_some() {
            match key.code {
                KeyCode::Esc => self.state.close_menu(),
                KeyCode::Up | KeyCode::Char('k') => self.state.menu_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.state.menu_next(),
                KeyCode::Enter => {
                    let result = self
                        .state
                        .activate_menu_item(&mut self.dispatcher, Some(&mut self.modal));
                    if let Err(e) = result {
                        self.set_status(e.to_string());
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char('m') | KeyCode::Tab => self.state.open_menu(),
            KeyCode::Enter => {
                let result = self
                    .state
                    .activate_primary(&mut self.dispatcher, Some(&mut self.modal));
                if let Err(e) = result {
                    self.set_status(e.to_string());
                }
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        let [card_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        ShortcutCard::new(&self.state, &self.theme).render(card_area, frame.buffer_mut());
        ActionMenu::new(&self.state, &self.theme).render(card_area, frame.buffer_mut());

        let dav_url = self
            .modal
            .path()
            .and_then(|path| self.dispatcher.context().dav_url(path));
        DirectoryModalView::new(&self.modal, &self.theme, dav_url)
            .render(card_area, frame.buffer_mut());

        let status = self
            .status_text()
            .unwrap_or_else(|| "↑/↓ select  ⏎ primary action  m more  q quit".to_string());
        Paragraph::new(Line::from(status)).render(status_area, frame.buffer_mut());
    }
}

/// Run the interactive shortcut panel until the user quits
///
/// # Errors
/// Returns an error if the terminal cannot be set up or an IO error occurs
/// in the event loop.
pub fn run(context: ExecutionContext, shortcuts: &[ShortcutDescriptor]) -> Result<(), DeckError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, App::new(context, shortcuts));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<(), DeckError> {
    while !app.should_quit {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
