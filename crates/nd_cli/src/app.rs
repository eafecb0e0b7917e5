use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use nd_client::{NewsSource, Session};
use nd_core::header::{render_header, LOCALES};
use nd_core::shell::{render, Screen};
use nd_core::{Action, Navigator};
use std::sync::Arc;
use tui::backend::Backend;
use tui::Terminal;

use crate::ui;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Shell(Action),
    SelectUp,
    SelectDown,
    OpenSelected,
    OpenMasthead,
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Shell(Action::Previous)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Shell(Action::Next)),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectDown),
        KeyCode::Enter | KeyCode::Char('o') => Some(Command::OpenSelected),
        KeyCode::Char('m') => Some(Command::OpenMasthead),
        KeyCode::Char('e') => Some(Command::Shell(Action::SelectLanguage(LOCALES[0].0.to_string()))),
        KeyCode::Char('s') => Some(Command::Shell(Action::SelectLanguage(LOCALES[1].0.to_string()))),
        _ => None,
    }
}

pub struct App<S: NewsSource + 'static> {
    pub session: Session<S>,
    navigator: Arc<dyn Navigator>,
    pub selected: usize,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl<S: NewsSource + 'static> App<S> {
    pub fn new(session: Session<S>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session,
            navigator,
            selected: 0,
            notice: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        render(self.session.state(), chrono::Local::now().date_naive())
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Shell(action) => {
                self.notice = None;
                self.selected = 0;
                self.session.dispatch(action);
            }
            Command::SelectUp => self.selected = self.selected.saturating_sub(1),
            Command::SelectDown => {
                let count = self.session.state().articles().len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            Command::OpenSelected => {
                let Some(article) = self.session.state().articles().get(self.selected) else {
                    return;
                };
                let entry = nd_core::ArticleEntry::from_article(article);
                let result = entry.open(self.navigator.as_ref());
                self.report(result);
            }
            Command::OpenMasthead => {
                let header = render_header(chrono::Local::now().date_naive(), &self.session.state().language);
                let result = self.navigator.open_isolated(header.masthead_link);
                self.report(result);
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn report(&mut self, result: nd_core::Result<()>) {
        if let Err(e) = result {
            tracing::warn!("Could not open link: {}", e);
            self.notice = Some(e.to_string());
        }
    }
}

/// Drives the reader until the user quits.
pub async fn run<B: Backend, S: NewsSource + 'static>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    app.session.dispatch(Action::Mount);

    loop {
        let screen = app.screen();
        terminal.draw(|f| ui::draw(f, &screen, app.selected, app.notice.as_deref()))?;
        if app.should_quit {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(command) = command_for(key) {
                        app.apply(command);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(action) = app.session.next_completion() => {
                app.session.dispatch(action);
            }
        }
    }
    Ok(())
}
