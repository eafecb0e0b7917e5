//! Page shell state and the reducer that drives it.
//!
//! All state changes go through [`update`], which returns the fetch the
//! caller has to perform, if any. Each fetch carries a generation number and
//! completions from older generations are dropped, so a slow response can
//! never overwrite the result of a newer request.

use chrono::NaiveDate;

use crate::header::{render_header, HeaderView, DEFAULT_LANGUAGE};
use crate::view::{render_articles, ArticleEntry};
use crate::{Article, PageRequest, PageResult};

pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Error(String),
    Ready(Vec<Article>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub page: u32,
    pub total_pages: u32,
    pub language: String,
    pub phase: Phase,
    pub generation: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: 0,
            total_pages: 0,
            language: DEFAULT_LANGUAGE.to_string(),
            phase: Phase::Loading,
            generation: 0,
        }
    }
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn articles(&self) -> &[Article] {
        match &self.phase {
            Phase::Ready(articles) => articles,
            _ => &[],
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Mount,
    SelectLanguage(String),
    Previous,
    Next,
    Loaded { generation: u64, result: PageResult },
    Failed { generation: u64, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { generation: u64, request: PageRequest },
}

pub fn update(state: &mut UiState, action: Action) -> Option<Effect> {
    match action {
        Action::Mount => begin_fetch(state),
        Action::SelectLanguage(language) => {
            if state.language == language {
                return None;
            }
            state.language = language;
            // The backend is not told about the language; the page is reloaded as is.
            begin_fetch(state)
        }
        Action::Previous => {
            if !state.has_previous() {
                return None;
            }
            state.page -= 1;
            begin_fetch(state)
        }
        Action::Next => {
            if !state.has_next() {
                return None;
            }
            state.page += 1;
            begin_fetch(state)
        }
        Action::Loaded { generation, result } => {
            if generation != state.generation {
                tracing::debug!(
                    "Discarding stale page (generation {}, current {})",
                    generation,
                    state.generation
                );
                return None;
            }
            state.total_pages = result.total_pages;
            if state.total_pages > 0 && state.page >= state.total_pages {
                tracing::info!(
                    "Page {} is past the last page {}, clamping",
                    state.page,
                    state.total_pages
                );
                state.page = state.total_pages - 1;
                return begin_fetch(state);
            }
            state.phase = Phase::Ready(result.content);
            None
        }
        Action::Failed { generation, message } => {
            if generation != state.generation {
                tracing::debug!("Discarding stale failure (generation {})", generation);
                return None;
            }
            state.phase = Phase::Error(message);
            None
        }
    }
}

fn begin_fetch(state: &mut UiState) -> Option<Effect> {
    state.generation += 1;
    state.phase = Phase::Loading;
    Some(Effect::Fetch {
        generation: state.generation,
        request: PageRequest::for_page(state.page),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Error(String),
    Ready {
        header: HeaderView,
        articles: Vec<ArticleEntry>,
        pagination: Pagination,
    },
}

pub fn render(state: &UiState, today: NaiveDate) -> Screen {
    match &state.phase {
        Phase::Loading => Screen::Loading,
        Phase::Error(message) => Screen::Error(format!("Error: {}", message)),
        Phase::Ready(articles) => Screen::Ready {
            header: render_header(today, &state.language),
            articles: render_articles(articles),
            pagination: Pagination {
                label: format!("Page {} of {}", state.page + 1, state.total_pages),
                previous_enabled: state.has_previous(),
                next_enabled: state.has_next(),
            },
        },
    }
}
