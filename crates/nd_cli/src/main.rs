use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nd_client::{NewsClient, Session};
use nd_core::shell::{render, UiState};
use nd_core::{Action, Config};
use nd_web::{AppState, ArticleStore};
use chrono::NaiveDate;
use std::io::{self, Stdout, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tui::backend::CrosstermBackend;
use tui::Terminal;

mod app;
mod logging;
mod navigator;
mod print;
mod ui;

use app::App;
use navigator::SystemNavigator;

#[derive(Parser, Debug)]
#[command(author, version, about = "Read the latest news from a newsdesk backend", long_about = None)]
pub struct Cli {
    /// Backend base URL (defaults to $NEWS_API_BASE_URL, then http://localhost:8003)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse articles interactively (default)
    Read,
    /// Print one page of articles and exit
    List {
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Language shown as active in the header
        #[arg(long, default_value = "eng")]
        language: String,
    },
    /// Serve articles from a JSON fixture on /api/news
    Serve {
        #[arg(long, default_value = "127.0.0.1:8003")]
        addr: SocketAddr,
        /// JSON array of articles
        #[arg(long)]
        fixture: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Read);
    logging::init(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Read),
    )?;

    match command {
        Commands::Read => {
            let config = Config::resolve(cli.base_url.as_deref())?;
            read(&config).await
        }
        Commands::List { page, language } => {
            let config = Config::resolve(cli.base_url.as_deref())?;
            list(&config, page, language).await
        }
        Commands::Serve { addr, fixture } => {
            let store = ArticleStore::from_json_file(&fixture).await?;
            nd_web::serve(AppState::new(store), addr).await?;
            Ok(())
        }
    }
}

async fn read(config: &Config) -> anyhow::Result<()> {
    let client = Arc::new(NewsClient::new(config)?);
    info!("📰 Reading news from {}", client.endpoint());
    let app = App::new(Session::new(client), Arc::new(SystemNavigator));

    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            if let Err(restore) = restore_terminal(&mut io::stdout()) {
                tracing::warn!("Failed to restore terminal: {}", restore);
            }
            return Err(e.into());
        }
    };

    let result = app::run(&mut terminal, app).await;

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;
    result
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen)?;
    disable_raw_mode()
}

async fn list(config: &Config, page: u32, language: String) -> anyhow::Result<()> {
    let client = Arc::new(NewsClient::new(config)?);
    let state = UiState {
        page,
        language,
        ..UiState::default()
    };
    let mut session = Session::with_state(client, state);
    session.dispatch(Action::Mount);
    session.settle().await;

    let text = list_output(session.state(), chrono::Local::now().date_naive())?;
    println!("{}", text);
    Ok(())
}

/// A failed fetch is reported once, through the returned error.
fn list_output(state: &UiState, today: NaiveDate) -> anyhow::Result<String> {
    if let Some(message) = state.error() {
        anyhow::bail!("{}", message);
    }
    Ok(print::screen_to_text(&render(state, today)))
}
