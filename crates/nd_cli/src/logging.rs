use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Installs the global subscriber.
///
/// The interactive reader owns the terminal, so it only logs when a file is
/// given; the other commands log to stderr.
pub fn init(verbose: bool, log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if !interactive {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
