use nd_core::{Error, Navigator, Result};
use std::process::{Command, Stdio};
use url::Url;

/// Opens links in the desktop's default browser.
///
/// The opener is spawned detached with null stdio and nothing is passed
/// along but the URL, so the page gets no handle back to the reader.
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open_isolated(&self, url: &str) -> Result<()> {
        let url = validate_link(url)?;
        let mut child = opener_command(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Navigation(format!("Failed to launch browser: {}", e)))?;
        tracing::info!("🌐 Opened {}", url);

        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Only web links are handed to the opener.
pub fn validate_link(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::Navigation(format!("Refusing to open {} link", other))),
    }
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}
