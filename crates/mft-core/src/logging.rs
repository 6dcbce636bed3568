//! Logging init: file under the XDG state dir, falling back to stderr.

use std::fs;
use std::io;
use std::sync::Arc;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mft_core=debug,mft_cli=debug"))
}

/// Opens `~/.local/state/mft/mft.log` for appending.
fn open_log_file() -> anyhow::Result<fs::File> {
    let state_dir = xdg::BaseDirectories::with_prefix("mft")?.get_state_home();
    fs::create_dir_all(&state_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(state_dir.join("mft.log"))?;
    Ok(file)
}

/// Initialize structured logging.
///
/// Events go to a log file under the XDG state dir; when that dir is
/// unwritable the subscriber falls back to stderr so the CLI still runs.
/// Never fails and never panics; call once at process start.
pub fn init() {
    let writer = match open_log_file() {
        Ok(file) => BoxMakeWriter::new(Arc::new(file)),
        Err(_) => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
}
