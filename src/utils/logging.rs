//! Logger initialization for the CLI.
//!
//! Console output is always enabled. When a log file is configured its
//! parent directories are created and every record is mirrored to it.

use env_logger::{Builder, Env, Target};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Writer that duplicates log output to stdout and a file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Initialize process-wide logging.
///
/// **Public** - called once from main.rs before any command runs
///
/// # Arguments
/// * `verbose` - Default to debug level instead of info (`RUST_LOG` overrides)
/// * `log_file` - Optional file that mirrors console output
///
/// # Errors
/// Fails if the log file cannot be created or the global logger is
/// already installed.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {} - {}",
            buf.timestamp(),
            record.target(),
            record.level(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let file = open_log_file(path)?;
        builder.target(Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder.try_init()?;
    Ok(())
}

/// Create the log file, creating missing parent directories first.
///
/// **Private** - internal helper
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}
