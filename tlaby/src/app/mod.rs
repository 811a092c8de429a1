pub mod commands;
pub mod session;

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::settings::SettingsError;

pub use commands::{Command, CommandError};
pub use session::{Output, Session};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Reads commands line by line until `exit` or the end of the input.
///
/// Command errors are reported on `output` and do not stop the loop.
pub fn run(
    session: &mut Session,
    prompt: &str,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match session.execute_line(line) {
            Ok(Output::Text(text)) => writeln!(output, "{}", text)?,
            Ok(Output::Quit) => break,
            Err(err) => {
                log::debug!("Command '{}' failed: {:?}", line, err);
                writeln!(output, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}
