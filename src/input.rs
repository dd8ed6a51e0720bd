use std::fs;
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input is empty")]
    Empty,
}

/// Read the named inputs (`-` for stdin) into one text buffer, in order.
/// Rejects input that is empty after trimming; the analysis engine itself
/// never checks this.
pub fn read_text(paths: &[String]) -> Result<String, InputError> {
    let mut buf = String::new();
    for path in paths {
        if path == "-" {
            io::stdin().read_to_string(&mut buf)?;
        } else {
            buf.push_str(&fs::read_to_string(path)?);
        }
        if !buf.ends_with('\n') {
            buf.push('\n');
        }
    }
    if buf.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(buf)
}
