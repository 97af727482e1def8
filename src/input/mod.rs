use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod delimited;
pub mod geneset;

pub use delimited::{parse_delimited, sniff_delimiter, Delimiter};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("empty input: {0}")]
    EmptyInput(String),
    #[error("failed to decompress {path}: {message}")]
    Decompress { path: String, message: String },
}

// Reads a table or gene-list file as text, gunzipping *.gz transparently.
pub fn read_text(path: &Path) -> Result<String, InputError> {
    let bytes = if path.extension().is_some_and(|ext| ext == "gz") {
        let file = File::open(path)?;
        let mut decoder = MultiGzDecoder::new(file);
        let mut buf = Vec::new();
        decoder
            .read_to_end(&mut buf)
            .map_err(|e| InputError::Decompress {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        buf
    } else {
        std::fs::read(path)?
    };

    String::from_utf8(bytes).map_err(|_| {
        InputError::MalformedInput(format!("{} is not valid UTF-8 text", path.display()))
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
