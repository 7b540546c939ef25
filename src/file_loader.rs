use std::io;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("read file {path} failed")]
	Read {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Reads `path` into buffer rows. A trailing newline adds no extra row and an
/// empty file still yields one empty row.
pub fn load_lines(path: &Path) -> Result<Vec<String>, LoadError> {
	let text = read_file_text(path).map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
	let lines = split_lines(&text);
	info!("loaded {}: {} lines", path.display(), lines.len());
	Ok(lines)
}

fn read_file_text(path: &Path) -> io::Result<String> {
	let bytes = std::fs::read(path)?;
	String::from_utf8(bytes).map_err(|err| io::Error::new(ErrorKind::InvalidData, err))
}

pub fn split_lines(text: &str) -> Vec<String> {
	let lines = text.lines().map(str::to_string).collect::<Vec<_>>();
	if lines.is_empty() { vec![String::new()] } else { lines }
}
