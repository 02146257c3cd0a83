use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
	#[error("Invalid hex color format: \"{0}\"")]
	InvalidFormat(String),
}

#[derive(Debug, Error)]
pub enum PaletteError {
	#[error("Invalid GPL file: missing GIMP Palette header")]
	MissingHeader,
	#[error("Unsupported palette format")]
	UnsupportedFormat,
	#[error("No valid colors found")]
	NoColors,
	#[error("Invalid JSON palette: {0}")]
	InvalidJson(#[from] serde_json::Error),
	#[error("Invalid JSON array item at index {index}: {msg}")]
	InvalidJsonEntry { index: usize, msg: String },
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}
