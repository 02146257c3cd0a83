use std::fs;
use std::path::Path;

use tracing::info;

use crate::color::Color;
use crate::error::PaletteError;
use crate::palettes::palette::Palette;

impl Palette {
	/// A JSON array of `#rrggbbaa` strings.
	pub fn to_json(&self) -> Result<String, PaletteError> {
		Ok(serde_json::to_string_pretty(&self.colors)?)
	}

	/// Replaces the palette with the colors of a JSON array of hex strings and
	/// returns how many were loaded. Nothing changes unless every entry parses.
	pub fn load_from_json(&mut self, s: &str) -> Result<usize, PaletteError> {
		let entries: Vec<String> = serde_json::from_str(s)?;

		let colors = entries.iter().enumerate().map(|(i, c)| {
			Color::from_hex(c.trim()).map_err(|e| PaletteError::InvalidJsonEntry { index: i, msg: e.to_string() })
		}).collect::<Result<Vec<Color>, PaletteError>>()?;

		if colors.is_empty() {
			return Err(PaletteError::NoColors);
		}

		let count = colors.len();
		self.replace_colors(colors);

		info!("Loaded {count} colors from JSON");
		Ok(count)
	}

	pub fn load_from_json_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PaletteError> {
		let content = fs::read_to_string(path)?;
		self.load_from_json(&content)
	}

	pub fn save_to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		fs::write(path, self.to_json()?)?;
		Ok(())
	}
}
