use std::fmt::Write;
use std::fs;
use std::num::IntErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{error, info, warn};

use crate::color::Color;
use crate::error::PaletteError;
use crate::palettes::palette::Palette;

// https://developer.gimp.org/core/standards/gpl/

const GIMP_MAGIC: &str = "GIMP Palette";
const CHANNELS_RGBA: &str = "Channels: RGBA";
const CHANNELS: &str = "Channels:";
const NAME: &str = "Name:";
const COLUMNS: &str = "Columns:";

/// A `Channels:` declaration only counts within the first lines of the file.
const HEADER_LINES: usize = 5;

/// Leading integer of a token, so "12abc" reads as 12 and "abc" not at all.
static INT_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GplContents {
	pub name: Option<String>,
	pub has_alpha: bool,
	pub colors: Vec<Color>,
}

fn parse_channel(token: &str) -> Option<i32> {
	let digits = INT_PREFIX.find(token)?.as_str();
	let v = match digits.parse::<i64>() {
		Ok(v) => v,
		Err(e) => match e.kind() {
			IntErrorKind::PosOverflow => i64::MAX,
			IntErrorKind::NegOverflow => i64::MIN,
			_ => return None,
		},
	};
	Some(v.clamp(0, 255) as i32)
}

impl Palette {
	/// Parses GIMP palette text.
	///
	/// Lines are trimmed and blank ones dropped before anything else happens.
	/// `Channels: RGBA` within the first [HEADER_LINES] lines turns on the
	/// fourth (alpha) column; any other `Channels:` line just marks the start
	/// of the color data. Data lines with fewer than three fields are ignored,
	/// lines whose numbers don't parse are skipped with a warning. Channel
	/// values are clamped, never rejected.
	pub fn parse_gpl(content: &str) -> Result<GplContents, PaletteError> {
		let lines = content
			.split('\n')
			.enumerate()
			.map(|(i, l)| (i + 1, l.trim()))
			.filter(|(_, l)| !l.is_empty())
			.collect::<Vec<(usize, &str)>>();

		match lines.first() {
			Some((_, first)) if first.starts_with(GIMP_MAGIC) => (),
			_ => return Err(PaletteError::MissingHeader),
		}

		let mut gpl = GplContents::default();
		let mut start = 1;
		for (i, (_, line)) in lines.iter().enumerate().take(HEADER_LINES).skip(1) {
			if line.starts_with(CHANNELS_RGBA) {
				gpl.has_alpha = true;
				start = i + 1;
				break;
			} else if line.starts_with(CHANNELS) {
				start = i + 1;
				break;
			}
		}

		gpl.name = lines[1..]
			.iter()
			.find_map(|(_, l)| l.strip_prefix(NAME))
			.map(|n| n.trim().to_string());

		for (line_no, line) in &lines[start..] {
			if line.starts_with('#') || line.starts_with(NAME) || line.starts_with(COLUMNS) {
				continue;
			}

			let parts = line.split_whitespace().collect::<Vec<&str>>();
			if parts.len() < 3 {
				continue;
			}

			let (Some(r), Some(g), Some(b)) = (parse_channel(parts[0]), parse_channel(parts[1]), parse_channel(parts[2])) else {
				warn!("Failed to parse line {line_no}: \"{line}\"");
				continue;
			};

			let mut a = 1.0;
			if gpl.has_alpha && parts.len() >= 4 {
				match parse_channel(parts[3]) {
					Some(v) => a = v as f64 / 255.0,
					None => {
						warn!("Failed to parse alpha in line {line_no}: \"{line}\"");
						continue;
					}
				}
			}

			gpl.colors.push(Color::new(r, g, b, a));
		}

		if gpl.colors.is_empty() {
			return Err(PaletteError::NoColors);
		}

		Ok(gpl)
	}

	pub fn from_gpl_string<S: AsRef<str>>(s: S) -> Result<Palette, PaletteError> {
		let gpl = Self::parse_gpl(s.as_ref())?;
		let mut pal = Palette::from(gpl.colors);
		if let Some(name) = gpl.name {
			pal.name = name;
		}
		Ok(pal)
	}

	/// Replaces the palette with the colors of a GPL file. Colors are taken as
	/// listed, duplicates included.
	///
	/// Returns false and leaves the palette untouched if the content has no
	/// header or no usable colors.
	pub fn load_from_gpl(&mut self, content: &str) -> bool {
		let gpl = match Self::parse_gpl(content) {
			Ok(gpl) => gpl,
			Err(e) => {
				error!("{e}");
				return false;
			}
		};

		if let Some(name) = gpl.name {
			self.name = name;
		}

		let count = gpl.colors.len();
		self.replace_colors(gpl.colors);

		info!("Loaded {count} colors from GPL file");
		true
	}

	/// The palette as GPL text with an alpha column. Colors are named by position.
	pub fn save_to_gpl(&self) -> String {
		let mut out = String::new();
		out.push_str(GIMP_MAGIC);
		out.push('\n');
		out.push_str(CHANNELS_RGBA);
		out.push('\n');
		// infallible for String
		let _ = writeln!(out, "{NAME} {}", self.name);
		out.push_str("#\n");

		for (i, c) in self.colors.iter().enumerate() {
			let _ = writeln!(out, "{:>3} {:>3} {:>3} {:>3} Color {}", c.r(), c.g(), c.b(), c.alpha_byte(), i + 1);
		}

		out
	}

	pub fn load_from_gpl_file<P: AsRef<Path>>(&mut self, path: P) -> Result<bool, PaletteError> {
		let content = fs::read_to_string(path)?;
		Ok(self.load_from_gpl(&content))
	}

	pub fn save_to_gpl_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		fs::write(path, self.save_to_gpl())?;
		Ok(())
	}
}
