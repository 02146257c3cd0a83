use std::str::FromStr;

use crate::color::Color;
use crate::error::ColorError;

impl Color {
	/// Parses `rgb`, `rrggbb` or `rrggbbaa`, each with an optional leading `#`.
	/// The short form doubles every nibble, so `f` becomes `0xff`.
	pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
		let invalid = || ColorError::InvalidFormat(hex.to_string());

		let digits = hex.strip_prefix('#').unwrap_or(hex);
		if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
			return Err(invalid());
		}

		// all-ASCII from here on, byte slicing is safe
		let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
		let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|n| n * 17).map_err(|_| invalid());

		match digits.len() {
			3 => Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
			6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
			8 => Ok(Color::from([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
			_ => Err(invalid()),
		}
	}

	/// Lowercase `#rrggbb`, plus the rounded alpha byte when `include_alpha` is set.
	pub fn to_hex(&self, include_alpha: bool) -> String {
		let rgb = format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b());
		if include_alpha {
			format!("{rgb}{:02x}", self.alpha_byte())
		} else {
			rgb
		}
	}
}

impl FromStr for Color {
	type Err = ColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Color::from_hex(s)
	}
}
