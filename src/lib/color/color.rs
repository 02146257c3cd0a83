use std::fmt::{Display, Formatter};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color. The RGB channels are bytes, alpha is a real number in `[0, 1]`.
///
/// Colors are never changed in place. Every constructor clamps its input, so a
/// `Color` can't hold an out-of-range channel.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Color {
	r: u8,
	g: u8,
	b: u8,
	a: f64,
}

fn clamp_channel(v: i32) -> u8 {
	v.clamp(0, 255) as u8
}

fn clamp_alpha(a: f64) -> f64 {
	// NaN would slip through f64::clamp
	if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) }
}

impl Color {
	pub fn new(r: i32, g: i32, b: i32, a: f64) -> Self {
		Self {
			r: clamp_channel(r),
			g: clamp_channel(g),
			b: clamp_channel(b),
			a: clamp_alpha(a),
		}
	}

	/// Opaque color from three channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn r(&self) -> u8 {
		self.r
	}

	pub fn g(&self) -> u8 {
		self.g
	}

	pub fn b(&self) -> u8 {
		self.b
	}

	pub fn a(&self) -> f64 {
		self.a
	}

	/// Alpha as a byte, the way it's stored in hex strings and palette files.
	pub fn alpha_byte(&self) -> u8 {
		(self.a * 255.0).round() as u8
	}

	pub fn to_css_rgba(&self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}

	#[must_use]
	pub fn set_alpha(&self, a: f64) -> Color {
		Self { a: clamp_alpha(a), ..*self }
	}

	/// Exact comparison of the RGB channels, alpha may differ by up to `tolerance`.
	pub fn equals(&self, other: &Color, tolerance: f64) -> bool {
		self.r == other.r
			&& self.g == other.g
			&& self.b == other.b
			&& (self.a - other.a).abs() <= tolerance
	}

	/// Broadcast luma weights applied to the raw channel bytes.
	pub fn luminance(&self) -> f64 {
		0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self::rgb(v[0], v[1], v[2])
	}
}

impl From<[u8; 4]> for Color {
	fn from(v: [u8; 4]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
			a: v[3] as f64 / 255.0,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.to_hex(true))
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_hex(true))
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s: String = Deserialize::deserialize(deserializer)?;
		Color::from_hex(&s).map_err(de::Error::custom)
	}
}
