use std::collections::HashSet;

use tracing::{info, warn};

use crate::color::Color;
use crate::palettes::palette::Palette;

/// Pixels with an alpha byte below this don't contribute a color.
pub const MIN_PIXEL_ALPHA: u8 = 10;

/// Distinct colors of a row-major RGBA8 buffer, in the order they're first seen.
///
/// Only `width * height` pixels are read. A shorter buffer is scanned as far as
/// it goes, a trailing partial pixel is ignored.
pub fn distinct_colors(pixels: &[u8], width: usize, height: usize) -> Vec<Color> {
	let expected = width.saturating_mul(height).saturating_mul(4);
	if pixels.len() < expected {
		warn!("Image buffer holds {} bytes, expected {expected} for {width}x{height}", pixels.len());
	}

	let data = &pixels[..expected.min(pixels.len())];

	let mut seen: HashSet<[u8; 4]> = HashSet::new();
	let mut colors: Vec<Color> = Vec::new();
	for px in data.chunks_exact(4) {
		let key = [px[0], px[1], px[2], px[3]];
		if key[3] < MIN_PIXEL_ALPHA {
			continue;
		}

		if seen.insert(key) {
			colors.push(Color::from(key));
		}
	}

	colors
}

impl Palette {
	/// Replaces the palette with every distinct color of the image and returns
	/// how many there are.
	///
	/// Colors come out in scan order of their first occurrence. That's an
	/// implementation detail, callers that need an order should sort.
	pub fn generate_palette_from_image(&mut self, pixels: &[u8], width: usize, height: usize) -> usize {
		let colors = distinct_colors(pixels, width, height);
		let count = colors.len();

		self.replace_colors(colors);

		info!("Generated palette with {count} colors from image");
		count
	}
}
