use std::path::Path;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use pixpal::color::Color;
use pixpal::palettes::Palette;

/// Two terminal cells filled with the color. Alpha is ignored, terminals can't blend.
pub(crate) fn swatch(c: &Color) -> ColoredString {
	"  ".on_truecolor(c.r(), c.g(), c.b())
}

pub(crate) fn describe_color(c: &Color) -> String {
	let hsv = c.to_hsv();
	format!(
		"{} {}  {}  hsv({:.1}, {:.3}, {:.3})",
		swatch(c), c.to_hex(true), c.to_css_rgba(), hsv.h, hsv.s, hsv.v,
	)
}

pub(crate) fn print_palette(pal: &Palette) {
	println!("{} ({} colors)", pal.name.bold(), pal.len());
	for (i, c) in pal.colors().iter().enumerate() {
		println!("{:>4}: {}", i + 1, describe_color(c));
	}
}

/// Reads a palette file into a fresh palette, so a broken file never costs the defaults.
pub(crate) fn load_palette<P: AsRef<Path>>(path: P) -> Result<Palette> {
	let path = path.as_ref();
	let mut pal = Palette::empty();
	pal.load_from_file(path)
		.with_context(|| format!("Couldn't load palette from {}", path.display()))?;

	Ok(pal)
}

pub(crate) fn write_palette<P: AsRef<Path>>(pal: &Palette, path: P) -> Result<()> {
	let path = path.as_ref();
	pal.save_to_file(path)
		.with_context(|| format!("Couldn't write palette to {}", path.display()))
}

pub(crate) fn parse_color(s: &str) -> Result<Color> {
	Ok(Color::from_hex(s)?)
}
