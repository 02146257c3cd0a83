use std::fs;

use anyhow::{bail, Context, Result};
use pixpal::palettes::Palette;

use crate::commands::ExtractArgs;
use crate::common::write_palette;

pub(crate) fn pal_extract(args: &ExtractArgs) -> Result<()> {
	let pixels = fs::read(&args.input)
		.with_context(|| format!("Couldn't read {}", args.input.display()))?;

	let expected = args.width.checked_mul(args.height)
		.and_then(|n| n.checked_mul(4))
		.context("The image dimensions are too large")?;
	if pixels.len() < expected {
		bail!("{} holds {} bytes, a {}x{} RGBA image needs {expected}", args.input.display(), pixels.len(), args.width, args.height);
	}

	let mut pal = Palette::empty();
	let count = pal.generate_palette_from_image(&pixels, args.width, args.height);
	if count == 0 {
		bail!("The image has no opaque enough pixels");
	}

	if let Some(order) = args.order {
		pal.sort_palette(order);
	}

	pal.name = args.name.clone().unwrap_or_else(|| {
		args.input.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default()
	});

	write_palette(&pal, &args.output)?;

	println!("Extracted {count} colors");
	Ok(())
}
