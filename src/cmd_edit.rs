use anyhow::Result;
use pixpal::palettes::Palette;

use crate::commands::{AddArgs, SortArgs};
use crate::common::{load_palette, parse_color, write_palette};

pub(crate) fn pal_sort(args: &SortArgs) -> Result<()> {
	let mut pal = load_palette(&args.input)?;
	pal.sort_palette(args.order);

	let output = args.output.as_ref().unwrap_or(&args.input);
	write_palette(&pal, output)?;

	println!("Sorted {} colors by {}", pal.len(), args.order);
	Ok(())
}

pub(crate) fn pal_add(args: &AddArgs) -> Result<()> {
	// parse everything first so a typo doesn't leave a half-edited file
	let colors = args.colors.iter().map(|c| parse_color(c)).collect::<Result<Vec<_>>>()?;

	let mut pal = if args.palette.exists() {
		load_palette(&args.palette)?
	} else {
		Palette::default()
	};

	let before = pal.len();
	for color in colors {
		pal.add_color(color);
	}

	write_palette(&pal, &args.palette)?;

	println!("Added {} of {} colors, palette now has {}", pal.len() - before, args.colors.len(), pal.len());
	Ok(())
}
