use anyhow::Result;
use pixpal::palettes::Palette;

use crate::commands::{DefaultArgs, ShowArgs};
use crate::common::{load_palette, print_palette, write_palette};

pub(crate) fn pal_show(args: &ShowArgs) -> Result<()> {
	let pal = load_palette(&args.input)?;
	print_palette(&pal);
	Ok(())
}

pub(crate) fn pal_default(args: &DefaultArgs) -> Result<()> {
	let pal = Palette::default();

	match &args.output {
		Some(output) => write_palette(&pal, output),
		None => {
			print!("{}", pal.save_to_gpl());
			Ok(())
		}
	}
}
