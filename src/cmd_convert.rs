use anyhow::Result;

use crate::commands::ConvertArgs;
use crate::common::{describe_color, parse_color};

pub(crate) fn pal_convert(args: &ConvertArgs) -> Result<()> {
	let color = parse_color(&args.color)?;
	println!("{}", describe_color(&color));
	Ok(())
}
