use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use pixpal::palettes::SortOrder;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Inspects, converts and edits pixel art palettes")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints debug diagnostics to stderr.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ConvertArgs {
	#[arg(help = "A hex color: rgb, rrggbb or rrggbbaa, with or without a leading #.")]
	pub color: String,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct DefaultArgs {
	#[arg(short, long, help = "The output file (.gpl or .json). Prints GPL to stdout if omitted.")]
	pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(help = "The palette file (.gpl or .json).")]
	pub input: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SortArgs {
	#[arg(help = "The palette file (.gpl or .json).")]
	pub input: PathBuf,

	#[arg(short = 'O', long, value_enum, help = "The sort order.")]
	pub order: SortOrder,

	#[arg(short, long, help = "The output file. Overwrites the input if omitted.")]
	pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExtractArgs {
	#[arg(short, help = "A raw RGBA8 pixel buffer, row-major.")]
	pub input: PathBuf,

	#[arg(short = 'W', long, help = "The image width in pixels.")]
	pub width: usize,
	#[arg(short = 'H', long, help = "The image height in pixels.")]
	pub height: usize,

	#[arg(short = 'O', long, value_enum, help = "Sorts the extracted colors.")]
	pub order: Option<SortOrder>,

	#[arg(short, long, help = "The palette name written to the output file.")]
	pub name: Option<String>,

	#[arg(help = "The output file (.gpl or .json).")]
	pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct AddArgs {
	#[arg(help = "The palette file (.gpl or .json). Starts from the default palette if it doesn't exist.")]
	pub palette: PathBuf,

	#[arg(required = true, help = "Hex colors to add. Colors already in the palette are skipped.")]
	pub colors: Vec<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Shows a color as hex, CSS and HSV.")]
	Convert(ConvertArgs),

	#[command(about = "Writes the built-in default palette.")]
	Default(DefaultArgs),

	#[command(about = "Lists the colors of a palette file.")]
	Show(ShowArgs),

	#[command(about = "Sorts a palette file.")]
	Sort(SortArgs),

	#[command(about = "Builds a palette from the distinct colors of a raw RGBA image.")]
	Extract(ExtractArgs),

	#[command(about = "Adds colors to a palette file.")]
	Add(AddArgs),
}
