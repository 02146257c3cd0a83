use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;
use tracing_subscriber::EnvFilter;

use crate::cmd_convert::pal_convert;
use crate::cmd_edit::{pal_add, pal_sort};
use crate::cmd_extract::pal_extract;
use crate::cmd_show::{pal_default, pal_show};
use crate::commands::{Cli, Commands};

mod cmd_convert;
mod cmd_edit;
mod cmd_extract;
mod cmd_show;
mod commands;
mod common;

fn setup_logging(debug: bool) {
	let level = if debug { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.init();
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	setup_logging(cli.debug);

	let output: Option<&PathBuf>;

	let result = match &cli.command {
		Some(Commands::Convert(args)) => {
			output = None;
			pal_convert(args)
		}
		Some(Commands::Default(args)) => {
			output = args.output.as_ref();
			pal_default(args)
		}
		Some(Commands::Show(args)) => {
			output = None;
			pal_show(args)
		}
		Some(Commands::Sort(args)) => {
			output = Some(args.output.as_ref().unwrap_or(&args.input));
			pal_sort(args)
		}
		Some(Commands::Extract(args)) => {
			output = Some(&args.output);
			pal_extract(args)
		}
		Some(Commands::Add(args)) => {
			output = Some(&args.palette);
			pal_add(args)
		}
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => {
			if let Some(output) = output {
				match fs::metadata(output) {
					Ok(m) => {
						let size = humansize::format_size(m.len(), DECIMAL);
						println!("Output file size: {size}");
					}
					Err(err) => {
						eprintln!("Can't determine output file size: {err}");
					}
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
