#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "bkvdoc", about = "BKV scene container inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Container statistics.
	Info(cmd::info::Args),
	/// Render the table graph from the root.
	Print(cmd::print::Args),
	/// Dump the interned string pool.
	Words(cmd::words::Args),
	/// Decode a transform pool stream file.
	Transform(cmd::transform::Args),
	/// Walk an asset folder: container plus companion streams.
	Scene(cmd::scene::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> bkvdoc::bkv::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Print(args) => cmd::print::run(args),
		Commands::Words(args) => cmd::words::run(args),
		Commands::Transform(args) => cmd::transform::run(args),
		Commands::Scene(args) => cmd::scene::run(args),
	}
}
