use std::path::PathBuf;

use bkvdoc::bkv::{Container, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Dump every interned word with its pool offset.
pub fn run(args: Args) -> Result<()> {
	let Args { path } = args;

	let container = Container::open(&path)?;

	println!("path: {}", path.display());
	println!("words: {}", container.strings().len());
	for word in container.strings().words() {
		println!("  {}: \"{}\"", word.offset, word.text);
	}

	Ok(())
}
