use std::fs;
use std::path::PathBuf;

use bkvdoc::bkv::{ByteOrder, Result, read_transform_pool};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Decode multi-byte fields big-endian (the byte order normally comes
	/// from the sibling container's signature).
	#[arg(long)]
	pub big_endian: bool,
}

/// Decode and print one transform pool stream file.
pub fn run(args: Args) -> Result<()> {
	let Args { path, big_endian } = args;

	let order = if big_endian { ByteOrder::Big } else { ByteOrder::Little };
	let raw = fs::read(&path)?;
	let pool = read_transform_pool(&raw, order)?;

	println!("path: {}", path.display());
	println!("records: {}", pool.len());
	for (index, record) in pool.iter().enumerate() {
		println!("transform[{index}]:");
		println!(
			"  translation: {:.2}, {:.2}, {:.2}",
			record.translation[0], record.translation[1], record.translation[2]
		);
		println!(
			"  rotation: {:.4}, {:.4}, {:.4}, {:.4}",
			record.rotation[0], record.rotation[1], record.rotation[2], record.rotation[3]
		);
		println!("  scale: {:.2}", record.scale);
	}

	Ok(())
}
