use std::path::PathBuf;

use bkvdoc::bkv::{Container, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print high-level container statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let container = Container::open(&path)?;
	let stats = container.stats();

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			byte_order: container.order().as_str(),
			version: container.version(),
			word_count: stats.word_count,
			string_pool_bytes: stats.string_pool_bytes,
			array_pool_bytes: stats.array_pool_bytes,
			table_count: stats.table_count,
			entry_count: stats.entry_count,
			named_entries: stats.named_entries,
			indexed_entries: stats.indexed_entries,
			table_refs: stats.table_refs,
			has_root: container.root().is_some(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("byte_order: {}", container.order().as_str());
	println!("version: {}", container.version());
	println!("word_count: {}", stats.word_count);
	println!("string_pool_bytes: {}", stats.string_pool_bytes);
	println!("array_pool_bytes: {}", stats.array_pool_bytes);
	println!("table_count: {}", stats.table_count);
	println!("entry_count: {}", stats.entry_count);
	println!("named_entries: {}", stats.named_entries);
	println!("indexed_entries: {}", stats.indexed_entries);
	println!("table_refs: {}", stats.table_refs);
	println!("has_root: {}", container.root().is_some());

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	byte_order: &'static str,
	version: u8,
	word_count: usize,
	string_pool_bytes: usize,
	array_pool_bytes: usize,
	table_count: usize,
	entry_count: usize,
	named_entries: usize,
	indexed_entries: usize,
	table_refs: usize,
	has_root: bool,
}
