use std::path::PathBuf;

use bkvdoc::bkv::{Container, EntryKey, Result, TableId, Value};

use crate::cmd::util::{emit_json, value_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Maximum nesting depth rendered before eliding.
	#[arg(long, default_value_t = 8)]
	pub depth: u32,
	#[arg(long)]
	pub json: bool,
}

/// Render the table graph from the root table.
pub fn run(args: Args) -> Result<()> {
	let Args { path, depth, json } = args;

	let container = Container::open(&path)?;
	let Some(root) = container.root() else {
		if json {
			emit_json(&PrintJson {
				path: path.display().to_string(),
				root: serde_json::Value::Null,
			});
		} else {
			println!("path: {}", path.display());
			println!("(no tables)");
		}
		return Ok(());
	};

	if json {
		let payload = PrintJson {
			path: path.display().to_string(),
			root: table_to_json(&container, root, 0, depth),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("{{");
	print_table(&container, root, 1, 0, depth);
	println!("}}");

	Ok(())
}

fn print_table(container: &Container, id: TableId, indent: usize, depth: u32, max_depth: u32) {
	let pad = "\t".repeat(indent);
	for entry in &container.table(id).entries {
		let key = match entry.key {
			EntryKey::Named(word) => format!("'{}'", container.word(word).text),
			EntryKey::Indexed(index) => format!("[{index}]"),
		};

		match entry.value {
			Value::Table(target) => {
				if depth >= max_depth {
					println!("{pad}{key} => {{ ... }},");
					continue;
				}
				println!("{pad}{key} => {{");
				print_table(container, target, indent + 1, depth + 1, max_depth);
				println!("{pad}}},");
			}
			_ => println!("{pad}{key} => {},", value_label(container, &entry.value)),
		}
	}
}

fn table_to_json(container: &Container, id: TableId, depth: u32, max_depth: u32) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	let mut out = Map::new();
	out.insert("offset".to_owned(), serde_json::json!(container.table(id).offset));

	let mut entries = Vec::new();
	for entry in &container.table(id).entries {
		let mut item = Map::new();
		match entry.key {
			EntryKey::Named(word) => {
				item.insert("key".to_owned(), serde_json::json!(container.word(word).text.as_ref()));
			}
			EntryKey::Indexed(index) => {
				item.insert("index".to_owned(), serde_json::json!(index));
			}
		}

		let value = match &entry.value {
			Value::Boolean(v) => serde_json::json!(v),
			Value::Float(v) => serde_json::json!(v),
			Value::Byte(v) => serde_json::json!(v),
			Value::Short(v) => serde_json::json!(v),
			Value::Integer(v) => serde_json::json!(v),
			Value::String(word) => serde_json::json!(container.word(*word).text.as_ref()),
			Value::Table(target) => {
				if depth >= max_depth {
					serde_json::json!({ "elided": true, "offset": container.table(*target).offset })
				} else {
					table_to_json(container, *target, depth + 1, max_depth)
				}
			}
		};
		item.insert("value".to_owned(), value);
		entries.push(JsonValue::Object(item));
	}

	out.insert("entries".to_owned(), JsonValue::Array(entries));
	JsonValue::Object(out)
}

#[derive(serde::Serialize)]
struct PrintJson {
	path: String,
	root: serde_json::Value,
}
