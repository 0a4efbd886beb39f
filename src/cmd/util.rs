use bkvdoc::bkv::{Container, Value};

/// Serialize a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

/// Render a value's scalar form for one-line output.
pub(crate) fn value_label(container: &Container, value: &Value) -> String {
	match value {
		Value::Boolean(v) => v.to_string(),
		Value::Float(v) => format!("{v:.2}"),
		Value::Byte(v) => v.to_string(),
		Value::Short(v) => v.to_string(),
		Value::Integer(v) => v.to_string(),
		Value::String(word) => format!("\"{}\"", container.word(*word).text),
		Value::Table(id) => format!("table@{}", container.table(*id).offset),
	}
}
