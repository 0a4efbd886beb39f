use crate::bkv::bytes::Cursor;
use crate::bkv::{ByteOrder, Result};

/// Decode a whole index stream into flat element indices.
///
/// Layout: a width flag (1 means 32-bit values, anything else 16-bit), a
/// width-sized total count, and a signed mode byte. A non-positive mode is
/// a plain list of `count` values. A positive mode is chunked: each chunk
/// starts with a kind byte — 0 introduces a literal run (its own count,
/// then that many values), anything else a consecutive run (start value
/// plus run length, expanded to `start, start+1, ...`) — until at least
/// `count` values have been produced.
pub fn read_index_stream(bytes: &[u8], order: ByteOrder) -> Result<Vec<u32>> {
	let mut cursor = Cursor::new(bytes, order);

	let wide = cursor.read_u8()? == 1;
	let count = read_value(&mut cursor, wide)? as usize;
	let mode = cursor.read_i8()?;

	let mut out = Vec::with_capacity(count);
	if mode <= 0 {
		for _ in 0..count {
			out.push(read_value(&mut cursor, wide)?);
		}
		return Ok(out);
	}

	while out.len() < count {
		let kind = cursor.read_u8()?;
		if kind == 0 {
			let literal = read_value(&mut cursor, wide)? as usize;
			for _ in 0..literal {
				out.push(read_value(&mut cursor, wide)?);
			}
		} else {
			let start = read_value(&mut cursor, wide)?;
			let run = read_value(&mut cursor, wide)?;
			for step in 0..run {
				out.push(start.wrapping_add(step));
			}
		}
	}

	Ok(out)
}

fn read_value(cursor: &mut Cursor<'_>, wide: bool) -> Result<u32> {
	if wide {
		cursor.read_u32()
	} else {
		Ok(u32::from(cursor.read_u16()?))
	}
}
