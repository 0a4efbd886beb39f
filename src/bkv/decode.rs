use std::collections::HashMap;

use crate::bkv::bytes::Cursor;
use crate::bkv::strings::StringPool;
use crate::bkv::table::{Entry, EntryKey, Table, TableId, Value};
use crate::bkv::{BkvError, ByteOrder, Result};

/// Indexed-key marker bit in the 16-bit entry selector.
const INDEXED_BIT: u16 = 0x8000;

/// Structurally scan the table pool for string-pool offsets it references.
///
/// This is the reference half of string discovery: every named-key selector
/// and every string-typed value offset is collected, payloads are skipped
/// without decoding. The walk shares the entry layout with [`decode_tables`]
/// and fails on the same malformed inputs (reserved tags, short reads) so
/// that no reference collected here can come from bytes the structural
/// decode would reject.
pub(crate) fn scan_word_refs(bytes: &[u8], order: ByteOrder) -> Result<Vec<u16>> {
	let mut cursor = Cursor::new(bytes, order);
	let mut refs = Vec::new();

	while cursor.remaining() > 0 {
		let entry_count = cursor.read_u16()?;
		for _ in 0..entry_count {
			let selector = cursor.read_u16()?;
			if selector & INDEXED_BIT == 0 {
				refs.push(selector);
			}

			let at = cursor.pos();
			let tag = cursor.read_u8()?;
			match tag {
				0 | 1 => {}
				2 | 5 => cursor.skip(4)?,
				3 => cursor.skip(1)?,
				4 | 7 => cursor.skip(2)?,
				6 => refs.push(cursor.read_u16()?),
				_ => return Err(BkvError::ReservedType { tag, at }),
			}
		}
	}

	Ok(refs)
}

/// Decode the whole table pool into an arena of resolved tables.
///
/// Pass A walks the pool linearly: each iteration starts a new table at the
/// current offset (there is no index of table positions; tables are an
/// emergent partition of the byte range), reads its entry count, and decodes
/// each entry's key selector, type tag, and payload. Nested-table entries
/// store a placeholder and are recorded for fixup. Pass B resolves every
/// placeholder against the offsets of all tables from pass A; placeholders
/// may point forward in the pool.
pub(crate) fn decode_tables(bytes: &[u8], order: ByteOrder, strings: &StringPool) -> Result<Vec<Table>> {
	let mut cursor = Cursor::new(bytes, order);
	let mut tables: Vec<Table> = Vec::new();
	let mut by_offset: HashMap<u32, TableId> = HashMap::new();
	let mut fixups: Vec<Fixup> = Vec::new();

	while cursor.remaining() > 0 {
		let offset = cursor.pos() as u32;
		let entry_count = cursor.read_u16()?;

		let mut entries = Vec::with_capacity(usize::from(entry_count));
		for _ in 0..entry_count {
			let selector = cursor.read_u16()?;
			let key = if selector & INDEXED_BIT != 0 {
				EntryKey::Indexed(selector & !INDEXED_BIT)
			} else {
				let word = strings
					.lookup(selector)
					.ok_or(BkvError::UnknownStringReference { offset: selector })?;
				EntryKey::Named(word)
			};

			let at = cursor.pos();
			let tag = cursor.read_u8()?;
			let value = match tag {
				0 => Value::Boolean(false),
				1 => Value::Boolean(true),
				2 => Value::Float(cursor.read_f32()?),
				3 => Value::Byte(cursor.read_u8()?),
				4 => Value::Short(cursor.read_u16()?),
				5 => Value::Integer(cursor.read_u32()?),
				6 => {
					let offset = cursor.read_u16()?;
					let word = strings.lookup(offset).ok_or(BkvError::UnknownStringReference { offset })?;
					Value::String(word)
				}
				7 => {
					let target = cursor.read_u16()?;
					fixups.push(Fixup {
						table: tables.len(),
						entry: entries.len(),
						target,
					});
					// Overwritten by the resolution pass below.
					Value::Table(TableId(u32::MAX))
				}
				_ => return Err(BkvError::ReservedType { tag, at }),
			};

			entries.push(Entry { key, value });
		}

		by_offset.insert(offset, TableId(tables.len() as u32));
		tables.push(Table { offset, entries });
	}

	for fixup in fixups {
		let target = by_offset
			.get(&u32::from(fixup.target))
			.copied()
			.ok_or(BkvError::DanglingTableReference { offset: fixup.target })?;
		tables[fixup.table].entries[fixup.entry].value = Value::Table(target);
	}

	Ok(tables)
}

#[derive(Debug, Clone, Copy)]
struct Fixup {
	table: usize,
	entry: usize,
	target: u16,
}
