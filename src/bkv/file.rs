use std::fs;
use std::path::Path;

use crate::bkv::bytes::Cursor;
use crate::bkv::header::BkvHeader;
use crate::bkv::strings::{StringPool, Word, WordId};
use crate::bkv::table::{EntryKey, Table, TableId, Value};
use crate::bkv::{ByteOrder, Result, decode};

/// One fully decoded container: string pool, opaque array pool, table
/// graph, and the byte order everything was read with.
///
/// Built by a single decode call and immutable afterwards. The container
/// is the sole owner of its tables; every nested-table value is an arena
/// index back into it.
#[derive(Debug)]
pub struct Container {
	order: ByteOrder,
	version: u8,
	strings: StringPool,
	arrays: Vec<u8>,
	tables: Vec<Table>,
}

impl Container {
	/// Read and decode a container file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::decode(&raw)
	}

	/// Decode a container from raw bytes.
	///
	/// Sections are decoded in dependency order: the string pool is built
	/// before the table pool because named keys resolve against it during
	/// the structural pass. No partial container is surfaced on failure.
	pub fn decode(bytes: &[u8]) -> Result<Self> {
		let header = BkvHeader::parse(bytes)?;
		let mut cursor = Cursor::new(&bytes[BkvHeader::SIZE..], header.order);

		let string_bytes = read_section(&mut cursor)?;
		let array_bytes = read_section(&mut cursor)?;
		let table_bytes = read_section(&mut cursor)?;

		let refs = decode::scan_word_refs(table_bytes, header.order)?;
		let strings = StringPool::build(string_bytes, &refs);
		let tables = decode::decode_tables(table_bytes, header.order, &strings)?;

		Ok(Self {
			order: header.order,
			version: header.version,
			strings,
			arrays: array_bytes.to_vec(),
			tables,
		})
	}

	/// Byte order detected from the signature.
	pub fn order(&self) -> ByteOrder {
		self.order
	}

	/// Container version byte.
	pub fn version(&self) -> u8 {
		self.version
	}

	/// The interned string pool.
	pub fn strings(&self) -> &StringPool {
		&self.strings
	}

	/// Raw array-pool bytes, retained verbatim.
	///
	/// The format defines the section's length on the wire but this reader
	/// never interprets its contents; it is kept for round-tripping.
	pub fn array_bytes(&self) -> &[u8] {
		&self.arrays
	}

	/// All decoded tables in pool-scan order.
	pub fn tables(&self) -> &[Table] {
		&self.tables
	}

	/// The table at pool offset 0, if the pool decoded any tables.
	pub fn root(&self) -> Option<TableId> {
		if self.tables.is_empty() { None } else { Some(TableId(0)) }
	}

	/// Return a table by arena id.
	pub fn table(&self, id: TableId) -> &Table {
		&self.tables[id.0 as usize]
	}

	/// Return a word by arena id.
	pub fn word(&self, id: WordId) -> &Word {
		self.strings.word(id)
	}

	/// First named entry of `table` whose key text equals `key`.
	///
	/// Absence is not an error; callers needing strict typing match on the
	/// returned [`Value`] directly.
	pub fn get(&self, table: TableId, key: &str) -> Option<&Value> {
		self.table(table).entries.iter().find_map(|entry| match entry.key {
			EntryKey::Named(word) if self.strings.word(word).text.as_ref() == key => Some(&entry.value),
			_ => None,
		})
	}

	/// First indexed entry of `table` at array position `index`.
	pub fn get_indexed(&self, table: TableId, index: u16) -> Option<&Value> {
		self.table(table).get_indexed(index)
	}

	/// Count of indexed entries in `table`.
	pub fn array_len(&self, table: TableId) -> usize {
		self.table(table).array_len()
	}

	/// `get` then string variant, resolved to text; `None` on mismatch.
	pub fn text(&self, table: TableId, key: &str) -> Option<&str> {
		match self.get(table, key)? {
			Value::String(word) => Some(&self.strings.word(*word).text),
			_ => None,
		}
	}

	/// `get` then integer variant; `None` on mismatch.
	pub fn integer(&self, table: TableId, key: &str) -> Option<u32> {
		match self.get(table, key)? {
			Value::Integer(value) => Some(*value),
			_ => None,
		}
	}

	/// `get` then boolean variant; `None` on mismatch.
	pub fn boolean(&self, table: TableId, key: &str) -> Option<bool> {
		match self.get(table, key)? {
			Value::Boolean(value) => Some(*value),
			_ => None,
		}
	}

	/// `get` then nested-table variant; `None` on mismatch.
	pub fn table_ref(&self, table: TableId, key: &str) -> Option<TableId> {
		match self.get(table, key)? {
			Value::Table(id) => Some(*id),
			_ => None,
		}
	}

	/// Tally counts for inspection output.
	pub fn stats(&self) -> ContainerStats {
		let mut stats = ContainerStats {
			word_count: self.strings.len(),
			string_pool_bytes: self.strings.byte_len(),
			array_pool_bytes: self.arrays.len(),
			table_count: self.tables.len(),
			entry_count: 0,
			named_entries: 0,
			indexed_entries: 0,
			table_refs: 0,
		};

		for table in &self.tables {
			stats.entry_count += table.entries.len();
			for entry in &table.entries {
				match entry.key {
					EntryKey::Named(_) => stats.named_entries += 1,
					EntryKey::Indexed(_) => stats.indexed_entries += 1,
				}
				if matches!(entry.value, Value::Table(_)) {
					stats.table_refs += 1;
				}
			}
		}

		stats
	}
}

/// Aggregate counts over one decoded container.
pub struct ContainerStats {
	/// Materialized words in the string pool.
	pub word_count: usize,
	/// Raw string-pool section size.
	pub string_pool_bytes: usize,
	/// Raw array-pool section size.
	pub array_pool_bytes: usize,
	/// Decoded tables.
	pub table_count: usize,
	/// Entries across all tables.
	pub entry_count: usize,
	/// Entries with named keys.
	pub named_entries: usize,
	/// Entries with indexed keys.
	pub indexed_entries: usize,
	/// Entries holding nested-table references.
	pub table_refs: usize,
}

fn read_section<'a>(cursor: &mut Cursor<'a>) -> Result<&'a [u8]> {
	let len = cursor.read_u32()? as usize;
	cursor.read_exact(len)
}
