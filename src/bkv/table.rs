use crate::bkv::strings::WordId;

/// Index of one table inside a container's table arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKey {
	Named(WordId),
	Indexed(u16),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
	Boolean(bool),
	Float(f32),
	Byte(u8),
	Short(u16),
	Integer(u32),
	String(WordId),
	Table(TableId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
	pub key: EntryKey,
	pub value: Value,
}

/// One decoded table: an ordered entry list identified by the byte offset
/// at which its encoding begins inside the table pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
	pub offset: u32,
	pub entries: Vec<Entry>,
}

impl Table {
	/// Count of indexed entries; named entries alongside are benign.
	pub fn array_len(&self) -> usize {
		self.entries.iter().filter(|entry| matches!(entry.key, EntryKey::Indexed(_))).count()
	}

	/// First indexed entry whose array position equals `index`.
	pub fn get_indexed(&self, index: u16) -> Option<&Value> {
		self.entries.iter().find_map(|entry| match entry.key {
			EntryKey::Indexed(value) if value == index => Some(&entry.value),
			_ => None,
		})
	}
}
