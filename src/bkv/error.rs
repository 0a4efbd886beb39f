use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BkvError>;

/// Errors produced while reading and decoding BKV data.
#[derive(Debug, Error)]
pub enum BkvError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Leading four bytes matched neither `$BKV` nor its byte-reversed form.
	#[error("no $BKV signature (magic={magic:?})")]
	BadSignature {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Unsupported container version marker.
	#[error("unsupported container version {version} (expected 0)")]
	UnsupportedVersion {
		/// Parsed version byte.
		version: u8,
	},
	/// Not enough bytes remained for a requested read.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedInput {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// String-pool offset with no word materialized at it.
	#[error("no word at string-pool offset {offset}")]
	UnknownStringReference {
		/// Offending string-pool offset.
		offset: u16,
	},
	/// Entry carried one of the two reserved value type tags.
	#[error("reserved value type {tag} at table-pool offset {at}")]
	ReservedType {
		/// Reserved tag value (8 or 9).
		tag: u8,
		/// Table-pool offset of the tag byte.
		at: usize,
	},
	/// Nested-table placeholder matched no decoded table.
	#[error("table reference to unknown table-pool offset {offset}")]
	DanglingTableReference {
		/// Placeholder offset with no table identity.
		offset: u16,
	},
	/// Numeric encoding tag outside the closed scheme set, or a scheme
	/// not permitted in the requesting context.
	#[error("unsupported numeric encoding {tag}")]
	UnsupportedEncoding {
		/// Offending encoding tag byte.
		tag: u8,
	},
}
