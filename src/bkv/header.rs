use crate::bkv::{BkvError, ByteOrder, Result};

/// Parsed BKV container header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BkvHeader {
	/// Field order detected from the signature.
	pub order: ByteOrder,
	/// Container version byte (only 0 is defined).
	pub version: u8,
}

impl BkvHeader {
	/// Fixed header size: signature, version, reserved byte.
	pub const SIZE: usize = 6;

	/// Parse the container header from the beginning of `bytes`.
	///
	/// The four signature bytes read `$BKV` in the producer's own field
	/// order, so a byte-reversed match means every multi-byte field in the
	/// rest of the container is byte-reversed too.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let header = bytes.get(0..Self::SIZE).ok_or(BkvError::TruncatedInput {
			at: 0,
			need: Self::SIZE,
			rem: bytes.len(),
		})?;

		let signature = &header[0..4];
		let order = if signature == b"$BKV" {
			ByteOrder::Little
		} else if signature == b"VKB$" {
			ByteOrder::Big
		} else {
			return Err(BkvError::BadSignature {
				magic: [header[0], header[1], header[2], header[3]],
			});
		};

		let version = header[4];
		if version != 0 {
			return Err(BkvError::UnsupportedVersion { version });
		}

		// header[5] is reserved; the format defines no meaning for it.

		Ok(Self { order, version })
	}
}
