use crate::bkv::bytes::Cursor;
use crate::bkv::codec::{Quantization, decode_element};
use crate::bkv::{BkvError, ByteOrder, Result};

/// One pose record from a transform pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
	/// Translation vector, plain floats.
	pub translation: [f32; 3],
	/// Rotation components, dequantized per the pool's encoding.
	pub rotation: [f32; 4],
	/// Uniform scale, plain float.
	pub scale: f32,
}

/// Decode a whole transform pool stream.
///
/// Layout: one encoding tag byte, a 16-bit record count, then per record
/// three plain floats, four quantized rotation components, one plain float.
/// Only the four normalized byte/short schemes are valid for rotation;
/// plain-float and the raw schemes fail with `UnsupportedEncoding`. Any
/// short read aborts the whole pool.
pub fn read_transform_pool(bytes: &[u8], order: ByteOrder) -> Result<Vec<Transform>> {
	let mut cursor = Cursor::new(bytes, order);

	let tag = cursor.read_u8()?;
	let encoding = Quantization::from_tag(tag).ok_or(BkvError::UnsupportedEncoding { tag })?;
	if !matches!(
		encoding,
		Quantization::Byte | Quantization::SignedByte | Quantization::Short | Quantization::SignedShort
	) {
		return Err(BkvError::UnsupportedEncoding { tag });
	}

	let count = cursor.read_u16()?;
	let mut out = Vec::with_capacity(usize::from(count));
	for _ in 0..count {
		let translation = [cursor.read_f32()?, cursor.read_f32()?, cursor.read_f32()?];

		let mut rotation = [0.0_f32; 4];
		for slot in &mut rotation {
			*slot = decode_element(&mut cursor, encoding)?;
		}

		let scale = cursor.read_f32()?;
		out.push(Transform { translation, rotation, scale });
	}

	Ok(out)
}
