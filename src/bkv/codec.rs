use crate::bkv::bytes::Cursor;
use crate::bkv::{BkvError, ByteOrder, Result};

/// One of the nine numeric stream encodings.
///
/// Each scheme fixes an on-disk element width and a normalization rule. The
/// `Raw*` variants cast to float without normalization; the named divisors
/// divide by the type maximum (127, not 128), so the single representable
/// value at -128/-32768 lands slightly outside -1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantization {
	/// 32-bit IEEE bit pattern, identity.
	Float,
	/// Unsigned byte divided by 255.
	Byte,
	/// Signed byte divided by 127.
	SignedByte,
	/// Unsigned short divided by 65535.
	Short,
	/// Signed short divided by 32767.
	SignedShort,
	/// Unsigned byte cast without normalization.
	RawByte,
	/// Signed byte cast without normalization.
	RawSignedByte,
	/// Unsigned short cast without normalization.
	RawShort,
	/// Signed short cast without normalization.
	RawSignedShort,
}

impl Quantization {
	/// Map a wire tag byte to its scheme; reserved values map to `None`.
	pub fn from_tag(tag: u8) -> Option<Self> {
		match tag {
			0 => Some(Self::Float),
			1 => Some(Self::Byte),
			2 => Some(Self::SignedByte),
			3 => Some(Self::Short),
			4 => Some(Self::SignedShort),
			5 => Some(Self::RawByte),
			6 => Some(Self::RawSignedByte),
			7 => Some(Self::RawShort),
			8 => Some(Self::RawSignedShort),
			_ => None,
		}
	}

	/// Wire tag byte for this scheme.
	pub fn tag(self) -> u8 {
		match self {
			Self::Float => 0,
			Self::Byte => 1,
			Self::SignedByte => 2,
			Self::Short => 3,
			Self::SignedShort => 4,
			Self::RawByte => 5,
			Self::RawSignedByte => 6,
			Self::RawShort => 7,
			Self::RawSignedShort => 8,
		}
	}

	/// On-disk bytes per element.
	pub fn element_width(self) -> usize {
		match self {
			Self::Float => 4,
			Self::Byte | Self::SignedByte | Self::RawByte | Self::RawSignedByte => 1,
			Self::Short | Self::SignedShort | Self::RawShort | Self::RawSignedShort => 2,
		}
	}

	/// Render the scheme as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Float => "float",
			Self::Byte => "byte/255",
			Self::SignedByte => "signed-byte/127",
			Self::Short => "short/65535",
			Self::SignedShort => "signed-short/32767",
			Self::RawByte => "raw-byte",
			Self::RawSignedByte => "raw-signed-byte",
			Self::RawShort => "raw-short",
			Self::RawSignedShort => "raw-signed-short",
		}
	}
}

/// Decode a whole quantized stream into floats.
///
/// `encoding` of `None` means the stream is self-describing: its first byte
/// is consumed as the scheme tag before the payload. Element count is
/// payload length divided by element width; a payload that ends mid-element
/// fails with `TruncatedInput` and no partial output is returned.
pub fn decode_vector(bytes: &[u8], order: ByteOrder, encoding: Option<Quantization>) -> Result<Vec<f32>> {
	let mut cursor = Cursor::new(bytes, order);

	let encoding = match encoding {
		Some(value) => value,
		None => {
			let tag = cursor.read_u8()?;
			Quantization::from_tag(tag).ok_or(BkvError::UnsupportedEncoding { tag })?
		}
	};

	let width = encoding.element_width();
	let payload = cursor.remaining();
	let tail = payload % width;
	if tail != 0 {
		return Err(BkvError::TruncatedInput {
			at: cursor.pos() + payload - tail,
			need: width,
			rem: tail,
		});
	}

	let count = payload / width;
	let mut out = Vec::with_capacity(count);
	for _ in 0..count {
		out.push(decode_element(&mut cursor, encoding)?);
	}

	Ok(out)
}

/// Decode one element of `encoding` from the cursor.
pub(crate) fn decode_element(cursor: &mut Cursor<'_>, encoding: Quantization) -> Result<f32> {
	Ok(match encoding {
		Quantization::Float => cursor.read_f32()?,
		Quantization::Byte => f32::from(cursor.read_u8()?) / 255.0,
		Quantization::SignedByte => f32::from(cursor.read_i8()?) / 127.0,
		Quantization::Short => f32::from(cursor.read_u16()?) / 65535.0,
		Quantization::SignedShort => f32::from(cursor.read_i16()?) / 32767.0,
		Quantization::RawByte => f32::from(cursor.read_u8()?),
		Quantization::RawSignedByte => f32::from(cursor.read_i8()?),
		Quantization::RawShort => f32::from(cursor.read_u16()?),
		Quantization::RawSignedShort => f32::from(cursor.read_i16()?),
	})
}

#[cfg(test)]
mod tests {
	use super::{Quantization, decode_vector};
	use crate::bkv::{BkvError, ByteOrder};

	#[test]
	fn unsigned_schemes_stay_in_unit_range() {
		let out = decode_vector(&[0, 128, 255], ByteOrder::Little, Some(Quantization::Byte)).unwrap();
		assert_eq!(out[0], 0.0);
		assert_eq!(out[2], 1.0);
		assert!(out.iter().all(|v| (0.0..=1.0).contains(v)));

		let bytes = [0x00, 0x00, 0xFF, 0xFF];
		let out = decode_vector(&bytes, ByteOrder::Little, Some(Quantization::Short)).unwrap();
		assert_eq!(out, vec![0.0, 1.0]);
	}

	#[test]
	fn signed_schemes_divide_by_type_maximum() {
		let out = decode_vector(&[127_u8, 129, 128], ByteOrder::Little, Some(Quantization::SignedByte)).unwrap();
		assert_eq!(out[0], 1.0);
		assert_eq!(out[1], -1.0);
		// -128 / 127 falls just outside -1.0; the divisor is 127, not 128.
		assert!(out[2] < -1.0);

		let bytes = 32767_i16.to_le_bytes();
		let out = decode_vector(&bytes, ByteOrder::Little, Some(Quantization::SignedShort)).unwrap();
		assert_eq!(out, vec![1.0]);
	}

	#[test]
	fn raw_schemes_cast_without_normalization() {
		let out = decode_vector(&[200], ByteOrder::Little, Some(Quantization::RawByte)).unwrap();
		assert_eq!(out, vec![200.0]);

		let bytes = (-300_i16).to_be_bytes();
		let out = decode_vector(&bytes, ByteOrder::Big, Some(Quantization::RawSignedShort)).unwrap();
		assert_eq!(out, vec![-300.0]);
	}

	#[test]
	fn float_scheme_reinterprets_bit_pattern_per_order() {
		let mut bytes = Vec::new();
		bytes.extend_from_slice(&2.5_f32.to_bits().to_be_bytes());
		bytes.extend_from_slice(&(-1.0_f32).to_bits().to_be_bytes());

		let out = decode_vector(&bytes, ByteOrder::Big, Some(Quantization::Float)).unwrap();
		assert_eq!(out, vec![2.5, -1.0]);
	}

	#[test]
	fn auto_sentinel_consumes_leading_tag() {
		let bytes = [1_u8, 0, 255];
		let out = decode_vector(&bytes, ByteOrder::Little, None).unwrap();
		assert_eq!(out, vec![0.0, 1.0]);
	}

	#[test]
	fn auto_sentinel_rejects_unknown_tag() {
		let err = decode_vector(&[9_u8, 0, 0], ByteOrder::Little, None).unwrap_err();
		assert!(matches!(err, BkvError::UnsupportedEncoding { tag: 9 }));
	}

	#[test]
	fn stream_ending_mid_element_discards_output() {
		let err = decode_vector(&[0, 0, 0, 0, 0x41], ByteOrder::Little, Some(Quantization::Float)).unwrap_err();
		assert!(matches!(err, BkvError::TruncatedInput { at: 4, need: 4, rem: 1 }));
	}
}
