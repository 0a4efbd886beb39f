use crate::bkv::bytes::Cursor;
use crate::bkv::{ByteOrder, Result};

/// One bone record from a skeleton stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bone {
	/// Bone name, length-prefixed on the wire (not null-terminated).
	pub name: Box<str>,
	/// Parent bone index.
	pub parent: u8,
	/// Child bone indices.
	pub children: Vec<u8>,
	/// Transform-pool index this bone uses.
	pub transform: u16,
	/// Inverse-transform-pool index this bone uses.
	pub inverse_transform: u16,
}

/// Decode a whole skeleton stream: a bone count, then per bone its name,
/// parent, children, and transform indices. Any short read aborts the pool.
pub fn read_skeleton(bytes: &[u8], order: ByteOrder) -> Result<Vec<Bone>> {
	let mut cursor = Cursor::new(bytes, order);

	let count = cursor.read_u8()?;
	let mut out = Vec::with_capacity(usize::from(count));
	for _ in 0..count {
		let name_len = cursor.read_u16()?;
		let name_bytes = cursor.read_exact(usize::from(name_len))?;
		let name = String::from_utf8_lossy(name_bytes).into_owned().into_boxed_str();

		let parent = cursor.read_u8()?;

		let child_count = cursor.read_u8()?;
		let mut children = Vec::with_capacity(usize::from(child_count));
		for _ in 0..child_count {
			children.push(cursor.read_u8()?);
		}

		let transform = cursor.read_u16()?;
		let inverse_transform = cursor.read_u16()?;

		out.push(Bone {
			name,
			parent,
			children,
			transform,
			inverse_transform,
		});
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::read_skeleton;
	use crate::bkv::{BkvError, ByteOrder};

	fn bone_bytes(name: &str, parent: u8, children: &[u8], transform: u16, inverse: u16) -> Vec<u8> {
		let mut out = Vec::new();
		out.extend_from_slice(&(name.len() as u16).to_le_bytes());
		out.extend_from_slice(name.as_bytes());
		out.push(parent);
		out.push(children.len() as u8);
		out.extend_from_slice(children);
		out.extend_from_slice(&transform.to_le_bytes());
		out.extend_from_slice(&inverse.to_le_bytes());
		out
	}

	#[test]
	fn bones_parse_with_children_and_indices() {
		let mut bytes = vec![2_u8];
		bytes.extend_from_slice(&bone_bytes("root", 0, &[1], 0, 1));
		bytes.extend_from_slice(&bone_bytes("arm", 0, &[], 2, 3));

		let bones = read_skeleton(&bytes, ByteOrder::Little).unwrap();
		assert_eq!(bones.len(), 2);
		assert_eq!(bones[0].name.as_ref(), "root");
		assert_eq!(bones[0].children, vec![1]);
		assert_eq!(bones[1].name.as_ref(), "arm");
		assert_eq!(bones[1].transform, 2);
		assert_eq!(bones[1].inverse_transform, 3);
	}

	#[test]
	fn truncated_bone_aborts_the_pool() {
		let mut bytes = vec![1_u8];
		bytes.extend_from_slice(&bone_bytes("root", 0, &[], 0, 0));
		bytes.truncate(bytes.len() - 1);

		let err = read_skeleton(&bytes, ByteOrder::Little).unwrap_err();
		assert!(matches!(err, BkvError::TruncatedInput { .. }));
	}
}
