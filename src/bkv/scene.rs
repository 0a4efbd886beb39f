use std::fs;
use std::path::{Path, PathBuf};

use crate::bkv::codec::{Quantization, decode_vector};
use crate::bkv::file::Container;
use crate::bkv::skeleton::{Bone, read_skeleton};
use crate::bkv::table::{TableId, Value};
use crate::bkv::transform::{Transform, read_transform_pool};
use crate::bkv::{ByteOrder, Result, read_index_stream};

/// Mesh description extracted from one mesh table via the accessor API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshData {
	/// Mesh identifier, used to name the sibling index stream.
	pub id: u32,
	/// Mesh name, when present.
	pub name: Option<Box<str>>,
	/// Identifier of the vertex-data table this mesh references.
	pub vertex_data_id: u32,
	/// Whether the mesh renders (wire key `nonrendered`, inverted).
	pub renderable: bool,
	/// Material identifier.
	pub material: u32,
	/// Whether back faces are culled.
	pub back_face_culling: bool,
	/// Maximum bone influences per vertex.
	pub max_influences: u32,
}

impl MeshData {
	/// Extract mesh fields from `table`, absent keys defaulting like the
	/// accessor API (zero / false).
	pub fn from_table(container: &Container, table: TableId) -> Self {
		Self {
			id: container.integer(table, "id").unwrap_or(0),
			name: container.text(table, "name").map(Box::from),
			vertex_data_id: container.integer(table, "vert").unwrap_or(0),
			renderable: !container.boolean(table, "nonrendered").unwrap_or(false),
			material: container.integer(table, "material").unwrap_or(0),
			back_face_culling: container.boolean(table, "bfculling").unwrap_or(false),
			max_influences: container.integer(table, "influences").unwrap_or(0),
		}
	}
}

/// An asset folder holding one `desc` container and its companion streams.
///
/// The mapping from table identifiers to sibling file names (`transform`,
/// `skeleton`, `index-<id>`, `vertex-<id>`) is an external naming
/// convention, not part of the container format; it lives here and nowhere
/// in the decoder core. Companion files are independently optional: a
/// caller that gets an error from one of them still holds a valid
/// container.
#[derive(Debug, Clone)]
pub struct SceneFolder {
	folder: PathBuf,
}

impl SceneFolder {
	/// Wrap an asset folder path.
	pub fn new(folder: impl Into<PathBuf>) -> Self {
		Self { folder: folder.into() }
	}

	/// The wrapped folder path.
	pub fn path(&self) -> &Path {
		&self.folder
	}

	/// Decode the scene-description container (`desc`).
	pub fn container(&self) -> Result<Container> {
		Container::open(self.folder.join("desc"))
	}

	/// Decode the `transform` companion stream.
	pub fn transforms(&self, order: ByteOrder) -> Result<Vec<Transform>> {
		let raw = fs::read(self.folder.join("transform"))?;
		read_transform_pool(&raw, order)
	}

	/// Decode the `skeleton` companion stream.
	pub fn skeleton(&self, order: ByteOrder) -> Result<Vec<Bone>> {
		let raw = fs::read(self.folder.join("skeleton"))?;
		read_skeleton(&raw, order)
	}

	/// Decode the `index-<id>` companion stream for one mesh.
	pub fn index_stream(&self, id: u32, order: ByteOrder) -> Result<Vec<u32>> {
		let raw = fs::read(self.folder.join(format!("index-{id}")))?;
		read_index_stream(&raw, order)
	}

	/// Decode the `vertex-<id>` companion stream into position triples.
	///
	/// Vertex streams are plain-float vectors; the flat floats group into
	/// x/y/z triples, any trailing partial triple dropped.
	pub fn vertex_positions(&self, id: u32, order: ByteOrder) -> Result<Vec<[f32; 3]>> {
		let raw = fs::read(self.folder.join(format!("vertex-{id}")))?;
		let floats = decode_vector(&raw, order, Some(Quantization::Float))?;
		Ok(floats.chunks_exact(3).map(|chunk| [chunk[0], chunk[1], chunk[2]]).collect())
	}
}

/// Collect the nested tables of an array-style table in index order.
///
/// Positions run `0..array_len`; a position that is missing or holds a
/// non-table value is skipped, matching the tolerant accessor contract.
pub fn indexed_tables(container: &Container, table: TableId) -> Vec<TableId> {
	let len = container.array_len(table);
	let mut out = Vec::with_capacity(len);
	for index in 0..len {
		if let Some(Value::Table(id)) = container.get_indexed(table, index as u16) {
			out.push(*id);
		}
	}
	out
}

/// The mesh tables under the root's `meshes` array, if any.
pub fn mesh_tables(container: &Container) -> Vec<TableId> {
	root_array(container, "meshes")
}

/// The vertex-data tables under the root's `vertexDatas` array, if any.
pub fn vertex_data_tables(container: &Container) -> Vec<TableId> {
	root_array(container, "vertexDatas")
}

fn root_array(container: &Container, key: &str) -> Vec<TableId> {
	let Some(root) = container.root() else {
		return Vec::new();
	};
	let Some(table) = container.table_ref(root, key) else {
		return Vec::new();
	};
	indexed_tables(container, table)
}
