#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::PathBuf;

use bkvdoc::bkv::{ByteOrder, MeshData, SceneFolder, mesh_tables, vertex_data_tables};
use common::Encoder;

/// Encode the `desc` container for a one-mesh scene.
///
/// Table pool layout (offsets hand-checked against entry sizes):
///   0: root            { meshes => @12, vertexDatas => @19 }
///  12: meshes array    { [0] => @26 }
///  19: vertexDatas arr { [0] => @67 }
///  26: mesh table      { id, name, vert, nonrendered, material, bfculling, influences }
///  67: vertex table    { id }
fn encode_desc() -> Vec<u8> {
	let mut enc = Encoder::new(ByteOrder::Little);
	let k_meshes = enc.add_word("meshes");
	let k_vertex_datas = enc.add_word("vertexDatas");
	let k_id = enc.add_word("id");
	let k_name = enc.add_word("name");
	let k_vert = enc.add_word("vert");
	let k_nonrendered = enc.add_word("nonrendered");
	let k_material = enc.add_word("material");
	let k_bfculling = enc.add_word("bfculling");
	let k_influences = enc.add_word("influences");
	let w_body = enc.add_word("body");

	enc.begin_table(2);
	enc.named(k_meshes);
	enc.table_value(12);
	enc.named(k_vertex_datas);
	enc.table_value(19);

	let meshes = enc.begin_table(1);
	assert_eq!(meshes, 12);
	enc.indexed(0);
	enc.table_value(26);

	let vertex_datas = enc.begin_table(1);
	assert_eq!(vertex_datas, 19);
	enc.indexed(0);
	enc.table_value(67);

	let mesh = enc.begin_table(7);
	assert_eq!(mesh, 26);
	enc.named(k_id);
	enc.integer_value(3);
	enc.named(k_name);
	enc.string_value(w_body);
	enc.named(k_vert);
	enc.integer_value(5);
	enc.named(k_nonrendered);
	enc.bool_value(false);
	enc.named(k_material);
	enc.integer_value(2);
	enc.named(k_bfculling);
	enc.bool_value(true);
	enc.named(k_influences);
	enc.integer_value(4);

	let vertex = enc.begin_table(1);
	assert_eq!(vertex, 67);
	enc.named(k_id);
	enc.integer_value(5);

	enc.finish()
}

fn encode_transform_pool() -> Vec<u8> {
	let mut out = vec![3_u8]; // short/65535 rotation encoding
	out.extend_from_slice(&1_u16.to_le_bytes());
	for value in [1.0_f32, 2.0, 3.0] {
		out.extend_from_slice(&value.to_le_bytes());
	}
	for value in [65535_u16, 0, 0, 65535] {
		out.extend_from_slice(&value.to_le_bytes());
	}
	out.extend_from_slice(&1.0_f32.to_le_bytes());
	out
}

fn encode_skeleton() -> Vec<u8> {
	let mut out = vec![1_u8];
	out.extend_from_slice(&4_u16.to_le_bytes());
	out.extend_from_slice(b"root");
	out.push(0); // parent
	out.push(0); // no children
	out.extend_from_slice(&0_u16.to_le_bytes());
	out.extend_from_slice(&0_u16.to_le_bytes());
	out
}

fn encode_index_stream() -> Vec<u8> {
	let mut out = vec![0_u8]; // narrow values
	out.extend_from_slice(&3_u16.to_le_bytes());
	out.push(1); // chunked
	out.push(1); // consecutive run
	out.extend_from_slice(&7_u16.to_le_bytes());
	out.extend_from_slice(&3_u16.to_le_bytes());
	out
}

fn encode_vertex_stream() -> Vec<u8> {
	let mut out = Vec::new();
	for value in [0.0_f32, 0.5, 1.0, -1.0, 2.0, -0.25] {
		out.extend_from_slice(&value.to_le_bytes());
	}
	out
}

struct TempFolder(PathBuf);

impl TempFolder {
	fn new(tag: &str) -> Self {
		let path = std::env::temp_dir().join(format!("bkvdoc-{tag}-{}", std::process::id()));
		fs::create_dir_all(&path).expect("temp folder creates");
		Self(path)
	}
}

impl Drop for TempFolder {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.0);
	}
}

#[test]
fn folder_walk_loads_container_and_companions() {
	let folder = TempFolder::new("walk");
	fs::write(folder.0.join("desc"), encode_desc()).expect("desc writes");
	fs::write(folder.0.join("transform"), encode_transform_pool()).expect("transform writes");
	fs::write(folder.0.join("skeleton"), encode_skeleton()).expect("skeleton writes");
	fs::write(folder.0.join("index-3"), encode_index_stream()).expect("index writes");
	fs::write(folder.0.join("vertex-5"), encode_vertex_stream()).expect("vertex writes");

	let scene = SceneFolder::new(&folder.0);
	let container = scene.container().expect("desc decodes");
	let order = container.order();

	let meshes = mesh_tables(&container);
	assert_eq!(meshes.len(), 1);
	let mesh = MeshData::from_table(&container, meshes[0]);
	assert_eq!(mesh.id, 3);
	assert_eq!(mesh.name.as_deref(), Some("body"));
	assert_eq!(mesh.vertex_data_id, 5);
	assert!(mesh.renderable);
	assert!(mesh.back_face_culling);
	assert_eq!(mesh.max_influences, 4);

	let vertex_tables = vertex_data_tables(&container);
	assert_eq!(vertex_tables.len(), 1);
	assert_eq!(container.integer(vertex_tables[0], "id"), Some(5));

	let transforms = scene.transforms(order).expect("transform pool decodes");
	assert_eq!(transforms.len(), 1);
	assert_eq!(transforms[0].translation, [1.0, 2.0, 3.0]);
	assert_eq!(transforms[0].rotation, [1.0, 0.0, 0.0, 1.0]);

	let bones = scene.skeleton(order).expect("skeleton decodes");
	assert_eq!(bones.len(), 1);
	assert_eq!(bones[0].name.as_ref(), "root");

	let indices = scene.index_stream(mesh.id, order).expect("index stream decodes");
	assert_eq!(indices, vec![7, 8, 9]);

	let positions = scene.vertex_positions(mesh.vertex_data_id, order).expect("vertex stream decodes");
	assert_eq!(positions, vec![[0.0, 0.5, 1.0], [-1.0, 2.0, -0.25]]);
}

#[test]
fn companion_failure_leaves_the_container_usable() {
	let folder = TempFolder::new("degrade");
	fs::write(folder.0.join("desc"), encode_desc()).expect("desc writes");
	fs::write(folder.0.join("transform"), [42_u8, 0]).expect("bad transform writes");

	let scene = SceneFolder::new(&folder.0);
	let container = scene.container().expect("desc decodes");
	let order = container.order();

	assert!(scene.transforms(order).is_err(), "malformed transform must fail");
	assert!(scene.skeleton(order).is_err(), "missing skeleton must fail");

	// The container is unaffected by companion failures.
	assert_eq!(mesh_tables(&container).len(), 1);
	assert_eq!(container.stats().table_count, 5);
}
