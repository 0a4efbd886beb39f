use std::path::PathBuf;

use bkvdoc::bkv::{MeshData, Result, SceneFolder, mesh_tables, vertex_data_tables};

#[derive(clap::Args)]
pub struct Args {
	pub folder: PathBuf,
}

/// Walk an asset folder: decode the container, then each companion stream.
///
/// A malformed `desc` aborts the walk; every companion failure is reported
/// and skipped, leaving the rest of the walk intact.
pub fn run(args: Args) -> Result<()> {
	let Args { folder } = args;

	let scene = SceneFolder::new(&folder);
	let container = scene.container()?;
	let order = container.order();
	let stats = container.stats();

	println!("folder: {}", folder.display());
	println!("byte_order: {}", order.as_str());
	println!("tables: {}", stats.table_count);
	println!("words: {}", stats.word_count);

	match scene.transforms(order) {
		Ok(pool) => println!("transforms: {}", pool.len()),
		Err(err) => eprintln!("skipping transform: {err}"),
	}

	match scene.skeleton(order) {
		Ok(bones) => {
			println!("bones: {}", bones.len());
			for (index, bone) in bones.iter().enumerate() {
				println!("  bone[{index}]: {} (parent {})", bone.name, bone.parent);
			}
		}
		Err(err) => eprintln!("skipping skeleton: {err}"),
	}

	let vertex_tables = vertex_data_tables(&container);
	println!("vertex_datas: {}", vertex_tables.len());
	for table in vertex_tables {
		let id = container.integer(table, "id").unwrap_or(0);
		match scene.vertex_positions(id, order) {
			Ok(positions) => println!("  vertex-{id}: {} positions", positions.len()),
			Err(err) => eprintln!("skipping vertex-{id}: {err}"),
		}
	}

	let meshes = mesh_tables(&container);
	println!("meshes: {}", meshes.len());
	for table in meshes {
		let mesh = MeshData::from_table(&container, table);
		let name = mesh.name.as_deref().unwrap_or("-");
		println!(
			"  mesh {} \"{}\": vert={} renderable={} material={} influences={}",
			mesh.id, name, mesh.vertex_data_id, mesh.renderable, mesh.material, mesh.max_influences
		);

		if !mesh.renderable {
			continue;
		}
		match scene.index_stream(mesh.id, order) {
			Ok(indices) => println!("    index-{}: {} indices", mesh.id, indices.len()),
			Err(err) => eprintln!("skipping index-{}: {err}", mesh.id),
		}
	}

	Ok(())
}
