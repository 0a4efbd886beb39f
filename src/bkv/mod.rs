mod bytes;
mod codec;
mod decode;
mod error;
mod file;
mod header;
mod index;
mod scene;
mod skeleton;
mod strings;
mod table;
mod transform;

/// Byte cursor and per-container field order.
pub use bytes::{ByteOrder, Cursor};
/// Quantized numeric stream codec.
pub use codec::{Quantization, decode_vector};
/// Error and result aliases.
pub use error::{BkvError, Result};
/// Decoded container and aggregate statistics.
pub use file::{Container, ContainerStats};
/// Container header representation.
pub use header::BkvHeader;
/// Index stream reader.
pub use index::read_index_stream;
/// Asset-folder walk and companion naming convention.
pub use scene::{MeshData, SceneFolder, indexed_tables, mesh_tables, vertex_data_tables};
/// Skeleton stream reader.
pub use skeleton::{Bone, read_skeleton};
/// Interned string pool types.
pub use strings::{StringPool, Word, WordId};
/// Table graph value model.
pub use table::{Entry, EntryKey, Table, TableId, Value};
/// Transform pool reader.
pub use transform::{Transform, read_transform_pool};
