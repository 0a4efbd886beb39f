//! Reader for BKV scene-description containers and their companion streams.
//!
//! The entry point is [`bkv::Container`], which decodes one container file
//! (string pool, opaque array pool, table graph). Companion streams
//! (transform pool, skeleton, index and vertex buffers) live in sibling
//! files and are decoded independently through the same byte cursor and
//! quantized-numeric codec.

pub mod bkv;
