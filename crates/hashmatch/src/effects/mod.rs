//! I/O operations: byte source adapters and the hash computation service.
//!
//! Reading a chunk is the only operation here that blocks or suspends;
//! session updates and finalization are CPU-bound.

mod async_source;
mod service;
mod source;
mod window;

pub use async_source::AsyncFileSource;
pub use service::HashService;
pub use source::{ByteSource, FileSource, TextSource};
