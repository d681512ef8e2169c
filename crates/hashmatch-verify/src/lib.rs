//! Incremental digest primitives for hashmatch.
//!
//! Provides the closed set of supported algorithms, a registry that maps
//! each algorithm to a backend, and single-use digest sessions that consume
//! input chunk by chunk.
//!
//! # Key Features
//!
//! - **Incremental**: sessions accept any number of ordered updates and hold
//!   only the algorithm's fixed-size state
//! - **Injected backends**: [`DigestRegistry`] is an explicit value, so tests
//!   and hosts can register their own [`DigestBackend`]s
//! - **Canonical output**: [`Digest::to_hex`] is lowercase and byte-order preserving
//!
//! # Example
//!
//! ```
//! use hashmatch_verify::{DigestAlgorithm, DigestRegistry};
//!
//! let registry = DigestRegistry::standard();
//! let mut session = registry.open(DigestAlgorithm::Sha256).unwrap();
//! session.update(b"ab").unwrap();
//! session.update(b"c").unwrap();
//!
//! let digest = session.finalize().unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub use self::algorithm::DigestAlgorithm;
pub use self::error::{Result, VerifyError};
pub use self::hasher::{DigestHasher, Hasher};
pub use self::output::Digest;
pub use self::reader::HashingReader;
pub use self::registry::{DigestBackend, DigestRegistry, RustCryptoBackend};
pub use self::session::DigestSession;

#[cfg(feature = "md5")]
pub use self::hasher::Md5Hasher;

#[cfg(feature = "sha1")]
pub use self::hasher::Sha1Hasher;

#[cfg(feature = "sha2")]
pub use self::hasher::{Sha224Hasher, Sha256Hasher};

mod algorithm;
mod error;
mod hasher;
mod output;
mod reader;
mod registry;
mod session;
