use digest::Digest;

/// Minimal incremental hash state.
///
/// Object safe so a registry can hand out boxed backends; `finalize`
/// consumes the box, which makes a hasher single-use by construction.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Adapter from any RustCrypto [`Digest`] to [`Hasher`].
pub struct DigestHasher<D>(D);

impl<D: Digest> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }

    /// One-shot digest of `data`.
    pub fn digest(data: &[u8]) -> Vec<u8> { D::digest(data).to_vec() }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self { Self::new() }
}

impl<D: Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { Digest::update(&mut self.0, data); }
    fn finalize(self: Box<Self>) -> Vec<u8> { Digest::finalize(self.0).to_vec() }
}

#[cfg(feature = "md5")]
pub type Md5Hasher = DigestHasher<md5::Md5>;

#[cfg(feature = "sha1")]
pub type Sha1Hasher = DigestHasher<sha1::Sha1>;

#[cfg(feature = "sha2")]
pub type Sha224Hasher = DigestHasher<sha2::Sha224>;

#[cfg(feature = "sha2")]
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sha2")]
    #[test]
    fn test_sha256_hasher() {
        let mut hasher: Box<dyn Hasher> = Box::new(Sha256Hasher::new());
        hasher.update(b"hello world");
        let hash = hasher.finalize();

        let expected =
            hex::decode("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
                .unwrap();
        assert_eq!(hash, expected);
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_incremental_matches_one_shot() {
        let data: Vec<u8> = (0..10_000).map(|i| (i % 251) as u8).collect();

        let mut hasher: Box<dyn Hasher> = Box::new(Sha224Hasher::new());
        for piece in data.chunks(97) {
            hasher.update(piece);
        }

        assert_eq!(hasher.finalize(), Sha224Hasher::digest(&data));
    }

    #[cfg(feature = "md5")]
    #[test]
    fn test_md5_hasher() {
        assert_eq!(hex::encode(Md5Hasher::digest(b"abc")), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[cfg(feature = "sha1")]
    #[test]
    fn test_sha1_hasher() {
        assert_eq!(
            hex::encode(Sha1Hasher::digest(b"abc")),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }
}
