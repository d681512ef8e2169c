//! Published test vectors (RFC 1321, FIPS 180-4 examples) for every backend
//! in the standard registry.

use hashmatch_verify::{DigestAlgorithm, DigestRegistry};

const TWO_BLOCK: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

fn hex_digest(algorithm: DigestAlgorithm, data: &[u8]) -> String {
    let mut session = DigestRegistry::standard().open(algorithm).unwrap();
    session.update(data).unwrap();
    session.finalize().unwrap().to_hex()
}

#[test]
fn md5_vectors() {
    assert_eq!(hex_digest(DigestAlgorithm::Md5, b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(hex_digest(DigestAlgorithm::Md5, b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
        hex_digest(DigestAlgorithm::Md5, b"message digest"),
        "f96b697d7cb7938d525a2f31aaf161d0"
    );
}

#[test]
fn sha1_vectors() {
    assert_eq!(
        hex_digest(DigestAlgorithm::Sha1, b""),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    assert_eq!(
        hex_digest(DigestAlgorithm::Sha1, b"abc"),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
    assert_eq!(
        hex_digest(DigestAlgorithm::Sha1, TWO_BLOCK),
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );
}

#[test]
fn sha224_vectors() {
    assert_eq!(
        hex_digest(DigestAlgorithm::Sha224, b""),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
    assert_eq!(
        hex_digest(DigestAlgorithm::Sha224, b"abc"),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
}

#[test]
fn sha256_vectors() {
    assert_eq!(
        hex_digest(DigestAlgorithm::Sha256, b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hex_digest(DigestAlgorithm::Sha256, b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        hex_digest(DigestAlgorithm::Sha256, TWO_BLOCK),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn hex_length_is_twice_output_size() {
    for algorithm in DigestAlgorithm::ALL {
        let hex = hex_digest(algorithm, b"length check");
        assert_eq!(hex.len(), algorithm.output_size() * 2, "{algorithm}");
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }
}

#[test]
fn byte_at_a_time_matches_single_update() {
    for algorithm in DigestAlgorithm::ALL {
        let mut session = DigestRegistry::standard().open(algorithm).unwrap();
        for byte in TWO_BLOCK {
            session.update(std::slice::from_ref(byte)).unwrap();
        }
        assert_eq!(session.finalize().unwrap().to_hex(), hex_digest(algorithm, TWO_BLOCK));
    }
}
