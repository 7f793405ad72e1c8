//! Deterministic SHA-256 helpers shared by the commitment and transcript
//! layers.
//!
//! The protocol fixes SHA-256 as the only digest function; everything that
//! binds bytes together (Merkle nodes, Fiat-Shamir state, integrity hashes)
//! goes through this module so there is exactly one encoding of a digest:
//! 32 raw bytes internally, lowercase hexadecimal at the proof boundary.

use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// 32-byte digest produced by the canonical hash helpers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash {
    bytes: [u8; DIGEST_SIZE],
}

impl Hash {
    /// Constructs a hash value from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation of the digest.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.bytes
    }

    /// Consumes the hash and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.bytes
    }

    /// Lowercase hexadecimal rendering used at the proof boundary.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(DIGEST_SIZE * 2);
        for byte in self.bytes.iter() {
            use core::fmt::Write;
            let _ = write!(&mut out, "{:02x}", byte);
        }
        out
    }

    /// Parses a lowercase or uppercase 64-character hex digest.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != DIGEST_SIZE * 2 {
            return None;
        }
        let mut bytes = [0u8; DIGEST_SIZE];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let high = (chunk[0] as char).to_digit(16)?;
            let low = (chunk[1] as char).to_digit(16)?;
            bytes[i] = ((high << 4) | low) as u8;
        }
        Some(Self { bytes })
    }
}

impl From<[u8; DIGEST_SIZE]> for Hash {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; DIGEST_SIZE] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Hash::from_hex(&hex).ok_or_else(|| D::Error::custom("invalid 64-character hex digest"))
    }
}

/// Streaming hasher mirroring the `sha2` update/finalize interface.
#[derive(Clone, Default)]
pub struct Hasher {
    state: Sha256,
}

impl Hasher {
    /// Creates a fresh hasher.
    pub fn new() -> Self {
        Self {
            state: Sha256::new(),
        }
    }

    /// Absorbs additional bytes into the hasher state.
    pub fn update(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
    }

    /// Finalises the hasher and returns the digest.
    pub fn finalize(self) -> Hash {
        Hash::from_bytes(self.state.finalize().into())
    }
}

/// Computes the SHA-256 digest of a single payload.
pub fn hash(input: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}
