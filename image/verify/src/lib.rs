/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    Chain-of-Trust image verification library.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

pub mod der;
mod engine;
pub mod method;
pub mod parser;
mod pool;
pub mod printer;
mod rollback;
mod state;

use cot_error::CotResult;
use cot_image_types::{AuthParamTypeDesc, HashAlgorithm, ImageId, SignatureAlgorithm};

pub use engine::{AuthModule, Rejection};
pub use parser::{ImageParser, ParserRegistry};
pub use pool::ParamPool;
pub use rollback::{AntiRollbackGate, RollbackDecision};
pub use state::AuthState;

/// Cryptographic primitives
pub trait CryptoProvider {
    /// Calculate a digest of `data`
    ///
    /// `out` is exactly the digest length of `alg`.
    fn digest(&self, alg: HashAlgorithm, data: &[u8], out: &mut [u8]) -> CotResult<()>;

    /// Verify a signature
    ///
    /// # Arguments
    ///
    /// * `alg`  - Signature algorithm
    /// * `key`  - Raw public key (SEC1 point or Ed25519 key)
    /// * `data` - Signed data
    /// * `sig`  - Algorithm specific signature encoding
    ///
    /// # Returns
    ///
    /// * `bool` - `false` when the signature does not match. Errors are
    ///   reserved for keys or algorithms the provider cannot handle.
    fn verify_signature(
        &self,
        alg: SignatureAlgorithm,
        key: &[u8],
        data: &[u8],
        sig: &[u8],
    ) -> CotResult<bool>;
}

/// Root-of-trust public key as provisioned on the platform
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RotpkInfo<'a> {
    /// DER `SubjectPublicKeyInfo` of the key
    Key(&'a [u8]),

    /// Digest of the DER `SubjectPublicKeyInfo`
    KeyHash {
        alg: HashAlgorithm,
        digest: &'a [u8],
    },

    /// No key provisioned; development parts only
    NotDeployed,
}

/// Platform Environment
pub trait PlatformEnv<Id: ImageId> {
    /// Get the root-of-trust key anchoring root images whose key parameter
    /// is `key_desc`
    fn rotpk(&self, key_desc: &AuthParamTypeDesc) -> CotResult<RotpkInfo<'_>>;

    /// Accept an image even though its counter cannot be read
    fn rollback_exempt(&self, _id: Id) -> bool {
        false
    }
}

/// Non-volatile counter storage
pub trait NvCounterStorage<Id: ImageId> {
    /// Read the counter of an image
    fn read(&self, id: Id) -> CotResult<u32>;

    /// Write the counter of an image
    fn write(&mut self, id: Id, value: u32) -> CotResult<()>;
}

/// Source of images already resident in memory
pub trait ImageLoader<Id: ImageId> {
    /// Get the loaded image of `id`, if any
    fn image(&self, id: Id) -> Option<&[u8]>;
}
