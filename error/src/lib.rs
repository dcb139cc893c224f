/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains API and macros used by the Chain-of-Trust crates for error
    handling.

--*/
#![cfg_attr(not(feature = "std"), no_std)]
use core::convert::From;
use core::num::{NonZeroU32, TryFromIntError};

/// Chain-of-Trust Error Type
/// Derives debug, copy, clone, eq, and partial eq
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CotError(pub NonZeroU32);

/// Authentication method that rejected an image
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MethodKind {
    Signature,
    Hash,
}

/// Rejection reason reported to the loader
///
/// Every `CotError` maps to exactly one kind through the component field
/// (upper 16 bits) of its code.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// No CoT node exists for the requested identity
    UnknownImage,

    /// Parser integrity check failed
    MalformedImage,

    /// Unsupported format, algorithm, or key encoding
    UnsupportedFormatOrAlgorithm,

    /// A parameter could not be extracted or resolved
    ParameterExtractionFailed,

    /// An authentication method found the image inauthentic
    MethodFailed(MethodKind),

    /// A parent in the chain failed
    UntrustedAncestor,

    /// Stale version, or the anti-rollback gate failed
    RollbackRejected,

    /// Duplicate or missing registrations, or an invalid descriptor table
    ConfigurationError,

    /// Control-flow integrity violation or engine misuse
    Internal,
}

/// Macro to define error constants ensuring uniqueness
///
/// This macro takes a list of (name, value, doc) tuples and generates
/// constant definitions for each error code.
#[macro_export]
macro_rules! define_error_constants {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: CotError = CotError::new_const($value);
        )*

        #[cfg(test)]
        /// Returns a vector of all defined error constants for testing uniqueness
        pub fn all_constants() -> Vec<(&'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

const COMPONENT_CONFIG: u32 = 0x0001;
const COMPONENT_IMAGE_ID: u32 = 0x0002;
const COMPONENT_PARSER: u32 = 0x0003;
const COMPONENT_ALGORITHM: u32 = 0x0004;
const COMPONENT_PARAM: u32 = 0x0005;
const COMPONENT_SIGNATURE: u32 = 0x0006;
const COMPONENT_HASH: u32 = 0x0007;
const COMPONENT_ANCESTOR: u32 = 0x0008;
const COMPONENT_ROLLBACK: u32 = 0x0009;

impl CotError {
    /// Create an error; intended to only be used from const contexts, as we don't want
    /// runtime panics if val is zero. The preferred way to get a CotError from a u32 is to
    /// use `CotError::try_from()` from the `TryFrom` trait impl.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("CotError cannot be 0"),
        }
    }

    /// Component field of the error code
    pub fn component(&self) -> u32 {
        self.0.get() >> 16
    }

    /// Reason kind reported to the loader
    pub fn kind(&self) -> ErrorKind {
        match self.component() {
            COMPONENT_CONFIG => ErrorKind::ConfigurationError,
            COMPONENT_IMAGE_ID => ErrorKind::UnknownImage,
            COMPONENT_PARSER => ErrorKind::MalformedImage,
            COMPONENT_ALGORITHM => ErrorKind::UnsupportedFormatOrAlgorithm,
            COMPONENT_PARAM => ErrorKind::ParameterExtractionFailed,
            COMPONENT_SIGNATURE => ErrorKind::MethodFailed(MethodKind::Signature),
            COMPONENT_HASH => ErrorKind::MethodFailed(MethodKind::Hash),
            COMPONENT_ANCESTOR => ErrorKind::UntrustedAncestor,
            COMPONENT_ROLLBACK => ErrorKind::RollbackRejected,
            _ => ErrorKind::Internal,
        }
    }

    define_error_constants![
        (
            CONFIG_DUPLICATE_PARSER,
            0x0001_0001,
            "A parser is already registered for this format"
        ),
        (
            CONFIG_PARSER_REGISTRY_FULL,
            0x0001_0002,
            "Parser registry has no free entry"
        ),
        (
            CONFIG_PARSER_MISSING,
            0x0001_0003,
            "A CoT node references a format with no registered parser"
        ),
        (
            CONFIG_DUPLICATE_NODE,
            0x0001_0004,
            "Two CoT nodes share the same image identity"
        ),
        (
            CONFIG_IMAGE_ID_OUT_OF_RANGE,
            0x0001_0005,
            "Image identity index does not fit the descriptor table"
        ),
        (
            CONFIG_PARENT_MISSING,
            0x0001_0006,
            "A CoT node names a parent that has no node"
        ),
        (
            CONFIG_COT_CYCLE,
            0x0001_0007,
            "The descriptor table contains a cycle"
        ),
        (
            CONFIG_NO_AUTH_METHODS,
            0x0001_0008,
            "A CoT node declares no authentication method"
        ),
        (
            CONFIG_PARENT_PARAM_ON_ROOT,
            0x0001_0009,
            "A root node consumes a parameter from a parent"
        ),
        (
            CONFIG_PARENT_PARAM_NOT_PUBLISHED,
            0x0001_000A,
            "A node consumes a parent parameter the parent does not publish"
        ),
        (
            CONFIG_IMAGE_KEY_ON_CHILD,
            0x0001_000B,
            "A non-root node takes its signature key from its own image"
        ),
        (
            CONFIG_SLOT_OUT_OF_RANGE,
            0x0001_000C,
            "Published parameter slot is outside the parameter pool"
        ),
        (
            CONFIG_SLOT_TOO_SMALL,
            0x0001_000D,
            "Published parameter is larger than a parameter pool buffer"
        ),
        (
            CONFIG_HASH_NOT_FROM_PARENT,
            0x0001_000E,
            "An expected digest is not taken from the parent"
        ),
        (
            CONFIG_DATA_NOT_FROM_IMAGE,
            0x0001_000F,
            "Authenticated data or signature is not taken from the image itself"
        ),
        (
            CONFIG_DUPLICATE_PUBLISHED_PARAM,
            0x0001_0010,
            "A node publishes the same parameter twice"
        ),
        (
            CONFIG_ROOT_KEY_NOT_FROM_IMAGE,
            0x0001_0011,
            "A root node signature key is not taken from the image"
        ),
        (
            CONFIG_SLOT_SHARED,
            0x0001_0012,
            "Two nodes publish into the same slot while both may be read"
        ),
        (IMAGE_UNKNOWN, 0x0002_0001, "No CoT node for image identity"),
        (PARSER_RAW_EMPTY, 0x0003_0001, "Raw image is empty"),
        (
            PARSER_DER_TRUNCATED,
            0x0003_0002,
            "DER element extends past its container"
        ),
        (PARSER_DER_UNEXPECTED_TAG, 0x0003_0003, "Unexpected DER tag"),
        (
            PARSER_DER_BAD_LENGTH,
            0x0003_0004,
            "Indefinite, oversized, or non-minimal DER length"
        ),
        (
            PARSER_X509_BAD_VERSION,
            0x0003_0005,
            "Certificate is not X.509 version 3"
        ),
        (
            PARSER_X509_SIG_ALG_MISMATCH,
            0x0003_0006,
            "Inner and outer signature algorithms differ"
        ),
        (
            PARSER_X509_DUPLICATE_EXTENSION,
            0x0003_0007,
            "Certificate extension appears twice"
        ),
        (
            PARSER_X509_TRAILING_DATA,
            0x0003_0008,
            "Certificate has bytes after its last element"
        ),
        (
            PARSER_X509_MISSING_EXTENSIONS,
            0x0003_0009,
            "Certificate has no extensions"
        ),
        (
            PARSER_X509_BAD_EXTENSION,
            0x0003_000A,
            "Certificate extension is malformed"
        ),
        (
            PARSER_CONTAINER_TOO_SHORT,
            0x0003_0010,
            "Container is shorter than its header"
        ),
        (
            PARSER_CONTAINER_BAD_MAGIC,
            0x0003_0011,
            "Container magic mismatch"
        ),
        (
            PARSER_CONTAINER_BAD_VERSION,
            0x0003_0012,
            "Unsupported container header version"
        ),
        (
            PARSER_CONTAINER_BAD_CHECKSUM,
            0x0003_0013,
            "Container header checksum mismatch"
        ),
        (
            PARSER_CONTAINER_BAD_PAYLOAD_RANGE,
            0x0003_0014,
            "Container payload lies outside the buffer"
        ),
        (
            PARSER_CONTAINER_TRAILING_DATA,
            0x0003_0015,
            "Container has bytes after its payload"
        ),
        (
            ALG_UNSUPPORTED_SIGNATURE,
            0x0004_0001,
            "Unsupported signature algorithm"
        ),
        (
            ALG_UNSUPPORTED_KEY,
            0x0004_0002,
            "Unsupported public key algorithm or curve"
        ),
        (
            ALG_KEY_SIGNATURE_MISMATCH,
            0x0004_0003,
            "Public key algorithm does not match the signature algorithm"
        ),
        (ALG_UNSUPPORTED_HASH, 0x0004_0004, "Unsupported hash algorithm"),
        (ALG_MALFORMED_PUB_KEY, 0x0004_0005, "Malformed public key"),
        (
            ALG_CRYPTO_PRIMITIVE_FAILURE,
            0x0004_0006,
            "Cryptographic primitive failed"
        ),
        (PARAM_NOT_FOUND, 0x0005_0001, "Parameter not present in image"),
        (
            PARAM_TOO_LARGE,
            0x0005_0002,
            "Parameter exceeds its buffer capacity"
        ),
        (
            PARAM_NOT_PUBLISHED,
            0x0005_0003,
            "Parent has not published the requested parameter"
        ),
        (
            PARAM_SLOT_STALE,
            0x0005_0004,
            "Parameter slot was reused by another node"
        ),
        (
            PARAM_MALFORMED_DIGEST_INFO,
            0x0005_0005,
            "Malformed DigestInfo"
        ),
        (
            PARAM_MALFORMED_NV_COUNTER,
            0x0005_0006,
            "Malformed or out-of-range NV counter"
        ),
        (
            PARAM_MALFORMED_SIGNATURE,
            0x0005_0007,
            "Malformed signature BIT STRING"
        ),
        (
            PARAM_MALFORMED_ALG_ID,
            0x0005_0008,
            "Malformed AlgorithmIdentifier"
        ),
        (
            PARAM_UNSUPPORTED_TYPE,
            0x0005_0009,
            "Parser cannot extract this parameter type"
        ),
        (
            METHOD_SIGNATURE_INVALID,
            0x0006_0001,
            "Signature verification failed"
        ),
        (
            METHOD_ROTPK_MISMATCH,
            0x0006_0002,
            "Root key does not match the platform root-of-trust key"
        ),
        (METHOD_HASH_MISMATCH, 0x0007_0001, "Digest mismatch"),
        (
            METHOD_HASH_LENGTH_MISMATCH,
            0x0007_0002,
            "Expected digest length does not match the algorithm"
        ),
        (
            ANCESTOR_NOT_LOADED,
            0x0008_0001,
            "Unverified ancestor has no loaded image"
        ),
        (
            ROLLBACK_REJECTED,
            0x0009_0001,
            "Image version is older than the NV counter"
        ),
        (
            ROLLBACK_NV_READ_FAILURE,
            0x0009_0002,
            "NV counter read failed"
        ),
        (
            ROLLBACK_NV_WRITE_FAILURE,
            0x0009_0003,
            "NV counter write failed"
        ),
        (
            ROLLBACK_NV_DECREASE,
            0x0009_0004,
            "NV counter cannot be decreased"
        ),
        (
            ROLLBACK_NV_NO_COUNTER,
            0x0009_0005,
            "No NV counter backs this image"
        ),
        (CFI_ASSERT_EQ_FAILURE, 0x000A_0001, "CFI Assert Equal failed"),
        (CFI_ASSERT_NE_FAILURE, 0x000A_0002, "CFI Assert Not Equal failed"),
        (CFI_ASSERT_GE_FAILURE, 0x000A_0003, "CFI Assert Greater Than Equal failed"),
        (
            ENGINE_DEPTH_EXCEEDED,
            0x000A_0004,
            "Ancestor recursion deeper than the descriptor table"
        ),
    ];
}

impl From<core::num::NonZeroU32> for crate::CotError {
    fn from(val: core::num::NonZeroU32) -> Self {
        crate::CotError(val)
    }
}

impl From<CotError> for core::num::NonZeroU32 {
    fn from(val: CotError) -> Self {
        val.0
    }
}

impl From<CotError> for u32 {
    fn from(val: CotError) -> Self {
        core::num::NonZeroU32::from(val).get()
    }
}

impl TryFrom<u32> for CotError {
    type Error = TryFromIntError;
    fn try_from(val: u32) -> Result<Self, TryFromIntError> {
        match NonZeroU32::try_from(val) {
            Ok(val) => Ok(CotError(val)),
            Err(err) => Err(err),
        }
    }
}

pub type CotResult<T> = Result<T, CotError>;
