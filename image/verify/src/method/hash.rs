/*++

Licensed under the Apache-2.0 license.

File Name:

    hash.rs

Abstract:

    Hash authentication method.

--*/

use crate::der::{self, DerReader};
use crate::CryptoProvider;
use constant_time_eq::constant_time_eq;
use cot_cfi::{cfi_check_eq, cfi_launder};
use cot_error::{CotError, CotResult};
use cot_image_types::{HashAlgorithm, MAX_DIGEST_BYTE_SIZE};

/// Split a DER `DigestInfo ::= SEQUENCE { AlgorithmIdentifier, OCTET STRING }`
///
/// The algorithm parameters must be absent or NULL.
pub fn parse_digest_info(buf: &[u8]) -> CotResult<(HashAlgorithm, &[u8])> {
    let malformed = |_| CotError::PARAM_MALFORMED_DIGEST_INFO;

    let mut outer = DerReader::new(buf);
    let seq = outer.read(der::TAG_SEQUENCE).map_err(malformed)?;
    outer.finish(CotError::PARAM_MALFORMED_DIGEST_INFO)?;

    let mut fields = DerReader::new(seq.content);
    let alg = fields.read(der::TAG_SEQUENCE).map_err(malformed)?;
    let digest = fields.read(der::TAG_OCTET_STRING).map_err(malformed)?;
    fields.finish(CotError::PARAM_MALFORMED_DIGEST_INFO)?;

    let alg = der::parse_algorithm_identifier(alg.raw).map_err(malformed)?;
    match alg.params {
        None => {}
        Some(params) if params.tag == der::TAG_NULL && params.content.is_empty() => {}
        Some(_) => return Err(CotError::PARAM_MALFORMED_DIGEST_INFO),
    }
    let hash_alg = HashAlgorithm::from_oid(&alg.oid).ok_or(CotError::ALG_UNSUPPORTED_HASH)?;

    Ok((hash_alg, digest.content))
}

/// Check the digest of `data` against an expected `DigestInfo`
///
/// # Arguments
///
/// * `crypto` - Crypto provider
/// * `data`   - Data to hash
/// * `hash`   - DER `DigestInfo` holding the expected digest
pub fn verify_hash<C: CryptoProvider>(crypto: &C, data: &[u8], hash: &[u8]) -> CotResult<()> {
    let (alg, expected) = parse_digest_info(hash)?;
    if expected.len() != alg.digest_len() {
        return Err(CotError::METHOD_HASH_LENGTH_MISMATCH);
    }

    let mut actual = [0u8; MAX_DIGEST_BYTE_SIZE];
    let actual = actual
        .get_mut(..alg.digest_len())
        .ok_or(CotError::ALG_UNSUPPORTED_HASH)?;
    crypto.digest(alg, data, actual)?;

    let equal = constant_time_eq(actual, expected);
    if !equal {
        return Err(CotError::METHOD_HASH_MISMATCH);
    }
    cfi_check_eq(cfi_launder(equal), true)
}
