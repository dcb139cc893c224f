/*++

Licensed under the Apache-2.0 license.

File Name:

    signature.rs

Abstract:

    Signature authentication method and root-of-trust key check.

--*/

use crate::der::{self, DerReader};
use crate::{cprintln, CryptoProvider, RotpkInfo};
use constant_time_eq::constant_time_eq;
use cot_cfi::{cfi_check_eq, cfi_launder};
use cot_error::{CotError, CotResult};
use cot_image_types::{oid, HashAlgorithm, KeyParams, SignatureAlgorithm, MAX_DIGEST_BYTE_SIZE};

/// Verify a signature over signed data
///
/// # Arguments
///
/// * `crypto` - Crypto provider
/// * `pk`     - DER `SubjectPublicKeyInfo`
/// * `sig`    - DER BIT STRING holding the signature
/// * `alg`    - DER `AlgorithmIdentifier` of the signature
/// * `data`   - Signed data
pub fn verify_signature<C: CryptoProvider>(
    crypto: &C,
    pk: &[u8],
    sig: &[u8],
    alg: &[u8],
    data: &[u8],
) -> CotResult<()> {
    let alg = signature_algorithm(alg)?;
    let key = subject_public_key(pk, alg)?;
    let sig = signature_value(sig)?;

    let valid = crypto.verify_signature(alg, key, data, sig)?;
    if !valid {
        return Err(CotError::METHOD_SIGNATURE_INVALID);
    }
    cfi_check_eq(cfi_launder(valid), true)
}

/// Check a root key against the platform root-of-trust key
///
/// # Arguments
///
/// * `crypto` - Crypto provider
/// * `rotpk`  - Platform root-of-trust key information
/// * `pk`     - DER `SubjectPublicKeyInfo` taken from the root image
pub fn verify_root_key<C: CryptoProvider>(
    crypto: &C,
    rotpk: RotpkInfo<'_>,
    pk: &[u8],
) -> CotResult<()> {
    let matches = match rotpk {
        RotpkInfo::Key(expected) => constant_time_eq(expected, pk),
        RotpkInfo::KeyHash { alg, digest } => {
            let mut actual = [0u8; MAX_DIGEST_BYTE_SIZE];
            let actual = actual
                .get_mut(..alg.digest_len())
                .ok_or(CotError::ALG_UNSUPPORTED_HASH)?;
            crypto.digest(alg, pk, actual)?;
            constant_time_eq(actual, digest)
        }
        RotpkInfo::NotDeployed => {
            cprintln!("[cot] ROTPK not deployed, root key check skipped");
            return Ok(());
        }
    };

    if !matches {
        return Err(CotError::METHOD_ROTPK_MISMATCH);
    }
    cfi_check_eq(cfi_launder(matches), true)
}

fn signature_algorithm(alg: &[u8]) -> CotResult<SignatureAlgorithm> {
    let alg = der::parse_algorithm_identifier(alg).map_err(|_| CotError::PARAM_MALFORMED_ALG_ID)?;
    if alg.oid == oid::RSASSA_PSS {
        let params = alg.params.ok_or(CotError::ALG_UNSUPPORTED_SIGNATURE)?;
        return rsa_pss_algorithm(&params);
    }
    let sig_alg =
        SignatureAlgorithm::from_oid(&alg.oid).ok_or(CotError::ALG_UNSUPPORTED_SIGNATURE)?;
    if alg.params.is_some() {
        return Err(CotError::PARAM_MALFORMED_ALG_ID);
    }
    Ok(sig_alg)
}

/// Decode `RSASSA-PSS-params`
///
/// The hash and the MGF1 hash must be the same SHA-2 digest and the salt
/// as long as that digest. The SHA-1 defaults are not supported.
fn rsa_pss_algorithm(params: &der::DerElement) -> CotResult<SignatureAlgorithm> {
    let malformed = |_| CotError::PARAM_MALFORMED_ALG_ID;
    let unsupported = |_| CotError::ALG_UNSUPPORTED_SIGNATURE;

    if params.tag != der::TAG_SEQUENCE {
        return Err(CotError::PARAM_MALFORMED_ALG_ID);
    }
    let mut fields = DerReader::new(params.content);
    let hash = fields.read(der::tag_context(0)).map_err(unsupported)?;
    let hash = pss_hash(hash.content)?;

    let mgf = fields.read(der::tag_context(1)).map_err(unsupported)?;
    let mgf = der::parse_algorithm_identifier(mgf.content).map_err(malformed)?;
    if mgf.oid != oid::MGF1 {
        return Err(CotError::ALG_UNSUPPORTED_SIGNATURE);
    }
    let mgf_hash = mgf.params.ok_or(CotError::PARAM_MALFORMED_ALG_ID)?;
    if pss_hash(mgf_hash.raw)? != hash {
        return Err(CotError::ALG_UNSUPPORTED_SIGNATURE);
    }

    let salt = fields.read(der::tag_context(2)).map_err(unsupported)?;
    let salt = der::decode_u32(salt.content).map_err(malformed)?;
    if usize::try_from(salt).ok() != Some(hash.digest_len()) {
        return Err(CotError::ALG_UNSUPPORTED_SIGNATURE);
    }

    // DER leaves out the default trailer field
    fields.finish(CotError::PARAM_MALFORMED_ALG_ID)?;
    SignatureAlgorithm::rsa_pss(hash).ok_or(CotError::ALG_UNSUPPORTED_SIGNATURE)
}

/// Hash `AlgorithmIdentifier` with absent or NULL parameters
fn pss_hash(buf: &[u8]) -> CotResult<HashAlgorithm> {
    let alg = der::parse_algorithm_identifier(buf).map_err(|_| CotError::PARAM_MALFORMED_ALG_ID)?;
    if let Some(params) = alg.params {
        if params.tag != der::TAG_NULL || !params.content.is_empty() {
            return Err(CotError::PARAM_MALFORMED_ALG_ID);
        }
    }
    HashAlgorithm::from_oid(&alg.oid).ok_or(CotError::ALG_UNSUPPORTED_SIGNATURE)
}

/// Raw key bytes of a `SubjectPublicKeyInfo` usable with `alg`
fn subject_public_key(spki: &[u8], alg: SignatureAlgorithm) -> CotResult<&[u8]> {
    let malformed = |_| CotError::ALG_MALFORMED_PUB_KEY;

    let mut outer = DerReader::new(spki);
    let seq = outer.read(der::TAG_SEQUENCE).map_err(malformed)?;
    outer.finish(CotError::ALG_MALFORMED_PUB_KEY)?;

    let mut fields = DerReader::new(seq.content);
    let key_alg = fields.read(der::TAG_SEQUENCE).map_err(malformed)?;
    let key = fields.read(der::TAG_BIT_STRING).map_err(malformed)?;
    fields.finish(CotError::ALG_MALFORMED_PUB_KEY)?;

    let key_alg = der::parse_algorithm_identifier(key_alg.raw).map_err(malformed)?;
    if key_alg.oid != alg.key_oid() {
        return Err(
            if [oid::ID_EC_PUBLIC_KEY, oid::ED25519, oid::RSA_ENCRYPTION].contains(&key_alg.oid) {
                CotError::ALG_KEY_SIGNATURE_MISMATCH
            } else {
                CotError::ALG_UNSUPPORTED_KEY
            },
        );
    }

    match (alg.key_params(), key_alg.params) {
        (KeyParams::Curve(curve), Some(params)) => {
            if der::decode_oid(&params) != Some(curve) {
                return Err(CotError::ALG_UNSUPPORTED_KEY);
            }
        }
        (KeyParams::Curve(_), None) => return Err(CotError::ALG_UNSUPPORTED_KEY),
        (KeyParams::Null, Some(params)) => {
            if params.tag != der::TAG_NULL || !params.content.is_empty() {
                return Err(CotError::ALG_MALFORMED_PUB_KEY);
            }
        }
        (KeyParams::Null, None) | (KeyParams::Absent, Some(_)) => {
            return Err(CotError::ALG_MALFORMED_PUB_KEY)
        }
        (KeyParams::Absent, None) => {}
    }

    der::bit_string_bytes(&key).ok_or(CotError::ALG_MALFORMED_PUB_KEY)
}

fn signature_value(sig: &[u8]) -> CotResult<&[u8]> {
    let mut reader = DerReader::new(sig);
    let bits = reader
        .read(der::TAG_BIT_STRING)
        .map_err(|_| CotError::PARAM_MALFORMED_SIGNATURE)?;
    reader.finish(CotError::PARAM_MALFORMED_SIGNATURE)?;
    der::bit_string_bytes(&bits).ok_or(CotError::PARAM_MALFORMED_SIGNATURE)
}
