/*++

Licensed under the Apache-2.0 license.

File Name:

    der.rs

Abstract:

    DER encoding helpers used to build certificates and test vectors.

--*/

use ::der::asn1::{AnyRef, BitString, Null, OctetString, OctetStringRef};
use ::der::{Any, Decode, Encode, Sequence, Tag};
use const_oid::ObjectIdentifier;
use cot_image_types::{oid, HashAlgorithm, SignatureAlgorithm};
use spki::AlgorithmIdentifierOwned;

/// `DigestInfo ::= SEQUENCE { AlgorithmIdentifier, OCTET STRING }`
#[derive(Sequence)]
struct DigestInfo {
    digest_algorithm: AlgorithmIdentifierOwned,
    digest: OctetString,
}

/// `RSASSA-PSS-params` with the trailer field left at its default
#[derive(Sequence)]
struct RsaPssParams {
    #[asn1(context_specific = "0", optional = "true")]
    hash: Option<AlgorithmIdentifierOwned>,

    #[asn1(context_specific = "1", optional = "true")]
    mask_gen: Option<AlgorithmIdentifierOwned>,

    #[asn1(context_specific = "2", optional = "true")]
    salt_len: Option<u32>,
}

/// Wrap already encoded elements in a SEQUENCE
pub fn sequence(items: &[&[u8]]) -> anyhow::Result<Vec<u8>> {
    Ok(Any::new(Tag::Sequence, items.concat())?.to_der()?)
}

pub fn integer_u32(val: u32) -> anyhow::Result<Vec<u8>> {
    Ok(val.to_der()?)
}

pub fn null() -> anyhow::Result<Vec<u8>> {
    Ok(Null.to_der()?)
}

pub fn oid(oid: &ObjectIdentifier) -> anyhow::Result<Vec<u8>> {
    Ok(oid.to_der()?)
}

pub fn octet_string(val: &[u8]) -> anyhow::Result<Vec<u8>> {
    Ok(OctetStringRef::new(val)?.to_der()?)
}

/// Encode a BIT STRING with no unused bits
pub fn bit_string(val: &[u8]) -> anyhow::Result<Vec<u8>> {
    Ok(BitString::from_bytes(val)?.to_der()?)
}

/// Encode an `AlgorithmIdentifier`
///
/// # Arguments
///
/// * `alg`    - Algorithm OID
/// * `params` - Encoded parameters, if any
pub fn algorithm_identifier(
    alg: &ObjectIdentifier,
    params: Option<&[u8]>,
) -> anyhow::Result<Vec<u8>> {
    let alg = AlgorithmIdentifierOwned {
        oid: *alg,
        parameters: params.map(Any::from_der).transpose()?,
    };
    Ok(alg.to_der()?)
}

/// Hash `AlgorithmIdentifier` with NULL parameters
pub fn hash_algorithm(alg: HashAlgorithm) -> AlgorithmIdentifierOwned {
    AlgorithmIdentifierOwned {
        oid: alg.oid(),
        parameters: Some(Any::from(AnyRef::NULL)),
    }
}

/// Encode `RSASSA-PSS-params`
///
/// # Arguments
///
/// * `hash`     - Message digest
/// * `mgf_hash` - Digest used by MGF1
/// * `salt_len` - Salt length in bytes
pub fn rsa_pss_params(
    hash: HashAlgorithm,
    mgf_hash: HashAlgorithm,
    salt_len: u32,
) -> anyhow::Result<Vec<u8>> {
    let mgf = AlgorithmIdentifierOwned {
        oid: oid::MGF1,
        parameters: Some(Any::encode_from(&hash_algorithm(mgf_hash))?),
    };
    let params = RsaPssParams {
        hash: Some(hash_algorithm(hash)),
        mask_gen: Some(mgf),
        salt_len: Some(salt_len),
    };
    Ok(params.to_der()?)
}

/// `AlgorithmIdentifier` a certificate signed with `alg` carries
pub fn signature_algorithm(alg: SignatureAlgorithm) -> anyhow::Result<AlgorithmIdentifierOwned> {
    let parameters = match alg.pss_hash() {
        Some(hash) => {
            let salt_len = u32::try_from(hash.digest_len())?;
            Some(Any::from_der(&rsa_pss_params(hash, hash, salt_len)?)?)
        }
        None => None,
    };
    Ok(AlgorithmIdentifierOwned {
        oid: alg.oid(),
        parameters,
    })
}

/// Encode a `DigestInfo`
pub fn digest_info(alg: HashAlgorithm, digest: &[u8]) -> anyhow::Result<Vec<u8>> {
    let info = DigestInfo {
        digest_algorithm: hash_algorithm(alg),
        digest: OctetString::new(digest)?,
    };
    Ok(info.to_der()?)
}
