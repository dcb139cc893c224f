/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    File contains the RustCrypto implementation of the crypto primitives
    used to verify Chain of Trust images.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

use cot_error::{CotError, CotResult};
use cot_image_types::{HashAlgorithm, SignatureAlgorithm};
use cot_image_verify::CryptoProvider;
use p384::ecdsa::signature::Verifier;
use rsa::pkcs1::DecodeRsaPublicKey;
use sha2::digest::FixedOutputReset;
use sha2::{Digest, Sha256, Sha384, Sha512};

#[derive(Default, Debug, Copy, Clone)]
pub struct RustCrypto;

fn digest_into<D: Digest>(data: &[u8], out: &mut [u8]) -> CotResult<()> {
    let digest = D::digest(data);
    if out.len() != digest.len() {
        return Err(CotError::ALG_CRYPTO_PRIMITIVE_FAILURE);
    }
    out.copy_from_slice(&digest);
    Ok(())
}

/// Verify RSASSA-PSS with MGF1 over `D` and a salt as long as the digest
///
/// `key` is a PKCS#1 `RSAPublicKey`.
fn verify_rsa_pss<D>(key: &[u8], data: &[u8], sig: &[u8]) -> CotResult<bool>
where
    D: Digest + FixedOutputReset,
{
    let key =
        rsa::RsaPublicKey::from_pkcs1_der(key).map_err(|_| CotError::ALG_MALFORMED_PUB_KEY)?;
    let key = rsa::pss::VerifyingKey::<D>::new(key);
    let Ok(sig) = rsa::pss::Signature::try_from(sig) else {
        return Ok(false);
    };
    Ok(key.verify(data, &sig).is_ok())
}

impl CryptoProvider for RustCrypto {
    fn digest(&self, alg: HashAlgorithm, data: &[u8], out: &mut [u8]) -> CotResult<()> {
        match alg {
            HashAlgorithm::Sha256 => digest_into::<Sha256>(data, out),
            HashAlgorithm::Sha384 => digest_into::<Sha384>(data, out),
            HashAlgorithm::Sha512 => digest_into::<Sha512>(data, out),
        }
    }

    fn verify_signature(
        &self,
        alg: SignatureAlgorithm,
        key: &[u8],
        data: &[u8],
        sig: &[u8],
    ) -> CotResult<bool> {
        match alg {
            SignatureAlgorithm::EcdsaP384Sha384 => {
                let key = p384::ecdsa::VerifyingKey::from_sec1_bytes(key)
                    .map_err(|_| CotError::ALG_MALFORMED_PUB_KEY)?;
                let Ok(sig) = p384::ecdsa::Signature::from_der(sig) else {
                    return Ok(false);
                };
                Ok(key.verify(data, &sig).is_ok())
            }
            SignatureAlgorithm::Ed25519 => {
                let key: &[u8; ed25519_dalek::PUBLIC_KEY_LENGTH] = key
                    .try_into()
                    .map_err(|_| CotError::ALG_MALFORMED_PUB_KEY)?;
                let key = ed25519_dalek::VerifyingKey::from_bytes(key)
                    .map_err(|_| CotError::ALG_MALFORMED_PUB_KEY)?;
                let Ok(sig) = ed25519_dalek::Signature::from_slice(sig) else {
                    return Ok(false);
                };
                Ok(key.verify_strict(data, &sig).is_ok())
            }
            SignatureAlgorithm::RsaPssSha256 => verify_rsa_pss::<Sha256>(key, data, sig),
            SignatureAlgorithm::RsaPssSha384 => verify_rsa_pss::<Sha384>(key, data, sig),
        }
    }
}
