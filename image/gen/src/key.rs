/*++

Licensed under the Apache-2.0 license.

File Name:

    key.rs

Abstract:

    File contains the signing keys used to generate images.

--*/

use ::der::asn1::BitString;
use ::der::{Any, Decode, Encode};
use anyhow::bail;
use cot_image_types::{oid, HashAlgorithm, SignatureAlgorithm};
use p384::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use rsa::pkcs8::{DecodePrivateKey, EncodePublicKey};
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use sha2::{Sha256, Sha384};
use spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};

enum KeyKind {
    EcdsaP384(p384::ecdsa::SigningKey),
    Ed25519(ed25519_dalek::SigningKey),
    RsaPss(rsa::RsaPrivateKey, HashAlgorithm),
}

/// Private key able to sign certificates
pub struct SigningKey {
    kind: KeyKind,

    /// DER `SubjectPublicKeyInfo`
    spki: Vec<u8>,

    /// Contents of the `subjectPublicKey` BIT STRING
    public_key: Vec<u8>,
}

impl SigningKey {
    /// Create a P-384 key from a big-endian scalar
    pub fn ecdsa_p384(scalar: &[u8]) -> anyhow::Result<Self> {
        let key = p384::ecdsa::SigningKey::from_slice(scalar)?;
        let point = key.verifying_key().as_affine().to_encoded_point(false);
        let alg = AlgorithmIdentifierOwned {
            oid: oid::ID_EC_PUBLIC_KEY,
            parameters: Some(Any::encode_from(&oid::SECP384R1)?),
        };
        Self::with_public_key(KeyKind::EcdsaP384(key), alg, point.as_bytes())
    }

    /// Create an Ed25519 key from its seed
    pub fn ed25519(seed: &[u8; 32]) -> anyhow::Result<Self> {
        let key = ed25519_dalek::SigningKey::from_bytes(seed);
        let public_key = key.verifying_key().to_bytes();
        let alg = AlgorithmIdentifierOwned {
            oid: oid::ED25519,
            parameters: None,
        };
        Self::with_public_key(KeyKind::Ed25519(key), alg, &public_key)
    }

    /// Create an RSASSA-PSS key from a PKCS#8 `PrivateKeyInfo`
    ///
    /// # Arguments
    ///
    /// * `pkcs8` - DER private key
    /// * `hash`  - Digest for the message and MGF1; the salt matches its length
    pub fn rsa_pss(pkcs8: &[u8], hash: HashAlgorithm) -> anyhow::Result<Self> {
        if SignatureAlgorithm::rsa_pss(hash).is_none() {
            bail!("RSASSA-PSS with {hash:?} is not supported");
        }
        let key = rsa::RsaPrivateKey::from_pkcs8_der(pkcs8)?;
        let spki = key.to_public_key().to_public_key_der()?.into_vec();
        let public_key = SubjectPublicKeyInfoOwned::from_der(&spki)?
            .subject_public_key
            .raw_bytes()
            .to_vec();
        Ok(Self {
            kind: KeyKind::RsaPss(key, hash),
            spki,
            public_key,
        })
    }

    fn with_public_key(
        kind: KeyKind,
        algorithm: AlgorithmIdentifierOwned,
        public_key: &[u8],
    ) -> anyhow::Result<Self> {
        let spki = SubjectPublicKeyInfoOwned {
            algorithm,
            subject_public_key: BitString::from_bytes(public_key)?,
        };
        Ok(Self {
            kind,
            spki: spki.to_der()?,
            public_key: public_key.to_vec(),
        })
    }

    /// Signature algorithm of the key
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match &self.kind {
            KeyKind::EcdsaP384(_) => SignatureAlgorithm::EcdsaP384Sha384,
            KeyKind::Ed25519(_) => SignatureAlgorithm::Ed25519,
            KeyKind::RsaPss(_, HashAlgorithm::Sha256) => SignatureAlgorithm::RsaPssSha256,
            KeyKind::RsaPss(..) => SignatureAlgorithm::RsaPssSha384,
        }
    }

    /// Raw public key
    ///
    /// An uncompressed SEC1 point, the Ed25519 key or a PKCS#1 `RSAPublicKey`.
    pub fn public_key(&self) -> Vec<u8> {
        self.public_key.clone()
    }

    /// DER `SubjectPublicKeyInfo` of the public key
    pub fn spki(&self) -> Vec<u8> {
        self.spki.clone()
    }

    /// Sign `data`
    ///
    /// # Returns
    ///
    /// * `Vec<u8>` - DER `ECDSA-Sig-Value`, the 64 byte Ed25519 signature or
    ///   the RSASSA-PSS signature
    pub fn sign(&self, data: &[u8]) -> anyhow::Result<Vec<u8>> {
        let sig = match &self.kind {
            KeyKind::EcdsaP384(key) => {
                use p384::ecdsa::signature::Signer;
                let sig: p384::ecdsa::Signature = key.sign(data);
                sig.to_der().as_bytes().to_vec()
            }
            KeyKind::Ed25519(key) => {
                use ed25519_dalek::Signer;
                key.sign(data).to_bytes().to_vec()
            }
            KeyKind::RsaPss(key, HashAlgorithm::Sha256) => {
                rsa::pss::SigningKey::<Sha256>::new(key.clone())
                    .try_sign_with_rng(&mut OsRng, data)?
                    .to_vec()
            }
            KeyKind::RsaPss(key, _) => rsa::pss::SigningKey::<Sha384>::new(key.clone())
                .try_sign_with_rng(&mut OsRng, data)?
                .to_vec(),
        };
        Ok(sig)
    }
}
