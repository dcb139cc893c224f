/*++

Licensed under the Apache-2.0 license.

File Name:

   alg.rs

Abstract:

    File contains hash and signature algorithm identifiers.

--*/

use const_oid::ObjectIdentifier;

pub const SHA256_DIGEST_BYTE_SIZE: usize = 32;
pub const SHA384_DIGEST_BYTE_SIZE: usize = 48;
pub const SHA512_DIGEST_BYTE_SIZE: usize = 64;
pub const MAX_DIGEST_BYTE_SIZE: usize = SHA512_DIGEST_BYTE_SIZE;

pub mod oid {
    use const_oid::ObjectIdentifier;

    pub const SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.1");
    pub const SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.2");
    pub const SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.3");

    pub const ECDSA_WITH_SHA384: ObjectIdentifier =
        ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.3");
    pub const ID_EC_PUBLIC_KEY: ObjectIdentifier =
        ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
    pub const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
    pub const ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

    pub const RSA_ENCRYPTION: ObjectIdentifier =
        ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
    pub const MGF1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.8");
    pub const RSASSA_PSS: ObjectIdentifier =
        ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10");
}

/// Digest algorithm of a `DigestInfo`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub const fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => SHA256_DIGEST_BYTE_SIZE,
            HashAlgorithm::Sha384 => SHA384_DIGEST_BYTE_SIZE,
            HashAlgorithm::Sha512 => SHA512_DIGEST_BYTE_SIZE,
        }
    }

    pub const fn oid(self) -> ObjectIdentifier {
        match self {
            HashAlgorithm::Sha256 => oid::SHA256,
            HashAlgorithm::Sha384 => oid::SHA384,
            HashAlgorithm::Sha512 => oid::SHA512,
        }
    }

    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        [
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
        ]
        .into_iter()
        .find(|alg| alg.oid() == *oid)
    }
}

/// Signature algorithm of a certificate
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SignatureAlgorithm {
    /// ECDSA over NIST P-384 with SHA-384
    EcdsaP384Sha384,

    /// Ed25519 (pure)
    Ed25519,

    /// RSASSA-PSS with SHA-256, MGF1 with SHA-256 and a 32 byte salt
    RsaPssSha256,

    /// RSASSA-PSS with SHA-384, MGF1 with SHA-384 and a 48 byte salt
    RsaPssSha384,
}

/// Parameters of the `AlgorithmIdentifier` inside a `SubjectPublicKeyInfo`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyParams {
    Absent,
    Null,
    Curve(ObjectIdentifier),
}

impl SignatureAlgorithm {
    /// Signature algorithm object identifier; every RSASSA-PSS variant
    /// shares one and is told apart by its parameters
    pub const fn oid(self) -> ObjectIdentifier {
        match self {
            SignatureAlgorithm::EcdsaP384Sha384 => oid::ECDSA_WITH_SHA384,
            SignatureAlgorithm::Ed25519 => oid::ED25519,
            SignatureAlgorithm::RsaPssSha256 | SignatureAlgorithm::RsaPssSha384 => {
                oid::RSASSA_PSS
            }
        }
    }

    /// Look up an algorithm identified by its object identifier alone
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        [
            SignatureAlgorithm::EcdsaP384Sha384,
            SignatureAlgorithm::Ed25519,
        ]
        .into_iter()
        .find(|alg| alg.oid() == *oid)
    }

    /// RSASSA-PSS using `hash` for the message digest and MGF1
    pub const fn rsa_pss(hash: HashAlgorithm) -> Option<Self> {
        match hash {
            HashAlgorithm::Sha256 => Some(SignatureAlgorithm::RsaPssSha256),
            HashAlgorithm::Sha384 => Some(SignatureAlgorithm::RsaPssSha384),
            HashAlgorithm::Sha512 => None,
        }
    }

    /// Digest of an RSASSA-PSS variant
    pub const fn pss_hash(self) -> Option<HashAlgorithm> {
        match self {
            SignatureAlgorithm::RsaPssSha256 => Some(HashAlgorithm::Sha256),
            SignatureAlgorithm::RsaPssSha384 => Some(HashAlgorithm::Sha384),
            SignatureAlgorithm::EcdsaP384Sha384 | SignatureAlgorithm::Ed25519 => None,
        }
    }

    /// Public key algorithm object identifier this signature algorithm
    /// requires in a `SubjectPublicKeyInfo`
    pub const fn key_oid(self) -> ObjectIdentifier {
        match self {
            SignatureAlgorithm::EcdsaP384Sha384 => oid::ID_EC_PUBLIC_KEY,
            SignatureAlgorithm::Ed25519 => oid::ED25519,
            SignatureAlgorithm::RsaPssSha256 | SignatureAlgorithm::RsaPssSha384 => {
                oid::RSA_ENCRYPTION
            }
        }
    }

    /// Key algorithm parameters this signature algorithm requires
    pub const fn key_params(self) -> KeyParams {
        match self {
            SignatureAlgorithm::EcdsaP384Sha384 => KeyParams::Curve(oid::SECP384R1),
            SignatureAlgorithm::Ed25519 => KeyParams::Absent,
            SignatureAlgorithm::RsaPssSha256 | SignatureAlgorithm::RsaPssSha384 => {
                KeyParams::Null
            }
        }
    }
}
