/*++

Licensed under the Apache-2.0 license.

File Name:

    cert.rs

Abstract:

    File contains the X.509v3 certificate builder.

--*/

use crate::{der, SigningKey};
use ::der::asn1::{BitString, OctetString, UtcTime};
use ::der::{Decode, Encode};
use anyhow::bail;
use const_oid::ObjectIdentifier;
use cot_image_types::SignatureAlgorithm;
use spki::SubjectPublicKeyInfoOwned;
use std::str::FromStr;
use std::time::Duration;
use x509_cert::certificate::{Certificate, TbsCertificate, Version};
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::time::{Time, Validity};

/// 2023-01-01 00:00:00 UTC
const NOT_BEFORE: Duration = Duration::from_secs(1_672_531_200);

/// 2049-12-31 23:59:59 UTC
const NOT_AFTER: Duration = Duration::from_secs(2_524_607_999);

/// Certificate extension
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Extension {
    pub oid: ObjectIdentifier,
    pub critical: bool,

    /// Contents of `extnValue`
    pub value: Vec<u8>,
}

/// X.509v3 certificate builder
#[derive(Debug, Clone)]
pub struct CertBuilder {
    pub version: Version,

    /// Big-endian serial number
    pub serial: Vec<u8>,
    pub issuer: String,
    pub subject: String,

    /// DER `SubjectPublicKeyInfo`
    pub subject_pub_key: Vec<u8>,
    pub sig_alg: SignatureAlgorithm,
    pub subject_unique_id: Option<Vec<u8>>,
    pub extensions: Vec<Extension>,
}

impl CertBuilder {
    pub fn new(
        issuer: &str,
        subject: &str,
        subject_pub_key: Vec<u8>,
        sig_alg: SignatureAlgorithm,
    ) -> Self {
        Self {
            version: Version::V3,
            serial: vec![0x01],
            issuer: issuer.into(),
            subject: subject.into(),
            subject_pub_key,
            sig_alg,
            subject_unique_id: None,
            extensions: Vec::new(),
        }
    }

    /// Add a non-critical extension
    pub fn extension(mut self, oid: ObjectIdentifier, value: Vec<u8>) -> Self {
        self.extensions.push(Extension {
            oid,
            critical: false,
            value,
        });
        self
    }

    /// DER `AlgorithmIdentifier` of the signature
    pub fn sig_alg_der(&self) -> anyhow::Result<Vec<u8>> {
        Ok(der::signature_algorithm(self.sig_alg)?.to_der()?)
    }

    fn tbs_certificate(&self) -> anyhow::Result<TbsCertificate> {
        let extensions = self
            .extensions
            .iter()
            .map(|ext| {
                Ok(x509_cert::ext::Extension {
                    extn_id: ext.oid,
                    critical: ext.critical,
                    extn_value: OctetString::new(ext.value.as_slice())?,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let subject_unique_id = match &self.subject_unique_id {
            Some(id) => Some(BitString::from_bytes(id)?),
            None => None,
        };

        Ok(TbsCertificate {
            version: self.version,
            serial_number: SerialNumber::new(&self.serial)?,
            signature: der::signature_algorithm(self.sig_alg)?,
            issuer: Name::from_str(&format!("CN={}", self.issuer))?,
            validity: Validity {
                not_before: Time::UtcTime(UtcTime::from_unix_duration(NOT_BEFORE)?),
                not_after: Time::UtcTime(UtcTime::from_unix_duration(NOT_AFTER)?),
            },
            subject: Name::from_str(&format!("CN={}", self.subject))?,
            subject_public_key_info: SubjectPublicKeyInfoOwned::from_der(&self.subject_pub_key)?,
            issuer_unique_id: None,
            subject_unique_id,
            extensions: (!extensions.is_empty()).then_some(extensions),
        })
    }

    /// DER `TBSCertificate`
    pub fn tbs(&self) -> anyhow::Result<Vec<u8>> {
        Ok(self.tbs_certificate()?.to_der()?)
    }

    /// Sign the certificate
    ///
    /// # Arguments
    ///
    /// * `key` - Issuer key; its algorithm must match `sig_alg`
    ///
    /// # Returns
    ///
    /// * `Vec<u8>` - DER certificate
    pub fn sign(&self, key: &SigningKey) -> anyhow::Result<Vec<u8>> {
        if key.algorithm() != self.sig_alg {
            bail!(
                "Key algorithm {:?} does not match certificate algorithm {:?}",
                key.algorithm(),
                self.sig_alg
            );
        }
        let tbs_certificate = self.tbs_certificate()?;
        let sig = key.sign(&tbs_certificate.to_der()?)?;
        let cert = Certificate {
            signature_algorithm: tbs_certificate.signature.clone(),
            tbs_certificate,
            signature: BitString::from_bytes(&sig)?,
        };
        Ok(cert.to_der()?)
    }

    /// Assemble a certificate from its encoded parts
    pub fn assemble(tbs: &[u8], sig_alg: &[u8], sig: &[u8]) -> anyhow::Result<Vec<u8>> {
        der::sequence(&[tbs, sig_alg, &der::bit_string(sig)?])
    }
}
