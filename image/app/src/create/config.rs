/*++

Licensed under the Apache-2.0 license.

File Name:

   config.rs

Abstract:

    File contains utilities for parsing certificate configuration files

--*/

use anyhow::Context;
use cot_image_types::HashAlgorithm;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum KeyAlgorithm {
    #[default]
    EcdsaP384,
    Ed25519,
    RsaPssSha256,
    RsaPssSha384,
}

/// Signing key
#[derive(Default, Serialize, Deserialize)]
pub(crate) struct KeyConfig {
    pub algorithm: KeyAlgorithm,

    /// Hex P-384 scalar, Ed25519 seed or PKCS#8 RSA private key
    pub private_key: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl From<DigestAlgorithm> for HashAlgorithm {
    fn from(alg: DigestAlgorithm) -> Self {
        match alg {
            DigestAlgorithm::Sha256 => HashAlgorithm::Sha256,
            DigestAlgorithm::Sha384 => HashAlgorithm::Sha384,
            DigestAlgorithm::Sha512 => HashAlgorithm::Sha512,
        }
    }
}

/// Digest of an image file, relative to the configuration file
#[derive(Serialize, Deserialize)]
pub(crate) struct DigestConfig {
    pub algorithm: DigestAlgorithm,
    pub file: PathBuf,
}

/// Certificate extension; exactly one value source is set
#[derive(Default, Serialize, Deserialize)]
pub(crate) struct ExtensionConfig {
    pub oid: String,

    #[serde(default)]
    pub critical: bool,

    /// NV counter value
    pub integer: Option<u32>,

    /// Name of a key whose `SubjectPublicKeyInfo` is embedded
    pub public_key: Option<String>,

    pub digest: Option<DigestConfig>,

    /// Hex DER value
    pub der: Option<String>,
}

#[derive(Default, Serialize, Deserialize)]
pub(crate) struct CertConfig {
    pub subject: String,

    /// Defaults to the subject
    pub issuer: Option<String>,

    pub signing_key: String,

    /// Defaults to the signing key
    pub subject_key: Option<String>,

    /// Hex serial number
    pub serial: Option<String>,

    #[serde(default)]
    pub extensions: Vec<ExtensionConfig>,
}

// Certificate Configuration
#[derive(Default, Serialize, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub keys: BTreeMap<String, KeyConfig>,

    pub cert: CertConfig,
}

/// Load Certificate Configuration from file
pub(crate) fn load_config(path: &Path) -> anyhow::Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read certificate config {}", path.display()))?;

    toml::from_str(&text)
        .with_context(|| format!("Cannot parse certificate config {}", path.display()))
}
