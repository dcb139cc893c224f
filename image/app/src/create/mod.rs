/*++

Licensed under the Apache-2.0 license.

File Name:

   mod.rs

Abstract:

    File contains implementation of the certificate and container creation
    commands.

--*/

mod config;

use anyhow::{anyhow, bail, Context};
use clap::ArgMatches;
use config::{Config, ExtensionConfig, KeyAlgorithm};
use cot_image_crypto::RustCrypto;
use cot_image_gen::{container, der, CertBuilder, Extension, SigningKey};
use cot_image_types::{HashAlgorithm, ObjectIdentifier, MAX_DIGEST_BYTE_SIZE};
use cot_image_verify::CryptoProvider;
use std::path::{Path, PathBuf};

/// Run the certificate creation command
pub(crate) fn run_cert_cmd(args: &ArgMatches) -> anyhow::Result<()> {
    let config_path: &PathBuf = args
        .get_one::<PathBuf>("config")
        .with_context(|| "config arg not specified")?;

    let out_path: &PathBuf = args
        .get_one::<PathBuf>("out")
        .with_context(|| "out arg not specified")?;

    let config = config::load_config(config_path)?;
    let base = config_path.parent().unwrap_or(Path::new("."));
    let cert = build_cert(&config, base)?;

    std::fs::write(out_path, cert)
        .with_context(|| format!("Failed to write {}", out_path.display()))
}

/// Run the container creation command
pub(crate) fn run_container_cmd(args: &ArgMatches) -> anyhow::Result<()> {
    let payload_path: &PathBuf = args
        .get_one::<PathBuf>("payload")
        .with_context(|| "payload arg not specified")?;

    let svn: &u32 = args
        .get_one::<u32>("svn")
        .with_context(|| "svn arg not specified")?;

    let out_path: &PathBuf = args
        .get_one::<PathBuf>("out")
        .with_context(|| "out arg not specified")?;

    let payload = std::fs::read(payload_path)
        .with_context(|| format!("Failed to read {}", payload_path.display()))?;
    let image = container(*svn, &payload)?;

    std::fs::write(out_path, image)
        .with_context(|| format!("Failed to write {}", out_path.display()))
}

fn signing_key(config: &Config, name: &str) -> anyhow::Result<SigningKey> {
    let key = config
        .keys
        .get(name)
        .with_context(|| format!("Key {name} is not defined"))?;
    let private = hex::decode(&key.private_key)
        .with_context(|| format!("Private key of {name} is not valid hex"))?;

    match key.algorithm {
        KeyAlgorithm::EcdsaP384 => SigningKey::ecdsa_p384(&private)
            .with_context(|| format!("Private key of {name} is not a P-384 scalar")),
        KeyAlgorithm::Ed25519 => {
            let seed: [u8; 32] = private
                .as_slice()
                .try_into()
                .map_err(|_| anyhow!("Private key of {name} is not a 32 byte Ed25519 seed"))?;
            SigningKey::ed25519(&seed)
        }
        KeyAlgorithm::RsaPssSha256 => SigningKey::rsa_pss(&private, HashAlgorithm::Sha256)
            .with_context(|| format!("Private key of {name} is not a PKCS#8 RSA key")),
        KeyAlgorithm::RsaPssSha384 => SigningKey::rsa_pss(&private, HashAlgorithm::Sha384)
            .with_context(|| format!("Private key of {name} is not a PKCS#8 RSA key")),
    }
}

/// DER `DigestInfo` of a file
fn file_digest(alg: HashAlgorithm, path: &Path) -> anyhow::Result<Vec<u8>> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut digest = [0u8; MAX_DIGEST_BYTE_SIZE];
    let digest = digest
        .get_mut(..alg.digest_len())
        .context("Digest does not fit")?;
    RustCrypto
        .digest(alg, &data, digest)
        .map_err(|err| anyhow!("Digest failed: 0x{:08X}", u32::from(err)))?;

    der::digest_info(alg, digest)
}

fn extension_value(
    config: &Config,
    ext: &ExtensionConfig,
    base: &Path,
) -> anyhow::Result<Vec<u8>> {
    let mut values = Vec::new();
    if let Some(value) = ext.integer {
        values.push(der::integer_u32(value)?);
    }
    if let Some(name) = &ext.public_key {
        values.push(signing_key(config, name)?.spki());
    }
    if let Some(digest) = &ext.digest {
        values.push(file_digest(
            digest.algorithm.into(),
            &base.join(&digest.file),
        )?);
    }
    if let Some(value) = &ext.der {
        values.push(
            hex::decode(value)
                .with_context(|| format!("Extension {} value is not valid hex", ext.oid))?,
        );
    }

    match <[Vec<u8>; 1]>::try_from(values) {
        Ok([value]) => Ok(value),
        Err(_) => bail!(
            "Extension {} needs exactly one of integer, public_key, digest or der",
            ext.oid
        ),
    }
}

/// Build and sign the configured certificate
///
/// # Arguments
///
/// * `config` - Certificate configuration
/// * `base`   - Directory that relative file names are resolved against
fn build_cert(config: &Config, base: &Path) -> anyhow::Result<Vec<u8>> {
    let cert = &config.cert;
    let issuer_key = signing_key(config, &cert.signing_key)?;
    let subject_pub_key = match &cert.subject_key {
        Some(name) => signing_key(config, name)?.spki(),
        None => issuer_key.spki(),
    };
    let issuer = cert.issuer.as_deref().unwrap_or(&cert.subject);

    let mut builder = CertBuilder::new(
        issuer,
        &cert.subject,
        subject_pub_key,
        issuer_key.algorithm(),
    );
    if let Some(serial) = &cert.serial {
        builder.serial = hex::decode(serial).context("Serial number is not valid hex")?;
    }
    for ext in &cert.extensions {
        let oid = ObjectIdentifier::new(&ext.oid)
            .map_err(|err| anyhow!("Invalid extension OID {}: {err}", ext.oid))?;
        builder.extensions.push(Extension {
            oid,
            critical: ext.critical,
            value: extension_value(config, ext, base)?,
        });
    }

    builder.sign(&issuer_key)
}
