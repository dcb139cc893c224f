// Licensed under the Apache-2.0 license

//! Signed trusted board boot image set and platform doubles shared by the
//! chain tests.

#![allow(dead_code)]

use cot_error::{CotError, CotResult};
use cot_image_crypto::RustCrypto;
use cot_image_fake_keys::*;
use cot_image_gen::{container, der, CertBuilder, SigningKey};
use cot_image_types::{
    AuthParamTypeDesc, HashAlgorithm, ImageId, ObjectIdentifier, SignatureAlgorithm,
    MAX_DIGEST_BYTE_SIZE,
};
use cot_image_verify::{
    CryptoProvider, ImageLoader, NvCounterStorage, PlatformEnv, Rejection, RotpkInfo,
};
use cot_tbbr::{
    oid, tbbr_auth_module, TbbrAuthModule, TbbrCotTable, TbbrImageId, TbbrImageId::*,
    TbbrNvCounter, PROT_PK, TBBR_IMAGE_COUNT,
};
use std::cell::Cell;

pub const BL2: &[u8] = b"trusted boot firmware";
pub const BL31: &[u8] = b"el3 runtime firmware";
pub const SOC_FW_CONFIG: &[u8] = b"soc firmware configuration";
pub const BL32: &[u8] = b"secure payload";
pub const BL33: &[u8] = b"non-trusted bootloader";

pub type Module<'a> = TbbrAuthModule<'a, CountingCrypto, Env, Counters>;

/// Loaded images, indexed like the descriptor table
#[derive(Default)]
pub struct Chain {
    images: [Option<Vec<u8>>; TBBR_IMAGE_COUNT],
}

impl Chain {
    pub fn get(&self, id: TbbrImageId) -> &[u8] {
        self.images[id.index()]
            .as_deref()
            .expect("image not loaded")
    }

    pub fn set(&mut self, id: TbbrImageId, buf: Vec<u8>) {
        self.images[id.index()] = Some(buf);
    }

    pub fn remove(&mut self, id: TbbrImageId) {
        self.images[id.index()] = None;
    }

    pub fn get_mut(&mut self, id: TbbrImageId) -> &mut Vec<u8> {
        self.images[id.index()]
            .as_mut()
            .expect("image not loaded")
    }

    /// Flip the low bit of the last byte, which lands in the signature of
    /// a certificate
    pub fn flip_last(&mut self, id: TbbrImageId) {
        if let Some(byte) = self.get_mut(id).last_mut() {
            *byte ^= 1;
        }
    }

    /// Overwrite the first occurrence of `needle`
    pub fn patch(&mut self, id: TbbrImageId, needle: &[u8], replacement: &[u8]) {
        let buf = self.get_mut(id);
        let pos = buf
            .windows(needle.len())
            .position(|w| w == needle)
            .expect("needle not found");
        buf[pos..pos + replacement.len()].copy_from_slice(replacement);
    }
}

impl ImageLoader<TbbrImageId> for Chain {
    fn image(&self, id: TbbrImageId) -> Option<&[u8]> {
        self.images.get(id.index())?.as_deref()
    }
}

pub fn ecc(scalar: &[u8]) -> SigningKey {
    SigningKey::ecdsa_p384(scalar).unwrap()
}

/// DER `DigestInfo` of `data`
pub fn digest_info(alg: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    let mut digest = [0u8; MAX_DIGEST_BYTE_SIZE];
    let digest = &mut digest[..alg.digest_len()];
    RustCrypto.digest(alg, data, digest).unwrap();
    der::digest_info(alg, digest).unwrap()
}

/// Keys and versions of a generated image set
pub struct Fixture {
    pub rot: SigningKey,
    pub prot: SigningKey,
    pub trusted_world: SigningKey,
    pub soc_content: SigningKey,
    pub tos_content: SigningKey,
    pub trusted_nv: u32,
    pub non_trusted_nv: u32,
    pub tos_svn: u32,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            rot: ecc(&ROOT_ECC_KEY_PRIVATE),
            prot: ecc(&PLATFORM_ROOT_ECC_KEY_PRIVATE),
            trusted_world: ecc(&TRUSTED_WORLD_ECC_KEY_PRIVATE),
            soc_content: ecc(&SOC_FW_CONTENT_ECC_KEY_PRIVATE),
            tos_content: ecc(&TRUSTED_OS_CONTENT_ECC_KEY_PRIVATE),
            trusted_nv: 1,
            non_trusted_nv: 1,
            tos_svn: 1,
        }
    }
}

impl Fixture {
    fn cert(
        issuer: &SigningKey,
        name: &str,
        extensions: Vec<(ObjectIdentifier, Vec<u8>)>,
    ) -> Vec<u8> {
        let mut builder = CertBuilder::new(name, name, issuer.spki(), issuer.algorithm());
        for (oid, value) in extensions {
            builder = builder.extension(oid, value);
        }
        builder.sign(issuer).unwrap()
    }

    /// Generate every image of the chain
    pub fn build(&self) -> Chain {
        let trusted_nv = || (oid::TRUSTED_FW_NVCOUNTER, der::integer_u32(self.trusted_nv).unwrap());
        let bl32 = container(self.tos_svn, BL32).unwrap();
        let mut chain = Chain::default();

        chain.set(
            TrustedBootFwCert,
            Self::cert(
                &self.rot,
                "Trusted Boot FW Certificate",
                vec![
                    trusted_nv(),
                    (oid::TRUSTED_BOOT_FW_HASH, digest_info(HashAlgorithm::Sha256, BL2)),
                ],
            ),
        );
        chain.set(Bl2Image, BL2.to_vec());

        chain.set(
            TrustedKeyCert,
            Self::cert(
                &self.rot,
                "Trusted Key Certificate",
                vec![trusted_nv(), (oid::TRUSTED_WORLD_PK, self.trusted_world.spki())],
            ),
        );

        chain.set(
            SocFwKeyCert,
            Self::cert(
                &self.trusted_world,
                "SoC Firmware Key Certificate",
                vec![trusted_nv(), (oid::SOC_FW_CONTENT_CERT_PK, self.soc_content.spki())],
            ),
        );
        chain.set(
            SocFwContentCert,
            Self::cert(
                &self.soc_content,
                "SoC Firmware Content Certificate",
                vec![
                    trusted_nv(),
                    (oid::SOC_AP_FW_HASH, digest_info(HashAlgorithm::Sha384, BL31)),
                    (
                        oid::SOC_FW_CONFIG_HASH,
                        digest_info(HashAlgorithm::Sha512, SOC_FW_CONFIG),
                    ),
                ],
            ),
        );
        chain.set(Bl31Image, BL31.to_vec());
        chain.set(SocFwConfig, SOC_FW_CONFIG.to_vec());

        chain.set(
            TrustedOsFwKeyCert,
            Self::cert(
                &self.trusted_world,
                "Trusted OS Firmware Key Certificate",
                vec![
                    trusted_nv(),
                    (oid::TRUSTED_OS_FW_CONTENT_CERT_PK, self.tos_content.spki()),
                ],
            ),
        );
        chain.set(
            TrustedOsFwContentCert,
            Self::cert(
                &self.tos_content,
                "Trusted OS Firmware Content Certificate",
                vec![
                    trusted_nv(),
                    (oid::TRUSTED_OS_FW_HASH, digest_info(HashAlgorithm::Sha384, &bl32)),
                ],
            ),
        );
        chain.set(Bl32Image, bl32);

        chain.set(
            NonTrustedFwContentCert,
            Self::cert(
                &self.prot,
                "Non-Trusted Firmware Content Certificate",
                vec![
                    (
                        oid::NON_TRUSTED_FW_NVCOUNTER,
                        der::integer_u32(self.non_trusted_nv).unwrap(),
                    ),
                    (oid::PROT_PK, self.prot.spki()),
                    (
                        oid::NON_TRUSTED_WORLD_BOOTLOADER_HASH,
                        digest_info(HashAlgorithm::Sha256, BL33),
                    ),
                ],
            ),
        );
        chain.set(Bl33Image, BL33.to_vec());

        chain
    }
}

/// Provisioned root key
pub enum RootKey {
    Key(Vec<u8>),
    KeyHash(HashAlgorithm, Vec<u8>),
    NotDeployed,
}

impl RootKey {
    fn info(&self) -> RotpkInfo<'_> {
        match self {
            RootKey::Key(key) => RotpkInfo::Key(key),
            RootKey::KeyHash(alg, digest) => RotpkInfo::KeyHash {
                alg: *alg,
                digest,
            },
            RootKey::NotDeployed => RotpkInfo::NotDeployed,
        }
    }
}

pub struct Env {
    pub rotpk: RootKey,
    pub prot_pk: RootKey,
    pub exempt: Vec<TbbrImageId>,
}

impl Env {
    /// Root keys provisioned for the keys of `fixture`
    pub fn new(fixture: &Fixture) -> Self {
        Self {
            rotpk: RootKey::Key(fixture.rot.spki()),
            prot_pk: RootKey::Key(fixture.prot.spki()),
            exempt: Vec::new(),
        }
    }
}

impl PlatformEnv<TbbrImageId> for Env {
    fn rotpk(&self, type_desc: &AuthParamTypeDesc) -> CotResult<RotpkInfo<'_>> {
        if *type_desc == PROT_PK {
            Ok(self.prot_pk.info())
        } else {
            Ok(self.rotpk.info())
        }
    }

    fn rollback_exempt(&self, id: TbbrImageId) -> bool {
        self.exempt.contains(&id)
    }
}

/// NV counters backing the trusted board boot images
#[derive(Debug, Default)]
pub struct Counters {
    pub values: [Option<u32>; 3],
    pub writes: usize,
    pub fail_writes: bool,
}

impl Counters {
    pub fn new(value: u32) -> Self {
        Self {
            values: [Some(value); 3],
            ..Default::default()
        }
    }

    pub fn get(&self, counter: TbbrNvCounter) -> Option<u32> {
        self.values[counter as usize]
    }

    pub fn set(&mut self, counter: TbbrNvCounter, value: Option<u32>) {
        self.values[counter as usize] = value;
    }
}

impl NvCounterStorage<TbbrImageId> for Counters {
    fn read(&self, id: TbbrImageId) -> CotResult<u32> {
        let counter = id.nv_counter().ok_or(CotError::ROLLBACK_NV_NO_COUNTER)?;
        self.get(counter).ok_or(CotError::ROLLBACK_NV_READ_FAILURE)
    }

    fn write(&mut self, id: TbbrImageId, value: u32) -> CotResult<()> {
        let counter = id.nv_counter().ok_or(CotError::ROLLBACK_NV_NO_COUNTER)?;
        if self.fail_writes {
            return Err(CotError::ROLLBACK_NV_WRITE_FAILURE);
        }
        self.writes += 1;
        self.set(counter, Some(value));
        Ok(())
    }
}

/// RustCrypto behind call counters
#[derive(Default)]
pub struct CountingCrypto {
    pub digests: Cell<usize>,
    pub signatures: Cell<usize>,
}

impl CryptoProvider for CountingCrypto {
    fn digest(&self, alg: HashAlgorithm, data: &[u8], out: &mut [u8]) -> CotResult<()> {
        self.digests.set(self.digests.get() + 1);
        RustCrypto.digest(alg, data, out)
    }

    fn verify_signature(
        &self,
        alg: SignatureAlgorithm,
        key: &[u8],
        data: &[u8],
        sig: &[u8],
    ) -> CotResult<bool> {
        self.signatures.set(self.signatures.get() + 1);
        RustCrypto.verify_signature(alg, key, data, sig)
    }
}

pub fn new_module<'a>(table: &'a TbbrCotTable, env: Env, counters: Counters) -> Module<'a> {
    tbbr_auth_module(table, CountingCrypto::default(), env, counters).unwrap()
}

pub fn verify(
    module: &mut Module,
    chain: &Chain,
    id: TbbrImageId,
) -> Result<(), Rejection<TbbrImageId>> {
    module.verify_image(chain, id, chain.get(id))
}
