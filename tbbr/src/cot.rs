/*++

Licensed under the Apache-2.0 license.

File Name:

    cot.rs

Abstract:

    File contains the trusted board boot Chain of Trust: parameter type
    descriptors and the descriptor table.

    Two roots anchor the table. The trusted key certificate and the trusted
    boot firmware certificate are checked against the ROTPK. The
    non-trusted firmware content certificate carries its own key, checked
    against the platform root key (PROT_PK).

--*/

use crate::oid;
use crate::TbbrImageId::{self, *};
use crate::{TBBR_IMAGE_COUNT, TBBR_PARAM_CAP};
use cot_image_types::{
    AuthMethodDesc, AuthParamDesc, AuthParamRef, AuthParamType, AuthParamTypeDesc, CotNode,
    ImageFormat,
};

/// DER `DigestInfo` with a SHA-512 digest
pub const HASH_DER_LEN: usize = 83;

/// DER `SubjectPublicKeyInfo` of an RSA-2048 key, the largest supported
/// subject key
pub const PK_DER_LEN: usize = 294;

const _: () = assert!(HASH_DER_LEN <= TBBR_PARAM_CAP && PK_DER_LEN <= TBBR_PARAM_CAP);

// Parameter buffer pool slots, one per published parameter
pub const TB_FW_HASH_SLOT: usize = 0;
pub const TRUSTED_WORLD_PK_SLOT: usize = 1;
pub const SOC_FW_CONTENT_PK_SLOT: usize = 2;
pub const TOS_FW_CONTENT_PK_SLOT: usize = 3;
pub const SOC_FW_HASH_SLOT: usize = 4;
pub const SOC_FW_CONFIG_HASH_SLOT: usize = 5;
pub const TOS_FW_HASH_SLOT: usize = 6;
pub const NT_WORLD_BL_HASH_SLOT: usize = 7;

pub static SUBJECT_PK: AuthParamTypeDesc = AuthParamTypeDesc::new(AuthParamType::PubKey);
pub static SIG: AuthParamTypeDesc = AuthParamTypeDesc::new(AuthParamType::Sig);
pub static SIG_ALG: AuthParamTypeDesc = AuthParamTypeDesc::new(AuthParamType::SigAlg);
pub static RAW_DATA: AuthParamTypeDesc = AuthParamTypeDesc::new(AuthParamType::RawData);

pub static TRUSTED_NV_CTR: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::NvCounter, oid::TRUSTED_FW_NVCOUNTER);
pub static NON_TRUSTED_NV_CTR: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::NvCounter, oid::NON_TRUSTED_FW_NVCOUNTER);
/// Security version of a firmware container
pub static CONTAINER_NV_CTR: AuthParamTypeDesc = AuthParamTypeDesc::new(AuthParamType::NvCounter);

pub static PROT_PK: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::PubKey, oid::PROT_PK);
pub static TRUSTED_WORLD_PK: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::PubKey, oid::TRUSTED_WORLD_PK);
pub static SOC_FW_CONTENT_PK: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::PubKey, oid::SOC_FW_CONTENT_CERT_PK);
pub static TOS_FW_CONTENT_PK: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::PubKey, oid::TRUSTED_OS_FW_CONTENT_CERT_PK);

pub static TB_FW_HASH: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::Hash, oid::TRUSTED_BOOT_FW_HASH);
pub static SOC_FW_HASH: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::Hash, oid::SOC_AP_FW_HASH);
pub static SOC_FW_CONFIG_HASH: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::Hash, oid::SOC_FW_CONFIG_HASH);
pub static TOS_FW_HASH: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::Hash, oid::TRUSTED_OS_FW_HASH);
pub static NT_WORLD_BL_HASH: AuthParamTypeDesc =
    AuthParamTypeDesc::with_cookie(AuthParamType::Hash, oid::NON_TRUSTED_WORLD_BOOTLOADER_HASH);

/// Certificate signature checked under `$pk`
macro_rules! signed_by {
    ($pk:expr) => {
        AuthMethodDesc::Signature {
            pk: $pk,
            sig: AuthParamRef::image(&SIG),
            alg: AuthParamRef::image(&SIG_ALG),
            data: AuthParamRef::image(&RAW_DATA),
        }
    };
}

/// Image payload checked against the parent's `$hash`
macro_rules! hashed_by {
    ($hash:expr) => {
        AuthMethodDesc::Hash {
            data: AuthParamRef::image(&RAW_DATA),
            hash: AuthParamRef::parent(&$hash),
        }
    };
}

macro_rules! publish {
    ($desc:expr, $slot:expr, $len:expr) => {
        AuthParamDesc {
            type_desc: &$desc,
            slot: $slot,
            max_len: $len,
        }
    };
}

/// Leaf image authenticated by a hash published by its parent
macro_rules! raw_image {
    ($id:expr, $parent:expr, $hash:expr) => {
        CotNode {
            id: $id,
            format: ImageFormat::Raw,
            parent: Some($parent),
            methods: &[hashed_by!($hash)],
            authenticated_data: &[],
            nv_ctr: None,
        }
    };
}

pub static TBBR_COT: [CotNode<TbbrImageId>; TBBR_IMAGE_COUNT] = [
    CotNode {
        id: TrustedBootFwCert,
        format: ImageFormat::Certificate,
        parent: None,
        methods: &[signed_by!(AuthParamRef::image(&SUBJECT_PK))],
        authenticated_data: &[publish!(TB_FW_HASH, TB_FW_HASH_SLOT, HASH_DER_LEN)],
        nv_ctr: Some(&TRUSTED_NV_CTR),
    },
    raw_image!(Bl2Image, TrustedBootFwCert, TB_FW_HASH),
    CotNode {
        id: TrustedKeyCert,
        format: ImageFormat::Certificate,
        parent: None,
        methods: &[signed_by!(AuthParamRef::image(&SUBJECT_PK))],
        authenticated_data: &[publish!(TRUSTED_WORLD_PK, TRUSTED_WORLD_PK_SLOT, PK_DER_LEN)],
        nv_ctr: Some(&TRUSTED_NV_CTR),
    },
    CotNode {
        id: SocFwKeyCert,
        format: ImageFormat::Certificate,
        parent: Some(TrustedKeyCert),
        methods: &[signed_by!(AuthParamRef::parent(&TRUSTED_WORLD_PK))],
        authenticated_data: &[publish!(SOC_FW_CONTENT_PK, SOC_FW_CONTENT_PK_SLOT, PK_DER_LEN)],
        nv_ctr: Some(&TRUSTED_NV_CTR),
    },
    CotNode {
        id: SocFwContentCert,
        format: ImageFormat::Certificate,
        parent: Some(SocFwKeyCert),
        methods: &[signed_by!(AuthParamRef::parent(&SOC_FW_CONTENT_PK))],
        authenticated_data: &[
            publish!(SOC_FW_HASH, SOC_FW_HASH_SLOT, HASH_DER_LEN),
            publish!(SOC_FW_CONFIG_HASH, SOC_FW_CONFIG_HASH_SLOT, HASH_DER_LEN),
        ],
        nv_ctr: Some(&TRUSTED_NV_CTR),
    },
    raw_image!(Bl31Image, SocFwContentCert, SOC_FW_HASH),
    raw_image!(SocFwConfig, SocFwContentCert, SOC_FW_CONFIG_HASH),
    CotNode {
        id: TrustedOsFwKeyCert,
        format: ImageFormat::Certificate,
        parent: Some(TrustedKeyCert),
        methods: &[signed_by!(AuthParamRef::parent(&TRUSTED_WORLD_PK))],
        authenticated_data: &[publish!(TOS_FW_CONTENT_PK, TOS_FW_CONTENT_PK_SLOT, PK_DER_LEN)],
        nv_ctr: Some(&TRUSTED_NV_CTR),
    },
    CotNode {
        id: TrustedOsFwContentCert,
        format: ImageFormat::Certificate,
        parent: Some(TrustedOsFwKeyCert),
        methods: &[signed_by!(AuthParamRef::parent(&TOS_FW_CONTENT_PK))],
        authenticated_data: &[publish!(TOS_FW_HASH, TOS_FW_HASH_SLOT, HASH_DER_LEN)],
        nv_ctr: Some(&TRUSTED_NV_CTR),
    },
    CotNode {
        id: Bl32Image,
        format: ImageFormat::Container,
        parent: Some(TrustedOsFwContentCert),
        methods: &[hashed_by!(TOS_FW_HASH)],
        authenticated_data: &[],
        nv_ctr: Some(&CONTAINER_NV_CTR),
    },
    CotNode {
        id: NonTrustedFwContentCert,
        format: ImageFormat::Certificate,
        parent: None,
        methods: &[signed_by!(AuthParamRef::image(&PROT_PK))],
        authenticated_data: &[publish!(NT_WORLD_BL_HASH, NT_WORLD_BL_HASH_SLOT, HASH_DER_LEN)],
        nv_ctr: Some(&NON_TRUSTED_NV_CTR),
    },
    raw_image!(Bl33Image, NonTrustedFwContentCert, NT_WORLD_BL_HASH),
];
