/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    Reference trusted board boot Chain of Trust for the verification
    engine.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

mod cot;
pub mod oid;

pub use cot::*;

use cot_error::CotResult;
use cot_image_types::{CotTable, ImageId};
use cot_image_verify::{
    AuthModule, CryptoProvider, NvCounterStorage, ParserRegistry, PlatformEnv,
};

pub const TBBR_IMAGE_COUNT: usize = 12;
pub const TBBR_PARAM_SLOTS: usize = 8;
pub const TBBR_PARAM_CAP: usize = 294;
pub const TBBR_PARSER_CAPACITY: usize = 4;

/// Trusted board boot image identifiers
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TbbrImageId {
    TrustedBootFwCert,
    Bl2Image,
    TrustedKeyCert,
    SocFwKeyCert,
    SocFwContentCert,
    Bl31Image,
    SocFwConfig,
    TrustedOsFwKeyCert,
    TrustedOsFwContentCert,
    Bl32Image,
    NonTrustedFwContentCert,
    Bl33Image,
}

impl ImageId for TbbrImageId {
    fn index(self) -> usize {
        self as usize
    }
}

/// Non-volatile counters of the platform
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TbbrNvCounter {
    Trusted,
    NonTrusted,

    /// Security version of the trusted OS container
    TrustedOs,
}

impl TbbrImageId {
    /// Every image, in table order
    pub const ALL: [Self; TBBR_IMAGE_COUNT] = [
        Self::TrustedBootFwCert,
        Self::Bl2Image,
        Self::TrustedKeyCert,
        Self::SocFwKeyCert,
        Self::SocFwContentCert,
        Self::Bl31Image,
        Self::SocFwConfig,
        Self::TrustedOsFwKeyCert,
        Self::TrustedOsFwContentCert,
        Self::Bl32Image,
        Self::NonTrustedFwContentCert,
        Self::Bl33Image,
    ];

    /// Counter backing an anti-rollback gated image
    pub fn nv_counter(self) -> Option<TbbrNvCounter> {
        match self {
            Self::TrustedBootFwCert
            | Self::TrustedKeyCert
            | Self::SocFwKeyCert
            | Self::SocFwContentCert
            | Self::TrustedOsFwKeyCert
            | Self::TrustedOsFwContentCert => Some(TbbrNvCounter::Trusted),
            Self::NonTrustedFwContentCert => Some(TbbrNvCounter::NonTrusted),
            Self::Bl32Image => Some(TbbrNvCounter::TrustedOs),
            Self::Bl2Image | Self::Bl31Image | Self::SocFwConfig | Self::Bl33Image => None,
        }
    }
}

pub type TbbrCotTable = CotTable<TbbrImageId, TBBR_IMAGE_COUNT>;

pub type TbbrAuthModule<'a, C, E, S> = AuthModule<
    'a,
    TbbrImageId,
    C,
    E,
    S,
    TBBR_IMAGE_COUNT,
    TBBR_PARAM_SLOTS,
    TBBR_PARAM_CAP,
    TBBR_PARSER_CAPACITY,
>;

/// Validate the trusted board boot descriptor table
pub fn tbbr_table() -> CotResult<TbbrCotTable> {
    CotTable::new(&TBBR_COT)
}

/// Create an authentication module over the trusted board boot table with
/// the built-in parsers
pub fn tbbr_auth_module<'a, C, E, S>(
    table: &'a TbbrCotTable,
    crypto: C,
    env: E,
    storage: S,
) -> CotResult<TbbrAuthModule<'a, C, E, S>>
where
    C: CryptoProvider,
    E: PlatformEnv<TbbrImageId>,
    S: NvCounterStorage<TbbrImageId>,
{
    AuthModule::new(table, ParserRegistry::with_builtin()?, crypto, env, storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cot_image_types::AuthParamType;

    #[test]
    fn test_ids_are_dense() {
        for (i, id) in TbbrImageId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(TBBR_COT[i].id, id);
        }
    }

    #[test]
    fn test_table_is_valid() {
        let table = tbbr_table().unwrap();
        assert_eq!(table.nodes().count(), TBBR_IMAGE_COUNT);
        for node in table.nodes() {
            assert_eq!(table.node(node.id).unwrap().id, node.id);
            assert_eq!(node.nv_ctr.is_some(), node.id.nv_counter().is_some());
        }
    }

    #[test]
    fn test_chain_shape() {
        let table = tbbr_table().unwrap();
        assert_eq!(table.depth(TbbrImageId::Bl31Image), Ok(3));
        assert_eq!(table.depth(TbbrImageId::Bl32Image), Ok(3));
        assert_eq!(table.depth(TbbrImageId::Bl2Image), Ok(1));
        assert_eq!(table.depth(TbbrImageId::Bl33Image), Ok(1));
        assert_eq!(table.parent_of(TbbrImageId::TrustedKeyCert), None);
        assert_eq!(table.parent_of(TbbrImageId::NonTrustedFwContentCert), None);
    }

    #[test]
    fn test_roots_take_key_from_image() {
        let table = tbbr_table().unwrap();
        let root_keys: Vec<_> = table
            .nodes()
            .filter(|node| node.parent.is_none())
            .flat_map(|node| node.methods.iter())
            .flat_map(|method| method.params())
            .filter(|param| param.type_desc.param_type == AuthParamType::PubKey)
            .map(|param| param.type_desc)
            .collect();
        assert_eq!(root_keys, [&SUBJECT_PK, &SUBJECT_PK, &PROT_PK]);
    }

    #[test]
    fn test_params_fit_pool() {
        let table = tbbr_table().unwrap();
        for node in table.nodes() {
            for desc in node.authenticated_data {
                assert!(desc.slot < TBBR_PARAM_SLOTS);
                assert!(desc.max_len <= TBBR_PARAM_CAP);
            }
        }
    }

    #[test]
    fn test_content_keys_have_own_slots() {
        let table = tbbr_table().unwrap();
        let slot = |id| table.node(id).unwrap().authenticated_data[0].slot;
        assert_ne!(
            slot(TbbrImageId::SocFwKeyCert),
            slot(TbbrImageId::TrustedOsFwKeyCert)
        );
        assert_ne!(
            slot(TbbrImageId::TrustedKeyCert),
            slot(TbbrImageId::SocFwKeyCert)
        );
    }
}
