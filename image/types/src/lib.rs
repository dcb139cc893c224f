/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    File contains data structures describing a Chain of Trust: image
    identities, formats, authentication parameters, authentication methods
    and the descriptor table that links them.

--*/

#![cfg_attr(not(feature = "std"), no_std)]

mod alg;
mod container;
mod table;

pub use alg::*;
pub use const_oid::ObjectIdentifier;
pub use container::*;
pub use table::CotTable;

/// Image Identity
///
/// Implemented by the platform's image identifier enum. Indices are dense
/// and lie in `0..N`, where `N` is the size of the descriptor table.
pub trait ImageId: Copy + Eq + core::fmt::Debug + 'static {
    /// Dense table index of this identity
    fn index(self) -> usize;
}

/// Image format, selecting the parser that handles an image
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ImageFormat {
    /// Whole buffer is the payload
    Raw,

    /// X.509v3 DER certificate
    Certificate,

    /// Platform firmware container with a fixed header
    Container,

    /// Platform defined format
    Platform(u8),
}

/// Authentication parameter type
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AuthParamType {
    /// Signed payload
    RawData,

    /// DER `DigestInfo`
    Hash,

    /// DER `SubjectPublicKeyInfo`
    PubKey,

    /// DER BIT STRING holding a signature
    Sig,

    /// DER `AlgorithmIdentifier`
    SigAlg,

    /// Anti-rollback counter
    NvCounter,
}

/// Authentication parameter type descriptor
///
/// The cookie selects a certificate extension by object identifier. For
/// `PubKey` descriptors of root nodes it also names the platform
/// root-of-trust key the extracted key is checked against.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AuthParamTypeDesc {
    pub param_type: AuthParamType,
    pub cookie: Option<ObjectIdentifier>,
}

impl AuthParamTypeDesc {
    pub const fn new(param_type: AuthParamType) -> Self {
        Self {
            param_type,
            cookie: None,
        }
    }

    pub const fn with_cookie(param_type: AuthParamType, cookie: ObjectIdentifier) -> Self {
        Self {
            param_type,
            cookie: Some(cookie),
        }
    }
}

/// Parameter published by a node once it is authenticated
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AuthParamDesc {
    /// Parameter type descriptor
    pub type_desc: &'static AuthParamTypeDesc,

    /// Parameter buffer pool slot backing the value
    pub slot: usize,

    /// Maximum accepted length of the value
    pub max_len: usize,
}

/// Where a method obtains one of its parameters
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParamSource {
    /// Extracted from the image being authenticated
    Image,

    /// Published by the parent as authenticated data
    Parent,
}

/// Reference from an authentication method to a parameter
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AuthParamRef {
    pub type_desc: &'static AuthParamTypeDesc,
    pub source: ParamSource,
}

impl AuthParamRef {
    pub const fn image(type_desc: &'static AuthParamTypeDesc) -> Self {
        Self {
            type_desc,
            source: ParamSource::Image,
        }
    }

    pub const fn parent(type_desc: &'static AuthParamTypeDesc) -> Self {
        Self {
            type_desc,
            source: ParamSource::Parent,
        }
    }
}

/// Authentication method entry
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AuthMethodDesc {
    /// Check `sig` over `data` under `pk` with algorithm `alg`
    Signature {
        pk: AuthParamRef,
        sig: AuthParamRef,
        alg: AuthParamRef,
        data: AuthParamRef,
    },

    /// Check the digest of `data` against the `DigestInfo` in `hash`
    Hash {
        data: AuthParamRef,
        hash: AuthParamRef,
    },
}

impl AuthMethodDesc {
    /// Parameter references consumed by this method
    pub fn params(&self) -> impl Iterator<Item = &AuthParamRef> {
        let refs: [Option<&AuthParamRef>; 4] = match self {
            AuthMethodDesc::Signature { pk, sig, alg, data } => {
                [Some(pk), Some(sig), Some(alg), Some(data)]
            }
            AuthMethodDesc::Hash { data, hash } => [Some(data), Some(hash), None, None],
        };
        refs.into_iter().flatten()
    }
}

/// Chain of Trust node
#[derive(Debug, Copy, Clone)]
pub struct CotNode<Id: 'static> {
    /// Image identity
    pub id: Id,

    /// Format of the image
    pub format: ImageFormat,

    /// Parent in the chain, `None` for a root
    pub parent: Option<Id>,

    /// Authentication methods, all of which must pass, in order
    pub methods: &'static [AuthMethodDesc],

    /// Parameters published for children once the node is authenticated
    pub authenticated_data: &'static [AuthParamDesc],

    /// Image parameter holding the declared version of an anti-rollback
    /// gated image
    pub nv_ctr: Option<&'static AuthParamTypeDesc>,
}

impl<Id: ImageId> CotNode<Id> {
    /// Find a published parameter by type descriptor
    pub fn published(&self, type_desc: &AuthParamTypeDesc) -> Option<&'static AuthParamDesc> {
        self.authenticated_data
            .iter()
            .find(|desc| desc.type_desc == type_desc)
    }
}
