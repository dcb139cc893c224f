/*++

Licensed under the Apache-2.0 license.

File Name:

    x509.rs

Abstract:

    Parser for X.509v3 DER certificates carrying Chain of Trust extensions.

--*/

use super::ImageParser;
use crate::der::{self, DerReader};
use cot_cfi::cfi_check_eq;
use cot_error::{CotError, CotResult};
use cot_image_types::{AuthParamType, AuthParamTypeDesc, ObjectIdentifier};

/// X.509 version 3 is encoded as 2
const X509_V3: u32 = 2;

pub struct X509Parser;

/// Located fields of a certificate
struct Certificate<'a> {
    /// `TBSCertificate`, the signed bytes
    tbs: &'a [u8],

    /// Outer `AlgorithmIdentifier`
    sig_alg: &'a [u8],

    /// `signatureValue` BIT STRING
    sig: &'a [u8],

    /// `SubjectPublicKeyInfo`
    pub_key: &'a [u8],

    /// Contents of the `Extensions` SEQUENCE
    extensions: &'a [u8],
}

/// One certificate extension
struct Extension<'a> {
    /// Contents of the extension OID
    oid: &'a [u8],

    /// Contents of `extnValue`
    value: &'a [u8],
}

impl X509Parser {
    fn parse(buf: &[u8]) -> CotResult<Certificate<'_>> {
        let mut outer = DerReader::new(buf);
        let cert = outer.read(der::TAG_SEQUENCE)?;
        outer.finish(CotError::PARSER_X509_TRAILING_DATA)?;

        let mut reader = DerReader::new(cert.content);
        let tbs = reader.read(der::TAG_SEQUENCE)?;
        let sig_alg = reader.read(der::TAG_SEQUENCE)?;
        let sig = reader.read(der::TAG_BIT_STRING)?;
        reader.finish(CotError::PARSER_X509_TRAILING_DATA)?;

        let mut fields = DerReader::new(tbs.content);
        Self::check_version(&mut fields)?;
        let serial = fields.read(der::TAG_INTEGER)?;
        if serial.content.is_empty() {
            return Err(CotError::PARSER_DER_BAD_LENGTH);
        }
        let inner_sig_alg = fields.read(der::TAG_SEQUENCE)?;
        let _issuer = fields.read(der::TAG_SEQUENCE)?;
        let _validity = fields.read(der::TAG_SEQUENCE)?;
        let _subject = fields.read(der::TAG_SEQUENCE)?;
        let pub_key = fields.read(der::TAG_SEQUENCE)?;

        // issuerUniqueID and subjectUniqueID
        for n in 1..=2 {
            if fields
                .read_optional(der::tag_context_primitive(n))?
                .is_none()
            {
                fields.read_optional(der::tag_context(n))?;
            }
        }

        let wrapper = fields
            .read_optional(der::tag_context(3))?
            .ok_or(CotError::PARSER_X509_MISSING_EXTENSIONS)?;
        fields.finish(CotError::PARSER_X509_TRAILING_DATA)?;

        let mut wrapper = DerReader::new(wrapper.content);
        let extensions = wrapper.read(der::TAG_SEQUENCE)?;
        wrapper.finish(CotError::PARSER_X509_BAD_EXTENSION)?;
        if extensions.content.is_empty() {
            return Err(CotError::PARSER_X509_MISSING_EXTENSIONS);
        }
        Self::check_extensions(extensions.content)?;

        if inner_sig_alg.raw != sig_alg.raw {
            return Err(CotError::PARSER_X509_SIG_ALG_MISMATCH);
        }
        cfi_check_eq(inner_sig_alg.raw, sig_alg.raw)?;

        Ok(Certificate {
            tbs: tbs.raw,
            sig_alg: sig_alg.raw,
            sig: sig.raw,
            pub_key: pub_key.raw,
            extensions: extensions.content,
        })
    }

    /// `[0] EXPLICIT Version`, which must be v3
    fn check_version(fields: &mut DerReader) -> CotResult<()> {
        let version = fields
            .read_optional(der::tag_context(0))?
            .ok_or(CotError::PARSER_X509_BAD_VERSION)?;
        match der::decode_u32(version.content) {
            Ok(X509_V3) => Ok(()),
            _ => Err(CotError::PARSER_X509_BAD_VERSION),
        }
    }

    /// `Extension ::= SEQUENCE { OID, BOOLEAN DEFAULT FALSE, OCTET STRING }`
    fn next_extension<'a>(reader: &mut DerReader<'a>) -> CotResult<Extension<'a>> {
        let bad = |_| CotError::PARSER_X509_BAD_EXTENSION;

        let ext = reader.read(der::TAG_SEQUENCE).map_err(bad)?;
        let mut fields = DerReader::new(ext.content);
        let oid = fields.read(der::TAG_OID).map_err(bad)?;
        if ObjectIdentifier::from_bytes(oid.content).is_err() {
            return Err(CotError::PARSER_X509_BAD_EXTENSION);
        }
        // DER omits a FALSE default, so only TRUE may be encoded
        if let Some(critical) = fields.read_optional(der::TAG_BOOLEAN).map_err(bad)? {
            if critical.content != [0xFF] {
                return Err(CotError::PARSER_X509_BAD_EXTENSION);
            }
        }
        let value = fields.read(der::TAG_OCTET_STRING).map_err(bad)?;
        fields.finish(CotError::PARSER_X509_BAD_EXTENSION)?;

        Ok(Extension {
            oid: oid.content,
            value: value.content,
        })
    }

    fn check_extensions(extensions: &[u8]) -> CotResult<()> {
        let mut reader = DerReader::new(extensions);
        while !reader.is_empty() {
            let ext = Self::next_extension(&mut reader)?;

            let mut rest = reader;
            while !rest.is_empty() {
                if Self::next_extension(&mut rest)?.oid == ext.oid {
                    return Err(CotError::PARSER_X509_DUPLICATE_EXTENSION);
                }
            }
        }
        Ok(())
    }

    fn find_extension<'a>(extensions: &'a [u8], oid: &ObjectIdentifier) -> CotResult<&'a [u8]> {
        let mut reader = DerReader::new(extensions);
        while !reader.is_empty() {
            let ext = Self::next_extension(&mut reader)?;
            if ext.oid == oid.as_bytes() {
                return Ok(ext.value);
            }
        }
        Err(CotError::PARAM_NOT_FOUND)
    }
}

impl ImageParser for X509Parser {
    fn check_integrity(&self, buf: &[u8]) -> CotResult<()> {
        Self::parse(buf).map(|_| ())
    }

    fn get_param<'a>(
        &self,
        type_desc: &AuthParamTypeDesc,
        buf: &'a [u8],
    ) -> CotResult<&'a [u8]> {
        let cert = Self::parse(buf)?;

        match (type_desc.param_type, type_desc.cookie) {
            (AuthParamType::Sig, _) => Ok(cert.sig),
            (AuthParamType::SigAlg, _) => Ok(cert.sig_alg),
            (AuthParamType::RawData, None) => Ok(cert.tbs),
            (AuthParamType::PubKey, None) => Ok(cert.pub_key),
            (_, Some(oid)) => Self::find_extension(cert.extensions, &oid),
            (AuthParamType::Hash | AuthParamType::NvCounter, None) => {
                Err(CotError::PARAM_UNSUPPORTED_TYPE)
            }
        }
    }
}
