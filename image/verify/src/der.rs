/*++

Licensed under the Apache-2.0 license.

File Name:

    der.rs

Abstract:

    Bounds-checked reader for definite-length DER.

--*/

use cot_error::{CotError, CotResult};
use cot_image_types::ObjectIdentifier;

pub const TAG_BOOLEAN: u8 = 0x01;
pub const TAG_INTEGER: u8 = 0x02;
pub const TAG_BIT_STRING: u8 = 0x03;
pub const TAG_OCTET_STRING: u8 = 0x04;
pub const TAG_NULL: u8 = 0x05;
pub const TAG_OID: u8 = 0x06;
pub const TAG_SEQUENCE: u8 = 0x30;

/// Context-specific constructed tag `[n]`
pub const fn tag_context(n: u8) -> u8 {
    0xa0 | n
}

/// Context-specific primitive tag `[n]`
pub const fn tag_context_primitive(n: u8) -> u8 {
    0x80 | n
}

const HIGH_TAG_NUMBER: u8 = 0x1f;

/// One DER element
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DerElement<'a> {
    /// Identifier octet
    pub tag: u8,

    /// Contents octets
    pub content: &'a [u8],

    /// Whole encoding: identifier, length and contents
    pub raw: &'a [u8],
}

/// Sequential reader over the elements of a DER buffer
///
/// Every element is bounds-checked against the buffer given to the reader,
/// so reading the contents of a constructed element with a new reader can
/// never run past its parent.
#[derive(Debug, Copy, Clone)]
pub struct DerReader<'a> {
    buf: &'a [u8],
}

impl<'a> DerReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Tag of the next element without consuming it
    pub fn peek_tag(&self) -> Option<u8> {
        self.buf.first().copied()
    }

    /// Read the next element whatever its tag
    pub fn read_any(&mut self) -> CotResult<DerElement<'a>> {
        let tag = *self.buf.first().ok_or(CotError::PARSER_DER_TRUNCATED)?;
        if tag & HIGH_TAG_NUMBER == HIGH_TAG_NUMBER {
            return Err(CotError::PARSER_DER_UNEXPECTED_TAG);
        }

        let (len, len_size) = Self::decode_len(self.buf.get(1..).unwrap_or(&[]))?;
        let header = 1 + len_size;
        let total = header
            .checked_add(len)
            .ok_or(CotError::PARSER_DER_BAD_LENGTH)?;
        let raw = self.buf.get(..total).ok_or(CotError::PARSER_DER_TRUNCATED)?;
        let content = raw.get(header..).ok_or(CotError::PARSER_DER_TRUNCATED)?;
        self.buf = self.buf.get(total..).unwrap_or(&[]);

        Ok(DerElement { tag, content, raw })
    }

    /// Read the next element, which must carry `tag`
    pub fn read(&mut self, tag: u8) -> CotResult<DerElement<'a>> {
        match self.peek_tag() {
            Some(t) if t == tag => self.read_any(),
            Some(_) => Err(CotError::PARSER_DER_UNEXPECTED_TAG),
            None => Err(CotError::PARSER_DER_TRUNCATED),
        }
    }

    /// Read the next element only if it carries `tag`
    pub fn read_optional(&mut self, tag: u8) -> CotResult<Option<DerElement<'a>>> {
        if self.peek_tag() == Some(tag) {
            self.read_any().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Fail with `err` if any byte is left
    pub fn finish(&self, err: CotError) -> CotResult<()> {
        if self.buf.is_empty() {
            Ok(())
        } else {
            Err(err)
        }
    }

    /// Decode a definite length; returns the length and the number of
    /// length octets. Lengths must use the minimal encoding.
    fn decode_len(buf: &[u8]) -> CotResult<(usize, usize)> {
        let first = *buf.first().ok_or(CotError::PARSER_DER_TRUNCATED)?;
        if first < 0x80 {
            return Ok((usize::from(first), 1));
        }

        let count = usize::from(first & 0x7f);
        if count == 0 || count > core::mem::size_of::<u32>() {
            return Err(CotError::PARSER_DER_BAD_LENGTH);
        }
        let octets = buf
            .get(1..=count)
            .ok_or(CotError::PARSER_DER_TRUNCATED)?;
        if octets.first() == Some(&0) {
            return Err(CotError::PARSER_DER_BAD_LENGTH);
        }

        let len = octets
            .iter()
            .fold(0usize, |len, b| (len << 8) | usize::from(*b));
        if len < 0x80 {
            return Err(CotError::PARSER_DER_BAD_LENGTH);
        }
        Ok((len, 1 + count))
    }
}

/// Decode the contents of an OBJECT IDENTIFIER element
pub fn decode_oid(element: &DerElement) -> Option<ObjectIdentifier> {
    if element.tag != TAG_OID {
        return None;
    }
    ObjectIdentifier::from_bytes(element.content).ok()
}

/// Parsed `AlgorithmIdentifier`
#[derive(Debug, Copy, Clone)]
pub struct AlgorithmIdentifier<'a> {
    pub oid: ObjectIdentifier,
    pub params: Option<DerElement<'a>>,
}

/// Parse an `AlgorithmIdentifier ::= SEQUENCE { OID, ANY OPTIONAL }` that
/// exactly fills `buf`
pub fn parse_algorithm_identifier(buf: &[u8]) -> CotResult<AlgorithmIdentifier<'_>> {
    let mut outer = DerReader::new(buf);
    let seq = outer.read(TAG_SEQUENCE)?;
    outer.finish(CotError::PARSER_DER_BAD_LENGTH)?;

    let mut inner = DerReader::new(seq.content);
    let oid = decode_oid(&inner.read(TAG_OID)?).ok_or(CotError::PARAM_MALFORMED_ALG_ID)?;
    let params = if inner.is_empty() {
        None
    } else {
        Some(inner.read_any()?)
    };
    inner.finish(CotError::PARAM_MALFORMED_ALG_ID)?;

    Ok(AlgorithmIdentifier { oid, params })
}

/// Contents of a BIT STRING with no unused bits
pub fn bit_string_bytes<'a>(element: &DerElement<'a>) -> Option<&'a [u8]> {
    if element.tag != TAG_BIT_STRING {
        return None;
    }
    match element.content.split_first() {
        Some((&0, bytes)) => Some(bytes),
        _ => None,
    }
}

/// Decode a non-negative DER INTEGER of at most 32 bits
///
/// # Arguments
///
/// * `buf` - Complete INTEGER encoding
///
/// # Returns
///
/// * `u32` - Value
pub fn decode_u32(buf: &[u8]) -> CotResult<u32> {
    let mut reader = DerReader::new(buf);
    let int = reader
        .read(TAG_INTEGER)
        .map_err(|_| CotError::PARAM_MALFORMED_NV_COUNTER)?;
    reader.finish(CotError::PARAM_MALFORMED_NV_COUNTER)?;

    let content = int.content;
    let first = *content
        .first()
        .ok_or(CotError::PARAM_MALFORMED_NV_COUNTER)?;
    if first & 0x80 != 0 {
        // Negative
        return Err(CotError::PARAM_MALFORMED_NV_COUNTER);
    }

    let magnitude = match content.split_first() {
        Some((&0, rest)) if !rest.is_empty() => {
            if rest.first().map_or(true, |b| b & 0x80 == 0) {
                // Non-minimal leading zero
                return Err(CotError::PARAM_MALFORMED_NV_COUNTER);
            }
            rest
        }
        _ => content,
    };
    if magnitude.len() > core::mem::size_of::<u32>() {
        return Err(CotError::PARAM_MALFORMED_NV_COUNTER);
    }

    Ok(magnitude
        .iter()
        .fold(0u32, |val, b| (val << 8) | u32::from(*b)))
}
