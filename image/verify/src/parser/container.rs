/*++

Licensed under the Apache-2.0 license.

File Name:

    container.rs

Abstract:

    Parser for the platform firmware container.

--*/

use super::ImageParser;
use cot_cfi::cfi_check_eq;
use cot_error::{CotError, CotResult};
use cot_image_types::{
    AuthParamType, AuthParamTypeDesc, ContainerHeader, CONTAINER_HEADER_BYTE_SIZE,
    CONTAINER_HEADER_VERSION, CONTAINER_MAGIC,
};
use zerocopy::FromBytes;

pub struct ContainerParser;

impl ContainerParser {
    /// Validate a container and return its header
    fn parse(buf: &[u8]) -> CotResult<ContainerHeader> {
        let (header, _) = ContainerHeader::read_from_prefix(buf)
            .map_err(|_| CotError::PARSER_CONTAINER_TOO_SHORT)?;

        if header.magic.get() != CONTAINER_MAGIC {
            return Err(CotError::PARSER_CONTAINER_BAD_MAGIC);
        }
        if header.version.get() != CONTAINER_HEADER_VERSION {
            return Err(CotError::PARSER_CONTAINER_BAD_VERSION);
        }
        if header.header_checksum.get() != header.compute_checksum() {
            return Err(CotError::PARSER_CONTAINER_BAD_CHECKSUM);
        }
        cfi_check_eq(header.header_checksum.get(), header.compute_checksum())?;

        let offset = header.payload_offset.get() as usize;
        let size = header.payload_size.get() as usize;
        if offset < CONTAINER_HEADER_BYTE_SIZE {
            return Err(CotError::PARSER_CONTAINER_BAD_PAYLOAD_RANGE);
        }
        let end = offset
            .checked_add(size)
            .ok_or(CotError::PARSER_CONTAINER_BAD_PAYLOAD_RANGE)?;
        if end > buf.len() {
            return Err(CotError::PARSER_CONTAINER_BAD_PAYLOAD_RANGE);
        }
        if end != buf.len() {
            return Err(CotError::PARSER_CONTAINER_TRAILING_DATA);
        }

        Ok(header)
    }
}

impl ImageParser for ContainerParser {
    fn check_integrity(&self, buf: &[u8]) -> CotResult<()> {
        Self::parse(buf).map(|_| ())
    }

    fn get_param<'a>(
        &self,
        type_desc: &AuthParamTypeDesc,
        buf: &'a [u8],
    ) -> CotResult<&'a [u8]> {
        Self::parse(buf)?;
        match type_desc.param_type {
            // The whole container, so a hash over it covers the header too
            AuthParamType::RawData => Ok(buf),
            _ => Err(CotError::PARAM_UNSUPPORTED_TYPE),
        }
    }

    fn get_nv_counter(&self, type_desc: &AuthParamTypeDesc, buf: &[u8]) -> CotResult<u32> {
        let header = Self::parse(buf)?;
        match type_desc.param_type {
            AuthParamType::NvCounter => Ok(header.svn.get()),
            _ => Err(CotError::PARAM_UNSUPPORTED_TYPE),
        }
    }
}
