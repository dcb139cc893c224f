/*++

Licensed under the Apache-2.0 license.

File Name:

    raw.rs

Abstract:

    Parser for raw binary images: the whole buffer is the payload.

--*/

use super::ImageParser;
use cot_error::{CotError, CotResult};
use cot_image_types::{AuthParamType, AuthParamTypeDesc};

pub struct RawParser;

impl ImageParser for RawParser {
    fn check_integrity(&self, buf: &[u8]) -> CotResult<()> {
        if buf.is_empty() {
            return Err(CotError::PARSER_RAW_EMPTY);
        }
        Ok(())
    }

    fn get_param<'a>(
        &self,
        type_desc: &AuthParamTypeDesc,
        buf: &'a [u8],
    ) -> CotResult<&'a [u8]> {
        match type_desc.param_type {
            AuthParamType::RawData => Ok(buf),
            _ => Err(CotError::PARAM_UNSUPPORTED_TYPE),
        }
    }
}
