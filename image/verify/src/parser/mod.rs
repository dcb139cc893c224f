/*++

Licensed under the Apache-2.0 license.

File Name:

    mod.rs

Abstract:

    File contains the image parser interface and the parser registry.

--*/

mod container;
mod raw;
mod x509;

pub use container::ContainerParser;
pub use raw::RawParser;
pub use x509::X509Parser;

use crate::der;
use cot_error::{CotError, CotResult};
use cot_image_types::{AuthParamTypeDesc, ImageFormat};

pub static RAW_PARSER: RawParser = RawParser;
pub static X509_PARSER: X509Parser = X509Parser;
pub static CONTAINER_PARSER: ContainerParser = ContainerParser;

/// Image format handler
///
/// Parsers are stateless: every call re-derives what it needs from the
/// buffer, and never reads outside it.
pub trait ImageParser {
    /// Check the structural integrity of an image
    fn check_integrity(&self, buf: &[u8]) -> CotResult<()>;

    /// Locate a parameter inside an image
    ///
    /// # Arguments
    ///
    /// * `type_desc` - Parameter to extract
    /// * `buf`       - Image
    ///
    /// # Returns
    ///
    /// * `&[u8]` - Parameter bytes, borrowed from `buf`
    fn get_param<'a>(
        &self,
        type_desc: &AuthParamTypeDesc,
        buf: &'a [u8],
    ) -> CotResult<&'a [u8]>;

    /// Declared version of an image
    ///
    /// Defaults to decoding the parameter as a DER INTEGER.
    fn get_nv_counter(&self, type_desc: &AuthParamTypeDesc, buf: &[u8]) -> CotResult<u32> {
        der::decode_u32(self.get_param(type_desc, buf)?)
    }
}

/// Fixed-capacity map from image format to parser
pub struct ParserRegistry<'a, const P: usize> {
    entries: [Option<(ImageFormat, &'a dyn ImageParser)>; P],
}

impl<'a, const P: usize> Default for ParserRegistry<'a, P> {
    fn default() -> Self {
        Self { entries: [None; P] }
    }
}

impl<'a, const P: usize> ParserRegistry<'a, P> {
    /// Registry holding the raw, certificate and container parsers
    pub fn with_builtin() -> CotResult<Self> {
        let mut registry = Self::default();
        registry.register(ImageFormat::Raw, &RAW_PARSER)?;
        registry.register(ImageFormat::Certificate, &X509_PARSER)?;
        registry.register(ImageFormat::Container, &CONTAINER_PARSER)?;
        Ok(registry)
    }

    /// Register a parser for a format
    ///
    /// At most one parser may be registered per format.
    pub fn register(&mut self, format: ImageFormat, parser: &'a dyn ImageParser) -> CotResult<()> {
        if self.lookup(format).is_some() {
            return Err(CotError::CONFIG_DUPLICATE_PARSER);
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.is_none())
            .ok_or(CotError::CONFIG_PARSER_REGISTRY_FULL)?;
        *entry = Some((format, parser));
        Ok(())
    }

    /// Find the parser of a format
    pub fn lookup(&self, format: ImageFormat) -> Option<&'a dyn ImageParser> {
        self.entries
            .iter()
            .flatten()
            .find(|(f, _)| *f == format)
            .map(|(_, parser)| *parser)
    }
}
