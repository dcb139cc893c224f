/*++

Licensed under the Apache-2.0 license.

File Name:

   container.rs

Abstract:

    File contains the layout of the platform firmware container header.

--*/

use zerocopy::byteorder::little_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// "BCOT"
pub const CONTAINER_MAGIC: u32 = 0x544F_4342;
pub const CONTAINER_HEADER_VERSION: u16 = 1;
pub const CONTAINER_HEADER_BYTE_SIZE: usize = core::mem::size_of::<ContainerHeader>();

/// Firmware container header
///
/// All fields are little-endian. The payload starts at `payload_offset` and
/// ends exactly at the end of the container.
#[repr(C)]
#[derive(
    FromBytes,
    IntoBytes,
    Immutable,
    KnownLayout,
    Unaligned,
    Default,
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
)]
pub struct ContainerHeader {
    /// Magic Number
    pub magic: U32,

    /// Header Version
    pub version: U16,

    /// Flags, reserved
    pub flags: U16,

    /// Security Version Number
    pub svn: U32,

    /// Payload offset from the start of the container
    pub payload_offset: U32,

    /// Payload size in bytes
    pub payload_size: U32,

    /// Two's complement of the byte sum of all preceding header fields
    pub header_checksum: U32,
}

impl ContainerHeader {
    /// Create a header for a payload placed right after the header
    pub fn new(svn: u32, payload_size: u32) -> Self {
        let mut header = Self {
            magic: U32::new(CONTAINER_MAGIC),
            version: U16::new(CONTAINER_HEADER_VERSION),
            flags: U16::new(0),
            svn: U32::new(svn),
            payload_offset: U32::new(CONTAINER_HEADER_BYTE_SIZE as u32),
            payload_size: U32::new(payload_size),
            header_checksum: U32::new(0),
        };
        header.header_checksum = U32::new(header.compute_checksum());
        header
    }

    /// Checksum over every header byte before `header_checksum`
    pub fn compute_checksum(&self) -> u32 {
        let bytes = self.as_bytes();
        let covered = bytes
            .get(..CONTAINER_HEADER_BYTE_SIZE - core::mem::size_of::<U32>())
            .unwrap_or(&[]);
        0u32.wrapping_sub(
            covered
                .iter()
                .fold(0u32, |sum, b| sum.wrapping_add(u32::from(*b))),
        )
    }
}
