/*++

Licensed under the Apache-2.0 license.

File Name:

    container.rs

Abstract:

    File contains the firmware container builder.

--*/

use cot_image_types::ContainerHeader;
use zerocopy::IntoBytes;

/// Wrap a payload in a sealed container header
///
/// # Arguments
///
/// * `svn`     - Security version number
/// * `payload` - Firmware payload
pub fn container(svn: u32, payload: &[u8]) -> anyhow::Result<Vec<u8>> {
    let size = u32::try_from(payload.len())?;
    let header = ContainerHeader::new(svn, size);

    let mut buf = header.as_bytes().to_vec();
    buf.extend_from_slice(payload);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cot_image_types::{CONTAINER_HEADER_BYTE_SIZE, CONTAINER_MAGIC};

    #[test]
    fn test_container_layout() {
        let buf = container(3, b"payload").unwrap();
        assert_eq!(buf.len(), CONTAINER_HEADER_BYTE_SIZE + 7);
        assert_eq!(buf[..4], CONTAINER_MAGIC.to_le_bytes());
        assert_eq!(buf[8..12], 3u32.to_le_bytes());
        assert_eq!(&buf[CONTAINER_HEADER_BYTE_SIZE..], b"payload");

        let sum = buf[..CONTAINER_HEADER_BYTE_SIZE - 4]
            .iter()
            .fold(0u32, |s, b| s.wrapping_add(u32::from(*b)));
        assert_eq!(
            buf[CONTAINER_HEADER_BYTE_SIZE - 4..CONTAINER_HEADER_BYTE_SIZE],
            0u32.wrapping_sub(sum).to_le_bytes()
        );
    }
}
