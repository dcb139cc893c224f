/*++

Licensed under the Apache-2.0 license.

File Name:

    oid.rs

Abstract:

    Object identifiers of the trusted board boot certificate extensions.

--*/

use cot_image_types::ObjectIdentifier;

pub const TRUSTED_FW_NVCOUNTER: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.1");
pub const NON_TRUSTED_FW_NVCOUNTER: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.2");

pub const TRUSTED_BOOT_FW_HASH: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.201");

pub const TRUSTED_WORLD_PK: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.302");

pub const SOC_FW_CONTENT_CERT_PK: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.501");
pub const SOC_AP_FW_HASH: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.502");
pub const SOC_FW_CONFIG_HASH: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.503");

pub const TRUSTED_OS_FW_CONTENT_CERT_PK: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.601");
pub const TRUSTED_OS_FW_HASH: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.1001");

pub const NON_TRUSTED_WORLD_BOOTLOADER_HASH: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.1201");

/// Platform root-of-trust key of the dual-root branch
pub const PROT_PK: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4128.2100.1102");
