/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains deterministic keys for tests and development images.
    None of these keys may ever anchor a production chain.

--*/

/// Trusted root key, ECDSA P-384 scalar
pub const ROOT_ECC_KEY_PRIVATE: [u8; 48] = [
    0x1a, 0x57, 0xef, 0x95, 0x51, 0xc7, 0x3d, 0x51, 0x1e, 0x15, 0x0d, 0xb8,
    0x6f, 0x2e, 0x19, 0x5e, 0x12, 0xb7, 0x0a, 0x25, 0xe2, 0xe4, 0xae, 0xd1,
    0x3e, 0x3b, 0xfb, 0x1a, 0x3e, 0x0f, 0x83, 0x5a, 0x22, 0xc2, 0x2e, 0x6d,
    0xd0, 0x47, 0x5f, 0xc1, 0x6f, 0x70, 0x95, 0x0d, 0x94, 0xd9, 0xae, 0x8d,
];

/// Platform root key of the dual-root branch, ECDSA P-384 scalar
pub const PLATFORM_ROOT_ECC_KEY_PRIVATE: [u8; 48] = [
    0x32, 0x3e, 0x9e, 0xd7, 0x16, 0x0a, 0x2f, 0x3f, 0x4e, 0x50, 0xbd, 0xcb,
    0xd7, 0xae, 0x5c, 0x55, 0xc2, 0x12, 0x73, 0xb0, 0x41, 0x0d, 0xa5, 0xef,
    0x8e, 0x2a, 0xe5, 0x0f, 0x9d, 0xf8, 0xb3, 0x8f, 0x2a, 0xed, 0xd7, 0x1a,
    0x51, 0xa8, 0x7d, 0x04, 0x19, 0x3f, 0x3c, 0xa3, 0xcb, 0x54, 0x15, 0xb4,
];

/// Trusted world key, ECDSA P-384 scalar
pub const TRUSTED_WORLD_ECC_KEY_PRIVATE: [u8; 48] = [
    0x41, 0x77, 0x42, 0x2c, 0x1b, 0xc4, 0x15, 0x20, 0x2f, 0xf7, 0x2c, 0x41,
    0x75, 0xfe, 0x1f, 0x00, 0x04, 0x53, 0xe5, 0xbe, 0xf9, 0xc7, 0xaa, 0x34,
    0xde, 0xab, 0xa2, 0xf0, 0xc3, 0x07, 0xee, 0x24, 0xd2, 0xd9, 0x77, 0xdc,
    0x61, 0x40, 0x99, 0x49, 0x64, 0x8a, 0x53, 0xd4, 0x7a, 0x1e, 0xfb, 0x83,
];

/// Non-trusted world key, ECDSA P-384 scalar
pub const NON_TRUSTED_WORLD_ECC_KEY_PRIVATE: [u8; 48] = [
    0x4b, 0xe6, 0x23, 0x8d, 0x12, 0x93, 0xff, 0xad, 0x14, 0x86, 0xd7, 0xce,
    0x28, 0xb6, 0xe4, 0xae, 0x9a, 0x77, 0x6b, 0xad, 0xba, 0x48, 0x3c, 0xfc,
    0xcc, 0x7c, 0xc0, 0xb3, 0x4b, 0x65, 0xeb, 0x84, 0x62, 0x7b, 0xc4, 0x6c,
    0x63, 0x0e, 0xcc, 0xb4, 0x6e, 0xb3, 0x4a, 0x20, 0x42, 0x5a, 0x72, 0x7d,
];

/// SoC firmware content key, ECDSA P-384 scalar
pub const SOC_FW_CONTENT_ECC_KEY_PRIVATE: [u8; 48] = [
    0x5d, 0x4b, 0x66, 0x57, 0x55, 0x62, 0xb5, 0xbf, 0xfb, 0x55, 0x93, 0xb5,
    0x76, 0xc6, 0xdc, 0x4c, 0xc1, 0x2a, 0x89, 0xbf, 0xaf, 0xaa, 0xb9, 0x42,
    0x16, 0x31, 0x21, 0x84, 0xc2, 0xe8, 0x89, 0x92, 0x36, 0xc3, 0x0f, 0x42,
    0x4b, 0x75, 0xbd, 0x4e, 0xa5, 0x2d, 0x15, 0x3b, 0x35, 0xe8, 0x98, 0x64,
];

/// Trusted OS content key, ECDSA P-384 scalar
pub const TRUSTED_OS_CONTENT_ECC_KEY_PRIVATE: [u8; 48] = [
    0x3d, 0x7f, 0x6d, 0x33, 0xc4, 0x18, 0xe5, 0x14, 0xb5, 0x2a, 0xba, 0x67,
    0x3a, 0x4d, 0x14, 0x50, 0x7d, 0x4c, 0x7e, 0xae, 0x91, 0xa8, 0xb2, 0xf2,
    0x64, 0x5b, 0x0d, 0x3c, 0x7e, 0x05, 0x0a, 0xde, 0x5b, 0xce, 0x61, 0xd3,
    0x1e, 0xb4, 0x79, 0x64, 0xb9, 0x96, 0xef, 0xe5, 0x26, 0x41, 0xff, 0xa6,
];

/// Non-trusted firmware content key, ECDSA P-384 scalar
pub const NON_TRUSTED_FW_CONTENT_ECC_KEY_PRIVATE: [u8; 48] = [
    0x42, 0x41, 0x11, 0x4d, 0x6f, 0xb8, 0x78, 0xd0, 0x38, 0x09, 0xd7, 0x7d,
    0xf9, 0x9f, 0x38, 0x52, 0xd7, 0xcf, 0x2d, 0x86, 0x44, 0x53, 0xed, 0x42,
    0xf8, 0x9e, 0x3e, 0xef, 0x03, 0xc5, 0x3c, 0x85, 0x68, 0xdb, 0xd3, 0x91,
    0xfb, 0x0e, 0x5f, 0xfe, 0x34, 0x02, 0x76, 0xb4, 0x7e, 0xbb, 0x5c, 0xf2,
];

/// Trusted root key, Ed25519 seed
pub const ROOT_ED25519_SEED: [u8; 32] = [
    0x9c, 0x02, 0x55, 0x37, 0x2d, 0xd3, 0x81, 0x1a, 0xfd, 0x4a, 0x1e, 0xbc,
    0x53, 0x3a, 0x25, 0x57, 0x6b, 0x78, 0xaa, 0xe6, 0x96, 0x41, 0x43, 0x67,
    0x38, 0x1f, 0x3a, 0x94, 0xe9, 0x2e, 0x05, 0xca,
];

/// Content key, Ed25519 seed
pub const CONTENT_ED25519_SEED: [u8; 32] = [
    0x91, 0x14, 0x1d, 0xaa, 0x3b, 0xf5, 0xab, 0x22, 0x06, 0x14, 0x58, 0xd1,
    0x4c, 0x8f, 0x9e, 0x51, 0xd7, 0xcc, 0x3a, 0x2d, 0x1e, 0x52, 0xcb, 0x99,
    0xa9, 0x99, 0x3f, 0x7e, 0x32, 0xa2, 0xe8, 0x76,
];

/// Trusted root key, RSA-2048 PKCS#8 DER
pub const ROOT_RSA_KEY_PKCS8: &[u8] = &[
    0x30, 0x82, 0x04, 0xbd, 0x02, 0x01, 0x00, 0x30, 0x0d, 0x06, 0x09, 0x2a,
    0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00, 0x04, 0x82,
    0x04, 0xa7, 0x30, 0x82, 0x04, 0xa3, 0x02, 0x01, 0x00, 0x02, 0x82, 0x01,
    0x01, 0x00, 0xa4, 0x7d, 0x18, 0xc1, 0xb2, 0x96, 0x31, 0x85, 0xb9, 0x94,
    0xe1, 0x65, 0x7d, 0x26, 0x34, 0xdb, 0x0b, 0x50, 0x08, 0xdb, 0x37, 0x85,
    0x81, 0x0b, 0x21, 0xac, 0x60, 0xdd, 0xfc, 0x8c, 0xdd, 0x5b, 0x1f, 0x85,
    0x50, 0xd8, 0xd4, 0xda, 0x04, 0xf0, 0x0d, 0x0e, 0x1d, 0xa3, 0x38, 0x12,
    0x5f, 0xbd, 0x54, 0xa7, 0x1a, 0x19, 0x7f, 0xad, 0x1a, 0x11, 0x42, 0xfe,
    0xa7, 0x33, 0x12, 0xa1, 0xe2, 0xe7, 0xf5, 0xcc, 0x2f, 0x23, 0xd6, 0x05,
    0x3a, 0xa7, 0xc5, 0xba, 0xa7, 0x79, 0x8a, 0x35, 0x40, 0xe2, 0x44, 0xac,
    0xa9, 0xd3, 0xbb, 0x8e, 0x01, 0xf9, 0xc5, 0x2c, 0x5b, 0x80, 0xc8, 0x5d,
    0x1f, 0x43, 0x04, 0xf4, 0x9e, 0xfa, 0x20, 0xe4, 0x88, 0x8e, 0x30, 0xb5,
    0x77, 0x6f, 0xf7, 0x4f, 0x7c, 0xf6, 0xc9, 0x14, 0x99, 0x7e, 0x5a, 0xf5,
    0xd9, 0x79, 0x0e, 0x38, 0xf3, 0x5e, 0x05, 0xcd, 0x81, 0x88, 0xce, 0x25,
    0x70, 0x71, 0x54, 0x46, 0x9c, 0x45, 0x86, 0x1a, 0x0b, 0x52, 0xcd, 0x3e,
    0x5c, 0x79, 0xa2, 0x15, 0x02, 0x9b, 0xb5, 0x02, 0x95, 0x82, 0xb9, 0x21,
    0x8d, 0xb6, 0x66, 0xb3, 0xdb, 0xc0, 0xa2, 0x6f, 0x15, 0xab, 0xef, 0xdd,
    0x02, 0x7a, 0x7f, 0x4f, 0x59, 0x6a, 0xdf, 0x13, 0xcc, 0xa5, 0x67, 0xf6,
    0x9e, 0x7a, 0xbd, 0xca, 0xa9, 0x73, 0xed, 0xaa, 0x9b, 0x7a, 0xb5, 0x42,
    0x17, 0x09, 0xfb, 0xa1, 0xeb, 0xe8, 0xe6, 0x31, 0xc6, 0x8a, 0x38, 0xda,
    0xa4, 0xf7, 0xd7, 0xa9, 0xf9, 0x7c, 0x42, 0x88, 0x47, 0x75, 0xde, 0xd8,
    0xf5, 0x1d, 0x87, 0xaf, 0x20, 0x84, 0xa4, 0x2d, 0xc5, 0xde, 0x77, 0x14,
    0xc6, 0xed, 0x68, 0x38, 0x14, 0x5c, 0x28, 0x56, 0x98, 0x1c, 0x9a, 0x3c,
    0x74, 0x91, 0x28, 0x12, 0x01, 0x65, 0x65, 0x3c, 0xfa, 0xf6, 0x45, 0x70,
    0x64, 0xad, 0x00, 0x9d, 0xfe, 0xef, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02,
    0x82, 0x01, 0x00, 0x0f, 0x15, 0xe3, 0xff, 0xdb, 0xbb, 0x97, 0x96, 0x1e,
    0x93, 0x8f, 0x6a, 0x69, 0xe4, 0x67, 0xa3, 0x91, 0x31, 0x89, 0x66, 0x65,
    0x7c, 0xaa, 0x7d, 0x95, 0x5c, 0x84, 0x53, 0xc7, 0x96, 0x39, 0xb4, 0xe2,
    0x3a, 0xad, 0x53, 0xfd, 0x8d, 0x73, 0x37, 0x7a, 0xd3, 0x09, 0x17, 0xcf,
    0x8c, 0x2b, 0xd8, 0xa6, 0xdb, 0x5e, 0x72, 0xe9, 0x39, 0x3c, 0x73, 0x49,
    0xd4, 0x26, 0x0c, 0x72, 0x90, 0x83, 0x49, 0x67, 0xcb, 0x0e, 0xa5, 0xb8,
    0x3a, 0xa9, 0x8a, 0xfa, 0x80, 0xe8, 0x5c, 0x26, 0xb7, 0x44, 0x98, 0x9b,
    0xd8, 0xc4, 0x08, 0x85, 0xa2, 0x7b, 0xfe, 0xe6, 0xbc, 0xef, 0x35, 0x6b,
    0xea, 0xd2, 0x73, 0xa8, 0x90, 0x30, 0xc6, 0x5a, 0xde, 0xea, 0xc1, 0x33,
    0xa9, 0x68, 0xe7, 0x4d, 0x64, 0xae, 0x5e, 0xc9, 0xc9, 0x48, 0x5c, 0x84,
    0xc6, 0x18, 0x68, 0x58, 0x4c, 0x13, 0xd1, 0xd3, 0x31, 0x6a, 0x48, 0x36,
    0x6f, 0x37, 0x41, 0x40, 0xf8, 0xa8, 0x67, 0x14, 0xec, 0x41, 0xbc, 0xf7,
    0xd1, 0xfe, 0xb0, 0xbb, 0x8c, 0x91, 0x4f, 0x5f, 0x7f, 0x74, 0xc5, 0x71,
    0xdf, 0x94, 0x89, 0xa6, 0xb3, 0x4e, 0x92, 0xa1, 0x8e, 0x8a, 0x0a, 0x7f,
    0x46, 0xb2, 0xc7, 0xd0, 0xa7, 0xf3, 0xf9, 0x43, 0xdd, 0xc3, 0x1a, 0x92,
    0x0c, 0xa0, 0x09, 0x24, 0xe2, 0x0c, 0x1e, 0x78, 0xff, 0xf7, 0xb8, 0xe6,
    0x26, 0x00, 0x7f, 0x03, 0x87, 0xbe, 0x61, 0xf9, 0x59, 0xff, 0x51, 0xff,
    0x15, 0x25, 0x02, 0x92, 0x5f, 0x1c, 0x21, 0x80, 0xb4, 0xc2, 0xdd, 0xcf,
    0x51, 0x84, 0xc8, 0x43, 0xab, 0xfb, 0xb8, 0xd0, 0x1d, 0xa0, 0x6a, 0x8a,
    0xfd, 0x24, 0x79, 0x1d, 0x72, 0x1c, 0xa6, 0xa8, 0x72, 0x51, 0x67, 0x9a,
    0x16, 0xb0, 0x7c, 0x46, 0x0f, 0x5f, 0x8d, 0x6f, 0xd1, 0x35, 0x29, 0xf1,
    0x80, 0x52, 0xf8, 0xcc, 0x10, 0xf4, 0x41, 0x02, 0x81, 0x81, 0x00, 0xde,
    0xd6, 0xad, 0x52, 0x32, 0xb7, 0x53, 0xc8, 0x37, 0x7a, 0x67, 0x49, 0x0b,
    0xe9, 0x8e, 0xc0, 0xc3, 0x8a, 0x4a, 0x3b, 0xaa, 0x9b, 0x90, 0x1e, 0x96,
    0x4c, 0x77, 0x10, 0x26, 0xa1, 0x92, 0x3a, 0x39, 0x6d, 0xa2, 0xfa, 0x77,
    0xa0, 0xbd, 0xb6, 0x77, 0x88, 0xcd, 0x03, 0xa1, 0x81, 0x2a, 0xf1, 0xdc,
    0x3f, 0x75, 0x7e, 0xaa, 0x67, 0xd3, 0x5d, 0x71, 0xa0, 0xb0, 0x79, 0x3b,
    0xb2, 0x51, 0x5e, 0x6e, 0xdb, 0x43, 0xc3, 0x04, 0x1d, 0x38, 0x97, 0xc8,
    0x3d, 0x15, 0x80, 0xcb, 0xcc, 0x1c, 0x0e, 0x72, 0xb8, 0x88, 0x1d, 0x5f,
    0xb1, 0xc1, 0x3a, 0x4c, 0x8c, 0x40, 0xa1, 0x1d, 0x91, 0xdc, 0x81, 0xc9,
    0xb6, 0x56, 0x1b, 0xf7, 0x8d, 0x19, 0x25, 0x0c, 0x15, 0x6a, 0xf8, 0x6d,
    0xa6, 0x8a, 0x07, 0xf3, 0x48, 0x51, 0xc3, 0x28, 0x2b, 0xa4, 0x5b, 0x25,
    0xa9, 0x87, 0xb9, 0x23, 0x07, 0x36, 0xc1, 0x02, 0x81, 0x81, 0x00, 0xbc,
    0xf7, 0x81, 0x10, 0x00, 0x51, 0xff, 0x9a, 0xa9, 0x18, 0x9d, 0xea, 0xa3,
    0x9f, 0xf4, 0xfb, 0x7e, 0x97, 0x1e, 0xda, 0xb6, 0xd2, 0x98, 0xe9, 0xc8,
    0xb4, 0xd4, 0x27, 0x3a, 0xfb, 0xc4, 0x00, 0x58, 0x8e, 0xce, 0xa0, 0x76,
    0x3f, 0x1e, 0xb0, 0x14, 0x23, 0x1d, 0xee, 0x69, 0xd8, 0x9c, 0x9e, 0x64,
    0x6a, 0x78, 0x26, 0xe7, 0xd3, 0xd5, 0x47, 0x19, 0x2f, 0x58, 0xd5, 0xd2,
    0xcb, 0xdd, 0x0d, 0x72, 0x61, 0x14, 0x0b, 0xbe, 0x2d, 0x24, 0xe4, 0xd0,
    0x86, 0xe5, 0xbf, 0x59, 0xfe, 0x83, 0x00, 0x45, 0x91, 0x48, 0x72, 0x5d,
    0x10, 0xc0, 0x99, 0x97, 0x56, 0x6f, 0xd6, 0x6a, 0x13, 0x2b, 0x0d, 0x9b,
    0xe5, 0xf2, 0xfd, 0x70, 0xf4, 0xd4, 0xfa, 0x33, 0x10, 0x4e, 0xe6, 0x23,
    0x96, 0x15, 0x57, 0xb6, 0x53, 0x56, 0xcb, 0x6e, 0x41, 0x67, 0x82, 0x33,
    0x61, 0x0c, 0x39, 0x85, 0xfc, 0xd1, 0xaf, 0x02, 0x81, 0x81, 0x00, 0xa1,
    0xbf, 0x4d, 0x9b, 0x46, 0x78, 0xcf, 0x75, 0x9a, 0xdf, 0x5c, 0x2d, 0x27,
    0x5a, 0x66, 0x66, 0x01, 0x09, 0x56, 0x0c, 0xad, 0x2f, 0xb1, 0x92, 0xa2,
    0x21, 0xea, 0xa2, 0x6c, 0x88, 0x06, 0xae, 0x00, 0x95, 0x56, 0x21, 0x5b,
    0xc7, 0xef, 0x2c, 0x8c, 0xe3, 0x5d, 0x7c, 0x6f, 0x34, 0x64, 0xc9, 0x9d,
    0xc6, 0xea, 0x30, 0x00, 0xdc, 0xd0, 0x0d, 0x19, 0xb7, 0x3b, 0xa1, 0x23,
    0xf5, 0xb1, 0x1e, 0x4c, 0x75, 0x17, 0x60, 0x6c, 0x92, 0x11, 0x4c, 0x0a,
    0xea, 0x5b, 0xbb, 0x5b, 0x32, 0x52, 0x83, 0x22, 0x3e, 0x53, 0x7e, 0x8e,
    0xc1, 0x65, 0xb2, 0x3d, 0x71, 0xe8, 0x4f, 0x8a, 0x39, 0x1f, 0xc7, 0x8d,
    0x74, 0xae, 0x58, 0x2a, 0x7d, 0xde, 0x6c, 0x87, 0xb2, 0xdc, 0x2c, 0x6a,
    0xda, 0xe1, 0x82, 0x17, 0xd2, 0xbc, 0x96, 0x5d, 0x88, 0x20, 0x0a, 0x90,
    0xf1, 0xd7, 0x34, 0x48, 0xfa, 0xa9, 0x81, 0x02, 0x81, 0x80, 0x12, 0xb2,
    0x1a, 0x1e, 0xcf, 0x29, 0x4d, 0xb4, 0xab, 0x8e, 0x37, 0xf1, 0x83, 0x06,
    0xcc, 0x62, 0x25, 0x80, 0x26, 0x19, 0x55, 0x85, 0x38, 0x83, 0xc8, 0xcb,
    0xbb, 0x41, 0xb6, 0x60, 0x3a, 0x60, 0x1e, 0x62, 0xe2, 0xa6, 0x95, 0x8c,
    0x61, 0x28, 0xe2, 0x95, 0x26, 0xdc, 0xf3, 0xb3, 0xee, 0xaa, 0xed, 0x1c,
    0x6b, 0x8e, 0xcd, 0xd8, 0xf3, 0x7c, 0xf9, 0x4c, 0xe9, 0xe9, 0x1d, 0xd5,
    0xf5, 0xa4, 0xe2, 0xf0, 0x1f, 0xdf, 0x99, 0x8d, 0x35, 0xdd, 0x3d, 0x94,
    0x5b, 0x1e, 0xb7, 0x74, 0xaa, 0xd9, 0x58, 0x08, 0xab, 0xb6, 0x44, 0xe6,
    0xe7, 0x67, 0x4a, 0xc5, 0xce, 0x82, 0xd4, 0x33, 0xd9, 0x4a, 0x9b, 0x66,
    0x00, 0xc8, 0x7a, 0x68, 0x7e, 0xb9, 0xd2, 0x5b, 0x86, 0xb2, 0xd6, 0x4a,
    0x7f, 0x0a, 0x12, 0x8b, 0xe4, 0x46, 0x74, 0x3e, 0x1c, 0x53, 0x91, 0x69,
    0xc4, 0x9f, 0xdc, 0x55, 0xcb, 0x19, 0x02, 0x81, 0x80, 0x53, 0x4c, 0x2e,
    0x8d, 0x72, 0xc3, 0x58, 0xc6, 0x6c, 0x22, 0x58, 0xd5, 0x65, 0xf9, 0xa7,
    0x62, 0x25, 0xd5, 0x93, 0x75, 0xa6, 0xc4, 0xda, 0xba, 0x0d, 0x58, 0xba,
    0xd3, 0xad, 0xa5, 0x5e, 0x58, 0xee, 0xcc, 0xa5, 0xaf, 0x9d, 0x28, 0xd5,
    0x1c, 0x1f, 0x3c, 0x6b, 0x68, 0x55, 0x2a, 0x04, 0x35, 0x6b, 0x4d, 0xff,
    0x75, 0xd8, 0x3e, 0x00, 0x46, 0xa6, 0x97, 0x02, 0x3c, 0xff, 0xdc, 0xf7,
    0x72, 0x68, 0x35, 0xe7, 0x8d, 0xf2, 0xd0, 0xc3, 0xbf, 0xee, 0xd8, 0x25,
    0x6e, 0x99, 0xca, 0x30, 0x21, 0x1a, 0x1f, 0xdf, 0x0f, 0xc9, 0xc3, 0x23,
    0x6a, 0xd1, 0x23, 0xb0, 0x9d, 0xd0, 0x76, 0x5a, 0x02, 0xa8, 0xfd, 0xba,
    0xcd, 0x0b, 0x1c, 0xcc, 0x70, 0x69, 0x6a, 0xbe, 0xb8, 0xc3, 0xce, 0x4d,
    0x0d, 0x61, 0x58, 0x08, 0xcc, 0xa0, 0x96, 0x85, 0xdf, 0x49, 0x72, 0xd4,
    0x3a, 0x33, 0xe4, 0x0b, 0xf6,
];

/// Content signing key, RSA-2048 PKCS#8 DER
pub const CONTENT_RSA_KEY_PKCS8: &[u8] = &[
    0x30, 0x82, 0x04, 0xbf, 0x02, 0x01, 0x00, 0x30, 0x0d, 0x06, 0x09, 0x2a,
    0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00, 0x04, 0x82,
    0x04, 0xa9, 0x30, 0x82, 0x04, 0xa5, 0x02, 0x01, 0x00, 0x02, 0x82, 0x01,
    0x01, 0x00, 0xd4, 0x27, 0xf3, 0x95, 0x2a, 0xbb, 0x4a, 0xde, 0xa8, 0xe6,
    0xd4, 0x1c, 0x3e, 0xfb, 0x25, 0x66, 0xd4, 0x8d, 0x64, 0x21, 0x8f, 0x90,
    0x3e, 0x3e, 0x71, 0xdb, 0x04, 0x49, 0x2f, 0x65, 0xc9, 0x20, 0xfc, 0xcc,
    0xfc, 0x74, 0x3b, 0xef, 0xae, 0xae, 0xe8, 0xa5, 0xf0, 0x97, 0x73, 0x1f,
    0xba, 0xa8, 0x61, 0x61, 0x30, 0xca, 0xc7, 0x38, 0xbb, 0x5c, 0x3e, 0x4e,
    0xf6, 0x69, 0xdc, 0x64, 0xf0, 0x01, 0x46, 0x94, 0xad, 0xb7, 0xee, 0xcd,
    0xaf, 0x84, 0x53, 0x7a, 0x82, 0x26, 0xc0, 0xd9, 0x57, 0x9e, 0x8d, 0x3d,
    0x10, 0x08, 0x79, 0x30, 0xdb, 0x4f, 0x0e, 0x1c, 0x15, 0x2b, 0xca, 0x29,
    0x27, 0xac, 0x21, 0x4c, 0xf8, 0x84, 0x72, 0x84, 0x62, 0x3f, 0x0e, 0x4f,
    0x81, 0x61, 0x09, 0xea, 0x5b, 0x33, 0x71, 0xf6, 0x94, 0x1d, 0x23, 0xcc,
    0x33, 0xd8, 0x36, 0x29, 0x48, 0x77, 0xb5, 0xcd, 0x4e, 0x4e, 0x0f, 0x97,
    0x1e, 0xf5, 0x57, 0x79, 0xaa, 0x07, 0x92, 0xac, 0x9f, 0xa0, 0x69, 0xe3,
    0x12, 0x13, 0x64, 0x45, 0x87, 0x64, 0xe9, 0x3e, 0x74, 0x95, 0xcf, 0x7b,
    0x17, 0xfe, 0x58, 0x2c, 0x6f, 0x26, 0xad, 0x87, 0x64, 0xf5, 0x0f, 0x1c,
    0x8b, 0x90, 0xe6, 0xd4, 0xa6, 0x59, 0xd4, 0xe7, 0xd6, 0x16, 0xa8, 0x8b,
    0x51, 0x4f, 0x4c, 0xc6, 0xfa, 0x6f, 0x12, 0x5b, 0xc7, 0xbe, 0xb4, 0xbc,
    0x27, 0xa1, 0xf3, 0x0e, 0xee, 0x8f, 0x5d, 0x0b, 0xb0, 0x5c, 0xcf, 0x0f,
    0x6a, 0xa4, 0x3e, 0x9c, 0x88, 0x4c, 0x0b, 0x98, 0xe2, 0xf4, 0xc2, 0x63,
    0xda, 0x90, 0xd8, 0x06, 0x9e, 0x7e, 0xd4, 0x34, 0x65, 0xa4, 0xe3, 0x04,
    0x2d, 0xb9, 0x04, 0xf9, 0x38, 0x57, 0x58, 0x93, 0x3a, 0x66, 0x68, 0x67,
    0xea, 0x73, 0x0b, 0x4a, 0xff, 0xe7, 0xa3, 0x59, 0x9d, 0x9a, 0x91, 0x53,
    0xc4, 0x93, 0x71, 0x6f, 0xb8, 0x6b, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02,
    0x82, 0x01, 0x00, 0x24, 0xa6, 0x60, 0x30, 0x79, 0x28, 0xd0, 0xc6, 0xc5,
    0x43, 0xd7, 0x09, 0xa8, 0x21, 0xa7, 0xb4, 0xeb, 0x6c, 0x1f, 0x8b, 0xa2,
    0xaa, 0xe6, 0xed, 0xcf, 0xaa, 0x67, 0xc3, 0xa2, 0xd2, 0x01, 0x1c, 0x57,
    0x3f, 0xac, 0x2f, 0x02, 0x39, 0xa6, 0x22, 0x26, 0x23, 0xa0, 0x7b, 0xf1,
    0x51, 0xde, 0x63, 0x7f, 0x2b, 0x14, 0x8c, 0x3b, 0x3d, 0x44, 0x34, 0xab,
    0xb8, 0xe5, 0x5d, 0xa5, 0x4a, 0xb4, 0xa1, 0x6b, 0xc9, 0x7c, 0x77, 0x25,
    0x64, 0x57, 0xf9, 0x52, 0x98, 0x7b, 0xca, 0x69, 0x0f, 0x42, 0xd1, 0x2b,
    0x92, 0x0c, 0x66, 0x82, 0x55, 0x1b, 0xd5, 0xbc, 0xd8, 0xc2, 0x19, 0x85,
    0xfb, 0x75, 0x14, 0x89, 0xce, 0x2b, 0xb2, 0x69, 0xbc, 0x0f, 0xe2, 0xd7,
    0xbc, 0x89, 0x5b, 0xb3, 0xa4, 0x4e, 0x2c, 0x05, 0x78, 0x74, 0xde, 0xd1,
    0xd3, 0xd1, 0x72, 0xfc, 0xec, 0x45, 0xce, 0x14, 0x54, 0x8a, 0xbd, 0xa5,
    0xee, 0x62, 0x54, 0xe3, 0x1b, 0x65, 0x91, 0xd6, 0xaa, 0xa2, 0x64, 0x3f,
    0x60, 0x9d, 0xe5, 0x54, 0x2f, 0x89, 0xcc, 0x93, 0x77, 0x02, 0xf6, 0x9a,
    0xce, 0x8a, 0x66, 0x90, 0x3e, 0xf9, 0xfa, 0xe2, 0xdc, 0x03, 0x3f, 0x2b,
    0x31, 0x30, 0x2f, 0x2e, 0xc6, 0x42, 0xfe, 0x01, 0x77, 0x08, 0x36, 0x22,
    0x59, 0x4a, 0xa5, 0x75, 0xf5, 0x6d, 0xfd, 0x84, 0xfd, 0xfd, 0x21, 0xed,
    0x78, 0xf7, 0xa5, 0xb1, 0x91, 0x9e, 0x7f, 0x09, 0xc2, 0x33, 0xfc, 0xb4,
    0x87, 0x34, 0xff, 0x35, 0x1a, 0xbf, 0x9e, 0xb9, 0xbc, 0x4c, 0x80, 0x74,
    0x0b, 0x15, 0xf6, 0x18, 0x6d, 0xb5, 0x70, 0x79, 0x14, 0x1e, 0x80, 0x91,
    0x79, 0x5c, 0xdc, 0xdf, 0x5d, 0xdb, 0xf2, 0xfe, 0x63, 0x38, 0x96, 0xda,
    0x9d, 0xdc, 0x94, 0xdf, 0x75, 0x43, 0x10, 0x75, 0x2a, 0x44, 0x05, 0xa5,
    0x11, 0x94, 0xac, 0x9e, 0xcb, 0xac, 0xa1, 0x02, 0x81, 0x81, 0x00, 0xee,
    0x74, 0x77, 0xe0, 0xb7, 0x66, 0x5b, 0xa4, 0xe5, 0x47, 0xe1, 0xad, 0x04,
    0xa4, 0x14, 0x96, 0x7f, 0x35, 0x68, 0xd0, 0x83, 0xfd, 0x68, 0x58, 0x20,
    0xd1, 0x81, 0xd2, 0xa0, 0x0a, 0x29, 0xae, 0x4e, 0x92, 0x8b, 0x42, 0xed,
    0x01, 0x2c, 0xd0, 0x51, 0x24, 0x7f, 0xd3, 0x18, 0x87, 0x3e, 0x7b, 0xcc,
    0x31, 0x5f, 0x8f, 0x24, 0xb8, 0x91, 0x80, 0x72, 0x90, 0x60, 0xeb, 0x35,
    0x1f, 0xeb, 0x24, 0x93, 0xc3, 0x3f, 0x19, 0x68, 0xec, 0x59, 0xec, 0xab,
    0x22, 0x3b, 0x8d, 0xd5, 0x97, 0xf1, 0xd4, 0xb1, 0x2b, 0x19, 0xe8, 0x04,
    0x19, 0x0b, 0x93, 0xc1, 0x8f, 0x99, 0x7b, 0x0b, 0xd8, 0xdd, 0xcf, 0xf8,
    0x99, 0x27, 0x46, 0x9f, 0x43, 0x6b, 0x59, 0x6e, 0x46, 0x92, 0xa1, 0x1b,
    0x92, 0x58, 0xb0, 0xc9, 0x29, 0x1a, 0x8e, 0xfa, 0x6d, 0xd9, 0x1e, 0x4e,
    0x14, 0x90, 0x6e, 0xb3, 0x08, 0x5f, 0x61, 0x02, 0x81, 0x81, 0x00, 0xe3,
    0xc4, 0x1e, 0x2e, 0xac, 0xef, 0x65, 0x03, 0xbc, 0x74, 0x20, 0xc7, 0x4b,
    0xdb, 0x24, 0x33, 0x59, 0x10, 0x92, 0x70, 0xaf, 0x79, 0xb9, 0xdd, 0x05,
    0x97, 0x24, 0x57, 0x24, 0x5a, 0x6f, 0x1f, 0xd3, 0x9a, 0x18, 0x67, 0xda,
    0xcd, 0xbf, 0x17, 0xcc, 0xae, 0x6d, 0x0b, 0xee, 0x90, 0x3e, 0x20, 0x47,
    0xd3, 0xbe, 0x3f, 0x15, 0xef, 0x74, 0x96, 0xf5, 0x5e, 0x6e, 0xaf, 0x88,
    0x2e, 0xbc, 0x58, 0x42, 0xe6, 0x3f, 0x47, 0xa3, 0x87, 0x41, 0x91, 0xc3,
    0x88, 0xc0, 0xbb, 0x7c, 0x57, 0x3a, 0x9e, 0x14, 0x4c, 0x33, 0x8e, 0xa2,
    0xd4, 0x49, 0xd8, 0x92, 0x76, 0x1e, 0x3b, 0xf3, 0x37, 0x59, 0x8d, 0x65,
    0x1c, 0x8b, 0x0c, 0x78, 0x1f, 0x4c, 0xeb, 0xf4, 0x2d, 0x0b, 0x65, 0x94,
    0x5c, 0xa8, 0xcb, 0x84, 0x59, 0x1f, 0xf3, 0x85, 0xef, 0x75, 0xd7, 0xea,
    0xf1, 0x4a, 0x01, 0x2f, 0xf4, 0x27, 0x4b, 0x02, 0x81, 0x81, 0x00, 0xb2,
    0x49, 0x12, 0x78, 0x49, 0xa7, 0x96, 0x4d, 0xab, 0xc0, 0x1a, 0xd3, 0xa9,
    0xec, 0xa4, 0x18, 0x01, 0xf4, 0x84, 0xf1, 0xa2, 0x3e, 0x0d, 0x8e, 0x16,
    0xbb, 0x8e, 0x3d, 0x54, 0xbb, 0x44, 0x7e, 0xb6, 0xf0, 0x8a, 0x7e, 0xf7,
    0x85, 0x31, 0x64, 0x6f, 0xc6, 0xc2, 0x6b, 0xaa, 0xa3, 0x33, 0xec, 0x8b,
    0xb7, 0x3e, 0xa3, 0x5f, 0xe9, 0x3f, 0xa0, 0xb2, 0x07, 0x90, 0xef, 0x4b,
    0x41, 0x1a, 0x26, 0xb6, 0xf3, 0xfc, 0x71, 0x9b, 0x29, 0x5b, 0xf2, 0xbf,
    0xe1, 0x50, 0x75, 0xb3, 0x85, 0x6f, 0xa2, 0x7e, 0xf4, 0xa2, 0xe1, 0xfe,
    0x6e, 0x5b, 0x61, 0x96, 0x0f, 0x2f, 0xc9, 0xf8, 0x09, 0xa5, 0x8e, 0xa1,
    0x68, 0xa1, 0x1d, 0x04, 0x66, 0xfc, 0x14, 0x59, 0x87, 0x1a, 0x8a, 0xaa,
    0x7a, 0xb9, 0x25, 0x34, 0xc2, 0x2e, 0xc1, 0x48, 0x2c, 0x69, 0x71, 0x67,
    0x1f, 0xa8, 0xfd, 0x9b, 0x8e, 0x5f, 0x01, 0x02, 0x81, 0x81, 0x00, 0xd8,
    0x77, 0xb5, 0xef, 0xca, 0x70, 0x23, 0x63, 0x2f, 0xa2, 0x76, 0xdc, 0xb2,
    0xdd, 0x6d, 0x44, 0x57, 0xeb, 0x86, 0x22, 0x0e, 0xc3, 0xf3, 0xbf, 0x79,
    0xe6, 0xb1, 0xa5, 0x18, 0x69, 0xd2, 0x9f, 0x3e, 0xee, 0x7f, 0x2f, 0x85,
    0x26, 0x71, 0xed, 0x5e, 0x9c, 0x90, 0x0a, 0xfd, 0x0a, 0x9d, 0xe0, 0xf4,
    0x22, 0xeb, 0xf6, 0xed, 0x14, 0x0d, 0x8c, 0xc3, 0x5a, 0xa2, 0x7b, 0xb5,
    0x44, 0x25, 0xc1, 0x04, 0xa3, 0xeb, 0x94, 0x5c, 0x78, 0xd9, 0xfa, 0x7d,
    0x09, 0xe5, 0x92, 0xca, 0x93, 0xe4, 0xa4, 0x04, 0xca, 0x7f, 0x5d, 0x9a,
    0xa7, 0x84, 0x1f, 0x8e, 0xe3, 0x2f, 0xcc, 0xee, 0x54, 0xb6, 0x89, 0xc9,
    0x85, 0x1d, 0x2a, 0x16, 0xa8, 0x38, 0xe5, 0x2f, 0xc5, 0xf7, 0xc4, 0xed,
    0x02, 0x3b, 0x72, 0x61, 0x30, 0x8b, 0x4b, 0x59, 0x09, 0xc2, 0xc8, 0x19,
    0x04, 0x85, 0xbf, 0x27, 0x22, 0x36, 0x8d, 0x02, 0x81, 0x81, 0x00, 0xb3,
    0xd9, 0x8b, 0x8b, 0x5c, 0x1d, 0x59, 0x67, 0x14, 0x6d, 0xc6, 0xa5, 0x09,
    0xff, 0x9c, 0x50, 0xdf, 0x7a, 0xa1, 0x21, 0xf3, 0x51, 0xd4, 0x52, 0x9e,
    0xe3, 0xc8, 0x87, 0x21, 0x53, 0x19, 0xc6, 0x4c, 0x11, 0x6f, 0x0b, 0x81,
    0x4b, 0x43, 0x87, 0xbd, 0xa7, 0x41, 0x99, 0x13, 0xe5, 0xf7, 0xd2, 0xcd,
    0xd3, 0x43, 0x58, 0x4a, 0x33, 0xb6, 0xf9, 0xb1, 0x23, 0x1c, 0x2c, 0x34,
    0xa1, 0xeb, 0x05, 0x89, 0xcc, 0xa5, 0xbc, 0x73, 0x84, 0xf9, 0xdd, 0xcf,
    0x9f, 0xed, 0x35, 0xae, 0xd0, 0x12, 0x51, 0xca, 0x19, 0xfb, 0x68, 0xda,
    0x75, 0x85, 0x36, 0x28, 0x47, 0x71, 0x64, 0x36, 0x84, 0xd3, 0x92, 0xd6,
    0xbe, 0x3f, 0xdd, 0x09, 0xa9, 0xcd, 0xd2, 0x57, 0xa9, 0x68, 0x59, 0x17,
    0xd9, 0xc4, 0xd0, 0xc9, 0x57, 0x93, 0x4c, 0x1c, 0x91, 0xb0, 0x4c, 0xa7,
    0x33, 0x95, 0xf6, 0x45, 0x78, 0xd1, 0x3c,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_distinct() {
        let scalars = [
            ROOT_ECC_KEY_PRIVATE,
            PLATFORM_ROOT_ECC_KEY_PRIVATE,
            TRUSTED_WORLD_ECC_KEY_PRIVATE,
            NON_TRUSTED_WORLD_ECC_KEY_PRIVATE,
            SOC_FW_CONTENT_ECC_KEY_PRIVATE,
            TRUSTED_OS_CONTENT_ECC_KEY_PRIVATE,
            NON_TRUSTED_FW_CONTENT_ECC_KEY_PRIVATE,
        ];
        for (i, a) in scalars.iter().enumerate() {
            // Below the P-384 group order
            assert!(a[0] < 0x80);
            assert!(scalars.iter().skip(i + 1).all(|b| a != b));
        }
        assert_ne!(ROOT_ED25519_SEED, CONTENT_ED25519_SEED);
        assert_ne!(ROOT_RSA_KEY_PKCS8, CONTENT_RSA_KEY_PKCS8);
        // SEQUENCE with a two byte length
        assert_eq!(ROOT_RSA_KEY_PKCS8[..2], [0x30, 0x82]);
    }
}
