/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    File contains the host-side generator for Chain of Trust images:
    DER encoding, certificates, containers and signing keys.

--*/

mod cert;
mod container;
pub mod der;
mod key;

pub use cert::{CertBuilder, Extension};
pub use container::container;
pub use key::SigningKey;
