/*++

Licensed under the Apache-2.0 license.

File Name:

    mod.rs

Abstract:

    File contains the authentication method handlers.

    Handlers see only resolved parameter bytes and the crypto provider. An
    inauthentic image is reported as a method failure code, any other
    problem as the code of what went wrong.

--*/

mod hash;
mod signature;

pub use hash::{parse_digest_info, verify_hash};
pub use signature::{verify_root_key, verify_signature};
