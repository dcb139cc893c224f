/*++

Licensed under the Apache-2.0 license.

File Name:

    state.rs

Abstract:

    File contains the per-image authentication state.

--*/

use cot_cfi::{cfi_check_eq, cfi_launder};
use cot_error::CotResult;

/// Flag value of an authenticated image
///
/// A multi-bit pattern, so a single flipped bit cannot turn an
/// unauthenticated image into an authenticated one.
const AUTHENTICATED: u32 = 0x5a3c_c3a5;
const UNAUTHENTICATED: u32 = 0;

/// Authentication flag per image, set once and never cleared during a boot
pub struct AuthState<const N: usize> {
    flags: [u32; N],
}

impl<const N: usize> Default for AuthState<N> {
    fn default() -> Self {
        Self {
            flags: [UNAUTHENTICATED; N],
        }
    }
}

impl<const N: usize> AuthState<N> {
    /// Check whether the image at `index` has been authenticated
    pub fn is_authenticated(&self, index: usize) -> bool {
        self.flags.get(index).copied() == Some(AUTHENTICATED)
    }

    /// Re-check an authenticated flag through a laundered comparison
    pub fn check_authenticated(&self, index: usize) -> CotResult<()> {
        let flag = self.flags.get(index).copied().unwrap_or(UNAUTHENTICATED);
        cfi_check_eq(cfi_launder(flag), AUTHENTICATED)
    }

    /// Record that the image at `index` passed
    pub fn set_authenticated(&mut self, index: usize) {
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = AUTHENTICATED;
        }
    }
}
