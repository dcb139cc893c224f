/*++

Licensed under the Apache-2.0 license.

File Name:

    cfi.rs

Abstract:

    File contains CFI launder and doubled-comparison helpers.

References:
    https://github.com/lowRISC/opentitan/blob/7a61300cf7c409fa68fd892942c1d7b58a7cd4c0/sw/device/lib/base/hardened.h#L260

--*/

use cot_error::{CotError, CotResult};
use core::cfg;
use core::cmp::{PartialEq, PartialOrd};
use core::marker::Copy;

/// CFI Fault Information
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CfiFaultInfo {
    /// CFI Check Equal failed
    CheckEqFail,

    /// CFI Check Not Equal failed
    CheckNeFail,

    /// CFI Check Greater Than Equal failed
    CheckGeFail,
}

impl From<CfiFaultInfo> for CotError {
    /// Converts to this type from the input type.
    fn from(info: CfiFaultInfo) -> CotError {
        match info {
            CfiFaultInfo::CheckEqFail => CotError::CFI_ASSERT_EQ_FAILURE,
            CfiFaultInfo::CheckNeFail => CotError::CFI_ASSERT_NE_FAILURE,
            CfiFaultInfo::CheckGeFail => CotError::CFI_ASSERT_GE_FAILURE,
        }
    }
}

/// Launder the value to prevent compiler optimization
///
/// # Arguments
///
/// * `val` - Value to launder
///
/// # Returns
///
/// `T` - Same value
#[inline(always)]
pub fn cfi_launder<T>(val: T) -> T {
    if cfg!(feature = "cfi") {
        core::hint::black_box(val)
    } else {
        val
    }
}

macro_rules! cfi_check_macro {
    ($name: ident, $op: tt, $trait1: path, $fault_info: ident) => {
        /// CFI Binary Condition Check
        ///
        /// The comparison is evaluated twice, the second time on laundered
        /// copies, so a single skipped or corrupted comparison cannot pass.
        ///
        /// # Arguments
        ///
        /// `lhs` - Left hand side
        /// `rhs` - Right hand side
        ///
        /// # Returns
        ///
        /// `CotResult<()>` - Error carrying the CFI fault code when either
        /// evaluation fails
        #[inline(always)]
        pub fn $name<T>(lhs: T, rhs: T) -> CotResult<()>
        where
            T: $trait1 + Copy,
        {
            if !(lhs $op rhs) {
                return Err(CfiFaultInfo::$fault_info.into());
            }

            // Second check for glitch protection
            if cfg!(feature = "cfi") && !(cfi_launder(lhs) $op cfi_launder(rhs)) {
                return Err(CfiFaultInfo::$fault_info.into());
            }

            Ok(())
        }
    };
}

cfi_check_macro!(cfi_check_eq, ==, PartialEq, CheckEqFail);
cfi_check_macro!(cfi_check_ne, !=, PartialEq, CheckNeFail);
cfi_check_macro!(cfi_check_ge, >=, PartialOrd, CheckGeFail);

#[macro_export]
macro_rules! cfi_check {
    ($cond: expr) => {
        $crate::cfi_check_eq($cond, true)
    };
}
