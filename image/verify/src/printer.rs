/*++

Licensed under the Apache-2.0 license.

File Name:

    printer.rs

Abstract:

    Diagnostic channel of the verification engine.

--*/
use core::convert::Infallible;
use ufmt::uWrite;

/// Diagnostic sink
///
/// Hosted builds write to standard error. Firmware builds drop the output.
#[derive(Default)]
pub struct Printer;

impl uWrite for Printer {
    type Error = Infallible;

    #[inline(never)]
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        #[cfg(feature = "std")]
        eprint!("{s}");
        #[cfg(not(feature = "std"))]
        let _ = s;
        Ok(())
    }
}

#[macro_export]
macro_rules! cprint {
    ($($tt:tt)*) => {{
        let _ = ufmt::uwrite!(&mut $crate::printer::Printer, $($tt)*);
    }}
}

#[macro_export]
macro_rules! cprintln {
    ($($tt:tt)*) => {{
        let _ = ufmt::uwriteln!(&mut $crate::printer::Printer, $($tt)*);
    }}
}
