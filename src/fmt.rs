//! Internal logging macros.
//!
//! Forward to `defmt` or `log` depending on the enabled feature (`defmt`
//! wins when both are on) and expand to nothing when neither is enabled.
//! Arguments are still type-checked in the disabled case.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)+);
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::trace!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = ::core::format_args!($($arg)+);
    }};
}

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)+);
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::debug!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = ::core::format_args!($($arg)+);
    }};
}

pub(crate) use debug;
pub(crate) use trace;
