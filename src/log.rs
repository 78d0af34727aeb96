//! Logging macros for the library.
//!
//! On target these forward to `defmt`. Without the `defmt` feature they
//! only borrow their arguments, so host builds carry no logger and no
//! format strings.

#[cfg(feature = "defmt")]
#[doc(hidden)]
pub use defmt as __defmt;

#[macro_export]
#[cfg(feature = "defmt")]
macro_rules! kp_trace {
    ($($arg:tt)*) => {
        $crate::log::__defmt::trace!($($arg)*);
    }
}

#[macro_export]
#[cfg(not(feature = "defmt"))]
macro_rules! kp_trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $( let _ = &$arg; )*
    };
}

#[macro_export]
#[cfg(feature = "defmt")]
macro_rules! kp_debug {
    ($($arg:tt)*) => {
        $crate::log::__defmt::debug!($($arg)*);
    }
}

#[macro_export]
#[cfg(not(feature = "defmt"))]
macro_rules! kp_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $( let _ = &$arg; )*
    };
}

#[macro_export]
#[cfg(feature = "defmt")]
macro_rules! kp_info {
    ($($arg:tt)*) => {
        $crate::log::__defmt::info!($($arg)*);
    }
}

#[macro_export]
#[cfg(not(feature = "defmt"))]
macro_rules! kp_info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $( let _ = &$arg; )*
    };
}

#[macro_export]
#[cfg(feature = "defmt")]
macro_rules! kp_warn {
    ($($arg:tt)*) => {
        $crate::log::__defmt::warn!($($arg)*);
    }
}

#[macro_export]
#[cfg(not(feature = "defmt"))]
macro_rules! kp_warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $( let _ = &$arg; )*
    };
}
