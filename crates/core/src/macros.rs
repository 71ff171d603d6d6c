// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`simple_display!`] — `Display` impl mapping enum variants to string literals
//! - [`flag_setters!`] — chainable `bool` setters for flag structs

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// Unit variants match directly; data-carrying variants use `(..)` or `{ .. }`
/// to ignore fields.
///
/// ```ignore
/// crate::simple_display! {
///     LogCategory {
///         SysTrace => "sys-trace",
///         CallTrace => "call-trace",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty {
        $( $variant:ident $( ( $($tuple:tt)* ) )? $( { $($fields:tt)* } )? => $str:expr ),+ $(,)?
    }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $( ( $($tuple)* ) )? $( { $($fields)* } )? => $str, )+
                })
            }
        }
    };
}

/// Generate chainable setters for `bool` fields inside an existing `impl` block.
///
/// ```ignore
/// impl TraceFlags {
///     runner_core::flag_setters! { sys_trace, call_trace }
/// }
///
/// let flags = TraceFlags::default().sys_trace(true);
/// ```
#[macro_export]
macro_rules! flag_setters {
    ($( $field:ident ),+ $(,)?) => {
        $(
            pub fn $field(mut self, enabled: bool) -> Self {
                self.$field = enabled;
                self
            }
        )+
    };
}

#[cfg(test)]
#[path = "macros_tests.rs"]
mod tests;
