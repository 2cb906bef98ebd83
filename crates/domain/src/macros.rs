//! Macro for implementing Display and FromStr for status enums
//!
//! Status tags cross the agent boundary as plain strings; this keeps the
//! string form of each variant defined in exactly one place.
//!
//! # Example
//!
//! ```rust
//! use slotguard_domain::impl_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Attendance {
//!     Accepted,
//!     Declined,
//! }
//!
//! impl_status_conversions!(Attendance {
//!     Accepted => "accepted",
//!     Declined => "declined",
//! });
//!
//! assert_eq!(Attendance::Declined.to_string(), "declined");
//! assert_eq!("ACCEPTED".parse::<Attendance>(), Ok(Attendance::Accepted));
//! ```

/// Implements `Display` and case-insensitive `FromStr` for a fieldless enum.
#[macro_export]
macro_rules! impl_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical string tag for this status.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
