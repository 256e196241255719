//! # plainrec SQL
//!
//! Nullable wrapper types with an explicit validity flag.
//!
//! Each wrapper carries the value in a field named after the lowercased kind
//! (`string`, `time`, `int32`, ...) and a `valid` flag that distinguishes
//! "absent" from "present with a zero value". These are the types the
//! plainrec generator unwraps into plain fields.

use chrono::{DateTime, Utc};

macro_rules! nullable {
    ($(#[$doc:meta])* $name:ident, $field:ident: $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            /// Wrapped value, meaningful only when `valid` is true.
            pub $field: $ty,
            /// True if the value is present.
            pub valid: bool,
        }

        impl $name {
            /// Creates a present value.
            #[must_use]
            pub fn new($field: $ty) -> Self {
                Self { $field, valid: true }
            }

            /// Creates an absent value.
            #[must_use]
            pub fn null() -> Self {
                Self::default()
            }

            /// Returns the value if present.
            #[must_use]
            pub fn get(&self) -> Option<&$ty> {
                self.valid.then_some(&self.$field)
            }
        }

        impl From<Option<$ty>> for $name {
            fn from(value: Option<$ty>) -> Self {
                value.map_or_else(Self::null, Self::new)
            }
        }

        impl From<$name> for Option<$ty> {
            fn from(value: $name) -> Self {
                value.valid.then_some(value.$field)
            }
        }
    };
}

nullable!(
    /// Nullable UTC timestamp.
    NullTime, time: DateTime<Utc>
);
nullable!(
    /// Nullable string.
    NullString, string: String
);
nullable!(
    /// Nullable boolean.
    NullBool, bool: bool
);
nullable!(
    /// Nullable byte.
    NullByte, byte: u8
);
nullable!(
    /// Nullable 16-bit integer.
    NullInt16, int16: i16
);
nullable!(
    /// Nullable 32-bit integer.
    NullInt32, int32: i32
);
nullable!(
    /// Nullable 64-bit integer.
    NullInt64, int64: i64
);
nullable!(
    /// Nullable 64-bit float.
    NullFloat64, float64: f64
);
