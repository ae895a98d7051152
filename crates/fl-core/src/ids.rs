//! Strongly typed, name-based identifier wrappers.
//!
//! Every entity in a round is keyed by the unique name it carries in the
//! dataset ("BC001", "Truck A", "Depot Nord").  Wrapping the string in a
//! dedicated type per entity keeps an order id from being passed where a
//! location is expected.  All ids are `Ord` so they can key `BTreeMap`s,
//! which the ledger and simulator rely on for deterministic iteration.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Generate a typed id wrapper around an owned name.
macro_rules! named_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// `true` for an empty or whitespace-only name, never a valid
            /// reference to a dataset entity.
            #[inline]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;
            #[inline]
            fn deref(&self) -> &str {
                &self.0
            }
        }
    };
}

named_id! {
    /// Unique order identifier (e.g. `"BC001"`).
    pub struct OrderId;
}

named_id! {
    /// Unique vehicle name; also the key of its route queue.
    pub struct VehicleId;
}

named_id! {
    /// Name of a delivery point (home base, warehouse or delivery address).
    /// Ledger locations are delivery point names.
    pub struct LocationId;
}

named_id! {
    /// Unique zone name.
    pub struct ZoneId;
}
