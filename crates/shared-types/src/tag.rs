//! # Closed Tag Sets
//!
//! A tag set is a fieldless enum whose members each own one canonical
//! name. The name is what travels on the wire; the enum is what the
//! code matches on.
//!
//! ## Invariants
//!
//! - Every member has exactly one canonical name, and no two members
//!   share a name (the member ↔ name mapping is total and injective).
//! - `ALL` lists members in declaration order. Anything that needs a
//!   deterministic iteration order over a tag set uses that order.
//! - Name lookup is exact: no case folding, no trimming.

use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::UnknownTagError;

/// A closed enumeration with canonical names.
pub trait Tag: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Human readable name of the set, used in error messages.
    const KIND: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Canonical wire name of this member.
    fn name(&self) -> &'static str;

    /// Resolve a canonical name back to its member.
    fn from_name(name: &str) -> Result<Self, UnknownTagError> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == name)
            .ok_or_else(|| UnknownTagError::new(Self::KIND, name))
    }

    /// Iterate all members in declaration order.
    fn iter() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::ALL.iter().copied()
    }
}

/// Implements `Display`, `FromStr`, `Serialize` and `Deserialize` for a
/// [`Tag`] so that it always travels as its canonical name.
///
/// The implementing crate must depend on `serde`.
///
/// # Example
///
/// ```ignore
/// shared_types::impl_tag_traits!(OperatingSystem);
/// ```
#[macro_export]
macro_rules! impl_tag_traits {
    ($tag:ty) => {
        impl ::std::fmt::Display for $tag {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Tag::name(self))
            }
        }

        impl ::std::str::FromStr for $tag {
            type Err = $crate::UnknownTagError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$tag as $crate::Tag>::from_name(s)
            }
        }

        impl ::serde::Serialize for $tag {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::Tag::name(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $tag {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let name = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$tag as $crate::Tag>::from_name(&name).map_err(::serde::de::Error::custom)
            }
        }
    };
}
