//! Declarative builder for canonical vocabularies.
//!
//! Every enum and flag set the world model stores is a closed vocabulary of
//! upper-case tokens. The legacy numeric code of a variant is its position in
//! the declaration, which is why variant order must never change.

/// Shared behaviour of a canonical vocabulary.
pub trait Vocabulary: Copy + Ord + Sized + 'static {
    /// Human-readable name of the vocabulary, used in warnings.
    const NAME: &'static str;

    /// Every variant in legacy-code order.
    fn all() -> &'static [Self];

    /// Canonical storage token.
    fn as_str(&self) -> &'static str;

    /// Case-insensitive lookup of a canonical token.
    fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(token))
    }

    /// Lookup by legacy numeric code.
    fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::all().get(index))
            .copied()
    }
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) {
            $($variant:ident => $token:literal),+ $(,)?
        }
        $(default = $default:ident;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::types::Vocabulary for $name {
            const NAME: &'static str = $label;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        $(
            impl Default for $name {
                fn default() -> Self {
                    $name::$default
                }
            }
        )?

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::types::Vocabulary::as_str(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::types::Vocabulary>::parse(s).ok_or_else(|| {
                    $crate::DomainError::parse(format!("Unknown {}: {}", $label, s))
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::types::Vocabulary::as_str(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                token.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use vocabulary;
