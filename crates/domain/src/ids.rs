use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Zone-scoped vnums wrap at this size.
pub const VNUMS_PER_ZONE: i64 = 1000;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self).map_err(|_| {
                    let name = stringify!($name);
                    DomainError::invalid_id(format!("{name} `{s}` is not a number"))
                })
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(ZoneId);
define_id!(MobId);
define_id!(ObjectId);
define_id!(RoomId);
define_id!(ShopId);

/// Stable string key of a trigger.
///
/// Legacy files reference triggers by their numeric ID, so the key is that
/// number rendered in decimal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(String);

impl TriggerId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for TriggerId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the zone-scoped vnum for a global ID.
///
/// The remainder keeps the sign of `id`; any non-positive remainder maps to
/// [`VNUMS_PER_ZONE`], so exact multiples of 1000 become 1000.
pub fn derive_vnum(id: i64) -> i64 {
    let rem = id % VNUMS_PER_ZONE;
    if rem > 0 {
        rem
    } else {
        VNUMS_PER_ZONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vnum_of_exact_multiple_is_floored() {
        assert_eq!(derive_vnum(2000), 1000);
        assert_eq!(derive_vnum(1000), 1000);
    }

    #[test]
    fn vnum_keeps_positive_remainder() {
        assert_eq!(derive_vnum(1999), 999);
        assert_eq!(derive_vnum(3001), 1);
        assert_eq!(derive_vnum(30_045), 45);
    }

    #[test]
    fn vnum_of_zero_and_negative_ids() {
        assert_eq!(derive_vnum(0), 1000);
        assert_eq!(derive_vnum(-5), 1000);
        assert_eq!(derive_vnum(-1000), 1000);
    }

    #[test]
    fn trigger_id_renders_legacy_number() {
        assert_eq!(TriggerId::from(3001).as_str(), "3001");
    }

    #[test]
    fn ids_parse_from_trimmed_text() {
        assert_eq!(" 3001 ".parse::<RoomId>(), Ok(RoomId::new(3001)));
        let err = "north".parse::<ZoneId>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid ID format: ZoneId `north` is not a number");
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&ZoneId::new(30)).unwrap();
        assert_eq!(json, "30");
    }
}
