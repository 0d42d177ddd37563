use serde::{Deserialize, Serialize};

use crate::ids::ZoneId;
use crate::types::{Climate, Hemisphere, ZoneResetMode};

/// An independently imported region of the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// Highest global ID the zone claims, when the file declares one.
    pub top: Option<i64>,
    /// Minutes between resets.
    pub lifespan: i64,
    pub reset_mode: ZoneResetMode,
    pub hemisphere: Hemisphere,
    pub climate: Climate,
}
