use serde::{Deserialize, Serialize};

use crate::ids::{TriggerId, ZoneId};
use crate::types::{FlagSet, ScriptAttachType, TriggerFlag};

/// A scripted behavior. The command body is opaque and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: TriggerId,
    pub zone_id: ZoneId,
    pub name: String,
    pub attach_type: ScriptAttachType,
    pub flags: FlagSet<TriggerFlag>,
    pub num_args: i64,
    pub arglist: Vec<String>,
    pub commands: String,
}
