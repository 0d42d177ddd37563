use serde::{Deserialize, Serialize};

use crate::ids::{MobId, ObjectId, RoomId, ShopId, ZoneId};
use crate::types::{FlagSet, ObjectType, ShopFlag};

/// An object a shop always has in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    #[serde(rename = "id")]
    pub object_id: ObjectId,
    /// Stock count; 0 means unlimited.
    pub amount: i64,
}

/// A kind of object the shop will buy from players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopAccept {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub keywords: String,
}

/// Opening window in game hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopHours {
    pub open: i64,
    pub close: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopMessages {
    pub no_such_item: Option<String>,
    pub do_not_buy: Option<String>,
    pub missing_cash: Option<String>,
    pub buy: Option<String>,
    pub sell: Option<String>,
}

/// A shop run by an optional keeper mob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub vnum: i64,
    pub zone_id: ZoneId,
    pub keeper: Option<MobId>,
    pub selling: Vec<ShopItem>,
    pub accepts: Vec<ShopAccept>,
    pub buy_profit: f64,
    pub sell_profit: f64,
    pub temper: i64,
    pub flags: FlagSet<ShopFlag>,
    pub hours: Vec<ShopHours>,
    pub rooms: Vec<RoomId>,
    pub messages: ShopMessages,
}
