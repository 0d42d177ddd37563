//! Vocabularies for zones, rooms, and exits.

use super::vocabulary::vocabulary;

vocabulary! {
    /// When a zone re-runs its reset rules.
    pub enum ZoneResetMode ("zone reset mode") {
        Never => "NEVER",
        Empty => "EMPTY",
        Normal => "NORMAL",
    }
    default = Normal;
}

vocabulary! {
    pub enum Hemisphere ("hemisphere") {
        Northwest => "NORTHWEST",
        Northeast => "NORTHEAST",
        Southwest => "SOUTHWEST",
        Southeast => "SOUTHEAST",
    }
    default = Northwest;
}

vocabulary! {
    pub enum Climate ("climate") {
        None => "NONE",
        Semiarid => "SEMIARID",
        Arid => "ARID",
        Oceanic => "OCEANIC",
        Temperate => "TEMPERATE",
        Subpolar => "SUBPOLAR",
        Polar => "POLAR",
    }
    default = None;
}

vocabulary! {
    /// Terrain of a room.
    pub enum Sector ("sector") {
        Structure => "STRUCTURE",
        City => "CITY",
        Field => "FIELD",
        Forest => "FOREST",
        Hills => "HILLS",
        Mountain => "MOUNTAIN",
        Shallows => "SHALLOWS",
        Water => "WATER",
        Underwater => "UNDERWATER",
        Air => "AIR",
        Road => "ROAD",
        Grasslands => "GRASSLANDS",
        Cave => "CAVE",
        Ruins => "RUINS",
        Swamp => "SWAMP",
        Beach => "BEACH",
        Underdark => "UNDERDARK",
        AstralPlane => "ASTRALPLANE",
        AirPlane => "AIRPLANE",
        FirePlane => "FIREPLANE",
        EarthPlane => "EARTHPLANE",
        EtherealPlane => "ETHEREALPLANE",
        Avernus => "AVERNUS",
    }
    default = Structure;
}

vocabulary! {
    pub enum RoomFlag ("room flag") {
        Dark => "DARK",
        Death => "DEATH",
        NoMob => "NO_MOB",
        Indoors => "INDOORS",
        Peaceful => "PEACEFUL",
        Soundproof => "SOUNDPROOF",
        NoTrack => "NO_TRACK",
        NoMagic => "NO_MAGIC",
        Tunnel => "TUNNEL",
        Private => "PRIVATE",
        Godroom => "GODROOM",
        House => "HOUSE",
        HouseCrash => "HOUSE_CRASH",
        Atrium => "ATRIUM",
        Olc => "OLC",
        BfsMark => "BFS_MARK",
        NoWell => "NO_WELL",
        NoRecall => "NO_RECALL",
        Underdark => "UNDERDARK",
        NoScan => "NO_SCAN",
        NoShift => "NO_SHIFT",
        Guildhall => "GUILDHALL",
        Arena => "ARENA",
        Observatory => "OBSERVATORY",
        Altar => "ALTAR",
    }
}

vocabulary! {
    pub enum Direction ("direction") {
        North => "NORTH",
        East => "EAST",
        South => "SOUTH",
        West => "WEST",
        Up => "UP",
        Down => "DOWN",
    }
}

vocabulary! {
    pub enum ExitFlag ("exit flag") {
        IsDoor => "IS_DOOR",
        Closed => "CLOSED",
        Locked => "LOCKED",
        Pickproof => "PICKPROOF",
        Hidden => "HIDDEN",
        Description => "DESCRIPTION",
    }
}
