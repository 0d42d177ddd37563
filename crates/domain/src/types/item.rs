//! Vocabularies describing objects and how they are worn.

use super::vocabulary::vocabulary;

vocabulary! {
    pub enum ObjectType ("object type") {
        Nothing => "NOTHING",
        Light => "LIGHT",
        Scroll => "SCROLL",
        Wand => "WAND",
        Staff => "STAFF",
        Weapon => "WEAPON",
        Fireweapon => "FIREWEAPON",
        Missile => "MISSILE",
        Treasure => "TREASURE",
        Armor => "ARMOR",
        Potion => "POTION",
        Worn => "WORN",
        Other => "OTHER",
        Trash => "TRASH",
        Trap => "TRAP",
        Container => "CONTAINER",
        Note => "NOTE",
        DrinkContainer => "DRINKCONTAINER",
        Key => "KEY",
        Food => "FOOD",
        Money => "MONEY",
        Pen => "PEN",
        Boat => "BOAT",
        Fountain => "FOUNTAIN",
        Portal => "PORTAL",
        Rope => "ROPE",
        Spellbook => "SPELLBOOK",
        Wall => "WALL",
        Touchstone => "TOUCHSTONE",
        Board => "BOARD",
        Instrument => "INSTRUMENT",
    }
    default = Other;
}

vocabulary! {
    pub enum ObjectFlag ("object flag") {
        Glow => "GLOW",
        Hum => "HUM",
        NoRent => "NO_RENT",
        AntiBerserker => "ANTI_BERSERKER",
        NoInvisible => "NO_INVISIBLE",
        Invisible => "INVISIBLE",
        Magic => "MAGIC",
        NoDrop => "NO_DROP",
        Permanent => "PERMANENT",
        AntiGood => "ANTI_GOOD",
        AntiEvil => "ANTI_EVIL",
        AntiNeutral => "ANTI_NEUTRAL",
        AntiSorcerer => "ANTI_SORCERER",
        AntiCleric => "ANTI_CLERIC",
        AntiRogue => "ANTI_ROGUE",
        AntiWarrior => "ANTI_WARRIOR",
        NoSell => "NO_SELL",
        AntiPaladin => "ANTI_PALADIN",
        AntiAntiPaladin => "ANTI_ANTI_PALADIN",
        AntiRanger => "ANTI_RANGER",
        AntiDruid => "ANTI_DRUID",
        AntiShaman => "ANTI_SHAMAN",
        AntiMonk => "ANTI_MONK",
        Float => "FLOAT",
        NoFall => "NO_FALL",
        NoDecay => "NO_DECAY",
        NoLocate => "NO_LOCATE",
        NoBurn => "NO_BURN",
        TwoHanded => "TWO_HANDED",
        Decomposing => "DECOMPOSING",
        WasDisarmed => "WAS_DISARMED",
    }
}

vocabulary! {
    /// Body slots an object can be worn on.
    pub enum WearFlag ("wear flag") {
        Take => "TAKE",
        Finger => "FINGER",
        Neck => "NECK",
        Body => "BODY",
        Head => "HEAD",
        Legs => "LEGS",
        Feet => "FEET",
        Hands => "HANDS",
        Arms => "ARMS",
        Shield => "SHIELD",
        About => "ABOUT",
        Waist => "WAIST",
        Wrist => "WRIST",
        Wield => "WIELD",
        Hold => "HOLD",
        TwoHandWield => "TWO_HAND_WIELD",
        Eyes => "EYES",
        Face => "FACE",
        Ear => "EAR",
        Badge => "BADGE",
        Belt => "BELT",
        Hover => "HOVER",
    }
}

vocabulary! {
    /// Equipment position an equipped reset item is placed in.
    pub enum WearLocation ("wear location") {
        Light => "LIGHT",
        FingerRight => "FINGER_R",
        FingerLeft => "FINGER_L",
        Neck1 => "NECK_1",
        Neck2 => "NECK_2",
        Body => "BODY",
        Head => "HEAD",
        Legs => "LEGS",
        Feet => "FEET",
        Hands => "HANDS",
        Arms => "ARMS",
        Shield => "SHIELD",
        About => "ABOUT",
        Waist => "WAIST",
        WristRight => "WRIST_R",
        WristLeft => "WRIST_L",
        Wield => "WIELD",
        Wield2 => "WIELD2",
        Hold => "HOLD",
        Hold2 => "HOLD2",
        TwoHandWield => "TWO_HAND_WIELD",
        Eyes => "EYES",
        Face => "FACE",
        EarLeft => "LEAR",
        EarRight => "REAR",
        Badge => "BADGE",
        OnBelt => "ON_BELT",
        Hover => "HOVER",
    }
    default = Hold;
}

vocabulary! {
    /// Attribute modified by an object affect.
    pub enum ApplyLocation ("apply location") {
        None => "NONE",
        Str => "STR",
        Dex => "DEX",
        Int => "INT",
        Wis => "WIS",
        Con => "CON",
        Cha => "CHA",
        Class => "CLASS",
        Level => "LEVEL",
        Age => "AGE",
        Weight => "CHAR_WEIGHT",
        Height => "CHAR_HEIGHT",
        Mana => "MANA",
        Hit => "HIT",
        Move => "MOVE",
        Gold => "GOLD",
        Exp => "EXP",
        Ac => "AC",
        Hitroll => "HITROLL",
        Damroll => "DAMROLL",
        SavingParalysis => "SAVING_PARA",
        SavingRod => "SAVING_ROD",
        SavingPetrification => "SAVING_PETRI",
        SavingBreath => "SAVING_BREATH",
        SavingSpell => "SAVING_SPELL",
        Size => "SIZE",
        HitRegen => "HIT_REGEN",
        Focus => "FOCUS",
        Perception => "PERCEPTION",
        Concealment => "CONCEALMENT",
        Composition => "COMPOSITION",
    }
    default = None;
}
