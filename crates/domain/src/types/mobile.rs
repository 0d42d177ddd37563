//! Vocabularies describing mobiles.

use super::vocabulary::vocabulary;

vocabulary! {
    /// Physical posture of a mobile.
    pub enum Position ("position") {
        Prone => "PRONE",
        Sitting => "SITTING",
        Kneeling => "KNEELING",
        Standing => "STANDING",
        Flying => "FLYING",
    }
    default = Standing;
}

vocabulary! {
    pub enum Gender ("gender") {
        Neutral => "NEUTRAL",
        Male => "MALE",
        Female => "FEMALE",
        NonBinary => "NON_BINARY",
    }
    default = Neutral;
}

vocabulary! {
    pub enum Race ("race") {
        Human => "HUMAN",
        Elf => "ELF",
        Gnome => "GNOME",
        Dwarf => "DWARF",
        Troll => "TROLL",
        Drow => "DROW",
        Duergar => "DUERGAR",
        Ogre => "OGRE",
        Orc => "ORC",
        HalfElf => "HALF_ELF",
        Barbarian => "BARBARIAN",
        Halfling => "HALFLING",
        Plant => "PLANT",
        Humanoid => "HUMANOID",
        Animal => "ANIMAL",
        DragonGeneral => "DRAGON_GENERAL",
        Giant => "GIANT",
        Other => "OTHER",
        Goblin => "GOBLIN",
        Demon => "DEMON",
        Brownie => "BROWNIE",
        DragonFire => "DRAGON_FIRE",
        DragonFrost => "DRAGON_FROST",
        DragonAcid => "DRAGON_ACID",
        DragonLightning => "DRAGON_LIGHTNING",
        DragonGas => "DRAGON_GAS",
        Dragonborn => "DRAGONBORN",
        Faerie => "FAERIE",
    }
    default = Human;
}

vocabulary! {
    pub enum Size ("size") {
        Tiny => "TINY",
        Small => "SMALL",
        Medium => "MEDIUM",
        Large => "LARGE",
        Huge => "HUGE",
        Giant => "GIANT",
        Gargantuan => "GARGANTUAN",
        Colossal => "COLOSSAL",
        Titanic => "TITANIC",
        Mountainous => "MOUNTAINOUS",
    }
    default = Medium;
}

vocabulary! {
    /// What animates a mobile.
    pub enum LifeForce ("life force") {
        Life => "LIFE",
        Undead => "UNDEAD",
        Magic => "MAGIC",
        Celestial => "CELESTIAL",
        Demonic => "DEMONIC",
        Elemental => "ELEMENTAL",
    }
    default = Life;
}

vocabulary! {
    /// What a mobile's body is made of.
    pub enum Composition ("composition") {
        Flesh => "FLESH",
        Earth => "EARTH",
        Air => "AIR",
        Fire => "FIRE",
        Water => "WATER",
        Ice => "ICE",
        Mist => "MIST",
        Ether => "ETHER",
        Metal => "METAL",
        Stone => "STONE",
        Bone => "BONE",
        Lava => "LAVA",
        Plant => "PLANT",
    }
    default = Flesh;
}

vocabulary! {
    /// State of consciousness.
    pub enum Stance ("stance") {
        Dead => "DEAD",
        Mort => "MORT",
        Incapacitated => "INCAPACITATED",
        Stunned => "STUNNED",
        Sleeping => "SLEEPING",
        Resting => "RESTING",
        Alert => "ALERT",
        Fighting => "FIGHTING",
    }
    default = Alert;
}

vocabulary! {
    pub enum DamageType ("damage type") {
        Hit => "HIT",
        Sting => "STING",
        Whip => "WHIP",
        Slash => "SLASH",
        Bite => "BITE",
        Bludgeon => "BLUDGEON",
        Crush => "CRUSH",
        Pound => "POUND",
        Claw => "CLAW",
        Maul => "MAUL",
        Thrash => "THRASH",
        Pierce => "PIERCE",
        Blast => "BLAST",
        Punch => "PUNCH",
        Stab => "STAB",
        Fire => "FIRE",
        Cold => "COLD",
        Acid => "ACID",
        Shock => "SHOCK",
        Poison => "POISON",
        Align => "ALIGN",
    }
    default = Hit;
}

vocabulary! {
    pub enum MobFlag ("mob flag") {
        Spec => "SPEC",
        Sentinel => "SENTINEL",
        Scavenger => "SCAVENGER",
        IsNpc => "ISNPC",
        Aware => "AWARE",
        Aggressive => "AGGRESSIVE",
        StayZone => "STAY_ZONE",
        Wimpy => "WIMPY",
        AggroEvil => "AGGRO_EVIL",
        AggroGood => "AGGRO_GOOD",
        AggroNeutral => "AGGRO_NEUTRAL",
        Memory => "MEMORY",
        Helper => "HELPER",
        NoCharm => "NO_CHARM",
        NoSummon => "NO_SUMMON",
        NoSleep => "NO_SLEEP",
        NoBash => "NO_BASH",
        NoBlind => "NO_BLIND",
        Mountable => "MOUNTABLE",
        NoEqRestrict => "NO_EQ_RESTRICT",
        FastTrack => "FAST_TRACK",
        SlowTrack => "SLOW_TRACK",
        CastRandom => "CAST_RANDOM",
        NoSilence => "NO_SILENCE",
        Peaceful => "PEACEFUL",
        Protector => "PROTECTOR",
        Peacekeeper => "PEACEKEEPER",
        Haste => "HASTE",
        NoClassAi => "NO_CLASS_AI",
        Teacher => "TEACHER",
        Illusory => "ILLUSORY",
        NoPoison => "NO_POISON",
        Summoned => "SUMMONED",
    }
}

vocabulary! {
    /// Magical effects a mobile or object carries permanently.
    pub enum EffectFlag ("effect flag") {
        Blind => "BLIND",
        Invisible => "INVISIBLE",
        DetectAlign => "DETECT_ALIGN",
        DetectInvis => "DETECT_INVIS",
        DetectMagic => "DETECT_MAGIC",
        SenseLife => "SENSE_LIFE",
        Waterwalk => "WATERWALK",
        Sanctuary => "SANCTUARY",
        Confusion => "CONFUSION",
        Curse => "CURSE",
        Infravision => "INFRAVISION",
        Poison => "POISON",
        ProtectEvil => "PROTECT_EVIL",
        ProtectGood => "PROTECT_GOOD",
        Sleep => "SLEEP",
        NoTrack => "NO_TRACK",
        Tamed => "TAMED",
        Berserk => "BERSERK",
        Sneak => "SNEAK",
        Stealth => "STEALTH",
        Fly => "FLY",
        Charm => "CHARM",
        StoneSkin => "STONE_SKIN",
        Farsee => "FARSEE",
        Haste => "HASTE",
        Blur => "BLUR",
        VitalityBoost => "VITALITY_BOOST",
        Glory => "GLORY",
        Paralyzed => "PARALYZED",
        Fireshield => "FIRESHIELD",
        Coldshield => "COLDSHIELD",
        MinorGlobe => "MINOR_GLOBE",
        MajorGlobe => "MAJOR_GLOBE",
        Harness => "HARNESS",
        OnFire => "ON_FIRE",
        Levitate => "LEVITATE",
        Waterbreath => "WATERBREATH",
        Soulshield => "SOULSHIELD",
        Silence => "SILENCE",
        Ultravision => "ULTRAVISION",
        DetectPoison => "DETECT_POISON",
        NegateHeat => "NEGATE_HEAT",
        NegateCold => "NEGATE_COLD",
        NegateAir => "NEGATE_AIR",
        NegateEarth => "NEGATE_EARTH",
        Blessed => "BLESSED",
        Hex => "HEX",
    }
}
