//! Vocabularies for scripted triggers.

use super::vocabulary::vocabulary;

vocabulary! {
    /// What kind of entity a trigger script attaches to.
    pub enum ScriptAttachType ("script attach type") {
        Mob => "MOB",
        Object => "OBJECT",
        World => "WORLD",
    }
    default = Mob;
}

vocabulary! {
    /// Events that fire a trigger.
    pub enum TriggerFlag ("trigger type") {
        Global => "GLOBAL",
        Random => "RANDOM",
        Command => "COMMAND",
        Speech => "SPEECH",
        Act => "ACT",
        Death => "DEATH",
        Greet => "GREET",
        GreetAll => "GREET_ALL",
        Entry => "ENTRY",
        Receive => "RECEIVE",
        Fight => "FIGHT",
        HitPercent => "HIT_PERCENT",
        Bribe => "BRIBE",
        SpeechTo => "SPEECH_TO",
        Load => "LOAD",
        Cast => "CAST",
        Leave => "LEAVE",
        Door => "DOOR",
        Look => "LOOK",
        Time => "TIME",
        Auto => "AUTO",
        Get => "GET",
        Drop => "DROP",
        Give => "GIVE",
        Wear => "WEAR",
        Remove => "REMOVE",
        Use => "USE",
        Timer => "TIMER",
        Consume => "CONSUME",
        Attack => "ATTACK",
        Defense => "DEFENSE",
        Reset => "RESET",
        Preentry => "PREENTRY",
        Postentry => "POSTENTRY",
    }
}
