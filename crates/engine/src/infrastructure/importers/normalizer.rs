//! Normalization of legacy world files into the canonical world model.
//!
//! Every legacy encoding is resolved here: numeric codes through the
//! vocabularies' code order, string tokens case-insensitively and through
//! fixed alias tables. Nothing raw survives past this module. Normalization
//! is total; anything unmappable becomes a default or is dropped, and a
//! warning is recorded.

use std::collections::BTreeMap;

use muditor_domain::{
    derive_vnum, Affect, ApplyLocation, CarriedItem, Climate, Composition, DamageType, Dice,
    Direction, EffectFlag, EquippedItem, Exit, ExitFlag, ExtraDescription, FlagSet, Gender,
    Hemisphere, LifeForce, Mob, MobFlag, MobId, MobReset, Money, Object, ObjectFlag, ObjectId,
    ObjectType, Position, Race, Room, RoomFlag, RoomId, ScriptAttachType, Sector, Shop,
    ShopAccept, ShopFlag, ShopHours, ShopId, ShopItem, ShopMessages, Size, Stance, Trigger,
    TriggerFlag, TriggerId, Vocabulary, WearFlag, WearLocation, WorldFile, Zone, ZoneId,
    ZoneResetMode,
};

use super::legacy_types::{
    LegacyAffect, LegacyCode, LegacyDice, LegacyExit, LegacyExtraDescription, LegacyFlags,
    LegacyMob, LegacyMobReset, LegacyMoney, LegacyObject, LegacyRoom, LegacyShop, LegacyText,
    LegacyTrigger, LegacyValues, LegacyWorldFile, LegacyZone,
};
use super::validation::{EntityKind, ValidationError};

const DEFAULT_LIFESPAN: i64 = 30;
const DEFAULT_PROFIT: f64 = 1.0;

// === Alias tables ===

/// A vocabulary with the legacy spellings it also accepts.
trait LegacyVocabulary: Vocabulary {
    /// Upper-case alias to canonical variant.
    const ALIASES: &'static [(&'static str, Self)] = &[];
}

impl LegacyVocabulary for Position {}
impl LegacyVocabulary for Race {}
impl LegacyVocabulary for Size {}
impl LegacyVocabulary for LifeForce {}
impl LegacyVocabulary for Composition {}
impl LegacyVocabulary for Stance {}
impl LegacyVocabulary for DamageType {}
impl LegacyVocabulary for ObjectType {}
impl LegacyVocabulary for ApplyLocation {}
impl LegacyVocabulary for ZoneResetMode {}
impl LegacyVocabulary for Hemisphere {}
impl LegacyVocabulary for Climate {}
impl LegacyVocabulary for Sector {}
impl LegacyVocabulary for ShopFlag {}

impl LegacyVocabulary for Gender {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("NEUTER", Gender::Neutral),
        ("NONBINARY", Gender::NonBinary),
    ];
}

impl LegacyVocabulary for WearLocation {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("2HWIELD", WearLocation::TwoHandWield),
        ("TWO_HAND", WearLocation::TwoHandWield),
        ("ABOUTBODY", WearLocation::About),
        ("BELT", WearLocation::OnBelt),
    ];
}

impl LegacyVocabulary for MobFlag {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("AGGR", MobFlag::Aggressive),
        ("AGGR_EVIL", MobFlag::AggroEvil),
        ("AGGR_GOOD", MobFlag::AggroGood),
        ("AGGR_NEUTRAL", MobFlag::AggroNeutral),
        ("IS_NPC", MobFlag::IsNpc),
        ("STAYZONE", MobFlag::StayZone),
        ("NOCHARM", MobFlag::NoCharm),
        ("NOSUMMON", MobFlag::NoSummon),
        ("NOSLEEP", MobFlag::NoSleep),
        ("NOBASH", MobFlag::NoBash),
        ("NOBLIND", MobFlag::NoBlind),
        ("NOPOISON", MobFlag::NoPoison),
        ("NOSILENCE", MobFlag::NoSilence),
    ];
}

impl LegacyVocabulary for EffectFlag {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("INVIS", EffectFlag::Invisible),
        ("DET_ALIGN", EffectFlag::DetectAlign),
        ("DET_INVIS", EffectFlag::DetectInvis),
        ("DET_MAGIC", EffectFlag::DetectMagic),
        ("PROT_EVIL", EffectFlag::ProtectEvil),
        ("PROT_GOOD", EffectFlag::ProtectGood),
        ("NOTRACK", EffectFlag::NoTrack),
        ("STONESKIN", EffectFlag::StoneSkin),
    ];
}

impl LegacyVocabulary for ObjectFlag {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("NODROP", ObjectFlag::NoDrop),
        ("NORENT", ObjectFlag::NoRent),
        ("NOSELL", ObjectFlag::NoSell),
        ("NOINVIS", ObjectFlag::NoInvisible),
        ("INVIS", ObjectFlag::Invisible),
        ("NODECAY", ObjectFlag::NoDecay),
        ("NOLOCATE", ObjectFlag::NoLocate),
        ("NOBURN", ObjectFlag::NoBurn),
        ("NOFALL", ObjectFlag::NoFall),
        ("2HANDED", ObjectFlag::TwoHanded),
    ];
}

impl LegacyVocabulary for WearFlag {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("ABOUTBODY", WearFlag::About),
        ("2HWIELD", WearFlag::TwoHandWield),
        ("TWO_HAND", WearFlag::TwoHandWield),
    ];
}

impl LegacyVocabulary for RoomFlag {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("NOMOB", RoomFlag::NoMob),
        ("NOMAGIC", RoomFlag::NoMagic),
        ("NOTRACK", RoomFlag::NoTrack),
        ("NORECALL", RoomFlag::NoRecall),
        ("NOSCAN", RoomFlag::NoScan),
    ];
}

impl LegacyVocabulary for Direction {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("N", Direction::North),
        ("E", Direction::East),
        ("S", Direction::South),
        ("W", Direction::West),
        ("U", Direction::Up),
        ("D", Direction::Down),
    ];
}

impl LegacyVocabulary for ExitFlag {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("DOOR", ExitFlag::IsDoor),
        ("ISDOOR", ExitFlag::IsDoor),
    ];
}

impl LegacyVocabulary for ScriptAttachType {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("MOBILE", ScriptAttachType::Mob),
        ("OBJ", ScriptAttachType::Object),
        ("ROOM", ScriptAttachType::World),
        ("ZONE", ScriptAttachType::World),
    ];
}

impl LegacyVocabulary for TriggerFlag {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("GREETALL", TriggerFlag::GreetAll),
        ("HITPRCNT", TriggerFlag::HitPercent),
        ("HIT_PRCNT", TriggerFlag::HitPercent),
        ("SPEECHTO", TriggerFlag::SpeechTo),
    ];
}

/// Upper-case with spaces and hyphens folded to underscores.
fn canonical_key(token: &str) -> String {
    token
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// Resolve one token: numeric text is a legacy code, otherwise a canonical
/// token or an alias, compared case-insensitively.
fn lookup_token<V: LegacyVocabulary>(token: &str) -> Option<V> {
    let key = canonical_key(token);
    if let Ok(code) = key.parse::<i64>() {
        return V::from_code(code);
    }
    V::parse(&key).or_else(|| {
        V::ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, variant)| *variant)
    })
}

fn lookup_code<V: LegacyVocabulary>(value: &LegacyCode) -> Option<V> {
    match value {
        LegacyCode::Code(code) => V::from_code(*code),
        LegacyCode::Token(token) => lookup_token(token),
    }
}

fn is_blank(value: &LegacyCode) -> bool {
    matches!(value, LegacyCode::Token(token) if token.trim().is_empty())
}

fn describe(value: &LegacyCode) -> String {
    match value {
        LegacyCode::Code(code) => code.to_string(),
        LegacyCode::Token(token) => token.clone(),
    }
}

// === Warning scope ===

/// Warnings for one entity.
struct Scope<'a> {
    warnings: &'a mut Vec<ValidationError>,
    kind: EntityKind,
    id: String,
}

impl<'a> Scope<'a> {
    fn new(warnings: &'a mut Vec<ValidationError>, kind: EntityKind, id: impl ToString) -> Self {
        Self {
            warnings,
            kind,
            id: id.to_string(),
        }
    }

    fn warn(&mut self, message: String) {
        tracing::warn!(entity = %self.kind, id = %self.id, "{}", message);
        self.warnings
            .push(ValidationError::for_entity(self.kind, &self.id, message));
    }

    /// A single-valued field. Absent values take the default silently.
    fn single<V: LegacyVocabulary + Default>(
        &mut self,
        field: &str,
        value: Option<&LegacyCode>,
    ) -> V {
        match value {
            None => V::default(),
            Some(raw) if is_blank(raw) => V::default(),
            Some(raw) => lookup_code(raw).unwrap_or_else(|| {
                let fallback = V::default();
                self.warn(format!(
                    "unknown {} `{}` in `{}`, using {}",
                    V::NAME,
                    describe(raw),
                    field,
                    fallback.as_str()
                ));
                fallback
            }),
        }
    }

    /// A flag field. Unknown tokens are dropped.
    fn flags<V: LegacyVocabulary>(
        &mut self,
        field: &str,
        value: Option<&LegacyFlags>,
    ) -> FlagSet<V> {
        let tokens: Vec<LegacyCode> = match value {
            None => Vec::new(),
            Some(LegacyFlags::List(items)) => items.clone(),
            Some(LegacyFlags::Text(text)) => text
                .split(|c: char| c.is_whitespace() || c == '|' || c == ',')
                .filter(|token| !token.is_empty())
                .map(|token| LegacyCode::Token(token.to_string()))
                .collect(),
        };

        let mut set = FlagSet::new();
        for token in &tokens {
            if is_blank(token) {
                continue;
            }
            match lookup_code::<V>(token) {
                Some(flag) => {
                    set.insert(flag);
                }
                None => self.warn(format!(
                    "dropped unknown {} `{}` in `{}`",
                    V::NAME,
                    describe(token),
                    field
                )),
            }
        }
        set
    }

    fn percent(&mut self, field: &str, value: Option<f64>) -> i64 {
        let Some(raw) = value else {
            return 100;
        };
        let rounded = raw.round() as i64;
        let clamped = rounded.clamp(0, 100);
        if clamped != rounded || raw.is_nan() {
            self.warn(format!("`{field}` {raw} clamped to {clamped}"));
        }
        clamped
    }
}

// === Shared field shapes ===

fn keyword_list(text: &LegacyText) -> Vec<String> {
    let words: Vec<&str> = match text {
        LegacyText::Text(text) => text.split_whitespace().collect(),
        LegacyText::List(items) => items.iter().flat_map(|item| item.split_whitespace()).collect(),
    };

    let mut keywords: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let word = word.to_lowercase();
        if !keywords.contains(&word) {
            keywords.push(word);
        }
    }
    keywords
}

/// The first non-empty keyword source wins.
fn keywords<'a>(sources: impl IntoIterator<Item = Option<&'a LegacyText>>) -> Vec<String> {
    sources
        .into_iter()
        .flatten()
        .map(keyword_list)
        .find(|list| !list.is_empty())
        .unwrap_or_default()
}

fn argument_list(text: Option<LegacyText>) -> Vec<String> {
    match text {
        None => Vec::new(),
        Some(LegacyText::Text(text)) => text.split_whitespace().map(str::to_string).collect(),
        Some(LegacyText::List(items)) => items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    }
}

fn script_body(text: Option<LegacyText>) -> String {
    match text {
        None => String::new(),
        Some(LegacyText::Text(text)) => text,
        Some(LegacyText::List(lines)) => lines.join("\n"),
    }
}

fn trigger_ids(raw: Vec<String>) -> Vec<TriggerId> {
    let mut ids: Vec<TriggerId> = Vec::with_capacity(raw.len());
    for key in raw {
        let id = TriggerId::new(key);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

fn extra_descriptions(raw: Option<Vec<LegacyExtraDescription>>) -> Vec<ExtraDescription> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|extra| ExtraDescription {
            keywords: extra.keywords.as_ref().map(keyword_list).unwrap_or_default(),
            description: extra.description.unwrap_or_default(),
        })
        .collect()
}

fn dice(raw: Option<LegacyDice>) -> Dice {
    raw.map(|d| Dice {
        num: d.num,
        size: d.size,
        bonus: d.bonus,
    })
    .unwrap_or_default()
}

fn money(raw: Option<LegacyMoney>) -> Money {
    raw.map(|m| Money {
        copper: m.copper,
        silver: m.silver,
        gold: m.gold,
        platinum: m.platinum,
    })
    .unwrap_or_default()
}

/// `-1` and other negative references mean "none".
fn reference(raw: Option<i64>) -> Option<i64> {
    raw.filter(|id| *id >= 0)
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}

// === Normalizer ===

/// Output of [`Normalizer::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedWorld {
    pub world: WorldFile,
    pub warnings: Vec<ValidationError>,
}

/// Rewrites a parsed legacy file into canonical form.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    zone_zero_id: ZoneId,
}

impl Normalizer {
    /// `zone_zero_id` replaces the reserved legacy zone `0` everywhere.
    pub fn new(zone_zero_id: ZoneId) -> Self {
        Self { zone_zero_id }
    }

    pub fn normalize(&self, raw: LegacyWorldFile) -> NormalizedWorld {
        let mut warnings = Vec::new();

        let zone = self.zone(raw.zone, &mut warnings);
        let zone_id = zone.id;

        let mut world = WorldFile::new(zone);
        world.triggers = raw
            .triggers
            .into_iter()
            .map(|t| trigger(t, zone_id, &mut warnings))
            .collect();
        world.mobs = raw
            .mobs
            .into_iter()
            .map(|m| mob(m, zone_id, &mut warnings))
            .collect();
        world.objects = raw
            .objects
            .into_iter()
            .map(|o| object(o, zone_id, &mut warnings))
            .collect();
        world.rooms = raw
            .rooms
            .into_iter()
            .map(|r| room(r, zone_id, &mut warnings))
            .collect();
        world.shops = raw
            .shops
            .into_iter()
            .map(|s| shop(s, zone_id, &mut warnings))
            .collect();
        world.mob_resets = raw
            .mob_resets
            .into_iter()
            .enumerate()
            .map(|(ordinal, r)| mob_reset(r, zone_id, ordinal, &mut warnings))
            .collect();

        NormalizedWorld { world, warnings }
    }

    fn zone(&self, raw: LegacyZone, warnings: &mut Vec<ValidationError>) -> Zone {
        let id = if raw.id == 0 {
            tracing::debug!(replacement = %self.zone_zero_id, "Remapping legacy zone 0");
            self.zone_zero_id
        } else {
            ZoneId::new(raw.id)
        };

        let mut scope = Scope::new(warnings, EntityKind::Zone, id);
        Zone {
            id,
            name: raw.name,
            top: reference(raw.top),
            lifespan: raw.lifespan.unwrap_or(DEFAULT_LIFESPAN),
            reset_mode: scope.single("reset_mode", raw.reset_mode.as_ref()),
            hemisphere: scope.single("hemisphere", raw.hemisphere.as_ref()),
            climate: scope.single("climate", raw.climate.as_ref()),
        }
    }
}

fn mob(raw: LegacyMob, zone_id: ZoneId, warnings: &mut Vec<ValidationError>) -> Mob {
    let mut scope = Scope::new(warnings, EntityKind::Mob, raw.id);
    Mob {
        id: MobId::new(raw.id),
        vnum: derive_vnum(raw.id),
        zone_id,
        keywords: keywords([
            raw.keywords.as_ref(),
            raw.namelist.as_ref(),
            raw.name_list.as_ref(),
            raw.aliases.as_ref(),
        ]),
        short_desc: raw.short_desc.unwrap_or_default(),
        long_desc: raw.long_desc.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        mob_flags: scope.flags("mob_flags", raw.mob_flags.as_ref()),
        effect_flags: scope.flags("effect_flags", raw.effect_flags.as_ref()),
        alignment: raw.alignment.unwrap_or(0),
        level: raw.level.unwrap_or(1),
        hit_roll: raw.hit_roll.unwrap_or(0),
        armor: raw.armor.unwrap_or(0),
        hp_dice: dice(raw.hp_dice),
        damage_dice: dice(raw.damage_dice),
        money: money(raw.money),
        position: scope.single("position", raw.position.as_ref()),
        default_position: scope.single("default_position", raw.default_position.as_ref()),
        gender: scope.single("gender", raw.gender.as_ref()),
        race: scope.single("race", raw.race.as_ref()),
        size: scope.single("size", raw.size.as_ref()),
        life_force: scope.single("life_force", raw.life_force.as_ref()),
        composition: scope.single("composition", raw.composition.as_ref()),
        stance: scope.single("stance", raw.stance.as_ref()),
        damage_type: scope.single("damage_type", raw.damage_type.as_ref()),
        perception: raw.perception.unwrap_or(0),
        concealment: raw.concealment.unwrap_or(0),
        triggers: trigger_ids(raw.triggers),
    }
}

fn object_values(raw: Option<LegacyValues>) -> BTreeMap<String, serde_json::Value> {
    match raw {
        None => BTreeMap::new(),
        Some(LegacyValues::Map(map)) => map,
        Some(LegacyValues::List(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value))
            .collect(),
    }
}

fn affects(raw: Option<Vec<LegacyAffect>>, scope: &mut Scope<'_>) -> Vec<Affect> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|affect| Affect {
            location: scope.single("affects.location", affect.location.as_ref()),
            modifier: affect.modifier.unwrap_or(0),
        })
        .collect()
}

fn object(raw: LegacyObject, zone_id: ZoneId, warnings: &mut Vec<ValidationError>) -> Object {
    let mut scope = Scope::new(warnings, EntityKind::Object, raw.id);
    Object {
        id: ObjectId::new(raw.id),
        vnum: derive_vnum(raw.id),
        zone_id,
        keywords: keywords([
            raw.keywords.as_ref(),
            raw.namelist.as_ref(),
            raw.name_list.as_ref(),
            raw.aliases.as_ref(),
        ]),
        short_desc: raw.short_desc.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        action_desc: raw.action_desc.unwrap_or_default(),
        object_type: scope.single("type", raw.object_type.as_ref()),
        flags: scope.flags("flags", raw.flags.as_ref()),
        wear_flags: scope.flags("wear_flags", raw.wear_flags.as_ref()),
        effect_flags: scope.flags("effect_flags", raw.effect_flags.as_ref()),
        weight: raw.weight.unwrap_or(0.0),
        cost: raw.cost.unwrap_or(0),
        timer: raw.timer.unwrap_or(0),
        decompose_timer: raw.decompose_timer.unwrap_or(0),
        level: raw.level.unwrap_or(0),
        concealment: raw.concealment.unwrap_or(0),
        values: object_values(raw.values),
        extra_descriptions: extra_descriptions(raw.extra_descriptions),
        affects: affects(raw.affects, &mut scope),
        triggers: trigger_ids(raw.triggers),
    }
}

/// Exits keyed by direction: unknown directions are dropped, a repeated
/// direction keeps its first definition, and the result is in direction
/// order.
fn exits(raw: Vec<LegacyExit>, scope: &mut Scope<'_>) -> Vec<Exit> {
    let mut by_direction: BTreeMap<Direction, Exit> = BTreeMap::new();

    for exit in raw {
        let direction = match exit.direction.as_ref() {
            Some(value) => lookup_code::<Direction>(value).ok_or_else(|| describe(value)),
            None => Err(String::from("<missing>")),
        };
        let direction = match direction {
            Ok(direction) => direction,
            Err(token) => {
                scope.warn(format!("dropped exit with unknown direction `{token}`"));
                continue;
            }
        };

        if by_direction.contains_key(&direction) {
            scope.warn(format!("dropped duplicate {direction} exit"));
            continue;
        }

        let flags = scope.flags("exits.flags", exit.flags.as_ref());
        by_direction.insert(
            direction,
            Exit {
                direction,
                destination: reference(exit.destination).map(RoomId::new),
                description: exit.description.unwrap_or_default(),
                keywords: exit.keywords.as_ref().map(keyword_list).unwrap_or_default(),
                key: reference(exit.key).map(ObjectId::new),
                flags,
            },
        );
    }

    by_direction.into_values().collect()
}

fn room(raw: LegacyRoom, zone_id: ZoneId, warnings: &mut Vec<ValidationError>) -> Room {
    let mut scope = Scope::new(warnings, EntityKind::Room, raw.id);
    Room {
        id: RoomId::new(raw.id),
        vnum: derive_vnum(raw.id),
        zone_id,
        name: raw.name.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        sector: scope.single("sector", raw.sector.as_ref()),
        flags: scope.flags("flags", raw.flags.as_ref()),
        exits: exits(raw.exits, &mut scope),
        extra_descriptions: extra_descriptions(raw.extra_descriptions),
    }
}

fn shop(raw: LegacyShop, zone_id: ZoneId, warnings: &mut Vec<ValidationError>) -> Shop {
    let mut scope = Scope::new(warnings, EntityKind::Shop, raw.id);

    let accepts = raw
        .accepts
        .unwrap_or_default()
        .into_iter()
        .map(|accept| ShopAccept {
            object_type: scope.single("accepts.type", accept.object_type.as_ref()),
            keywords: accept.keywords.unwrap_or_default(),
        })
        .collect();

    let mut rooms: Vec<RoomId> = Vec::new();
    for id in raw.rooms.into_iter().filter(|id| *id >= 0) {
        let id = RoomId::new(id);
        if !rooms.contains(&id) {
            rooms.push(id);
        }
    }

    let messages = raw.messages.unwrap_or_default();

    Shop {
        id: ShopId::new(raw.id),
        vnum: derive_vnum(raw.id),
        zone_id,
        keeper: reference(raw.keeper).map(MobId::new),
        selling: raw
            .selling
            .into_iter()
            .map(|item| ShopItem {
                object_id: ObjectId::new(item.id),
                amount: item.amount.unwrap_or(0),
            })
            .collect(),
        accepts,
        buy_profit: raw.buy_profit.unwrap_or(DEFAULT_PROFIT),
        sell_profit: raw.sell_profit.unwrap_or(DEFAULT_PROFIT),
        temper: raw.temper.unwrap_or(0),
        flags: scope.flags("flags", raw.flags.as_ref()),
        hours: raw
            .hours
            .unwrap_or_default()
            .into_iter()
            .map(|window| ShopHours {
                open: window.open.unwrap_or(0),
                close: window.close.unwrap_or(0),
            })
            .collect(),
        rooms,
        messages: ShopMessages {
            no_such_item: non_empty(messages.no_such_item),
            do_not_buy: non_empty(messages.do_not_buy),
            missing_cash: non_empty(messages.missing_cash),
            buy: non_empty(messages.buy),
            sell: non_empty(messages.sell),
        },
    }
}

fn trigger(raw: LegacyTrigger, zone_id: ZoneId, warnings: &mut Vec<ValidationError>) -> Trigger {
    let mut scope = Scope::new(warnings, EntityKind::Trigger, &raw.id);
    Trigger {
        zone_id,
        name: raw.name.unwrap_or_default(),
        attach_type: scope.single("attach_type", raw.attach_type.as_ref()),
        flags: scope.flags("flags", raw.flags.as_ref()),
        num_args: raw.num_args.unwrap_or(0),
        arglist: argument_list(raw.arglist),
        commands: script_body(raw.commands),
        id: TriggerId::new(raw.id),
    }
}

fn mob_reset(
    raw: LegacyMobReset,
    zone_id: ZoneId,
    ordinal: usize,
    warnings: &mut Vec<ValidationError>,
) -> MobReset {
    let ordinal = i64::try_from(ordinal).unwrap_or(i64::MAX);
    let mut scope = Scope::new(warnings, EntityKind::MobReset, ordinal);

    let carrying = raw
        .carrying
        .unwrap_or_default()
        .into_iter()
        .map(|item| CarriedItem {
            object_id: ObjectId::new(item.id),
            max: item.max.unwrap_or(1).max(1),
            probability: scope.percent("carrying.probability", item.probability),
        })
        .collect();

    let equipped = raw
        .equipped
        .unwrap_or_default()
        .into_iter()
        .map(|item| EquippedItem {
            object_id: ObjectId::new(item.id),
            location: scope.single("equipped.location", item.location.as_ref()),
            max: item.max.unwrap_or(1).max(1),
            probability: scope.percent("equipped.probability", item.probability),
        })
        .collect();

    MobReset {
        zone_id,
        ordinal,
        mob: MobId::new(raw.mob),
        room: RoomId::new(raw.room),
        max: raw.max.unwrap_or(1).max(1),
        max_in_zone: raw.max_in_zone.filter(|n| *n > 0),
        probability: scope.percent("probability", raw.probability),
        comment: non_empty(raw.comment),
        carrying,
        equipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::importers::parser::parse;
    use serde_json::{json, Value};

    fn normalize_json(value: Value) -> NormalizedWorld {
        let raw = parse(&serde_json::to_vec(&value).unwrap()).unwrap();
        Normalizer::new(ZoneId::new(1000)).normalize(raw)
    }

    fn sample_file() -> Value {
        json!({
            "zone": {
                "id": 30, "name": "Northern Midgaard", "top": 3099, "lifespan": 15,
                "reset_mode": 2, "hemisphere": "northeast", "climate": 4,
                "resets": { "mob": [{
                    "id": 3001, "room": 3001, "max": 0, "probability": 250,
                    "carrying": [{ "id": 3010 }],
                    "equipped": [{ "id": 3011, "location": "2hwield", "probability": 50 }]
                }]}
            },
            "mobs": [{
                "id": 3001,
                "namelist": "Guard cityguard guard",
                "short_desc": "the cityguard",
                "flags": "SENTINEL | aggr_evil, 7",
                "effect_flags": ["INVIS", 5, "GLOWING"],
                "sex": 1, "race": "half-elf", "position": 99, "stance": "alert",
                "hp_dice": { "num": 3, "size": 8, "bonus": 20 },
                "money": { "gold": 5 },
                "triggers": [3000, "3000", "3001"]
            }],
            "objects": [{
                "id": 3010,
                "keywords": ["Long", "sword long"],
                "object_type": 5,
                "flags": ["NODROP", "2handed", "MYSTERY"],
                "wear_flags": "TAKE WIELD",
                "weight": 12,
                "values": [3, 8],
                "extra_descriptions": [{ "keyword": "sword", "desc": "Sharp." }],
                "affects": [{ "location": "str", "modifier": 1 }, { "location": 999, "modifier": 2 }]
            }],
            "rooms": [{
                "id": 3001, "name": "Temple", "sector_type": 1, "flags": "nomob indoors",
                "exits": [
                    { "direction": "s", "to_room": 3005, "flags": ["door", "closed"], "key": -1 },
                    { "direction": 0, "destination": "3002" },
                    { "direction": "north", "destination": 3003 },
                    { "direction": "sideways", "destination": 3004 }
                ]
            }],
            "shops": [{
                "id": 3000, "keeper": 3001, "selling": { "3010": 5 },
                "accepts": [{ "type": "weapon", "keywords": "sword" }],
                "rooms": [3001, "3001", -1],
                "messages": { "buy": "Here you go.", "sell": "" }
            }],
            "triggers": [{
                "id": 3000, "name": "greet", "attach_type": "mobile",
                "trigger_types": ["greetall", "SPEECH"], "narg": 100,
                "args": "hello there", "commands": ["say Hi", "wave"]
            }],
            "mob_resets": [{ "mob": "3002", "room": 3002, "max_in_zone": 0, "comment": "  " }]
        })
    }

    #[test]
    fn resolves_codes_aliases_and_defaults() {
        let NormalizedWorld { world, .. } = normalize_json(sample_file());

        assert_eq!(world.zone.id, ZoneId::new(30));
        assert_eq!(world.zone.reset_mode, ZoneResetMode::Normal);
        assert_eq!(world.zone.hemisphere, Hemisphere::Northeast);
        assert_eq!(world.zone.climate, Climate::Temperate);
        assert_eq!(world.zone.top, Some(3099));

        let mob = &world.mobs[0];
        assert_eq!(mob.vnum, 1);
        assert_eq!(mob.zone_id, ZoneId::new(30));
        assert_eq!(mob.keywords, vec!["guard", "cityguard"]);
        assert_eq!(
            mob.mob_flags.iter().copied().collect::<Vec<_>>(),
            vec![MobFlag::Sentinel, MobFlag::Wimpy, MobFlag::AggroEvil]
        );
        assert!(mob.effect_flags.contains(&EffectFlag::Invisible));
        assert!(mob.effect_flags.contains(&EffectFlag::SenseLife));
        assert_eq!(mob.effect_flags.len(), 2);
        assert_eq!(mob.gender, Gender::Male);
        assert_eq!(mob.race, Race::HalfElf);
        assert_eq!(mob.position, Position::Standing);
        assert_eq!(mob.hp_dice, Dice { num: 3, size: 8, bonus: 20 });
        assert_eq!(mob.money.gold, 5);
        assert_eq!(
            mob.triggers,
            vec![TriggerId::new("3000"), TriggerId::new("3001")]
        );

        let object = &world.objects[0];
        assert_eq!(object.keywords, vec!["long", "sword"]);
        assert_eq!(object.object_type, ObjectType::Weapon);
        assert_eq!(
            object.flags.iter().copied().collect::<Vec<_>>(),
            vec![ObjectFlag::NoDrop, ObjectFlag::TwoHanded]
        );
        assert!(object.wear_flags.contains(&WearFlag::Wield));
        assert_eq!(object.values.get("1"), Some(&json!(8)));
        assert_eq!(object.extra_descriptions[0].keywords, vec!["sword"]);
        assert_eq!(object.affects[0].location, ApplyLocation::Str);
        assert_eq!(object.affects[1].location, ApplyLocation::None);

        let trigger = &world.triggers[0];
        assert_eq!(trigger.id, TriggerId::new("3000"));
        assert_eq!(trigger.attach_type, ScriptAttachType::Mob);
        assert!(trigger.flags.contains(&TriggerFlag::GreetAll));
        assert_eq!(trigger.num_args, 100);
        assert_eq!(trigger.arglist, vec!["hello", "there"]);
        assert_eq!(trigger.commands, "say Hi\nwave");
    }

    #[test]
    fn exits_are_keyed_by_direction() {
        let NormalizedWorld { world, warnings } = normalize_json(sample_file());
        let room = &world.rooms[0];

        assert_eq!(room.sector, Sector::City);
        assert!(room.flags.contains(&RoomFlag::NoMob));
        assert!(room.flags.contains(&RoomFlag::Indoors));

        let directions: Vec<Direction> = room.exits.iter().map(|e| e.direction).collect();
        assert_eq!(directions, vec![Direction::North, Direction::South]);
        // Code 0 came first, so the later "north" entry is the duplicate.
        assert_eq!(
            room.exit(Direction::North).unwrap().destination,
            Some(RoomId::new(3002))
        );
        let south = room.exit(Direction::South).unwrap();
        assert_eq!(south.key, None);
        assert!(south.flags.contains(&ExitFlag::IsDoor));

        assert!(warnings
            .iter()
            .any(|w| w.message.contains("unknown direction `sideways`")));
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("duplicate NORTH exit")));
    }

    #[test]
    fn shops_and_resets_are_cleaned_up() {
        let NormalizedWorld { world, .. } = normalize_json(sample_file());

        let shop = &world.shops[0];
        assert_eq!(shop.keeper, Some(MobId::new(3001)));
        assert_eq!(shop.selling[0].object_id, ObjectId::new(3010));
        assert_eq!(shop.selling[0].amount, 5);
        assert_eq!(shop.accepts[0].object_type, ObjectType::Weapon);
        assert_eq!(shop.rooms, vec![RoomId::new(3001)]);
        assert_eq!(shop.messages.buy.as_deref(), Some("Here you go."));
        assert_eq!(shop.messages.sell, None);
        assert_eq!(shop.buy_profit, 1.0);

        assert_eq!(world.mob_resets.len(), 2);
        let nested = &world.mob_resets[0];
        assert_eq!(nested.ordinal, 0);
        assert_eq!(nested.max, 1);
        assert_eq!(nested.probability, 100);
        assert_eq!(nested.carrying[0].probability, 100);
        assert_eq!(nested.equipped[0].location, WearLocation::TwoHandWield);
        assert_eq!(nested.equipped[0].probability, 50);

        let flat = &world.mob_resets[1];
        assert_eq!(flat.ordinal, 1);
        assert_eq!(flat.mob, MobId::new(3002));
        assert_eq!(flat.max_in_zone, None);
        assert_eq!(flat.comment, None);
    }

    #[test]
    fn unknown_tokens_warn_and_never_leak() {
        let NormalizedWorld { world, warnings } = normalize_json(sample_file());

        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(messages.contains(&"dropped unknown effect flag `GLOWING` in `effect_flags`"));
        assert!(messages.contains(&"dropped unknown object flag `MYSTERY` in `flags`"));
        assert!(messages.contains(&"unknown position `99` in `position`, using STANDING"));
        assert!(messages
            .contains(&"unknown apply location `999` in `affects.location`, using NONE"));
        assert!(messages.contains(&"`probability` 250 clamped to 100"));

        let mob_warning = warnings
            .iter()
            .find(|w| w.message.contains("GLOWING"))
            .unwrap();
        assert_eq!(mob_warning.entity_type, Some(EntityKind::Mob));
        assert_eq!(mob_warning.entity_id.as_deref(), Some("3001"));

        let stored = serde_json::to_string(&world).unwrap();
        assert!(!stored.contains("GLOWING"));
        assert!(!stored.contains("MYSTERY"));
    }

    #[test]
    fn aliases_resolve_case_insensitively() {
        for token in ["aggr_evil", "AGGR_EVIL", "Aggr_Evil", "aggro-evil", " AGGRO_EVIL "] {
            assert_eq!(lookup_token::<MobFlag>(token), Some(MobFlag::AggroEvil), "{token}");
        }
        assert_eq!(lookup_token::<Direction>("n"), Some(Direction::North));
        assert_eq!(lookup_token::<Direction>("4"), Some(Direction::Up));
        assert_eq!(lookup_token::<ScriptAttachType>("obj"), Some(ScriptAttachType::Object));
        assert_eq!(lookup_token::<Position>("hovering"), None);
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = normalize_json(sample_file()).world;

        let reparsed = parse(&serde_json::to_vec(&first).unwrap()).unwrap();
        let second = Normalizer::new(ZoneId::new(1000)).normalize(reparsed);

        assert_eq!(second.world, first);
        assert!(second.warnings.is_empty());
    }

    #[test]
    fn zone_zero_is_remapped_everywhere() {
        let NormalizedWorld { world, .. } = normalize_json(json!({
            "zone": { "id": 0, "name": "Limbo" },
            "rooms": [{ "id": 1, "name": "The Void" }],
            "mob_resets": [{ "mob": 1, "room": 1 }]
        }));

        assert_eq!(world.zone.id, ZoneId::new(1000));
        assert_eq!(world.rooms[0].zone_id, ZoneId::new(1000));
        assert_eq!(world.rooms[0].vnum, 1);
        assert_eq!(world.mob_resets[0].zone_id, ZoneId::new(1000));
    }

    #[test]
    fn vnums_follow_the_zone_boundary_rule() {
        let NormalizedWorld { world, .. } = normalize_json(json!({
            "zone": { "id": 1, "name": "Z" },
            "rooms": [{ "id": 2000 }, { "id": 1999 }, { "id": 1001 }]
        }));
        let vnums: Vec<i64> = world.rooms.iter().map(|r| r.vnum).collect();
        assert_eq!(vnums, vec![1000, 999, 1]);
    }
}
