//! Table definitions for the world store.
//!
//! Flag sets, keyword lists and argument lists are stored as JSON arrays of
//! canonical tokens. Exit destinations, exit keys, shop rooms and trigger
//! links are plain columns because they may point into zones that have not
//! been imported yet.

pub(super) const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS zones (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        top INTEGER,
        lifespan INTEGER NOT NULL,
        reset_mode TEXT NOT NULL,
        hemisphere TEXT NOT NULL,
        climate TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS mobs (
        id INTEGER PRIMARY KEY,
        zone_id INTEGER NOT NULL REFERENCES zones(id),
        vnum INTEGER NOT NULL,
        keywords TEXT NOT NULL,
        short_desc TEXT NOT NULL,
        long_desc TEXT NOT NULL,
        description TEXT NOT NULL,
        mob_flags TEXT NOT NULL,
        effect_flags TEXT NOT NULL,
        alignment INTEGER NOT NULL,
        level INTEGER NOT NULL,
        hit_roll INTEGER NOT NULL,
        armor INTEGER NOT NULL,
        hp_dice_num INTEGER NOT NULL,
        hp_dice_size INTEGER NOT NULL,
        hp_dice_bonus INTEGER NOT NULL,
        damage_dice_num INTEGER NOT NULL,
        damage_dice_size INTEGER NOT NULL,
        damage_dice_bonus INTEGER NOT NULL,
        copper INTEGER NOT NULL,
        silver INTEGER NOT NULL,
        gold INTEGER NOT NULL,
        platinum INTEGER NOT NULL,
        position TEXT NOT NULL,
        default_position TEXT NOT NULL,
        gender TEXT NOT NULL,
        race TEXT NOT NULL,
        size TEXT NOT NULL,
        life_force TEXT NOT NULL,
        composition TEXT NOT NULL,
        stance TEXT NOT NULL,
        damage_type TEXT NOT NULL,
        perception INTEGER NOT NULL,
        concealment INTEGER NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS mob_triggers (
        mob_id INTEGER NOT NULL REFERENCES mobs(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        trigger_id TEXT NOT NULL,
        PRIMARY KEY (mob_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS objects (
        id INTEGER PRIMARY KEY,
        zone_id INTEGER NOT NULL REFERENCES zones(id),
        vnum INTEGER NOT NULL,
        keywords TEXT NOT NULL,
        short_desc TEXT NOT NULL,
        description TEXT NOT NULL,
        action_desc TEXT NOT NULL,
        object_type TEXT NOT NULL,
        flags TEXT NOT NULL,
        wear_flags TEXT NOT NULL,
        effect_flags TEXT NOT NULL,
        weight REAL NOT NULL,
        cost INTEGER NOT NULL,
        timer INTEGER NOT NULL,
        decompose_timer INTEGER NOT NULL,
        level INTEGER NOT NULL,
        concealment INTEGER NOT NULL,
        values_json TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS object_extra_descriptions (
        object_id INTEGER NOT NULL REFERENCES objects(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        keywords TEXT NOT NULL,
        description TEXT NOT NULL,
        PRIMARY KEY (object_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS object_affects (
        object_id INTEGER NOT NULL REFERENCES objects(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        location TEXT NOT NULL,
        modifier INTEGER NOT NULL,
        PRIMARY KEY (object_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS object_triggers (
        object_id INTEGER NOT NULL REFERENCES objects(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        trigger_id TEXT NOT NULL,
        PRIMARY KEY (object_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY,
        zone_id INTEGER NOT NULL REFERENCES zones(id),
        vnum INTEGER NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        sector TEXT NOT NULL,
        flags TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS room_extra_descriptions (
        room_id INTEGER NOT NULL REFERENCES rooms(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        keywords TEXT NOT NULL,
        description TEXT NOT NULL,
        PRIMARY KEY (room_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS room_exits (
        room_id INTEGER NOT NULL REFERENCES rooms(id) ON DELETE CASCADE,
        direction TEXT NOT NULL,
        destination_id INTEGER,
        description TEXT NOT NULL,
        keywords TEXT NOT NULL,
        key_id INTEGER,
        flags TEXT NOT NULL,
        PRIMARY KEY (room_id, direction)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS triggers (
        id TEXT PRIMARY KEY,
        zone_id INTEGER NOT NULL REFERENCES zones(id),
        name TEXT NOT NULL,
        attach_type TEXT NOT NULL,
        flags TEXT NOT NULL,
        num_args INTEGER NOT NULL,
        arglist TEXT NOT NULL,
        commands TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shops (
        id INTEGER PRIMARY KEY,
        zone_id INTEGER NOT NULL REFERENCES zones(id),
        vnum INTEGER NOT NULL,
        keeper_id INTEGER REFERENCES mobs(id),
        buy_profit REAL NOT NULL,
        sell_profit REAL NOT NULL,
        temper INTEGER NOT NULL,
        flags TEXT NOT NULL,
        no_such_item_message TEXT,
        do_not_buy_message TEXT,
        missing_cash_message TEXT,
        buy_message TEXT,
        sell_message TEXT,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shop_items (
        shop_id INTEGER NOT NULL REFERENCES shops(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        object_id INTEGER NOT NULL REFERENCES objects(id),
        amount INTEGER NOT NULL,
        PRIMARY KEY (shop_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shop_accepts (
        shop_id INTEGER NOT NULL REFERENCES shops(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        object_type TEXT NOT NULL,
        keywords TEXT NOT NULL,
        PRIMARY KEY (shop_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shop_hours (
        shop_id INTEGER NOT NULL REFERENCES shops(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        open INTEGER NOT NULL,
        close INTEGER NOT NULL,
        PRIMARY KEY (shop_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shop_rooms (
        shop_id INTEGER NOT NULL REFERENCES shops(id) ON DELETE CASCADE,
        room_id INTEGER NOT NULL,
        PRIMARY KEY (shop_id, room_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS mob_resets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        zone_id INTEGER NOT NULL REFERENCES zones(id),
        ordinal INTEGER NOT NULL,
        mob_id INTEGER NOT NULL REFERENCES mobs(id),
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        max_instances INTEGER NOT NULL,
        max_in_zone INTEGER,
        probability INTEGER NOT NULL,
        comment TEXT,
        updated_at TEXT NOT NULL,
        UNIQUE (zone_id, ordinal)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS mob_reset_carried (
        reset_id INTEGER NOT NULL REFERENCES mob_resets(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        object_id INTEGER NOT NULL REFERENCES objects(id),
        max_instances INTEGER NOT NULL,
        probability INTEGER NOT NULL,
        PRIMARY KEY (reset_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS mob_reset_equipped (
        reset_id INTEGER NOT NULL REFERENCES mob_resets(id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        object_id INTEGER NOT NULL REFERENCES objects(id),
        location TEXT NOT NULL,
        max_instances INTEGER NOT NULL,
        probability INTEGER NOT NULL,
        PRIMARY KEY (reset_id, position)
    )
    "#,
];
