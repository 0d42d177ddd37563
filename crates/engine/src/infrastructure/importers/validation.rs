//! Diagnostics produced while reading and checking world files.

use std::fmt;

use serde::Serialize;

/// Kind of world entity a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    File,
    Zone,
    Mob,
    Object,
    Room,
    Exit,
    Shop,
    ShopItem,
    Trigger,
    MobReset,
    CarriedItem,
    EquippedItem,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Zone => "zone",
            Self::Mob => "mob",
            Self::Object => "object",
            Self::Room => "room",
            Self::Exit => "exit",
            Self::Shop => "shop",
            Self::ShopItem => "shop_item",
            Self::Trigger => "trigger",
            Self::MobReset => "mob_reset",
            Self::CarriedItem => "carried_item",
            Self::EquippedItem => "equipped_item",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported problem, optionally tied to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    pub fn for_entity(
        entity_type: EntityKind,
        entity_id: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            entity_type: Some(entity_type),
            entity_id: Some(entity_id.to_string()),
        }
    }

    pub fn for_kind(entity_type: EntityKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            entity_type: Some(entity_type),
            entity_id: None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.entity_type, &self.entity_id) {
            (Some(kind), Some(id)) => write!(f, "{kind} {id}: {}", self.message),
            (Some(kind), None) => write!(f, "{kind}: {}", self.message),
            _ => f.write_str(&self.message),
        }
    }
}

/// Structural failures of one world file. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} structural error(s), first: {}", .0.len(), first_message(.0))]
pub struct ParseErrors(pub Vec<ValidationError>);

fn first_message(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl ParseErrors {
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.0
    }
}
