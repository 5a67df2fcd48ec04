//! Opaque card identity plus the two static card attributes the client
//! ever names: site materials and led roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card identifier exactly as the server names it (e.g. "Temple", "Jack").
///
/// The dispatcher never inspects card identity beyond passing it through,
/// so this stays an opaque newtype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(pub String);

impl Card {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Card {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Building site materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Rubble,
    Wood,
    Concrete,
    Brick,
    Stone,
    Marble,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Rubble => "Rubble",
            Material::Wood => "Wood",
            Material::Concrete => "Concrete",
            Material::Brick => "Brick",
            Material::Stone => "Stone",
            Material::Marble => "Marble",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles a player can lead or follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patron,
    Laborer,
    Architect,
    Craftsman,
    Legionary,
    Merchant,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Patron,
        Role::Laborer,
        Role::Architect,
        Role::Craftsman,
        Role::Legionary,
        Role::Merchant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patron => "Patron",
            Role::Laborer => "Laborer",
            Role::Architect => "Architect",
            Role::Craftsman => "Craftsman",
            Role::Legionary => "Legionary",
            Role::Merchant => "Merchant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
