use serde::{Deserialize, Serialize};

use super::settlement::TownSize;
use super::stock::{Implement, ResourcePile};
use super::unit::Unit;
use crate::player::Player;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fortress {
    pub id: i32,
    pub owner: Player,
    pub name: String,
    pub size: TownSize,
    #[serde(default)]
    pub members: Vec<FortressMember>,
}

impl Fortress {
    pub fn new(id: i32, owner: Player, name: impl Into<String>, size: TownSize) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            size,
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: impl Into<FortressMember>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn redacted(&self) -> Self {
        Self {
            members: self.members.iter().map(FortressMember::redacted).collect(),
            ..self.clone()
        }
    }
}

/// What a fortress may contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FortressMember {
    Unit(Unit),
    Implement(Implement),
    ResourcePile(ResourcePile),
}

impl FortressMember {
    pub fn id(&self) -> i32 {
        match self {
            FortressMember::Unit(unit) => unit.id,
            FortressMember::Implement(implement) => implement.id,
            FortressMember::ResourcePile(pile) => pile.id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FortressMember::Unit(_) => "unit",
            FortressMember::Implement(_) => "implement",
            FortressMember::ResourcePile(_) => "resource pile",
        }
    }

    pub fn with_id(&self, id: i32) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            FortressMember::Unit(unit) => unit.id = id,
            FortressMember::Implement(implement) => implement.id = id,
            FortressMember::ResourcePile(pile) => pile.id = id,
        }
        copy
    }

    pub fn redacted(&self) -> Self {
        match self {
            FortressMember::Unit(unit) => FortressMember::Unit(unit.redacted()),
            FortressMember::Implement(implement) => FortressMember::Implement(implement.clone()),
            FortressMember::ResourcePile(pile) => FortressMember::ResourcePile(pile.redacted()),
        }
    }
}

impl From<Unit> for FortressMember {
    fn from(unit: Unit) -> Self {
        FortressMember::Unit(unit)
    }
}

impl From<Implement> for FortressMember {
    fn from(implement: Implement) -> Self {
        FortressMember::Implement(implement)
    }
}

impl From<ResourcePile> for FortressMember {
    fn from(pile: ResourcePile) -> Self {
        FortressMember::ResourcePile(pile)
    }
}
