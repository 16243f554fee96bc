use serde::{Deserialize, Serialize};

use super::population::Animal;
use super::stock::{Implement, ResourcePile};
use crate::player::Player;

/// A group of workers, animals and gear moving together under one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i32,
    pub owner: Player,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<UnitMember>,
}

impl Unit {
    pub fn new(id: i32, owner: Player, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            owner,
            kind: kind.into(),
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: impl Into<UnitMember>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn redacted(&self) -> Self {
        Self {
            members: self.members.iter().map(UnitMember::redacted).collect(),
            ..self.clone()
        }
    }
}

/// What a unit may contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnitMember {
    Worker(Worker),
    Animal(Animal),
    Implement(Implement),
    ResourcePile(ResourcePile),
}

impl UnitMember {
    pub fn id(&self) -> i32 {
        match self {
            UnitMember::Worker(worker) => worker.id,
            UnitMember::Animal(animal) => animal.id,
            UnitMember::Implement(implement) => implement.id,
            UnitMember::ResourcePile(pile) => pile.id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitMember::Worker(_) => "worker",
            UnitMember::Animal(_) => "animal",
            UnitMember::Implement(_) => "implement",
            UnitMember::ResourcePile(_) => "resource pile",
        }
    }

    pub fn with_id(&self, id: i32) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            UnitMember::Worker(worker) => worker.id = id,
            UnitMember::Animal(animal) => animal.id = id,
            UnitMember::Implement(implement) => implement.id = id,
            UnitMember::ResourcePile(pile) => pile.id = id,
        }
        copy
    }

    pub fn redacted(&self) -> Self {
        match self {
            UnitMember::Worker(worker) => UnitMember::Worker(worker.redacted()),
            UnitMember::Animal(animal) => UnitMember::Animal(animal.redacted()),
            UnitMember::Implement(implement) => UnitMember::Implement(implement.clone()),
            UnitMember::ResourcePile(pile) => UnitMember::ResourcePile(pile.redacted()),
        }
    }
}

impl From<Worker> for UnitMember {
    fn from(worker: Worker) -> Self {
        UnitMember::Worker(worker)
    }
}

impl From<Animal> for UnitMember {
    fn from(animal: Animal) -> Self {
        UnitMember::Animal(animal)
    }
}

impl From<Implement> for UnitMember {
    fn from(implement: Implement) -> Self {
        UnitMember::Implement(implement)
    }
}

impl From<ResourcePile> for UnitMember {
    fn from(pile: ResourcePile) -> Self {
        UnitMember::ResourcePile(pile)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: i32,
    pub name: String,
    pub race: String,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub stats: Option<WorkerStats>,
}

impl Worker {
    pub fn new(id: i32, name: impl Into<String>, race: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            race: race.into(),
            jobs: Vec::new(),
            stats: None,
        }
    }

    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_stats(mut self, stats: WorkerStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Name and race only; another player never learns jobs or stats.
    pub fn redacted(&self) -> Self {
        Self {
            jobs: Vec::new(),
            stats: None,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerStats {
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub level: i32,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Job {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
            skills: Vec::new(),
        }
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// A job nobody has any experience in.
    pub fn is_empty(&self) -> bool {
        self.level == 0 && self.skills.iter().all(Skill::is_empty)
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: i32,
    /// Experience accumulated since the last level.
    pub hours: i32,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: i32, hours: i32) -> Self {
        Self {
            name: name.into(),
            level,
            hours,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level == 0 && self.hours == 0
    }
}
