use phf::phf_map;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Knight,
    Archer,
    Mage,
}

#[derive(Clone, Copy, Debug)]
pub struct ArchetypeStats {
    pub name: &'static str,
    pub attack_power: u32,
    pub max_health: u32,
    pub attack_verb: &'static str,
}

static ROSTER: phf::Map<&'static str, Archetype> = phf_map! {
    "knight" => Archetype::Knight,
    "archer" => Archetype::Archer,
    "mage" => Archetype::Mage,
};

const KNIGHT: ArchetypeStats = ArchetypeStats {
    name: "Arthur",
    attack_power: 500,
    max_health: 4000,
    attack_verb: "strikes",
};

const ARCHER: ArchetypeStats = ArchetypeStats {
    name: "Robin",
    attack_power: 700,
    max_health: 2800,
    attack_verb: "shoots an arrow at",
};

const MAGE: ArchetypeStats = ArchetypeStats {
    name: "Merlin",
    attack_power: 1200,
    max_health: 1500,
    attack_verb: "casts a spell on",
};

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Knight, Archetype::Archer, Archetype::Mage];

    pub fn from_label(label: &str) -> Option<Archetype> {
        ROSTER.get(label.to_ascii_lowercase().as_str()).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Archetype::Knight => "knight",
            Archetype::Archer => "archer",
            Archetype::Mage => "mage",
        }
    }

    pub fn stats(self) -> &'static ArchetypeStats {
        match self {
            Archetype::Knight => &KNIGHT,
            Archetype::Archer => &ARCHER,
            Archetype::Mage => &MAGE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Fighter {
    archetype: Archetype,
    health: u32,
}

impl Fighter {
    pub fn new(archetype: Archetype) -> Self {
        Fighter {
            archetype,
            health: archetype.stats().max_health,
        }
    }

    pub fn from_label(label: &str) -> Option<Fighter> {
        Archetype::from_label(label).map(Fighter::new)
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn name(&self) -> &'static str {
        self.archetype.stats().name
    }

    pub fn attack_power(&self) -> u32 {
        self.archetype.stats().attack_power
    }

    pub fn max_health(&self) -> u32 {
        self.archetype.stats().max_health
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}
