use crate::fighter::{Archetype, Fighter};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TurnOrder {
    Random,
    Alternate { first: Side },
}

impl Default for TurnOrder {
    fn default() -> Self {
        TurnOrder::Random
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct BattleOptions {
    pub turn_order: TurnOrder,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum BattleOutcome {
    AWins,
    BWins,
}

impl BattleOutcome {
    pub fn winner(self) -> Side {
        match self {
            BattleOutcome::AWins => Side::A,
            BattleOutcome::BWins => Side::B,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FighterView {
    pub name: &'static str,
    pub archetype: Archetype,
    pub attack_power: u32,
    pub health: u32,
    pub max_health: u32,
}

impl FighterView {
    fn of(fighter: &Fighter) -> FighterView {
        FighterView {
            name: fighter.name(),
            archetype: fighter.archetype(),
            attack_power: fighter.attack_power(),
            health: fighter.health(),
            max_health: fighter.max_health(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BattleView {
    pub turn: u32,
    pub side_a: FighterView,
    pub side_b: FighterView,
}

impl BattleView {
    pub fn side(&self, side: Side) -> &FighterView {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    TurnStart {
        turn: u32,
        snapshot: BattleView,
    },
    Attack {
        attacker: &'static str,
        verb: &'static str,
        defender: &'static str,
        damage: u32,
    },
    Defeat {
        fighter: &'static str,
    },
}

#[derive(Clone, Debug, Serialize)]
pub struct BattleReport {
    pub seed: u64,
    pub outcome: BattleOutcome,
    pub turns: u32,
    pub final_view: BattleView,
    pub events: Vec<BattleEvent>,
}

impl BattleReport {
    pub fn winner(&self) -> &FighterView {
        self.final_view.side(self.outcome.winner())
    }
}

pub struct Battle {
    fighters: [Fighter; 2],
    turn_order: TurnOrder,
    turn: u32,
    rng: SmallRng,
}

impl Battle {
    pub fn new(a: Fighter, b: Fighter, seed: u64) -> Self {
        Self::new_with_options(a, b, seed, BattleOptions::default())
    }

    pub fn new_with_options(a: Fighter, b: Fighter, seed: u64, options: BattleOptions) -> Self {
        Battle {
            fighters: [a, b],
            turn_order: options.turn_order,
            turn: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        &mut self.fighters[side.index()]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn view(&self) -> BattleView {
        BattleView {
            turn: self.turn,
            side_a: FighterView::of(&self.fighters[0]),
            side_b: FighterView::of(&self.fighters[1]),
        }
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        if self.fighters[0].is_defeated() {
            Some(BattleOutcome::BWins)
        } else if self.fighters[1].is_defeated() {
            Some(BattleOutcome::AWins)
        } else {
            None
        }
    }

    fn select_attacker(&mut self) -> Side {
        match self.turn_order {
            // Re-rolled every turn rather than strictly alternating.
            TurnOrder::Random => {
                if self.rng.gen_range(0..2) == 0 {
                    Side::A
                } else {
                    Side::B
                }
            }
            TurnOrder::Alternate { first } => {
                if self.turn % 2 == 0 {
                    first
                } else {
                    first.opponent()
                }
            }
        }
    }

    pub fn run_turn(&mut self) -> Vec<BattleEvent> {
        if self.outcome().is_some() {
            return Vec::new();
        }
        let attacker = self.select_attacker();
        self.execute_turn(attacker)
    }

    pub fn run_turn_with_attacker(&mut self, attacker: Side) -> Vec<BattleEvent> {
        if self.outcome().is_some() {
            return Vec::new();
        }
        self.execute_turn(attacker)
    }

    fn execute_turn(&mut self, attacker: Side) -> Vec<BattleEvent> {
        self.turn += 1;
        let mut events = vec![BattleEvent::TurnStart {
            turn: self.turn,
            snapshot: self.view(),
        }];
        let defender = attacker.opponent();
        let damage = self.fighter(attacker).attack_power();
        events.push(BattleEvent::Attack {
            attacker: self.fighter(attacker).name(),
            verb: self.fighter(attacker).archetype().stats().attack_verb,
            defender: self.fighter(defender).name(),
            damage,
        });
        self.fighter_mut(defender).take_damage(damage);
        if self.fighter(defender).is_defeated() {
            events.push(BattleEvent::Defeat {
                fighter: self.fighter(defender).name(),
            });
        }
        events
    }
}

pub fn simulate_battle(a: Archetype, b: Archetype, seed: u64, options: BattleOptions) -> BattleOutcome {
    let mut battle = Battle::new_with_options(Fighter::new(a), Fighter::new(b), seed, options);
    loop {
        if let Some(outcome) = battle.outcome() {
            return outcome;
        }
        battle.run_turn();
    }
}
