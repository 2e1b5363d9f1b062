use battle_arena::battle::{
    simulate_battle, Battle, BattleEvent, BattleOptions, BattleOutcome, Side, TurnOrder,
};
use battle_arena::fighter::{Archetype, Fighter};
use battle_arena::{run, CliOptions};

fn duel(a: Archetype, b: Archetype, seed: u64) -> Battle {
    Battle::new(Fighter::new(a), Fighter::new(b), seed)
}

fn alternating_duel(a: Archetype, b: Archetype, first: Side) -> Battle {
    Battle::new_with_options(
        Fighter::new(a),
        Fighter::new(b),
        0,
        BattleOptions {
            turn_order: TurnOrder::Alternate { first },
        },
    )
}

#[test]
fn roster_stats_match_the_table() {
    let cases = [
        ("knight", "Arthur", 500, 4000),
        ("archer", "Robin", 700, 2800),
        ("mage", "Merlin", 1200, 1500),
    ];
    for (label, name, attack_power, max_health) in cases {
        let fighter = Fighter::from_label(label).expect("roster label should resolve");
        assert_eq!(fighter.name(), name);
        assert_eq!(fighter.attack_power(), attack_power);
        assert_eq!(fighter.health(), max_health);
        assert_eq!(fighter.max_health(), max_health);
        assert!(!fighter.is_defeated());
    }
}

#[test]
fn labels_are_case_insensitive() {
    assert_eq!(Archetype::from_label("KNIGHT"), Some(Archetype::Knight));
    assert_eq!(Archetype::from_label("Archer"), Some(Archetype::Archer));
    assert_eq!(Archetype::from_label("mAgE"), Some(Archetype::Mage));
}

#[test]
fn unrecognized_labels_are_rejected() {
    assert_eq!(Archetype::from_label("wizard"), None);
    assert_eq!(Archetype::from_label(""), None);
    assert!(Fighter::from_label("paladin").is_none());
}

#[test]
fn damage_clamps_health_at_zero() {
    let mut fighter = Fighter::new(Archetype::Mage);
    fighter.take_damage(1200);
    assert_eq!(fighter.health(), 300);
    fighter.take_damage(1200);
    assert_eq!(fighter.health(), 0);
    assert!(fighter.is_defeated());
    fighter.take_damage(1200);
    assert_eq!(fighter.health(), 0);
}

#[test]
fn an_attack_removes_exactly_the_attack_power() {
    let mut battle = duel(Archetype::Knight, Archetype::Mage, 0);
    battle.run_turn_with_attacker(Side::A);
    assert_eq!(battle.fighter(Side::B).health(), 1000);
    assert_eq!(battle.fighter(Side::A).health(), 4000);
}

#[test]
fn forced_mage_turns_chip_the_knight() {
    let mut battle = duel(Archetype::Knight, Archetype::Mage, 0);
    battle.run_turn_with_attacker(Side::B);
    assert_eq!(battle.fighter(Side::A).health(), 2800);
    battle.run_turn_with_attacker(Side::B);
    assert_eq!(battle.fighter(Side::A).health(), 1600);
    assert_eq!(battle.fighter(Side::B).health(), 1500);
    assert!(battle.outcome().is_none());
}

#[test]
fn alternating_from_the_mage_lets_the_knight_win() {
    // The knight kills in ceil(1500/500) = 3 hits, the mage in
    // ceil(4000/1200) = 4; alternating B, A, B, A, ... the knight lands
    // its third hit on turn 6 with 4000 - 3*1200 = 400 HP left.
    let mut battle = alternating_duel(Archetype::Knight, Archetype::Mage, Side::B);
    let outcome = loop {
        if let Some(outcome) = battle.outcome() {
            break outcome;
        }
        battle.run_turn();
    };
    assert_eq!(outcome, BattleOutcome::AWins);
    assert_eq!(battle.turn(), 6);
    assert_eq!(battle.fighter(Side::A).health(), 400);
    assert_eq!(battle.fighter(Side::B).health(), 0);
}

#[test]
fn turn_events_carry_snapshot_then_attack() {
    let mut battle = duel(Archetype::Knight, Archetype::Mage, 0);
    let events = battle.run_turn_with_attacker(Side::B);
    assert_eq!(events.len(), 2);
    match &events[0] {
        BattleEvent::TurnStart { turn, snapshot } => {
            assert_eq!(*turn, 1);
            assert_eq!(snapshot.side_a.health, 4000);
            assert_eq!(snapshot.side_b.health, 1500);
        }
        other => panic!("expected TurnStart, got {other:?}"),
    }
    match &events[1] {
        BattleEvent::Attack {
            attacker,
            defender,
            damage,
            ..
        } => {
            assert_eq!(*attacker, "Merlin");
            assert_eq!(*defender, "Arthur");
            assert_eq!(*damage, 1200);
        }
        other => panic!("expected Attack, got {other:?}"),
    }
}

#[test]
fn defeat_event_fires_on_the_killing_blow() {
    let mut battle = alternating_duel(Archetype::Mage, Archetype::Mage, Side::A);
    battle.run_turn();
    battle.run_turn();
    let events = battle.run_turn();
    assert!(matches!(
        events.last(),
        Some(BattleEvent::Defeat { fighter: "Merlin" })
    ));
    assert_eq!(battle.outcome(), Some(BattleOutcome::AWins));
}

#[test]
fn seeded_battles_are_deterministic() {
    for seed in 0..10 {
        let first = simulate_battle(
            Archetype::Archer,
            Archetype::Mage,
            seed,
            BattleOptions::default(),
        );
        let second = simulate_battle(
            Archetype::Archer,
            Archetype::Mage,
            seed,
            BattleOptions::default(),
        );
        assert_eq!(first, second);
    }
}

#[test]
fn random_order_lets_either_side_win() {
    let mut a_wins = 0;
    let mut b_wins = 0;
    for seed in 0..30 {
        match simulate_battle(
            Archetype::Mage,
            Archetype::Mage,
            seed,
            BattleOptions::default(),
        ) {
            BattleOutcome::AWins => a_wins += 1,
            BattleOutcome::BWins => b_wins += 1,
        }
    }
    assert!(
        a_wins > 0 && b_wins > 0,
        "the per-turn coin flip should let either side win"
    );
}

#[test]
fn battles_terminate_within_the_stat_table_bound() {
    // Each side needs at most ceil(4000/500) = 8 hits, so no duel can
    // outlast 15 turns.
    for seed in 0..25 {
        let mut battle = duel(Archetype::Knight, Archetype::Knight, seed);
        while battle.outcome().is_none() {
            battle.run_turn();
            assert!(battle.turn() <= 15);
        }
    }
}

#[test]
fn exactly_one_fighter_is_defeated_at_the_end() {
    for seed in 0..25 {
        let mut battle = duel(Archetype::Archer, Archetype::Mage, seed);
        while battle.outcome().is_none() {
            battle.run_turn();
        }
        let winner = battle.outcome().unwrap().winner();
        let view = battle.view();
        assert!(view.side(winner).health > 0);
        assert_eq!(view.side(winner.opponent()).health, 0);
    }
}

#[test]
fn decided_battles_ignore_further_turns() {
    let mut battle = duel(Archetype::Mage, Archetype::Mage, 3);
    while battle.outcome().is_none() {
        battle.run_turn();
    }
    let turns = battle.turn();
    let view = battle.view();
    assert!(battle.run_turn().is_empty());
    assert!(battle.run_turn_with_attacker(Side::A).is_empty());
    assert_eq!(battle.turn(), turns);
    assert_eq!(battle.view(), view);
}

#[test]
fn unknown_fighter_label_is_reported_without_a_battle() {
    let opts = CliOptions {
        labels: vec!["knight".into(), "wizard".into()],
        seed: Some(1),
        ..CliOptions::default()
    };
    assert!(run(opts).is_ok());
}

#[test]
fn missing_labels_print_usage_and_return() {
    let opts = CliOptions {
        labels: vec!["knight".into()],
        ..CliOptions::default()
    };
    assert!(run(opts).is_ok());
}

#[test]
fn duel_writes_a_json_transcript() {
    let path = std::env::temp_dir().join("battle_arena_transcript_test.json");
    let opts = CliOptions {
        labels: vec!["knight".into(), "mage".into()],
        seed: Some(7),
        log_path: Some(path.clone()),
        ..CliOptions::default()
    };
    run(opts).expect("duel should succeed");
    let raw = std::fs::read_to_string(&path).expect("transcript should exist");
    let parsed: serde_json::Value =
        serde_json::from_str(&raw).expect("transcript should be valid JSON");
    assert_eq!(parsed["seed"], 7);
    assert!(parsed["turns"].as_u64().unwrap() >= 3);
    assert!(!parsed["events"].as_array().unwrap().is_empty());
    std::fs::remove_file(&path).ok();
}
