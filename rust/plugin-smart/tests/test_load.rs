use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::path::PathBuf;

use sevens_ai::Strategy;
use sevens_ai::greedy::GreedyStrategy;
use sevens_ai::loader::load_strategy;
use sevens_ai::smart::SmartStrategy;
use sevens_engine::cards::{Card, Rank, Suit};
use sevens_engine::engine::Engine;
use sevens_engine::game::{Game, GameOutcome};
use sevens_engine::player::Decision;
use sevens_engine::table::generate_initial_layout;

/// The shared library Cargo built for this package, next to the test binary.
fn built_module() -> PathBuf {
    let file = format!("{}sevens_plugin_smart{}", DLL_PREFIX, DLL_SUFFIX);
    let exe = std::env::current_exe().unwrap();
    exe.ancestors()
        .skip(1)
        .take(2)
        .map(|dir| dir.join(&file))
        .find(|path| path.is_file())
        .unwrap_or_else(|| panic!("{file} not found near {}", exe.display()))
}

fn play_against_greedy(seat_zero: Box<dyn Strategy>, seed: u64) -> GameOutcome {
    let mut game = Game::new(Engine::new(Some(seed))).with_round_limit(1_000);
    game.register(0, seat_zero).unwrap();
    for id in 1..4 {
        game.register(id, Box::new(GreedyStrategy::new())).unwrap();
    }
    game.run().unwrap()
}

#[test]
fn built_module_loads_as_smart_sevens() {
    let path = built_module();
    let strategy = load_strategy(&path).unwrap();
    assert_eq!(strategy.name(), "SmartSevens");
    assert_eq!(strategy.path(), path.as_path());
}

#[test]
fn loaded_module_plays_a_seeded_game_against_greedy() {
    let loaded = load_strategy(built_module()).unwrap();
    let outcome = play_against_greedy(Box::new(loaded), 42);

    assert!(outcome.rounds >= 1);
    assert_eq!(outcome.scores.len(), 4);
    assert!(outcome.scores.iter().any(|&(_, score)| score >= 50));

    // the module runs the same code as the in-process strategy
    let native = play_against_greedy(Box::new(SmartStrategy::new()), 42);
    assert_eq!(outcome, native);
}

#[test]
fn each_instance_keeps_the_module_open() {
    let path = built_module();
    let first = load_strategy(&path).unwrap();
    let mut second = load_strategy(&path).unwrap();
    drop(first);

    second.initialize(1);
    let table = generate_initial_layout();
    let hand = [
        Card::new(Suit::Hearts, Rank::King),
        Card::new(Suit::Diamonds, Rank::Eight),
    ];
    assert_eq!(second.select_card(&hand, &table), Decision::Play(1));
    assert_eq!(second.name(), "SmartSevens");
}
