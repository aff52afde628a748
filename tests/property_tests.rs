//! Property tests: stone conservation and turn order over arbitrary play.

use mancala_engine::{GameConfig, MancalaGame, Player, PlayerId, RuleSet};
use proptest::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const TOTAL_STONES: u32 = 48;

fn new_game(rule_set: RuleSet) -> MancalaGame {
    let mut game = MancalaGame::new(GameConfig::new(rule_set));
    game.register_players(Player::new("Ada"), Player::new("Grace"))
        .expect("valid players");
    game
}

fn rule_set_strategy() -> impl Strategy<Value = RuleSet> {
    prop_oneof![Just(RuleSet::Kalah), Just(RuleSet::Ayo)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn stones_are_conserved(
        rule_set in rule_set_strategy(),
        choices in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut game = new_game(rule_set);

        for choice in choices {
            if game.is_game_over() {
                prop_assert_eq!(game.board().pit_counts(), [0; 12]);
                break;
            }
            let legal = game.legal_moves();
            prop_assert!(!legal.is_empty());
            let pit = legal[choice as usize % legal.len()];

            game.play(pit.number()).unwrap();
            prop_assert_eq!(game.board().total_stones(), TOTAL_STONES);
        }
        game.is_game_over();
        prop_assert_eq!(game.board().total_stones(), TOTAL_STONES);
    }

    #[test]
    fn turns_alternate_unless_free(
        rule_set in rule_set_strategy(),
        choices in prop::collection::vec(any::<u8>(), 0..120),
    ) {
        let mut game = new_game(rule_set);

        for choice in choices {
            if game.is_game_over() {
                break;
            }
            let mover = game.current_player();
            let turn = game.turn_number();
            let legal = game.legal_moves();
            let pit = legal[choice as usize % legal.len()];

            game.play(pit.number()).unwrap();
            let record = game.history().back().unwrap();
            prop_assert_eq!(record.player, mover);
            prop_assert_eq!(record.turn, turn);

            if record.distribution.free_turn {
                prop_assert_eq!(rule_set, RuleSet::Kalah);
                prop_assert_eq!(game.current_player(), mover);
                prop_assert_eq!(game.turn_number(), turn);
            } else {
                prop_assert_eq!(game.current_player(), mover.opponent());
                prop_assert_eq!(game.turn_number(), turn + 1);
            }
        }
    }

    #[test]
    fn rejected_moves_leave_board_alone(
        rule_set in rule_set_strategy(),
        pit in 0usize..20,
    ) {
        let mut game = new_game(rule_set);
        let before = game.board().clone();
        let legal = (1..=6).contains(&pit);

        prop_assert_eq!(game.play(pit).is_ok(), legal);
        if !legal {
            prop_assert_eq!(game.board(), &before);
            prop_assert_eq!(game.current_player(), PlayerId::One);
        }
    }
}

/// Play seeded random games to the end (or a move cap) and check the
/// board after every move.
fn random_playouts(rule_set: RuleSet, games: u64, max_moves: usize) {
    for seed in 0..games {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = new_game(rule_set);

        for _ in 0..max_moves {
            if game.is_game_over() {
                break;
            }
            let legal = game.legal_moves();
            let pit = *legal.choose(&mut rng).unwrap();
            let mover = game.current_player();

            let banked = game.play(pit.number()).unwrap();
            assert_eq!(game.board().total_stones(), TOTAL_STONES, "seed {seed}");
            assert_eq!(
                banked,
                game.history().back().unwrap().banked,
                "seed {seed}"
            );
            assert_eq!(game.history().back().unwrap().player, mover);
        }

        if game.is_game_over() {
            assert_eq!(game.board().pit_counts(), [0; 12], "seed {seed}");
            let one = game.store_count_of(PlayerId::One);
            let two = game.store_count_of(PlayerId::Two);
            assert_eq!(one + two, TOTAL_STONES);
            let result = game.winner().unwrap();
            for seat in PlayerId::ALL {
                let other = seat.opponent();
                assert_eq!(
                    result.is_winner(seat),
                    game.store_count_of(seat) > game.store_count_of(other),
                    "seed {seed}"
                );
            }
        }
    }
}

#[test]
fn test_random_kalah_playouts() {
    random_playouts(RuleSet::Kalah, 200, 500);
}

#[test]
fn test_random_ayo_playouts() {
    random_playouts(RuleSet::Ayo, 200, 500);
}
