//! Session-level tests: move validation, the end-game sweep, scoring, and
//! player bookkeeping for both rule sets.

use mancala_engine::{
    Board, GameConfig, GameError, GameResult, MancalaGame, MoveRecord, Player, PlayerId, RuleSet,
};

fn new_game(rule_set: RuleSet) -> MancalaGame {
    let mut game = MancalaGame::new(GameConfig::new(rule_set));
    game.register_players(Player::new("Ada"), Player::new("Grace"))
        .expect("valid players");
    game
}

fn with_layout(rule_set: RuleSet, pits: [u32; 12], stores: [u32; 2]) -> MancalaGame {
    let mut game = new_game(rule_set);
    *game.board_mut() = Board::from_layout(pits, stores);
    game
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_ownership_guard_both_variants() {
    for rule_set in [RuleSet::Kalah, RuleSet::Ayo] {
        let mut game = with_layout(rule_set, [0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3], [6, 6]);
        let before = game.board().clone();

        for pit in [0, 1, 7, 12, 13, 100] {
            assert_eq!(
                game.play(pit),
                Err(GameError::InvalidMove { pit, player: PlayerId::One }),
                "{rule_set}: pit {pit}"
            );
        }
        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), PlayerId::One);

        game.set_current_player(PlayerId::Two);
        assert_eq!(
            game.play(6),
            Err(GameError::InvalidMove { pit: 6, player: PlayerId::Two })
        );
        assert!(game.play(7).is_ok());
    }
}

#[test]
fn test_num_stones_out_of_range() {
    let game = new_game(RuleSet::Kalah);

    assert_eq!(game.num_stones(0), Err(GameError::OutOfRange(0)));
    assert_eq!(game.num_stones(13), Err(GameError::OutOfRange(13)));
    assert_eq!(game.num_stones(12), Ok(4));
}

#[test]
fn test_legal_moves_follow_current_player() {
    let mut game = with_layout(RuleSet::Kalah, [0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 3], [0, 0]);

    let moves: Vec<usize> = game.legal_moves().iter().map(|p| p.number()).collect();
    assert_eq!(moves, vec![2, 4]);

    game.set_current_player(PlayerId::Two);
    let moves: Vec<usize> = game.legal_moves().iter().map(|p| p.number()).collect();
    assert_eq!(moves, vec![7, 12]);
}

// =============================================================================
// End of game
// =============================================================================

#[test]
fn test_empty_side_sweeps_other_side() {
    for rule_set in [RuleSet::Kalah, RuleSet::Ayo] {
        let mut game = with_layout(rule_set, [0, 0, 0, 0, 0, 0, 2, 0, 3, 0, 0, 1], [20, 22]);

        assert!(game.is_game_over());
        assert_eq!(game.store_count_of(PlayerId::One), 20);
        assert_eq!(game.store_count_of(PlayerId::Two), 28);
        assert_eq!(game.board().pit_counts(), [0; 12]);
        assert_eq!(game.board().total_stones(), 48);

        // Asking again changes nothing
        assert!(game.is_game_over());
        assert_eq!(game.store_count_of(PlayerId::Two), 28);
        assert_eq!(game.winner(), Ok(GameResult::Winner(PlayerId::Two)));
    }
}

#[test]
fn test_player_two_side_empty() {
    let mut game = with_layout(RuleSet::Kalah, [1, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0], [25, 18]);

    assert!(game.is_game_over());
    assert_eq!(game.store_count_of(PlayerId::One), 30);
    assert_eq!(game.store_count_of(PlayerId::Two), 18);
    assert_eq!(game.winning_player().unwrap().map(Player::name), Some("Ada"));
}

#[test]
fn test_winner_before_end() {
    let mut game = new_game(RuleSet::Ayo);

    assert!(!game.is_game_over());
    assert_eq!(game.winner(), Err(GameError::GameNotOver));
    assert_eq!(game.board().total_stones(), 48);
}

#[test]
fn test_tie() {
    let mut game = with_layout(RuleSet::Kalah, [0; 12], [24, 24]);

    assert_eq!(game.winner(), Ok(GameResult::Tie));
    assert_eq!(game.winning_player(), Ok(None));
}

#[test]
fn test_move_that_empties_side_ends_game() {
    // Player 1's last stone leaves their side
    let mut game = with_layout(RuleSet::Kalah, [0, 0, 0, 0, 0, 2, 1, 1, 1, 1, 1, 1], [10, 30]);

    assert!(!game.is_game_over());
    game.play(6).unwrap();

    assert!(game.is_game_over());
    assert_eq!(game.store_count_of(PlayerId::One), 11);
    assert_eq!(game.store_count_of(PlayerId::Two), 37);
    assert_eq!(game.winner(), Ok(GameResult::Winner(PlayerId::Two)));
}

// =============================================================================
// Players
// =============================================================================

#[test]
fn test_registration_resets_game() {
    let mut game = new_game(RuleSet::Kalah);
    game.play(1).unwrap();
    assert_eq!(game.history().len(), 1);

    game.register_players(Player::new("Barbara"), Player::new("Edsger"))
        .unwrap();

    assert!(game.history().is_empty());
    assert_eq!(game.turn_number(), 1);
    assert_eq!(game.board().pit_counts(), [4; 12]);
    assert_eq!(game.player(PlayerId::Two).map(Player::name), Some("Edsger"));
    assert_eq!(
        game.store_count(&Player::new("Ada")),
        Err(GameError::NoSuchPlayer("Ada".to_string()))
    );
}

#[test]
fn test_start_new_game_keeps_players() {
    let mut game = new_game(RuleSet::Ayo);
    game.play(2).unwrap();

    game.start_new_game();

    assert_eq!(game.board().pit_counts(), [4; 12]);
    assert_eq!(game.store_count_of(PlayerId::One), 0);
    assert_eq!(game.current_player(), PlayerId::One);
    assert_eq!(game.player(PlayerId::One).map(Player::name), Some("Ada"));
}

#[test]
fn test_first_player_from_config() {
    let config = GameConfig::new(RuleSet::Kalah).with_first_player(PlayerId::Two);
    let mut game = MancalaGame::new(config);
    game.register_players(Player::new("Ada"), Player::new("Grace"))
        .unwrap();

    assert_eq!(game.current_player(), PlayerId::Two);
    assert_eq!(
        game.play(1),
        Err(GameError::InvalidMove { pit: 1, player: PlayerId::Two })
    );
    // 9 -> 10, 11, 12, S2
    assert_eq!(game.play(9), Ok(1));
    assert_eq!(game.current_player(), PlayerId::Two);
}

// =============================================================================
// History and serialization
// =============================================================================

#[test]
fn test_history_records_turns() {
    let mut game = new_game(RuleSet::Kalah);
    game.play(3).unwrap(); // free turn
    game.play(1).unwrap();
    game.play(8).unwrap();

    let turns: Vec<(PlayerId, usize, u32)> = game
        .history()
        .iter()
        .map(|r| (r.player, r.pit.number(), r.turn))
        .collect();
    assert_eq!(
        turns,
        vec![(PlayerId::One, 3, 1), (PlayerId::One, 1, 1), (PlayerId::Two, 8, 2)]
    );
    assert_eq!(game.turn_number(), 3);
}

#[test]
fn test_board_and_history_serialize() {
    let mut game = new_game(RuleSet::Kalah);
    game.play(3).unwrap();

    let json = serde_json::to_string(game.board()).unwrap();
    let board: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(&board, game.board());

    let record = game.history().back().unwrap().clone();
    let json = serde_json::to_string(&record).unwrap();
    let decoded: MoveRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, record);
    assert!(decoded.distribution.free_turn);
}

#[test]
fn test_saved_game_resumes() {
    let mut game = new_game(RuleSet::Ayo);
    game.play(2).unwrap();
    game.play(7).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: MancalaGame = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.rule_set(), RuleSet::Ayo);
    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.history(), game.history());
    assert_eq!(restored.turn_number(), game.turn_number());
    assert_eq!(restored.current_player(), PlayerId::One);
    assert_eq!(restored.player(PlayerId::Two).map(Player::name), Some("Grace"));

    let pit = restored.legal_moves()[0].number();
    assert_eq!(restored.play(pit), game.play(pit));
    assert_eq!(restored.board(), game.board());
}

#[test]
fn test_display_shows_board() {
    let game = new_game(RuleSet::Kalah);
    let text = game.to_string();

    assert!(text.contains("P12"));
    assert!(text.contains("S1"));
    assert_eq!(text.lines().count(), 7);
}
