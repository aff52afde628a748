//! A two-player game session.
//!
//! `MancalaGame` is what front-ends talk to. It registers the two players,
//! tracks whose turn it is, hands moves to the rule engine, keeps a move
//! history, and decides when the game is over and who won.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::action::MoveRecord;
use crate::core::board::{Board, PitId, PITS_PER_SIDE};
use crate::core::config::{GameConfig, RuleSet};
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::error::{GameError, Result};
use crate::rules::{GameResult, RuleEngine};

/// One game between two registered players.
///
/// ## Example
///
/// ```
/// use mancala_engine::{GameConfig, MancalaGame, Player, PlayerId, RuleSet};
///
/// let mut game = MancalaGame::new(GameConfig::new(RuleSet::Kalah));
/// game.register_players(Player::new("Ada"), Player::new("Grace")).unwrap();
///
/// // Four stones from pit 3 end in player 1's store: free turn
/// assert_eq!(game.play(3).unwrap(), 1);
/// assert_eq!(game.current_player(), PlayerId::One);
///
/// game.play(1).unwrap();
/// assert_eq!(game.current_player(), PlayerId::Two);
/// ```
///
/// The whole session serializes, so a front-end can save a game in
/// progress and resume it later.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MancalaGame {
    config: GameConfig,
    engine: RuleEngine,
    players: Option<PlayerMap<Player>>,
    turn: u32,
    history: Vector<MoveRecord>,
}

impl MancalaGame {
    /// Create a session with an empty board. Register players to start.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut engine = RuleEngine::new(config.rule_set);
        engine.set_player(config.first_player);
        Self {
            config,
            engine,
            players: None,
            turn: 1,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rule_set(&self) -> RuleSet {
        self.engine.rule_set()
    }

    // === Players ===

    /// Register both players, bind fresh stores, and set up a new board.
    ///
    /// Names must be non-blank and distinct.
    pub fn register_players(&mut self, one: Player, two: Player) -> Result<()> {
        for player in [&one, &two] {
            if player.name().trim().is_empty() {
                return Err(GameError::InvalidPlayer(player.name().to_string()));
            }
        }
        if one == two {
            return Err(GameError::InvalidPlayer(two.name().to_string()));
        }

        let mut seated = [one, two];
        for (player, seat) in seated.iter_mut().zip(PlayerId::ALL) {
            player.set_seat(seat);
        }
        let [one, two] = seated;
        info!(one = one.name(), two = two.name(), rules = %self.rule_set(), "players registered");

        self.players = Some(PlayerMap::new(|seat| match seat {
            PlayerId::One => one.clone(),
            PlayerId::Two => two.clone(),
        }));
        self.engine.register_players();
        self.restart();
        Ok(())
    }

    /// The player in a seat, if registered.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[seat])
    }

    /// Registered players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().flat_map(|players| players.iter().map(|(_, p)| p))
    }

    fn seat_of(&self, player: &Player) -> Result<PlayerId> {
        self.players
            .as_ref()
            .and_then(|players| players.iter().find(|(_, p)| *p == player).map(|(seat, _)| seat))
            .ok_or_else(|| GameError::NoSuchPlayer(player.name().to_string()))
    }

    // === Turn ===

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.engine.current_player()
    }

    pub fn set_current_player(&mut self, seat: PlayerId) {
        self.engine.set_player(seat);
    }

    /// Turn number, starting at 1 and advancing when play passes over.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Pits the current player may sow from.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[PitId; PITS_PER_SIDE]> {
        self.engine.legal_moves(self.current_player())
    }

    // === Moves ===

    /// Sow from `start_pit` for the current player.
    ///
    /// Returns the number of stones banked in the mover's store. Play passes
    /// to the opponent unless the move earned a free turn.
    pub fn play(&mut self, start_pit: usize) -> Result<u32> {
        if self.players.is_none() {
            return Err(GameError::PlayersNotRegistered);
        }
        let mover = self.current_player();
        let (pit, banked, distribution) = self.engine.execute_move(start_pit, mover)?;
        self.history.push_back(MoveRecord::new(mover, pit, banked, distribution, self.turn));

        if self.engine.take_free_turn() {
            debug!(player = %mover, "free turn");
        } else {
            self.engine.set_player(mover.opponent());
            self.turn += 1;
        }
        Ok(banked)
    }

    /// Every move made since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === End of game ===

    /// True once either side has no stones left.
    ///
    /// The first time this sees an empty side, the other side's stones are
    /// moved into that side's own store.
    pub fn is_game_over(&mut self) -> bool {
        let over = self.engine.is_side_empty(PitId::first_of(PlayerId::One))
            || self.engine.is_side_empty(PitId::first_of(PlayerId::Two));
        if over {
            debug!(
                one = self.engine.store_count(PlayerId::One),
                two = self.engine.store_count(PlayerId::Two),
                "game over"
            );
        }
        over
    }

    /// The final result, or `GameNotOver` if both sides still hold stones.
    pub fn winner(&mut self) -> Result<GameResult> {
        if !self.is_game_over() {
            return Err(GameError::GameNotOver);
        }
        Ok(GameResult::from_stores(
            self.engine.store_count(PlayerId::One),
            self.engine.store_count(PlayerId::Two),
        ))
    }

    /// The winning player, or `None` on a tie.
    pub fn winning_player(&mut self) -> Result<Option<&Player>> {
        match self.winner()? {
            GameResult::Winner(seat) => Ok(self.player(seat)),
            GameResult::Tie => Ok(None),
        }
    }

    // === Board access ===

    /// Stones in a pit, by raw pit number.
    pub fn num_stones(&self, pit: usize) -> Result<u32> {
        self.engine.num_stones(pit)
    }

    /// Stones in a registered player's store.
    pub fn store_count(&self, player: &Player) -> Result<u32> {
        Ok(self.engine.store_count(self.seat_of(player)?))
    }

    /// Stones in a seat's store.
    #[must_use]
    pub fn store_count_of(&self, seat: PlayerId) -> u32 {
        self.engine.store_count(seat)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn board_mut(&mut self) -> &mut Board {
        self.engine.board_mut()
    }

    /// Reset the board for a rematch between the registered players.
    pub fn start_new_game(&mut self) {
        self.engine.reset_board();
        self.restart();
    }

    fn restart(&mut self) {
        self.engine.set_player(self.config.first_player);
        self.turn = 1;
        self.history = Vector::new();
    }
}

impl std::fmt::Display for MancalaGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.engine)
    }
}
