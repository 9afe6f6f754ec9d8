use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::board::{self, Cell};
use crate::TicTacToeError;

// ═══════════════════════════════════════════════════════════════════════════════
//  Lifecycle
// ═══════════════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GameStatus {
    Invited = 0,
    Started = 1,
    Ended = 2,
}

impl GameStatus {
    /// The only legal edges are Invited → Started and Started → Ended.
    pub fn transition(self, to: GameStatus) -> Result<GameStatus, TicTacToeError> {
        match (self, to) {
            (GameStatus::Invited, GameStatus::Started) | (GameStatus::Started, GameStatus::Ended) => {
                Ok(to)
            }
            _ => Err(TicTacToeError::IllegalTransition),
        }
    }
}

/// Pending invitation for a pair, pointing at the game created with it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invite {
    pub invitee: Address,
    pub sequence: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// Inviter; always moves first.
    pub player1: Address,
    pub player2: Address,
    pub status: GameStatus,
    pub board: Vec<Cell>,
    pub moves: u32,
    pub winner: Option<Address>,
}

/// Result of an accepted tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    Continue,
    Won(Address),
    Drawn,
}

impl Game {
    /// A fresh game always starts out as an invitation.
    pub fn invited(env: &Env, inviter: Address, invitee: Address) -> Self {
        Game {
            player1: inviter,
            player2: invitee,
            status: GameStatus::Invited,
            board: board::empty(env),
            moves: 0,
            winner: None,
        }
    }

    pub fn start(&mut self) -> Result<(), TicTacToeError> {
        self.status = self.status.transition(GameStatus::Started)?;
        Ok(())
    }

    /// Mark placed by `player`, or `InvalidPlayer` for an outsider.
    pub fn mark_of(&self, player: &Address) -> Result<Cell, TicTacToeError> {
        if *player == self.player1 {
            Ok(Cell::Player1)
        } else if *player == self.player2 {
            Ok(Cell::Player2)
        } else {
            Err(TicTacToeError::InvalidPlayer)
        }
    }

    fn player_for(&self, mark: Cell) -> Option<Address> {
        match mark {
            Cell::Player1 => Some(self.player1.clone()),
            Cell::Player2 => Some(self.player2.clone()),
            Cell::Empty => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Move engine
// ═══════════════════════════════════════════════════════════════════════════════

/// A game that is currently accepting moves.
///
/// Only a `Started` game can be wrapped, so invited and ended games have no
/// path to board mutation.
pub struct InPlay {
    game: Game,
}

impl InPlay {
    pub fn enter(game: Game) -> Result<Self, TicTacToeError> {
        match game.status {
            GameStatus::Started => Ok(InPlay { game }),
            GameStatus::Ended => Err(TicTacToeError::GameOver),
            GameStatus::Invited => Err(TicTacToeError::GameNotStarted),
        }
    }

    /// Mark whose turn it is: player1 on even move counts, player2 on odd.
    pub fn turn(&self) -> Cell {
        if self.game.moves % 2 == 0 {
            Cell::Player1
        } else {
            Cell::Player2
        }
    }

    /// Validates and applies one move. A rejected move leaves the game untouched.
    pub fn place(&mut self, mark: Cell, x: u32, y: u32) -> Result<TickOutcome, TicTacToeError> {
        if mark != self.turn() {
            return Err(TicTacToeError::NotPlayerTurn);
        }
        let idx = board::index(x, y).ok_or(TicTacToeError::InvalidTick)?;
        if self.game.board.get(idx).unwrap_or(Cell::Empty) != Cell::Empty {
            return Err(TicTacToeError::DuplicateTick);
        }

        self.game.board.set(idx, mark);
        self.game.moves += 1;

        let cells = board::snapshot(&self.game.board);
        if let Some(winner) = board::evaluate(&cells).and_then(|m| self.game.player_for(m)) {
            self.finish(Some(winner.clone()))?;
            return Ok(TickOutcome::Won(winner));
        }
        if board::is_full(&cells) {
            self.finish(None)?;
            return Ok(TickOutcome::Drawn);
        }
        Ok(TickOutcome::Continue)
    }

    fn finish(&mut self, winner: Option<Address>) -> Result<(), TicTacToeError> {
        self.game.status = self.game.status.transition(GameStatus::Ended)?;
        self.game.winner = winner;
        Ok(())
    }

    pub fn into_game(self) -> Game {
        self.game
    }
}
