#![no_std]

//! # Tic-Tac-Toe
//!
//! A two-player 3×3 game played between pairs of addresses.
//!
//! ## Game flow
//! 1. The inviter calls `create_game(inviter, invitee)`. A game record is created in the
//!    `Invited` state and an invite is parked under the pair's id. Only one
//!    invite can be pending per pair, whichever side sends it.
//! 2. The invitee calls `accept_invite(pair_id, invitee)`. The game moves to `Started`
//!    and the invite is consumed, freeing the pair for another invitation.
//! 3. Players alternate `tick(game_id, player, x, y)` with 1-based coordinates. The
//!    inviter always moves first.
//! 4. Completing a row, column or diagonal ends the game with a winner. A full
//!    board without a line ends it as a draw.
//!
//! ## Identifiers
//! Pair and game ids are keccak256 digests that clients can compute on their
//! own; `get_pair_id` and `get_game_id` expose the same
//! derivation as read-only calls.
//!
//! Every entry point checks all of its preconditions before the first storage
//! write, so a rejected call leaves no trace.

mod board;
mod events;
mod game;
mod pair;
mod storage;

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, BytesN, Env};

pub use board::{Cell, BOARD_SIZE, CELL_COUNT};
pub use game::{Game, GameStatus, Invite};

use events::{EvGameCreated, EvGameDrawn, EvGameEnded, EvGameStarted};
use game::{InPlay, TickOutcome};

// ═══════════════════════════════════════════════════════════════════════════════
//  Errors
// ═══════════════════════════════════════════════════════════════════════════════

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TicTacToeError {
    InvalidPlayer = 1,
    NotPlayerTurn = 2,
    InvalidTick = 3,
    DuplicateTick = 4,
    GameOver = 5,
    AlreadyInvited = 6,
    NotInvited = 7,
    SelfInvite = 8,
    GameNotStarted = 9,
    GameNotFound = 10,
    AdminNotSet = 11,
    IllegalTransition = 12,
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Contract
// ═══════════════════════════════════════════════════════════════════════════════

#[contract]
pub struct TicTacToeContract;

#[contractimpl]
impl TicTacToeContract {
    pub fn __constructor(env: Env, admin: Address) {
        storage::write_admin(&env, &admin);
        storage::write_nonce(&env, 0);
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Invites
    // ───────────────────────────────────────────────────────────────────────────

    /// Invite `invitee` to a new game. The caller becomes player 1 and moves
    /// first. Returns the new game's id.
    pub fn create_game(
        env: Env,
        inviter: Address,
        invitee: Address,
    ) -> Result<BytesN<32>, TicTacToeError> {
        inviter.require_auth();

        if inviter == invitee {
            return Err(TicTacToeError::SelfInvite);
        }

        let pair_id = pair::pair_id(&env, &inviter, &invitee);
        if storage::has_invite(&env, &pair_id) {
            return Err(TicTacToeError::AlreadyInvited);
        }

        let seq = storage::read_sequence(&env, &pair_id);
        let game_id = pair::game_id(&env, &pair_id, seq);
        let game = Game::invited(&env, inviter.clone(), invitee.clone());

        storage::write_game(&env, &game_id, &game);
        storage::write_invite(
            &env,
            &pair_id,
            &Invite {
                invitee: invitee.clone(),
                sequence: seq,
            },
        );
        storage::write_sequence(&env, &pair_id, seq + 1);
        let nonce = storage::read_nonce(&env) + 1;
        storage::write_nonce(&env, nonce);

        log!(&env, "game created: seq, nonce", seq, nonce);

        EvGameCreated {
            game_id: game_id.clone(),
            inviter,
            invitee,
        }.publish(&env);

        Ok(game_id)
    }

    /// Accept the pending invite for `pair_id`. Only the invited address may
    /// accept; anyone else (or any call with no invite pending) gets
    /// `NotInvited`.
    pub fn accept_invite(
        env: Env,
        pair_id: BytesN<32>,
        invitee: Address,
    ) -> Result<BytesN<32>, TicTacToeError> {
        invitee.require_auth();

        let invite = storage::read_invite(&env, &pair_id)
            .filter(|invite| invite.invitee == invitee)
            .ok_or(TicTacToeError::NotInvited)?;

        let game_id = pair::game_id(&env, &pair_id, invite.sequence);
        let mut game = storage::read_game(&env, &game_id).ok_or(TicTacToeError::GameNotFound)?;
        game.start()?;

        storage::write_game(&env, &game_id, &game);
        storage::remove_invite(&env, &pair_id);

        log!(&env, "invite accepted: seq", invite.sequence);

        EvGameStarted {
            game_id: game_id.clone(),
        }.publish(&env);

        Ok(game_id)
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Moves
    // ───────────────────────────────────────────────────────────────────────────

    /// Place the caller's mark at `(x, y)`, both in `1..=3`.
    ///
    /// Checks run in a fixed order and the first failure wins: membership
    /// (`InvalidPlayer`), game status (`GameOver` / `GameNotStarted`), turn
    /// (`NotPlayerTurn`), bounds (`InvalidTick`), occupancy (`DuplicateTick`).
    pub fn tick(
        env: Env,
        game_id: BytesN<32>,
        player: Address,
        x: u32,
        y: u32,
    ) -> Result<(), TicTacToeError> {
        player.require_auth();

        let game = storage::read_game(&env, &game_id).ok_or(TicTacToeError::InvalidPlayer)?;
        let mark = game.mark_of(&player)?;

        let mut in_play = InPlay::enter(game)?;
        let outcome = in_play.place(mark, x, y)?;
        let game = in_play.into_game();

        storage::write_game(&env, &game_id, &game);

        log!(&env, "tick applied: x, y, moves", x, y, game.moves);

        match outcome {
            TickOutcome::Continue => {}
            TickOutcome::Won(winner) => {
                log!(&env, "game won: moves", game.moves);
                EvGameEnded { game_id, winner }.publish(&env);
            }
            TickOutcome::Drawn => {
                log!(&env, "game drawn");
                EvGameDrawn { game_id }.publish(&env);
            }
        }
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Read
    // ───────────────────────────────────────────────────────────────────────────

    /// Total number of games ever created.
    pub fn nonce(env: Env) -> u64 {
        storage::read_nonce(&env)
    }

    pub fn get_pair_id(env: Env, a: Address, b: Address) -> BytesN<32> {
        pair::pair_id(&env, &a, &b)
    }

    pub fn get_game_id(env: Env, pair_id: BytesN<32>, seq: u32) -> BytesN<32> {
        pair::game_id(&env, &pair_id, seq)
    }

    pub fn get_game(env: Env, game_id: BytesN<32>) -> Result<Game, TicTacToeError> {
        storage::read_game(&env, &game_id).ok_or(TicTacToeError::GameNotFound)
    }

    /// Pending invite for a pair, if any.
    pub fn get_invite(env: Env, pair_id: BytesN<32>) -> Option<Invite> {
        storage::read_invite(&env, &pair_id)
    }

    /// Sequence number the pair's next game will be created with.
    pub fn get_sequence(env: Env, pair_id: BytesN<32>) -> u32 {
        storage::read_sequence(&env, &pair_id)
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Admin
    // ───────────────────────────────────────────────────────────────────────────

    pub fn get_admin(env: Env) -> Result<Address, TicTacToeError> {
        storage::load_admin(&env)
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), TicTacToeError> {
        let admin = storage::load_admin(&env)?;
        admin.require_auth();
        storage::write_admin(&env, &new_admin);
        Ok(())
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), TicTacToeError> {
        let admin = storage::load_admin(&env)?;
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
