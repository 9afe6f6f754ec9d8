use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::game::{Game, Invite};
use crate::TicTacToeError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    /// Total games ever created.
    Nonce,
    Game(BytesN<32>),
    Invite(BytesN<32>),
    /// Next game sequence for a pair.
    Sequence(BytesN<32>),
}

// Ledger rate is approximately 5 seconds per ledger on Stellar
const LEDGER_RATE_SECS: u32 = 5;

// Game records, invites and pair sequences stay live for 120 days after their last write
const TTL_SECONDS: u32 = 120 * 24 * 60 * 60; // 10,368,000 seconds

/// 120 * 24 * 60 * 60 / 5 = 2,073,600 ledgers
const TTL_LEDGERS: u32 = TTL_SECONDS / LEDGER_RATE_SECS;

// ─── Instance: config & counters ──────────────────────────────────────────

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn load_admin(env: &Env) -> Result<Address, TicTacToeError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TicTacToeError::AdminNotSet)
}

pub fn read_nonce(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::Nonce).unwrap_or(0)
}

pub fn write_nonce(env: &Env, nonce: u64) {
    env.storage().instance().set(&DataKey::Nonce, &nonce);
    bump_instance(env);
}

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_LEDGERS, TTL_LEDGERS);
}

// ─── Persistent: games ────────────────────────────────────────────────────

pub fn read_game(env: &Env, game_id: &BytesN<32>) -> Option<Game> {
    env.storage().persistent().get(&DataKey::Game(game_id.clone()))
}

pub fn write_game(env: &Env, game_id: &BytesN<32>, game: &Game) {
    let key = DataKey::Game(game_id.clone());
    env.storage().persistent().set(&key, game);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_LEDGERS, TTL_LEDGERS);
    bump_instance(env);
}

// ─── Persistent: per-pair bookkeeping ─────────────────────────────────────

pub fn read_invite(env: &Env, pair_id: &BytesN<32>) -> Option<Invite> {
    env.storage()
        .persistent()
        .get(&DataKey::Invite(pair_id.clone()))
}

pub fn has_invite(env: &Env, pair_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Invite(pair_id.clone()))
}

pub fn write_invite(env: &Env, pair_id: &BytesN<32>, invite: &Invite) {
    let key = DataKey::Invite(pair_id.clone());
    env.storage().persistent().set(&key, invite);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_LEDGERS, TTL_LEDGERS);
}

pub fn remove_invite(env: &Env, pair_id: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Invite(pair_id.clone()));
}

pub fn read_sequence(env: &Env, pair_id: &BytesN<32>) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Sequence(pair_id.clone()))
        .unwrap_or(0)
}

pub fn write_sequence(env: &Env, pair_id: &BytesN<32>, seq: u32) {
    let key = DataKey::Sequence(pair_id.clone());
    env.storage().persistent().set(&key, &seq);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_LEDGERS, TTL_LEDGERS);
}
