//! Pair and game identifiers.
//!
//! Both derivations are pure functions of their inputs so that any client can
//! predict the identifiers before submitting a transaction:
//!
//! ```text
//! pair_id = keccak256(lo || hi)            lo <= hi by Address ordering
//! game_id = keccak256(pair_id || seq_be4)
//! ```
//!
//! Each address is encoded as its strkey string bytes (fixed width per
//! address kind), so the concatenation is unambiguous.

use soroban_sdk::{Address, Bytes, BytesN, Env};

/// Order-independent identifier for the pair `{a, b}`.
pub fn pair_id(env: &Env, a: &Address, b: &Address) -> BytesN<32> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut preimage = Bytes::new(env);
    preimage.append(&lo.to_string().to_bytes());
    preimage.append(&hi.to_string().to_bytes());
    env.crypto().keccak256(&preimage).into()
}

/// Identifier of the `seq`-th game created for `pair_id`.
pub fn game_id(env: &Env, pair_id: &BytesN<32>, seq: u32) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &pair_id.to_array());
    preimage.append(&Bytes::from_array(env, &seq.to_be_bytes()));
    env.crypto().keccak256(&preimage).into()
}
