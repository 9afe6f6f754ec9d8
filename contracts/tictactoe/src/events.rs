use soroban_sdk::{contractevent, Address, BytesN};

#[contractevent]
pub struct EvGameCreated {
    pub game_id: BytesN<32>,
    pub inviter: Address,
    pub invitee: Address,
}

#[contractevent]
pub struct EvGameStarted {
    pub game_id: BytesN<32>,
}

/// Emitted only when a line is completed.
#[contractevent]
pub struct EvGameEnded {
    pub game_id: BytesN<32>,
    pub winner: Address,
}

/// Emitted when the ninth move fills the board without a line.
#[contractevent]
pub struct EvGameDrawn {
    pub game_id: BytesN<32>,
}
