use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    vrf::{RandomnessConfig, RANDOMNESS_CONFIG_SIZE},
};

// 8 discriminator + 32 authority + 32 oracle + 8 request_counter + 1 bump
pub const COORDINATOR_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 1;

/// Singleton that issues randomness request ids and names the oracle key
/// allowed to fulfill them.
///
/// Seeds: `["coordinator"]`
#[account]
pub struct VrfCoordinator {
    pub authority: Pubkey,
    pub oracle: Pubkey,
    /// Id of the most recently issued request. Ids start at 1.
    pub request_counter: u64,
    pub bump: u8,
}

impl VrfCoordinator {
    /// Id the next request will get, without issuing it. Used to derive the
    /// request PDA before the request is made.
    pub fn upcoming_request_id(&self) -> Result<u64> {
        Ok(self
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?)
    }

    pub fn next_request_id(&mut self) -> Result<u64> {
        let request_id = self.upcoming_request_id()?;
        self.request_counter = request_id;
        Ok(request_id)
    }
}

// Space calculation:
// 8 (discriminator) +
// 8 (request_id) +
// 32 (consumer) +
// 32 (requester) +
// 32 (seed) +
// 42 (config) +
// 8 (request_slot) +
// 1 (bump)
pub const RANDOMNESS_REQUEST_ACCOUNT_SIZE: usize =
    8 + 8 + 32 + 32 + 32 + RANDOMNESS_CONFIG_SIZE + 8 + 1;

/// One outstanding randomness request. Closed when fulfilled, so a request id
/// can be served at most once.
///
/// Seeds: `["request", request_id.to_le_bytes()]`
#[account]
pub struct RandomnessRequest {
    pub request_id: u64,
    /// The raffle that receives the random words
    pub consumer: Pubkey,
    /// Paid the rent for this account and is refunded on close
    pub requester: Pubkey,
    pub seed: [u8; 32],
    pub config: RandomnessConfig,
    pub request_slot: u64,
    pub bump: u8,
}

impl RandomnessRequest {
    pub fn is_confirmed(&self, slot: u64) -> bool {
        slot >= self
            .request_slot
            .saturating_add(u64::from(self.config.request_confirmations))
    }
}
