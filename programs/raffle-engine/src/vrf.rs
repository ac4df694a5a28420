use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use arrayref::array_ref;

use crate::state::{RandomnessRequest, VrfCoordinator};

// 32 key_hash + 4 num_words + 2 request_confirmations + 4 callback_compute_limit
pub const RANDOMNESS_CONFIG_SIZE: usize = 32 + 4 + 2 + 4;

/// Request parameters handed to the randomness oracle unchanged.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomnessConfig {
    /// Identifies the oracle key lane that should serve the request
    pub key_hash: [u8; 32],
    /// Number of random words delivered per fulfillment
    pub num_words: u32,
    /// Slots the oracle must wait after the request before fulfilling
    pub request_confirmations: u16,
    /// Compute budget the oracle should attach to the fulfillment transaction
    pub callback_compute_limit: u32,
}

/// Event emitted when a randomness request is registered with the coordinator
#[event]
pub struct RandomWordsRequested {
    pub request_id: u64,
    /// The raffle that will receive the fulfillment
    pub consumer: Pubkey,
    pub seed: [u8; 32],
    pub key_hash: [u8; 32],
    pub num_words: u32,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub request_slot: u64,
}

/// Source of verifiable randomness.
///
/// A request returns immediately with an identifier; the random words arrive
/// later, in a separate transaction, through the raffle's fulfillment
/// instruction carrying that same identifier.
pub trait RandomnessClient {
    fn request_random_words(&mut self, config: &RandomnessConfig, seed: [u8; 32]) -> Result<u64>;
}

/// Seed for a raffle's randomness request. Distinct per raffle and per round.
pub fn request_seed(raffle: &Pubkey, round: u64) -> [u8; 32] {
    hashv(&[raffle.as_ref(), &round.to_le_bytes()]).to_bytes()
}

/// Expands a single 32-byte oracle output into `num_words` 64-bit words.
///
/// Word `i` is the first eight little-endian bytes of `sha256(randomness || i)`.
pub fn expand_random_words(randomness: &[u8; 32], num_words: u32) -> Vec<u64> {
    (0..num_words)
        .map(|i| {
            let digest = hashv(&[&randomness[..], &i.to_le_bytes()]).to_bytes();
            u64::from_le_bytes(*array_ref![digest, 0, 8])
        })
        .collect()
}

/// On-chain [`RandomnessClient`] backed by the program's VRF coordinator.
///
/// The request account must already be allocated at the PDA derived from the
/// coordinator's next request id.
pub struct CoordinatorClient<'a, 'info> {
    pub coordinator: &'a mut Account<'info, VrfCoordinator>,
    pub request: &'a mut Account<'info, RandomnessRequest>,
    pub consumer: Pubkey,
    pub requester: Pubkey,
    pub slot: u64,
    pub bump: u8,
}

impl RandomnessClient for CoordinatorClient<'_, '_> {
    fn request_random_words(&mut self, config: &RandomnessConfig, seed: [u8; 32]) -> Result<u64> {
        let request_id = self.coordinator.next_request_id()?;

        self.request.set_inner(RandomnessRequest {
            request_id,
            consumer: self.consumer,
            requester: self.requester,
            seed,
            config: *config,
            request_slot: self.slot,
            bump: self.bump,
        });

        msg!(
            "Randomness request {} registered for {} ({} words, {} confirmations)",
            request_id,
            self.consumer,
            config.num_words,
            config.request_confirmations
        );

        emit!(RandomWordsRequested {
            request_id,
            consumer: self.consumer,
            seed,
            key_hash: config.key_hash,
            num_words: config.num_words,
            request_confirmations: config.request_confirmations,
            callback_compute_limit: config.callback_compute_limit,
            request_slot: self.slot,
        });

        Ok(request_id)
    }
}
