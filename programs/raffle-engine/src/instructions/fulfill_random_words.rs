use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    payout::VaultPayout,
    state::{Raffle, RandomnessRequest, Vault, VrfCoordinator, VAULT_ACCOUNT_SIZE},
    vrf::expand_random_words,
};

/// Event emitted when the coordinator delivers randomness for a request
#[event]
pub struct RandomWordsFulfilled {
    pub request_id: u64,
    pub consumer: Pubkey,
}

/// Event emitted when a round is completed and the prize paid
#[event]
pub struct WinnerPicked {
    pub raffle: Pubkey,
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub prize: u64,
    pub request_id: u64,
    /// Number of the round that just completed, starting at 1
    pub round: u64,
}

/// Delivers the oracle's randomness for `request_id` and completes the draw.
///
/// Only the coordinator's oracle may sign this instruction. The oracle
/// computes the winner off-chain from the same randomness and passes the
/// winner's account; the payout is refused if it does not match the entrant
/// actually drawn.
///
/// # Arguments
/// * `request_id` - Id returned when the draw was started
/// * `randomness` - 32-byte oracle output, expanded into the requested words
///
/// # Errors
/// - `NotRandomnessOracle` if the signer is not the coordinator's oracle
/// - Anchor's `AccountNotInitialized` if `request_id` was never issued or was
///   already fulfilled, since its request account does not exist
/// - `UnknownRequest` if the request does not belong to this raffle or is not
///   the one it is waiting on
/// - `RequestNotConfirmed` if the request's confirmation depth has not passed
/// - `PayoutFailed` if the prize could not be moved to the winner
///
/// After execution:
/// - The raffle is Open with an empty round and the prize has moved
/// - The request account is closed and its rent returned to the requester
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    randomness: [u8; 32],
) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();
    let request = &ctx.accounts.request;

    require_keys_eq!(request.consumer, raffle_key, RaffleError::UnknownRequest);
    if !request.is_confirmed(clock.slot) {
        msg!(
            "Request {} made at slot {} needs {} confirmations, current slot {}",
            request_id,
            request.request_slot,
            request.config.request_confirmations,
            clock.slot
        );
        return err!(RaffleError::RequestNotConfirmed);
    }

    let random_words = expand_random_words(&randomness, request.config.num_words);

    let vault = ctx.accounts.vault.to_account_info();
    let winner = ctx.accounts.winner.to_account_info();
    let mut payout = VaultPayout {
        vault: &vault,
        winner: &winner,
        reserve: Rent::get()?.minimum_balance(VAULT_ACCOUNT_SIZE),
    };

    let draw = ctx.accounts.raffle.fulfill_random_words(
        request_id,
        &random_words,
        clock.unix_timestamp,
        &mut payout,
    )?;

    msg!(
        "Round {} of raffle {}: entrant {} ({}) won {} lamports",
        draw.round,
        raffle_key,
        draw.winner_index,
        draw.winner,
        draw.prize
    );

    emit!(RandomWordsFulfilled {
        request_id,
        consumer: raffle_key,
    });

    emit!(WinnerPicked {
        raffle: raffle_key,
        winner: draw.winner,
        prize: draw.prize,
        request_id,
        round: draw.round,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillRandomWords<'info> {
    #[account(
        seeds = [b"coordinator"],
        bump = coordinator.bump,
        has_one = oracle @ RaffleError::NotRandomnessOracle,
    )]
    pub coordinator: Account<'info, VrfCoordinator>,

    pub oracle: Signer<'info>,

    /// Closed on success, so the same request can never be fulfilled twice
    #[account(
        mut,
        seeds = [
            b"request",
            request_id.to_le_bytes().as_ref(),
        ],
        bump = request.bump,
        close = requester,
    )]
    pub request: Account<'info, RandomnessRequest>,

    #[account(
        mut,
        seeds = [
            b"raffle",
            raffle.authority.as_ref(),
            raffle.nonce.to_le_bytes().as_ref(),
        ],
        bump = raffle.bump,
        has_one = coordinator @ RaffleError::InvalidCoordinator,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            b"vault",
            raffle.key().as_ref(),
        ],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: Compared against the drawn entrant before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// Receives the rent of the closed request account
    #[account(
        mut,
        address = request.requester,
    )]
    pub requester: SystemAccount<'info>,
}
