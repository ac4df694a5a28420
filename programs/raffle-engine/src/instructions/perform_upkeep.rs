use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RandomnessRequest, VrfCoordinator, RANDOMNESS_REQUEST_ACCOUNT_SIZE},
    vrf::CoordinatorClient,
};

/// Event emitted when a draw starts and randomness has been requested
#[event]
pub struct UpkeepRequested {
    pub raffle: Pubkey,
    pub request_id: u64,
    /// Entries frozen into this draw
    pub entrant_count: u64,
    pub pool: u64,
}

/// Instruction to start a draw once the raffle is eligible
///
/// Anyone may call this; the automation trigger normally does so after
/// `check_upkeep` reports true. Eligibility is evaluated again here.
///
/// # Errors
/// - `UpkeepNotNeeded` if the raffle is not open, its interval has not
///   passed, or it holds no entrants or pool
/// - `InvalidCoordinator` if the coordinator is not the one bound to the raffle
///
/// After execution:
/// - The raffle is in Calculating state and rejects entries
/// - A `RandomnessRequest` account exists for the new request id
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let request_bump = ctx.bumps.request;
    let accounts = &mut *ctx.accounts;
    let raffle_key = accounts.raffle.key();

    let mut client = CoordinatorClient {
        coordinator: &mut accounts.coordinator,
        request: &mut accounts.request,
        consumer: raffle_key,
        requester: accounts.caller.key(),
        slot: clock.slot,
        bump: request_bump,
    };

    let request_id = accounts
        .raffle
        .perform_upkeep(&raffle_key, clock.unix_timestamp, &mut client)?;

    msg!("Raffle {} calculating, waiting on request {}", raffle_key, request_id);

    emit!(UpkeepRequested {
        raffle: raffle_key,
        request_id,
        entrant_count: accounts.raffle.number_of_players(),
        pool: accounts.raffle.pool,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
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
        seeds = [b"coordinator"],
        bump = coordinator.bump,
    )]
    pub coordinator: Account<'info, VrfCoordinator>,

    /// Record of the new request, at the PDA of the coordinator's next id
    #[account(
        init,
        payer = caller,
        space = RANDOMNESS_REQUEST_ACCOUNT_SIZE,
        seeds = [
            b"request",
            coordinator.upcoming_request_id()?.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub request: Account<'info, RandomnessRequest>,

    /// Pays the rent of the request account; refunded when it is fulfilled
    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}
