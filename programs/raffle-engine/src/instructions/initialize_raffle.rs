use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Vault, VrfCoordinator, RAFFLE_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE},
    vrf::RandomnessConfig,
};

// Constants for validation
const MIN_INTERVAL: i64 = 30; // 30 seconds
const MAX_INTERVAL: i64 = 30 * 24 * 60 * 60; // 30 days in seconds
const MAX_NUM_WORDS: u32 = 10;
const MAX_REQUEST_CONFIRMATIONS: u16 = 200;
const MIN_CALLBACK_COMPUTE_LIMIT: u32 = 10_000;
const MAX_CALLBACK_COMPUTE_LIMIT: u32 = 1_400_000;

/// Settings fixed for the lifetime of a raffle
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeRaffleParams {
    /// Minimum lamports accepted per entry
    pub entry_fee: u64,
    /// Seconds between draws
    pub interval: i64,
    /// Passed through to the randomness oracle on every request
    pub randomness_config: RandomnessConfig,
}

impl InitializeRaffleParams {
    /// `min_entry_fee` is the rent-exempt minimum of an empty account. Every
    /// prize is at least one entry fee, so a winner whose wallet was drained
    /// to zero can still receive it.
    pub fn validate(&self, min_entry_fee: u64) -> Result<()> {
        require!(
            self.entry_fee > 0 && self.entry_fee >= min_entry_fee,
            RaffleError::EntryFeeTooLow
        );
        require!(self.interval >= MIN_INTERVAL, RaffleError::IntervalTooShort);
        require!(self.interval <= MAX_INTERVAL, RaffleError::IntervalTooLong);

        let config = &self.randomness_config;
        require!(
            config.num_words > 0 && config.num_words <= MAX_NUM_WORDS,
            RaffleError::InvalidNumWords
        );
        require!(
            config.request_confirmations <= MAX_REQUEST_CONFIRMATIONS,
            RaffleError::InvalidRequestConfirmations
        );
        require!(
            (MIN_CALLBACK_COMPUTE_LIMIT..=MAX_CALLBACK_COMPUTE_LIMIT)
                .contains(&config.callback_compute_limit),
            RaffleError::InvalidCallbackComputeLimit
        );

        Ok(())
    }
}

/// Event emitted when a raffle is created
#[event]
pub struct RaffleInitialized {
    pub raffle: Pubkey,
    pub authority: Pubkey,
    pub coordinator: Pubkey,
    pub entry_fee: u64,
    pub interval: i64,
    pub creation_time: i64,
}

/// Instruction to create a new raffle engine
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `nonce` - Distinguishes raffles created by the same authority
/// * `params` - Entry fee, draw interval and randomness request settings
///
/// # Security Considerations
/// 1. Validates every parameter against fixed bounds before any state is written
///    and keeps the entry fee at or above the rent-exempt minimum of a wallet
/// 2. Binds the raffle to the coordinator PDA so only its oracle can fulfill draws
/// 3. Creates a program-owned vault PDA that holds the pool
///
/// # Implementation Notes
/// - Initializes the raffle in Open state
/// - The first draw interval is measured from the creation time
pub fn initialize_raffle(
    ctx: Context<InitializeRaffle>,
    nonce: u64,
    params: InitializeRaffleParams,
) -> Result<()> {
    params.validate(Rent::get()?.minimum_balance(0))?;

    let current_time = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();

    let mut raffle = Raffle::new(
        ctx.accounts.authority.key(),
        ctx.accounts.coordinator.key(),
        nonce,
        params.entry_fee,
        params.interval,
        params.randomness_config,
        current_time,
    );
    raffle.bump = ctx.bumps.raffle;
    raffle.vault_bump = ctx.bumps.vault;
    ctx.accounts.raffle.set_inner(raffle);

    ctx.accounts.vault.set_inner(Vault {
        raffle: raffle_key,
        bump: ctx.bumps.vault,
    });

    msg!(
        "Raffle {} initialized: entry fee {} lamports, interval {}s",
        raffle_key,
        params.entry_fee,
        params.interval
    );

    emit!(RaffleInitialized {
        raffle: raffle_key,
        authority: ctx.accounts.authority.key(),
        coordinator: ctx.accounts.coordinator.key(),
        entry_fee: params.entry_fee,
        interval: params.interval,
        creation_time: current_time,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct InitializeRaffle<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"coordinator"],
        bump = coordinator.bump,
    )]
    pub coordinator: Account<'info, VrfCoordinator>,

    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            b"raffle",
            authority.key().as_ref(),
            nonce.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = authority,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [
            b"vault",
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}
