use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    program::RaffleEngine,
    state::{VrfCoordinator, COORDINATOR_ACCOUNT_SIZE},
};

/// Event emitted when the VRF coordinator is created
#[event]
pub struct CoordinatorInitialized {
    pub coordinator: Pubkey,
    /// The oracle key allowed to fulfill randomness requests
    pub oracle: Pubkey,
}

/// Instruction to create the VRF coordinator singleton
/// This should be called once during program deployment
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `oracle` - Key of the off-chain oracle that signs fulfillments
///
/// # Account Validations
/// * Coordinator - New PDA initialized with seed "coordinator"
/// * Authority - Pays for the coordinator account and must be the program's
///   upgrade authority, so the oracle cannot be chosen by whoever calls first
pub fn initialize_coordinator(ctx: Context<InitializeCoordinator>, oracle: Pubkey) -> Result<()> {
    ctx.accounts.coordinator.set_inner(VrfCoordinator {
        authority: ctx.accounts.authority.key(),
        oracle,
        request_counter: 0,
        bump: ctx.bumps.coordinator,
    });

    msg!("VRF coordinator initialized with oracle {}", oracle);

    emit!(CoordinatorInitialized {
        coordinator: ctx.accounts.coordinator.key(),
        oracle,
    });

    Ok(())
}

/// False once the program has been made immutable.
pub fn is_upgrade_authority(program_data: &ProgramData, authority: &Pubkey) -> bool {
    program_data.upgrade_authority_address == Some(*authority)
}

#[derive(Accounts)]
pub struct InitializeCoordinator<'info> {
    #[account(
        init,
        payer = authority,
        space = COORDINATOR_ACCOUNT_SIZE,
        seeds = [b"coordinator"],
        bump
    )]
    pub coordinator: Account<'info, VrfCoordinator>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key())
            @ RaffleError::NotUpgradeAuthority
    )]
    pub program: Program<'info, RaffleEngine>,

    #[account(
        constraint = is_upgrade_authority(&program_data, &authority.key())
            @ RaffleError::NotUpgradeAuthority
    )]
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}
