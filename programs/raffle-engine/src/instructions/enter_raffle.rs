use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::state::{Raffle, Vault};

/// Event emitted when an entry is recorded
#[event]
pub struct EntrantRecorded {
    pub raffle: Pubkey,
    pub participant: Pubkey,
    /// Number of entries in the current round, including this one
    pub entrant_count: u64,
    /// Lamports paid for this entry
    pub value: u64,
}

/// Instruction to enter the current round of a raffle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `offered_value` - Lamports paid for the entry, at least the entrance fee
///
/// # Security Considerations
/// 1. Rejects values below the entrance fee
/// 2. Rejects entries while a draw is being calculated
/// 3. Uses checked arithmetic on the pool
/// 4. Vault PDA is derived from the raffle key
///
/// # Implementation Notes
/// - Updates state before performing external calls
/// - The entrant may appear multiple times; each entry is a separate slot
pub fn enter_raffle(ctx: Context<EnterRaffle>, offered_value: u64) -> Result<()> {
    let participant = ctx.accounts.entrant.key();
    let entrant_count = ctx.accounts.raffle.enter(participant, offered_value)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.entrant.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        offered_value,
    )?;

    emit!(EntrantRecorded {
        raffle: ctx.accounts.raffle.key(),
        participant,
        entrant_count,
        value: offered_value,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [
            b"raffle",
            raffle.authority.as_ref(),
            raffle.nonce.to_le_bytes().as_ref(),
        ],
        bump = raffle.bump,
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

    #[account(mut)]
    pub entrant: Signer<'info>,

    pub system_program: Program<'info, System>,
}
