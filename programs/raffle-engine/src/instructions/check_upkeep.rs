use anchor_lang::prelude::*;

use crate::state::Raffle;

/// Read-only eligibility check polled by the automation trigger.
///
/// Returns true when the raffle is open, its interval has passed since the
/// last draw, and it holds at least one entrant and a non-empty pool.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let status = ctx.accounts.raffle.upkeep_status(now);

    msg!(
        "Upkeep status: open {}, time passed {}, players {}, balance {}",
        status.is_open,
        status.time_passed,
        status.has_players,
        status.has_balance
    );

    Ok(status.upkeep_needed())
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    pub raffle: Account<'info, Raffle>,
}
