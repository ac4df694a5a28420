use anchor_lang::prelude::*;

use crate::state::{Raffle, RaffleState};

// Read-only accessors. Each returns its value through the transaction's
// return data so clients can simulate them instead of decoding the account.

pub fn get_entrance_fee(ctx: Context<ViewRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.entry_fee)
}

pub fn get_number_of_players(ctx: Context<ViewRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.number_of_players())
}

pub fn get_player(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

/// `None` until the first round has been drawn.
pub fn get_recent_winner(ctx: Context<ViewRaffle>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.raffle.recent_winner)
}

pub fn get_raffle_state(ctx: Context<ViewRaffle>) -> Result<RaffleState> {
    Ok(ctx.accounts.raffle.state)
}

/// Timestamp of the last completed draw, or of creation before the first one.
pub fn get_latest_timestamp(ctx: Context<ViewRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.last_draw_timestamp)
}

pub fn get_interval(ctx: Context<ViewRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.interval)
}

pub fn get_num_words(ctx: Context<ViewRaffle>) -> Result<u32> {
    Ok(ctx.accounts.raffle.randomness_config.num_words)
}

pub fn get_request_confirmations(ctx: Context<ViewRaffle>) -> Result<u16> {
    Ok(ctx.accounts.raffle.randomness_config.request_confirmations)
}

#[derive(Accounts)]
pub struct ViewRaffle<'info> {
    pub raffle: Account<'info, Raffle>,
}
