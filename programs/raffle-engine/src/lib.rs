use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod instructions;
pub mod payout;
pub mod state;
pub mod vrf;

use state::RaffleState;

declare_id!("6x8SqVue3ZCiG6JY7qmZ4ekwrqMi41D13KfZphgfr1cJ");

#[program]
pub mod raffle_engine {
    use super::*;

    pub fn initialize_coordinator(
        ctx: Context<InitializeCoordinator>,
        oracle: Pubkey,
    ) -> Result<()> {
        instructions::initialize_coordinator::initialize_coordinator(ctx, oracle)
    }

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        nonce: u64,
        params: InitializeRaffleParams,
    ) -> Result<()> {
        instructions::initialize_raffle::initialize_raffle(ctx, nonce, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, offered_value: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, offered_value)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        instructions::check_upkeep::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        randomness: [u8; 32],
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, randomness)
    }

    pub fn get_entrance_fee(ctx: Context<ViewRaffle>) -> Result<u64> {
        instructions::view_raffle::get_entrance_fee(ctx)
    }

    pub fn get_number_of_players(ctx: Context<ViewRaffle>) -> Result<u64> {
        instructions::view_raffle::get_number_of_players(ctx)
    }

    pub fn get_player(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
        instructions::view_raffle::get_player(ctx, index)
    }

    pub fn get_recent_winner(ctx: Context<ViewRaffle>) -> Result<Option<Pubkey>> {
        instructions::view_raffle::get_recent_winner(ctx)
    }

    pub fn get_raffle_state(ctx: Context<ViewRaffle>) -> Result<RaffleState> {
        instructions::view_raffle::get_raffle_state(ctx)
    }

    pub fn get_latest_timestamp(ctx: Context<ViewRaffle>) -> Result<i64> {
        instructions::view_raffle::get_latest_timestamp(ctx)
    }

    pub fn get_interval(ctx: Context<ViewRaffle>) -> Result<i64> {
        instructions::view_raffle::get_interval(ctx)
    }

    pub fn get_num_words(ctx: Context<ViewRaffle>) -> Result<u32> {
        instructions::view_raffle::get_num_words(ctx)
    }

    pub fn get_request_confirmations(ctx: Context<ViewRaffle>) -> Result<u16> {
        instructions::view_raffle::get_request_confirmations(ctx)
    }
}
