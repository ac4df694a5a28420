use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Offered value is below the entrance fee")]
    NotEnoughValue,
    #[msg("Raffle is not open for entries")]
    RaffleNotOpen,
    #[msg("Upkeep is not needed: raffle must be open, past its interval, and hold entrants and a pool")]
    UpkeepNotNeeded,
    #[msg("Randomness request is unknown or has already been fulfilled")]
    UnknownRequest,
    #[msg("Prize transfer to the winner failed")]
    PayoutFailed,
    #[msg("Raffle has reached its maximum number of entrants")]
    RaffleFull,
    #[msg("Fulfillment carried no random words")]
    NoRandomWords,
    #[msg("Player index is out of bounds")]
    PlayerIndexOutOfBounds,
    #[msg("Only the coordinator oracle may fulfill randomness requests")]
    NotRandomnessOracle,
    #[msg("Randomness request has not reached its confirmation depth")]
    RequestNotConfirmed,
    #[msg("Coordinator does not match the one bound to this raffle")]
    InvalidCoordinator,
    #[msg("Entrance fee is below the rent-exempt minimum of an account")]
    EntryFeeTooLow,
    #[msg("Interval is shorter than the minimum allowed")]
    IntervalTooShort,
    #[msg("Interval exceeds the maximum allowed")]
    IntervalTooLong,
    #[msg("Number of random words is outside the allowed range")]
    InvalidNumWords,
    #[msg("Request confirmations exceed the maximum allowed")]
    InvalidRequestConfirmations,
    #[msg("Callback compute limit is outside the allowed range")]
    InvalidCallbackComputeLimit,
    #[msg("Only the program's upgrade authority can do this")]
    NotUpgradeAuthority,
}
