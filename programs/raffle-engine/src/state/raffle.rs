use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    payout::PrizeTransfer,
    vrf::{request_seed, RandomnessClient, RandomnessConfig, RANDOMNESS_CONFIG_SIZE},
};

/// Entrants a single round can hold. Bounded by the space allocated for the
/// raffle account at creation.
pub const MAX_ENTRANTS: usize = 250;

// Space calculation:
// 8 (discriminator) +
// 32 (authority) +
// 32 (coordinator) +
// 8 (nonce) +
// 8 (entry_fee) +
// 8 (interval) +
// 42 (randomness_config) +
// 1 (state) +
// 4 + 32 * MAX_ENTRANTS (entrants) +
// 8 (pool) +
// 8 (last_draw_timestamp) +
// 9 (pending_request_id: Option<u64>) +
// 33 (recent_winner: Option<Pubkey>) +
// 8 (rounds_completed) +
// 1 (bump) +
// 1 (vault_bump)
pub const RAFFLE_ACCOUNT_SIZE: usize = 8
    + 32
    + 32
    + 8
    + 8
    + 8
    + RANDOMNESS_CONFIG_SIZE
    + 1
    + 4
    + 32 * MAX_ENTRANTS
    + 8
    + 8
    + 9
    + 33
    + 8
    + 1
    + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open,
    Calculating,
}

/// A single raffle engine. One round is active at a time; the account is
/// reset in place after every draw.
///
/// Seeds: `["raffle", authority, nonce.to_le_bytes()]`
#[account]
pub struct Raffle {
    pub authority: Pubkey,
    /// The VRF coordinator whose oracle fulfills this raffle's requests
    pub coordinator: Pubkey,
    pub nonce: u64,
    /// Minimum lamports accepted per entry
    pub entry_fee: u64,
    /// Seconds that must pass after the last draw before the next one
    pub interval: i64,
    pub randomness_config: RandomnessConfig,
    pub state: RaffleState,
    /// One slot per entry, in the order entries were accepted
    pub entrants: Vec<Pubkey>,
    /// Lamports accumulated in the vault for the current round
    pub pool: u64,
    pub last_draw_timestamp: i64,
    pub pending_request_id: Option<u64>,
    pub recent_winner: Option<Pubkey>,
    pub rounds_completed: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

/// The four conditions that must all hold before a draw may start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
}

impl UpkeepStatus {
    pub fn upkeep_needed(&self) -> bool {
        self.is_open && self.time_passed && self.has_players && self.has_balance
    }
}

/// Outcome of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub request_id: u64,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
    pub round: u64,
}

impl Raffle {
    pub fn new(
        authority: Pubkey,
        coordinator: Pubkey,
        nonce: u64,
        entry_fee: u64,
        interval: i64,
        randomness_config: RandomnessConfig,
        now: i64,
    ) -> Self {
        Self {
            authority,
            coordinator,
            nonce,
            entry_fee,
            interval,
            randomness_config,
            state: RaffleState::Open,
            entrants: Vec::new(),
            pool: 0,
            last_draw_timestamp: now,
            pending_request_id: None,
            recent_winner: None,
            rounds_completed: 0,
            bump: 0,
            vault_bump: 0,
        }
    }

    /// Records one entry for `participant` and returns the new entrant count.
    ///
    /// The offered value is checked before the raffle state, so an underpaid
    /// entry is reported as such even while a draw is in flight.
    pub fn enter(&mut self, participant: Pubkey, offered_value: u64) -> Result<u64> {
        require!(
            offered_value >= self.entry_fee,
            RaffleError::NotEnoughValue
        );
        require!(
            self.state == RaffleState::Open,
            RaffleError::RaffleNotOpen
        );
        require!(
            self.entrants.len() < MAX_ENTRANTS,
            RaffleError::RaffleFull
        );

        let pool = self
            .pool
            .checked_add(offered_value)
            .ok_or(RaffleError::Overflow)?;

        self.entrants.push(participant);
        self.pool = pool;

        Ok(self.entrants.len() as u64)
    }

    pub fn upkeep_status(&self, now: i64) -> UpkeepStatus {
        UpkeepStatus {
            is_open: self.state == RaffleState::Open,
            time_passed: now.saturating_sub(self.last_draw_timestamp) >= self.interval,
            has_players: !self.entrants.is_empty(),
            has_balance: self.pool > 0,
        }
    }

    /// Whether a draw may be started at `now`. Never mutates the raffle.
    pub fn check_upkeep(&self, now: i64) -> bool {
        self.upkeep_status(now).upkeep_needed()
    }

    /// Starts a draw: requests randomness and parks the raffle in
    /// `Calculating` until the request is fulfilled.
    ///
    /// Eligibility is re-evaluated here rather than trusted from an earlier
    /// `check_upkeep`. The request is issued before any field changes, so a
    /// failed request leaves the round untouched.
    pub fn perform_upkeep<C: RandomnessClient>(
        &mut self,
        raffle: &Pubkey,
        now: i64,
        client: &mut C,
    ) -> Result<u64> {
        let status = self.upkeep_status(now);
        if !status.upkeep_needed() {
            msg!(
                "Upkeep not needed: pool {}, players {}, state {:?}, elapsed {}s of {}s",
                self.pool,
                self.entrants.len(),
                self.state,
                now.saturating_sub(self.last_draw_timestamp),
                self.interval
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let seed = request_seed(raffle, self.rounds_completed);
        let request_id = client.request_random_words(&self.randomness_config, seed)?;

        self.state = RaffleState::Calculating;
        self.pending_request_id = Some(request_id);

        Ok(request_id)
    }

    /// Completes the round identified by `request_id`.
    ///
    /// The winner is `entrants[random_words[0] % entrants.len()]`. The prize
    /// is transferred before the round is reset; if the transfer fails the
    /// raffle is left exactly as it was and `PayoutFailed` is returned.
    pub fn fulfill_random_words<T: PrizeTransfer>(
        &mut self,
        request_id: u64,
        random_words: &[u64],
        now: i64,
        payout: &mut T,
    ) -> Result<Draw> {
        if self.pending_request_id != Some(request_id) {
            msg!(
                "Rejected fulfillment for request {} (pending: {:?})",
                request_id,
                self.pending_request_id
            );
            return err!(RaffleError::UnknownRequest);
        }

        let random_word = *random_words.first().ok_or(RaffleError::NoRandomWords)?;
        let winner_index = random_word
            .checked_rem(self.entrants.len() as u64)
            .ok_or(RaffleError::Overflow)?;
        let winner = self.entrants[winner_index as usize];
        let prize = self.pool;
        let round = self
            .rounds_completed
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        payout.transfer_prize(&winner, prize).map_err(|e| {
            msg!("Prize transfer of {} lamports to {} failed: {}", prize, winner, e);
            error!(RaffleError::PayoutFailed)
        })?;

        self.recent_winner = Some(winner);
        self.entrants.clear();
        self.pool = 0;
        self.last_draw_timestamp = now;
        self.state = RaffleState::Open;
        self.pending_request_id = None;
        self.rounds_completed = round;

        Ok(Draw {
            request_id,
            winner,
            winner_index,
            prize,
            round,
        })
    }

    pub fn number_of_players(&self) -> u64 {
        self.entrants.len() as u64
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.entrants.get(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfBounds))
    }
}

#[cfg(test)]
mod tests {
    use anchor_lang::error::Error;

    use super::*;

    const ENTRY_FEE: u64 = 100;
    const INTERVAL: i64 = 60;

    struct ScriptedClient {
        next_id: u64,
        requests: Vec<(RandomnessConfig, [u8; 32])>,
        fail: bool,
    }

    impl ScriptedClient {
        fn issuing(next_id: u64) -> Self {
            Self {
                next_id,
                requests: Vec::new(),
                fail: false,
            }
        }
    }

    impl RandomnessClient for ScriptedClient {
        fn request_random_words(
            &mut self,
            config: &RandomnessConfig,
            seed: [u8; 32],
        ) -> Result<u64> {
            if self.fail {
                return err!(RaffleError::Overflow);
            }
            self.requests.push((*config, seed));
            let id = self.next_id;
            self.next_id += 1;
            Ok(id)
        }
    }

    #[derive(Default)]
    struct RecordingPayout {
        transfers: Vec<(Pubkey, u64)>,
        fail: bool,
    }

    impl PrizeTransfer for RecordingPayout {
        fn transfer_prize(&mut self, winner: &Pubkey, amount: u64) -> Result<()> {
            if self.fail {
                return err!(RaffleError::Overflow);
            }
            self.transfers.push((*winner, amount));
            Ok(())
        }
    }

    fn config() -> RandomnessConfig {
        RandomnessConfig {
            key_hash: [3u8; 32],
            num_words: 1,
            request_confirmations: 3,
            callback_compute_limit: 200_000,
        }
    }

    fn raffle_at(now: i64) -> Raffle {
        Raffle::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
            ENTRY_FEE,
            INTERVAL,
            config(),
            now,
        )
    }

    fn code(err: &Error) -> Option<u32> {
        match err {
            Error::AnchorError(e) => Some(e.error_code_number),
            _ => None,
        }
    }

    fn bytes(raffle: &Raffle) -> Vec<u8> {
        let mut buf = Vec::new();
        raffle.serialize(&mut buf).unwrap();
        buf
    }

    fn assert_error(result: Result<impl std::fmt::Debug>, expected: RaffleError) {
        let err = result.expect_err("operation should have failed");
        assert_eq!(code(&err), code(&Error::from(expected)));
    }

    /// Raffle with the given entrants, past its interval and in `Calculating`
    /// with request `request_id` pending.
    fn calculating_with(entrants: &[Pubkey], request_id: u64) -> (Raffle, Pubkey) {
        let key = Pubkey::new_unique();
        let mut raffle = raffle_at(0);
        for entrant in entrants {
            raffle.enter(*entrant, ENTRY_FEE).unwrap();
        }
        let mut client = ScriptedClient::issuing(request_id);
        raffle.perform_upkeep(&key, INTERVAL + 1, &mut client).unwrap();
        (raffle, key)
    }

    #[test]
    fn initializes_open_and_empty() {
        let raffle = raffle_at(1_000);
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.number_of_players(), 0);
        assert_eq!(raffle.pool, 0);
        assert_eq!(raffle.last_draw_timestamp, 1_000);
        assert_eq!(raffle.pending_request_id, None);
        assert_eq!(raffle.recent_winner, None);
    }

    #[test]
    fn enter_rejects_underpayment() {
        let mut raffle = raffle_at(0);
        assert_error(
            raffle.enter(Pubkey::new_unique(), ENTRY_FEE - 1),
            RaffleError::NotEnoughValue,
        );
        assert_error(raffle.enter(Pubkey::new_unique(), 0), RaffleError::NotEnoughValue);
        assert_eq!(raffle.number_of_players(), 0);
    }

    #[test]
    fn underpayment_is_reported_even_while_calculating() {
        let (mut raffle, _) = calculating_with(&[Pubkey::new_unique()], 1);
        assert_error(
            raffle.enter(Pubkey::new_unique(), ENTRY_FEE - 1),
            RaffleError::NotEnoughValue,
        );
    }

    #[test]
    fn records_players_in_order() {
        let mut raffle = raffle_at(0);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_eq!(raffle.enter(a, ENTRY_FEE).unwrap(), 1);
        assert_eq!(raffle.enter(b, ENTRY_FEE).unwrap(), 2);
        assert_eq!(raffle.enter(a, ENTRY_FEE).unwrap(), 3);
        assert_eq!(raffle.player(0).unwrap(), a);
        assert_eq!(raffle.player(1).unwrap(), b);
        assert_eq!(raffle.player(2).unwrap(), a);
        assert_error(raffle.player(3), RaffleError::PlayerIndexOutOfBounds);
    }

    #[test]
    fn pool_tracks_entry_fees() {
        let mut raffle = raffle_at(0);
        for n in 1..=10u64 {
            raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
            assert_eq!(raffle.pool, ENTRY_FEE * n);
            assert_eq!(raffle.pool, ENTRY_FEE * raffle.number_of_players());
        }
    }

    #[test]
    fn overpayment_goes_to_the_pool() {
        let mut raffle = raffle_at(0);
        raffle.enter(Pubkey::new_unique(), ENTRY_FEE + 50).unwrap();
        assert_eq!(raffle.pool, ENTRY_FEE + 50);
    }

    #[test]
    fn pool_overflow_is_rejected() {
        let mut raffle = raffle_at(0);
        raffle.enter(Pubkey::new_unique(), u64::MAX).unwrap();
        assert_error(raffle.enter(Pubkey::new_unique(), ENTRY_FEE), RaffleError::Overflow);
        assert_eq!(raffle.number_of_players(), 1);
    }

    #[test]
    fn enter_rejects_when_full() {
        let mut raffle = raffle_at(0);
        for _ in 0..MAX_ENTRANTS {
            raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
        }
        assert_error(raffle.enter(Pubkey::new_unique(), ENTRY_FEE), RaffleError::RaffleFull);
        assert_eq!(raffle.number_of_players(), MAX_ENTRANTS as u64);
    }

    #[test]
    fn enter_rejects_while_calculating() {
        let (mut raffle, _) = calculating_with(&[Pubkey::new_unique()], 1);
        assert_eq!(raffle.state, RaffleState::Calculating);
        assert_error(raffle.enter(Pubkey::new_unique(), ENTRY_FEE), RaffleError::RaffleNotOpen);
        assert_eq!(raffle.number_of_players(), 1);
    }

    #[test]
    fn check_upkeep_is_false_right_after_creation() {
        let mut raffle = raffle_at(0);
        raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
        assert!(!raffle.check_upkeep(0));
        assert!(!raffle.check_upkeep(INTERVAL - 1));
    }

    #[test]
    fn check_upkeep_is_false_without_players() {
        let raffle = raffle_at(0);
        let status = raffle.upkeep_status(INTERVAL + 1);
        assert!(status.is_open && status.time_passed);
        assert!(!status.has_players && !status.has_balance);
        assert!(!raffle.check_upkeep(INTERVAL + 1));
    }

    #[test]
    fn check_upkeep_is_true_once_interval_has_passed() {
        let mut raffle = raffle_at(0);
        raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
        assert!(raffle.check_upkeep(INTERVAL));
        assert!(raffle.check_upkeep(INTERVAL + 1));
    }

    #[test]
    fn check_upkeep_is_false_while_calculating() {
        let (raffle, _) = calculating_with(&[Pubkey::new_unique()], 1);
        let status = raffle.upkeep_status(INTERVAL + 100);
        assert!(!status.is_open);
        assert!(!raffle.check_upkeep(INTERVAL + 100));
    }

    #[test]
    fn perform_upkeep_rejects_without_players() {
        let mut raffle = raffle_at(0);
        let mut client = ScriptedClient::issuing(1);
        assert_error(
            raffle.perform_upkeep(&Pubkey::new_unique(), INTERVAL + 1, &mut client),
            RaffleError::UpkeepNotNeeded,
        );
        assert!(client.requests.is_empty());
        assert_eq!(raffle.state, RaffleState::Open);
    }

    #[test]
    fn perform_upkeep_rejects_before_interval() {
        let mut raffle = raffle_at(0);
        raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
        let mut client = ScriptedClient::issuing(1);
        assert_error(
            raffle.perform_upkeep(&Pubkey::new_unique(), INTERVAL - 1, &mut client),
            RaffleError::UpkeepNotNeeded,
        );
        assert!(client.requests.is_empty());
    }

    #[test]
    fn perform_upkeep_starts_calculating_and_requests_randomness() {
        let key = Pubkey::new_unique();
        let mut raffle = raffle_at(0);
        raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
        let mut client = ScriptedClient::issuing(7);

        let request_id = raffle.perform_upkeep(&key, INTERVAL + 1, &mut client).unwrap();

        assert_eq!(request_id, 7);
        assert_eq!(raffle.state, RaffleState::Calculating);
        assert_eq!(raffle.pending_request_id, Some(7));
        assert_eq!(client.requests, vec![(config(), request_seed(&key, 0))]);
    }

    #[test]
    fn second_upkeep_is_rejected_while_calculating() {
        let (mut raffle, key) = calculating_with(&[Pubkey::new_unique()], 1);
        let mut client = ScriptedClient::issuing(2);
        assert_error(
            raffle.perform_upkeep(&key, INTERVAL + 500, &mut client),
            RaffleError::UpkeepNotNeeded,
        );
        assert!(client.requests.is_empty());
        assert_eq!(raffle.pending_request_id, Some(1));
    }

    #[test]
    fn failed_request_leaves_the_round_open() {
        let mut raffle = raffle_at(0);
        raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
        let mut client = ScriptedClient::issuing(1);
        client.fail = true;

        assert!(raffle
            .perform_upkeep(&Pubkey::new_unique(), INTERVAL + 1, &mut client)
            .is_err());
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.pending_request_id, None);
    }

    #[test]
    fn single_entrant_round_pays_the_only_player() {
        let a = Pubkey::new_unique();
        let mut raffle = raffle_at(0);
        raffle.enter(a, ENTRY_FEE).unwrap();
        assert!(raffle.check_upkeep(61));

        let mut client = ScriptedClient::issuing(7);
        let request_id = raffle
            .perform_upkeep(&Pubkey::new_unique(), 61, &mut client)
            .unwrap();
        assert_eq!(request_id, 7);
        assert_eq!(raffle.state, RaffleState::Calculating);

        let mut payout = RecordingPayout::default();
        let draw = raffle
            .fulfill_random_words(7, &[42], 90, &mut payout)
            .unwrap();

        assert_eq!(draw.winner, a);
        assert_eq!(draw.prize, ENTRY_FEE);
        assert_eq!(payout.transfers, vec![(a, ENTRY_FEE)]);
        assert_eq!(raffle.recent_winner, Some(a));
        assert_eq!(raffle.pool, 0);
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.last_draw_timestamp, 90);
    }

    #[test]
    fn winner_is_selected_by_modulo_over_entry_order() {
        let players: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let (mut raffle, _) = calculating_with(&players, 3);
        let mut payout = RecordingPayout::default();

        let draw = raffle
            .fulfill_random_words(3, &[42], INTERVAL + 2, &mut payout)
            .unwrap();

        assert_eq!(draw.winner_index, 2);
        assert_eq!(draw.winner, players[2]);
        assert_eq!(draw.prize, 4 * ENTRY_FEE);
        assert_eq!(payout.transfers, vec![(players[2], 4 * ENTRY_FEE)]);
    }

    #[test]
    fn only_the_first_random_word_is_used() {
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        let (mut raffle, _) = calculating_with(&players, 1);
        let draw = raffle
            .fulfill_random_words(1, &[4, 0, 0], INTERVAL + 2, &mut RecordingPayout::default())
            .unwrap();
        assert_eq!(draw.winner, players[1]);
    }

    #[test]
    fn repeated_entries_are_separate_slots() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        for (word, expected) in [(0u64, a), (1, a), (2, b)] {
            let (mut raffle, _) = calculating_with(&[a, a, b], 1);
            let draw = raffle
                .fulfill_random_words(1, &[word], INTERVAL + 2, &mut RecordingPayout::default())
                .unwrap();
            assert_eq!(draw.winner, expected);
        }
    }

    #[test]
    fn fulfillment_resets_the_round() {
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        let (mut raffle, _) = calculating_with(&players, 5);

        let draw = raffle
            .fulfill_random_words(5, &[u64::MAX], 500, &mut RecordingPayout::default())
            .unwrap();

        assert_eq!(draw.round, 1);
        assert_eq!(raffle.number_of_players(), 0);
        assert_eq!(raffle.pool, 0);
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.pending_request_id, None);
        assert_eq!(raffle.last_draw_timestamp, 500);
        assert_eq!(raffle.rounds_completed, 1);
        assert!(!raffle.check_upkeep(500 + INTERVAL));
    }

    #[test]
    fn unknown_request_is_rejected_without_changes() {
        let players: Vec<Pubkey> = (0..2).map(|_| Pubkey::new_unique()).collect();
        let (mut raffle, _) = calculating_with(&players, 9);
        let before = raffle.clone();
        let mut payout = RecordingPayout::default();

        assert_error(
            raffle.fulfill_random_words(8, &[1], INTERVAL + 2, &mut payout),
            RaffleError::UnknownRequest,
        );
        assert_error(
            raffle.fulfill_random_words(0, &[1], INTERVAL + 2, &mut payout),
            RaffleError::UnknownRequest,
        );

        assert!(payout.transfers.is_empty());
        assert_eq!(bytes(&raffle), bytes(&before));
    }

    #[test]
    fn fulfillment_while_open_is_rejected() {
        let mut raffle = raffle_at(0);
        raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
        assert_error(
            raffle.fulfill_random_words(1, &[1], INTERVAL + 2, &mut RecordingPayout::default()),
            RaffleError::UnknownRequest,
        );
    }

    #[test]
    fn consumed_request_cannot_pay_twice() {
        let players: Vec<Pubkey> = (0..2).map(|_| Pubkey::new_unique()).collect();
        let (mut raffle, _) = calculating_with(&players, 4);
        let mut payout = RecordingPayout::default();
        raffle
            .fulfill_random_words(4, &[1], INTERVAL + 2, &mut payout)
            .unwrap();

        assert_error(
            raffle.fulfill_random_words(4, &[1], INTERVAL + 3, &mut payout),
            RaffleError::UnknownRequest,
        );
        assert_eq!(payout.transfers.len(), 1);
    }

    #[test]
    fn empty_random_words_are_rejected() {
        let (mut raffle, _) = calculating_with(&[Pubkey::new_unique()], 1);
        assert_error(
            raffle.fulfill_random_words(1, &[], INTERVAL + 2, &mut RecordingPayout::default()),
            RaffleError::NoRandomWords,
        );
        assert_eq!(raffle.state, RaffleState::Calculating);
    }

    #[test]
    fn failed_payout_rolls_back_everything() {
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        let (mut raffle, _) = calculating_with(&players, 2);
        let before = raffle.clone();
        let mut payout = RecordingPayout {
            fail: true,
            ..Default::default()
        };

        assert_error(
            raffle.fulfill_random_words(2, &[1], INTERVAL + 2, &mut payout),
            RaffleError::PayoutFailed,
        );
        assert_eq!(bytes(&raffle), bytes(&before));

        // The same request can still complete once the transfer goes through.
        let draw = raffle
            .fulfill_random_words(2, &[1], INTERVAL + 2, &mut RecordingPayout::default())
            .unwrap();
        assert_eq!(draw.winner, players[1]);
    }

    #[test]
    fn raffle_cycles_through_consecutive_rounds() {
        let key = Pubkey::new_unique();
        let mut raffle = raffle_at(0);
        let mut client = ScriptedClient::issuing(1);
        let mut now = 0;

        for round in 1..=3u64 {
            let player = Pubkey::new_unique();
            raffle.enter(player, ENTRY_FEE).unwrap();
            now += INTERVAL;
            let request_id = raffle.perform_upkeep(&key, now, &mut client).unwrap();
            assert_eq!(request_id, round);
            let draw = raffle
                .fulfill_random_words(request_id, &[round], now, &mut RecordingPayout::default())
                .unwrap();
            assert_eq!(draw.winner, player);
            assert_eq!(draw.round, round);
        }

        let seeds: Vec<[u8; 32]> = client.requests.iter().map(|(_, seed)| *seed).collect();
        assert_eq!(seeds.len(), 3);
        assert_ne!(seeds[0], seeds[1]);
        assert_ne!(seeds[1], seeds[2]);
    }

    #[test]
    fn account_size_fits_a_full_round() {
        let mut raffle = raffle_at(0);
        for _ in 0..MAX_ENTRANTS {
            raffle.enter(Pubkey::new_unique(), ENTRY_FEE).unwrap();
        }
        raffle.pending_request_id = Some(u64::MAX);
        raffle.recent_winner = Some(Pubkey::new_unique());
        assert_eq!(bytes(&raffle).len() + 8, RAFFLE_ACCOUNT_SIZE);
    }
}
