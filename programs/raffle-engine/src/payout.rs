use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Moves the prize to the drawn winner.
///
/// An implementation must either move the full amount or return an error
/// without moving anything.
pub trait PrizeTransfer {
    fn transfer_prize(&mut self, winner: &Pubkey, amount: u64) -> Result<()>;
}

/// Pays the prize out of a raffle vault PDA owned by this program.
pub struct VaultPayout<'a, 'info> {
    pub vault: &'a AccountInfo<'info>,
    pub winner: &'a AccountInfo<'info>,
    /// Lamports that must stay in the vault to keep it rent exempt
    pub reserve: u64,
}

impl PrizeTransfer for VaultPayout<'_, '_> {
    fn transfer_prize(&mut self, winner: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*self.winner.key, *winner, RaffleError::PayoutFailed);

        let available = self
            .vault
            .lamports()
            .checked_sub(self.reserve)
            .ok_or(RaffleError::PayoutFailed)?;
        require!(available >= amount, RaffleError::PayoutFailed);

        // Direct lamport moves only work because the vault is owned by this program.
        self.vault.sub_lamports(amount)?;
        self.winner.add_lamports(amount)?;

        Ok(())
    }
}
