use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::PUBKEY_BYTES;

use crate::constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST};
use crate::error::LotteryError;

#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The only key allowed to end a round or change the configuration.
    /// Set once at initialization.
    pub operator: Pubkey,

    /// The price (in lamports) of a single ticket.
    pub ticket_cost: u64,

    /// The number of tickets sold in one round.
    pub max_tickets: u32,

    /// Tickets still for sale in the current round.
    pub tickets_available: u32,

    /// The number of rounds completed so far.
    pub round: u64,

    /// Ticket registry for the current round: ticket `i` belongs to `players[i]`.
    pub players: Vec<Pubkey>,
}

/// Whether the current round still has tickets for sale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Selling,
    SoldOut,
}

/// Outcome of a successful ticket purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketPurchase {
    /// Index of the first ticket assigned to the buyer.
    pub first_ticket: u32,
    pub tickets: u32,
    /// Lamports kept by the lottery.
    pub cost: u64,
    /// Lamports owed back to the buyer.
    pub refund: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Winner {
    pub ticket: u32,
    pub player: Pubkey,
}

impl Lottery {
    /// Account size up to, and including, the length prefix of `players`.
    pub const BASE_SPACE: usize = 8 + 1 + PUBKEY_BYTES + 8 + 4 + 4 + 8 + 4;

    /// Account size needed to hold a full round of `max_tickets`.
    pub fn space_for(max_tickets: u32) -> usize {
        Self::BASE_SPACE + max_tickets as usize * PUBKEY_BYTES
    }

    pub fn new(operator: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            operator,
            ticket_cost: DEFAULT_TICKET_COST,
            max_tickets: DEFAULT_MAX_TICKETS,
            tickets_available: DEFAULT_MAX_TICKETS,
            round: 0,
            players: Vec::with_capacity(DEFAULT_MAX_TICKETS as usize),
        }
    }

    pub fn tickets_sold(&self) -> u32 {
        self.max_tickets - self.tickets_available
    }

    pub fn status(&self) -> RoundStatus {
        if self.tickets_available == 0 {
            RoundStatus::SoldOut
        } else {
            RoundStatus::Selling
        }
    }

    /// Sells `purchase_amount` tickets to `buyer`.
    ///
    /// Checks, in order: a non-zero amount, enough tickets left, and enough
    /// lamports attached. Nothing is mutated unless all of them pass.
    pub fn buy_tickets(
        &mut self,
        buyer: Pubkey,
        attached_value: u64,
        purchase_amount: u32,
    ) -> Result<TicketPurchase> {
        require!(purchase_amount > 0, LotteryError::InvalidTicketCount);
        require!(
            purchase_amount <= self.tickets_available,
            LotteryError::InsufficientTickets
        );

        // An overflowing total is more than any attached value can cover.
        let cost = self
            .ticket_cost
            .checked_mul(u64::from(purchase_amount))
            .ok_or(LotteryError::InsufficientPayment)?;
        require!(attached_value >= cost, LotteryError::InsufficientPayment);

        let first_ticket = self.players.len() as u32;
        self.players
            .extend(std::iter::repeat(buyer).take(purchase_amount as usize));
        self.tickets_available -= purchase_amount;

        Ok(TicketPurchase {
            first_ticket,
            tickets: purchase_amount,
            cost,
            refund: attached_value - cost,
        })
    }

    /// Ticket holder drawn by `random_seed`: `players[random_seed % players.len()]`.
    pub fn winner_for_seed(&self, random_seed: u64) -> Result<Winner> {
        let index = random_seed
            .checked_rem(self.players.len() as u64)
            .ok_or(LotteryError::DivisionByZero)? as usize;

        Ok(Winner {
            ticket: index as u32,
            player: self.players[index],
        })
    }

    /// Draws the winner of a sold-out round and starts the next one.
    ///
    /// Paying the pot is left to the caller; the returned winner is the
    /// account that must receive it.
    pub fn end_game(&mut self, caller: &Pubkey, random_seed: u64) -> Result<Winner> {
        self.ensure_operator(caller)?;
        require!(self.tickets_available == 0, LotteryError::GameStillOpen);

        let winner = self.winner_for_seed(random_seed)?;
        let round = self
            .round
            .checked_add(1)
            .ok_or(LotteryError::ArithmeticOverflow)?;

        self.round = round;
        self.reset_round();
        Ok(winner)
    }

    pub fn change_cost(&mut self, caller: &Pubkey, new_cost: u64) -> Result<()> {
        self.ensure_operator(caller)?;
        require!(new_cost > 0, LotteryError::InvalidPrice);
        self.ensure_round_empty()?;

        self.ticket_cost = new_cost;
        self.reset_round();
        Ok(())
    }

    pub fn change_max_tickets(&mut self, caller: &Pubkey, new_max_tickets: u32) -> Result<()> {
        self.ensure_operator(caller)?;
        require!(new_max_tickets > 0, LotteryError::InvalidValue);
        self.ensure_round_empty()?;

        self.max_tickets = new_max_tickets;
        self.reset_round();
        Ok(())
    }

    fn reset_round(&mut self) {
        self.players.clear();
        self.tickets_available = self.max_tickets;
    }

    fn ensure_operator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.operator, LotteryError::Unauthorized);
        Ok(())
    }

    fn ensure_round_empty(&self) -> Result<()> {
        require!(
            self.tickets_available == self.max_tickets,
            LotteryError::LotteryUnderway
        );
        Ok(())
    }
}
