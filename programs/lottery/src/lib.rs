use anchor_lang::prelude::*;
use instructions::*;

/// Program-wide constants: PDA seeds and the lottery defaults.
pub mod constants;

/// Custom errors returned when an instruction is rejected.
pub mod error;

/// Events emitted by every successful instruction.
pub mod events;

/// Instruction handlers and their account contexts.
pub mod instructions;

/// The `Lottery` account and the state machine that drives it.
pub mod state;

mod utils;

declare_id!("C3WDqupGhdSZ4j6vGHHaUXdWEYyez92WwJfu46xtmvzP");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn buy_ticket(
        ctx: Context<BuyTicket>,
        purchase_amount: u32,
        attached_value: u64,
    ) -> Result<()> {
        process_buy_ticket(ctx, purchase_amount, attached_value)
    }

    pub fn end_game(ctx: Context<EndGame>, random_seed: u64) -> Result<()> {
        process_end_game(ctx, random_seed)
    }

    pub fn change_cost(ctx: Context<ChangeCost>, new_cost: u64) -> Result<()> {
        process_change_cost(ctx, new_cost)
    }

    pub fn change_max_tickets(
        ctx: Context<ChangeMaxTickets>,
        new_max_tickets: u32,
    ) -> Result<()> {
        process_change_max_tickets(ctx, new_max_tickets)
    }
}
