use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MAX_TICKETS, LOTTERY_SEED};
use crate::events::{LotteryInitialized, MaxTicketsChanged, TicketCostChanged};
use crate::state::Lottery;

/// Accounts required to create the lottery.
/// The payer becomes the operator for the lifetime of the lottery.
///
/// The first `initialize` after deployment claims the operator role, so the
/// deployer should send it right after deploying (ideally in the same
/// deployment script) before anyone else can.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account, sized for a full round at the default capacity.
    #[account(
        init,
        payer = payer,
        space = Lottery::space_for(DEFAULT_MAX_TICKETS),
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to change the ticket cost.
#[derive(Accounts)]
pub struct ChangeCost<'info> {
    /// Must be the lottery operator.
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Accounts required to change the round capacity.
///
/// The lottery account is resized to fit `new_max_tickets` entries; the
/// operator covers any additional rent and is refunded rent when it shrinks.
#[derive(Accounts)]
#[instruction(new_max_tickets: u32)]
pub struct ChangeMaxTickets<'info> {
    /// Must be the lottery operator.
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        realloc = Lottery::space_for(new_max_tickets),
        realloc::payer = operator,
        realloc::zero = false,
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program for rent transfers during reallocation.
    pub system_program: Program<'info, System>,
}

/// Initializes the lottery with the default ticket cost and capacity,
/// and sets the operator.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let clock = Clock::get()?;
    let operator = ctx.accounts.payer.key();

    ctx.accounts
        .lottery
        .set_inner(Lottery::new(operator, ctx.bumps.lottery));

    let lottery = &ctx.accounts.lottery;
    msg!("Lottery initialized, operator: {}", operator);

    emit!(LotteryInitialized {
        operator,
        ticket_cost: lottery.ticket_cost,
        max_tickets: lottery.max_tickets,
        at: clock.unix_timestamp,
    });

    Ok(())
}

/// Sets a new ticket cost in lamports. Only allowed between rounds.
///
/// # Arguments
/// * `ctx` - Context holding the ChangeCost accounts
/// * `new_cost` - Lamports per ticket, greater than 0
pub fn process_change_cost(ctx: Context<ChangeCost>, new_cost: u64) -> Result<()> {
    let clock = Clock::get()?;
    let operator = ctx.accounts.operator.key();
    let lottery = &mut ctx.accounts.lottery;

    lottery.change_cost(&operator, new_cost)?;
    msg!("Ticket cost: {}", lottery.ticket_cost);

    emit!(TicketCostChanged {
        ticket_cost: lottery.ticket_cost,
        at: clock.unix_timestamp,
    });

    Ok(())
}

/// Sets a new round capacity. Only allowed between rounds.
///
/// # Arguments
/// * `ctx` - Context holding the ChangeMaxTickets accounts
/// * `new_max_tickets` - Tickets per round, greater than 0
pub fn process_change_max_tickets(
    ctx: Context<ChangeMaxTickets>,
    new_max_tickets: u32,
) -> Result<()> {
    let clock = Clock::get()?;
    let operator = ctx.accounts.operator.key();
    let lottery = &mut ctx.accounts.lottery;

    lottery.change_max_tickets(&operator, new_max_tickets)?;
    msg!("Max tickets: {}", lottery.max_tickets);

    emit!(MaxTicketsChanged {
        max_tickets: lottery.max_tickets,
        at: clock.unix_timestamp,
    });

    Ok(())
}
