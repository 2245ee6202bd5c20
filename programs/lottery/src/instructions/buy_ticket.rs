use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::TicketsPurchased;
use crate::state::Lottery;
use crate::utils::pay_out;

/// Accounts required to buy lottery tickets.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for, and owning, the tickets.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Lottery state account; also holds the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program for the payment transfer.
    pub system_program: Program<'info, System>,
}

/// Buys `purchase_amount` tickets for the caller.
///
/// Steps performed:
/// 1. Record the tickets, which validates count, availability and payment.
/// 2. Transfer the attached lamports from the buyer to the lottery.
/// 3. Refund whatever exceeds the cost of the tickets.
///
/// # Arguments
/// * `ctx` - Context containing BuyTicket accounts
/// * `purchase_amount` - Number of tickets, greater than 0
/// * `attached_value` - Lamports sent along with the purchase
pub fn process_buy_ticket(
    ctx: Context<BuyTicket>,
    purchase_amount: u32,
    attached_value: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let buyer = ctx.accounts.buyer.key();

    let purchase = ctx
        .accounts
        .lottery
        .buy_tickets(buyer, attached_value, purchase_amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        attached_value,
    )?;

    if purchase.refund > 0 {
        msg!("Refunding {} lamports", purchase.refund);
        pay_out(
            &ctx.accounts.lottery.to_account_info(),
            &ctx.accounts.buyer.to_account_info(),
            purchase.refund,
        )?;
    }

    let tickets_available = ctx.accounts.lottery.tickets_available;
    msg!("Tickets available: {}", tickets_available);

    emit!(TicketsPurchased {
        buyer,
        first_ticket: purchase.first_ticket,
        tickets: purchase.tickets,
        cost: purchase.cost,
        refund: purchase.refund,
        tickets_available,
        at: clock.unix_timestamp,
    });

    Ok(())
}
