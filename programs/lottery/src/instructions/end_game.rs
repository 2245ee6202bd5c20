use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::GameEnded;
use crate::state::Lottery;
use crate::utils::{pay_out, pot_balance};

/// Accounts required to end a sold-out round.
///
/// The winner must be passed in up front; clients find it with
/// `Lottery::winner_for_seed` using the same seed.
#[derive(Accounts)]
pub struct EndGame<'info> {
    /// Must be the lottery operator.
    pub operator: Signer<'info>,

    /// The main lottery state account, holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Receives the pot.
    /// CHECK: compared against the drawn ticket holder in the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Draws `players[random_seed % players]`, pays out the pot and resets the round.
///
/// The seed comes from the operator; the draw is only as unpredictable as the
/// operator's choice of seed.
///
/// A winner account holding 0 lamports must receive at least the rent-exempt
/// minimum of an empty account. A smaller prize makes the runtime reject the
/// transaction with a rent error, and the round stays sold out until the
/// winner's account is funded or another seed is used.
///
/// # Arguments
/// * `ctx` - Context containing EndGame accounts
/// * `random_seed` - Operator-supplied seed
pub fn process_end_game(ctx: Context<EndGame>, random_seed: u64) -> Result<()> {
    let clock = Clock::get()?;
    let operator = ctx.accounts.operator.key();

    let winner = ctx.accounts.lottery.end_game(&operator, random_seed)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner.player,
        LotteryError::WinnerAccountMismatch
    );

    let lottery_info = ctx.accounts.lottery.to_account_info();
    let prize = pot_balance(&lottery_info)?;
    pay_out(&lottery_info, &ctx.accounts.winner.to_account_info(), prize)?;

    msg!("Random seed: {}", random_seed);
    msg!("Winning ticket: {}", winner.ticket);
    msg!("Prize: {}", prize);

    emit!(GameEnded {
        round: ctx.accounts.lottery.round,
        random_seed,
        winning_ticket: winner.ticket,
        winner: winner.player,
        prize,
        at: clock.unix_timestamp,
    });

    Ok(())
}
