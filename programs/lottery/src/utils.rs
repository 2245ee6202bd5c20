use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Lamports held by `account` above its rent-exempt minimum.
pub fn pot_balance(account: &AccountInfo) -> Result<u64> {
    let reserve = Rent::get()?.minimum_balance(account.data_len());
    Ok(account.lamports().saturating_sub(reserve))
}

/// Moves lamports out of an account owned by this program.
pub fn pay_out(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(LotteryError::ArithmeticOverflow)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(LotteryError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn test_pay_out_moves_lamports() {
        let owner = crate::ID;
        let (pot_key, winner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut pot_lamports, mut winner_lamports) = (1_000u64, 5u64);
        let (mut pot_data, mut winner_data) = (vec![0u8; 16], Vec::<u8>::new());

        let pot = AccountInfo::new(
            &pot_key,
            false,
            true,
            &mut pot_lamports,
            &mut pot_data,
            &owner,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &owner,
            false,
            0,
        );

        pay_out(&pot, &winner, 400).unwrap();
        assert_eq!(pot.lamports(), 600);
        assert_eq!(winner.lamports(), 405);

        pay_out(&pot, &winner, 0).unwrap();
        assert_eq!(pot.lamports(), 600);

        assert_eq!(
            pay_out(&pot, &winner, 601).unwrap_err(),
            Error::from(LotteryError::ArithmeticOverflow)
        );
        assert_eq!(pot.lamports(), 600);
        assert_eq!(winner.lamports(), 405);
    }
}
