use anchor_lang::prelude::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("Invalid number of tickets")]
    InvalidTicketCount,
    #[msg("Not enough tickets available")]
    InsufficientTickets,
    #[msg("Attached lamports do not cover the ticket cost")]
    InsufficientPayment,
    #[msg("Game is still on")]
    GameStillOpen,
    #[msg("Not authorised")]
    Unauthorized,
    #[msg("Ticket cost must be greater than 0")]
    InvalidPrice,
    #[msg("Lottery currently underway")]
    LotteryUnderway,
    #[msg("Max tickets must be greater than 0")]
    InvalidValue,
    #[msg("Winner selection reached with no tickets sold")]
    DivisionByZero,
    #[msg("Winner account does not hold the drawn ticket")]
    WinnerAccountMismatch,
    #[msg("Lamport arithmetic overflow")]
    ArithmeticOverflow,
}
