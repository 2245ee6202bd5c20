use solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the single lottery PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Price of one ticket when the lottery is first initialized (1 SOL).
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL;

/// Capacity of a round when the lottery is first initialized.
pub const DEFAULT_MAX_TICKETS: u32 = 5;
