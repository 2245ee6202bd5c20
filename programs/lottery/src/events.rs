use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub operator: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u32,
    pub at: i64,
}

#[event]
pub struct TicketsPurchased {
    pub buyer: Pubkey,
    pub first_ticket: u32,
    pub tickets: u32,
    pub cost: u64,
    pub refund: u64,
    pub tickets_available: u32,
    pub at: i64,
}

#[event]
pub struct GameEnded {
    pub round: u64,
    pub random_seed: u64,
    pub winning_ticket: u32,
    pub winner: Pubkey,
    pub prize: u64,
    pub at: i64,
}

#[event]
pub struct TicketCostChanged {
    pub ticket_cost: u64,
    pub at: i64,
}

#[event]
pub struct MaxTicketsChanged {
    pub max_tickets: u32,
    pub at: i64,
}
