use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct ListedEvent {
    pub sto_token: Address,
    pub base_token: Address,
    pub owner: Address,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub supply_escrowed: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub token_claim_time: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct InvestedEvent {
    pub sto_token: Address,
    pub investor: Address,
    pub amount: i128,
    pub total_contribution: i128,
    pub raised_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TokensClaimedEvent {
    pub sto_token: Address,
    pub investor: Address,
    pub payout: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FundsClaimedEvent {
    pub sto_token: Address,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RefundedEvent {
    pub sto_token: Address,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SupplyReclaimedEvent {
    pub sto_token: Address,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FeaturedEvent {
    pub sto_token: Address,
    pub featured: bool,
}
