use soroban_sdk::{contracttype, Address, String};

/// Creation input for a listing (the immutable terms of §3 of the docs,
/// fixed forever once `list_sto` succeeds).
#[contracttype]
#[derive(Clone, Debug)]
pub struct ListingTerms {
    /// Offering token being distributed (unique listing key)
    pub sto_token: Address,
    /// Funding token contributed by investors
    pub base_token: Address,
    /// Minimum aggregate raise for the offering to succeed
    pub soft_cap: i128,
    /// Maximum aggregate raise accepted
    pub hard_cap: i128,
    /// Floor for an investor's first contribution
    pub min_investment: i128,
    /// Ceiling for an investor's cumulative contribution
    pub max_investment: i128,
    /// Unix timestamp when the window opens
    pub start_time: u64,
    /// Unix timestamp when the window closes
    pub end_time: u64,
    /// Unix timestamp when settlement becomes available
    pub token_claim_time: u64,
    /// Fixed-point price of one offering token
    pub sto_price: i128,
    /// Fixed-point price of one funding token
    pub base_price: i128,
    /// Issuer; receives funds on success, reclaims supply on failure
    pub owner: Address,
}

/// Stored listing record: the immutable terms plus the mutable
/// accounting state and the decimal precisions frozen at listing time.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Listing {
    pub terms: ListingTerms,
    /// Decimal precision of the offering token at listing time
    pub sto_decimals: u32,
    /// Decimal precision of the funding token at listing time
    pub base_decimals: u32,
    /// Display flag, admin-managed, no accounting effect
    pub featured: bool,
    /// Total funding pulled into custody; never exceeds hard_cap
    pub raised_amount: i128,
    /// Offering supply pulled into custody at listing; never increased
    pub supply_escrowed: i128,
}

/// Descriptive metadata attached to a listing. The country, industry and
/// investment type must be present in the catalog allow-lists.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ListingInfo {
    pub overview: String,
    pub company_website: String,
    pub issuer: String,
    pub country: String,
    pub industry: String,
    pub investment_type: String,
    pub image: String,
}

/// Per-(listing, investor) settlement flags. Each transitions
/// false -> true exactly once and is never reset.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ClaimFlags {
    pub tokens_claimed: bool,
    pub refund_claimed: bool,
}

/// Per-listing issuer settlement flags, same one-way discipline.
#[contracttype]
#[derive(Clone, Debug)]
pub struct IssuerFlags {
    pub funds_claimed: bool,
    pub supply_reclaimed: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Initialized,
    /// sto_token -> Listing
    Listing(Address),
    /// sto_token -> ListingInfo
    Info(Address),
    /// Append-only index of listed offering tokens
    ListingIndex,
    /// (sto_token, investor) -> cumulative contribution
    Contribution(Address, Address),
    /// (sto_token, investor) -> ClaimFlags
    Claims(Address, Address),
    /// sto_token -> IssuerFlags
    IssuerClaims(Address),
    /// Catalog allow-lists, keyed by value
    Country(String),
    Industry(String),
    InvestmentType(String),
}
