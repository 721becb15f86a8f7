use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller is not the admin / not the listing's issuer
    Unauthorized = 10,

    // ============================================
    // LISTING ERRORS (20-29)
    // ============================================
    /// No listing exists for this offering token
    NotFound = 20,
    /// A listing already exists for this offering token
    DuplicateListing = 21,
    /// Listing terms violate an ordering or positivity invariant
    InvalidTerms = 22,
    /// Country, industry or investment type not in the catalog
    MetadataNotAllowed = 23,

    // ============================================
    // PHASE ERRORS (30-39)
    // ============================================
    /// Offering window has not opened yet
    NotStartedYet = 30,
    /// Offering window has closed
    OfferingClosed = 31,
    /// Refund/reclaim attempted before end_time
    OfferingNotEndedYet = 32,
    /// Settlement attempted before token_claim_time
    TokenClaimTimeNotArrived = 33,
    /// Success-path settlement attempted on a failed raise
    SoftcapNotReached = 34,
    /// Refund-path settlement attempted on a successful raise
    SoftcapReached = 35,

    // ============================================
    // CONTRIBUTION ERRORS (40-49)
    // ============================================
    /// First contribution below min_investment
    BelowMinInvestment = 40,
    /// Cumulative contribution would exceed max_investment
    ExceedsMaxInvestment = 41,
    /// Raised amount would exceed hard_cap
    ExceedsHardCap = 42,

    // ============================================
    // SETTLEMENT ERRORS (50-59)
    // ============================================
    /// Claim/refund flag already set for this caller
    AlreadyClaimed = 50,
    /// Caller has no recorded contribution in this listing
    NothingToClaim = 51,

    // ============================================
    // ASSET ERRORS (60-69)
    // ============================================
    /// Token pull from the caller failed
    TransferFailed = 60,
    /// Checked arithmetic overflowed
    MathOverflow = 61,
}
