use crate::error::Error;
use crate::storage::ListingTerms;

/// Ordering and positivity invariants of listing terms
///
/// - 0 < soft_cap <= hard_cap
/// - 0 < min_investment <= max_investment <= hard_cap
/// - now < start_time < end_time < token_claim_time
/// - both prices positive
pub fn validate_terms(terms: &ListingTerms, now: u64) -> Result<(), Error> {
    if terms.soft_cap <= 0 || terms.soft_cap > terms.hard_cap {
        return Err(Error::InvalidTerms);
    }

    if terms.min_investment <= 0
        || terms.min_investment > terms.max_investment
        || terms.max_investment > terms.hard_cap
    {
        return Err(Error::InvalidTerms);
    }

    if now >= terms.start_time
        || terms.start_time >= terms.end_time
        || terms.end_time >= terms.token_claim_time
    {
        return Err(Error::InvalidTerms);
    }

    if terms.sto_price <= 0 || terms.base_price <= 0 {
        return Err(Error::InvalidTerms);
    }

    Ok(())
}
