#![no_std]

mod conversion;
mod error;
mod events;
mod phase;
mod storage;
mod validation;


use conversion::claimable_tokens;
use error::Error;
use events::*;
use phase::{phase_of, Phase};
use storage::{ClaimFlags, DataKey, IssuerFlags, Listing, ListingInfo, ListingTerms};
use validation::validate_terms;

use soroban_sdk::{
    contract, contractimpl, symbol_short, token, Address, Env, String, Symbol, Vec,
};

#[contract]
pub struct Launchpad;

#[contractimpl]
impl Launchpad {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the launchpad
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);

        Ok(())
    }

    /// Add a country to the listing catalog (admin only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn add_country(env: Env, caller: Address, value: String) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        env.storage()
            .persistent()
            .set(&DataKey::Country(value), &true);
        Ok(())
    }

    /// Add an industry to the listing catalog (admin only)
    pub fn add_industry(env: Env, caller: Address, value: String) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        env.storage()
            .persistent()
            .set(&DataKey::Industry(value), &true);
        Ok(())
    }

    /// Add an investment type to the listing catalog (admin only)
    pub fn add_investment_type(env: Env, caller: Address, value: String) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        env.storage()
            .persistent()
            .set(&DataKey::InvestmentType(value), &true);
        Ok(())
    }

    /// Mark or unmark a listing as featured (admin only, display flag
    /// with no accounting effect)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `NotFound`: No listing for this offering token
    pub fn set_featured(
        env: Env,
        caller: Address,
        sto_token: Address,
        featured: bool,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        let mut listing = Self::load_listing(&env, &sto_token)?;
        listing.featured = featured;
        env.storage()
            .persistent()
            .set(&DataKey::Listing(sto_token.clone()), &listing);

        env.events().publish(
            (Symbol::new(&env, "featured"), sto_token.clone()),
            FeaturedEvent {
                sto_token,
                featured,
            },
        );

        Ok(())
    }

    // ============================================
    // LISTING
    // ============================================

    /// List an offering. Validates the terms and metadata, then pulls the
    /// issuer's entire offering-token balance into custody; the pulled
    /// quantity is frozen as the escrowed supply and never increased.
    ///
    /// # Errors
    /// - `InvalidTerms`: Cap/investment/time ordering invariant violated,
    ///   or the issuer holds no offering tokens
    /// - `MetadataNotAllowed`: Country, industry or investment type not
    ///   in the catalog
    /// - `DuplicateListing`: A listing already exists for this token
    /// - `TransferFailed`: Supply pull from the issuer failed
    pub fn list_sto(env: Env, terms: ListingTerms, info: ListingInfo) -> Result<(), Error> {
        terms.owner.require_auth();

        let now = env.ledger().timestamp();
        validate_terms(&terms, now)?;

        let allowed = env
            .storage()
            .persistent()
            .has(&DataKey::Country(info.country.clone()))
            && env
                .storage()
                .persistent()
                .has(&DataKey::Industry(info.industry.clone()))
            && env
                .storage()
                .persistent()
                .has(&DataKey::InvestmentType(info.investment_type.clone()));
        if !allowed {
            return Err(Error::MetadataNotAllowed);
        }

        if env
            .storage()
            .persistent()
            .has(&DataKey::Listing(terms.sto_token.clone()))
        {
            return Err(Error::DuplicateListing);
        }

        let sto_client = token::Client::new(&env, &terms.sto_token);
        let base_client = token::Client::new(&env, &terms.base_token);
        let sto_decimals = sto_client.decimals();
        let base_decimals = base_client.decimals();

        // The factory mints the full fixed supply to the issuer, so the
        // issuer's balance at listing time is the offering supply.
        let supply = sto_client.balance(&terms.owner);
        if supply <= 0 {
            return Err(Error::InvalidTerms);
        }

        // The escrow must cover the allocation of a fully subscribed raise
        let max_allocation = claimable_tokens(
            terms.hard_cap,
            terms.sto_price,
            terms.base_price,
            base_decimals,
            sto_decimals,
        )
        .ok_or(Error::MathOverflow)?;
        if max_allocation > supply {
            return Err(Error::InvalidTerms);
        }

        if sto_client
            .try_transfer(&terms.owner, &env.current_contract_address(), &supply)
            .is_err()
        {
            return Err(Error::TransferFailed);
        }

        let listing = Listing {
            terms: terms.clone(),
            sto_decimals,
            base_decimals,
            featured: false,
            raised_amount: 0,
            supply_escrowed: supply,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Listing(terms.sto_token.clone()), &listing);
        env.storage()
            .persistent()
            .set(&DataKey::Info(terms.sto_token.clone()), &info);

        let mut index: Vec<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::ListingIndex)
            .unwrap_or_else(|| Vec::new(&env));
        index.push_back(terms.sto_token.clone());
        env.storage()
            .persistent()
            .set(&DataKey::ListingIndex, &index);

        env.events().publish(
            (Symbol::new(&env, "listed"), terms.sto_token.clone()),
            ListedEvent {
                sto_token: terms.sto_token.clone(),
                base_token: terms.base_token.clone(),
                owner: terms.owner.clone(),
                soft_cap: terms.soft_cap,
                hard_cap: terms.hard_cap,
                supply_escrowed: supply,
                start_time: terms.start_time,
                end_time: terms.end_time,
                token_claim_time: terms.token_claim_time,
            },
        );

        Ok(())
    }

    // ============================================
    // CONTRIBUTION
    // ============================================

    /// Contribute funding tokens to an open listing. Returns the
    /// investor's new cumulative contribution.
    ///
    /// The min_investment floor applies to the first contribution only;
    /// top-ups of any positive size are accepted up to max_investment.
    ///
    /// # Errors
    /// - `NotFound`: No listing for this offering token
    /// - `NotStartedYet`: Window has not opened
    /// - `OfferingClosed`: Window has closed
    /// - `TransferFailed`: Amount not positive, or the pull failed
    /// - `BelowMinInvestment`: First contribution under the floor
    /// - `ExceedsMaxInvestment`: Cumulative total would pass the ceiling
    /// - `ExceedsHardCap`: Aggregate raise would pass the hard cap
    pub fn invest(
        env: Env,
        investor: Address,
        sto_token: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        investor.require_auth();

        let mut listing = Self::load_listing(&env, &sto_token)?;

        match phase_of(&listing, env.ledger().timestamp()) {
            Phase::NotStarted => return Err(Error::NotStartedYet),
            Phase::Open => {}
            _ => return Err(Error::OfferingClosed),
        }

        if amount <= 0 {
            return Err(Error::TransferFailed);
        }

        let contribution_key = DataKey::Contribution(sto_token.clone(), investor.clone());
        let previous: i128 = env
            .storage()
            .persistent()
            .get(&contribution_key)
            .unwrap_or(0);

        let new_total = previous.checked_add(amount).ok_or(Error::MathOverflow)?;

        if previous == 0 && amount < listing.terms.min_investment {
            return Err(Error::BelowMinInvestment);
        }
        if new_total > listing.terms.max_investment {
            return Err(Error::ExceedsMaxInvestment);
        }

        let new_raised = listing
            .raised_amount
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        if new_raised > listing.terms.hard_cap {
            return Err(Error::ExceedsHardCap);
        }

        let base_client = token::Client::new(&env, &listing.terms.base_token);
        if base_client
            .try_transfer(&investor, &env.current_contract_address(), &amount)
            .is_err()
        {
            return Err(Error::TransferFailed);
        }

        listing.raised_amount = new_raised;
        env.storage()
            .persistent()
            .set(&DataKey::Listing(sto_token.clone()), &listing);
        env.storage()
            .persistent()
            .set(&contribution_key, &new_total);

        env.events().publish(
            (Symbol::new(&env, "invested"), sto_token.clone(), investor.clone()),
            InvestedEvent {
                sto_token,
                investor,
                amount,
                total_contribution: new_total,
                raised_amount: new_raised,
            },
        );

        Ok(new_total)
    }

    // ============================================
    // SETTLEMENT: SUCCESS PATH
    // ============================================

    /// Claim the offering-token allocation for a successful raise.
    /// Returns the payout in offering-token units.
    ///
    /// # Errors
    /// - `NotFound`: No listing for this offering token
    /// - `NothingToClaim`: Caller has no recorded contribution
    /// - `TokenClaimTimeNotArrived`: Before token_claim_time
    /// - `SoftcapNotReached`: Raise failed; use `withdraw_base_token`
    /// - `AlreadyClaimed`: Allocation already claimed
    pub fn claim_tokens(env: Env, investor: Address, sto_token: Address) -> Result<i128, Error> {
        investor.require_auth();

        let listing = Self::load_listing(&env, &sto_token)?;

        let contribution: i128 = env
            .storage()
            .persistent()
            .get(&DataKey::Contribution(sto_token.clone(), investor.clone()))
            .unwrap_or(0);
        if contribution == 0 {
            return Err(Error::NothingToClaim);
        }

        match phase_of(&listing, env.ledger().timestamp()) {
            Phase::EndedSuccessful => {}
            Phase::EndedFailed => return Err(Error::SoftcapNotReached),
            _ => return Err(Error::TokenClaimTimeNotArrived),
        }

        let claims_key = DataKey::Claims(sto_token.clone(), investor.clone());
        let mut flags = Self::read_claims(&env, &claims_key);
        if flags.tokens_claimed {
            return Err(Error::AlreadyClaimed);
        }

        let payout = claimable_tokens(
            contribution,
            listing.terms.sto_price,
            listing.terms.base_price,
            listing.base_decimals,
            listing.sto_decimals,
        )
        .ok_or(Error::MathOverflow)?;

        // Flag committed before the outbound transfer; a transfer failure
        // aborts the invocation and rolls the flag back with it.
        flags.tokens_claimed = true;
        env.storage().persistent().set(&claims_key, &flags);

        let sto_client = token::Client::new(&env, &listing.terms.sto_token);
        sto_client.transfer(&env.current_contract_address(), &investor, &payout);

        env.events().publish(
            (Symbol::new(&env, "tokens_claimed"), sto_token.clone(), investor.clone()),
            TokensClaimedEvent {
                sto_token,
                investor,
                payout,
            },
        );

        Ok(payout)
    }

    /// Claim the raised funding tokens (issuer only). Returns the amount
    /// transferred.
    ///
    /// # Errors
    /// - `NotFound`: No listing for this offering token
    /// - `Unauthorized`: Caller is not the listing's issuer
    /// - `TokenClaimTimeNotArrived`: Before token_claim_time
    /// - `SoftcapNotReached`: Raise failed; use `withdraw_sto_token`
    /// - `AlreadyClaimed`: Funds already claimed
    pub fn claim_base_token(env: Env, caller: Address, sto_token: Address) -> Result<i128, Error> {
        caller.require_auth();

        let listing = Self::load_listing(&env, &sto_token)?;
        if caller != listing.terms.owner {
            return Err(Error::Unauthorized);
        }

        match phase_of(&listing, env.ledger().timestamp()) {
            Phase::EndedSuccessful => {}
            Phase::EndedFailed => return Err(Error::SoftcapNotReached),
            _ => return Err(Error::TokenClaimTimeNotArrived),
        }

        let flags_key = DataKey::IssuerClaims(sto_token.clone());
        let mut flags = Self::read_issuer_claims(&env, &flags_key);
        if flags.funds_claimed {
            return Err(Error::AlreadyClaimed);
        }

        flags.funds_claimed = true;
        env.storage().persistent().set(&flags_key, &flags);

        let base_client = token::Client::new(&env, &listing.terms.base_token);
        base_client.transfer(&env.current_contract_address(), &caller, &listing.raised_amount);

        env.events().publish(
            (Symbol::new(&env, "funds_claimed"), sto_token.clone()),
            FundsClaimedEvent {
                sto_token,
                owner: caller,
                amount: listing.raised_amount,
            },
        );

        Ok(listing.raised_amount)
    }

    // ============================================
    // SETTLEMENT: FAILURE PATH
    // ============================================

    /// Refund the caller's contribution after a failed raise. Returns the
    /// refunded amount.
    ///
    /// # Errors
    /// - `NotFound`: No listing for this offering token
    /// - `NothingToClaim`: Caller has no recorded contribution
    /// - `OfferingNotEndedYet`: Before end_time
    /// - `TokenClaimTimeNotArrived`: Before token_claim_time
    /// - `SoftcapReached`: Raise succeeded; use `claim_tokens`
    /// - `AlreadyClaimed`: Refund already taken
    pub fn withdraw_base_token(
        env: Env,
        investor: Address,
        sto_token: Address,
    ) -> Result<i128, Error> {
        investor.require_auth();

        let listing = Self::load_listing(&env, &sto_token)?;

        let contribution: i128 = env
            .storage()
            .persistent()
            .get(&DataKey::Contribution(sto_token.clone(), investor.clone()))
            .unwrap_or(0);
        if contribution == 0 {
            return Err(Error::NothingToClaim);
        }

        Self::check_failed_phase(&listing, env.ledger().timestamp())?;

        let claims_key = DataKey::Claims(sto_token.clone(), investor.clone());
        let mut flags = Self::read_claims(&env, &claims_key);
        if flags.refund_claimed {
            return Err(Error::AlreadyClaimed);
        }

        flags.refund_claimed = true;
        env.storage().persistent().set(&claims_key, &flags);

        let base_client = token::Client::new(&env, &listing.terms.base_token);
        base_client.transfer(&env.current_contract_address(), &investor, &contribution);

        env.events().publish(
            (Symbol::new(&env, "refunded"), sto_token.clone(), investor.clone()),
            RefundedEvent {
                sto_token,
                investor,
                amount: contribution,
            },
        );

        Ok(contribution)
    }

    /// Reclaim the escrowed offering supply after a failed raise (issuer
    /// only). Returns the reclaimed amount.
    ///
    /// # Errors
    /// - `NotFound`: No listing for this offering token
    /// - `Unauthorized`: Caller is not the listing's issuer
    /// - `OfferingNotEndedYet`: Before end_time
    /// - `TokenClaimTimeNotArrived`: Before token_claim_time
    /// - `SoftcapReached`: Raise succeeded; use `claim_base_token`
    /// - `AlreadyClaimed`: Supply already reclaimed
    pub fn withdraw_sto_token(env: Env, caller: Address, sto_token: Address) -> Result<i128, Error> {
        caller.require_auth();

        let listing = Self::load_listing(&env, &sto_token)?;
        if caller != listing.terms.owner {
            return Err(Error::Unauthorized);
        }

        Self::check_failed_phase(&listing, env.ledger().timestamp())?;

        let flags_key = DataKey::IssuerClaims(sto_token.clone());
        let mut flags = Self::read_issuer_claims(&env, &flags_key);
        if flags.supply_reclaimed {
            return Err(Error::AlreadyClaimed);
        }

        flags.supply_reclaimed = true;
        env.storage().persistent().set(&flags_key, &flags);

        let sto_client = token::Client::new(&env, &listing.terms.sto_token);
        sto_client.transfer(
            &env.current_contract_address(),
            &caller,
            &listing.supply_escrowed,
        );

        env.events().publish(
            (Symbol::new(&env, "supply_reclaimed"), sto_token.clone()),
            SupplyReclaimedEvent {
                sto_token,
                owner: caller,
                amount: listing.supply_escrowed,
            },
        );

        Ok(listing.supply_escrowed)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Get a listing by offering token
    pub fn get_listing(env: Env, sto_token: Address) -> Result<Listing, Error> {
        Self::load_listing(&env, &sto_token)
    }

    /// Get the descriptive metadata of a listing
    pub fn get_listing_info(env: Env, sto_token: Address) -> Result<ListingInfo, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Info(sto_token))
            .ok_or(Error::NotFound)
    }

    /// Get all listings
    pub fn get_all_listings(env: Env) -> Vec<Listing> {
        let mut listings = Vec::new(&env);
        for sto_token in Self::listing_index(&env).iter() {
            if let Some(listing) = env
                .storage()
                .persistent()
                .get::<DataKey, Listing>(&DataKey::Listing(sto_token))
            {
                listings.push_back(listing);
            }
        }
        listings
    }

    /// Get all listings issued by an owner
    pub fn get_listings_by_owner(env: Env, owner: Address) -> Vec<Listing> {
        let mut listings = Vec::new(&env);
        for listing in Self::get_all_listings(env.clone()).iter() {
            if listing.terms.owner == owner {
                listings.push_back(listing);
            }
        }
        listings
    }

    /// Get all featured listings
    pub fn get_featured_listings(env: Env) -> Vec<Listing> {
        let mut listings = Vec::new(&env);
        for listing in Self::get_all_listings(env.clone()).iter() {
            if listing.featured {
                listings.push_back(listing);
            }
        }
        listings
    }

    /// Get an investor's cumulative contribution
    pub fn get_contribution(env: Env, sto_token: Address, investor: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Contribution(sto_token, investor))
            .unwrap_or(0)
    }

    /// Get an investor's settlement flags
    pub fn get_claim_flags(env: Env, sto_token: Address, investor: Address) -> ClaimFlags {
        Self::read_claims(&env, &DataKey::Claims(sto_token, investor))
    }

    /// Get the issuer's settlement flags
    pub fn get_issuer_flags(env: Env, sto_token: Address) -> IssuerFlags {
        Self::read_issuer_claims(&env, &DataKey::IssuerClaims(sto_token))
    }

    /// Get the current lifecycle phase of a listing
    pub fn get_phase(env: Env, sto_token: Address) -> Result<Phase, Error> {
        let listing = Self::load_listing(&env, &sto_token)?;
        Ok(phase_of(&listing, env.ledger().timestamp()))
    }

    /// Check whether a catalog value is allowed. Categories: "country",
    /// "industry", "invtype".
    pub fn is_allowed(env: Env, category: Symbol, value: String) -> bool {
        let key = if category == symbol_short!("country") {
            DataKey::Country(value)
        } else if category == symbol_short!("industry") {
            DataKey::Industry(value)
        } else if category == symbol_short!("invtype") {
            DataKey::InvestmentType(value)
        } else {
            return false;
        };
        env.storage().persistent().has(&key)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;

        caller.require_auth();
        if caller != &admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn load_listing(env: &Env, sto_token: &Address) -> Result<Listing, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Listing(sto_token.clone()))
            .ok_or(Error::NotFound)
    }

    fn listing_index(env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::ListingIndex)
            .unwrap_or_else(|| Vec::new(env))
    }

    fn read_claims(env: &Env, key: &DataKey) -> ClaimFlags {
        env.storage().persistent().get(key).unwrap_or(ClaimFlags {
            tokens_claimed: false,
            refund_claimed: false,
        })
    }

    fn read_issuer_claims(env: &Env, key: &DataKey) -> IssuerFlags {
        env.storage().persistent().get(key).unwrap_or(IssuerFlags {
            funds_claimed: false,
            supply_reclaimed: false,
        })
    }

    /// Gate for the two failure-path settlement operations.
    fn check_failed_phase(listing: &Listing, now: u64) -> Result<(), Error> {
        match phase_of(listing, now) {
            Phase::NotStarted | Phase::Open => Err(Error::OfferingNotEndedYet),
            Phase::EndedPendingClaim => Err(Error::TokenClaimTimeNotArrived),
            Phase::EndedSuccessful => Err(Error::SoftcapReached),
            Phase::EndedFailed => Ok(()),
        }
    }
}
