#![no_std]
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

mod admin;
mod aggregator;
mod events;
mod guard;
mod median;
mod registry;
mod staleness;
mod storage;
mod twap;
pub mod types;

use storage::Storage;
use types::{
    AggregateRecord, GlobalParams, OracleError, PairKey, PriceObservation, SubmissionReceipt,
    TradingPair,
};

contractmeta!(
    key = "Description",
    val = "Median price aggregator with deviation and staleness guards"
);

#[contract]
pub struct OracleAggregator;

#[contractimpl]
impl OracleAggregator {
    pub fn initialize(env: Env, admin: Address) -> Result<(), OracleError> {
        admin::initialize(&env, &admin)
    }

    /// Register a pair with its initial reporter set.
    ///
    /// The pair is keyed by `(base, quote)` as given; registering the
    /// reversed order afterwards fails with `AlreadyRegistered`.
    pub fn register_pair(
        env: Env,
        admin: Address,
        base: Address,
        quote: Address,
        reporters: Vec<Address>,
        min_sources: u32,
    ) -> Result<bool, OracleError> {
        registry::register_pair(&env, &admin, &base, &quote, &reporters, min_sources)?;
        Ok(true)
    }

    pub fn add_oracle(
        env: Env,
        admin: Address,
        base: Address,
        quote: Address,
        reporter: Address,
    ) -> Result<bool, OracleError> {
        registry::add_oracle(&env, &admin, &base, &quote, &reporter)?;
        Ok(true)
    }

    pub fn remove_oracle(
        env: Env,
        admin: Address,
        base: Address,
        quote: Address,
        reporter: Address,
    ) -> Result<bool, OracleError> {
        registry::remove_oracle(&env, &admin, &base, &quote, &reporter)?;
        Ok(true)
    }

    pub fn pause_pair(
        env: Env,
        admin: Address,
        base: Address,
        quote: Address,
    ) -> Result<bool, OracleError> {
        registry::set_paused(&env, &admin, &base, &quote, true)?;
        Ok(true)
    }

    pub fn unpause_pair(
        env: Env,
        admin: Address,
        base: Address,
        quote: Address,
    ) -> Result<bool, OracleError> {
        registry::set_paused(&env, &admin, &base, &quote, false)?;
        Ok(true)
    }

    pub fn set_min_sources(
        env: Env,
        admin: Address,
        base: Address,
        quote: Address,
        min_sources: u32,
    ) -> Result<bool, OracleError> {
        registry::set_min_sources(&env, &admin, &base, &quote, min_sources)?;
        Ok(true)
    }

    /// Update staleness and deviation bounds for every pair.
    pub fn set_params(
        env: Env,
        admin: Address,
        max_stale_blocks: u32,
        max_deviation_bps: u32,
    ) -> Result<bool, OracleError> {
        admin::set_params(&env, &admin, max_stale_blocks, max_deviation_bps)?;
        Ok(true)
    }

    pub fn transfer_admin(
        env: Env,
        admin: Address,
        new_admin: Address,
    ) -> Result<bool, OracleError> {
        admin::transfer_admin(&env, &admin, &new_admin)?;
        Ok(true)
    }

    /// Submit a price as `reporter`.
    ///
    /// Success does not imply `get_price` changed: submissions before the
    /// pair reaches `min_sources` only seed the history.
    pub fn submit_price(
        env: Env,
        reporter: Address,
        base: Address,
        quote: Address,
        price: u128,
    ) -> Result<SubmissionReceipt, OracleError> {
        reporter.require_auth();

        let (key, pair) = guard::check_submission(&env, &reporter, &base, &quote, price)?;
        events::price_submitted(&env, &key, &reporter, price);

        Ok(aggregator::record_submission(&env, &key, &pair, price))
    }

    pub fn get_price(env: Env, base: Address, quote: Address) -> Result<u128, OracleError> {
        staleness::get_price(&env, &base, &quote)
    }

    pub fn get_median(env: Env, base: Address, quote: Address) -> Option<u128> {
        staleness::get_median(&env, &base, &quote)
    }

    /// Mean of the last `window` prices (whole history when `None`).
    /// Returns 0 when there is no data.
    pub fn get_twap(env: Env, base: Address, quote: Address, window: Option<u32>) -> u128 {
        twap::get_twap(&env, &base, &quote, window)
    }

    /// Number of observations currently retained for the pair.
    pub fn get_price_count(env: Env, base: Address, quote: Address) -> u32 {
        match registry::resolve(&env, &base, &quote) {
            Some(key) => Storage::get_history(&env, &key).len(),
            None => 0,
        }
    }

    pub fn get_history(env: Env, base: Address, quote: Address) -> Vec<PriceObservation> {
        match registry::resolve(&env, &base, &quote) {
            Some(key) => Storage::get_history(&env, &key),
            None => Vec::new(&env),
        }
    }

    pub fn get_aggregate(env: Env, base: Address, quote: Address) -> Option<AggregateRecord> {
        staleness::get_aggregate(&env, &base, &quote)
    }

    pub fn is_oracle(env: Env, base: Address, quote: Address, identity: Address) -> bool {
        registry::is_oracle(&env, &base, &quote, &identity)
    }

    pub fn is_pair_paused(env: Env, base: Address, quote: Address) -> bool {
        registry::is_paused(&env, &base, &quote)
    }

    pub fn get_oracles(env: Env, base: Address, quote: Address) -> Vec<Address> {
        registry::oracles(&env, &base, &quote)
    }

    pub fn get_pair(env: Env, base: Address, quote: Address) -> Option<TradingPair> {
        registry::load(&env, &base, &quote).ok().map(|(_, pair)| pair)
    }

    pub fn get_pairs(env: Env) -> Vec<PairKey> {
        Storage::get_pairs(&env)
    }

    pub fn get_params(env: Env) -> Result<GlobalParams, OracleError> {
        Storage::get_params(&env)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        Storage::get_admin(&env)
    }
}
