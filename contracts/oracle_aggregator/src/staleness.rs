use crate::registry;
use crate::storage::Storage;
use crate::types::{AggregateRecord, OracleError};
use soroban_sdk::{Address, Env};

/// Whether a record last updated at `last_update` is too old at `current`.
pub fn is_stale(last_update: u32, current: u32, max_stale_blocks: u32) -> bool {
    current.saturating_sub(last_update) > max_stale_blocks
}

pub fn get_aggregate(env: &Env, base: &Address, quote: &Address) -> Option<AggregateRecord> {
    let key = registry::resolve(env, base, quote)?;
    Storage::get_aggregate(env, &key)
}

/// Returns the aggregate only while it is within `max_stale_blocks`.
pub fn get_price(env: &Env, base: &Address, quote: &Address) -> Result<u128, OracleError> {
    let key = registry::resolve(env, base, quote).ok_or(OracleError::PairNotFound)?;
    let record = Storage::get_aggregate(env, &key).ok_or(OracleError::NoAggregate)?;
    let params = Storage::get_params(env)?;

    if is_stale(
        record.last_update_height,
        env.ledger().sequence(),
        params.max_stale_blocks,
    ) {
        return Err(OracleError::Stale);
    }

    Ok(record.value)
}

/// Raw median, without a freshness check.
pub fn get_median(env: &Env, base: &Address, quote: &Address) -> Option<u128> {
    get_aggregate(env, base, quote).map(|record| record.value)
}
