use crate::registry;
use crate::storage::Storage;
use crate::types::{OracleError, PairKey, TradingPair, BPS_DENOMINATOR};
use soroban_sdk::{log, Address, Env};

/// Relative distance of `price` from `reference`, in basis points.
///
/// Saturates instead of overflowing, which only ever widens the distance.
pub fn deviation_bps(price: u128, reference: u128) -> u128 {
    if reference == 0 {
        return u128::MAX;
    }
    let diff = price.abs_diff(reference);
    diff.saturating_mul(BPS_DENOMINATOR) / reference
}

pub fn check_submission(
    env: &Env,
    reporter: &Address,
    base: &Address,
    quote: &Address,
    price: u128,
) -> Result<(PairKey, TradingPair), OracleError> {
    let (key, pair) = registry::load(env, base, quote)?;

    if pair.paused {
        return Err(OracleError::Paused);
    }
    if !pair.reporters.contains_key(reporter.clone()) {
        log!(env, "rejected submission from non-oracle", reporter.clone());
        return Err(OracleError::NotOracle);
    }
    if price == 0 {
        return Err(OracleError::InvalidPrice);
    }

    // Bootstrap submissions have no baseline and skip this check.
    if let Some(aggregate) = Storage::get_aggregate(env, &key) {
        let params = Storage::get_params(env)?;
        let deviation = deviation_bps(price, aggregate.value);
        if deviation > params.max_deviation_bps as u128 {
            log!(
                env,
                "rejected submission outside deviation bound",
                price,
                aggregate.value,
                deviation
            );
            return Err(OracleError::Deviation);
        }
    }

    Ok((key, pair))
}
