use crate::admin::require_admin;
use crate::events;
use crate::storage::Storage;
use crate::types::{OracleError, PairKey, TradingPair, HISTORY_CAPACITY};
use soroban_sdk::{Address, Env, Map, Vec};

pub fn resolve(env: &Env, base: &Address, quote: &Address) -> Option<PairKey> {
    let declared = PairKey {
        base: base.clone(),
        quote: quote.clone(),
    };
    if Storage::has_pair(env, &declared) {
        return Some(declared);
    }

    let flipped = PairKey {
        base: quote.clone(),
        quote: base.clone(),
    };
    if Storage::has_pair(env, &flipped) {
        return Some(flipped);
    }

    None
}

pub fn load(
    env: &Env,
    base: &Address,
    quote: &Address,
) -> Result<(PairKey, TradingPair), OracleError> {
    let key = resolve(env, base, quote).ok_or(OracleError::PairNotFound)?;
    let pair = Storage::get_pair(env, &key).ok_or(OracleError::PairNotFound)?;
    Ok((key, pair))
}

fn require_valid_min_sources(min_sources: u32) -> Result<(), OracleError> {
    if min_sources == 0 || min_sources > HISTORY_CAPACITY {
        return Err(OracleError::InvalidMinSources);
    }
    Ok(())
}

pub fn register_pair(
    env: &Env,
    admin: &Address,
    base: &Address,
    quote: &Address,
    reporters: &Vec<Address>,
    min_sources: u32,
) -> Result<(), OracleError> {
    require_admin(env, admin)?;

    if base == quote {
        return Err(OracleError::InvalidPair);
    }
    if resolve(env, base, quote).is_some() {
        return Err(OracleError::AlreadyRegistered);
    }
    require_valid_min_sources(min_sources)?;

    let mut reporter_set: Map<Address, bool> = Map::new(env);
    for reporter in reporters.iter() {
        reporter_set.set(reporter, true);
    }

    let key = PairKey {
        base: base.clone(),
        quote: quote.clone(),
    };
    let pair = TradingPair {
        base: base.clone(),
        quote: quote.clone(),
        reporters: reporter_set,
        min_sources,
        paused: false,
        registered_at: env.ledger().sequence(),
    };
    Storage::set_pair(env, &key, &pair);
    Storage::push_pair(env, &key);

    events::pair_registered(env, &key, min_sources);
    Ok(())
}

pub fn add_oracle(
    env: &Env,
    admin: &Address,
    base: &Address,
    quote: &Address,
    reporter: &Address,
) -> Result<(), OracleError> {
    require_admin(env, admin)?;
    let (key, mut pair) = load(env, base, quote)?;

    if pair.reporters.contains_key(reporter.clone()) {
        return Ok(());
    }
    pair.reporters.set(reporter.clone(), true);
    Storage::set_pair(env, &key, &pair);

    events::oracle_added(env, &key, reporter);
    Ok(())
}

pub fn remove_oracle(
    env: &Env,
    admin: &Address,
    base: &Address,
    quote: &Address,
    reporter: &Address,
) -> Result<(), OracleError> {
    require_admin(env, admin)?;
    let (key, mut pair) = load(env, base, quote)?;

    if pair.reporters.remove(reporter.clone()).is_none() {
        return Ok(());
    }
    Storage::set_pair(env, &key, &pair);

    events::oracle_removed(env, &key, reporter);
    Ok(())
}

pub fn set_paused(
    env: &Env,
    admin: &Address,
    base: &Address,
    quote: &Address,
    paused: bool,
) -> Result<(), OracleError> {
    require_admin(env, admin)?;
    let (key, mut pair) = load(env, base, quote)?;

    pair.paused = paused;
    Storage::set_pair(env, &key, &pair);

    events::pause_changed(env, &key, paused);
    Ok(())
}

pub fn set_min_sources(
    env: &Env,
    admin: &Address,
    base: &Address,
    quote: &Address,
    min_sources: u32,
) -> Result<(), OracleError> {
    require_admin(env, admin)?;
    require_valid_min_sources(min_sources)?;
    let (key, mut pair) = load(env, base, quote)?;

    pair.min_sources = min_sources;
    Storage::set_pair(env, &key, &pair);

    events::min_sources_changed(env, &key, min_sources);
    Ok(())
}

pub fn is_oracle(env: &Env, base: &Address, quote: &Address, identity: &Address) -> bool {
    match load(env, base, quote) {
        Ok((_, pair)) => pair.reporters.contains_key(identity.clone()),
        Err(_) => false,
    }
}

pub fn is_paused(env: &Env, base: &Address, quote: &Address) -> bool {
    match load(env, base, quote) {
        Ok((_, pair)) => pair.paused,
        Err(_) => false,
    }
}

pub fn oracles(env: &Env, base: &Address, quote: &Address) -> Vec<Address> {
    match load(env, base, quote) {
        Ok((_, pair)) => pair.reporters.keys(),
        Err(_) => Vec::new(env),
    }
}
