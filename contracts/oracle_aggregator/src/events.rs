use crate::types::{AggregateRecord, GlobalParams, PairKey};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const PAIR_REGISTERED: Symbol = symbol_short!("pair_reg");
pub const ORACLE_ADDED: Symbol = symbol_short!("orc_add");
pub const ORACLE_REMOVED: Symbol = symbol_short!("orc_rm");
pub const PAIR_PAUSED: Symbol = symbol_short!("paused");
pub const PAIR_UNPAUSED: Symbol = symbol_short!("unpaused");
pub const MIN_SOURCES: Symbol = symbol_short!("min_src");
pub const PARAMS: Symbol = symbol_short!("params");
pub const ADMIN: Symbol = symbol_short!("admin");
pub const SUBMITTED: Symbol = symbol_short!("submit");
pub const AGGREGATED: Symbol = symbol_short!("aggregate");

pub fn pair_registered(env: &Env, key: &PairKey, min_sources: u32) {
    env.events().publish(
        (PAIR_REGISTERED, key.base.clone(), key.quote.clone()),
        min_sources,
    );
}

pub fn oracle_added(env: &Env, key: &PairKey, reporter: &Address) {
    env.events().publish(
        (ORACLE_ADDED, key.base.clone(), key.quote.clone()),
        reporter.clone(),
    );
}

pub fn oracle_removed(env: &Env, key: &PairKey, reporter: &Address) {
    env.events().publish(
        (ORACLE_REMOVED, key.base.clone(), key.quote.clone()),
        reporter.clone(),
    );
}

pub fn pause_changed(env: &Env, key: &PairKey, paused: bool) {
    let topic = if paused { PAIR_PAUSED } else { PAIR_UNPAUSED };
    env.events()
        .publish((topic, key.base.clone(), key.quote.clone()), ());
}

pub fn min_sources_changed(env: &Env, key: &PairKey, min_sources: u32) {
    env.events().publish(
        (MIN_SOURCES, key.base.clone(), key.quote.clone()),
        min_sources,
    );
}

pub fn params_updated(env: &Env, params: &GlobalParams) {
    env.events().publish((PARAMS,), params.clone());
}

pub fn admin_transferred(env: &Env, previous: &Address, new_admin: &Address) {
    env.events()
        .publish((ADMIN, previous.clone()), new_admin.clone());
}

pub fn price_submitted(env: &Env, key: &PairKey, reporter: &Address, price: u128) {
    env.events().publish(
        (SUBMITTED, key.base.clone(), key.quote.clone(), reporter.clone()),
        price,
    );
}

pub fn aggregate_updated(env: &Env, key: &PairKey, record: &AggregateRecord) {
    env.events().publish(
        (AGGREGATED, key.base.clone(), key.quote.clone()),
        record.clone(),
    );
}
