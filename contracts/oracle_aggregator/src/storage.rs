use crate::types::{
    AggregateRecord, DataKey, GlobalParams, OracleError, PairKey, PriceObservation, TradingPair,
};
use soroban_sdk::{Address, Env, Vec};

const DAY_IN_LEDGERS: u32 = 17_280;
pub const TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;
pub const TTL_THRESHOLD: u32 = TTL_EXTEND_TO - DAY_IN_LEDGERS;

pub struct Storage;

impl Storage {
    fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }

    // Pair data is never deleted, so every write keeps it live.
    fn extend_persistent(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
        Self::extend_instance(env);
    }

    pub fn has_admin(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Admin)
    }

    pub fn get_admin(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
        Self::extend_instance(env);
    }

    pub fn get_params(env: &Env) -> Result<GlobalParams, OracleError> {
        env.storage()
            .instance()
            .get(&DataKey::Params)
            .ok_or(OracleError::NotInitialized)
    }

    pub fn set_params(env: &Env, params: &GlobalParams) {
        env.storage().instance().set(&DataKey::Params, params);
        Self::extend_instance(env);
    }

    pub fn get_pairs(env: &Env) -> Vec<PairKey> {
        env.storage()
            .persistent()
            .get(&DataKey::Pairs)
            .unwrap_or(Vec::new(env))
    }

    pub fn push_pair(env: &Env, key: &PairKey) {
        let mut pairs = Self::get_pairs(env);
        pairs.push_back(key.clone());
        env.storage().persistent().set(&DataKey::Pairs, &pairs);
        Self::extend_persistent(env, &DataKey::Pairs);
    }

    pub fn has_pair(env: &Env, key: &PairKey) -> bool {
        env.storage().persistent().has(&DataKey::Pair(key.clone()))
    }

    pub fn get_pair(env: &Env, key: &PairKey) -> Option<TradingPair> {
        env.storage().persistent().get(&DataKey::Pair(key.clone()))
    }

    pub fn set_pair(env: &Env, key: &PairKey, pair: &TradingPair) {
        let key = DataKey::Pair(key.clone());
        env.storage().persistent().set(&key, pair);
        Self::extend_persistent(env, &key);
    }

    pub fn get_history(env: &Env, key: &PairKey) -> Vec<PriceObservation> {
        env.storage()
            .persistent()
            .get(&DataKey::History(key.clone()))
            .unwrap_or(Vec::new(env))
    }

    pub fn set_history(env: &Env, key: &PairKey, history: &Vec<PriceObservation>) {
        let key = DataKey::History(key.clone());
        env.storage().persistent().set(&key, history);
        Self::extend_persistent(env, &key);
    }

    pub fn get_aggregate(env: &Env, key: &PairKey) -> Option<AggregateRecord> {
        env.storage().persistent().get(&DataKey::Aggregate(key.clone()))
    }

    pub fn set_aggregate(env: &Env, key: &PairKey, record: &AggregateRecord) {
        let key = DataKey::Aggregate(key.clone());
        env.storage().persistent().set(&key, record);
        Self::extend_persistent(env, &key);
    }

    pub fn get_submission_count(env: &Env, key: &PairKey) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::SubmissionCount(key.clone()))
            .unwrap_or(0)
    }

    pub fn set_submission_count(env: &Env, key: &PairKey, count: u32) {
        let key = DataKey::SubmissionCount(key.clone());
        env.storage().persistent().set(&key, &count);
        Self::extend_persistent(env, &key);
    }
}
