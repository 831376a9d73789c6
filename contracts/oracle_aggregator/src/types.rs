use soroban_sdk::{contracterror, contracttype, Address, Map};

/// Maximum number of observations retained per pair.
pub const HISTORY_CAPACITY: u32 = 32;

/// Basis points in 100%.
pub const BPS_DENOMINATOR: u128 = 10_000;

pub const DEFAULT_MAX_STALE_BLOCKS: u32 = 10;
pub const DEFAULT_MAX_DEVIATION_BPS: u32 = 2_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    Unauthorized = 100,
    AlreadyRegistered = 101,
    NotOracle = 102,
    PairNotFound = 103,
    Paused = 104,
    InvalidMinSources = 105,
    Stale = 106,
    Deviation = 107,
    NoAggregate = 108,
    NotInitialized = 109,
    AlreadyInitialized = 110,
    InvalidParams = 111,
    InvalidPrice = 112,
    InvalidPair = 113,
}

/// Canonical pair key, in the order declared at registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairKey {
    pub base: Address,
    pub quote: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TradingPair {
    pub base: Address,
    pub quote: Address,
    pub reporters: Map<Address, bool>,
    pub min_sources: u32,
    pub paused: bool,
    pub registered_at: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceObservation {
    pub price: u128,
    pub height: u32,
}

/// Published median for a pair.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AggregateRecord {
    pub value: u128,
    pub last_update_height: u32,
    pub submission_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalParams {
    pub max_stale_blocks: u32,
    pub max_deviation_bps: u32,
}

impl GlobalParams {
    pub fn defaults() -> Self {
        Self {
            max_stale_blocks: DEFAULT_MAX_STALE_BLOCKS,
            max_deviation_bps: DEFAULT_MAX_DEVIATION_BPS,
        }
    }
}

/// Outcome of an accepted submission.
///
/// `price` is the current aggregate once one exists, otherwise the submitted
/// price. `aggregated` is set when this submission (re)wrote the aggregate.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmissionReceipt {
    pub price: u128,
    pub submission_count: u32,
    pub aggregated: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Params,
    Pairs,
    Pair(PairKey),
    History(PairKey),
    Aggregate(PairKey),
    SubmissionCount(PairKey),
}
