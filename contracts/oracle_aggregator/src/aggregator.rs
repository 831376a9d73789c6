use crate::events;
use crate::median;
use crate::storage::Storage;
use crate::types::{
    AggregateRecord, PairKey, PriceObservation, SubmissionReceipt, TradingPair, HISTORY_CAPACITY,
};
use soroban_sdk::{Env, Vec};

/// Appends to the ring buffer, evicting the oldest entries past capacity.
pub fn push_observation(history: &mut Vec<PriceObservation>, observation: PriceObservation) {
    history.push_back(observation);
    while history.len() > HISTORY_CAPACITY {
        history.pop_front();
    }
}

pub fn record_submission(
    env: &Env,
    key: &PairKey,
    pair: &TradingPair,
    price: u128,
) -> SubmissionReceipt {
    let height = env.ledger().sequence();

    let mut history = Storage::get_history(env, key);
    push_observation(&mut history, PriceObservation { price, height });
    Storage::set_history(env, key, &history);

    let submission_count = Storage::get_submission_count(env, key).saturating_add(1);
    Storage::set_submission_count(env, key, submission_count);

    let awaiting_quorum = Storage::get_aggregate(env, key).is_none();
    if awaiting_quorum && submission_count < pair.min_sources {
        return SubmissionReceipt {
            price,
            submission_count,
            aggregated: false,
        };
    }

    // The buffer holds at least this submission.
    let value = median::of_history(&history).unwrap_or(price);

    let record = AggregateRecord {
        value,
        last_update_height: height,
        submission_count,
    };
    Storage::set_aggregate(env, key, &record);
    events::aggregate_updated(env, key, &record);

    SubmissionReceipt {
        price: value,
        submission_count,
        aggregated: true,
    }
}
