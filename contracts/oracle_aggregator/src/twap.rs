use crate::registry;
use crate::storage::Storage;
use crate::types::PriceObservation;
use soroban_sdk::{Address, Env, Vec};

pub const NO_DATA: u128 = 0;

/// Floor of the arithmetic mean of the most recent `window` prices.
///
/// `None` averages the whole buffer.
pub fn mean_of_suffix(history: &Vec<PriceObservation>, window: Option<u32>) -> u128 {
    let len = history.len();
    let count = match window {
        Some(window) => window.min(len),
        None => len,
    };
    if count == 0 {
        return NO_DATA;
    }

    // sum / n == sum(q_i) + sum(r_i) / n, which avoids overflowing the sum.
    let n = count as u128;
    let mut quotients: u128 = 0;
    let mut remainders: u128 = 0;
    for index in (len - count)..len {
        if let Some(observation) = history.get(index) {
            quotients = quotients.saturating_add(observation.price / n);
            remainders += observation.price % n;
        }
    }
    quotients.saturating_add(remainders / n)
}

pub fn get_twap(env: &Env, base: &Address, quote: &Address, window: Option<u32>) -> u128 {
    match registry::resolve(env, base, quote) {
        Some(key) => mean_of_suffix(&Storage::get_history(env, &key), window),
        None => NO_DATA,
    }
}
