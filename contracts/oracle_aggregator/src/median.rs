use arrayvec::ArrayVec;
use soroban_sdk::Vec;

use crate::types::{PriceObservation, HISTORY_CAPACITY};

const CAPACITY: usize = HISTORY_CAPACITY as usize;

/// Returns the sorted middle, or the floor of the average of the two middle
/// items if the list has an even number of elements.
pub fn calculate(list: &mut [u128]) -> Option<u128> {
    if list.is_empty() {
        return None;
    }
    list.sort_unstable();
    let len = list.len();
    let middle_index = len / 2;
    if len % 2 == 0 {
        let lower = *list.get(middle_index - 1)?;
        let upper = *list.get(middle_index)?;
        Some(midpoint(lower, upper))
    } else {
        list.get(middle_index).copied()
    }
}

/// `floor((a + b) / 2)` without overflowing.
fn midpoint(a: u128, b: u128) -> u128 {
    a / 2 + b / 2 + (a % 2 + b % 2) / 2
}

/// Median over the prices of a history buffer.
pub fn of_history(history: &Vec<PriceObservation>) -> Option<u128> {
    let mut prices = ArrayVec::<u128, CAPACITY>::new();
    for observation in history.iter() {
        // The buffer never holds more than CAPACITY entries.
        if prices.try_push(observation.price).is_err() {
            break;
        }
    }
    calculate(prices.as_mut_slice())
}
