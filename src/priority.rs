// src/priority.rs

//! Even spacing of integer priorities along the computed order.

/// Priority handed to the first stage in the order unless overridden.
pub const DEFAULT_START_PRIORITY: i64 = 1000;

/// Map an order to `(stage, priority)` pairs.
///
/// The first stage gets exactly `start`; every following stage steps a
/// real-valued accumulator down by `start / (N - 1)`, and each emitted
/// priority is the accumulator truncated toward zero at assignment time.
/// The sequence is non-increasing, starts at `start` and ends at (or just
/// above) zero; with `N == 1` the single stage simply gets `start`.
///
/// The even spacing leaves gaps so a hand-edited priority can be slotted
/// between two computed values later without recomputing the whole pipe.
pub fn assign(order: &[String], start: i64) -> Vec<(String, i64)> {
    if order.is_empty() {
        return Vec::new();
    }

    let step = if order.len() > 1 {
        start as f64 / (order.len() - 1) as f64
    } else {
        0.0
    };

    let mut acc = start as f64;
    let mut assigned = Vec::with_capacity(order.len());

    for name in order {
        assigned.push((name.clone(), acc.trunc() as i64));
        acc -= step;
    }

    assigned
}
