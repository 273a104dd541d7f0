//! Spawner - fills idle slots with new streams
//!
//! Slots are scanned in index order. Each idle slot rolls a 1-in-5 chance; a
//! hit proposes a random column which is rejected if an active stream is within
//! one column of it. At most [`MAX_SPAWNS_PER_TICK`] streams start per pass.

use tracing::trace;

use crate::pool::ParticlePool;
use crate::rng::RainRng;
use crate::samples::SampleStore;
use crate::types::{TermSize, MAX_SPAWNS_PER_TICK};

/// Run one spawn pass and return how many streams started.
///
/// Nothing spawns while `size` is unusable or `samples` is empty.
pub fn spawn_pass(
    pool: &mut ParticlePool,
    size: TermSize,
    samples: &SampleStore,
    rng: &mut RainRng,
) -> usize {
    if !size.is_usable() || samples.is_empty() {
        return 0;
    }

    let max_column = size.spawn_column_max();
    let mut made = 0;

    for i in 0..pool.capacity() {
        if pool.slots()[i].is_active() {
            continue;
        }
        if !rng.spawn_roll() {
            continue;
        }

        let column = rng.column(max_column);
        if !pool.column_is_clear(column, Some(i)) {
            continue;
        }

        let fall_period = rng.fall_period();
        let sample = rng.index(samples.len());
        let color = rng.color();
        let Some(text) = samples.get(sample) else {
            continue;
        };

        pool.slots_mut()[i].spawn(column, fall_period, text, color);
        trace!(slot = i, column, fall_period, sample, color = color.as_str(), "spawn");

        made += 1;
        if made >= MAX_SPAWNS_PER_TICK {
            break;
        }
    }

    made
}
