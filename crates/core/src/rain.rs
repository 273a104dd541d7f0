//! Rain state - the pool, the samples, the RNG and the current size
//!
//! One [`Rain::tick`] is a spawn pass followed by an advance pass. Resizes are
//! applied by the caller between ticks through [`Rain::set_size`].

use tracing::{debug, trace};

use crate::pool::ParticlePool;
use crate::rng::RainRng;
use crate::samples::SampleStore;
use crate::sink::GlyphSink;
use crate::spawner::spawn_pass;
use crate::types::{GlyphColor, TermSize};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Streams started by the spawn pass
    pub spawned: usize,
    /// Streams whose head moved down (and were redrawn)
    pub advanced: usize,
    /// Glyphs emitted
    pub glyphs: usize,
    /// Streams freed because nothing of them was visible any more
    pub retired: usize,
}

#[derive(Debug, Clone)]
pub struct Rain {
    pool: ParticlePool,
    samples: SampleStore,
    rng: RainRng,
    size: Option<TermSize>,
    ticks: u64,
}

impl Rain {
    pub fn new(samples: SampleStore, seed: u64) -> Self {
        Self {
            pool: ParticlePool::new(),
            samples,
            rng: RainRng::new(seed),
            size: None,
            ticks: 0,
        }
    }

    /// Last known terminal size, `None` until the first successful query
    pub fn size(&self) -> Option<TermSize> {
        self.size
    }

    /// Apply a new terminal size. Streams keep their columns and rows.
    pub fn set_size(&mut self, size: TermSize) {
        if self.size != Some(size) {
            debug!(columns = size.columns, rows = size.rows, "terminal size");
        }
        self.size = Some(size);
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Place a stream directly into `slot`, bypassing the RNG.
    ///
    /// Returns false if the slot or sample does not exist.
    pub fn spawn_at(
        &mut self,
        slot: usize,
        column: u16,
        fall_period: u32,
        sample: usize,
        color: GlyphColor,
    ) -> bool {
        let Some(text) = self.samples.get(sample) else {
            return false;
        };
        let Some(p) = self.pool.get_mut(slot) else {
            return false;
        };
        p.spawn(column, fall_period, text, color);
        true
    }

    /// Try to start new streams; nothing happens until a size is known
    pub fn spawn_pass(&mut self) -> usize {
        match self.size {
            Some(size) => spawn_pass(&mut self.pool, size, &self.samples, &mut self.rng),
            None => 0,
        }
    }

    /// Tick every active stream, redraw the ones that moved and retire the
    /// ones with nothing left on screen.
    pub fn advance_pass<S: GlyphSink>(&mut self, sink: &mut S) -> Result<TickReport, S::Error> {
        let size = self.size.unwrap_or_default();
        let mut report = TickReport::default();

        for (slot, p) in self.pool.slots_mut().iter_mut().enumerate() {
            if !p.tick() {
                continue;
            }
            report.advanced += 1;

            sink.set_color(p.color())?;
            let mut drawn = 0;
            for (row, ch) in p.visible_glyphs(size) {
                sink.put_glyph(row, p.column(), ch)?;
                drawn += 1;
            }
            report.glyphs += drawn;

            if drawn == 0 {
                p.deactivate();
                report.retired += 1;
                trace!(slot, column = p.column(), head_row = p.head_row(), "retire");
            }
        }

        Ok(report)
    }

    /// Spawn pass then advance pass
    pub fn tick<S: GlyphSink>(&mut self, sink: &mut S) -> Result<TickReport, S::Error> {
        let spawned = self.spawn_pass();
        let mut report = self.advance_pass(sink)?;
        report.spawned = spawned;
        self.ticks += 1;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DrawLog, DrawOp};
    use crate::types::POOL_CAPACITY;

    fn rain_ab() -> Rain {
        let mut rain = Rain::new(SampleStore::from_lines(["ab"]).unwrap(), 0);
        rain.set_size(TermSize::new(1, 3));
        rain
    }

    #[test]
    fn nothing_spawns_before_size_is_known() {
        let mut rain = Rain::new(SampleStore::defaults(), 0);
        let mut log = DrawLog::new();
        for _ in 0..100 {
            let r = rain.tick(&mut log).unwrap();
            assert_eq!(r, TickReport::default());
        }
        assert_eq!(rain.pool().active_count(), 0);
        assert!(log.is_empty());
        assert_eq!(rain.ticks(), 100);
    }

    #[test]
    fn stream_falls_and_retires_in_one_by_three() {
        let mut rain = rain_ab();
        assert!(rain.spawn_at(0, 1, 1, 0, GlyphColor::Green));

        let mut frames = Vec::new();
        let mut retired_at = None;
        for t in 1..=7 {
            let mut log = DrawLog::new();
            let r = rain.advance_pass(&mut log).unwrap();
            frames.push(log.glyphs().collect::<Vec<_>>());
            if r.retired == 1 {
                retired_at = Some(t);
                break;
            }
        }

        assert_eq!(frames[0], vec![(1, 1, 'a')]);
        assert_eq!(frames[1], vec![(2, 1, 'a'), (1, 1, 'b')]);
        assert_eq!(frames[2], vec![(3, 1, 'a'), (2, 1, 'b'), (1, 1, ' ')]);
        assert_eq!(frames[3], vec![(3, 1, 'b'), (2, 1, ' ')]);
        assert_eq!(frames[4], vec![(3, 1, ' ')]);
        assert_eq!(frames[5], vec![]);
        // head row 6 = rows (3) + text length (3)
        assert_eq!(retired_at, Some(6));
        assert!(!rain.pool().slots()[0].is_active());
    }

    #[test]
    fn color_is_emitted_before_glyphs() {
        let mut rain = rain_ab();
        rain.spawn_at(0, 1, 1, 0, GlyphColor::Yellow);

        let mut log = DrawLog::new();
        rain.advance_pass(&mut log).unwrap();
        assert_eq!(
            log.ops(),
            &[
                DrawOp::Color(GlyphColor::Yellow),
                DrawOp::Glyph { row: 1, column: 1, ch: 'a' },
            ]
        );
    }

    #[test]
    fn slow_stream_is_not_redrawn_between_advances() {
        let mut rain = rain_ab();
        rain.spawn_at(0, 1, 3, 0, GlyphColor::Red);

        let mut log = DrawLog::new();
        rain.advance_pass(&mut log).unwrap();
        rain.advance_pass(&mut log).unwrap();
        assert!(log.is_empty());

        let r = rain.advance_pass(&mut log).unwrap();
        assert_eq!(r.advanced, 1);
        assert_eq!(log.glyphs().count(), 1);
    }

    #[test]
    fn shrinking_retires_streams_past_new_width() {
        let mut rain = Rain::new(SampleStore::defaults(), 0);
        rain.set_size(TermSize::new(40, 20));
        rain.spawn_at(0, 30, 1, 0, GlyphColor::Cyan);
        rain.spawn_at(1, 5, 1, 0, GlyphColor::Cyan);

        let mut log = DrawLog::new();
        rain.advance_pass(&mut log).unwrap();
        assert_eq!(rain.pool().active_count(), 2);

        rain.set_size(TermSize::new(10, 20));
        let r = rain.advance_pass(&mut log).unwrap();
        assert_eq!(r.retired, 1);
        assert!(!rain.pool().slots()[0].is_active());
        assert!(rain.pool().slots()[1].is_active());
        // The surviving stream kept its position.
        assert_eq!(rain.pool().slots()[1].head_row(), 2);
    }

    #[test]
    fn same_seed_same_rain() {
        let run = |seed| {
            let mut rain = Rain::new(SampleStore::defaults(), seed);
            rain.set_size(TermSize::new(80, 24));
            let mut log = DrawLog::new();
            for _ in 0..200 {
                rain.tick(&mut log).unwrap();
            }
            log
        };
        assert_eq!(run(0), run(0));
        assert_ne!(run(0), run(1));
    }

    #[test]
    fn pool_never_overflows() {
        let mut rain = Rain::new(SampleStore::defaults(), 9);
        rain.set_size(TermSize::new(300, 10));
        let mut log = DrawLog::new();
        for _ in 0..2_000 {
            rain.tick(&mut log).unwrap();
            assert!(rain.pool().active_count() <= POOL_CAPACITY);
            log.clear();
        }
    }

    #[test]
    fn spawn_at_rejects_bad_indices() {
        let mut rain = rain_ab();
        assert!(!rain.spawn_at(POOL_CAPACITY, 1, 1, 0, GlyphColor::Red));
        assert!(!rain.spawn_at(0, 1, 1, 5, GlyphColor::Red));
    }
}
