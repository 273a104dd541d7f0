//! Particle pool - fixed arena of [`POOL_CAPACITY`] slots
//!
//! Slots are addressed by index and reused in place; spawning never
//! allocates.

use crate::particle::Particle;
use crate::types::POOL_CAPACITY;

#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: [Particle; POOL_CAPACITY],
}

impl ParticlePool {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Particle::idle()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.is_active()).count()
    }

    /// True when no active particle other than `except` sits within one
    /// column of `column`
    pub fn column_is_clear(&self, column: u16, except: Option<usize>) -> bool {
        self.slots.iter().enumerate().all(|(i, p)| {
            Some(i) == except || !p.is_active() || p.column().abs_diff(column) > 1
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Particle] {
        &mut self.slots
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Particle)> {
        self.slots.iter().enumerate().filter(|(_, p)| p.is_active())
    }
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::normalize_entry;
    use crate::types::GlyphColor;

    #[test]
    fn new_pool_is_idle() {
        let pool = ParticlePool::new();
        assert_eq!(pool.capacity(), POOL_CAPACITY);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.iter_active().count(), 0);
    }

    #[test]
    fn column_spacing_check() {
        let mut pool = ParticlePool::new();
        let text = normalize_entry("x");
        pool.get_mut(0)
            .unwrap()
            .spawn(10, 1, &text, GlyphColor::Green);

        assert!(!pool.column_is_clear(9, None));
        assert!(!pool.column_is_clear(10, None));
        assert!(!pool.column_is_clear(11, None));
        assert!(pool.column_is_clear(8, None));
        assert!(pool.column_is_clear(12, None));

        // A slot does not block itself.
        assert!(pool.column_is_clear(10, Some(0)));

        pool.get_mut(0).unwrap().deactivate();
        assert!(pool.column_is_clear(10, None));
    }

    #[test]
    fn every_slot_active() {
        let mut pool = ParticlePool::new();
        let text = normalize_entry("x");
        for (i, p) in pool.slots_mut().iter_mut().enumerate() {
            p.spawn(i as u16 * 3 + 1, 1, &text, GlyphColor::White);
        }
        assert_eq!(pool.active_count(), POOL_CAPACITY);
        assert_eq!(pool.iter_active().count(), POOL_CAPACITY);
        assert!(pool.get_mut(POOL_CAPACITY).is_none());
    }
}
