use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use word_rain::core::{GlyphCounter, Rain, SampleStore};
use word_rain::engine::Engine;
use word_rain::input::{ScriptedEvents, SignalFlags};
use word_rain::term::Screen;
use word_rain::types::TermSize;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn tick_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut rain = Rain::new(SampleStore::defaults(), 1);
    rain.set_size(TermSize::new(120, 40));
    let mut counter = GlyphCounter::default();

    let mut engine = Engine::new(
        Rain::new(SampleStore::defaults(), 2),
        Screen::new(TermSize::new(80, 24)),
        ScriptedEvents::new(),
        SignalFlags::new(),
    )
    .with_tick(Duration::ZERO);
    engine.start().unwrap();

    // Warm-up: long enough for spawns and retirements to have happened.
    for _ in 0..500 {
        rain.tick(&mut counter).unwrap();
        engine.step().unwrap();
    }

    let allocs = with_alloc_counting(|| {
        // Spawning copies sample text into fixed-capacity slots.
        for _ in 0..500 {
            let _ = rain.tick(&mut counter);
        }
        // Drawing into the screen model writes into existing cells.
        for _ in 0..200 {
            let _ = engine.step();
        }
    });

    assert_eq!(allocs, 0);
    assert!(counter.glyphs > 0);
}
