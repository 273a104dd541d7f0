use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_rain::core::{GlyphCounter, Rain, SampleStore};
use word_rain::term::Screen;
use word_rain::types::TermSize;

fn warmed_rain(seed: u64, size: TermSize) -> Rain {
    let mut rain = Rain::new(SampleStore::defaults(), seed);
    rain.set_size(size);
    let mut sink = GlyphCounter::default();
    for _ in 0..500 {
        let _ = rain.tick(&mut sink);
    }
    rain
}

fn bench_tick_counter(c: &mut Criterion) {
    let mut rain = warmed_rain(12345, TermSize::new(200, 60));
    let mut sink = GlyphCounter::default();

    c.bench_function("rain_tick_200x60", |b| {
        b.iter(|| {
            let _ = rain.tick(black_box(&mut sink));
        })
    });
}

fn bench_tick_screen(c: &mut Criterion) {
    let size = TermSize::new(200, 60);
    let mut rain = warmed_rain(12345, size);
    let mut screen = Screen::new(size);

    c.bench_function("rain_tick_into_screen", |b| {
        b.iter(|| {
            let _ = rain.tick(black_box(&mut screen));
        })
    });
}

fn bench_spawn_pass(c: &mut Criterion) {
    let mut rain = Rain::new(SampleStore::defaults(), 12345);
    rain.set_size(TermSize::new(200, 60));

    c.bench_function("spawn_pass", |b| {
        b.iter(|| {
            black_box(rain.spawn_pass());
        })
    });
}

criterion_group!(benches, bench_tick_counter, bench_tick_screen, bench_spawn_pass);
criterion_main!(benches);
