use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_words::core::{shuffle, DeckManager, GameSnapshot, GameState, SimpleRng};
use tile_words::term::{FrameBuffer, GameView, Viewport};
use tile_words::types::{GameIntent, TICK_MS};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    state.start_new_game();
    state.tick(TICK_MS);
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(7);
    let mut tiles: Vec<u32> = (0..98).collect();

    c.bench_function("shuffle_98", |b| {
        b.iter(|| {
            shuffle(&mut rng, black_box(&mut tiles));
        })
    });
}

fn bench_new_deck_and_deal(c: &mut Criterion) {
    let mut deck = DeckManager::new(12345);

    c.bench_function("new_deck_and_deal", |b| {
        b.iter(|| {
            deck.new_deck();
            black_box(deck.deal());
        })
    });
}

fn bench_round(c: &mut Criterion) {
    c.bench_function("accept_and_redeal", |b| {
        b.iter(|| {
            let mut state = started(black_box(99));
            let ids: Vec<u32> = state.grid().iter().take(3).map(|t| t.id).collect();
            for id in ids {
                state.apply_intent(GameIntent::SelectTile(id));
            }
            if let Some(request) = state.apply_intent(GameIntent::SubmitWord) {
                state.resolve_validation(request.ticket, true);
            }
            state.apply_intent(GameIntent::ConfirmContinue);
            state.apply_intent(GameIntent::ConfirmContinue);
            state.tick(TICK_MS);
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = started(12345);
    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_shuffle,
    bench_new_deck_and_deal,
    bench_round,
    bench_snapshot_and_render
);
criterion_main!(benches);
