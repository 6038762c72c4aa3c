use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pagesmith::{
    core::{
        msg::{selection::SelectionMsg, Msg},
        state::AppState,
        update::update,
    },
    domain::{catalog::Catalog, pricing::compute_price, selection::SelectionState},
    presentation::components::Components,
};
use ratatui::{backend::TestBackend, Terminal};

fn pricing(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let selection = SelectionState::new(&catalog, Default::default(), Default::default());

    c.bench_function("compute_price", |b| {
        b.iter(|| compute_price(black_box(&selection), black_box(&catalog)))
    });
}

fn toggle_update(c: &mut Criterion) {
    c.bench_function("update toggle component", |b| {
        b.iter_batched(
            AppState::default,
            |state| update(Msg::Selection(SelectionMsg::ToggleComponent(3)), state),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn full_render(c: &mut Criterion) {
    let state = AppState::default();
    let mut components = Components::new();
    let Ok(mut terminal) = Terminal::new(TestBackend::new(120, 40)) else {
        return;
    };

    c.bench_function("render full screen", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| components.render(frame, black_box(&state)))
                .map(|_| ())
        })
    });
}

criterion_group!(benches, pricing, toggle_update, full_render);
criterion_main!(benches);
