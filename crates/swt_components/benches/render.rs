//! Component rendering benchmarks.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use swt_components::prelude::*;
use swt_components::{build_engine, merge_query, SwtConfig};

fn tag_components(c: &mut Criterion) {
    let engine = build_engine(&SwtConfig::default());

    c.bench_function("badge_render", |b| {
        let badge = Badge::new("1234").color(BadgeColor::Info).pill();
        b.iter(|| black_box(&badge).render_with(&engine));
    });

    c.bench_function("progress_bar_render", |b| {
        let bar = ProgressBar::new(42).color(ProgressColor::Success);
        b.iter(|| black_box(&bar).render_with(&engine));
    });
}

fn templated_components(c: &mut Criterion) {
    let engine = build_engine(&SwtConfig::default());

    c.bench_function("modal_render", |b| {
        let modal = Modal::new("Title", "Body", "Open").size(ModalSize::Large);
        b.iter(|| black_box(&modal).render_with(&engine));
    });

    c.bench_function("accordion_render", |b| {
        let accordion = Accordion::new("Details", "Body").header_right("<b>3</b>");
        b.iter(|| black_box(&accordion).render_with(&engine));
    });
}

fn helper_lists(c: &mut Criterion) {
    let engine = build_engine(&SwtConfig::default());
    let helper = RenderHelper::with_engine(&engine)
        .with_permissions(vec!["app.view".to_string()])
        .with_url_query([("current-view", "list")]);

    c.bench_function("render_list_coherent_50_links", |b| {
        b.iter_batched(
            || {
                (0..50)
                    .map(|i| {
                        let link = Link::new(format!("/item/{i}?page=2"), "item");
                        if i % 2 == 0 {
                            link.with_needs_perm("app.view")
                        } else {
                            link.with_needs_perm("app.edit")
                        }
                    })
                    .collect::<Vec<_>>()
            },
            |mut links| helper.render_list_coherent(&mut links),
            criterion::BatchSize::SmallInput,
        );
    });

    c.bench_function("merge_query", |b| {
        b.iter(|| merge_query(black_box("/list?page=2&sort=name#top"), [("page", "3")]));
    });
}

criterion_group!(benches, tag_components, templated_components, helper_lists);
criterion_main!(benches);
