use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{Item, advance_one_day};

const NAMES: [&str; 5] = [
    "+5 Dexterity Vest",
    "Aged Brie",
    "Sulfuras, Hand of Ragnaros",
    "Backstage passes to a TAFKAL80ETC concert",
    "Conjured Mana Cake",
];

/// Mixed stock cycling through every category.
fn stock(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| {
            let sell_in = (i % 30) as i64 - 5;
            let quality = (i % 51) as i64;
            Item::new(NAMES[i % NAMES.len()], sell_in, quality)
        })
        .collect()
}

fn bench_advance_one_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_one_day");

    for size in [10usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched_ref(
                || stock(size),
                |items| advance_one_day(black_box(items.as_mut_slice())),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_item_construction(c: &mut Criterion) {
    c.bench_function("item_new_derives_category", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(Item::new(black_box(name), 10, 20));
            }
        });
    });
}

criterion_group!(benches, bench_advance_one_day, bench_item_construction);
criterion_main!(benches);
