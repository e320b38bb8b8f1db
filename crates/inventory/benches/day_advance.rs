use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_core::AggregateId;
use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASS, Inn, InnId, Item, SULFURAS, advance_one_day};

fn inventory(size: usize) -> Vec<Item> {
    let names = [AGED_BRIE, BACKSTAGE_PASS, SULFURAS, "+5 Dexterity Vest"];
    (0..size)
        .map(|i| {
            let name = names[i % names.len()];
            let quality = if name == SULFURAS { 80 } else { (i % 51) as i32 };
            Item::new(name, (i % 30) as i32 - 10, quality)
        })
        .collect()
}

fn bench_advance_one_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_one_day");

    for size in [100usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut items = inventory(size);
            b.iter(|| advance_one_day(black_box(&mut items)));
        });
    }

    group.finish();
}

fn bench_simulate_month(c: &mut Criterion) {
    c.bench_function("inn_simulate_30_days", |b| {
        b.iter(|| {
            let mut inn = Inn::new(InnId::new(AggregateId::new()));
            for item in inventory(1_000) {
                inn.set_item(item);
            }
            inn.simulate(black_box(30));
            inn
        });
    });
}

criterion_group!(benches, bench_advance_one_day, bench_simulate_month);
criterion_main!(benches);
