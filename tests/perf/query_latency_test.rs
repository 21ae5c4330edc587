// Included into the library's test module via lib.rs, so paths are crate-relative.
use std::time::Instant;

use crate::catalog::{load, CatalogDefinition, CategoryDefinition, CommandDefinition};
use crate::model::CategoryFilter;
use crate::query::query;

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

fn synthetic_catalog(categories: usize, commands_per_category: usize) -> crate::catalog::Catalog {
    let categories = (0..categories)
        .map(|c| CategoryDefinition {
            name: format!("Category_{c:02}"),
            commands: (0..commands_per_category)
                .map(|i| CommandDefinition {
                    name: format!("command_{c:02}_{i:04}"),
                    description: format!("Synthetic command number {i} in group {c}."),
                })
                .collect(),
        })
        .collect();

    load(CatalogDefinition { categories }).expect("synthetic catalog should load")
}

#[test]
fn warm_query_p95_under_15ms() {
    let catalog = synthetic_catalog(20, 500);
    let filter = CategoryFilter::All;

    for _ in 0..30 {
        let _ = query(&catalog, "command_07", &filter);
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(80);
        for _ in 0..80 {
            let start = Instant::now();
            let _ = query(&catalog, "command_07", &filter);
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 15.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 15.0ms); batches={batch_p95:?}",
    );
}
