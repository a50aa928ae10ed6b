//! Benchmarks for display list construction and registry matching
//!
//! Run with: cargo bench display_list

use search_select::model::{build_display_list, filter_options, SelectOption};
use search_select::registry::{Lookup, StaticRegistry};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn registry_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Warehouse {:05} North Wing", i))
        .collect()
}

// ============================================================================
// Registry lookup
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn registry_substring_lookup(bencher: divan::Bencher, count: usize) {
    let registry = StaticRegistry::new(registry_names(count));
    bencher.bench(|| divan::black_box(registry.lookup("00042")));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn static_source_filter(bencher: divan::Bencher, count: usize) {
    let options: Vec<SelectOption> = registry_names(count)
        .into_iter()
        .map(SelectOption::from_name)
        .collect();
    bencher.bench(|| divan::black_box(filter_options(&options, "north wing")));
}

// ============================================================================
// Display list
// ============================================================================

#[divan::bench(args = [10, 100, 1_000])]
fn build_with_new_entry(bencher: divan::Bencher, count: usize) {
    let fetched: Vec<SelectOption> = registry_names(count)
        .into_iter()
        .map(SelectOption::from_name)
        .collect();
    bencher.bench(|| divan::black_box(build_display_list(&fetched, "warehouse", Some("facility"))));
}

#[divan::bench(args = [10, 100, 1_000])]
fn build_with_exact_match(bencher: divan::Bencher, count: usize) {
    let fetched: Vec<SelectOption> = registry_names(count)
        .into_iter()
        .map(SelectOption::from_name)
        .collect();
    let query = "WAREHOUSE 00000 NORTH WING";
    bencher.bench(|| divan::black_box(build_display_list(&fetched, query, Some("facility"))));
}
