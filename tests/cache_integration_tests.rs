//! Integration Tests for the public cache API
//!
//! Walks the documented scenarios through the crate's public surface only.

use std::sync::Mutex;

use extrema_cache::cache::{positions_eq, positions_ne, ReverseOrder};
use extrema_cache::{print, BoundedOrderedCache, CacheError, Config, ExtremaPolicy};

// == Helper Functions ==

type Cache3 = BoundedOrderedCache<i32, 3>;

fn cache_with(values: &[i32]) -> Cache3 {
    let mut cache = Cache3::new();
    for &value in values {
        cache.insert(value);
    }
    cache
}

fn contents(cache: &Cache3) -> Vec<i32> {
    cache.iter().copied().collect()
}

// == Documented Scenarios ==

#[test]
fn test_scenario_fill_to_capacity() {
    let cache = cache_with(&[5, 3, 8]);

    assert_eq!(cache.size(), 3);
    assert_eq!(contents(&cache), vec![8, 3, 5]);
    assert_eq!(cache.get_high(), 8);
    assert_eq!(cache.get_low(), 3);
}

#[test]
fn test_scenario_overflow_evicts_oldest() {
    let cache = cache_with(&[5, 3, 8, 1]);

    assert_eq!(cache.size(), 3);
    assert_eq!(contents(&cache), vec![1, 8, 3]);
}

#[test]
fn test_scenario_pop_empty_fails() {
    let mut cache = Cache3::new();

    let result = cache.pop();
    assert!(matches!(result, Err(CacheError::EmptyContainer)));
    assert_eq!(cache.size(), 0);
}

#[test]
fn test_scenario_single_value_extremes() {
    let cache = cache_with(&[10]);

    assert_eq!(cache.get_high(), 10);
    assert_eq!(cache.get_low(), 10);
}

#[test]
fn test_scenario_extremes_outlive_pop() {
    let mut cache = cache_with(&[7]);
    cache.pop().unwrap();

    assert_eq!(cache.size(), 0);
    assert_eq!(cache.get_low(), 7);
}

// == Capacity and Order ==

#[test]
fn test_size_never_exceeds_capacity() {
    let mut cache = Cache3::new();
    for i in 0..10 {
        cache.insert(i);
        assert_eq!(cache.size(), (i as usize + 1).min(3));
    }
    assert_eq!(contents(&cache), vec![9, 8, 7]);
}

#[test]
fn test_pop_after_drain_fails() {
    let mut cache = cache_with(&[1, 2]);
    assert_eq!(cache.pop(), Ok(1));
    assert_eq!(cache.pop(), Ok(2));
    assert_eq!(cache.pop(), Err(CacheError::EmptyContainer));
}

#[test]
fn test_for_loop_over_reference() {
    let cache = cache_with(&[1, 2, 3]);
    let mut seen = Vec::new();
    for value in &cache {
        seen.push(*value);
    }
    assert_eq!(seen, vec![3, 2, 1]);
}

// == Extrema Policies ==

#[test]
fn test_recompute_policy_from_config() {
    let config = Config::from_lookup(|key| match key {
        "EXTREMA_POLICY" => Some("recompute".to_string()),
        _ => None,
    });
    let mut cache = Cache3::from_config(&config);
    for value in [9, 1, 5, 6] {
        cache.insert(value);
    }

    // 9 was evicted and is no longer reported
    assert_eq!(cache.get_high(), 6);
    assert_eq!(cache.get_low(), 1);

    cache.pop().unwrap();
    assert_eq!(cache.get_low(), 5);
}

#[test]
fn test_historical_policy_reports_evicted_high() {
    let cache = cache_with(&[9, 1, 5, 6]);
    assert_eq!(cache.get_high(), 9);
    assert_eq!(cache.policy(), ExtremaPolicy::Historical);
}

// == Custom Ordering ==

#[test]
fn test_custom_ordering_on_strings() {
    let by_len = |a: &String, b: &String| a.len() < b.len();
    let mut cache: BoundedOrderedCache<String, 4, _> = BoundedOrderedCache::with_order(by_len);
    cache.emplace("kiwi");
    cache.emplace("fig");
    cache.emplace("banana");

    assert_eq!(cache.get_high(), "banana");
    assert_eq!(cache.get_low(), "fig");
}

#[test]
fn test_reverse_ordering() {
    let mut cache: BoundedOrderedCache<i32, 3, ReverseOrder> = BoundedOrderedCache::new();
    cache.insert(2);
    cache.insert(4);
    cache.insert(1);

    assert_eq!(cache.get_high(), 1);
    assert_eq!(cache.get_low(), 4);
}

// == Positions ==

#[test]
fn test_positions_compare_by_value() {
    let cache = cache_with(&[3, 1, 3]);
    let front = cache.begin();
    let mut middle = front;
    middle.advance();
    let mut back = middle;
    back.advance();

    assert!(positions_eq(&front, &back));
    assert!(positions_ne(&front, &middle));
    assert_eq!(front.get(), Some(&3));

    back.advance();
    assert!(back.is_end());
    assert!(positions_eq(&back, &cache.end()));
}

// == Printing ==

#[test]
fn test_print_to_sink() {
    let cache = cache_with(&[5, 3, 8, 1]);
    let mut sink = Vec::new();
    print(&cache, &mut sink).unwrap();

    assert_eq!(String::from_utf8(sink).unwrap(), "1 8 3");
    assert_eq!(cache.to_string(), "1 8 3");
}

// == External Synchronization ==

#[test]
fn test_shared_through_mutex() {
    let shared = Mutex::new(Cache3::new());

    std::thread::scope(|scope| {
        for base in [0, 100] {
            let shared = &shared;
            scope.spawn(move || {
                for i in 0..5 {
                    shared.lock().unwrap().insert(base + i);
                }
            });
        }
    });

    let cache = shared.into_inner().unwrap();
    assert_eq!(cache.size(), 3);
    assert_eq!(cache.stats().insertions, 10);
    assert_eq!(cache.stats().evictions, 7);
}
