use std::collections::hash_map::RandomState;

use rustc_hash::FxBuildHasher;
use shared_set::{set, FxSet, Set};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v
}

#[test]
fn test_new_collapses_duplicates() {
    let s = Set::from(["a", "a", "b"]);
    assert_eq!(s.size(), 2);
    assert_eq!(sorted(s.to_vec()), ["a", "b"]);
}

#[test]
fn test_add_collapses_duplicates() {
    init();
    let s = set!["a", "a", "a"];
    s.add(["b", "b", "c", "d"]);
    assert_eq!(sorted(s.to_vec()), ["a", "b", "c", "d"]);
    assert!(!s.insert("a"));
    assert!(s.insert("e"));
    assert_eq!(s.len(), 5);
}

#[test]
fn test_empty_constructors() {
    let s: Set<u32> = set![];
    assert!(s.is_empty());
    assert_eq!(s.size(), 0);
    let s: Set<u32> = Set::default();
    assert!(s.is_empty());
    let s: Set<u32> = Set::with_capacity(64);
    assert!(s.is_empty());
}

#[test]
fn test_contains() {
    let s = set!["b", "b", "c", "d"];
    assert!(s.contains(["b", "c", "d"]));
    assert!(!s.contains(["f", "d", "g"]));
    assert!(s.contains_one("c"));
    assert!(!s.contains_one("a"));
}

#[test]
fn test_contains_nothing_is_true() {
    let none: [&str; 0] = [];
    assert!(set!["a"].contains(none));
    let empty: Set<&str> = Set::new();
    assert!(empty.contains(none));
}

#[test]
fn test_contains_owned_elements_by_borrow() {
    let s: Set<String> = ["x", "y"].into_iter().map(String::from).collect();
    assert!(s.contains(["x", "y"]));
    assert!(s.remove(["x"]));
    assert!(!s.contains_one("x"));
}

#[test]
fn test_remove_reports_change() {
    init();
    let s = set!["a", "a", "a", "b", "b"];
    assert!(s.remove(["a", "a"]));
    assert_eq!(s.to_vec(), ["b"]);
    assert!(!s.remove(["a"]));
    assert!(!s.remove(["z", "y"]));
    assert!(s.remove(["z", "b"]));
    assert!(s.is_empty());
}

#[test]
fn test_remove_then_readd() {
    let s = set![1, 2, 3];
    s.remove(&[2]);
    assert!(!s.contains_one(&2));
    s.add([2]);
    assert!(s.contains(&[1, 2, 3]));
}

#[test]
fn test_clear() {
    init();
    let s = set!["b", "b", "c", "d"];
    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.size(), 0);
    assert_eq!(s.to_string(), "[]");
}

#[test]
fn test_is_empty() {
    assert!(!set!["b", "b", "c", "d"].is_empty());
}

#[test]
fn test_size() {
    assert_eq!(set!["b", "b", "c", "d"].size(), 3);
}

#[test]
fn test_display() {
    assert_eq!(set!["b"].to_string(), "[b]");
    let rendered = set![1, 2].to_string();
    assert!(rendered == "[1, 2]" || rendered == "[2, 1]", "{rendered}");
    assert_eq!(format!("{:?}", set!["b"]), r#"{"b"}"#);
}

#[test]
fn test_iter_yields_each_member_once() {
    let s = set!["a", "a", "b"];
    let iter = s.iter();
    assert_eq!(iter.len(), 2);
    assert_eq!(sorted(iter.collect()), ["a", "b"]);

    let mut seen = Vec::new();
    for elem in &s {
        seen.push(elem);
    }
    assert_eq!(sorted(seen), ["a", "b"]);
}

#[test]
fn test_iter_is_a_snapshot() {
    let s = set![1, 2, 3];
    let mut visited = 0;
    for elem in s.iter() {
        s.remove(&[elem]);
        s.add([elem + 10]);
        visited += 1;
    }
    assert_eq!(visited, 3);
    assert_eq!(sorted(s.to_vec()), [11, 12, 13]);
}

#[test]
fn test_into_iter_consumes() {
    let s = set!["x", "y"];
    assert_eq!(sorted(s.into_iter().collect()), ["x", "y"]);
}

#[test]
fn test_retain() {
    let s: Set<u32> = (0..10).collect();
    s.retain(|n| n % 2 == 0);
    assert_eq!(sorted(s.to_vec()), [0, 2, 4, 6, 8]);
}

#[test]
fn test_extend_and_from_vec() {
    let mut s: Set<i32> = Set::from(vec![1, 1, 2]);
    s.extend([2, 3]);
    assert_eq!(sorted(s.to_vec()), [1, 2, 3]);
}

#[test]
fn test_clone_is_independent() {
    let a = set!["a"];
    let b = a.clone();
    b.add(["b"]);
    assert_eq!(a.size(), 1);
    assert_eq!(b.size(), 2);
    assert_ne!(a, b);
}

#[test]
fn test_fx_set() {
    let a: FxSet<u64> = (0..100).collect();
    let b: FxSet<u64> = (50..150).collect();
    assert_eq!(a.intersect(&b).size(), 50);
    assert_eq!(a.union(&b).size(), 150);
}

#[test]
fn test_custom_hasher_constructors() {
    let fx: FxSet<&str> = Set::with_hasher(FxBuildHasher);
    assert!(fx.is_empty());
    fx.add(["a", "b", "a"]);
    assert_eq!(sorted(fx.to_vec()), ["a", "b"]);

    let sized: FxSet<u32> = Set::with_capacity_and_hasher(32, FxBuildHasher::default());
    sized.add(0..32);
    assert_eq!(sized.size(), 32);
    assert!(fx.union(&FxSet::with_hasher(FxBuildHasher)).equals(&fx));

    let std_hashed = Set::with_capacity_and_hasher(4, RandomState::new());
    std_hashed.add([1, 2]);
    assert_eq!(std_hashed, Set::from([2, 1]));
}

#[cfg(feature = "rand")]
#[test]
fn test_choose() {
    let mut rng = rand::thread_rng();
    let empty: Set<u8> = Set::new();
    assert_eq!(empty.choose(&mut rng), None);

    let s = set![1, 2, 3];
    let seen = Set::new();
    for _ in 0..1000 {
        let elem = s.choose(&mut rng).expect("non-empty set");
        assert!(s.contains_one(&elem));
        seen.insert(elem);
    }
    assert_eq!(seen, s);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let s = set![3, 1, 2];
    let json = serde_json::to_string(&s).unwrap();
    let back: Set<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);

    let dup: Set<i32> = serde_json::from_str("[1, 1, 2]").unwrap();
    assert_eq!(sorted(dup.to_vec()), [1, 2]);
}
