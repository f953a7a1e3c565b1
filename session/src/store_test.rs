use std::sync::Mutex;

use super::*;

#[test]
fn set_get_clear_round_through_the_slot() {
    let store = MemoryTokenStore::new("token");
    assert_eq!(store.get(), None);
    store.set("abc").unwrap();
    assert_eq!(store.get().as_deref(), Some("abc"));
    store.clear().unwrap();
    assert_eq!(store.get(), None);
}

#[test]
fn tabs_share_the_same_slot() {
    let storage = MemoryStorage::new();
    let a = storage.tab("token");
    let b = storage.tab("token");
    a.set("t1").unwrap();
    assert_eq!(b.get().as_deref(), Some("t1"));
    b.clear().unwrap();
    assert_eq!(a.get(), None);
}

#[test]
fn writes_notify_other_tabs_only() {
    let storage = MemoryStorage::new();
    let a = storage.tab("token");
    let b = storage.tab("token");
    let seen_a = Arc::new(Mutex::new(Vec::<Option<String>>::new()));
    let seen_b = Arc::new(Mutex::new(Vec::<Option<String>>::new()));

    let sink = Arc::clone(&seen_a);
    a.watch(move |key| sink.lock().unwrap().push(key.map(str::to_owned)));
    let sink = Arc::clone(&seen_b);
    b.watch(move |key| sink.lock().unwrap().push(key.map(str::to_owned)));

    a.set("t1").unwrap();
    assert!(seen_a.lock().unwrap().is_empty());
    assert_eq!(*seen_b.lock().unwrap(), vec![Some("token".to_owned())]);
}

#[test]
fn unchanged_writes_do_not_notify() {
    let storage = MemoryStorage::new();
    let a = storage.tab("token");
    let b = storage.tab("token");
    let count = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&count);
    b.watch(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    a.set("t1").unwrap();
    a.set("t1").unwrap();
    a.clear().unwrap();
    a.clear().unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn slots_are_isolated_by_key() {
    let storage = MemoryStorage::new();
    let token = storage.tab("token");
    let other = storage.tab("other");
    token.set("t1").unwrap();
    assert_eq!(other.get(), None);
    assert_eq!(storage.get_item("token").as_deref(), Some("t1"));
}
