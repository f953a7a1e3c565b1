use super::*;

#[test]
fn native_slot_is_empty_and_read_only() {
    let store = LocalStorageTokenStore::new("token");
    assert_eq!(store.key(), "token");
    assert_eq!(store.get(), None);
    assert_eq!(store.set("a.b.c"), Err(StoreError::Unavailable));
    assert_eq!(store.clear(), Err(StoreError::Unavailable));
}
