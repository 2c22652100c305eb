//! core/toast/store.rs
//! Ordered collection of live toasts.
//!
//! - push appends (insertion order is display order)
//! - remove by id is idempotent: an absent id is a no-op

use super::types::{Toast, ToastId};

#[derive(Debug, Default)]
pub struct ToastStore {
    live: Vec<Toast>,
}

impl ToastStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast. Ignores a toast whose id is already live.
    pub fn push(&mut self, toast: Toast) -> bool {
        if self.contains(toast.id()) {
            return false;
        }
        self.live.push(toast);
        true
    }

    /// Removes the toast with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
        let pos = self.live.iter().position(|t| t.id() == id)?;
        Some(self.live.remove(pos))
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.live.iter().any(|t| t.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Empties the store, returning what was live.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::toast::types::ToastKind;

    fn toast(title: &str) -> Toast {
        Toast::new(ToastKind::Info, title)
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut store = ToastStore::new();
        for title in ["first", "second", "third"] {
            store.push(toast(title));
        }

        let titles: Vec<&str> = store.iter().map(Toast::title).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn remove_middle_preserves_order_of_rest() {
        let mut store = ToastStore::new();
        let a = toast("a");
        let b = toast("b");
        let c = toast("c");
        let b_id = b.id();
        store.push(a);
        store.push(b);
        store.push(c);

        assert!(store.remove(b_id).is_some());
        let titles: Vec<&str> = store.iter().map(Toast::title).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn removing_twice_is_a_no_op() {
        let mut store = ToastStore::new();
        let t = toast("once");
        let id = t.id();
        store.push(t);

        assert!(store.remove(id).is_some());
        assert!(store.remove(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_id_is_not_inserted_twice() {
        let mut store = ToastStore::new();
        let t = toast("dup");
        assert!(store.push(t.clone()));
        assert!(!store.push(t));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn drain_empties_store() {
        let mut store = ToastStore::new();
        store.push(toast("x"));
        store.push(toast("y"));

        assert_eq!(store.drain().len(), 2);
        assert!(store.is_empty());
    }
}
