//! # Collection Mutation
//!
//! Helpers for resources that are ordered sequences of identified items (saved
//! restaurants, saved menus). Collections are populated wholesale by a fetch; the only
//! local edit is removal by id, performed after the remote delete succeeded.

use crate::adapter::{ReadAdapter, RemoveAdapter};
use crate::error::AdapterError;
use crate::hook::{Outcome, ResourceHook};
use std::fmt::Debug;

/// An item with a unique identifier inside its collection.
pub trait Identified {
    type Id: PartialEq + Clone + Debug + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
}

/// Removes every item whose id equals `id`, keeping the order of the rest.
///
/// Returns the number of items removed.
pub fn remove_by_id<I: Identified>(items: &mut Vec<I>, id: &I::Id) -> usize {
    let before = items.len();
    items.retain(|item| item.id() != id);
    before - items.len()
}

/// Issues both reads concurrently and succeeds only if both do.
///
/// A partial result is reported exactly like a total failure: the first error wins.
pub async fn fetch_joined<A, B, L, R>(left: &L, right: &R) -> Result<(A, B), AdapterError>
where
    L: ReadAdapter<A> + ?Sized,
    R: ReadAdapter<B> + ?Sized,
{
    tokio::try_join!(left.get(), right.get())
}

/// Deletes `id` remotely, then filters it out of the list `select` picks from the
/// loaded value.
///
/// On failure `failure` is recorded and the list is left as it was. Skipped when
/// nothing has been loaded yet.
pub async fn remove_item<T, I, R, S>(
    hook: &ResourceHook<T>,
    action: &'static str,
    failure: &str,
    remover: &R,
    id: I::Id,
    select: S,
) -> Outcome
where
    T: Clone + Send + Sync + 'static,
    I: Identified,
    R: RemoveAdapter<I::Id> + ?Sized,
    S: FnOnce(&mut T) -> &mut Vec<I>,
{
    let local_id = id.clone();
    hook.mutate_in_place(action, failure, remover.remove(id), move |data, _| {
        remove_by_id(select(data), &local_id);
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        label: &'static str,
    }

    impl Identified for Item {
        type Id = &'static str;

        fn id(&self) -> &&'static str {
            &self.id
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "a", label: "first" },
            Item { id: "b", label: "second" },
            Item { id: "c", label: "third" },
        ]
    }

    #[test]
    fn test_remove_by_id_keeps_order() {
        let mut list = items();
        assert_eq!(remove_by_id(&mut list, &"b"), 1);
        let ids: Vec<_> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut list = items();
        assert_eq!(remove_by_id(&mut list, &"zzz"), 0);
        assert_eq!(list, items());
    }
}
