use resource_hooks::mock::{create_mock_client, expect_get, expect_remove, MockRemote};
use resource_hooks::{
    fetch_joined, remove_item, AdapterError, Identified, MountScope, Outcome, RemoteActor,
    RemoteEntity, ResourceHook, StalePolicy,
};
use std::convert::Infallible;
use std::time::Duration;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Bookmark {
    id: String,
    title: String,
}

impl Identified for Bookmark {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Bookmarks {
    items: Vec<Bookmark>,
}

#[derive(Debug, thiserror::Error)]
#[error("Bookmark not found: {0}")]
struct MissingBookmark(String);

impl RemoteEntity for Bookmarks {
    type Patch = Infallible;
    type ItemId = String;
    type Action = Infallible;
    type Error = MissingBookmark;

    fn apply_patch(&mut self, patch: Infallible) -> Result<(), MissingBookmark> {
        match patch {}
    }

    fn remove_item(&mut self, id: &String) -> Result<(), MissingBookmark> {
        if resource_hooks::remove_by_id(&mut self.items, id) == 0 {
            return Err(MissingBookmark(id.clone()));
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), MissingBookmark> {
        match action {}
    }
}

/// Read adapter exposing the inner list of a `Bookmarks` backend.
struct BookmarkList(resource_hooks::RemoteClient<Bookmarks>);

#[async_trait::async_trait]
impl resource_hooks::ReadAdapter<Vec<Bookmark>> for BookmarkList {
    async fn get(&self) -> Result<Vec<Bookmark>, AdapterError> {
        Ok(self.0.get().await?.items)
    }
}

fn bookmarks() -> Bookmarks {
    Bookmarks {
        items: vec![
            Bookmark {
                id: "b1".into(),
                title: "Oat bowls".into(),
            },
            Bookmark {
                id: "b2".into(),
                title: "Lentil soup".into(),
            },
        ],
    }
}

// --- Tests ---

const REMOVE_FAILED: &str = "Failed to remove bookmark";

#[tokio::test]
async fn test_collection_remove_against_real_remote() {
    let (actor, client) = RemoteActor::new(bookmarks(), 8);
    tokio::spawn(actor.run());

    let scope = MountScope::new("bookmarks-screen");
    let list = ResourceHook::builder("bookmarks", BookmarkList(client.clone())).mount(&scope);
    list.settled().await;
    assert_eq!(list.data().unwrap().len(), 2);

    let outcome = remove_item(
        &list,
        "remove",
        REMOVE_FAILED,
        &client,
        "b1".to_string(),
        |items| items,
    )
    .await;
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(list.data(), Some(vec![bookmarks().items[1].clone()]));

    // A second removal of the same id is rejected by the backend.
    let outcome = remove_item(
        &list,
        "remove",
        REMOVE_FAILED,
        &client,
        "b1".to_string(),
        |items| items,
    )
    .await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(list.data().unwrap().len(), 1);
    assert_eq!(list.snapshot().error.as_deref(), Some(REMOVE_FAILED));
}

#[tokio::test]
async fn test_collection_remove_failure_leaves_items() {
    let (actor, client) = RemoteActor::new(bookmarks(), 8);
    tokio::spawn(actor.run());

    let scope = MountScope::new("bookmarks-screen");
    let list = ResourceHook::builder("bookmarks", BookmarkList(client.clone())).mount(&scope);
    list.settled().await;

    client.fail_next("connection reset").await.unwrap();
    let outcome = remove_item(
        &list,
        "remove",
        REMOVE_FAILED,
        &client,
        "b2".to_string(),
        |items| items,
    )
    .await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(list.data(), Some(bookmarks().items));
}

#[tokio::test]
async fn test_armed_fault_fails_one_delayed_request() {
    let (actor, client) = RemoteActor::new(bookmarks(), 8);
    tokio::spawn(actor.with_latency(Duration::from_millis(10)).run());

    client.fail_next("gateway timeout").await.unwrap();
    assert!(matches!(
        client.remove("b1".to_string()).await,
        Err(AdapterError::Remote(reason)) if reason == "gateway timeout"
    ));
    assert_eq!(client.get().await.unwrap(), bookmarks());

    client.remove("b1".to_string()).await.unwrap();
    assert_eq!(client.get().await.unwrap().items.len(), 1);
}

#[tokio::test]
async fn test_collection_remove_before_load_is_skipped() {
    let (client, mut receiver) = create_mock_client::<Bookmarks>(8);
    let scope = MountScope::new("bookmarks-screen");
    let list = ResourceHook::builder("bookmarks", BookmarkList(client.clone())).mount(&scope);
    let load = expect_get(&mut receiver).await.unwrap();

    let outcome = remove_item(
        &list,
        "remove",
        REMOVE_FAILED,
        &client,
        "b1".to_string(),
        |items| items,
    )
    .await;
    assert_eq!(outcome, Outcome::Skipped);
    assert!(receiver.try_recv().is_err());

    load.send(Ok(bookmarks())).unwrap();
    let state = list.settled().await;
    assert_eq!(state.data, Some(bookmarks().items));
    assert!(!state.is_busy);
}

#[tokio::test]
async fn test_refetch_twice_is_stable() {
    let (actor, client) = RemoteActor::new(bookmarks(), 8);
    tokio::spawn(actor.run());

    let scope = MountScope::new("bookmarks-screen");
    let hook = ResourceHook::builder("bookmarks", client).mount(&scope);
    hook.settled().await;

    hook.refetch().await;
    let first = hook.data();
    hook.refetch().await;
    assert_eq!(hook.data(), first);
    assert_eq!(first, Some(bookmarks()));
}

#[tokio::test]
async fn test_last_settled_wins_preserves_race() {
    let (client, mut receiver) = create_mock_client::<Bookmarks>(8);
    let scope = MountScope::new("race");
    let hook = ResourceHook::builder("bookmarks", client).mount(&scope);

    // Mount issued fetch #1; issue fetch #2 while #1 is still in flight.
    let first = expect_get(&mut receiver).await.unwrap();
    let refetching = hook.clone();
    let second_call = tokio::spawn(async move { refetching.refetch().await });
    let second = expect_get(&mut receiver).await.unwrap();

    let newer = Bookmarks { items: vec![] };
    second.send(Ok(newer.clone())).unwrap();
    assert_eq!(second_call.await.unwrap(), Outcome::Applied);

    // The older response settles last and overwrites the newer one.
    let mut rx = hook.subscribe();
    first.send(Ok(bookmarks())).unwrap();
    let overwritten = tokio::time::timeout(
        std::time::Duration::from_secs(1),
        rx.wait_for(|s| s.data == Some(bookmarks())),
    )
    .await;
    assert!(overwritten.is_ok(), "older response should overwrite newer data");
}

#[tokio::test]
async fn test_latest_issued_wins_discards_stale_response() {
    let (client, mut receiver) = create_mock_client::<Bookmarks>(8);
    let scope = MountScope::new("race");
    let hook = ResourceHook::builder("bookmarks", client)
        .policy(StalePolicy::LatestIssuedWins)
        .mount(&scope);

    let first = expect_get(&mut receiver).await.unwrap();
    let refetching = hook.clone();
    let second_call = tokio::spawn(async move { refetching.refetch().await });
    let second = expect_get(&mut receiver).await.unwrap();

    // Old response arrives first: discarded, loading still set for the newer call.
    first.send(Ok(bookmarks())).unwrap();
    tokio::task::yield_now().await;
    assert!(hook.snapshot().is_loading);

    let newer = Bookmarks { items: vec![] };
    second.send(Ok(newer.clone())).unwrap();
    assert_eq!(second_call.await.unwrap(), Outcome::Applied);

    let state = hook.settled().await;
    assert_eq!(state.data, Some(newer));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_latest_issued_wins_keeps_load_when_write_overlaps() {
    let (client, mut receiver) = create_mock_client::<Bookmarks>(8);
    let scope = MountScope::new("overlap");
    let hook = ResourceHook::builder("bookmarks", client.clone())
        .policy(StalePolicy::LatestIssuedWins)
        .mount(&scope);
    let load = expect_get(&mut receiver).await.unwrap();

    // A write issued while the mount fetch is still in flight.
    let writing = hook.clone();
    let write_call = tokio::spawn(async move {
        writing
            .mutate("clear", "Failed to clear bookmarks", async move {
                client
                    .remove("b1".to_string())
                    .await
                    .map(|()| Bookmarks { items: vec![] })
            })
            .await
    });
    let (_, removed) = expect_remove(&mut receiver).await.unwrap();

    let mut rx = hook.subscribe();
    load.send(Ok(bookmarks())).unwrap();
    let loaded = tokio::time::timeout(
        std::time::Duration::from_secs(1),
        rx.wait_for(|s| !s.is_loading),
    )
    .await
    .map(|r| r.is_ok());
    assert_eq!(loaded, Ok(true));
    assert_eq!(hook.data(), Some(bookmarks()));
    assert!(hook.snapshot().is_busy);

    removed.send(Ok(())).unwrap();
    assert_eq!(write_call.await.unwrap(), Outcome::Applied);

    let state = hook.settled().await;
    assert_eq!(state.data, Some(Bookmarks { items: vec![] }));
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_completion_after_unmount_is_discarded() {
    let (client, mut receiver) = create_mock_client::<Bookmarks>(8);
    let scope = MountScope::new("leaving");
    let hook = ResourceHook::builder("bookmarks", client.clone()).mount(&scope);
    let pending = expect_get(&mut receiver).await.unwrap();

    let removing = hook.clone();
    let remove_call = tokio::spawn(async move {
        removing
            .mutate(
                "remove",
                REMOVE_FAILED,
                async move {
                    client
                        .remove("b1".to_string())
                        .await
                        .map(|()| Bookmarks { items: vec![] })
                },
            )
            .await
    });
    let (id, remove_responder) = expect_remove(&mut receiver).await.unwrap();
    assert_eq!(id, "b1");

    let before = hook.snapshot();
    scope.unmount();

    pending.send(Ok(bookmarks())).unwrap();
    remove_responder
        .send(Err(AdapterError::Remote("late".into())))
        .unwrap();
    assert_eq!(remove_call.await.unwrap(), Outcome::Discarded);

    tokio::task::yield_now().await;
    assert_eq!(hook.snapshot(), before);
}

#[tokio::test]
async fn test_fetch_joined_fails_when_either_side_fails() {
    let mut left = MockRemote::<Bookmarks>::new();
    let mut right = MockRemote::<Bookmarks>::new();
    left.expect_get().return_ok(bookmarks());
    right
        .expect_get()
        .return_err(AdapterError::Remote("timeout".into()));

    let (l, r) = (left.client(), right.client());
    let result: Result<(Bookmarks, Bookmarks), _> = fetch_joined(&l, &r).await;
    assert_eq!(result, Err(AdapterError::Remote("timeout".into())));

    left.verify();
    right.verify();
}
