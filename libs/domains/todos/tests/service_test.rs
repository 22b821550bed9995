//! Service tests against the real in-memory repository.
//!
//! These exercise the business rules end to end through the service and
//! store layers, including the concurrency properties of id assignment and
//! racing updates.

use domain_todos::{CreateTodo, InMemoryTodoRepository, TodoError, TodoService, UpdateTodo};
use std::collections::HashSet;

fn new_service() -> TodoService<InMemoryTodoRepository> {
    TodoService::new(InMemoryTodoRepository::new())
}

#[tokio::test]
async fn test_create_get_round_trip() {
    let service = new_service();

    let created = service
        .create(CreateTodo {
            title: "Buy milk".to_string(),
        })
        .await
        .unwrap();

    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_trims_title() {
    let service = new_service();

    let created = service
        .create(CreateTodo {
            title: "  Buy milk\t".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);
}

#[tokio::test]
async fn test_create_rejects_blank_titles_without_consuming_ids() {
    let service = new_service();

    assert_eq!(
        service
            .create(CreateTodo {
                title: String::new()
            })
            .await,
        Err(TodoError::TitleRequired)
    );
    assert_eq!(
        service
            .create(CreateTodo {
                title: "   ".to_string()
            })
            .await,
        Err(TodoError::TitleRequired)
    );

    // the next successful create still gets the first id
    let created = service
        .create(CreateTodo {
            title: "Buy milk".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn test_update_preserves_title_on_blank_input() {
    let service = new_service();
    let created = service
        .create(CreateTodo {
            title: "Buy milk".to_string(),
        })
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateTodo {
                title: "   ".to_string(),
                completed: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Buy milk");
    assert!(updated.completed);
}

#[tokio::test]
async fn test_update_replaces_title_on_non_blank_input() {
    let service = new_service();
    let created = service
        .create(CreateTodo {
            title: "Buy milk".to_string(),
        })
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateTodo {
                title: "Buy bread".to_string(),
                completed: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Buy bread");
    assert!(!updated.completed);

    // the merged record was written back, not just returned
    assert_eq!(service.get(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_not_found_propagation() {
    let service = new_service();

    assert_eq!(service.get(99).await, Err(TodoError::NotFound(99)));
    assert_eq!(
        service
            .update(
                99,
                UpdateTodo {
                    title: "x".to_string(),
                    completed: true
                }
            )
            .await,
        Err(TodoError::NotFound(99))
    );
    assert_eq!(service.delete(99).await, Err(TodoError::NotFound(99)));

    // no state was created as a side effect
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_then_refetch() {
    let service = new_service();
    let created = service
        .create(CreateTodo {
            title: "Buy milk".to_string(),
        })
        .await
        .unwrap();

    service.delete(created.id).await.unwrap();

    assert_eq!(
        service.get(created.id).await,
        Err(TodoError::NotFound(created.id))
    );
    assert!(service.list().await.unwrap().is_empty());
    assert_eq!(
        service.delete(created.id).await,
        Err(TodoError::NotFound(created.id))
    );

    // the deleted id is never reassigned
    let next = service
        .create(CreateTodo {
            title: "Buy bread".to_string(),
        })
        .await
        .unwrap();
    assert_ne!(next.id, created.id);
}

#[tokio::test]
async fn test_list_contains_exactly_the_live_todos() {
    let service = new_service();

    let a = service
        .create(CreateTodo {
            title: "a".to_string(),
        })
        .await
        .unwrap();
    let b = service
        .create(CreateTodo {
            title: "b".to_string(),
        })
        .await
        .unwrap();
    let c = service
        .create(CreateTodo {
            title: "c".to_string(),
        })
        .await
        .unwrap();

    service.delete(b.id).await.unwrap();

    let mut listed = service.list().await.unwrap();
    listed.sort_by_key(|t| t.id);
    assert_eq!(listed, vec![a, c]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_assign_distinct_sequential_ids() {
    const N: usize = 100;

    let service = new_service();

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create(CreateTodo {
                        title: format!("todo-{}", i),
                    })
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()));
    }

    let expected: HashSet<i64> = (1..=N as i64).collect();
    assert_eq!(ids, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_updates_never_mix_payloads() {
    let service = new_service();
    let created = service
        .create(CreateTodo {
            title: "base".to_string(),
        })
        .await
        .unwrap();

    let first = UpdateTodo {
        title: "first".to_string(),
        completed: true,
    };
    let second = UpdateTodo {
        title: "second".to_string(),
        completed: false,
    };

    let s1 = service.clone();
    let s2 = service.clone();
    let id = created.id;
    let (r1, r2) = tokio::join!(
        tokio::spawn(async move { s1.update(id, first).await }),
        tokio::spawn(async move { s2.update(id, second).await }),
    );
    r1.unwrap().unwrap();
    r2.unwrap().unwrap();

    // the final record is one of the two complete writes, never a blend
    let result = service.get(id).await.unwrap();
    let is_first = result.title == "first" && result.completed;
    let is_second = result.title == "second" && !result.completed;
    assert!(is_first || is_second, "mixed record: {:?}", result);
}
