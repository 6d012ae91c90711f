use dashboard::entities::{Expense, MealPlan, Milestone, Note, ScheduleEvent, Subscription, Task, WorkoutSession};
use dashboard::storage::{DocumentStore, MemoryStore};
use dashboard::{ListFilter, RepoError, Repository};
use serde_json::json;
use std::sync::Arc;

const ALICE: &str = "alice";
const BOB: &str = "bob";

fn store() -> Arc<dyn DocumentStore> {
    Arc::new(MemoryStore::new())
}

#[tokio::test]
async fn test_task_lifecycle() {
    let tasks: Repository<Task> = Repository::new(store());

    let created = tasks
        .create(ALICE, json!({ "text": "Buy milk", "order": 0 }))
        .await
        .unwrap();
    assert!(!created.completed);
    assert_eq!(created.meta.user_id, ALICE);

    let listed = tasks.list(ALICE, &ListFilter::default()).await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let toggled = tasks
        .update(ALICE, &created.meta.id, json!({ "completed": true }))
        .await
        .unwrap()
        .expect("task should exist");
    assert_eq!(toggled.meta.id, created.meta.id);
    assert!(toggled.completed);

    let listed = tasks.list(ALICE, &ListFilter::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].completed);

    assert!(tasks.delete(ALICE, &created.meta.id).await.unwrap());
    assert!(tasks.list(ALICE, &ListFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_records_are_scoped_to_their_user() {
    let notes: Repository<Note> = Repository::new(store());
    let note = notes.create(ALICE, json!({ "content": "secret" })).await.unwrap();

    assert!(notes.list(BOB, &ListFilter::default()).await.unwrap().is_empty());
    assert!(notes.get(BOB, &note.meta.id).await.unwrap().is_none());
    assert!(notes
        .update(BOB, &note.meta.id, json!({ "content": "mine now" }))
        .await
        .unwrap()
        .is_none());
    assert!(!notes.delete(BOB, &note.meta.id).await.unwrap());

    assert_eq!(notes.get(ALICE, &note.meta.id).await.unwrap().unwrap().content, "secret");
}

#[tokio::test]
async fn test_client_identity_fields_are_ignored() {
    let tasks: Repository<Task> = Repository::new(store());
    let created = tasks
        .create(
            ALICE,
            json!({ "text": "x", "id": "chosen-id", "userId": BOB, "createdAt": "2000-01-01T00:00:00Z" }),
        )
        .await
        .unwrap();

    assert_ne!(created.meta.id, "chosen-id");
    assert_eq!(created.meta.user_id, ALICE);
    assert!(created.meta.created_at.timestamp() > 946_684_800);

    let updated = tasks
        .update(ALICE, &created.meta.id, json!({ "userId": BOB, "id": "other" }))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.meta, created.meta);
}

#[tokio::test]
async fn test_update_unknown_id_creates_nothing() {
    let tasks: Repository<Task> = Repository::new(store());
    let result = tasks.update(ALICE, "missing", json!({ "text": "ghost" })).await.unwrap();
    assert!(result.is_none());
    assert!(tasks.list(ALICE, &ListFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_unknown_id_with_invalid_body_is_absent() {
    let tasks: Repository<Task> = Repository::new(store());
    let result = tasks.update(ALICE, "missing", json!({ "order": "first" })).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_non_canonical_dates_and_times_are_rejected() {
    let events: Repository<ScheduleEvent> = Repository::new(store());

    for date in ["+2025-1-05", " 2025-1-05", "2025-1-5"] {
        let err = events
            .create(ALICE, json!({ "title": "x", "date": date }))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(ref e) if e.has_field("date")), "{}", date);
    }

    let err = events
        .create(
            ALICE,
            json!({ "title": "x", "date": "2025-01-05", "startTime": "08:00", "endTime": " 9:00" }),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(ref e) if e.has_field("endTime")));

    let event = events
        .create(
            ALICE,
            json!({ "title": "x", "date": "2025-01-05", "startTime": "08:00", "endTime": "09:00" }),
        )
        .await
        .unwrap();
    let listed = events.list(ALICE, &ListFilter::on_date("2025-01-05")).await.unwrap();
    assert_eq!(listed, vec![event]);

    assert!(events.list(ALICE, &ListFilter::on_date(" 2025-1-05")).await.is_err());
}

#[tokio::test]
async fn test_delete_twice() {
    let tasks: Repository<Task> = Repository::new(store());
    let task = tasks.create(ALICE, json!({ "text": "once" })).await.unwrap();

    assert!(tasks.delete(ALICE, &task.meta.id).await.unwrap());
    assert!(!tasks.delete(ALICE, &task.meta.id).await.unwrap());
}

#[tokio::test]
async fn test_partial_update_keeps_omitted_fields() {
    let subscriptions: Repository<Subscription> = Repository::new(store());
    let sub = subscriptions
        .create(
            ALICE,
            json!({ "name": "Music", "cost": 9.99, "billingCycle": "monthly", "category": "media" }),
        )
        .await
        .unwrap();
    assert!(sub.active);

    let updated = subscriptions
        .update(ALICE, &sub.meta.id, json!({ "cost": 11.99 }))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.cost, 11.99);
    assert_eq!(updated.name, "Music");
    assert_eq!(updated.billing_cycle, "monthly");
    assert_eq!(updated.category.as_deref(), Some("media"));
    assert!(updated.active);
}

#[tokio::test]
async fn test_optional_field_can_be_cleared_with_null() {
    let tasks: Repository<Task> = Repository::new(store());
    let task = tasks
        .create(ALICE, json!({ "text": "call", "dueDate": "2025-03-01" }))
        .await
        .unwrap();

    let updated = tasks
        .update(ALICE, &task.meta.id, json!({ "dueDate": null }))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.due_date, None);
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let workouts: Repository<WorkoutSession> = Repository::new(store());
    let session = workouts
        .create(ALICE, json!({ "name": "Run", "date": "2025-05-01" }))
        .await
        .unwrap();

    assert_eq!(session.duration_minutes, 0);
    assert_eq!(session.calories_burned, 0);
    assert!(!session.completed);
    assert_eq!(session.plan_id, None);
}

#[tokio::test]
async fn test_create_reports_all_field_errors() {
    let expenses: Repository<Expense> = Repository::new(store());
    let err = expenses
        .create(ALICE, json!({ "amount": "ten", "date": "05/01/2025" }))
        .await
        .unwrap_err();

    match err {
        RepoError::Validation(e) => {
            assert!(e.has_field("description"));
            assert!(e.has_field("amount"));
            assert!(e.has_field("date"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(expenses.list(ALICE, &ListFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_update_leaves_record_untouched() {
    let events: Repository<ScheduleEvent> = Repository::new(store());
    let event = events
        .create(
            ALICE,
            json!({ "title": "Standup", "date": "2025-01-10", "startTime": "09:00", "endTime": "09:15" }),
        )
        .await
        .unwrap();

    let err = events
        .update(ALICE, &event.meta.id, json!({ "endTime": "08:00" }))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(ref e) if e.has_field("endTime")));

    let stored = events.get(ALICE, &event.meta.id).await.unwrap().unwrap();
    assert_eq!(stored.end_time.as_deref(), Some("09:15"));
}

#[tokio::test]
async fn test_schedule_filtered_by_date_and_sorted_by_time() {
    let events: Repository<ScheduleEvent> = Repository::new(store());
    for (title, date, start) in [
        ("Lunch", "2025-01-10", Some("12:00")),
        ("Gym", "2025-01-11", Some("07:00")),
        ("Standup", "2025-01-10", Some("09:00")),
        ("Holiday", "2025-01-10", None),
    ] {
        events
            .create(ALICE, json!({ "title": title, "date": date, "startTime": start }))
            .await
            .unwrap();
    }

    let day = events.list(ALICE, &ListFilter::on_date("2025-01-10")).await.unwrap();
    let titles: Vec<_> = day.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Holiday", "Standup", "Lunch"]);
    assert!(day.iter().all(|e| e.date == "2025-01-10"));
}

#[tokio::test]
async fn test_date_range_is_inclusive() {
    let expenses: Repository<Expense> = Repository::new(store());
    for date in ["2025-01-31", "2025-02-01", "2025-02-15", "2025-02-28", "2025-03-01"] {
        expenses
            .create(ALICE, json!({ "description": "coffee", "amount": 3, "date": date }))
            .await
            .unwrap();
    }

    let february = expenses
        .list(ALICE, &ListFilter::between("2025-02-01", "2025-02-28"))
        .await
        .unwrap();
    let dates: Vec<_> = february.iter().map(|e| e.date.as_str()).collect();
    // newest first
    assert_eq!(dates, ["2025-02-28", "2025-02-15", "2025-02-01"]);
}

#[tokio::test]
async fn test_parent_filter() {
    let milestones: Repository<Milestone> = Repository::new(store());
    milestones
        .create(ALICE, json!({ "projectId": "p1", "title": "Design", "dueDate": "2025-04-01" }))
        .await
        .unwrap();
    milestones
        .create(ALICE, json!({ "projectId": "p2", "title": "Other" }))
        .await
        .unwrap();
    milestones
        .create(ALICE, json!({ "projectId": "p1", "title": "Launch" }))
        .await
        .unwrap();
    milestones
        .create(ALICE, json!({ "projectId": "p1", "title": "Kickoff", "dueDate": "2025-03-01" }))
        .await
        .unwrap();

    let p1 = milestones.list(ALICE, &ListFilter::for_parent("p1")).await.unwrap();
    let titles: Vec<_> = p1.iter().map(|m| m.title.as_str()).collect();
    // undated milestones last
    assert_eq!(titles, ["Kickoff", "Design", "Launch"]);
}

#[tokio::test]
async fn test_type_filter_and_meal_order() {
    let meals: Repository<MealPlan> = Repository::new(store());
    for (meal_type, name) in [("dinner", "Pasta"), ("breakfast", "Oats"), ("lunch", "Salad")] {
        meals
            .create(ALICE, json!({ "date": "2025-06-01", "mealType": meal_type, "name": name }))
            .await
            .unwrap();
    }

    let all = meals.list(ALICE, &ListFilter::on_date("2025-06-01")).await.unwrap();
    let names: Vec<_> = all.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Oats", "Salad", "Pasta"]);

    let lunches = meals.list(ALICE, &ListFilter::of_type("lunch")).await.unwrap();
    assert_eq!(lunches.len(), 1);
    assert_eq!(lunches[0].name, "Salad");
}

#[tokio::test]
async fn test_unsupported_filters_are_ignored() {
    let notes: Repository<Note> = Repository::new(store());
    notes.create(ALICE, json!({ "content": "a" })).await.unwrap();

    let listed = notes.list(ALICE, &ListFilter::on_date("2025-01-01")).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_tasks_sorted_by_order() {
    let tasks: Repository<Task> = Repository::new(store());
    for (text, order) in [("third", 2), ("first", 0), ("second", 1), ("also first", 0)] {
        tasks.create(ALICE, json!({ "text": text, "order": order })).await.unwrap();
    }

    let listed = tasks.list(ALICE, &ListFilter::default()).await.unwrap();
    let texts: Vec<_> = listed.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["first", "also first", "second", "third"]);
}

#[tokio::test]
async fn test_clear_removes_only_one_collection() {
    let shared = store();
    let tasks: Repository<Task> = Repository::new(Arc::clone(&shared));
    let notes: Repository<Note> = Repository::new(shared);

    tasks.create(ALICE, json!({ "text": "a" })).await.unwrap();
    tasks.create(ALICE, json!({ "text": "b" })).await.unwrap();
    notes.create(ALICE, json!({ "content": "keep" })).await.unwrap();

    assert_eq!(tasks.clear(ALICE).await.unwrap(), 2);
    assert!(tasks.list(ALICE, &ListFilter::default()).await.unwrap().is_empty());
    assert_eq!(notes.list(ALICE, &ListFilter::default()).await.unwrap().len(), 1);
}
