//! Tests for InMemoryDatabase construction.

use crate::db::memory::seed_projects;
use crate::db::{Database, InMemoryDatabase, NewProject, ProjectQuery, SEED_PROJECT_COUNT};

#[test]
fn seed_projects_are_numbered_from_one() {
    let projects = seed_projects(3);
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].id, 1);
    assert_eq!(projects[0].title, "Project 1");
    assert_eq!(projects[0].owner, "Owner 1");
    assert_eq!(projects[2].id, 3);
    assert_eq!(projects[2].title, "Project 3");
}

#[test]
fn seeded_database_holds_thirty_projects() {
    let db = InMemoryDatabase::seeded(SEED_PROJECT_COUNT);
    let projects = db.projects().list(&ProjectQuery::default()).unwrap();

    assert_eq!(projects.len(), 30);
    let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<u64>>());
}

#[test]
fn new_database_is_empty_and_starts_ids_at_one() {
    let db = InMemoryDatabase::new();
    assert!(db.projects().list(&ProjectQuery::default()).unwrap().is_empty());

    let created = db
        .projects()
        .create(NewProject {
            title: "First".to_string(),
            owner: "Someone".to_string(),
        })
        .unwrap();
    assert_eq!(created.id, 1);
}

#[test]
fn seeded_database_continues_ids_after_seed() {
    let db = InMemoryDatabase::seeded(SEED_PROJECT_COUNT);
    let created = db
        .projects()
        .create(NewProject {
            title: "X".to_string(),
            owner: "Y".to_string(),
        })
        .unwrap();
    assert_eq!(created.id, 31);
}
