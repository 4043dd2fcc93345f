//! Tests for domain models and query types.

use crate::db::{PageRequest, Project, ProjectChanges, ProjectQuery, SortField, SortOrder};

#[test]
fn sort_order_parses_known_values() {
    assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
    assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
}

#[test]
fn sort_order_rejects_unknown_values() {
    assert_eq!(
        "DESC".parse::<SortOrder>(),
        Err("Direction must be asc or desc".to_string())
    );
    assert!("sideways".parse::<SortOrder>().is_err());
}

#[test]
fn sort_order_defaults_to_ascending() {
    assert_eq!(SortOrder::default(), SortOrder::Asc);
    assert_eq!(SortOrder::Desc.to_string(), "desc");
}

#[test]
fn sort_field_round_trips_through_display() {
    for field in [SortField::Id, SortField::Title, SortField::Owner] {
        assert_eq!(field.to_string().parse::<SortField>(), Ok(field));
    }
}

#[test]
fn sort_field_rejects_unknown_values() {
    assert_eq!(
        "created_at".parse::<SortField>(),
        Err("Order must be id, title or owner".to_string())
    );
}

#[test]
fn page_request_start_is_zero_for_first_page() {
    assert_eq!(PageRequest::new(1, 10).start(), 0);
    assert_eq!(PageRequest::new(3, 10).start(), 20);
}

#[test]
fn page_request_start_saturates() {
    assert_eq!(PageRequest::new(0, 10).start(), 0);
    assert_eq!(PageRequest::new(usize::MAX, usize::MAX).start(), usize::MAX);
}

#[test]
fn project_query_default_is_unfiltered() {
    let query = ProjectQuery::default();
    assert!(query.title.is_none());
    assert!(query.owner.is_none());
    assert!(query.sort_by.is_none());
    assert!(query.page.is_none());
}

#[test]
fn project_serializes_with_plain_field_names() {
    let project = Project {
        id: 3,
        title: "Project 3".to_string(),
        owner: "Owner 3".to_string(),
    };
    let value = serde_json::to_value(&project).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "id": 3, "title": "Project 3", "owner": "Owner 3" })
    );
}

#[test]
fn project_changes_merge_only_present_fields() {
    let mut project = Project {
        id: 4,
        title: "Project 4".to_string(),
        owner: "Owner 4".to_string(),
    };

    ProjectChanges {
        title: Some("Renamed".to_string()),
        owner: None,
    }
    .merge_into(&mut project);
    assert_eq!(project.id, 4);
    assert_eq!(project.title, "Renamed");
    assert_eq!(project.owner, "Owner 4");

    ProjectChanges::default().merge_into(&mut project);
    assert_eq!(project.title, "Renamed");
}
