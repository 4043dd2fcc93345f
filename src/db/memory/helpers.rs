//! Filter, sort and page helpers for the in-memory project list.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use crate::db::{PageRequest, Project, ProjectQuery, SortField, SortOrder};

thread_local! {
    // Collator data is compiled in; construction only fails on a broken build.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("en").into(), CollatorOptions::new()).ok();
}

/// Compare two strings with the CLDR collation for English.
///
/// Accents and case are secondary and tertiary differences, so `"Élan"`
/// sorts before `"Zeta"` and `"a"` before `"A"`. Strings the collator
/// considers equal fall back to code point order to keep the order total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

/// Check a project against the title and owner substring filters.
pub fn matches_filters(project: &Project, query: &ProjectQuery) -> bool {
    let title_ok = query
        .title
        .as_deref()
        .is_none_or(|title| project.title.contains(title));
    let owner_ok = query
        .owner
        .as_deref()
        .is_none_or(|owner| project.owner.contains(owner));

    title_ok && owner_ok
}

/// True when the query sorts the whole, unfiltered collection.
///
/// Such a sort becomes the stored collection order.
pub fn sorts_collection(query: &ProjectQuery) -> bool {
    query.sort_by.is_some() && query.title.is_none() && query.owner.is_none()
}

/// Stable sort by the given field and order.
pub fn sort_projects(projects: &mut [Project], field: SortField, order: SortOrder) {
    projects.sort_by(|a, b| {
        let ordering = match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => locale_cmp(&a.title, &b.title),
            SortField::Owner => locale_cmp(&a.owner, &b.owner),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Sort in place if the query asks for it.
pub fn apply_sort(projects: &mut [Project], query: &ProjectQuery) {
    if let Some(field) = query.sort_by {
        sort_projects(projects, field, query.sort_order.unwrap_or_default());
    }
}

/// Cut `[start, start + page_size)` out of the list, clamped to its length.
pub fn paginate(projects: Vec<Project>, page: &PageRequest) -> Vec<Project> {
    if page.page == 0 {
        return Vec::new();
    }

    projects
        .into_iter()
        .skip(page.start())
        .take(page.page_size)
        .collect()
}

/// Page the list if the query asks for it.
pub fn apply_page(projects: Vec<Project>, query: &ProjectQuery) -> Vec<Project> {
    match &query.page {
        Some(page) => paginate(projects, page),
        None => projects,
    }
}

/// Run the full list pipeline on a copy: filter, sort, then page.
pub fn apply_query<'a, I>(projects: I, query: &ProjectQuery) -> Vec<Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut result: Vec<Project> = projects
        .into_iter()
        .filter(|p| matches_filters(p, query))
        .cloned()
        .collect();

    apply_sort(&mut result, query);
    apply_page(result, query)
}
