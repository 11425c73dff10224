use super::*;
use std::collections::HashSet;

#[test]
fn catalog_has_six_projects() {
    assert_eq!(PROJECTS.len(), 6);
}

#[test]
fn catalog_titles_and_ids_are_unique() {
    let titles = PROJECTS.iter().map(|p| p.title).collect::<HashSet<_>>();
    let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
    assert_eq!(titles.len(), PROJECTS.len());
    assert_eq!(ids.len(), PROJECTS.len());
}

#[test]
fn find_by_title_requires_exact_match() {
    assert_eq!(find_by_title("Weather App").map(|p| p.id), Some(5));
    assert!(find_by_title("weather app").is_none());
    assert!(find_by_title(" Weather App").is_none());
    assert!(find_by_title("").is_none());
}

#[test]
fn every_category_has_a_filter_class() {
    for project in PROJECTS {
        assert!(category_class(project.category).is_some(), "{}", project.title);
    }
}

#[test]
fn category_class_maps_known_categories() {
    assert_eq!(category_class("Web Development"), Some("filter-web"));
    assert_eq!(category_class("App Development"), Some("filter-app"));
    assert_eq!(category_class("UI/UX Design"), Some("filter-design"));
    assert_eq!(category_class("Photography"), None);
}
