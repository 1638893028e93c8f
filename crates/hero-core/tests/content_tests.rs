// Static content: tech stack, projects, routes and navigation.

use hero_core::content::{
    find_project, validate_entries, NavLink, ProjectView, Route, MOCK_PROJECTS, NAV_LINKS,
    TECH_STACK,
};
use hero_core::ContentError;

#[test]
fn tech_stack_is_complete_and_valid() {
    assert_eq!(TECH_STACK.len(), 10);
    assert_eq!(validate_entries(TECH_STACK), Ok(()));
    assert!(TECH_STACK.iter().all(|e| e.icon_url.ends_with(".svg")));
}

#[test]
fn empty_icon_url_names_the_record() {
    let mut stack = TECH_STACK.to_vec();
    stack[9].icon_url = "";
    assert_eq!(
        validate_entries(&stack),
        Err(ContentError::EmptyField {
            index: 9,
            field: "icon_url"
        })
    );
}

#[test]
fn projects_resolve_by_id() {
    assert_eq!(MOCK_PROJECTS.len(), 3);
    assert_eq!(find_project("2").map(|p| p.title), Some("Task Management App"));
    assert_eq!(ProjectView::resolve("42"), ProjectView::NotFound);
    assert!(matches!(ProjectView::resolve("1"), ProjectView::Found(p) if p.id == "1"));
}

#[test]
fn tech_preview_counts_the_overflow() {
    let p = find_project("1").expect("project 1");
    let (shown, more) = p.tech_preview(3);
    assert_eq!(shown, &["Next.js", "Prisma", "PostgreSQL"]);
    assert_eq!(more, 1);
    let (all, none) = p.tech_preview(10);
    assert_eq!(all.len(), 4);
    assert_eq!(none, 0);
}

#[test]
fn routes_parse_and_print() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/about/"), Route::About);
    assert_eq!(Route::parse("/portfolio?tab=web"), Route::Portfolio);
    assert_eq!(Route::parse("/portfolio/3"), Route::Project("3".into()));
    assert_eq!(Route::parse("/theme"), Route::ThemePreview);
    assert_eq!(Route::parse("/nope/x/y"), Route::NotFound);
    assert_eq!(Route::Project("3".into()).path(), "/portfolio/3");
}

#[test]
fn nav_highlights_portfolio_on_project_pages() {
    let active = |r: &Route| -> Vec<&str> {
        NAV_LINKS
            .iter()
            .filter(|l: &&NavLink| l.is_active(r))
            .map(|l| l.label)
            .collect()
    };
    assert_eq!(active(&Route::Home), ["Home"]);
    assert_eq!(active(&Route::Project("1".into())), ["Portfolio"]);
    assert!(active(&Route::NotFound).is_empty());
}
