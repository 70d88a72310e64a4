use everest_core::{NavigationStore, NavigationTarget, PageRegistry, TabController, TabStep};

/// Mount whatever page the store currently points at.
fn mount(store: &NavigationStore) -> Option<TabController> {
    let registry = *store.registry();
    registry
        .page(store.page_index())
        .and_then(|page| page.mount_tabs(&registry, store.tab()))
}

#[test]
fn test_deep_link_mounts_target_tab() {
    let mut store = NavigationStore::new(PageRegistry::everest());
    assert_eq!(store.page_index(), 0);

    assert!(store.navigate_to("analysis", Some("patterns")));
    assert_eq!(store.page_index(), 4);

    let tabs = mount(&store).expect("analysis has tabs");
    assert_eq!(tabs.active_tab(), "patterns");
}

#[test]
fn test_next_walks_analysis_tabs_and_stops() {
    let mut store = NavigationStore::default();
    store.navigate_to_tab(4, "regression");
    let mut tabs = mount(&store).expect("analysis has tabs");

    let mut visited = vec![tabs.active_tab().to_string()];
    for _ in 0..2 {
        match tabs.go_next() {
            TabStep::Moved(tab) => visited.push(tab),
            other => panic!("expected a move, got {:?}", other),
        }
    }
    assert_eq!(visited, vec!["regression", "visualizations", "patterns"]);

    assert_eq!(tabs.go_next(), TabStep::Unchanged);
    assert_eq!(tabs.active_tab(), "patterns");
}

#[test]
fn test_inbound_tab_is_reapplied_on_every_mount() {
    let mut store = NavigationStore::default();
    store.navigate_to(5usize, Some("references"));

    let mut first = mount(&store).expect("discussion has tabs");
    assert_eq!(first.active_tab(), "references");
    first.set_active_tab("findings");
    drop(first);

    let second = mount(&store).expect("discussion has tabs");
    assert_eq!(second.active_tab(), "references");
}

#[test]
fn test_tab_state_is_not_remembered_across_navigation() {
    let mut store = NavigationStore::default();
    store.navigate_to("variables", None);
    let mut tabs = mount(&store).expect("variables has tabs");
    tabs.set_active_tab("crowding");

    store.navigate_to("introduction", None);
    store.navigate_to("variables", None);
    let tabs = mount(&store).expect("variables has tabs");
    assert_eq!(tabs.active_tab(), "data");
}

#[test]
fn test_boundary_override_routes_through_store() {
    let mut store = NavigationStore::default();
    store.navigate_to("data", None);
    let mut tabs = mount(&store).expect("data & methods has tabs");

    let TabStep::Navigate(target) = tabs.go_previous() else {
        panic!("first tab of Data & Methods should jump back a page");
    };
    assert_eq!(target, NavigationTarget::with_tab(2, "limitations"));

    let NavigationTarget { page_index, tab } = target;
    store.navigate_to(page_index, tab.as_deref());
    let tabs = mount(&store).expect("variables has tabs");
    assert_eq!(tabs.active_tab(), "limitations");
}

#[test]
fn test_introduction_walks_forward_into_variables() {
    let mut store = NavigationStore::default();
    store.navigate_to("home", Some("question"));
    let mut tabs = mount(&store).expect("introduction has tabs");

    assert_eq!(tabs.next_label(), "Variables");
    assert_eq!(tabs.go_next(), TabStep::Navigate(NavigationTarget::page(2)));
}

#[test]
fn test_render_key_changes_with_tab_hint_only() {
    let mut store = NavigationStore::default();
    store.navigate_to(4usize, None);
    let plain = store.render_key();

    store.navigate_to("results", None);
    assert_eq!(store.render_key(), plain);

    store.navigate_to("results", Some("patterns"));
    assert_ne!(store.render_key(), plain);
}
