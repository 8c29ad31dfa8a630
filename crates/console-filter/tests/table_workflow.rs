//! Integration tests driving the tables the way the console pages do:
//! load a snapshot, open a role, then search and page through its tables.

use grid_console_filter::filter::{
    filter_by_term, FilterOption, RoleCachePermissionFilterOption, RoleFilterOption,
    RolePermissionFilterOption,
};
use grid_console_filter::{PlainTableView, RoleDetailState, Snapshot, SnapshotStore, TableView};

const SNAPSHOT: &str = r#"{
    "loadedAt": "2026-10-01T08:30:00Z",
    "roles": [
        {"name": "admin", "description": "Superuser",
         "cacheManagerPermissions": ["ALL"],
         "cachePermissions": ["READ", "WRITE", "EXEC", "CREATE", "ADMIN"]},
        {"name": "application",
         "cacheManagerPermissions": ["CREATE"],
         "cachePermissions": ["READ", "WRITE"]},
        {"name": "deployer",
         "cacheManagerPermissions": ["CREATE", "MONITOR"],
         "cachePermissions": ["READ"]},
        {"name": "observer",
         "cacheManagerPermissions": [],
         "cachePermissions": ["READ"]}
    ],
    "roleDetails": [
        {"name": "admin",
         "description": "Superuser",
         "permissions": [
            {"name": "permission1", "category": "category1", "description": "Description permission 1"},
            {"name": "permission2", "category": "category2", "description": "Description permission 2"}
         ],
         "roleCachePermissions": [
            {"cacheName": "cache1", "cacheType": "Distributed", "health": "HEALTHY"},
            {"cacheName": "cache2", "cacheType": "Replicated", "health": "DEGRADED"}
         ],
         "principals": ["principal1", "principal2", "principal3", "principal4"]}
    ]
}"#;

fn load_snapshot() -> Snapshot {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, SNAPSHOT).unwrap();
    SnapshotStore::with_path(path).load().unwrap()
}

#[test]
fn test_role_table_search_by_permission_label() {
    let snapshot = load_snapshot();
    let mut view: TableView<RoleFilterOption> = TableView::new();

    assert!(view.select_label("Cache manager permissions"));
    view.set_search("create");

    let page = view.render(&snapshot.roles);
    let names: Vec<&str> = page.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["application", "deployer"]);
    assert_eq!(page.total, 4);
}

#[test]
fn test_role_detail_tables() {
    let snapshot = load_snapshot();
    let mut detail = RoleDetailState::new();

    assert!(detail.load_role("admin"));
    let fetched = snapshot
        .role_detail("admin")
        .cloned()
        .ok_or_else(|| "not found".to_string());
    assert!(detail.complete(fetched));

    let mut permissions: TableView<RolePermissionFilterOption> = TableView::new();
    permissions.select_option(RolePermissionFilterOption::Category);
    permissions.set_search("CATEGORY2");
    let page = permissions.render(detail.permissions());
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "permission2");

    let mut caches: TableView<RoleCachePermissionFilterOption> = TableView::new();
    caches.select_option(RoleCachePermissionFilterOption::Health);
    caches.set_search("healthy");
    let page = caches.render(detail.cache_permissions());
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].cache_name, "cache1");

    let mut principals = PlainTableView::new();
    principals.pagination.set_per_page(3);
    let page = principals.render(detail.principals());
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.page_count, 2);

    principals.set_search("4");
    let page = principals.render(detail.principals());
    assert_eq!(page.items, vec![&"principal4".to_string()]);
}

#[test]
fn test_role_detail_for_unknown_role_fails() {
    let snapshot = load_snapshot();
    let mut detail = RoleDetailState::new();

    detail.load_role("nobody");
    let fetched = snapshot
        .role_detail("nobody")
        .cloned()
        .ok_or_else(|| "role 'nobody' not found".to_string());
    detail.complete(fetched);

    assert_eq!(detail.error(), Some("role 'nobody' not found"));
    assert!(detail.principals().is_empty());
}

#[test]
fn test_role_name_typeahead() {
    let snapshot = load_snapshot();
    let names = snapshot.role_names();

    let matched: Vec<&str> = filter_by_term("^(ad|ob)", &names).into_iter().copied().collect();
    assert_eq!(matched, vec!["admin", "observer"]);

    let matched = filter_by_term("app(", &names);
    assert!(matched.is_empty());

    assert_eq!(filter_by_term("", &names).len(), names.len());
}

#[test]
fn test_every_option_label_round_trips() {
    for option in RoleFilterOption::ALL {
        assert_eq!(RoleFilterOption::from_label(option.label()), Some(*option));
    }
    for option in RolePermissionFilterOption::ALL {
        assert_eq!(RolePermissionFilterOption::from_label(option.label()), Some(*option));
    }
    for option in RoleCachePermissionFilterOption::ALL {
        assert_eq!(
            RoleCachePermissionFilterOption::from_label(option.label()),
            Some(*option)
        );
    }
}
