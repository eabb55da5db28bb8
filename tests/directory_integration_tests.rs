use dedash::core::action::{Action, Effect, update};
use dedash::core::detail::DetailView;
use dedash::core::directory::{Directory, DirectoryError};
use dedash::core::restaurant::format_price;
use dedash::core::sort::{SortKey, sorted, visible};
use dedash::core::state::{App, Route};

// ============================================================================
// Helper Functions
// ============================================================================

fn ids(records: &[&dedash::core::restaurant::Restaurant]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn embedded_app() -> App {
    App::new(
        Directory::embedded().unwrap(),
        SortKey::Distance,
        "Boston, MA".to_string(),
    )
}

// ============================================================================
// Embedded Directory
// ============================================================================

#[test]
fn test_embedded_directory_is_valid() {
    let directory = Directory::embedded().unwrap();
    assert_eq!(directory.len(), 6);
    for restaurant in directory.list() {
        assert!(!restaurant.menu.is_empty(), "{} has no menu", restaurant.id);
        assert!(directory.find(&restaurant.id).is_some());
    }
}

#[test]
fn test_embedded_sort_orders() {
    let directory = Directory::embedded().unwrap();

    assert_eq!(
        ids(&sorted(directory.list(), SortKey::Distance)),
        [
            "fenway-burgers",
            "north-end-slice",
            "chinatown-dumplings",
            "beacon-hill-sushi",
            "back-bay-pho",
            "southie-tacos"
        ]
    );
    assert_eq!(
        ids(&sorted(directory.list(), SortKey::Rating)),
        [
            "back-bay-pho",
            "beacon-hill-sushi",
            "north-end-slice",
            "chinatown-dumplings",
            "southie-tacos",
            "fenway-burgers"
        ]
    );
    assert_eq!(
        ids(&sorted(directory.list(), SortKey::Eta)),
        [
            "chinatown-dumplings",
            "fenway-burgers",
            "north-end-slice",
            "back-bay-pho",
            "southie-tacos",
            "beacon-hill-sushi"
        ]
    );
}

#[test]
fn test_unknown_sort_key_falls_back_to_distance() {
    let directory = Directory::embedded().unwrap();
    assert_eq!(
        sorted(directory.list(), SortKey::from_key("price")),
        sorted(directory.list(), SortKey::Distance)
    );
}

#[test]
fn test_search_matches_name_and_cuisine() {
    let directory = Directory::embedded().unwrap();
    assert_eq!(
        ids(&visible(directory.list(), SortKey::Distance, "SUSHI")),
        ["beacon-hill-sushi"]
    );
    assert_eq!(
        ids(&visible(directory.list(), SortKey::Distance, "mexican")),
        ["southie-tacos"]
    );
    assert!(visible(directory.list(), SortKey::Distance, "falafel").is_empty());
}

// ============================================================================
// Detail View
// ============================================================================

#[test]
fn test_detail_resolves_menu_prices() {
    let directory = Directory::embedded().unwrap();
    let DetailView::Found(pho) = DetailView::resolve(&directory, "back-bay-pho") else {
        panic!("back-bay-pho should resolve");
    };
    let prices: Vec<String> = pho.menu.iter().map(|m| format_price(m.price)).collect();
    assert_eq!(prices, ["$14.95", "$11.00", "$7.50"]);
}

#[test]
fn test_detail_unknown_id_is_not_found() {
    let directory = Directory::embedded().unwrap();
    assert_eq!(
        DetailView::resolve(&directory, "nope"),
        DetailView::NotFound("nope")
    );
}

// ============================================================================
// Custom Data
// ============================================================================

#[test]
fn test_custom_data_file_rejects_duplicate_ids() {
    let json = r#"[
        {"id": "x", "name": "X", "cuisine": "Thai", "distanceMi": 1.0, "etaMin": 10, "rating": 4.0, "menu": []},
        {"id": "x", "name": "Y", "cuisine": "Thai", "distanceMi": 2.0, "etaMin": 12, "rating": 4.2, "menu": []}
    ]"#;
    assert!(matches!(
        Directory::from_json(json),
        Err(DirectoryError::Invalid(_))
    ));
}

#[test]
fn test_custom_data_file_from_disk() {
    let path = std::env::temp_dir().join(format!("dedash-it-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"[{"id": "solo", "name": "Solo Cafe", "cuisine": "Cafe", "distanceMi": 0.3, "etaMin": 5, "rating": 3.9}]"#,
    )
    .unwrap();

    let directory = Directory::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(directory.len(), 1);
    assert!(directory.find("solo").unwrap().menu.is_empty());
}

// ============================================================================
// Browsing Flow
// ============================================================================

#[test]
fn test_browse_sort_open_and_back() {
    let mut app = embedded_app();
    assert_eq!(ids(&app.visible_restaurants())[0], "fenway-burgers");

    update(&mut app, Action::SetSortKey(SortKey::Eta));
    assert_eq!(ids(&app.visible_restaurants())[0], "chinatown-dumplings");
    assert_eq!(app.status_message, "Sorted by: Fastest");

    update(&mut app, Action::SelectRestaurant("chinatown-dumplings".to_string()));
    assert_eq!(app.route, Route::Restaurant("chinatown-dumplings".to_string()));

    update(&mut app, Action::Back);
    assert_eq!(app.route, Route::Home);
    assert_eq!(app.sort_key, SortKey::Distance);
}

#[test]
fn test_profile_panel_toggles_without_navigation() {
    let mut app = embedded_app();
    update(&mut app, Action::OpenProfile);
    update(&mut app, Action::OpenProfile);
    assert!(app.profile.is_open());

    update(&mut app, Action::CloseProfile);
    assert!(!app.profile.is_open());
    assert_eq!(app.route, Route::Home);
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
