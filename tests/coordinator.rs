//! End-to-end routing scenarios driven through the `Driver`.

mod common;

use common::{count_calls, driver, video, FakeApi, PAGE_SIZE};
use moviedeck::app::Page;
use moviedeck::domain::IMAGE_BASE_URL;
use moviedeck::routes::home::{PICKS_ERROR, TRENDING_ERROR};
use moviedeck::routes::search::SEARCH_ERROR;
use moviedeck::routes::Phase;
use moviedeck::{ui, Event, Route};

#[tokio::test]
async fn search_fills_store_and_rewrites_location() {
    let api = FakeApi::new();
    let calls = api.calls();
    let mut driver = driver(api);

    driver.navigate(Route::search("batman")).unwrap();
    assert_eq!(driver.state().phase(), Phase::Loading);
    driver.settle().await.unwrap();

    let store = &driver.state().store;
    assert_eq!(store.search_query(), "batman");
    assert_eq!(store.search_results().len(), PAGE_SIZE);
    assert_eq!(store.total_pages(), 3);
    assert_eq!(store.current_page(), 1);
    assert_eq!(driver.location().to_string(), "/search?query=batman&page=1");
    assert_eq!(count_calls(&calls, "search:"), 1);
}

#[tokio::test]
async fn repeated_search_location_does_not_refetch() {
    let api = FakeApi::new();
    let calls = api.calls();
    let mut driver = driver(api);

    driver.navigate(Route::search("batman")).unwrap();
    driver.settle().await.unwrap();
    driver.navigate(Route::Favorites).unwrap();
    driver.navigate(Route::search("batman")).unwrap();

    // Favorites cleared the search snapshot, so the results must be refetched.
    assert_eq!(driver.in_flight(), 1);
    driver.settle().await.unwrap();

    driver.dispatch(Event::Navigate(Route::search("batman"))).unwrap();
    assert_eq!(driver.in_flight(), 0);
    assert_eq!(count_calls(&calls, "search:"), 2);
}

#[tokio::test]
async fn search_page_beyond_total_is_clamped() {
    let mut driver = driver(FakeApi::new());

    driver
        .navigate(Route::Search {
            query: "batman".to_string(),
            page: 9,
        })
        .unwrap();
    driver.settle().await.unwrap();

    assert_eq!(driver.state().store.current_page(), 3);
    assert_eq!(driver.location().to_string(), "/search?query=batman&page=3");
}

#[tokio::test]
async fn search_failure_leaves_store_untouched() {
    let api = FakeApi {
        fail_search: true,
        ..FakeApi::new()
    };
    let mut driver = driver(api);

    driver.navigate(Route::search("batman")).unwrap();
    driver.settle().await.unwrap();

    assert_eq!(driver.state().phase(), Phase::Error(SEARCH_ERROR.to_string()));
    assert!(driver.state().store.search_results().is_empty());
    assert_eq!(driver.state().store.search_query(), "");
}

#[tokio::test]
async fn trending_page_change_fetches_and_navigates() {
    let api = FakeApi::new();
    let calls = api.calls();
    let mut driver = driver(api);

    driver.navigate(Route::Trending { page: 2 }).unwrap();
    driver.settle().await.unwrap();
    assert_eq!(calls.borrow().as_slice(), ["trending:2"]);
    assert_eq!(driver.state().pagination(), Some((2, 5)));

    driver.dispatch(Event::PageSelected(3)).unwrap();
    driver.settle().await.unwrap();

    assert_eq!(driver.location().to_string(), "/trending/3");
    assert_eq!(count_calls(&calls, "trending:3"), 1);
    assert_eq!(driver.state().pagination(), Some((3, 5)));
    assert_eq!(driver.state().listed_movies()[0].id, 301);
    assert_eq!(driver.history(), [Route::Trending { page: 2 }]);
}

#[tokio::test]
async fn trending_page_past_total_is_clamped() {
    let api = FakeApi::new();
    let calls = api.calls();
    let mut driver = driver(api);

    driver.navigate(Route::Trending { page: 9 }).unwrap();
    driver.settle().await.unwrap();

    assert_eq!(driver.location().to_string(), "/trending/5");
    assert_eq!(driver.state().pagination(), Some((5, 5)));
    assert_eq!(driver.state().listed_movies()[0].id, 501);
    assert_eq!(calls.borrow().as_slice(), ["trending:9", "trending:5"]);
    assert!(driver.history().is_empty());
}

#[tokio::test]
async fn rejected_page_input_changes_nothing() {
    let api = FakeApi::new();
    let calls = api.calls();
    let mut driver = driver(api);

    driver.navigate(Route::Trending { page: 1 }).unwrap();
    driver.settle().await.unwrap();

    for input in ["0", "6", "abc"] {
        driver.dispatch(Event::PageInput(input.to_string())).unwrap();
        assert_eq!(driver.in_flight(), 0);
        assert!(driver.state().notice.is_some());
    }

    assert_eq!(driver.location(), &Route::Trending { page: 1 });
    assert_eq!(count_calls(&calls, "trending:"), 1);
}

#[tokio::test]
async fn details_without_trailer_is_not_an_error() {
    let mut api = FakeApi::new();
    api.videos.insert(603, vec![video("Teaser", "YouTube", "abc"), video("Trailer", "Vimeo", "v")]);
    let mut driver = driver(api);

    driver.navigate(Route::MovieDetails { id: 603 }).unwrap();
    driver.settle().await.unwrap();

    let Page::Details(details) = &driver.state().page else {
        panic!("details page should be mounted");
    };
    assert_eq!(details.phase(), &Phase::Success);
    assert_eq!(details.movie().map(|movie| movie.id), Some(603));
    assert!(details.trailer_url().is_none());

    let frame = ui::render(driver.state(), IMAGE_BASE_URL, 80);
    assert!(frame.contains("No trailer available"));
    assert!(frame.contains("Keanu Reeves as Neo"));
}

#[tokio::test]
async fn details_trailer_uses_youtube_embed() {
    let mut api = FakeApi::new();
    api.videos.insert(27_205, vec![video("Trailer", "YouTube", "YoHD9XEInc0")]);
    let mut driver = driver(api);

    driver.navigate(Route::MovieDetails { id: 27_205 }).unwrap();
    driver.settle().await.unwrap();

    let Page::Details(details) = &driver.state().page else {
        panic!("details page should be mounted");
    };
    assert_eq!(
        details.trailer_url().as_deref(),
        Some("https://www.youtube.com/embed/YoHD9XEInc0")
    );
}

#[tokio::test]
async fn stale_details_completion_is_discarded() {
    let mut driver = driver(FakeApi::new());

    driver.navigate(Route::MovieDetails { id: 1 }).unwrap();
    driver.navigate(Route::MovieDetails { id: 2 }).unwrap();
    assert_eq!(driver.in_flight(), 2);

    let completed = driver.settle().await.unwrap();
    assert_eq!(completed, 2);

    let Page::Details(details) = &driver.state().page else {
        panic!("details page should be mounted");
    };
    assert_eq!(details.id, 2);
    assert_eq!(details.movie().map(|movie| movie.id), Some(2));
}

#[tokio::test]
async fn completion_after_leaving_page_is_discarded() {
    let mut driver = driver(FakeApi::new());

    driver.navigate(Route::search("batman")).unwrap();
    driver.navigate(Route::Favorites).unwrap();
    driver.settle().await.unwrap();

    assert_eq!(driver.location(), &Route::Favorites);
    assert!(driver.state().store.search_results().is_empty());
}

#[tokio::test]
async fn home_loads_picks_and_trending_preview() {
    let api = FakeApi::new();
    let calls = api.calls();
    let mut driver = driver(api);

    driver.navigate(Route::Home).unwrap();
    driver.settle().await.unwrap();

    let Page::Home(home) = &driver.state().page else {
        panic!("home page should be mounted");
    };
    let picks: Vec<u64> = home.developer_picks.iter().map(|movie| movie.id).collect();
    assert_eq!(picks, vec![603, 157_336, 128, 155]);
    assert_eq!(home.trending.len(), 8);
    assert_eq!(driver.state().phase(), Phase::Success);
    assert_eq!(count_calls(&calls, "details:"), 4);
    assert_eq!(count_calls(&calls, "trending:1"), 1);
}

#[tokio::test]
async fn home_picks_failure_reports_picks_error() {
    let mut api = FakeApi::new();
    api.missing.insert(128);
    let mut driver = driver(api);

    driver.navigate(Route::Home).unwrap();
    driver.settle().await.unwrap();

    assert_eq!(driver.state().phase(), Phase::Error(PICKS_ERROR.to_string()));
    let Page::Home(home) = &driver.state().page else {
        panic!("home page should be mounted");
    };
    assert!(home.developer_picks.is_empty());
    assert_eq!(home.trending.len(), 8);
}

#[tokio::test]
async fn home_trending_failure_reports_trending_error() {
    let api = FakeApi {
        fail_trending: true,
        ..FakeApi::new()
    };
    let mut driver = driver(api);

    driver.navigate(Route::Home).unwrap();
    driver.settle().await.unwrap();

    assert_eq!(driver.state().phase(), Phase::Error(TRENDING_ERROR.to_string()));
}

#[tokio::test]
async fn go_back_from_details_returns_to_active_search() {
    let api = FakeApi::new();
    let calls = api.calls();
    let mut driver = driver(api);

    driver.navigate(Route::search("batman")).unwrap();
    driver.settle().await.unwrap();
    driver.dispatch(Event::PageSelected(2)).unwrap();
    driver.settle().await.unwrap();
    assert_eq!(driver.location().to_string(), "/search?query=batman&page=2");

    driver.dispatch(Event::OpenListed(0)).unwrap();
    driver.settle().await.unwrap();
    assert_eq!(driver.location(), &Route::MovieDetails { id: 201 });

    driver.dispatch(Event::GoBack).unwrap();
    assert_eq!(driver.location().to_string(), "/search?query=batman&page=2");
    assert_eq!(driver.in_flight(), 0);
    assert_eq!(count_calls(&calls, "search:"), 2);
}

#[tokio::test]
async fn go_back_from_details_without_search_returns_home() {
    let mut driver = driver(FakeApi::new());

    driver.navigate(Route::MovieDetails { id: 603 }).unwrap();
    driver.settle().await.unwrap();
    driver.dispatch(Event::GoBack).unwrap();

    assert_eq!(driver.location(), &Route::Home);
}

#[tokio::test]
async fn go_back_elsewhere_pops_history() {
    let mut driver = driver(FakeApi::new());

    driver.navigate(Route::Trending { page: 4 }).unwrap();
    driver.settle().await.unwrap();
    driver.navigate(Route::Favorites).unwrap();
    driver.dispatch(Event::GoBack).unwrap();

    assert_eq!(driver.location(), &Route::Trending { page: 4 });
}

#[tokio::test]
async fn listed_favorite_toggle_marks_row() {
    let mut driver = driver(FakeApi::new());

    driver.navigate(Route::Trending { page: 1 }).unwrap();
    driver.settle().await.unwrap();
    driver.dispatch(Event::ToggleListedFavorite(1)).unwrap();

    assert!(driver.state().store.is_favorite(102));
    let frame = ui::render(driver.state(), IMAGE_BASE_URL, 80);
    assert!(frame.contains('♥'));

    driver.dispatch(Event::ToggleListedFavorite(1)).unwrap();
    assert!(!driver.state().store.is_favorite(102));
}
