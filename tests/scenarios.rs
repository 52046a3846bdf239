//! End-to-end catalog scenarios driven through `CatalogSession`.

use iphone_monitor::catalog::{NO_RESULTS_MESSAGE, SortKey};
use iphone_monitor::model::{Carrier, Listing, ListingStore};
use iphone_monitor::{CatalogSession, Choice, FilterSelection, UserEvent};

fn session_with(listings: Vec<Listing>) -> CatalogSession {
    let mut session = CatalogSession::new(FilterSelection::default());
    session.load_ready(ListingStore::new(listings));
    session
}

fn monthly(carrier: Carrier, model: &str, storage: &str, amount: i64) -> Listing {
    Listing::new(carrier, model, storage, amount * 24).with_monthly_payment(amount)
}

#[test]
fn twelve_listings_show_first_page() {
    let carriers = [Carrier::Au, Carrier::Docomo, Carrier::SoftBank];
    let listings = (0..12)
        .map(|i| monthly(carriers[i % 3], "iPhone 16", "128GB", 2_000 + i as i64 * 100))
        .collect();
    let mut session = session_with(listings);

    let frame = session.frame();
    assert_eq!(frame.cards.len(), 5);
    assert!(frame.has_more);
    assert!(!frame.is_expanded);
    assert_eq!(frame.remaining_count, 7);
    let prices: Vec<i64> = frame.cards.iter().map(|c| c.price).collect();
    assert_eq!(prices, vec![2_000, 2_100, 2_200, 2_300, 2_400]);

    let frame = session.handle(UserEvent::ShowMore);
    assert_eq!(frame.cards.len(), 10);
    assert_eq!(frame.remaining_count, 2);

    let frame = session.handle(UserEvent::ShowMore);
    assert_eq!(frame.cards.len(), 12);
    assert!(!frame.has_more);
    assert!(frame.show_more_label.is_none());

    let frame = session.handle(UserEvent::Collapse);
    assert_eq!(frame.cards.len(), 5);
    assert!(frame.scroll_to_top);
}

#[test]
fn equal_group_prices_are_both_lowest() {
    let session = session_with(vec![
        monthly(Carrier::Au, "iPhone 15", "128GB", 3_000),
        monthly(Carrier::Docomo, "iPhone 15", "128GB", 3_000),
        monthly(Carrier::SoftBank, "iPhone 15", "128GB", 3_500),
    ]);

    let frame = session.frame();
    let lowest: Vec<Carrier> = frame
        .cards
        .iter()
        .filter(|c| c.is_lowest)
        .map(|c| c.carrier)
        .collect();
    assert_eq!(lowest, vec![Carrier::Au, Carrier::Docomo]);
}

#[test]
fn carrier_without_listings_yields_no_results() {
    let mut session = session_with(vec![monthly(Carrier::Au, "iPhone 15", "128GB", 3_000)]);
    session.handle(UserEvent::ToggleCarrier(Carrier::Au));

    let frame = session.frame();
    assert!(frame.is_no_results());
    assert!(frame.cards.is_empty());
    assert!(!frame.has_more);
    assert_eq!(frame.remaining_count, 0);
    assert!(!NO_RESULTS_MESSAGE.is_empty());
}

#[test]
fn special_edition_ranks_below_numbered_models() {
    let mut session = session_with(vec![
        monthly(Carrier::Au, "iPhone SE (第3世代)", "64GB", 1_000),
        monthly(Carrier::Au, "iPhone 11", "64GB", 2_000),
    ]);

    let frame = session.handle(UserEvent::SetSortKey(SortKey::ModelNewest));
    let models: Vec<&str> = frame.cards.iter().map(|c| c.model.as_str()).collect();
    assert_eq!(models, vec!["iPhone 11", "iPhone SE (第3世代)"]);
}

#[test]
fn sentinel_storage_follows_the_allow_list() {
    let mut session = session_with(vec![
        monthly(Carrier::SoftBank, "iPhone 16", "最小容量", 3_000),
        monthly(Carrier::Au, "iPhone 16", "512GB", 4_000),
    ]);

    let frame = session.handle(UserEvent::SelectStorage(Choice::from("128GB")));
    assert_eq!(frame.matching_count, 1);
    assert_eq!(frame.cards[0].storage, "最小容量");

    let frame = session.handle(UserEvent::SelectStorage(Choice::from("512GB")));
    assert_eq!(frame.matching_count, 1);
    assert_eq!(frame.cards[0].storage, "512GB");
}
