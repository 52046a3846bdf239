#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(feed) = iphone_monitor::parse_feed_str(s)
    {
        let mut session = iphone_monitor::CatalogSession::default();
        let _ = session.load_ready(iphone_monitor::ListingStore::from(feed));
    }
});
