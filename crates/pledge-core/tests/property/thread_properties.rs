use chrono::{TimeZone, Utc};
use pledge_core::thread::{Headers, RawMessage};
use pledge_core::ThreadEntry;
use proptest::prelude::*;

fn create(body: &str, headers: &Headers) -> ThreadEntry {
    ThreadEntry::create(RawMessage {
        message_id: "<m@x.io>".into(),
        from_addr: "a@x.io".into(),
        to_addr: "b@x.io".into(),
        timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        signer: "s.x.io".into(),
        body,
        headers,
        in_reply_to: None,
        references: Vec::new(),
    })
}

proptest! {
    #[test]
    fn created_entry_verifies_its_own_content(
        body in ".{0,200}",
        headers in prop::collection::btree_map("[A-Za-z-]{1,12}", "[ -~]{0,40}", 0..6),
    ) {
        let entry = create(&body, &headers);
        prop_assert!(entry.verify_integrity(&body, &headers));
    }

    #[test]
    fn appended_body_breaks_verification(body in "[a-z]{1,50}", extra in "[a-z]{1,10}") {
        let headers = Headers::new();
        let entry = create(&body, &headers);
        let tampered = format!("{body}{extra}");
        prop_assert!(!entry.verify_integrity(&tampered, &headers));
    }
}
