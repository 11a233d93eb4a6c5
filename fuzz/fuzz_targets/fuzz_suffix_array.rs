#![no_main]

use libfuzzer_sys::fuzz_target;
use textsearch::suffix_array::{build_query_target, close_matches};
use textsearch::symbols::Sequence;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    // Arbitrary query/target bytes must never panic, and every suffix
    // must come out in sorted order
    let (query, target) = data;
    let query = Sequence::from_bytes(&query);
    let target = Sequence::from_bytes(&target);

    if let Ok((sa, query_len)) = build_query_target(&query, &target) {
        for r in 1..sa.len() {
            assert!(sa.suffix(r - 1) < sa.suffix(r));
        }
        let matches = close_matches(&sa, query_len).unwrap();
        assert_eq!(matches.len(), query_len);
    }
});
