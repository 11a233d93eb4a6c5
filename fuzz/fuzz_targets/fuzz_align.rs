#![no_main]

use libfuzzer_sys::fuzz_target;
use textsearch::align::align;
use textsearch::symbols::Sequence;

fuzz_target!(|data: (&str, &str)| {
    // Replaying the path must always rebuild the target
    let (source, target) = data;
    let source = Sequence::from_chars(source);
    let target = Sequence::from_chars(target);

    let alignment = align(&source, &target);
    assert_eq!(alignment.apply(&source).unwrap(), target);
});
