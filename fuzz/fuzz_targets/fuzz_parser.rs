#![no_main]
use libfuzzer_sys::fuzz_target;
use lightjson::{ParseError, ParserOptions, parse_with_options, stringify};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let options = ParserOptions::default();
    let ours = parse_with_options(text, &options);
    let reference = serde_json::from_str::<serde_json::Value>(text);

    match &ours {
        Ok(value) => {
            // Canonical output must parse back to the same tree and be a
            // fixed point of a second round.
            let once = stringify(value);
            let reparsed = parse_with_options(&once, &options)
                .unwrap_or_else(|err| panic!("reparse of {once:?} failed: {err}"));
            assert_eq!(&reparsed, value, "round trip changed {text:?}");
            assert_eq!(stringify(&reparsed), once);
        }
        Err(ParseError::RecursionLimitExceeded) => {}
        Err(err) => {
            assert!(
                reference.is_err(),
                "rejected {text:?} with {err} but serde_json accepted it"
            );
        }
    }
});
