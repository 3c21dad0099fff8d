//! Property tests for NUL-separated watcher records.

use std::path::PathBuf;

use proptest::prelude::*;

use fswatch_rsync_send::infrastructure::ChangeTokens;
use fswatch_rsync_send::ChangeToken;

fn path_record() -> impl Strategy<Value = String> {
    proptest::string::string_regex("/[A-Za-z0-9 ._/-]{1,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Records come back in order, with `NoOp` as the only boundary.
    #[test]
    fn property_records_preserve_order(
        records in proptest::collection::vec(
            prop_oneof![path_record().prop_map(Some), Just(None)],
            0..16
        )
    ) {
        let mut stream = Vec::new();
        for record in &records {
            stream.extend_from_slice(record.as_deref().unwrap_or("NoOp").as_bytes());
            stream.push(0);
        }

        let tokens: Vec<ChangeToken> = ChangeTokens::new(stream.as_slice())
            .collect::<Result<_, _>>()
            .unwrap();

        let expected: Vec<ChangeToken> = records
            .iter()
            .map(|record| match record {
                Some(path) => ChangeToken::Path(PathBuf::from(path)),
                None => ChangeToken::BoundaryMarker,
            })
            .collect();
        prop_assert_eq!(tokens, expected);
    }
}
