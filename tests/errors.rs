use std::collections::HashMap;

use pgopts::{Error, ErrorKind};
use rstest::rstest;

#[rstest]
#[case("postgre://marko@internet", "postgre://marko@internet")]
#[case("dbname user=goodbye", "dbname")]
#[case("user=foo blah", "blah")]
#[case("user=foo blah   ", "blah")]
#[case("dbname", "dbname")]
#[case("host=a port 5432", "port")]
#[case("-h localhost", "-h")]
fn missing_equals(#[case] input: &str, #[case] key: &str) {
    let err = pgopts::parse(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingEquals, "{input:?}");
    match err {
        Error::MissingEquals { key: actual, .. } => assert_eq!(actual, key),
        other => panic!("{input:?}: unexpected {other:?}"),
    }
}

#[rstest]
#[case(r"user=x\")]
#[case(r"host=h user=\")]
fn incomplete_escape(#[case] input: &str) {
    let err = pgopts::parse(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompleteEscape, "{input:?}");
    assert_eq!(err.to_string(), "missing character after backslash");
}

#[rstest]
#[case("dbname=hello user='unterminated")]
#[case("user='")]
#[case(r"user='ends with escaped quote\'")]
#[case(r"user='ends with backslash\")]
#[case("a=1 b=2 c=3 d='x y z")]
fn unterminated_quote(#[case] input: &str) {
    let err = pgopts::parse(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnterminatedQuote, "{input:?}");
    assert_eq!(
        err.to_string(),
        "unterminated quoted string literal in connection string"
    );
}

#[rstest]
fn error_offsets() {
    assert_eq!(pgopts::parse("dbname user=goodbye").unwrap_err().offset(), 0);
    assert_eq!(pgopts::parse("user=foo blah").unwrap_err().offset(), 9);
    assert_eq!(pgopts::parse(r"user=x\").unwrap_err().offset(), 6);
    assert_eq!(
        pgopts::parse("dbname=hello user='unterminated")
            .unwrap_err()
            .offset(),
        18
    );
}

#[rstest]
fn missing_equals_message_names_key() {
    let err = pgopts::parse("dbname user=goodbye").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"missing "=" after "dbname" in connection info string"#
    );
}

#[rstest]
fn failed_parse_into_may_leave_earlier_pairs() {
    let mut map: HashMap<String, String> = HashMap::new();
    let result = pgopts::parse_into("host=h user='oops", &mut map);
    assert!(result.is_err());
    assert!(map.get("user").is_none());
}
