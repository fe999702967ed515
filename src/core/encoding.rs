use crate::domain::model::Query;
use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// 查詢參數名稱
pub const QUERY_PARAMETER: &str = "SQLQUER";

/// Bytes escaped as `%XX`. Space is left out here and turned into `+` afterwards.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b' ');

/// Encodes raw bytes for a URL query value, spaces as `+`.
///
/// Every byte outside the unreserved set is escaped, whether or not the input
/// is valid UTF-8. `*` is escaped too, so this is not the WHATWG form encoder
/// (`url::form_urlencoded`).
pub fn quote_plus_bytes(input: &[u8]) -> String {
    percent_encode(input, QUERY_VALUE)
        .to_string()
        .replace(' ', "+")
}

pub fn quote_plus(input: &str) -> String {
    quote_plus_bytes(input.as_bytes())
}

/// `<path>?SQLQUER=<encoded query>`
pub fn request_path(path: &str, query: &Query) -> String {
    format!("{}?{}={}", path, QUERY_PARAMETER, query.encoded())
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    const PATH: &str = "/testplan/IOC_INFOS/ioc_select.php";

    fn decode_plus(encoded: &str) -> String {
        percent_decode_str(&encoded.replace('+', " "))
            .decode_utf8()
            .unwrap()
            .into_owned()
    }

    #[test]
    fn it_should_leave_unreserved_characters_untouched() {
        let query = Query::from("IOC_01-test.name~x");

        assert_eq!(
            request_path(PATH, &query),
            "/testplan/IOC_INFOS/ioc_select.php?SQLQUER=IOC_01-test.name~x"
        );
    }

    #[test]
    fn it_should_encode_spaces_as_plus() {
        assert_eq!(quote_plus("a b  c"), "a+b++c");
        assert!(!quote_plus("a b").contains("%20"));
    }

    #[test]
    fn it_should_escape_the_star_in_a_select_statement() {
        let query = Query::from("select * from ioc");

        assert_eq!(
            request_path(PATH, &query),
            "/testplan/IOC_INFOS/ioc_select.php?SQLQUER=select+%2A+from+ioc"
        );
    }

    #[test]
    fn it_should_escape_reserved_characters() {
        assert_eq!(quote_plus("a&b=c%d+e"), "a%26b%3Dc%25d%2Be");
        assert_eq!(quote_plus("name='x'/;#?"), "name%3D%27x%27%2F%3B%23%3F");
    }

    #[test]
    fn it_should_escape_non_ascii_bytes_as_utf8() {
        assert_eq!(quote_plus("é"), "%C3%A9");
    }

    #[test]
    fn it_should_escape_bytes_that_are_not_utf8() {
        assert_eq!(quote_plus_bytes(b"select \xe9"), "select+%E9");
        assert_eq!(quote_plus_bytes(b"\xff\x00a"), "%FF%00a");
    }

    #[test]
    fn it_should_keep_tilde_unescaped() {
        assert_eq!(quote_plus("~ioc~"), "~ioc~");
        assert!(!quote_plus("a~b").contains("%7E"));
    }

    #[test]
    fn it_should_decode_back_to_the_original_query() {
        let queries = [
            "select * from ioc where name = 'X&Y' and pct like '100%'",
            "a+b=c",
            "tab\there\nnewline",
            "ünïcødé + spaces",
        ];

        for query in queries {
            assert_eq!(decode_plus(&quote_plus(query)), query);
        }
    }

    #[test]
    fn it_should_encode_an_empty_query_as_an_empty_value() {
        assert_eq!(request_path(PATH, &Query::from("")), format!("{}?SQLQUER=", PATH));
    }
}
