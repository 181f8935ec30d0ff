//! Endpoint paths, relative to the page origin.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::PageQuery;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `{prefix}/sub-categories/{id}`
pub fn sub_category_path(prefix: &str, sub_category_id: &str) -> String {
    format!(
        "{}/sub-categories/{}",
        prefix.trim_end_matches('/'),
        utf8_percent_encode(sub_category_id, SEGMENT)
    )
}

/// `{prefix}/sub-categories/{id}/items?pageNumber=..&pageSize=..`
pub fn items_path(prefix: &str, sub_category_id: &str, query: PageQuery) -> String {
    format!(
        "{}/items?pageNumber={}&pageSize={}",
        sub_category_path(prefix, sub_category_id),
        query.page_number,
        query.page_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_category_path() {
        assert_eq!(
            sub_category_path("/core/academix", "42"),
            "/core/academix/sub-categories/42"
        );
        assert_eq!(
            sub_category_path("/core/academix/", "42"),
            "/core/academix/sub-categories/42"
        );
    }

    #[test]
    fn test_items_path_uses_zero_based_page() {
        let query = PageQuery { page_number: 0, page_size: 10 };
        assert_eq!(
            items_path("/core/academix", "42", query),
            "/core/academix/sub-categories/42/items?pageNumber=0&pageSize=10"
        );
    }

    #[test]
    fn test_identifier_is_escaped_as_one_segment() {
        assert_eq!(
            sub_category_path("/core/academix", "a/b?c"),
            "/core/academix/sub-categories/a%2Fb%3Fc"
        );
    }
}
