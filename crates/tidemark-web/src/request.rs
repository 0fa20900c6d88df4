//! Inbound request representation.

use std::collections::HashMap;

use tidemark_router::decode;

/// An inbound page request.
///
/// Carries the raw request target exactly as delivered by the hosting HTTP
/// layer — path, optional query string, optional site-root prefix — plus the
/// query parameters parsed out of it. Routing here ignores the HTTP verb, so
/// there is no method field.
#[derive(Debug, Clone)]
pub struct Request {
    /// Raw request target, e.g. `/tidemark/user/twitter/sam?page=2`.
    pub target: String,

    /// Query-string parameters decoded from the target.
    pub query: HashMap<String, String>,
}

impl Request {
    /// Creates a request from a raw target, parsing its query string.
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let query = match target.find('?') {
            Some(offset) => parse_query_string(&target[offset + 1..]),
            None => HashMap::new(),
        };
        Self { target, query }
    }

    /// Gets a query parameter.
    pub fn get_query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

/// Parses query parameters from a query string.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let value = parts.next().unwrap_or("");
            Some((decode(key), decode(value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_parsing() {
        let query = parse_query_string("name=John+Doe&age=30&city=New%20York");
        assert_eq!(query.get("name"), Some(&"John Doe".to_string()));
        assert_eq!(query.get("age"), Some(&"30".to_string()));
        assert_eq!(query.get("city"), Some(&"New York".to_string()));
    }

    #[test]
    fn test_valueless_pair() {
        let query = parse_query_string("debug&page=1");
        assert_eq!(query.get("debug"), Some(&String::new()));
        assert_eq!(query.get("page"), Some(&"1".to_string()));
    }

    #[test]
    fn test_request_without_query() {
        let req = Request::new("/user/twitter/sam");
        assert!(req.query.is_empty());
        assert_eq!(req.target, "/user/twitter/sam");
    }

    #[test]
    fn test_request_with_query() {
        let req = Request::new("/post/twitter/123?page=2&count=50");
        assert_eq!(req.get_query("page"), Some("2"));
        assert_eq!(req.get_query("count"), Some("50"));
        assert_eq!(req.get_query("missing"), None);
    }
}
