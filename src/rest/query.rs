use std::borrow::Cow;
use std::fmt::Display;

/// Keys the upstream expects exactly as written.
const VERBATIM_KEYS: [&str; 2] = ["offset", "limit"];

/// Offset/limit pair passed straight through to the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// First page with the given size.
    pub fn with_limit(limit: u32) -> Self {
        Self { offset: 0, limit }
    }
}

/// Ordered query parameters with keys already in the upstream's casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(self, offset: u32) -> Self {
        self.param("offset", offset)
    }

    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit)
    }

    pub fn page(self, page: Page) -> Self {
        self.offset(page.offset).limit(page.limit)
    }

    /// Append a parameter, rewriting a snake_case key to lowerCamelCase.
    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        self.pairs
            .push((normalize_key(key).into_owned(), value.to_string()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Upstream key for a local parameter name. `offset` and `limit` pass through.
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    if VERBATIM_KEYS.contains(&key) || !key.contains('_') {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(to_lower_camel(key))
    }
}

/// `listed_only` -> `listedOnly`.
pub fn to_lower_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
