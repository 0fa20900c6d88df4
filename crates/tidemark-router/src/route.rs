//! Route template compilation and matching.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Result, RouterError};
use crate::params::{decode, RouteParams};

/// Matches `:name` placeholder tokens inside a template.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":(\w+)").unwrap());

/// Default character class for a placeholder segment.
const DEFAULT_SEGMENT: &str = "([a-zA-Z0-9_\\+\\-%]+)";

/// One compiled URL template, evaluated eagerly against the request path
/// known at registration time.
///
/// A template mixes literal text with `:name` placeholders. Each placeholder
/// matches one `[a-zA-Z0-9_+\-%]+` segment unless a constraint supplies its
/// own character class. The compiled matcher is anchored at both ends and
/// tolerates one optional trailing slash, so `/user/:u` accepts both
/// `/user/bob` and `/user/bob/`.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: String,
    matched: bool,
    params: RouteParams,
}

impl Route {
    /// Compiles `pattern` and evaluates it against `request_path`.
    ///
    /// Placeholder captures are URL-decoded and zipped with placeholder
    /// names in left-to-right template order; `static_params` are overlaid
    /// afterwards and win on key collision. A repeated placeholder name is
    /// not de-duplicated: its later capture overwrites the earlier one.
    ///
    /// An empty pattern compiles to a matcher that accepts only `/`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`] if a constraint fails to
    /// compile as a regex, or if it introduces capture groups of its own —
    /// extra groups would shift every capture to the right of the
    /// placeholder it belongs to. Non-capturing `(?:…)` groups are fine.
    pub fn compile(
        pattern: &str,
        request_path: &str,
        static_params: &[(&str, &str)],
        constraints: &[(&str, &str)],
    ) -> Result<Self> {
        let constraints: HashMap<&str, &str> = constraints.iter().copied().collect();

        let names: Vec<String> = PLACEHOLDER
            .captures_iter(pattern)
            .map(|caps| caps[1].to_string())
            .collect();

        let source = PLACEHOLDER.replace_all(pattern, |caps: &Captures<'_>| {
            match constraints.get(&caps[1]) {
                Some(class) => format!("({class})"),
                None => DEFAULT_SEGMENT.to_string(),
            }
        });

        let matcher =
            Regex::new(&format!("^{source}/?$")).map_err(|err| RouterError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: err.to_string(),
            })?;

        // One capture group per placeholder, in template order.
        if matcher.captures_len() != names.len() + 1 {
            return Err(RouterError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "constraints must not contain capture groups".to_string(),
            });
        }

        let mut route = Self {
            pattern: pattern.to_string(),
            matched: false,
            params: RouteParams::new(),
        };

        if let Some(caps) = matcher.captures(request_path) {
            for (index, name) in names.iter().enumerate() {
                if let Some(value) = caps.get(index + 1) {
                    route.params.insert(name.as_str(), decode(value.as_str()));
                }
            }
            for &(key, value) in static_params {
                route.params.insert(key, value);
            }
            route.matched = true;
        }

        Ok(route)
    }

    /// The raw template string this route was registered under.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the template matched the request path it was compiled against.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// The merged parameter mapping. Empty unless matched.
    pub fn params(&self) -> &RouteParams {
        &self.params
    }
}
