use std::collections::HashMap;
use url::Url;

/// A URL-valued log field split into the parts the rule sets look at.
///
/// Every part is optional in practice: log fields hold `-` for a missing
/// referrer, relative paths, or truncated URLs. None of that is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub host: Option<String>,
    /// Path split on `/`. A leading `/` yields an empty first segment so
    /// positional lookups stay stable.
    pub path_segments: Vec<String>,
    /// Decoded query; the last occurrence of a repeated key wins.
    pub query: HashMap<String, String>,
}

impl ParsedUrl {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn path_segment(&self, index: usize) -> Option<&str> {
        self.path_segments.get(index).map(String::as_str)
    }
}

/// Decomposes a raw URL field into host, path segments and query mapping.
///
/// Host and path are taken as written: no lowercasing, no `.`/`..`
/// resolution and no re-encoding, so positional path lookups match the log.
pub fn parse_url(raw: &str) -> ParsedUrl {
    match split_authority(raw) {
        Some((host, rest)) => ParsedUrl {
            host: Some(host.to_string()).filter(|h| !h.is_empty()),
            ..parse_relative(rest)
        },
        None => parse_relative(raw),
    }
}

/// Raw host text and everything after the authority, for fields that parse
/// as a URL with a host.
fn split_authority(raw: &str) -> Option<(&str, &str)> {
    parse_absolute(raw)?.host_str()?;

    let (_, after_scheme) = raw.split_once("//")?;
    let end = after_scheme
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(after_scheme.len());
    let (authority, rest) = after_scheme.split_at(end);

    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = match host_port.strip_prefix('[') {
        Some(v6) => v6.split_once(']').map_or(v6, |(h, _)| h),
        None => host_port.split_once(':').map_or(host_port, |(h, _)| h),
    };

    Some((host, rest))
}

fn parse_absolute(raw: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(raw) {
        return Some(url);
    }

    // Scheme-relative ("//host/path") still names a host.
    if raw.starts_with("//") {
        return Url::parse(&format!("http:{raw}")).ok();
    }

    None
}

fn parse_relative(raw: &str) -> ParsedUrl {
    let without_fragment = raw.split_once('#').map_or(raw, |(before, _)| before);

    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    };

    ParsedUrl {
        host: None,
        path_segments: split_path(path),
        query: decode_query(query),
    }
}

fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').map(str::to_string).collect()
}

fn decode_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
