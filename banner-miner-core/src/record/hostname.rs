use crate::record::NONE;

/// Project and source language derived from a referrer host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostClass {
    pub project: String,
    pub source_language: String,
}

impl HostClass {
    fn new(project: &str, source_language: &str) -> Self {
        Self {
            project: project.to_string(),
            source_language: source_language.to_string(),
        }
    }
}

/// Classifies a Wikimedia-family hostname.
///
/// - `wikimediafoundation.org` -> (`wikimediafoundation`, `wikimediafoundation`)
/// - `pl.wikipedia.org`        -> (`wikipedia`, `pl`)
/// - `commons.wikimedia.org`   -> (`commons`, `en`)
///
/// `*.wikimedia.org` sites carry the project in the first label and no
/// language signal, so they fall back to English.
pub fn classify_host(host: Option<&str>) -> HostClass {
    let Some(host) = host.filter(|h| !h.is_empty()) else {
        return HostClass::new(NONE, NONE);
    };

    let labels: Vec<&str> = host.split('.').collect();

    if labels.len() <= 2 {
        return HostClass::new(labels[0], labels[0]);
    }

    if labels[1] == "wikimedia" {
        HostClass::new(labels[0], "en")
    } else {
        HostClass::new(labels[1], labels[0])
    }
}
