use crate::record::{HostClass, NONE, classify_host};
use pretty_assertions::assert_eq;

fn class(project: &str, source_language: &str) -> HostClass {
    HostClass {
        project: project.to_string(),
        source_language: source_language.to_string(),
    }
}

#[test]
fn absent_host_is_none_none() {
    assert_eq!(classify_host(None), class(NONE, NONE));
}

#[test]
fn empty_host_is_none_none() {
    assert_eq!(classify_host(Some("")), class(NONE, NONE));
}

#[test]
fn two_label_host_uses_first_label_for_both() {
    assert_eq!(
        classify_host(Some("wikimediafoundation.org")),
        class("wikimediafoundation", "wikimediafoundation")
    );
}

#[test]
fn single_label_host_uses_it_for_both() {
    assert_eq!(
        classify_host(Some("localhost")),
        class("localhost", "localhost")
    );
}

#[test]
fn wikimedia_umbrella_falls_back_to_english() {
    assert_eq!(
        classify_host(Some("commons.wikimedia.org")),
        class("commons", "en")
    );
    assert_eq!(
        classify_host(Some("species.wikimedia.org")),
        class("species", "en")
    );
}

#[test]
fn language_project_host_splits_labels() {
    assert_eq!(
        classify_host(Some("en.wikinews.org")),
        class("wikinews", "en")
    );
    assert_eq!(
        classify_host(Some("pl.wikipedia.org")),
        class("wikipedia", "pl")
    );
}

#[test]
fn mobile_host_still_reads_second_label() {
    assert_eq!(
        classify_host(Some("de.m.wikipedia.org")),
        class("m", "de")
    );
}
