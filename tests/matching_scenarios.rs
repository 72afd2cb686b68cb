//! End-to-end matching behaviour through the public library API.
//!
//! Covers the reference scenarios for both matchers plus the properties every
//! configuration must hold: single-name suppression, case and accent folding,
//! regex aliases and studio hierarchy resolution.

use scene_matcher::matching::{StringMatcherOptions, WordMatcherOptions};
use scene_matcher::{
    extract_actors, extract_labels, extract_studios, EntityCatalog, EntityId, Extractor,
    MatchStrategy, MatchableItem, Matcher, MatcherConfig, StudioHierarchy, StudioHierarchyLink,
};

fn string_matcher(ignore_single_names: bool) -> MatchStrategy {
    MatchStrategy::from_config(&MatcherConfig::String(StringMatcherOptions {
        ignore_single_names,
        ..StringMatcherOptions::default()
    }))
    .unwrap()
}

fn word_matcher(ignore_single_names: bool) -> MatchStrategy {
    MatchStrategy::from_config(&MatcherConfig::Word(WordMatcherOptions {
        ignore_single_names,
        ..WordMatcherOptions::default()
    }))
    .unwrap()
}

fn all_matchers(ignore_single_names: bool) -> Vec<MatchStrategy> {
    vec![
        string_matcher(ignore_single_names),
        word_matcher(ignore_single_names),
    ]
}

fn item(id: &str, name: &str, aliases: &[&str]) -> MatchableItem {
    MatchableItem::new(id, name, aliases)
}

fn matches(m: &MatchStrategy, item: &MatchableItem, target: &str) -> bool {
    m.is_matching_item(item, target, MatchableItem::inputs)
}

#[test]
fn test_single_surname_is_ignored() {
    for m in all_matchers(true) {
        assert!(
            !matches(&m, &item("k", "Kassidy", &[]), "jill kassidy swallowed"),
            "{} matcher matched a single name",
            m.name()
        );
    }
}

#[test]
fn test_full_name_matches() {
    for m in all_matchers(true) {
        assert!(matches(&m, &item("jk", "Jill Kassidy", &[]), "jill kassidy swallowed"));
    }
}

#[test]
fn test_multi_word_alias_matches() {
    for m in all_matchers(true) {
        assert!(matches(&m, &item("kr", "Kali Roses", &["Kali Rose"]), "Kali Rose - Scene"));
    }
}

#[test]
fn test_single_first_name_is_ignored() {
    for m in all_matchers(true) {
        assert!(!matches(&m, &item("k", "kali", &[]), "Swallowed - Kali Rose"));
    }
}

#[test]
fn test_single_word_label_when_allowed() {
    for m in all_matchers(false) {
        assert!(matches(&m, &item("anal", "Anal", &[]), "Layla Love All Anal Blonde"));
    }
}

#[test]
fn test_parent_studio_excluded() {
    let studios = vec![item("vixen", "VIXEN", &[]), item("blacked", "BLACKED", &[])];
    let hierarchy = StudioHierarchy::from_links(vec![
        StudioHierarchyLink::new("vixen", None),
        StudioHierarchyLink::new("blacked", Some(EntityId::new("vixen"))),
    ]);
    let path = "/mnt/media/Networks/VIXEN Media Group/BLACKED/BLACKED - S2018E0520 - Alina Lopez - Seduced By My Best Friend's Boyfriend.mp4";

    for m in all_matchers(false) {
        let ids = extract_studios(&m, path, &studios, &hierarchy);
        assert_eq!(ids, vec![EntityId::new("blacked")], "{} matcher", m.name());

        // Without the link both studios are kept
        let unlinked = extract_studios(&m, path, &studios, &StudioHierarchy::new());
        assert_eq!(unlinked.len(), 2, "{} matcher", m.name());
    }
}

#[test]
fn test_names_next_to_punctuation() {
    let jill = item("jk", "Jill Kassidy", &[]);
    let targets = [
        "Jill Kassidy, Alina Lopez - Scene",
        "(Jill Kassidy) scene",
        "[Jill Kassidy] scene",
        "{Jill Kassidy}",
        "Studio/Jill Kassidy - Scene.mp4",
        "Jill Kassidy - Scene",
    ];

    for m in all_matchers(false) {
        for target in targets {
            assert!(matches(&m, &jill, target), "{} matcher missed '{target}'", m.name());
        }
    }
}

#[test]
fn test_single_word_names_never_match_when_ignored() {
    let names = ["Anal", "Blonde", "BLACKED", "Zoé", "jill"];
    let targets = [
        "Anal Blonde BLACKED zoe jill",
        "anal.blonde.blacked.zoe.jill.mp4",
        "/anal/blonde/blacked/",
        "",
    ];

    for m in all_matchers(true) {
        for name in names {
            let it = item("x", name, &[]);
            for target in targets {
                assert!(!matches(&m, &it, target), "'{name}' matched '{target}'");
            }
        }
    }
}

#[test]
fn test_case_and_accent_insensitive() {
    for m in all_matchers(false) {
        assert!(matches(&m, &item("t", "teest", &[]), "téèst"));
        assert!(matches(&m, &item("z", "Zoé Doll", &[]), "ZOE DOLL in the kitchen"));
        assert!(matches(&m, &item("a", "Ana Foxxx", &[]), "ÀNA FOXXX"));
    }
}

#[test]
fn test_regex_alias_matches_raw_text() {
    let pattern_item = item("jk", "Jill Kassidy", &["regex:j(ill)?[._ ]?kassidy"]);
    for m in all_matchers(true) {
        assert!(matches(&m, &pattern_item, "JKassidy_1080p"));
        assert!(matches(&m, &pattern_item, "J.KASSIDY"));
        assert!(!matches(&m, &pattern_item, "kassidy only"));
    }
}

#[test]
fn test_regex_alias_exempt_from_single_name_rule() {
    let single = item("anal", "Anal", &["regex:\\banal\\b"]);
    for m in all_matchers(true) {
        assert!(matches(&m, &single, "Layla Love All Anal Blonde"));
    }
}

#[test]
fn test_bad_regex_alias_only_skips_that_alias() {
    let it = item("kr", "Kali Roses", &["regex:(kali", "Kali Rose"]);
    assert_eq!(it.aliases.len(), 1);
    for m in all_matchers(true) {
        assert!(matches(&m, &it, "Kali Rose - Scene"));
    }
}

#[test]
fn test_filter_is_idempotent() {
    let items = vec![
        item("anal", "Anal", &[]),
        item("layla", "Layla Love", &[]),
        item("blonde", "Blonde", &[]),
        item("aab", "All Anal Blonde", &[]),
    ];
    let target = "Layla.Love.All.Anal.Blonde.XXX.mp4";

    for m in all_matchers(false) {
        let first = m.filter_matching_items(&items, target, MatchableItem::inputs, None);
        let second = m.filter_matching_items(&items, target, MatchableItem::inputs, None);
        assert_eq!(first, second);
    }
}

#[test]
fn test_extractors_return_ids_in_order() {
    let m = word_matcher(true);
    let actors = vec![
        item("alina", "Alina Lopez", &[]),
        item("jill", "Jill Kassidy", &["regex:jkassidy"]),
    ];
    let labels = vec![item("bg", "Boy Girl", &[]), item("pov", "POV", &[])];

    let title = "[POV] Jill.Kassidy & Alina-Lopez Boy_Girl";
    assert_eq!(
        extract_actors(&m, title, &actors),
        vec![EntityId::new("alina"), EntityId::new("jill")]
    );
    // POV is a single word and the matcher ignores single names
    assert_eq!(extract_labels(&m, title, &labels), vec![EntityId::new("bg")]);
}

#[test]
fn test_extractor_over_catalog() {
    let catalog = EntityCatalog::from_json(
        r#"{
            "version": "1.0.0",
            "actors": [
                {"id": "alina", "name": "Alina Lopez"},
                {"id": "kali", "name": "Kali Roses", "aliases": ["Kali Rose"]}
            ],
            "labels": [
                {"id": "anal", "name": "Anal"},
                {"id": "blonde", "name": "Blonde"}
            ],
            "studios": [
                {"id": "vixen", "name": "VIXEN", "aliases": ["Vixen Media Group"]},
                {"id": "blacked", "name": "BLACKED", "parent": "vixen"},
                {"id": "raw", "name": "Blacked Raw", "parent": "blacked"}
            ]
        }"#,
    )
    .unwrap();
    let m = word_matcher(false);
    let extractor = Extractor::new(&m, &catalog);

    let found = extractor.all("/Networks/Vixen Media Group/Blacked Raw/Kali.Rose.Blonde.mp4");
    assert_eq!(found.actors, vec![EntityId::new("kali")]);
    assert_eq!(found.labels, vec![EntityId::new("blonde")]);
    assert_eq!(found.studios, vec![EntityId::new("raw")]);
}

#[test]
fn test_matchers_are_shareable_across_threads() {
    let m = std::sync::Arc::new(word_matcher(false));
    let actors = std::sync::Arc::new(vec![item("alina", "Alina Lopez", &[])]);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let m = std::sync::Arc::clone(&m);
            let actors = std::sync::Arc::clone(&actors);
            std::thread::spawn(move || extract_actors(&*m, &format!("Alina.Lopez.Part{i}.mp4"), &actors))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![EntityId::new("alina")]);
    }
}
