// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookups against the shipped Korean table

use territory_names::names::join;
use territory_names::{embedded, LanguageId, LookupError, Ordinal, Unsupported};

#[test]
fn test_korea_has_single_name() {
    let names = embedded().expect("embedded dataset should load");
    let kor = names
        .lookup_code("KOR", LanguageId::KOREAN, None)
        .expect("KOR should resolve");
    assert_eq!(kor.primary, "대한민국");
    assert!(kor.alternates.is_empty());
    assert_eq!(kor.ordinal, 137);
}

#[test]
fn test_vatican_has_alternate() {
    let names = embedded().unwrap();
    let vat = names.lookup(Ordinal(0), LanguageId::KOREAN).unwrap();
    assert_eq!(vat.code, "VAT");
    assert_eq!(vat.primary, "바티칸 시국");
    assert_eq!(vat.alternates, vec!["교황청"]);
}

#[test]
fn test_international_is_last() {
    let names = embedded().unwrap();
    let last = Ordinal(names.territory_count() - 1);
    let aaa = names.lookup(last, LanguageId::KOREAN).unwrap();
    assert_eq!(aaa.code, "AAA");
    assert_eq!(aaa.all_names(), vec!["국제", "세계", "지구"]);
}

#[test]
fn test_every_ordinal_has_primary_name() {
    let names = embedded().unwrap();
    for ordinal in 0..names.territory_count() {
        let name = names
            .lookup(Ordinal(ordinal), LanguageId::KOREAN)
            .unwrap_or_else(|e| panic!("ordinal {} failed: {}", ordinal, e));
        assert!(!name.primary.is_empty(), "ordinal {} has empty name", ordinal);
        assert!(name.alternates.iter().all(|alt| !alt.is_empty()));
    }
}

#[test]
fn test_table_length_matches_territories() {
    let names = embedded().unwrap();
    for (language, _) in names.languages() {
        let table = names.table(language).unwrap();
        assert_eq!(table.len(), names.territory_count(), "{} table", language);
    }
}

#[test]
fn test_entries_rejoin_exactly() {
    let names = embedded().unwrap();
    let table = names.table(LanguageId::KOREAN).unwrap();
    for (_, entry) in table.iter() {
        let raw = entry.as_str();
        assert!(!raw.starts_with('|') && !raw.ends_with('|'));
        assert_eq!(join(entry.names()), raw);
    }
}

#[test]
fn test_out_of_range_ordinal() {
    let names = embedded().unwrap();
    let count = names.territory_count();
    assert_eq!(
        names.lookup(Ordinal(count), LanguageId::KOREAN),
        Err(LookupError::OrdinalOutOfRange {
            ordinal: count,
            count
        })
    );
}

#[test]
fn test_language_without_table() {
    let names = embedded().unwrap();
    let ja = LanguageId::parse("ja").unwrap();
    assert_eq!(
        names.lookup(Ordinal(0), ja),
        Err(LookupError::LanguageUnsupported {
            language: ja,
            reason: Unsupported::NotInDataset,
        })
    );
}

#[test]
fn test_subdivision_resolution() {
    let names = embedded().unwrap();
    let kb = names
        .lookup_code("kb", LanguageId::KOREAN, None)
        .expect("KB is unique to Russia");
    assert_eq!(kb.code, "RU-KB");

    let sc = names
        .lookup_code("SC", LanguageId::KOREAN, Some("USA"))
        .unwrap();
    assert_eq!(sc.code, "US-SC");

    match names.lookup_code("SC", LanguageId::KOREAN, None) {
        Err(LookupError::AmbiguousTerritory { candidates, .. }) => {
            assert!(candidates.contains(&"US-SC".to_string()));
            assert!(candidates.contains(&"BR-SC".to_string()));
            assert!(candidates.contains(&"CN-SC".to_string()));
        }
        other => panic!("expected ambiguity, got {:?}", other),
    }
}

#[test]
fn test_parent_country() {
    let names = embedded().unwrap();
    let territories = names.territories();
    let ca = territories.ordinal_of("US-CA").unwrap();
    let usa = territories.ordinal_of("USA").unwrap();
    assert_eq!(territories.parent_of(ca), Some(usa));
    assert_eq!(territories.subdivisions_of(usa).len(), 51);
}

#[test]
fn test_concurrent_readers() {
    let names = embedded().unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                (0..names.territory_count())
                    .filter(|&i| names.lookup(Ordinal(i), LanguageId::KOREAN).is_ok())
                    .count()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), names.territory_count());
    }
}
