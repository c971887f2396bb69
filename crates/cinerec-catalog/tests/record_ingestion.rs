// Integration tests for record ingestion
//
// Exercises the path a real caller takes: deserialize a flat tabular
// payload with serde, validate it into a catalog, then browse it.

use cinerec_catalog::{Catalog, CatalogFilter, RawRecord, TitleKind, GENRES};

const PAYLOAD: &str = r#"[
    {
        "title": "El Hoyo",
        "year": "2019",
        "type": "película",
        "genre": "Ciencia ficción, Suspenso",
        "platform": "Netflix",
        "rating": 7.0,
        "overview": "Dos reclusos por nivel, una plataforma de comida que desciende."
    },
    {
        "title": "La Casa de Papel",
        "year": "2017",
        "type": "serie",
        "genre": "Crimen, Drama",
        "platform": "Netflix",
        "rating": 8.2
    },
    {
        "title": "Roma",
        "year": "2018",
        "type": "película",
        "genre": "Drama",
        "platform": "Netflix",
        "rating": 7.7
    }
]"#;

fn load_catalog() -> Catalog {
    let records: Vec<RawRecord> = serde_json::from_str(PAYLOAD).unwrap();
    Catalog::from_records(records).unwrap()
}

#[test]
fn json_rows_become_a_dense_catalog() {
    let catalog = load_catalog();
    assert_eq!(catalog.len(), 3);

    let hoyo = catalog.get(0).unwrap();
    assert_eq!(hoyo.kind, TitleKind::Movie);
    assert!(hoyo.overview.is_some());

    let casa = catalog.get(1).unwrap();
    assert_eq!(casa.kind, TitleKind::Series);
    assert_eq!(casa.indexable_text(), "La Casa de Papel");
}

#[test]
fn reload_reassigns_ids_from_positions() {
    let records: Vec<RawRecord> = serde_json::from_str(PAYLOAD).unwrap();
    let mut reversed = records.clone();
    reversed.reverse();

    let first = Catalog::from_records(records).unwrap();
    let second = Catalog::from_records(reversed).unwrap();

    assert_eq!(first.get(0).unwrap().title, "El Hoyo");
    assert_eq!(second.get(0).unwrap().title, "Roma");
}

#[test]
fn browse_by_known_genre() {
    let catalog = load_catalog();
    assert!(GENRES.contains(&"Drama"));

    let hits = catalog.filter(&CatalogFilter::new().with_genre("Drama"));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "La Casa de Papel");
    assert_eq!(hits[1].title, "Roma");
}

#[test]
fn title_resolution_matches_partial_queries() {
    let catalog = load_catalog();
    let hit = catalog.find_by_title("casa de papel").unwrap();
    assert_eq!(hit.id, 1);
}
