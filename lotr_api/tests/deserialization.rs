use lotr_api::types::{Envelope, Movie, Quote};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_movies_full() {
    let json = load_fixture("movies.json");
    let resp: Envelope<Movie> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.docs.len(), 4);
    assert_eq!(resp.total, 4);
    assert_eq!(resp.pages, 1);
    assert!(resp.success);
    assert!(resp.message.is_none());

    let towers = &resp.docs[1];
    assert_eq!(towers.id, "5cd95395de30eff6ebccde5b");
    assert_eq!(towers.name, "The Two Towers");
    assert_eq!(towers.runtime_in_minutes, 179);
    assert_eq!(towers.budget_in_millions, 94.0);
    assert_eq!(towers.box_office_revenue_in_millions, 926.0);
    assert_eq!(towers.academy_award_nominations, 6);
    assert_eq!(towers.academy_award_wins, 2);
    assert_eq!(towers.rotten_tomatoes_score, 96.0);

    assert_eq!(resp.docs[3].rotten_tomatoes_score, 64.9);
}

#[test]
fn deserialize_movies_keeps_server_order() {
    let json = load_fixture("movies.json");
    let resp: Envelope<Movie> = serde_json::from_str(&json).unwrap();
    let names: Vec<&str> = resp.docs.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "The Lord of the Rings Series",
            "The Two Towers",
            "The Return of the King",
            "The Unexpected Journey"
        ]
    );
}

#[test]
fn deserialize_movie_empty() {
    let json = load_fixture("movie_empty.json");
    let resp: Envelope<Movie> = serde_json::from_str(&json).unwrap();
    assert!(resp.is_empty());
    assert_eq!(resp.total, 0);
    assert!(resp.success);
}

#[test]
fn deserialize_quotes_ignores_duplicate_id() {
    let json = load_fixture("quotes.json");
    let resp: Envelope<Quote> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.len(), 5);
    assert_eq!(resp.total, 873);
    assert_eq!(resp.page, 0);

    let first = &resp.docs[0];
    assert_eq!(first.id, "5cd96e05de30eff6ebcce7e9");
    assert_eq!(first.dialog, "Deagol!");
    assert_eq!(first.movie, "5cd95395de30eff6ebccde5d");
    assert_eq!(first.character, "5cd99d4bde30eff6ebccfe9e");
}

#[test]
fn deserialize_missing_pagination_defaults_to_zero() {
    let json = r#"{"docs": []}"#;
    let resp: Envelope<Movie> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.total, 0);
    assert_eq!(resp.limit, 0);
    assert_eq!(resp.page, 0);
    assert!(resp.success);
}

#[test]
fn deserialize_missing_docs_returns_error() {
    let json = r#"{"total": 1, "limit": 1000, "offset": 0, "page": 1, "pages": 1}"#;
    let result = serde_json::from_str::<Envelope<Movie>>(json);
    assert!(result.is_err());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"docs": not valid json}"#;
    let result = serde_json::from_str::<Envelope<Movie>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn failure_envelope_serializes_message() {
    let env: Envelope<Movie> = Envelope::failure("There is no movie with id x");
    let value = serde_json::to_value(&env).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "There is no movie with id x");
    assert_eq!(value["docs"], serde_json::json!([]));
}

#[test]
fn reject_keeps_decoded_data() {
    let json = load_fixture("movies.json");
    let resp: Envelope<Movie> = serde_json::from_str(&json).unwrap();
    let rejected = resp.reject("nope");
    assert!(!rejected.success);
    assert_eq!(rejected.message.as_deref(), Some("nope"));
    assert_eq!(rejected.len(), 4);
    assert_eq!(rejected.total, 4);
}
