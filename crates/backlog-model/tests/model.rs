//! Tests for backlog-model types.

use backlog_model::{
    AuthToken, ColumnMapping, IgdbGame, IgdbGenre, MappingError, REPORT_COLUMNS,
    infinite_backlog_mapping,
};

#[test]
fn mapping_deserializes_from_json() {
    let json = r#"{"source_names":["Game"],"target_names":["Game Name"]}"#;
    let mapping: ColumnMapping = serde_json::from_str(json).expect("deserialize mapping");

    assert_eq!(mapping.source_names(), ["Game"]);
    assert_eq!(mapping.target_names(), ["Game Name"]);
}

#[test]
fn mapping_deserialization_enforces_equal_lengths() {
    let json = r#"{"source_names":["Game","Status"],"target_names":["Game Name"]}"#;
    let err = serde_json::from_str::<ColumnMapping>(json).unwrap_err();

    assert!(err.to_string().contains("2 source names but 1 target names"));
}

#[test]
fn mapping_serializes_round_trip() {
    let mapping = infinite_backlog_mapping();
    let json = serde_json::to_string(&mapping).expect("serialize mapping");
    let round: ColumnMapping = serde_json::from_str(&json).expect("deserialize mapping");

    assert_eq!(round, mapping);
}

#[test]
fn shipped_mapping_targets_report_columns() {
    let mapping = infinite_backlog_mapping();

    assert_eq!(mapping.target_names(), REPORT_COLUMNS);
}

#[test]
fn empty_mapping_is_valid() {
    let mapping = ColumnMapping::new(vec![], vec![]).expect("empty mapping");

    assert!(mapping.is_empty());
    assert_eq!(mapping.pairs().count(), 0);
}

#[test]
fn length_mismatch_reports_both_counts() {
    let result = ColumnMapping::new(vec![], vec!["Target".to_string()]);

    assert_eq!(
        result.unwrap_err(),
        MappingError::LengthMismatch {
            sources: 0,
            targets: 1
        }
    );
}

#[test]
fn game_deserializes_full_record() {
    let json = r#"{
        "id": 1234,
        "first_release_date": 1167177600,
        "franchises": [891],
        "game_modes": [1, 2],
        "genres": [4],
        "involved_companies": [228835],
        "keywords": [61, 182, 1231],
        "name": "Tekken 5: Dark Resurrection Online",
        "platforms": [9],
        "player_perspectives": [4],
        "tags": [1, 268435460],
        "themes": [1]
    }"#;
    let game: IgdbGame = serde_json::from_str(json).expect("deserialize game");

    assert_eq!(game.id, 1234);
    assert_eq!(game.first_release_date, Some(1_167_177_600));
    assert_eq!(game.game_modes, vec![1, 2]);
    assert_eq!(game.tags, vec![1, 268_435_460]);
    assert_eq!(game.name, "Tekken 5: Dark Resurrection Online");
}

#[test]
fn game_defaults_missing_lists() {
    let game: IgdbGame =
        serde_json::from_str(r#"{"id": 7, "name": "Bomberman 64"}"#).expect("deserialize game");

    assert_eq!(game.first_release_date, None);
    assert!(game.franchises.is_empty());
    assert!(game.themes.is_empty());
}

#[test]
fn genre_deserializes() {
    let genre: IgdbGenre =
        serde_json::from_str(r#"{"id": 2, "name": "Point-and-click"}"#).expect("genre");

    assert_eq!(
        genre,
        IgdbGenre {
            id: 2,
            name: "Point-and-click".to_string()
        }
    );
}

#[test]
fn auth_token_deserializes() {
    let token: AuthToken = serde_json::from_str(
        r#"{"access_token": "access12345token", "expires_in": 5587808, "token_type": "bearer"}"#,
    )
    .expect("token");

    assert_eq!(token.access_token, "access12345token");
    assert_eq!(token.expires_in, 5_587_808);
    assert_eq!(token.token_type, "bearer");
}
