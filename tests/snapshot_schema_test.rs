//! The render snapshot's JSON shape is what external presenters consume.

use serde_json::{json, Value};

use tetris_sim::core::{FixedSequence, GameConfig, GameState};
use tetris_sim::types::{Command, PieceKind};

fn snapshot_json(state: &GameState<FixedSequence>) -> Value {
    serde_json::to_value(state.snapshot()).unwrap()
}

#[test]
fn test_top_level_fields() {
    let config = GameConfig {
        width: 6,
        height: 5,
        ..GameConfig::default()
    };
    let state = GameState::with_source(
        &config,
        FixedSequence::new(&[PieceKind::O, PieceKind::L]).unwrap(),
    )
    .unwrap();
    let v = snapshot_json(&state);

    let mut keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["active", "game_over", "grid", "height", "lines", "next", "paused", "score", "width"]
    );

    assert_eq!(v["width"], 6);
    assert_eq!(v["height"], 5);
    assert_eq!(v["grid"].as_array().unwrap().len(), 5);
    assert_eq!(v["grid"][0], json!([null, null, "O", "O", null, null]));
    assert_eq!(v["active"]["kind"], "O");
    assert_eq!(v["active"]["x"], 2);
    assert_eq!(v["active"]["y"], 0);
    assert_eq!(v["active"]["shape"]["size"], 2);
    assert_eq!(v["active"]["shape"]["cells"], json!([[true, true], [true, true]]));
    assert_eq!(v["next"]["kind"], "L");
    assert_eq!(v["next"]["color"], json!({ "r": 255, "g": 165, "b": 0 }));
    assert_eq!(v["paused"], false);
    assert_eq!(v["game_over"], false);
}

#[test]
fn test_shape_cells_cover_only_the_matrix() {
    let state = GameState::with_source(
        &GameConfig::default(),
        FixedSequence::new(&[PieceKind::T, PieceKind::I]).unwrap(),
    )
    .unwrap();
    let v = snapshot_json(&state);

    assert_eq!(v["active"]["shape"]["size"], 3);
    assert_eq!(
        v["active"]["shape"]["cells"],
        json!([[false, true, false], [true, true, true], [false, false, false]])
    );
    let next_rows = v["next"]["shape"]["cells"].as_array().unwrap();
    assert_eq!(next_rows.len(), 4);
    assert!(next_rows.iter().all(|row| row.as_array().unwrap().len() == 4));
    assert_eq!(next_rows[1], json!([true, true, true, true]));
}

#[test]
fn test_game_over_has_null_active() {
    let mut state = GameState::with_source(
        &GameConfig {
            width: 5,
            height: 4,
            ..GameConfig::default()
        },
        FixedSequence::repeat(PieceKind::O),
    )
    .unwrap();
    state.apply(Command::HardDrop);
    state.apply(Command::HardDrop);

    let v = snapshot_json(&state);
    assert_eq!(v["game_over"], true);
    assert_eq!(v["active"], Value::Null);
}

#[test]
fn test_command_names_are_camel_case() {
    let names: Vec<_> = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
        Command::HardDrop,
        Command::TogglePause,
        Command::Reset,
    ]
    .iter()
    .map(|c| serde_json::to_value(c).unwrap())
    .collect();

    assert_eq!(
        names,
        vec![
            json!("moveLeft"),
            json!("moveRight"),
            json!("softDrop"),
            json!("rotate"),
            json!("hardDrop"),
            json!("togglePause"),
            json!("reset"),
        ]
    );
}
