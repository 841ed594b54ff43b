//! End-to-end checks of the push → coalesce → build → render path.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use transport_card::{build, render, BoardModel, CardConfig, FramePump, RenderScheduler, StateStore};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

fn config() -> CardConfig {
    serde_yaml::from_str("entity: sensor.zurich_departures").unwrap()
}

fn store(attributes: serde_json::Value) -> StateStore {
    serde_json::from_value(json!({
        "sensor.zurich_departures": { "attributes": attributes }
    }))
    .unwrap()
}

#[derive(Default)]
struct CountingPump {
    requests: usize,
}

impl FramePump for &mut CountingPump {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

#[test]
fn absent_entity_renders_an_escaped_not_found_notice() {
    let config: CardConfig = serde_yaml::from_str("entity: sensor.<missing>").unwrap();

    let model = build(&StateStore::new(), &config, now());
    let markup = render::render(&model, &config).unwrap();

    assert!(markup.contains("not found"));
    assert!(markup.contains("sensor.&lt;missing&gt;"));
    assert!(!markup.contains("sensor.<missing>"));
}

#[test]
fn single_departure_renders_line_relative_delay_and_destination() {
    let departure_time = (now() + Duration::minutes(5)).to_rfc3339();
    let states = store(json!({
        "station": "Zürich Oerlikon",
        "departures": [{
            "time": departure_time,
            "category": "S",
            "name": "S31 12345",
            "to": "Zürich HB",
            "delay": 3,
        }],
    }));

    let config = config();
    let model = build(&states, &config, now());
    let markup = render::render(&model, &config).unwrap();

    match &model {
        BoardModel::Board(board) => assert_eq!(board.rows.len(), 1),
        BoardModel::EntityNotFound { .. } => panic!("expected a board"),
    }
    assert!(markup.contains("S31"));
    assert!(markup.contains("in 5 min"));
    assert!(markup.contains("+3"));
    assert!(markup.contains("Zürich HB"));
}

#[test]
fn empty_departures_render_the_empty_notice_without_a_list() {
    let config = config();
    let model = build(&store(json!({ "departures": [] })), &config, now());

    match &model {
        BoardModel::Board(board) => assert!(board.is_empty()),
        BoardModel::EntityNotFound { .. } => panic!("expected a board"),
    }

    let markup = render::render(&model, &config).unwrap();
    assert!(markup.contains("No upcoming departures"));
    assert!(!markup.contains("<li"));
}

#[test]
fn rapid_pushes_coalesce_into_one_render_of_the_last_snapshot() {
    let mut pump = CountingPump::default();
    let mut scheduler = RenderScheduler::new(&mut pump);

    for station in ["First push", "Second push", "Third push"] {
        scheduler.push(Arc::new(store(json!({ "station": station }))));
    }

    let markup = scheduler.fire(&config(), now()).unwrap();

    assert_eq!(pump.requests, 1);
    assert!(markup.contains("Third push"));
    assert!(!markup.contains("First push"));
}
