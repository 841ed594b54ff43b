use std::{sync::Arc, time::Duration};

use axum::{extract::State, response::Html, routing::get, Json, Router};
use chrono::Utc;
use eyre::{Context, Result};
use tokio::sync::{mpsc, RwLock};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    config::ConfigFile,
    descriptor::{card_descriptor, CardDescriptor},
    layout::BoardModel,
    render,
    scheduler::RenderScheduler,
    state::StateStore,
};

#[derive(Clone)]
struct AppState {
    markup: Arc<RwLock<String>>,
}

pub async fn serve(config_file: ConfigFile) -> Result<()> {
    let card = config_file.card.clone();

    // until the first snapshot lands the entity is, as far as this
    // card knows, not in the store
    let initial = render::render(
        &BoardModel::EntityNotFound {
            entity_id: card.entity.clone(),
        },
        &card,
    )?;
    let markup = Arc::new(RwLock::new(initial));

    let (frame_tx, frame_rx) = mpsc::unbounded_channel();
    let scheduler = RenderScheduler::new(frame_tx);

    tokio::spawn(board_task(
        scheduler,
        frame_rx,
        config_file,
        markup.clone(),
    ));

    let app = Router::new()
        .route("/", get(handle_card))
        .route("/card.json", get(handle_descriptor))
        .with_state(AppState { markup })
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    info!(port = 3001, "listening!");

    axum::Server::bind(&"0.0.0.0:3001".parse().unwrap())
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

/// Owns the scheduler. Snapshot pushes (state-file changes) and frame
/// callbacks are serialized on this one task, which is the card's sole
/// synchronization point.
async fn board_task(
    mut scheduler: RenderScheduler<mpsc::UnboundedSender<()>>,
    mut frames: mpsc::UnboundedReceiver<()>,
    config_file: ConfigFile,
    markup: Arc<RwLock<String>>,
) {
    let mut poll = tokio::time::interval(Duration::from_secs(1));
    let mut last_raw = String::new();

    loop {
        tokio::select! {
            _ = poll.tick() => {
                match read_states(&config_file.states_file) {
                    Ok((raw, states)) => {
                        if raw != last_raw {
                            last_raw = raw;
                            scheduler.push(Arc::new(states));
                        }
                    }
                    Err(error) => {
                        warn!(%error, path = %config_file.states_file, "failed to read state snapshot");
                    }
                }
            }
            Some(()) = frames.recv() => {
                if let Some(html) = scheduler.fire(&config_file.card, Utc::now()) {
                    *markup.write().await = html;
                }
            }
        }
    }
}

fn read_states(path: &str) -> Result<(String, StateStore)> {
    let text = std::fs::read_to_string(path).wrap_err("read states file")?;

    let bom = unicode_bom::Bom::from(text.as_bytes());
    let stripped = &text[bom.len()..];

    let jd = &mut serde_json::Deserializer::from_str(stripped);
    let states: StateStore = serde_path_to_error::deserialize(jd)?;

    Ok((text, states))
}

async fn handle_card(State(state): State<AppState>) -> Html<String> {
    Html(state.markup.read().await.clone())
}

async fn handle_descriptor() -> Json<CardDescriptor> {
    Json(card_descriptor())
}
