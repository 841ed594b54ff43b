use askama::Template;
use eyre::Result;

use crate::{
    config::CardConfig,
    layout::{BoardModel, DisplayModel},
};

#[derive(Template)]
#[template(path = "card.html")]
struct CardTemplate<'a> {
    model: &'a DisplayModel,
    config: &'a CardConfig,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    entity_id: &'a str,
}

/// Render a board model to self-contained markup. Pure: the same model
/// always yields byte-identical output. Askama's HTML auto-escaping
/// covers every interpolated value, so no departure-supplied string
/// reaches the output unescaped; the only fixed raw content is the
/// card's own style block and SVG path data.
pub fn render(model: &BoardModel, config: &CardConfig) -> Result<String> {
    let markup = match model {
        BoardModel::Board(model) => CardTemplate { model, config }.render()?,
        BoardModel::EntityNotFound { entity_id } => NotFoundTemplate { entity_id }.render()?,
    };

    Ok(markup)
}
