use chrono::{DateTime, Utc};

use crate::{
    category::{self, IconVariant},
    config::CardConfig,
    line,
    state::{RawDeparture, StateStore},
};

/// What the renderer is asked to draw: either a departure board or the
/// entity-not-found notice.
pub enum BoardModel {
    Board(DisplayModel),
    EntityNotFound { entity_id: String },
}

pub struct DisplayModel {
    pub station_name: String,
    pub title: String,
    pub rows: Vec<DisplayRow>,
}

impl DisplayModel {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct DisplayRow {
    pub time: String,
    /// Empty when relative display is disabled or the timestamp is
    /// missing; the renderer then falls back to `time`.
    pub relative: String,
    pub line_label: String,
    pub destination: String,
    pub platform: String,
    /// Uppercased category code, shown as the generic badge tooltip.
    pub category: String,
    pub category_color: String,
    pub icon: IconVariant,
    pub delay_minutes: Option<i64>,
}

impl DisplayRow {
    pub fn display_time(&self) -> &str {
        if self.relative.is_empty() {
            &self.time
        } else {
            &self.relative
        }
    }

    pub fn is_bus(&self) -> bool {
        self.icon == IconVariant::Bus
    }

    pub fn is_tram(&self) -> bool {
        self.icon == IconVariant::Tram
    }
}

/// Derive the display model for one card from the host's state store.
/// Rebuilt from scratch on every render cycle; row order follows input
/// order with truncation only. Total for any input.
pub fn build(states: &StateStore, config: &CardConfig, now: DateTime<Utc>) -> BoardModel {
    let Some(state) = states.get(&config.entity) else {
        return BoardModel::EntityNotFound {
            entity_id: config.entity.clone(),
        };
    };

    let attrs = &state.attributes;

    let station_name = attrs
        .station
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| attrs.friendly_name.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or(&config.title)
        .to_string();

    let rows = attrs
        .departures()
        .iter()
        .take(config.row_limit())
        .map(|value| row(&RawDeparture::from_value(value), config, now))
        .collect();

    BoardModel::Board(DisplayModel {
        station_name,
        title: config.title.clone(),
        rows,
    })
}

fn row(raw: &RawDeparture, config: &CardConfig, now: DateTime<Utc>) -> DisplayRow {
    let timestamp = raw.timestamp.as_deref().unwrap_or("");

    let relative = if config.show_relative {
        crate::timefmt::format_relative(timestamp, now)
    } else {
        String::new()
    };

    let line_label = line::resolve(raw);
    let category = raw.category.as_deref().unwrap_or("").to_uppercase();
    let style = category::classify(&category, &line_label, &config.line_colors);

    DisplayRow {
        time: crate::timefmt::format_absolute(timestamp),
        relative,
        line_label,
        destination: raw.to.clone().unwrap_or_default(),
        platform: raw.platform.clone().unwrap_or_default(),
        category,
        category_color: style.color,
        icon: style.icon,
        delay_minutes: raw.delay.map(|d| d.round() as i64).filter(|d| *d > 0),
    }
}
