use serde::Serialize;

/// What the host's discoverable-cards registry wants to know about this
/// card. Registration itself is host glue; this crate only exports the
/// value instead of mutating any shared registry at load time.
#[derive(Serialize, Clone, Copy)]
pub struct CardDescriptor {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: bool,
}

pub fn card_descriptor() -> CardDescriptor {
    CardDescriptor {
        card_type: "swiss-transport-card",
        name: "Swiss Transport departures",
        description: "Display next departures from a Swiss station (uses swiss_transport sensor)",
        preview: false,
    }
}

/// Rough height in host grid units.
pub fn card_size() -> u32 {
    3
}
