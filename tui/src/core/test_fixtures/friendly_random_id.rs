// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::{Rng, rngs::ThreadRng};

const INK_NAMES: [&str; 12] = [
    "sepia", "indigo", "carbon", "iron", "gall", "walnut", "sumi", "umber", "cobalt",
    "ochre", "sienna", "madder",
];

const NIB_NAMES: [&str; 12] = [
    "goose", "swan", "crow", "turkey", "eagle", "owl", "raven", "hawk", "heron", "gull",
    "duck", "falcon",
];

/// Something like `sepia-goose-042-<uuid>`. Readable in a `/tmp` listing, and unique
/// thanks to the trailing v4 uuid.
#[must_use]
pub fn generate_friendly_random_id() -> String {
    let mut rng: ThreadRng = rand::rng();

    let ink = INK_NAMES[rng.random_range(0..INK_NAMES.len())];
    let nib = NIB_NAMES[rng.random_range(0..NIB_NAMES.len())];
    let number: u16 = rng.random_range(0..1000);
    let uuid = uuid::Uuid::new_v4();

    format!("{ink}-{nib}-{number:03}-{uuid}")
}
