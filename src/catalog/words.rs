//! Word lists for human-readable product text.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Anders", "Astrid", "Bente", "Birgitte", "Carl", "Camilla", "Dorthe", "Emil",
    "Frederik", "Grace", "Hanne", "Ida", "Jens", "Johanne", "Karen", "Lars", "Mads", "Maja",
    "Niels", "Noah", "Oscar", "Pernille", "Rasmus", "Sofie", "Søren", "Thomas", "Ulla", "Viggo",
];

const LAST_NAMES: &[&str] = &[
    "Andersen", "Bach", "Christensen", "Dahl", "Eriksen", "Frandsen", "Hansen", "Holm", "Jensen",
    "Johansen", "Kristensen", "Larsen", "Lund", "Madsen", "Møller", "Nielsen", "Olsen",
    "Pedersen", "Poulsen", "Rasmussen", "Schmidt", "Sørensen", "Thomsen", "Vestergaard",
];

const WORDS: &[&str] = &[
    "ability", "account", "across", "agent", "animal", "answer", "arrive", "bring", "budget",
    "building", "career", "carry", "central", "choice", "common", "country", "daughter",
    "design", "develop", "during", "early", "economy", "energy", "evening", "everything",
    "factor", "finally", "garden", "general", "happen", "history", "image", "inside", "kitchen",
    "language", "leader", "little", "machine", "market", "material", "member", "method",
    "morning", "nature", "network", "notice", "office", "option", "painting", "partner",
    "people", "picture", "police", "popular", "private", "product", "quality", "reason",
    "record", "region", "result", "season", "second", "service", "simple", "single", "social",
    "south", "station", "student", "summer", "system", "timber", "theory", "travel", "voice",
    "water", "window", "within", "worker", "yellow",
];

/// Returns a random "First Last" name.
pub fn person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ada");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Jensen");
    format!("{first} {last}")
}

/// Returns a random capitalised sentence of four to eight words.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(4..=8);
    let words: Vec<&str> = (0..len)
        .filter_map(|_| WORDS.choose(&mut *rng).copied())
        .collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get(..1) {
        let upper = first.to_ascii_uppercase();
        text.replace_range(..1, &upper);
    }
    text.push('.');
    text
}
