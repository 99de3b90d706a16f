//! Player identity as supplied by tournament organizers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single player, addressed the way the upstream provider addresses them.
///
/// Equality and hashing are structural over all four fields: the same
/// name/tag on a different shard is a different player. Identities are
/// created from caller input and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    /// In-game name (may contain spaces).
    pub name: String,
    /// Discriminator tag shown after the `#`.
    pub tag: String,
    /// Shard region, e.g. "ap", "eu", "na".
    pub region: String,
    /// Platform, e.g. "pc", "console".
    pub platform: String,
}

impl PlayerIdentity {
    pub fn new(
        name: impl Into<String>,
        tag: impl Into<String>,
        region: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            region: region.into(),
            platform: platform.into(),
        }
    }

    /// The canonical `name#tag` form used in logs and messages.
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.name, self.tag)
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.tag)
    }
}
