use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// One of the two networks bridged by the relayer.
///
/// Each side runs its own refresh task over fully independent cached state;
/// nothing is shared between the two.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChainSide {
    Home,
    Foreign,
}

impl ChainSide {
    pub const ALL: [ChainSide; 2] = [ChainSide::Home, ChainSide::Foreign];

    /// Prefix used for this side's environment variables.
    pub fn env_prefix(&self) -> &'static str {
        match self {
            ChainSide::Home => "HOME",
            ChainSide::Foreign => "FOREIGN",
        }
    }
}
