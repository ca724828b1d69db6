use crate::player::Player;
use crate::player::Tally;
use serde::Serialize;

/// Final standings for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub name: String,
    pub tally: Tally,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            tally: *player.tally(),
        }
    }
}

/// Final standings for both seats, in seat order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub left: Standing,
    pub right: Standing,
}

impl Summary {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
