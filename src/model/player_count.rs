use crate::model::enums::ResultCode;
use serde::Deserialize;

/// `GetNumberOfCurrentPlayers` wraps its payload in a `response` object.
#[derive(Deserialize, Debug)]
pub struct RawPlayerCountEnvelope {
    pub response: RawPlayerCount,
}

#[derive(Deserialize, Debug)]
pub struct RawPlayerCount {
    pub result: i32,
    pub player_count: Option<u64>,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PlayerCount {
    pub result: ResultCode,
    pub player_count: u64,
}

impl RawPlayerCountEnvelope {
    /// A successful result without a count is not something we can report on.
    pub fn validate(self) -> Result<PlayerCount, String> {
        let result = ResultCode::from_raw(self.response.result);
        match (result.is_ok(), self.response.player_count) {
            (true, Some(player_count)) => Ok(PlayerCount {
                result,
                player_count,
            }),
            (true, None) => Err("response has result OK but no player_count".to_owned()),
            (false, player_count) => Ok(PlayerCount {
                result,
                player_count: player_count.unwrap_or(0),
            }),
        }
    }
}
