use serde::Deserialize;
use crate::lol_api::{ErrorKind, Result};

#[derive(Deserialize, Debug)]
#[serde(rename_all="camelCase")]
pub struct AccountDto {
    pub puuid : String,     // encrypted puuid
}

/// A player's `Name#Tag` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name : String,
    pub tag_line : String,
}

impl RiotId {

    /// Splits `identifier` on its first `#`. Both halves must be
    /// non-empty once surrounding whitespace is trimmed.
    pub fn parse(identifier : &str) -> Result<RiotId> {
        let invalid = || ErrorKind::InvalidRiotId(identifier.to_string());

        let (name, tag) = identifier.split_once('#').ok_or_else(invalid)?;
        let (name, tag) = (name.trim(), tag.trim());
        if name.is_empty() || tag.is_empty() {
            return Err(invalid().into());
        }

        Ok(RiotId {
            game_name : name.to_string(),
            tag_line : tag.to_string(),
        })
    }
}

pub fn by_riot_id_uri(riot_id : &RiotId) -> String {
    format!("/riot/account/v1/accounts/by-riot-id/{}/{}",
        urlencoding::encode(&riot_id.game_name),
        urlencoding::encode(&riot_id.tag_line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_tag() {
        let id = RiotId::parse("Faker#KR1").unwrap();
        assert_eq!(id.game_name, "Faker");
        assert_eq!(id.tag_line, "KR1");
    }

    #[test]
    fn rejects_missing_separator_or_empty_side() {
        for bad in ["Faker", "", "#KR1", "Faker#", "  #  "] {
            let err = RiotId::parse(bad).unwrap_err();
            match err.kind() {
                ErrorKind::InvalidRiotId(s) => assert_eq!(s, bad),
                other => panic!("unexpected kind {:?}", other),
            }
        }
    }

    #[test]
    fn only_the_first_separator_splits() {
        let id = RiotId::parse("a#b#c").unwrap();
        assert_eq!(id.game_name, "a");
        assert_eq!(id.tag_line, "b#c");
    }

    #[test]
    fn uri_encodes_both_parts() {
        let id = RiotId::parse("Hide on bush#KR 1").unwrap();
        assert_eq!(by_riot_id_uri(&id), "/riot/account/v1/accounts/by-riot-id/Hide%20on%20bush/KR%201");

        let id = RiotId::parse("a#b#c").unwrap();
        assert_eq!(by_riot_id_uri(&id), "/riot/account/v1/accounts/by-riot-id/a/b%23c");
    }
}
