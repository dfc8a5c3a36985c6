use serde::Deserialize;

/// Matches requested per player. The upstream list is most-recent-first.
pub const RECENT_MATCH_COUNT : usize = 5;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct MatchDto {
    pub metadata : MetadataDto,
    pub info : InfoDto,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct MetadataDto {
    pub match_id : String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct InfoDto {
    pub game_creation : i64,     // epoch millis
    pub game_duration : i64,     // seconds
    pub participants : Vec<ParticipantDto>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct ParticipantDto {
    pub puuid : String,
    pub summoner_name : String,
    pub riot_id_game_name : String,
    pub champion_name : String,
    pub champ_level : i32,
    pub win : bool,
    pub kills : i32,
    pub deaths : i32,
    pub assists : i32,
    pub neutral_minions_killed : i32,
    pub total_minions_killed : i32,
    pub summoner1_id : i64,
    pub summoner2_id : i64,
    pub perks : PerksDto,
    pub item0 : i64,
    pub item1 : i64,
    pub item2 : i64,
    pub item3 : i64,
    pub item4 : i64,
    pub item5 : i64,
    pub item6 : i64,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct PerksDto {
    pub styles : Vec<PerkStyleDto>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct PerkStyleDto {
    pub style : i64,    // rune tree id; primary first, then secondary
}

impl MatchDto {

    /// The first participant whose puuid equals `puuid`.
    pub fn participant(&self, puuid : &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }
}

impl ParticipantDto {

    /// Item ids in slot order 0 through 6. A zero marks an empty slot.
    pub fn items(&self) -> [i64; 7] {
        [self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6]
    }

    /// Rune tree id of the given style slot (0 = primary, 1 = secondary).
    pub fn perk_style(&self, slot : usize) -> Option<i64> {
        self.perks.styles.get(slot).map(|s| s.style)
    }

    /// The riot id name if the payload has one, otherwise the legacy summoner name.
    pub fn display_name(&self) -> &str {
        if self.riot_id_game_name.is_empty() { &self.summoner_name } else { &self.riot_id_game_name }
    }

    pub fn creep_score(&self) -> i32 {
        self.neutral_minions_killed + self.total_minions_killed
    }
}

pub fn ids_by_puuid_uri(puuid : &str, start : usize, count : usize) -> String {
    format!("/lol/match/v5/matches/by-puuid/{}/ids?start={}&count={}",
        urlencoding::encode(puuid), start, count)
}

pub fn match_by_id_uri(match_id : &str) -> String {
    format!("/lol/match/v5/matches/{}", urlencoding::encode(match_id))
}
