//! Renders one match from the tracked player's point of view as a
//! two-row table: result and duration, name with spells and runes,
//! score line, champion and farm, then the inventory underneath.
//!
//! Rendering is pure. Icons are resolved beforehand and passed in
//! so the same inputs always produce the same bytes.

use askama::Template;

use crate::lol_api::{MatchDto, ParticipantDto};
use crate::util::round2;

/// Icon urls for one participant. An empty string renders as a blank slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIcons {
    pub spells : [String; 2],
    pub perks : [String; 2],     // primary tree, secondary tree
    pub items : [String; 7],
}

/// Game length in minutes.
pub fn minutes(duration_secs : i64) -> f64 {
    round2(duration_secs as f64 / 60.0)
}

/// `(kills + assists) / deaths`, with deaths floored to one.
pub fn kda(kills : i32, deaths : i32, assists : i32) -> f64 {
    round2(f64::from(kills + assists) / f64::from(deaths.max(1)))
}

/// `count` per minute of game time, zero for a zero-length game.
pub fn per_minute(count : i32, duration_secs : i64) -> f64 {
    if duration_secs <= 0 {
        return 0.0;
    }
    round2(f64::from(count) / (duration_secs as f64 / 60.0))
}

fn played_on(game_creation_ms : i64) -> Option<String> {
    if game_creation_ms <= 0 {
        return None;
    }
    chrono::DateTime::from_timestamp_millis(game_creation_ms)
        .map(|at| at.format("%Y-%m-%d").to_string())
}

#[derive(Template)]
#[template(path = "match_card.html")]
pub struct MatchCardTemplate<'a> {
    outcome : &'static str,
    outcome_class : &'static str,
    minutes : f64,
    played_on : Option<String>,
    name : &'a str,
    header_icons : Vec<&'a str>,    // two spells, then both rune trees
    kills : i32,
    deaths : i32,
    assists : i32,
    kda : f64,
    champion : &'a str,
    level : i32,
    cs : i32,
    cs_per_minute : f64,
    item_icons : Vec<&'a str>,
}

impl<'a> MatchCardTemplate<'a> {

    pub fn new(match_dto : &MatchDto, participant : &'a ParticipantDto, icons : &'a MatchIcons) -> MatchCardTemplate<'a> {

        let duration = match_dto.info.game_duration;
        let (outcome, outcome_class) = if participant.win { ("Victory", "victory") } else { ("Defeat", "defeat") };
        let cs = participant.creep_score();

        MatchCardTemplate {
            outcome : outcome,
            outcome_class : outcome_class,
            minutes : minutes(duration),
            played_on : played_on(match_dto.info.game_creation),
            name : participant.display_name(),
            header_icons : icons.spells.iter().chain(icons.perks.iter()).map(String::as_str).collect(),
            kills : participant.kills,
            deaths : participant.deaths,
            assists : participant.assists,
            kda : kda(participant.kills, participant.deaths, participant.assists),
            champion : &participant.champion_name,
            level : participant.champ_level,
            cs : cs,
            cs_per_minute : per_minute(cs, duration),
            item_icons : icons.items.iter().map(String::as_str).collect(),
        }
    }
}

pub fn render_match(match_dto : &MatchDto, participant : &ParticipantDto, icons : &MatchIcons) -> askama::Result<String> {
    MatchCardTemplate::new(match_dto, participant, icons).render()
}
