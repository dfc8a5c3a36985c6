//! Drives the lol api for a single search: identifier to puuid, puuid
//! to recent match ids, then each match to its rendered card. Every
//! failure is turned into text here so the page always renders.

mod errors;
pub use errors::*;

use crate::lol_api;
use crate::render::{self, page, MatchIcons};
use std::sync::Arc;

/// Cheap to clone; all clones share one `Context` and its reference cache.
#[derive(Debug, Clone)]
pub struct MatchHistory {
    context : Arc<lol_api::Context>,
}

impl MatchHistory {

    pub fn new(context : lol_api::Context) -> MatchHistory {
        MatchHistory {
            context : Arc::new(context),
        }
    }

    /// Renders the results body for `identifier`: a list of match cards,
    /// newest first, or the message for whichever step failed. A failed
    /// match only replaces its own card. Only a template failure is
    /// returned as an error.
    pub async fn lookup(&self, identifier : &str) -> Result<String> {

        let puuid = match self.context.resolve_account(identifier).await {
            Ok(puuid) => puuid,
            Err(e) => return Self::failure("resolve account", &Error::from(e)),
        };

        let match_ids = match self.list_recent_matches(&puuid).await {
            Ok(ids) => ids,
            Err(e) => return Self::failure("list recent matches", &e),
        };

        let mut fragments = Vec::with_capacity(match_ids.len());
        for match_id in &match_ids {
            let fragment = match self.render_match(match_id, &puuid).await {
                Ok(html) => html,
                Err(e) => Self::failure("render match", &e)?,
            };
            fragments.push(fragment);
        }

        Ok(page::match_list(&fragments)?)
    }

    /// The player's recent match ids, failing with `NoRecentMatches`
    /// when there are none.
    pub async fn list_recent_matches(&self, puuid : &str) -> Result<Vec<String>> {
        let ids = self.context.query_match_v5_ids_by_puuid(puuid).await?;
        if ids.is_empty() {
            return Err(ErrorKind::NoRecentMatches.into());
        }
        Ok(ids)
    }

    /// Fetches one match and renders it from the point of view of `puuid`.
    pub async fn render_match(&self, match_id : &str, puuid : &str) -> Result<String> {

        let match_dto = self.context.query_match_v5_by_id(match_id).await?;
        let participant = match_dto.participant(puuid)
            .ok_or_else(|| ErrorKind::ParticipantNotFound(Self::reported_id(&match_dto, match_id)))?;

        let icons = self.resolve_icons(participant).await;
        Ok(render::render_match(&match_dto, participant, &icons)?)
    }

    /// Looks up every icon shown for `participant`. An icon that can't be
    /// resolved is left blank rather than failing the whole card.
    pub async fn resolve_icons(&self, participant : &lol_api::ParticipantDto) -> MatchIcons {

        let (spell1, spell2, perk1, perk2) = tokio::join!(
            self.context.spell_icon(participant.summoner1_id),
            self.context.spell_icon(participant.summoner2_id),
            self.perk_style_icon(participant, 0),
            self.perk_style_icon(participant, 1),
        );

        let mut icons = MatchIcons {
            spells : [Self::or_blank(spell1), Self::or_blank(spell2)],
            perks : [Self::or_blank(perk1), Self::or_blank(perk2)],
            items : Default::default(),
        };

        for (slot, item_id) in participant.items().into_iter().enumerate() {
            let item = self.context.item_icon(item_id).await;
            icons.items[slot] = Self::or_blank(item.map(Option::unwrap_or_default));
        }

        icons
    }

    async fn perk_style_icon(&self, participant : &lol_api::ParticipantDto, slot : usize) -> lol_api::Result<String> {
        match participant.perk_style(slot) {
            Some(style) => self.context.perk_icon(style).await,
            None => Ok(String::new()),
        }
    }

    fn or_blank(icon : lol_api::Result<String>) -> String {
        icon.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "icon lookup failed");
            String::new()
        })
    }

    /// The id the match reports for itself, or the one it was fetched by.
    fn reported_id(match_dto : &lol_api::MatchDto, requested : &str) -> String {
        match match_dto.metadata.match_id.as_str() {
            "" => requested.to_string(),
            id => id.to_string(),
        }
    }

    fn failure(step : &str, e : &Error) -> Result<String> {
        let status = match e.kind() {
            ErrorKind::LolApi(lol_api::ErrorKind::UpstreamStatus(status)) => Some(status.as_u16()),
            _ => None,
        };
        tracing::warn!(step, error = %e, ?status, "lookup step failed");
        Ok(page::error_message(&e.user_message())?)
    }
}
