//! The lol_api module is a way to interface with the
//! league of legends api in a friendly way. It hides the
//! Http and json plumbing behind a single `Context`, which
//! is cheap to share between requests behind an `Arc`.
//!
//! Account and match data come from the riot api proper and
//! need the api key. Spell, rune and item icons come from the
//! Data Dragon cdn; the reference tables backing those are
//! fetched lazily on first use and kept for the life of the
//! process since they are pinned to a single patch version.

// external uses
use reqwest::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

// my mods/uses
mod errors;
mod region;
pub mod services;

pub use errors::*;
pub use region::{Region, RegionalRoute};
pub use services::account_v1::{AccountDto, RiotId};
pub use services::match_v5::{MatchDto, ParticipantDto, RECENT_MATCH_COUNT};

use services::{account_v1, ddragon, match_v5};
use services::ddragon::IconTable;

/// Patch the static reference data is pinned to unless configured otherwise.
pub const DEFAULT_DDRAGON_VERSION : &str = "12.22.1";

/// Base uri of the Data Dragon cdn.
pub const DDRAGON_HOST : &str = "https://ddragon.leagueoflegends.com";

/// Base uris every query is built on. Split out of `Context`
/// so tests can aim the client at a local stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hosts {
    pub account : String,    // account-v1
    pub regional : String,   // match-v5
    pub ddragon : String,    // static data and icons
}

impl Hosts {

    pub fn for_region(region : Region) -> Hosts {
        Hosts {
            account : region.account_route().host(),
            regional : region.regional_route().host(),
            ddragon : DDRAGON_HOST.to_string(),
        }
    }
}

/// The authenticated client we construct once at startup and use
/// to make every upstream query. Holds the per-process cache of
/// static reference tables.
#[derive(Debug)]
pub struct Context {
    client : Client,
    hosts : Hosts,
    ddragon_version : String,
    spells : OnceCell<IconTable>,
    runes : OnceCell<IconTable>,
    items : OnceCell<IconTable>,
}

impl Context {

    /// Constructs a new lol api context against the production hosts
    /// for `region`.
    pub fn new(api_key : &str, region : Region, ddragon_version : &str) -> Result<Context> {
        Self::with_hosts(api_key, Hosts::for_region(region), ddragon_version)
    }

    /// Constructs a context against arbitrary hosts. The api key is installed
    /// as a default header so no call has to remember it.
    pub fn with_hosts(api_key : &str, hosts : Hosts, ddragon_version : &str) -> Result<Context> {

        let mut token = HeaderValue::from_str(api_key)?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("x-riot-token"), token);

        let client = Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Context {
            client : client,
            hosts : hosts,
            ddragon_version : ddragon_version.to_string(),
            spells : OnceCell::new(),
            runes : OnceCell::new(),
            items : OnceCell::new(),
        })
    }

    /** ACCOUNT V1 METHODS */

    /// Resolves a `Name#Tag` identifier to the player's puuid. A malformed
    /// identifier fails before anything is sent.
    pub async fn resolve_account(&self, identifier : &str) -> Result<String> {
        let riot_id = RiotId::parse(identifier)?;
        Ok(self.query_account_v1_by_riot_id(&riot_id).await?.puuid)
    }

    pub async fn query_account_v1_by_riot_id(&self, riot_id : &RiotId) -> Result<AccountDto> {
        let uri = self.hosts.account.clone() + &account_v1::by_riot_id_uri(riot_id);
        self.query_json(&uri).await
    }

    /** MATCH V5 METHODS */

    /// Ids of the player's most recent matches, newest first, never more
    /// than `RECENT_MATCH_COUNT`.
    pub async fn query_match_v5_ids_by_puuid(&self, puuid : &str) -> Result<Vec<String>> {
        let uri = self.hosts.regional.clone() + &match_v5::ids_by_puuid_uri(puuid, 0, RECENT_MATCH_COUNT);
        let mut ids : Vec<String> = self.query_json(&uri).await?;
        ids.truncate(RECENT_MATCH_COUNT);
        Ok(ids)
    }

    pub async fn query_match_v5_by_id(&self, match_id : &str) -> Result<MatchDto> {
        let uri = self.hosts.regional.clone() + &match_v5::match_by_id_uri(match_id);
        self.query_json(&uri).await
    }

    /** DATA DRAGON METHODS */

    /// Icon url of the summoner spell with the given numeric key.
    pub async fn spell_icon(&self, spell_id : i64) -> Result<String> {
        let table = self.spells.get_or_try_init(|| async {
            let uri = self.hosts.ddragon.clone() + &ddragon::summoner_spells_uri(&self.ddragon_version);
            let list : ddragon::SummonerSpellListDto = self.query_json(&uri).await?;
            Ok::<_, Error>(list.into_icon_table())
        }).await?;

        let file = Self::lookup(table, "summoner spell", spell_id)?;
        Ok(self.hosts.ddragon.clone() + &ddragon::spell_icon_uri(&self.ddragon_version, file))
    }

    /// Icon url of a rune tree or of a single rune.
    pub async fn perk_icon(&self, perk_id : i64) -> Result<String> {
        let table = self.runes.get_or_try_init(|| async {
            let uri = self.hosts.ddragon.clone() + &ddragon::runes_uri(&self.ddragon_version);
            let trees : Vec<ddragon::RuneTreeDto> = self.query_json(&uri).await?;
            Ok::<_, Error>(ddragon::rune_icon_table(trees))
        }).await?;

        let path = Self::lookup(table, "rune", perk_id)?;
        Ok(self.hosts.ddragon.clone() + &ddragon::rune_icon_uri(path))
    }

    /// Icon url of an item, or `None` for an empty inventory slot (id 0).
    pub async fn item_icon(&self, item_id : i64) -> Result<Option<String>> {
        if item_id == 0 {
            return Ok(None);
        }

        let table = self.items.get_or_try_init(|| async {
            let uri = self.hosts.ddragon.clone() + &ddragon::items_uri(&self.ddragon_version);
            let list : ddragon::ItemListDto = self.query_json(&uri).await?;
            Ok::<_, Error>(list.into_icon_table())
        }).await?;

        let file = Self::lookup(table, "item", item_id)?;
        Ok(Some(self.hosts.ddragon.clone() + &ddragon::item_icon_uri(&self.ddragon_version, file)))
    }

    fn lookup<'a>(table : &'a IconTable, table_name : &'static str, id : i64) -> Result<&'a str> {
        table.get(&id)
            .map(String::as_str)
            .ok_or_else(|| ErrorKind::UnknownReference(table_name, id).into())
    }

    /// Sends the query and parses the body as json. Parse failures
    /// stay distinct from transport failures in the error kind.
    async fn query_json<T : DeserializeOwned>(&self, uri : &str) -> Result<T> {
        let response = self.send_query(uri).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The workhorse method for querying. Sends the GET request and
    /// returns the server response. If anything happens along the way or
    /// the server responds with anything but a success status we return
    /// the error.
    ///
    /// # Arguments
    ///
    /// `uri` - the uri to execute the GET request against
    async fn send_query(&self, uri : &str) -> Result<Response> {

        tracing::debug!(uri, "querying upstream");
        let response = self.client.get(uri).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(uri, %status, "upstream refused query");
            return Err(ErrorKind::UpstreamStatus(status).into());
        }

        Ok(response)
    }
}
