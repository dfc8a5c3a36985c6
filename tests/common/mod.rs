//! A programmable stand-in for the riot api and Data Dragon. Serves canned
//! json by request path and records every path (with query) it was asked for.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Router;
use lol_match_stats::history::MatchHistory;
use lol_match_stats::lol_api::{Context, Hosts, DEFAULT_DDRAGON_VERSION};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const PUUID : &str = "puuid-faker";

#[derive(Default)]
struct StubState {
    routes : HashMap<String, (StatusCode, String)>,
    requests : Mutex<Vec<String>>,
}

pub struct StubUpstream {
    pub addr : SocketAddr,
    state : Arc<StubState>,
}

#[derive(Default)]
pub struct StubBuilder {
    routes : HashMap<String, (StatusCode, String)>,
}

impl StubBuilder {

    pub fn json(mut self, path : &str, body : serde_json::Value) -> Self {
        self.routes.insert(path.to_string(), (StatusCode::OK, body.to_string()));
        self
    }

    pub fn status(mut self, path : &str, status : u16) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.routes.insert(path.to_string(), (status, r#"{"status":{"message":"stubbed"}}"#.to_string()));
        self
    }

    pub fn raw(mut self, path : &str, body : &str) -> Self {
        self.routes.insert(path.to_string(), (StatusCode::OK, body.to_string()));
        self
    }

    /// Registers the account lookup for Faker#KR1 and all three reference tables.
    pub fn with_faker_and_reference_data(self) -> Self {
        self.json("/riot/account/v1/accounts/by-riot-id/Faker/KR1",
                serde_json::json!({ "puuid": PUUID, "gameName": "Faker", "tagLine": "KR1" }))
            .json(&format!("/cdn/{}/data/en_US/summoner.json", DEFAULT_DDRAGON_VERSION), serde_json::json!({
                "type": "summoner",
                "data": {
                    "SummonerFlash": { "id": "SummonerFlash", "key": "4", "image": { "full": "SummonerFlash.png" } },
                    "SummonerDot": { "id": "SummonerDot", "key": "14", "image": { "full": "SummonerDot.png" } }
                }
            }))
            .json(&format!("/cdn/{}/data/en_US/runesReforged.json", DEFAULT_DDRAGON_VERSION), serde_json::json!([
                { "id": 8100, "key": "Domination", "icon": "perk-images/Styles/7200_Domination.png", "slots": [] },
                { "id": 8300, "key": "Inspiration", "icon": "perk-images/Styles/7203_Whimsy.png", "slots": [] }
            ]))
            .json(&format!("/cdn/{}/data/en_US/item.json", DEFAULT_DDRAGON_VERSION), serde_json::json!({
                "data": {
                    "1001": { "image": { "full": "1001.png" } },
                    "3340": { "image": { "full": "3340.png" } }
                }
            }))
    }

    pub fn with_match_ids(self, ids : &[&str]) -> Self {
        self.json(&format!("/lol/match/v5/matches/by-puuid/{}/ids", PUUID), serde_json::json!(ids))
    }

    pub fn with_match(self, match_id : &str, body : serde_json::Value) -> Self {
        self.json(&format!("/lol/match/v5/matches/{}", match_id), body)
    }

    pub async fn start(self) -> StubUpstream {
        let state = Arc::new(StubState {
            routes : self.routes,
            requests : Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(respond)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubUpstream { addr, state }
    }
}

async fn respond(State(state) : State<Arc<StubState>>, uri : Uri) -> (StatusCode, String) {
    let recorded = uri.path_and_query().map(|p| p.to_string()).unwrap_or_default();
    state.requests.lock().unwrap().push(recorded);

    match state.routes.get(uri.path()) {
        Some((status, body)) => (*status, body.clone()),
        None => (StatusCode::NOT_FOUND, r#"{"status":{"message":"Data not found"}}"#.to_string()),
    }
}

impl StubUpstream {

    pub fn builder() -> StubBuilder {
        StubBuilder::default()
    }

    pub fn base(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hosts(&self) -> Hosts {
        Hosts { account : self.base(), regional : self.base(), ddragon : self.base() }
    }

    pub fn context(&self) -> Context {
        Context::with_hosts("RGAPI-test", self.hosts(), DEFAULT_DDRAGON_VERSION).unwrap()
    }

    pub fn history(&self) -> MatchHistory {
        MatchHistory::new(self.context())
    }

    /// Every path requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn count_requests(&self, prefix : &str) -> usize {
        self.requests().iter().filter(|p| p.starts_with(prefix)).count()
    }
}

/// A match payload with one tracked participant plus one other player.
pub fn match_json(match_id : &str, win : bool, duration : i64, kda : (i32, i32, i32)) -> serde_json::Value {
    serde_json::json!({
        "metadata": { "matchId": match_id },
        "info": {
            "gameDuration": duration,
            "gameCreation": 1669000000000i64,
            "participants": [
                { "puuid": "someone-else", "summonerName": "Other", "win": !win },
                {
                    "puuid": PUUID,
                    "summonerName": "Hide on bush",
                    "riotIdGameName": "Faker",
                    "championName": "Ahri",
                    "champLevel": 16,
                    "win": win,
                    "kills": kda.0, "deaths": kda.1, "assists": kda.2,
                    "neutralMinionsKilled": 12, "totalMinionsKilled": 198,
                    "summoner1Id": 4, "summoner2Id": 14,
                    "perks": { "styles": [
                        { "description": "primaryStyle", "style": 8100, "selections": [ { "perk": 8112 } ] },
                        { "description": "subStyle", "style": 8300, "selections": [] }
                    ] },
                    "item0": 1001, "item1": 0, "item2": 0, "item3": 0, "item4": 0, "item5": 0, "item6": 3340
                }
            ]
        }
    })
}
