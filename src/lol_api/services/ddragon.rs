//! Data Dragon static reference data: summoner spells, rune trees
//! and items. Every table is published per game patch and never
//! changes once released, so each is flattened into an `IconTable`
//! keyed by numeric id.

use serde::Deserialize;
use std::collections::HashMap;

/// id -> icon file name (spells, items) or path (runes)
pub type IconTable = HashMap<i64, String>;

#[derive(Deserialize, Debug)]
pub struct ImageDto {
    pub full : String,
}

#[derive(Deserialize, Debug)]
pub struct SummonerSpellListDto {
    pub data : HashMap<String, SummonerSpellDto>,  // keyed by spell name, e.g. "SummonerFlash"
}

#[derive(Deserialize, Debug)]
pub struct SummonerSpellDto {
    pub key : String,       // the numeric id, as a string
    pub image : ImageDto,
}

#[derive(Deserialize, Debug)]
pub struct ItemListDto {
    pub data : HashMap<String, ItemDto>,   // keyed by the numeric id, as a string
}

#[derive(Deserialize, Debug)]
pub struct ItemDto {
    pub image : ImageDto,
}

#[derive(Deserialize, Debug)]
pub struct RuneTreeDto {
    pub id : i64,
    pub icon : String,
    #[serde(default)]
    pub slots : Vec<RuneSlotDto>,
}

#[derive(Deserialize, Debug)]
pub struct RuneSlotDto {
    pub runes : Vec<RuneDto>,
}

#[derive(Deserialize, Debug)]
pub struct RuneDto {
    pub id : i64,
    pub icon : String,
}

impl SummonerSpellListDto {

    pub fn into_icon_table(self) -> IconTable {
        self.data.into_values()
            .filter_map(|spell| spell.key.parse::<i64>().ok().map(|id| (id, spell.image.full)))
            .collect()
    }
}

impl ItemListDto {

    pub fn into_icon_table(self) -> IconTable {
        self.data.into_iter()
            .filter_map(|(id, item)| id.parse::<i64>().ok().map(|id| (id, item.image.full)))
            .collect()
    }
}

/// Flattens the trees and every rune inside them into one table,
/// so both a tree id (e.g. 8100) and a keystone id (e.g. 8112) resolve.
pub fn rune_icon_table(trees : Vec<RuneTreeDto>) -> IconTable {
    let mut table = IconTable::new();
    for tree in trees {
        for rune in tree.slots.into_iter().flat_map(|slot| slot.runes) {
            table.insert(rune.id, rune.icon);
        }
        table.insert(tree.id, tree.icon);
    }
    table
}

pub fn summoner_spells_uri(version : &str) -> String {
    format!("/cdn/{}/data/en_US/summoner.json", version)
}

pub fn runes_uri(version : &str) -> String {
    format!("/cdn/{}/data/en_US/runesReforged.json", version)
}

pub fn items_uri(version : &str) -> String {
    format!("/cdn/{}/data/en_US/item.json", version)
}

pub fn spell_icon_uri(version : &str, file : &str) -> String {
    format!("/cdn/{}/img/spell/{}", version, file)
}

/// Rune icons are not versioned.
pub fn rune_icon_uri(path : &str) -> String {
    format!("/cdn/img/{}", path)
}

pub fn item_icon_uri(version : &str, file : &str) -> String {
    format!("/cdn/{}/img/item/{}", version, file)
}
