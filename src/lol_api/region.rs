//! Enumerates the platform regions a player can live on and
//! maps each to the regional routing value that the account
//! and match services are served from.
//!
//! Platform values (e.g. `na1`) identify the shard a summoner
//! plays on. Account-v1 and match-v5 are not sharded per platform,
//! they are queried against one of four regional clusters, so
//! every platform belongs to exactly one `RegionalRoute`.

/// used to identify the platform region. Parses case-insensitively
/// from its lowercase name, e.g. `"EUW1".parse::<Region>()`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Region {
    Br1,
    Eun1,
    Euw1,
    Jp1,
    Kr,
    La1,
    La2,
    Na1,
    Oc1,
    Ph2,
    Ru,
    Sg2,
    Th2,
    Tr1,
    Tw2,
    Vn2,
}

/// The regional cluster that serves account and match data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RegionalRoute {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Region {

    /// The regional cluster this platform's matches are stored on.
    pub fn regional_route(self) -> RegionalRoute {
        match self {
            Region::Br1 | Region::La1 | Region::La2 | Region::Na1 => RegionalRoute::Americas,
            Region::Jp1 | Region::Kr => RegionalRoute::Asia,
            Region::Eun1 | Region::Euw1 | Region::Ru | Region::Tr1 => RegionalRoute::Europe,
            Region::Oc1 | Region::Ph2 | Region::Sg2 | Region::Th2 | Region::Tw2 | Region::Vn2 => RegionalRoute::Sea,
        }
    }

    /// The cluster account lookups go to. Accounts are not served
    /// from `sea`, so those platforms look players up on `asia`.
    pub fn account_route(self) -> RegionalRoute {
        match self.regional_route() {
            RegionalRoute::Sea => RegionalRoute::Asia,
            route => route,
        }
    }
}

impl RegionalRoute {

    /// Takes the route and provides the formatted uri
    /// that prefixes calls to services on this cluster
    /// (e.g. https://americas.api.riotgames.com)
    pub fn host(self) -> String {
        format!("https://{}.api.riotgames.com", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("NA1".parse::<Region>().unwrap(), Region::Na1);
        assert_eq!("euw1".parse::<Region>().unwrap(), Region::Euw1);
        assert!("mars1".parse::<Region>().is_err());
    }

    #[test]
    fn every_region_round_trips_through_display() {
        for region in Region::iter() {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn na1_routes_to_americas() {
        assert_eq!(Region::Na1.regional_route().host(), "https://americas.api.riotgames.com");
        assert_eq!(Region::Kr.regional_route(), RegionalRoute::Asia);
    }

    #[test]
    fn sea_platforms_look_up_accounts_on_asia() {
        assert_eq!(Region::Oc1.regional_route(), RegionalRoute::Sea);
        assert_eq!(Region::Oc1.account_route(), RegionalRoute::Asia);
        assert_eq!(Region::Vn2.account_route(), RegionalRoute::Asia);
        assert_eq!(Region::Euw1.account_route(), RegionalRoute::Europe);
        for region in Region::iter() {
            assert_ne!(region.account_route(), RegionalRoute::Sea, "{}", region);
        }
    }
}
