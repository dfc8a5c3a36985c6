pub mod account_v1;
pub mod ddragon;
pub mod match_v5;
