//! Remote card-database response model.
//!
//! Mirrors the JSON shape returned by the card API: a paged envelope
//! around card records with optional marketplace pricing blocks.

use serde::{Deserialize, Serialize};

/// Paged response envelope from the `/cards` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardPage {
    /// Matching cards for this page.
    pub data: Vec<Card>,
    pub page: u32,
    pub page_size: u32,
    /// Number of cards in this page.
    pub count: u32,
    /// Total matches across all pages.
    pub total_count: u32,
}

/// A single card record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supertype: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<String>,
    /// Hit points, delivered as a string by the API ("120").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evolves_to: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attacks: Vec<Attack>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<Weakness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_retreat_cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<SetInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub national_pokedex_numbers: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legalities: Option<Legalities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulation_mark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<CardImages>,
    /// TCGplayer pricing block, absent for cards without market data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<TcgplayerBlock>,
    /// Cardmarket pricing block, absent for cards without market data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardmarket: Option<CardmarketBlock>,
}

/// One attack on a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cost: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_energy_cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A weakness entry ("Water ×2").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weakness {
    #[serde(rename = "type")]
    pub weakness_type: String,
    pub value: String,
}

/// Set membership info embedded in a card record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInfo {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<SetImages>,
}

/// Set symbol/logo image URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetImages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Per-format legality of a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Legalities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<String>,
}

/// Card image URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardImages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

/// TCGplayer marketplace block: URL, freshness, tiered prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgplayerBlock {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<TcgplayerPrices>,
}

/// Price tiers keyed by print variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TcgplayerPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<TcgplayerTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holofoil: Option<TcgplayerTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_holofoil: Option<TcgplayerTier>,
    #[serde(rename = "1stEditionHolofoil", skip_serializing_if = "Option::is_none")]
    pub first_edition_holofoil: Option<TcgplayerTier>,
    #[serde(rename = "1stEditionNormal", skip_serializing_if = "Option::is_none")]
    pub first_edition_normal: Option<TcgplayerTier>,
}

/// One TCGplayer price tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TcgplayerTier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_low: Option<f64>,
}

/// Cardmarket marketplace block: URL, freshness, aggregate prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardmarketBlock {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<CardmarketPrices>,
}

/// Cardmarket aggregate price fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardmarketPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_sell_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_holo_sell: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_holo_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_holo_trend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg7: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg30: Option<f64>,
}
