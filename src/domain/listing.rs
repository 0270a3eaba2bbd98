use serde::{Deserialize, Deserializer};
use std::fmt;

/// Opaque image location as served by the upstream API.
pub type ImageRef = String;

// Listing
//  ├── _id
//  ├── title / location / description
//  ├── price            (number or preformatted string)
//  ├── bedrooms / bathrooms / size
//  ├── status           (available | under_construction | sold | reserved)
//  ├── contactNumber
//  └── thumbnail / gallery / floorPlans

/// A property record as returned by the listings API.
///
/// Records are read-only: they are fetched per request and rendered, never
/// stored or mutated locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub bedrooms: Quantity,
    #[serde(default)]
    pub bathrooms: Quantity,
    #[serde(default)]
    pub size: Quantity,
    #[serde(default)]
    pub location: String,

    #[serde(default, deserialize_with = "status_or_default")]
    pub status: ListingStatus,

    pub contact_number: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<ImageRef>,

    #[serde(default, alias = "images", deserialize_with = "vec_or_empty")]
    pub gallery: Vec<ImageRef>,
    #[serde(default, alias = "plantas", deserialize_with = "vec_or_empty")]
    pub floor_plans: Vec<ImageRef>,
}

impl Listing {
    /// Contact number, if one is set and not blank.
    pub fn contact_number(&self) -> Option<&str> {
        self.contact_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// `"{size} m²"` as displayed on cards and the detail page.
    pub fn size_label(&self) -> String {
        format!("{} m²", self.size)
    }
}

/// Wire shape of the catalog endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListingsEnvelope {
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub apartments: Vec<Listing>,
}

/// Asking price: either a number or a string the agency already formatted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(value) => write!(f, "R$ {}", super::format::brl_number(*value)),
            Price::Text(text) => write!(f, "R$ {}", text.trim()),
        }
    }
}

/// Counts and sizes arrive as numbers from some records and strings from others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Text(String::new())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Quantity::Number(n) => write!(f, "{}", super::format::decimal_comma(*n)),
            Quantity::Text(text) => write!(f, "{}", text.trim()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingStatus {
    #[default]
    Available,
    UnderConstruction,
    Sold,
    Reserved,
}

impl ListingStatus {
    /// Unknown codes fall back to `Available`, as the agency's admin tool
    /// only ever writes the four known values.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "under_construction" => ListingStatus::UnderConstruction,
            "sold" => ListingStatus::Sold,
            "reserved" => ListingStatus::Reserved,
            _ => ListingStatus::Available,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Available => "Disponível",
            ListingStatus::UnderConstruction => "Em construção",
            ListingStatus::Sold => "Vendido",
            ListingStatus::Reserved => "Reservado",
        }
    }

    pub fn is_under_construction(self) -> bool {
        matches!(self, ListingStatus::UnderConstruction)
    }
}

fn status_or_default<'de, D>(deserializer: D) -> Result<ListingStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(ListingStatus::from_code)
        .unwrap_or_default())
}

// `null` lists show up on records created before galleries existed.
fn vec_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
