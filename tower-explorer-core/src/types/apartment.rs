//! Apartment related type definitions

use std::fmt;

use serde::Serialize;

use crate::utils::currency;

/// Apartment size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitType {
    Studio,
    #[serde(rename = "1BR")]
    OneBedroom,
    #[serde(rename = "2BR")]
    TwoBedroom,
    #[serde(rename = "3BR")]
    ThreeBedroom,
    Penthouse,
}

impl UnitType {
    /// All unit types, in ascending size
    pub const ALL: [UnitType; 5] = [
        UnitType::Studio,
        UnitType::OneBedroom,
        UnitType::TwoBedroom,
        UnitType::ThreeBedroom,
        UnitType::Penthouse,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            UnitType::Studio => "Studio",
            UnitType::OneBedroom => "1BR",
            UnitType::TwoBedroom => "2BR",
            UnitType::ThreeBedroom => "3BR",
            UnitType::Penthouse => "Penthouse",
        }
    }

    /// Lower bound of the floor area in m²
    pub fn base_area(self) -> u32 {
        match self {
            UnitType::Studio => 45,
            UnitType::OneBedroom => 65,
            UnitType::TwoBedroom => 85,
            UnitType::ThreeBedroom => 120,
            UnitType::Penthouse => 200,
        }
    }

    /// Room count
    pub fn rooms(self) -> u32 {
        match self {
            UnitType::Studio => 1,
            UnitType::OneBedroom => 2,
            UnitType::TwoBedroom => 3,
            UnitType::ThreeBedroom => 4,
            UnitType::Penthouse => 5,
        }
    }

    /// Bathroom count, `ceil(rooms / 2)`
    pub fn bathrooms(self) -> u32 {
        self.rooms().div_ceil(2)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reference to a placeholder image served by an external image collaborator
///
/// Renders as `path?height=H&width=W&text=LABEL`, where the words of the
/// label are URL-encoded and joined with `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderImage {
    pub path: &'static str,
    pub height: u32,
    pub width: u32,
    pub text: String,
}

impl PlaceholderImage {
    pub const PATH: &'static str = "/placeholder.svg";

    /// 300×200 card thumbnail
    pub fn thumbnail(unit_type: UnitType) -> Self {
        Self {
            path: Self::PATH,
            height: 200,
            width: 300,
            text: unit_type.label().to_string(),
        }
    }

    /// 600×400 floor plan
    pub fn layout(unit_type: UnitType) -> Self {
        Self {
            path: Self::PATH,
            height: 400,
            width: 600,
            text: format!("{} Layout", unit_type.label()),
        }
    }

    /// Builds the URI string
    pub fn uri(&self) -> String {
        let text = self
            .text
            .split_whitespace()
            .map(urlencoding::encode)
            .collect::<Vec<_>>()
            .join("+");
        format!(
            "{}?height={}&width={}&text={}",
            self.path, self.height, self.width, text
        )
    }
}

impl fmt::Display for PlaceholderImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

/// A single apartment on a floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    /// `apt-{floor}-{position}`, unique within its floor only
    pub id: String,
    pub unit_type: UnitType,
    /// Floor area in m²
    pub area: u32,
    pub rooms: u32,
    pub bathrooms: u32,
    /// Asking price in whole dollars
    #[serde(serialize_with = "currency::serialize")]
    pub price: u32,
    pub thumbnail: String,
    pub layout_image: String,
}

impl Apartment {
    /// Builds an apartment; rooms, bathrooms and image references follow from `unit_type`.
    pub fn new(floor_number: u32, position: u32, unit_type: UnitType, area: u32, price: u32) -> Self {
        Self {
            id: format!("apt-{floor_number}-{position}"),
            unit_type,
            area,
            rooms: unit_type.rooms(),
            bathrooms: unit_type.bathrooms(),
            price,
            thumbnail: PlaceholderImage::thumbnail(unit_type).uri(),
            layout_image: PlaceholderImage::layout(unit_type).uri(),
        }
    }

    /// Price as a currency string, e.g. `$1,234`
    pub fn formatted_price(&self) -> String {
        currency::format_currency(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_follow_unit_type() {
        let rooms: Vec<u32> = UnitType::ALL.iter().map(|u| u.rooms()).collect();
        assert_eq!(rooms, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn bathrooms_are_half_rooms_rounded_up() {
        for unit_type in UnitType::ALL {
            assert_eq!(unit_type.bathrooms(), unit_type.rooms().div_ceil(2));
        }
        assert_eq!(UnitType::Studio.bathrooms(), 1);
        assert_eq!(UnitType::OneBedroom.bathrooms(), 1);
        assert_eq!(UnitType::TwoBedroom.bathrooms(), 2);
        assert_eq!(UnitType::ThreeBedroom.bathrooms(), 2);
        assert_eq!(UnitType::Penthouse.bathrooms(), 3);
    }

    #[test]
    fn placeholder_uris() {
        assert_eq!(
            PlaceholderImage::thumbnail(UnitType::OneBedroom).uri(),
            "/placeholder.svg?height=200&width=300&text=1BR"
        );
        assert_eq!(
            PlaceholderImage::layout(UnitType::Penthouse).to_string(),
            "/placeholder.svg?height=400&width=600&text=Penthouse+Layout"
        );
    }

    #[test]
    fn placeholder_text_is_encoded() {
        let image = PlaceholderImage {
            path: PlaceholderImage::PATH,
            height: 10,
            width: 20,
            text: "A&B plan".to_string(),
        };
        assert_eq!(image.uri(), "/placeholder.svg?height=10&width=20&text=A%26B+plan");
    }

    #[test]
    fn apartment_derives_fields_from_unit_type() {
        let apt = Apartment::new(5, 2, UnitType::ThreeBedroom, 131, 2_240);
        assert_eq!(apt.id, "apt-5-2");
        assert_eq!(apt.rooms, 4);
        assert_eq!(apt.bathrooms, 2);
        assert_eq!(apt.formatted_price(), "$2,240");
        assert_eq!(apt.thumbnail, "/placeholder.svg?height=200&width=300&text=3BR");
        assert_eq!(
            apt.layout_image,
            "/placeholder.svg?height=400&width=600&text=3BR+Layout"
        );
    }

    #[test]
    fn apartment_serializes_like_the_listing_format() {
        let apt = Apartment::new(1, 1, UnitType::Studio, 50, 1_234);
        let json = serde_json::to_value(&apt).unwrap();
        assert_eq!(json["unitType"], "Studio");
        assert_eq!(json["price"], "$1,234");
        assert_eq!(json["layoutImage"], apt.layout_image.as_str());
    }
}
