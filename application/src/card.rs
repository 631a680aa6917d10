//! Popup card rendering of a [`Listing`].

use std::fmt;

use service::domain::{
    listing::{Feature, Kind},
    Listing,
};

/// Returns the human label of the provided housing [`Kind`].
#[must_use]
pub const fn kind_label(kind: Kind) -> &'static str {
    match kind {
        Kind::Flat => "Flat",
        Kind::Bungalow => "Bungalow",
        Kind::House => "House",
        Kind::Palace => "Palace",
        Kind::Hotel => "Hotel",
    }
}

/// Textual popup card of a single [`Listing`].
///
/// Absent listing fields leave their lines out entirely instead of
/// rendering placeholders; the capacity and check-times lines need both
/// of their halves present.
#[derive(Clone, Debug, Default)]
pub struct Card {
    /// Title line.
    title: Option<String>,

    /// Address line.
    address: Option<String>,

    /// Price line.
    price: Option<String>,

    /// Housing kind line.
    kind: Option<&'static str>,

    /// Rooms-for-guests line.
    capacity: Option<String>,

    /// Check-in/check-out line.
    times: Option<String>,

    /// Feature list.
    features: Vec<Feature>,

    /// Description line.
    description: Option<String>,

    /// Photo URLs.
    photos: Vec<String>,

    /// Author avatar reference.
    avatar: Option<String>,
}

impl Card {
    /// Builds the [`Card`] of the provided [`Listing`].
    #[must_use]
    pub fn of(listing: &Listing) -> Self {
        let mut card = Self {
            avatar: listing.author.as_ref().map(|a| a.avatar.to_string()),
            ..Self::default()
        };

        let Some(offer) = listing.offer.as_ref() else {
            return card;
        };

        card.title = offer.title.as_ref().map(ToString::to_string);
        card.address = offer.address.as_ref().map(ToString::to_string);
        card.price = offer.price.map(|p| format!("{p} per night"));
        card.kind = offer.kind.map(kind_label);
        card.capacity = offer
            .rooms
            .zip(offer.guests)
            .map(|(rooms, guests)| {
                format!("{rooms} room(s) for {guests} guest(s)")
            });
        card.times = offer.checkin.zip(offer.checkout).map(|(i, o)| {
            format!("check-in after {i}, check-out before {o}")
        });
        card.features = offer.features.iter().collect();
        card.description = offer.description.as_ref().map(ToString::to_string);
        card.photos = offer.photos.iter().map(ToString::to_string).collect();

        card
    }

    /// Returns the single-line summary of this [`Card`].
    #[must_use]
    pub fn summary(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }

    /// Returns the title line of this [`Card`], if the listing had one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        if let Some(address) = &self.address {
            lines.push(address.clone());
        }
        if let Some(price) = &self.price {
            lines.push(price.clone());
        }
        if let Some(kind) = self.kind {
            lines.push(kind.to_owned());
        }
        if let Some(capacity) = &self.capacity {
            lines.push(capacity.clone());
        }
        if let Some(times) = &self.times {
            lines.push(times.clone());
        }
        if !self.features.is_empty() {
            let features: Vec<_> =
                self.features.iter().map(ToString::to_string).collect();
            lines.push(format!("features: {}", features.join(", ")));
        }
        if let Some(description) = &self.description {
            lines.push(description.clone());
        }
        if !self.photos.is_empty() {
            lines.push(format!("photos: {}", self.photos.join(", ")));
        }
        if let Some(avatar) = &self.avatar {
            lines.push(format!("avatar: {avatar}"));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod spec {
    use common::Price;
    use service::domain::{
        listing::{CheckTime, Kind, Offer, Title},
        Listing,
    };

    use super::Card;

    #[test]
    fn omits_absent_lines() {
        let listing = Listing {
            offer: Some(Offer {
                title: Title::new("Roomy place near the station"),
                price: Some(Price::new(12_000)),
                kind: Some(Kind::Flat),
                // No guests: the capacity line needs both halves.
                rooms: Some(2),
                checkin: Some(CheckTime::Twelve),
                ..Offer::default()
            }),
            ..Listing::default()
        };

        let rendered = Card::of(&listing).to_string();

        assert!(rendered.contains("Roomy place near the station"));
        assert!(rendered.contains("12000 per night"));
        assert!(rendered.contains("Flat"));
        assert!(!rendered.contains("room(s)"));
        assert!(!rendered.contains("check-in"));
        assert!(!rendered.contains("features:"));
        assert!(!rendered.contains("avatar:"));
    }

    #[test]
    fn offerless_listing_renders_an_empty_card() {
        let card = Card::of(&Listing::default());
        assert_eq!(card.to_string(), "");
        assert_eq!(card.summary(), "(untitled)");
    }
}
