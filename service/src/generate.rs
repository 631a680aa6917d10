//! Synthetic listing generation for the offline fallback.

use common::Price;
use rand::{
    seq::{IteratorRandom as _, SliceRandom as _},
    Rng,
};
use strum::IntoEnumIterator as _;

use crate::domain::{
    listing::{
        Address, Author, Avatar, CheckTime, Description, Feature, Kind,
        Location, Offer, PhotoUrl, Title,
    },
    Listing,
};

/// Latitude range of generated coordinates.
const X_RANGE: (f64, f64) = (35.65, 35.70);

/// Longitude range of generated coordinates.
const Y_RANGE: (f64, f64) = (139.70, 139.80);

/// Price per night range of generated offers.
const PRICE_RANGE: (u32, u32) = (1_000, 100_000);

/// Pool of generated offer titles.
const TITLES: &[&str] = &[
    "Cozy flat in the city center",
    "Modern house with a garden",
    "Luxurious palace for special occasions",
    "Compact bungalow by the sea",
    "Elegant hotel overlooking the city",
    "Spacious flat for the whole family",
    "Quiet house in a calm neighborhood",
    "Stylish hotel in the business district",
    "Snug bungalow deep in the woods",
    "Grand palace with its own pool",
];

/// Pool of generated offer descriptions.
const DESCRIPTIONS: &[&str] = &[
    "A fine spot for both rest and work, with everything at hand.",
    "Modern design and comfort, perfect for a family stay.",
    "Premium apartments with a panoramic city view.",
    "Quiet, comfortable housing in a calm neighborhood.",
    "Stylish interiors and everything needed for a pleasant stay.",
    "Spacious rooms and modern appliances for a large family.",
    "A homely house with a garden, great for time outdoors.",
    "An elegant hotel with first-class service.",
    "A snug bungalow surrounded by nature, perfect for solitude.",
    "A grand palace full of amenities and entertainment.",
];

/// Pool of generated offer photos.
const PHOTOS: &[&str] = &[
    "http://o0.github.io/assets/images/tokyo/hotel1.jpg",
    "http://o0.github.io/assets/images/tokyo/hotel2.jpg",
    "http://o0.github.io/assets/images/tokyo/hotel3.jpg",
];

/// Generates a single synthetic [`Listing`].
///
/// Every field is filled in: synthetic data exercises the full
/// presentation, unlike server data which may come with gaps.
#[expect(unsafe_code, reason = "literal pools are valid by construction")]
#[must_use]
pub fn listing(rng: &mut impl Rng) -> Listing {
    let location = Location {
        x: round5(rng.gen_range(X_RANGE.0..=X_RANGE.1)),
        y: round5(rng.gen_range(Y_RANGE.0..=Y_RANGE.1)),
    };
    let author_id = rng.gen_range(1..=10_u8);

    Listing {
        author: Some(Author {
            avatar: unsafe {
                Avatar::new_unchecked(format!(
                    "img/avatars/user{author_id:02}.png",
                ))
            },
        }),
        offer: Some(Offer {
            title: TITLES
                .choose(rng)
                .map(|t| unsafe { Title::new_unchecked(*t) }),
            address: Some(unsafe {
                Address::new_unchecked(location.to_string())
            }),
            price: Some(Price::new(
                rng.gen_range(PRICE_RANGE.0..=PRICE_RANGE.1),
            )),
            kind: Kind::iter().choose(rng),
            rooms: Some(rng.gen_range(1..=10)),
            guests: Some(rng.gen_range(1..=20)),
            checkin: CheckTime::ALL.choose(rng).copied(),
            checkout: CheckTime::ALL.choose(rng).copied(),
            features: subset(rng, Feature::iter()).into_iter().collect(),
            description: DESCRIPTIONS
                .choose(rng)
                .map(|d| unsafe { Description::new_unchecked(*d) }),
            photos: subset(rng, PHOTOS.iter())
                .into_iter()
                .map(|url| unsafe { PhotoUrl::new_unchecked(*url) })
                .collect(),
        }),
        location: Some(location),
    }
}

/// Generates `count` synthetic [`Listing`]s.
#[must_use]
pub fn listings(count: usize) -> Vec<Listing> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| listing(&mut rng)).collect()
}

/// Rounds a coordinate to 5 decimal places.
fn round5(v: f64) -> f64 {
    (v * 1e5).round() / 1e5
}

/// Picks a random non-empty subset of the provided items, in random order.
fn subset<T>(rng: &mut impl Rng, items: impl Iterator<Item = T>) -> Vec<T> {
    let mut items: Vec<_> = items.collect();
    items.shuffle(rng);
    let len = rng.gen_range(1..=items.len());
    items.truncate(len);
    items
}

#[cfg(test)]
mod spec {
    use super::{listings, X_RANGE, Y_RANGE};

    #[test]
    fn generates_the_requested_count() {
        assert_eq!(listings(10).len(), 10);
        assert_eq!(listings(0).len(), 0);
    }

    #[test]
    fn every_generated_listing_is_complete() {
        for listing in listings(50) {
            let offer = listing.offer.expect("generated offer");
            assert!(offer.title.is_some());
            assert!(offer.price.is_some());
            assert!(offer.kind.is_some());
            assert!(!offer.features.is_empty());
            assert!(!offer.photos.is_empty());

            let author = listing.author.expect("generated author");
            assert!(AsRef::<str>::as_ref(&author.avatar)
                .starts_with("img/avatars/user"));

            let location = listing.location.expect("generated location");
            assert!((X_RANGE.0..=X_RANGE.1).contains(&location.x));
            assert!((Y_RANGE.0..=Y_RANGE.1).contains(&location.y));

            // The generated address mirrors the generated coordinates.
            assert_eq!(
                offer.address.unwrap().to_string(),
                location.to_string(),
            );
        }
    }

    #[test]
    fn generated_prices_keep_their_bounds() {
        for listing in listings(50) {
            let price = listing.offer.unwrap().price.unwrap();
            assert!((1_000..=100_000).contains(&price.amount()));
        }
    }
}
