//! Filter engine mapping [`Criteria`] onto the visible subset of listings.

use common::{price, Price};

use crate::domain::{listing, Listing};

/// Maximum number of simultaneously displayed map pins.
pub const MAX_PINS: usize = 10;

/// Single criterion over a value of type `T`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Selection<T> {
    /// Any value is admitted.
    Any,

    /// Only the exact value is admitted.
    Exactly(T),
}

// Not derived, as deriving would put an unwanted `T: Default` bound on it.
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T: Copy + PartialEq> Selection<T> {
    /// Indicates whether the provided value is admitted by this
    /// [`Selection`].
    ///
    /// [`None`] (an absent offer field) is admitted by [`Selection::Any`]
    /// only: an exact criterion over a value the offer doesn't carry fails
    /// closed.
    #[must_use]
    pub fn admits(self, value: Option<T>) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => value == Some(expected),
        }
    }
}

/// Criteria of the filter panel.
///
/// Five independent fields; [`Default`] is the no-constraint state every
/// control starts in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Criteria {
    /// Housing kind constraint.
    pub kind: Selection<listing::Kind>,

    /// Price [`price::Bucket`] constraint.
    pub price: Selection<price::Bucket>,

    /// Exact number of rooms constraint.
    pub rooms: Selection<listing::Rooms>,

    /// Exact number of guests constraint.
    pub guests: Selection<listing::Guests>,

    /// [`Feature`]s the offer is required to provide.
    ///
    /// An empty set constrains nothing.
    ///
    /// [`Feature`]: listing::Feature
    pub features: listing::Features,
}

impl Criteria {
    /// Indicates whether the provided [`Listing`] satisfies every active
    /// criterion of this [`Criteria`].
    ///
    /// A [`Listing`] without an offer never matches.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let Some(offer) = listing.offer.as_ref() else {
            return false;
        };

        self.kind.admits(offer.kind)
            && self.price.admits(offer.price.map(Price::bucket))
            && self.rooms.admits(offer.rooms)
            && self.guests.admits(offer.guests)
            && self.features.iter().all(|f| offer.features.contains(f))
    }
}

/// Computes the visible subset for the provided [`Criteria`]: the first
/// [`MAX_PINS`] matching listings, in the collection's own order.
///
/// Pure function of its two inputs, so recomputing it is always safe.
#[must_use]
pub fn apply(criteria: &Criteria, listings: &[Listing]) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| criteria.matches(l))
        .take(MAX_PINS)
        .cloned()
        .collect()
}

/// Computes the unconstrained visible subset: the first [`MAX_PINS`]
/// listings as they are.
#[must_use]
pub fn reset(listings: &[Listing]) -> Vec<Listing> {
    apply(&Criteria::default(), listings)
}

/// Filter panel state: the active [`Criteria`] plus the activation flag.
///
/// The panel starts inactive and only accepts criteria once a listing
/// collection has been loaded; activation is a one-way transition per
/// data-load cycle.
#[derive(Clone, Debug, Default)]
pub struct Panel {
    /// Currently selected [`Criteria`].
    criteria: Criteria,

    /// Indicator whether the panel controls accept input.
    active: bool,
}

impl Panel {
    /// Returns the currently selected [`Criteria`].
    #[must_use]
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Indicates whether this [`Panel`] accepts criteria changes.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activates this [`Panel`], all controls at once.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Replaces the selected [`Criteria`].
    ///
    /// Returns `false` (and keeps the previous selection) while this
    /// [`Panel`] is inactive.
    pub fn set(&mut self, criteria: Criteria) -> bool {
        if self.active {
            self.criteria = criteria;
        }
        self.active
    }

    /// Restores the default [`Criteria`], keeping the activation state.
    pub fn reset(&mut self) {
        self.criteria = Criteria::default();
    }
}

#[cfg(test)]
mod spec {
    use common::{price::Bucket, Price};

    use crate::{
        domain::{
            listing::{Feature, Kind, Offer},
            Listing,
        },
        generate,
    };

    use super::{apply, reset, Criteria, Panel, Selection, MAX_PINS};

    fn listing(price: u32, kind: Kind, rooms: u32, guests: u32) -> Listing {
        Listing {
            author: None,
            offer: Some(Offer {
                price: Some(Price::new(price)),
                kind: Some(kind),
                rooms: Some(rooms),
                guests: Some(guests),
                ..Offer::default()
            }),
            location: None,
        }
    }

    fn rooms_of(listings: &[Listing]) -> Vec<u32> {
        listings
            .iter()
            .map(|l| l.offer.as_ref().unwrap().rooms.unwrap())
            .collect()
    }

    #[test]
    fn caps_the_visible_set_at_max_pins() {
        let listings: Vec<_> = (0..25)
            .map(|i| listing(5_000, Kind::Flat, i, 1))
            .collect();

        let visible = apply(&Criteria::default(), &listings);

        assert_eq!(visible.len(), MAX_PINS);
        // The prefix keeps the collection's own order.
        assert_eq!(rooms_of(&visible), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn reset_equals_apply_with_default_criteria() {
        let listings = generate::listings(25);
        assert_eq!(
            rooms_of(&reset(&listings)),
            rooms_of(&apply(&Criteria::default(), &listings)),
        );
        assert_eq!(reset(&listings).len(), MAX_PINS);
    }

    #[test]
    fn preserves_relative_order_under_criteria() {
        let listings = vec![
            listing(500, Kind::Flat, 1, 1),
            listing(500, Kind::House, 2, 2),
            listing(500, Kind::Flat, 3, 3),
            listing(500, Kind::Flat, 4, 4),
        ];

        let criteria = Criteria {
            kind: Selection::Exactly(Kind::Flat),
            ..Criteria::default()
        };

        assert_eq!(rooms_of(&apply(&criteria, &listings)), vec![1, 3, 4]);
    }

    #[test]
    fn missing_offer_fails_closed() {
        let listings = vec![Listing::default(), listing(500, Kind::Flat, 1, 1)];

        assert_eq!(apply(&Criteria::default(), &listings).len(), 1);
    }

    #[test]
    fn missing_field_fails_closed_for_exact_criteria_only() {
        let priceless = Listing {
            offer: Some(Offer {
                kind: Some(Kind::Flat),
                ..Offer::default()
            }),
            ..Listing::default()
        };

        assert!(Criteria::default().matches(&priceless));
        assert!(!Criteria {
            price: Selection::Exactly(Bucket::Low),
            ..Criteria::default()
        }
        .matches(&priceless));
    }

    #[test]
    fn price_bucket_bounds_are_half_open() {
        let bucket_of = |price| {
            let l = listing(price, Kind::Flat, 1, 1);
            [Bucket::Low, Bucket::Middle, Bucket::High]
                .into_iter()
                .find(|b| {
                    Criteria {
                        price: Selection::Exactly(*b),
                        ..Criteria::default()
                    }
                    .matches(&l)
                })
                .unwrap()
        };

        assert_eq!(bucket_of(9_999), Bucket::Low);
        assert_eq!(bucket_of(10_000), Bucket::Middle);
        assert_eq!(bucket_of(49_999), Bucket::Middle);
        assert_eq!(bucket_of(50_000), Bucket::High);
    }

    #[test]
    fn feature_requirements_are_a_subset_test() {
        let mut l = listing(500, Kind::Flat, 1, 1);
        l.offer.as_mut().unwrap().features =
            [Feature::Wifi, Feature::Parking].into_iter().collect();

        let wifi = Criteria {
            features: [Feature::Wifi].into_iter().collect(),
            ..Criteria::default()
        };
        let wifi_washer = Criteria {
            features: [Feature::Wifi, Feature::Washer].into_iter().collect(),
            ..Criteria::default()
        };

        assert!(wifi.matches(&l));
        assert!(!wifi_washer.matches(&l));
    }

    #[test]
    fn adding_a_feature_requirement_never_widens_the_match() {
        let listings = generate::listings(50);

        let mut criteria = Criteria::default();
        let mut previous = apply(&criteria, &listings).len();
        for feature in [Feature::Wifi, Feature::Parking, Feature::Elevator] {
            _ = criteria.features.insert(feature);
            let count = apply(&criteria, &listings).len();
            assert!(count <= previous);
            previous = count;
        }
    }

    #[test]
    fn widening_to_any_never_narrows_the_match() {
        let listings = generate::listings(50);

        let narrow = Criteria {
            kind: Selection::Exactly(Kind::Palace),
            price: Selection::Exactly(Bucket::Middle),
            ..Criteria::default()
        };
        let wider = Criteria {
            kind: Selection::Any,
            ..narrow.clone()
        };

        assert!(
            apply(&wider, &listings).len() >= apply(&narrow, &listings).len(),
        );
    }

    #[test]
    fn panel_rejects_criteria_until_activated() {
        let mut panel = Panel::default();
        let criteria = Criteria {
            kind: Selection::Exactly(Kind::Hotel),
            ..Criteria::default()
        };

        assert!(!panel.set(criteria.clone()));
        assert_eq!(*panel.criteria(), Criteria::default());

        panel.activate();
        assert!(panel.set(criteria.clone()));
        assert_eq!(*panel.criteria(), criteria);

        panel.reset();
        assert!(panel.is_active());
        assert_eq!(*panel.criteria(), Criteria::default());
    }
}
