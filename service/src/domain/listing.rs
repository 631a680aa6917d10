//! [`Listing`] definitions.

use std::{fmt, str::FromStr};

use common::{define_kind, Price};
use derive_more::{AsRef, Display};

/// Published listing of a property offer.
///
/// Everything besides the [`Offer`] may be absent in server-sourced data,
/// and absent parts degrade gracefully: the corresponding presentation is
/// simply omitted.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    /// [`Author`] of this [`Listing`].
    pub author: Option<Author>,

    /// [`Offer`] of this [`Listing`].
    ///
    /// A [`Listing`] without an [`Offer`] never matches any filter
    /// criteria and renders no popup card.
    pub offer: Option<Offer>,

    /// [`Location`] of this [`Listing`].
    ///
    /// A [`Listing`] without a [`Location`] gets no map pin.
    pub location: Option<Location>,
}

/// Author of a [`Listing`].
#[derive(Clone, Debug)]
pub struct Author {
    /// [`Avatar`] of this [`Author`].
    pub avatar: Avatar,
}

/// Avatar image reference of an [`Author`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Avatar(String);

impl Avatar {
    /// Creates a new [`Avatar`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `avatar` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(avatar: impl Into<String>) -> Self {
        Self(avatar.into())
    }

    /// Creates a new [`Avatar`] if the given `avatar` is valid.
    #[must_use]
    pub fn new(avatar: impl Into<String>) -> Option<Self> {
        let avatar = avatar.into();
        Self::check(&avatar).then_some(Self(avatar))
    }

    /// Checks whether the given `avatar` is a valid [`Avatar`].
    fn check(avatar: impl AsRef<str>) -> bool {
        let avatar = avatar.as_ref();
        avatar.trim() == avatar && !avatar.is_empty() && avatar.len() <= 512
    }
}

impl FromStr for Avatar {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Avatar`")
    }
}

/// Offer details of a [`Listing`].
///
/// Every field may individually be absent in server-sourced data.
#[derive(Clone, Debug, Default)]
pub struct Offer {
    /// [`Title`] of this [`Offer`].
    pub title: Option<Title>,

    /// Human-readable [`Address`] of this [`Offer`].
    pub address: Option<Address>,

    /// [`Price`] per night of this [`Offer`].
    pub price: Option<Price>,

    /// Housing [`Kind`] of this [`Offer`].
    pub kind: Option<Kind>,

    /// Number of rooms of this [`Offer`].
    pub rooms: Option<Rooms>,

    /// Number of guests this [`Offer`] can host.
    pub guests: Option<Guests>,

    /// [`CheckTime`] guests may check in after.
    pub checkin: Option<CheckTime>,

    /// [`CheckTime`] guests must check out before.
    pub checkout: Option<CheckTime>,

    /// [`Features`] of this [`Offer`].
    pub features: Features,

    /// [`Description`] of this [`Offer`].
    pub description: Option<Description>,

    /// Photos of this [`Offer`], in presentation order.
    pub photos: Vec<PhotoUrl>,
}

/// Title of an [`Offer`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Human-readable address of an [`Offer`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

/// Description of an [`Offer`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `description` matches the
    /// format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        description.trim() == description
            && !description.is_empty()
            && description.len() <= 1024
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// URL of a single [`Offer`] photo.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct PhotoUrl(String);

impl PhotoUrl {
    /// Creates a new [`PhotoUrl`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `url` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Creates a new [`PhotoUrl`] if the given `url` is valid.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        Self::check(&url).then_some(Self(url))
    }

    /// Checks whether the given `url` is a valid [`PhotoUrl`].
    fn check(url: impl AsRef<str>) -> bool {
        let url = url.as_ref();
        url.trim() == url && !url.is_empty() && url.len() <= 512
    }
}

impl FromStr for PhotoUrl {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `PhotoUrl`")
    }
}

/// Number of rooms of an [`Offer`].
pub type Rooms = u32;

/// Number of guests an [`Offer`] can host.
pub type Guests = u32;

define_kind! {
    #[doc = "Housing kind of an [`Offer`]."]
    enum Kind {
        #[doc = "An apartment in a building."]
        Flat = 1,

        #[doc = "A standalone single-storey house."]
        Bungalow = 2,

        #[doc = "A whole house."]
        House = 3,

        #[doc = "A palace."]
        Palace = 4,

        #[doc = "A hotel room."]
        Hotel = 5,
    }
}

define_kind! {
    #[doc = "Single feature an [`Offer`] may provide."]
    enum Feature {
        #[doc = "Wi-Fi network."]
        Wifi = 1,

        #[doc = "Dishwasher."]
        Dishwasher = 2,

        #[doc = "Parking lot."]
        Parking = 3,

        #[doc = "Washing machine."]
        Washer = 4,

        #[doc = "Elevator."]
        Elevator = 5,

        #[doc = "Air conditioner."]
        Conditioner = 6,
    }
}

/// Duplicate-free set of [`Feature`]s.
///
/// Keeps the first-seen order of its elements, which is irrelevant for
/// matching but stable for presentation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Features(Vec<Feature>);

impl Features {
    /// Creates a new empty [`Features`] set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Indicates whether this set contains the provided [`Feature`].
    #[must_use]
    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    /// Indicates whether this set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of [`Feature`]s in this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the [`Feature`]s of this set.
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }

    /// Adds the provided [`Feature`] to this set.
    ///
    /// Returns `false` if the [`Feature`] was present already.
    pub fn insert(&mut self, feature: Feature) -> bool {
        if self.contains(feature) {
            false
        } else {
            self.0.push(feature);
            true
        }
    }

    /// Removes the provided [`Feature`] from this set.
    ///
    /// Returns `false` if the [`Feature`] was not present.
    pub fn remove(&mut self, feature: Feature) -> bool {
        let len = self.0.len();
        self.0.retain(|f| *f != feature);
        self.0.len() != len
    }
}

impl FromIterator<Feature> for Features {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut features = Self::new();
        for feature in iter {
            _ = features.insert(feature);
        }
        features
    }
}

/// Time of a day guests check in or check out at.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CheckTime {
    /// 12:00.
    #[default]
    Twelve,

    /// 13:00.
    Thirteen,

    /// 14:00.
    Fourteen,
}

impl CheckTime {
    /// All defined [`CheckTime`]s, in chronological order.
    pub const ALL: [Self; 3] = [Self::Twelve, Self::Thirteen, Self::Fourteen];
}

impl fmt::Display for CheckTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Twelve => "12:00",
            Self::Thirteen => "13:00",
            Self::Fourteen => "14:00",
        })
    }
}

impl FromStr for CheckTime {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12:00" => Ok(Self::Twelve),
            "13:00" => Ok(Self::Thirteen),
            "14:00" => Ok(Self::Fourteen),
            _ => Err("invalid `CheckTime`"),
        }
    }
}

/// Geographic coordinates of a [`Listing`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    /// Latitude of this [`Location`].
    pub x: f64,

    /// Longitude of this [`Location`].
    pub y: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y } = self;
        write!(f, "{x:.5}, {y:.5}")
    }
}

#[cfg(test)]
mod spec {
    use super::{CheckTime, Feature, Features, Location, Title};

    #[test]
    fn features_stay_duplicate_free() {
        let mut features: Features =
            [Feature::Wifi, Feature::Parking, Feature::Wifi]
                .into_iter()
                .collect();

        assert_eq!(features.len(), 2);
        assert!(features.contains(Feature::Wifi));
        assert!(features.contains(Feature::Parking));

        assert!(!features.insert(Feature::Parking));
        assert_eq!(features.len(), 2);

        assert!(features.remove(Feature::Wifi));
        assert!(!features.remove(Feature::Wifi));
        assert_eq!(features.len(), 1);
    }

    #[test]
    fn check_time_round_trips() {
        for time in CheckTime::ALL {
            assert_eq!(time.to_string().parse::<CheckTime>().unwrap(), time);
        }
        assert!("15:00".parse::<CheckTime>().is_err());
    }

    #[test]
    fn title_rejects_untrimmed_and_empty() {
        assert!(Title::new("Cozy flat in the city center").is_some());
        assert!(Title::new("").is_none());
        assert!(Title::new(" padded ").is_none());
    }

    #[test]
    fn location_displays_with_five_decimals() {
        let location = Location { x: 35.652832, y: 139.839478 };
        assert_eq!(location.to_string(), "35.65283, 139.83948");
    }
}
