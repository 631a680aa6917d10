//! Advert form state and validation.

use std::fmt;

use common::Price;
use derive_more::{Display, Error};
use smart_default::SmartDefault;

use crate::{
    domain::{
        listing::{
            Address, CheckTime, Description, Feature, Features, Guests, Kind,
            Rooms, Title,
        },
        Submission,
    },
    upload::{self, FileUpload},
};

/// Minimum accepted [`Title`] length, in characters.
pub const TITLE_MIN_LEN: usize = 30;

/// Maximum accepted [`Title`] length, in characters.
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum accepted [`Price`] per night.
pub const MAX_PRICE: Price = Price::new(1_000_000);

/// Returns the minimum [`Price`] per night for the provided housing
/// [`Kind`].
#[must_use]
pub const fn price_floor(kind: Kind) -> Price {
    Price::new(match kind {
        Kind::Bungalow | Kind::Hotel => 0,
        Kind::Flat => 1_000,
        Kind::House => 5_000,
        Kind::Palace => 10_000,
    })
}

/// Validation error of the title field.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum TitleError {
    /// Title field is empty or whitespace-only.
    #[display("title is required")]
    Required,

    /// Title is shorter than [`TITLE_MIN_LEN`] characters.
    #[display("title must be at least {TITLE_MIN_LEN} characters long")]
    TooShort,

    /// Title is longer than [`TITLE_MAX_LEN`] characters.
    #[display("title must be at most {TITLE_MAX_LEN} characters long")]
    TooLong,
}

/// Checks the provided raw title field value.
///
/// # Errors
///
/// Errors if the value is empty or its length is out of the
/// [`TITLE_MIN_LEN`]..=[`TITLE_MAX_LEN`] bounds.
pub fn validate_title(value: &str) -> Result<(), TitleError> {
    if value.trim().is_empty() {
        return Err(TitleError::Required);
    }
    match value.chars().count() {
        len if len < TITLE_MIN_LEN => Err(TitleError::TooShort),
        len if len > TITLE_MAX_LEN => Err(TitleError::TooLong),
        _ => Ok(()),
    }
}

/// Validation error of the address field.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum AddressError {
    /// Address field is empty or whitespace-only.
    #[display("address is required")]
    Required,
}

/// Checks the provided raw address field value.
///
/// The format is unconstrained, only presence is required.
///
/// # Errors
///
/// Errors if the value is empty or whitespace-only.
pub fn validate_address(value: &str) -> Result<(), AddressError> {
    if value.trim().is_empty() {
        Err(AddressError::Required)
    } else {
        Ok(())
    }
}

/// Validation error of the price field.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum PriceError {
    /// Price field is empty.
    #[display("price is required")]
    Required,

    /// Price field is not an integer number.
    #[display("price must be an integer number")]
    NotANumber,

    /// Price is below the [`price_floor`] of the selected housing kind.
    #[display("price must be at least {_0}")]
    BelowMin(#[error(not(source))] Price),

    /// Price is above [`MAX_PRICE`].
    #[display("price must be at most {_0}")]
    AboveMax(#[error(not(source))] Price),
}

/// Checks the provided raw price field value against the bounds.
///
/// # Errors
///
/// Errors if the value is empty, is not an integer, or is out of the
/// `min`..=[`MAX_PRICE`] bounds.
pub fn validate_price(value: &str, min: Price) -> Result<Price, PriceError> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err(PriceError::Required);
    }
    let price = raw.parse::<Price>().map_err(|_| PriceError::NotANumber)?;
    if price < min {
        Err(PriceError::BelowMin(min))
    } else if price > MAX_PRICE {
        Err(PriceError::AboveMax(MAX_PRICE))
    } else {
        Ok(price)
    }
}

/// Validation error of the rooms/guests pairing.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum CapacityError {
    /// Selected number of rooms cannot host the selected number of guests.
    #[display("{rooms} room(s) cannot host {guests} guest(s)")]
    NotForGuests {
        /// Selected number of rooms.
        rooms: Rooms,

        /// Selected number of guests.
        guests: Guests,
    },

    /// Number of rooms is outside of the defined domain.
    #[display("unsupported number of rooms: {_0}")]
    UnsupportedRooms(#[error(not(source))] Rooms),
}

/// Checks the rooms/guests pairing.
///
/// The rule is only defined for 1, 2, 3 and 100 rooms; anything else is
/// rejected rather than silently passed.
///
/// # Errors
///
/// Errors if the number of rooms is out of the defined domain, or the
/// number of guests doesn't fit it.
pub fn validate_capacity(
    rooms: Rooms,
    guests: Guests,
) -> Result<(), CapacityError> {
    let max_guests = match rooms {
        1 => 1,
        2 => 2,
        3 => 3,
        100 => 100,
        other => return Err(CapacityError::UnsupportedRooms(other)),
    };

    if (1..=max_guests).contains(&guests) {
        Ok(())
    } else {
        Err(CapacityError::NotForGuests { rooms, guests })
    }
}

/// State of a single validated form field.
#[derive(Clone, Debug, Default)]
pub struct Field {
    /// Current raw value of this [`Field`].
    value: String,

    /// Message of the last validation failure, if any.
    message: Option<String>,
}

impl Field {
    /// Returns the current raw value of this [`Field`].
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Indicates whether this [`Field`] passed its last validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }

    /// Returns the error message of this [`Field`], if it's invalid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replaces the error state of this [`Field`] with the provided
    /// validation outcome, clearing any previous message first.
    fn refresh<E: fmt::Display>(&mut self, outcome: Result<(), E>) {
        self.message = outcome.err().map(|e| e.to_string());
    }
}

/// Advert form: per-field state plus the coupled controls.
///
/// Every setter revalidates the fields it affects immediately, so the
/// error state never outlives a corrected input.
#[derive(Clone, Debug, SmartDefault)]
pub struct Form {
    /// Title [`Field`] state.
    title: Field,

    /// Address [`Field`] state.
    address: Field,

    /// Price [`Field`] state.
    price: Field,

    /// Selected housing [`Kind`], driving the price floor.
    #[default(Kind::Flat)]
    kind: Kind,

    /// Selected number of rooms.
    #[default(1)]
    rooms: Rooms,

    /// Selected number of guests.
    #[default(1)]
    guests: Guests,

    /// Message of the last rooms/guests pairing failure, if any.
    ///
    /// Displayed on the guests control.
    capacity_message: Option<String>,

    /// Selected check-in time.
    checkin: CheckTime,

    /// Selected check-out time.
    checkout: CheckTime,

    /// Selected [`Features`].
    features: Features,

    /// Raw description value.
    description: String,

    /// Attached avatar image, if any.
    avatar: Option<FileUpload>,

    /// Attached offer photos.
    photos: Vec<FileUpload>,
}

impl Form {
    /// Creates a new [`Form`] in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the title [`Field`] state.
    #[must_use]
    pub fn title(&self) -> &Field {
        &self.title
    }

    /// Returns the address [`Field`] state.
    #[must_use]
    pub fn address(&self) -> &Field {
        &self.address
    }

    /// Returns the price [`Field`] state.
    #[must_use]
    pub fn price(&self) -> &Field {
        &self.price
    }

    /// Returns the selected housing [`Kind`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the selected rooms/guests pairing.
    #[must_use]
    pub fn capacity(&self) -> (Rooms, Guests) {
        (self.rooms, self.guests)
    }

    /// Returns the message of the last rooms/guests pairing failure.
    #[must_use]
    pub fn capacity_message(&self) -> Option<&str> {
        self.capacity_message.as_deref()
    }

    /// Returns the selected check-in and check-out times.
    ///
    /// The two are kept mirror-equal by the setters.
    #[must_use]
    pub fn check_times(&self) -> (CheckTime, CheckTime) {
        (self.checkin, self.checkout)
    }

    /// Returns the placeholder of the price field: the price floor of the
    /// selected housing [`Kind`].
    #[must_use]
    pub fn placeholder(&self) -> String {
        price_floor(self.kind).to_string()
    }

    /// Returns the attached avatar image, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&FileUpload> {
        self.avatar.as_ref()
    }

    /// Returns the attached offer photos.
    #[must_use]
    pub fn photos(&self) -> &[FileUpload] {
        &self.photos
    }

    /// Sets the title field value, revalidating it.
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title.value = value.into();
        self.title.refresh(validate_title(&self.title.value));
    }

    /// Sets the address field value, revalidating it.
    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address.value = value.into();
        self.address.refresh(validate_address(&self.address.value));
    }

    /// Sets the price field value, revalidating it.
    pub fn set_price(&mut self, value: impl Into<String>) {
        self.price.value = value.into();
        self.refresh_price();
    }

    /// Selects the housing [`Kind`].
    ///
    /// Updates the price floor and placeholder, and clamps a price below
    /// the new floor up to it, so a floor change never leaves a silently
    /// invalid price behind.
    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
        let min = price_floor(kind);
        if let Ok(current) = self.price.value.trim().parse::<Price>() {
            if current < min {
                self.price.value = min.to_string();
            }
        }
        self.refresh_price();
    }

    /// Selects the number of rooms, revalidating the pairing.
    pub fn set_rooms(&mut self, rooms: Rooms) {
        self.rooms = rooms;
        self.refresh_capacity();
    }

    /// Selects the number of guests, revalidating the pairing.
    pub fn set_guests(&mut self, guests: Guests) {
        self.guests = guests;
        self.refresh_capacity();
    }

    /// Selects the check-in time, mirroring it into the check-out time
    /// whenever the two differ.
    pub fn set_checkin(&mut self, time: CheckTime) {
        self.checkin = time;
        if self.checkout != time {
            self.checkout = time;
        }
    }

    /// Selects the check-out time, mirroring it into the check-in time
    /// whenever the two differ.
    pub fn set_checkout(&mut self, time: CheckTime) {
        self.checkout = time;
        if self.checkin != time {
            self.checkin = time;
        }
    }

    /// Toggles the provided [`Feature`] checkbox.
    pub fn toggle_feature(&mut self, feature: Feature) {
        if !self.features.insert(feature) {
            _ = self.features.remove(feature);
        }
    }

    /// Sets the description value.
    ///
    /// The description is optional and never invalid.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Attaches the avatar image, passing it through the upload boundary
    /// first.
    ///
    /// # Errors
    ///
    /// Errors if the file is rejected by the boundary; the previously
    /// attached avatar (if any) is left untouched then.
    pub fn attach_avatar(
        &mut self,
        file: FileUpload,
    ) -> Result<(), upload::Error> {
        upload::check(&file)?;
        self.avatar = Some(file);
        Ok(())
    }

    /// Attaches an offer photo, passing it through the upload boundary
    /// first.
    ///
    /// # Errors
    ///
    /// Errors if the file is rejected by the boundary; previously attached
    /// photos are left untouched then.
    pub fn attach_photo(
        &mut self,
        file: FileUpload,
    ) -> Result<(), upload::Error> {
        upload::check(&file)?;
        self.photos.push(file);
        Ok(())
    }

    /// Validates the whole form, refreshing every field's error state.
    ///
    /// Previous errors are cleared before re-evaluation, so no stale error
    /// survives a corrected input.
    pub fn validate(&mut self) -> bool {
        self.title.refresh(validate_title(&self.title.value));
        self.address.refresh(validate_address(&self.address.value));
        self.refresh_price();
        self.refresh_capacity();

        self.title.is_valid()
            && self.address.is_valid()
            && self.price.is_valid()
            && self.capacity_message.is_none()
    }

    /// Builds a [`Submission`] out of this form, validating it first.
    ///
    /// [`None`] is returned (and every error display refreshed) if any
    /// field fails validation.
    #[must_use]
    pub fn submission(&mut self) -> Option<Submission> {
        if !self.validate() {
            return None;
        }

        let description = Description::new(self.description.trim());
        Some(Submission {
            title: Title::new(self.title.value.trim())?,
            address: Address::new(self.address.value.trim())?,
            price: validate_price(&self.price.value, price_floor(self.kind))
                .ok()?,
            kind: self.kind,
            rooms: self.rooms,
            guests: self.guests,
            checkin: self.checkin,
            checkout: self.checkout,
            features: self.features.clone(),
            description,
            avatar: self.avatar.clone(),
            photos: self.photos.clone(),
        })
    }

    /// Resets the form to its initial state: default control values, no
    /// errors, no attachments; the price floor, placeholder and check-time
    /// mirroring are re-derived from the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Revalidates the price field against the current floor.
    fn refresh_price(&mut self) {
        self.price.refresh(
            validate_price(&self.price.value, price_floor(self.kind))
                .map(drop),
        );
    }

    /// Revalidates the rooms/guests pairing.
    fn refresh_capacity(&mut self) {
        self.capacity_message = validate_capacity(self.rooms, self.guests)
            .err()
            .map(|e| e.to_string());
    }
}

#[cfg(test)]
mod spec {
    use common::Price;

    use crate::domain::listing::{CheckTime, Feature, Kind};

    use super::{
        price_floor, validate_capacity, validate_price, validate_title,
        CapacityError, Form, PriceError, TitleError, MAX_PRICE,
    };

    #[test]
    fn title_length_bounds_are_inclusive() {
        assert_eq!(validate_title(""), Err(TitleError::Required));
        assert_eq!(validate_title("   "), Err(TitleError::Required));
        assert_eq!(validate_title(&"a".repeat(29)), Err(TitleError::TooShort));
        assert_eq!(validate_title(&"a".repeat(30)), Ok(()));
        assert_eq!(validate_title(&"a".repeat(100)), Ok(()));
        assert_eq!(validate_title(&"a".repeat(101)), Err(TitleError::TooLong));
    }

    #[test]
    fn price_is_bounded_and_fails_closed_on_garbage() {
        let min = Price::new(1_000);

        assert_eq!(validate_price("", min), Err(PriceError::Required));
        assert_eq!(
            validate_price("cheap", min),
            Err(PriceError::NotANumber),
        );
        assert_eq!(
            validate_price("999", min),
            Err(PriceError::BelowMin(min)),
        );
        assert_eq!(validate_price("1000", min), Ok(min));
        assert_eq!(
            validate_price("1000001", min),
            Err(PriceError::AboveMax(MAX_PRICE)),
        );
    }

    #[test]
    fn capacity_pairing_follows_the_rule_table() {
        assert!(validate_capacity(1, 1).is_ok());
        assert!(validate_capacity(1, 2).is_err());
        assert!(validate_capacity(2, 2).is_ok());
        assert!(validate_capacity(2, 3).is_err());
        assert!(validate_capacity(3, 3).is_ok());
        assert!(validate_capacity(100, 100).is_ok());
        assert!(validate_capacity(100, 0).is_err());
        assert_eq!(
            validate_capacity(4, 2),
            Err(CapacityError::UnsupportedRooms(4)),
        );
    }

    #[test]
    fn kind_change_clamps_a_too_low_price() {
        let mut form = Form::new();
        form.set_price("500");
        assert!(!form.price().is_valid());

        form.set_kind(Kind::Palace);
        assert_eq!(form.price().value(), "10000");
        assert!(form.price().is_valid());
        assert_eq!(form.placeholder(), "10000");
    }

    #[test]
    fn kind_change_keeps_a_high_enough_price() {
        let mut form = Form::new();
        form.set_price("250000");
        form.set_kind(Kind::Palace);
        assert_eq!(form.price().value(), "250000");
        assert!(form.price().is_valid());
    }

    #[test]
    fn hotel_and_bungalow_have_no_price_floor() {
        assert_eq!(price_floor(Kind::Hotel), Price::new(0));
        assert_eq!(price_floor(Kind::Bungalow), Price::new(0));
        assert_eq!(price_floor(Kind::Flat), Price::new(1_000));
        assert_eq!(price_floor(Kind::House), Price::new(5_000));
        assert_eq!(price_floor(Kind::Palace), Price::new(10_000));
    }

    #[test]
    fn check_times_stay_mirror_equal() {
        let mut form = Form::new();
        assert_eq!(
            form.check_times(),
            (CheckTime::Twelve, CheckTime::Twelve),
        );

        form.set_checkin(CheckTime::Fourteen);
        assert_eq!(
            form.check_times(),
            (CheckTime::Fourteen, CheckTime::Fourteen),
        );

        form.set_checkout(CheckTime::Thirteen);
        assert_eq!(
            form.check_times(),
            (CheckTime::Thirteen, CheckTime::Thirteen),
        );
    }

    #[test]
    fn validate_gates_submission_and_clears_stale_errors() {
        let mut form = Form::new();
        assert!(!form.validate());
        assert!(form.submission().is_none());

        form.set_title("A cozy flat in the city center!");
        form.set_address("Tokyo, somewhere nice");
        form.set_price("2000");
        assert!(form.validate());

        let submission = form.submission().unwrap();
        assert_eq!(submission.price, Price::new(2_000));
        assert_eq!(submission.kind, Kind::Flat);

        // An error must disappear as soon as its input is corrected.
        form.set_guests(3);
        assert!(!form.validate());
        assert!(form.capacity_message().is_some());
        form.set_rooms(3);
        assert!(form.validate());
        assert!(form.capacity_message().is_none());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut form = Form::new();
        form.set_title("x");
        form.set_price("999999999");
        form.set_kind(Kind::Palace);
        form.toggle_feature(Feature::Wifi);
        form.reset();

        assert_eq!(form.kind(), Kind::Flat);
        assert_eq!(form.capacity(), (1, 1));
        assert_eq!(form.placeholder(), "1000");
        assert!(form.title().is_valid());
        assert_eq!(form.title().value(), "");
        assert!(form.price().is_valid());
    }
}
