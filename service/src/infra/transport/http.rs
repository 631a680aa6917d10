//! HTTP [`Transport`] over the remote listings endpoint.
//!
//! [`Transport`]: super::Transport

use std::time::Duration;

use common::{Fetch, Handler, Ping, Price, Submit};
use reqwest::multipart;
use serde::Deserialize;
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{listing, Listing, Submission},
    upload::FileUpload,
};

use super::Error;

/// [`Http`] transport configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base URL of the remote listings endpoint.
    #[default("https://23.javascript.htmlacademy.pro/keksobooking".to_owned())]
    pub url: String,

    /// Timeout of a single request.
    #[default(Duration::from_secs(10))]
    pub timeout: Duration,
}

/// [`Transport`] talking to the remote listings endpoint over HTTP.
///
/// [`Transport`]: super::Transport
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base URL of the remote endpoint.
    url: String,
}

impl Http {
    /// Creates a new [`Http`] transport out of the provided [`Config`].
    ///
    /// # Errors
    ///
    /// Errors if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, Traced<Error>> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| tracerr::new!(Error::Request(e)))?,
            url: config.url.clone(),
        })
    }

    /// Returns the URL the listing collection is served under.
    fn data_url(&self) -> String {
        format!("{}/data", self.url)
    }
}

impl Handler<Fetch> for Http {
    type Ok = Vec<Listing>;
    type Err = Traced<Error>;

    async fn execute(&self, _: Fetch) -> Result<Self::Ok, Self::Err> {
        let response = self
            .client
            .get(self.data_url())
            .send()
            .await
            .map_err(|e| tracerr::new!(Error::Request(e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(tracerr::new!(Error::Status { status, detail }));
        }

        let records: Vec<ListingRecord> = response
            .json()
            .await
            .map_err(|e| tracerr::new!(Error::Request(e)))?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}

impl Handler<Ping> for Http {
    type Ok = bool;
    type Err = Traced<Error>;

    async fn execute(&self, _: Ping) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .client
            .get(self.data_url())
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false))
    }
}

impl Handler<Submit<Submission>> for Http {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Submit(submission): Submit<Submission>,
    ) -> Result<Self::Ok, Self::Err> {
        let form = multipart_form(submission)
            .map_err(|e| tracerr::new!(Error::Request(e)))?;

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| tracerr::new!(Error::Request(e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            log::warn!("submission rejected by the endpoint: {status}");
            Err(tracerr::new!(Error::Status { status, detail }))
        }
    }
}

/// Renders the provided [`Submission`] as a multipart form body.
fn multipart_form(
    submission: Submission,
) -> Result<multipart::Form, reqwest::Error> {
    let Submission {
        title,
        address,
        price,
        kind,
        rooms,
        guests,
        checkin,
        checkout,
        features,
        description,
        avatar,
        photos,
    } = submission;

    let mut form = multipart::Form::new()
        .text("title", title.to_string())
        .text("address", address.to_string())
        .text("price", price.to_string())
        .text("type", kind.to_string())
        .text("rooms", rooms.to_string())
        .text("guests", guests.to_string())
        .text("timein", checkin.to_string())
        .text("timeout", checkout.to_string());
    for feature in features.iter() {
        form = form.text("features[]", feature.to_string());
    }
    if let Some(description) = description {
        form = form.text("description", description.to_string());
    }
    if let Some(avatar) = avatar {
        form = form.part("avatar", file_part(avatar)?);
    }
    for photo in photos {
        form = form.part("images", file_part(photo)?);
    }
    Ok(form)
}

/// Renders the provided file as a multipart form part.
fn file_part(file: FileUpload) -> Result<multipart::Part, reqwest::Error> {
    multipart::Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(file.mime.as_ref())
}

/// Wire form of a [`Listing`].
///
/// Every field is optional: the endpoint serves third-party data, and
/// whatever is absent or unrecognized simply degrades into an absent
/// domain field.
#[derive(Debug, Deserialize)]
struct ListingRecord {
    /// Author of the listing.
    author: Option<AuthorRecord>,

    /// Offer details of the listing.
    offer: Option<OfferRecord>,

    /// Coordinates of the listing.
    location: Option<LocationRecord>,
}

/// Wire form of a [`listing::Author`].
#[derive(Debug, Deserialize)]
struct AuthorRecord {
    /// Avatar image reference.
    avatar: Option<String>,
}

/// Wire form of a [`listing::Offer`].
#[derive(Debug, Deserialize)]
struct OfferRecord {
    /// Title of the offer.
    title: Option<String>,

    /// Human-readable address of the offer.
    address: Option<String>,

    /// Price per night of the offer.
    price: Option<u32>,

    /// Housing kind of the offer.
    #[serde(rename = "type")]
    kind: Option<String>,

    /// Number of rooms of the offer.
    rooms: Option<u32>,

    /// Number of guests the offer hosts.
    guests: Option<u32>,

    /// Check-in time of the offer.
    checkin: Option<String>,

    /// Check-out time of the offer.
    checkout: Option<String>,

    /// Features of the offer.
    #[serde(default)]
    features: Vec<String>,

    /// Description of the offer.
    description: Option<String>,

    /// Photos of the offer.
    #[serde(default)]
    photos: Vec<String>,
}

/// Wire form of a [`listing::Location`].
#[derive(Debug, Deserialize)]
struct LocationRecord {
    /// Latitude of the location.
    x: Option<f64>,

    /// Longitude of the location.
    y: Option<f64>,
}

impl From<ListingRecord> for Listing {
    fn from(record: ListingRecord) -> Self {
        Self {
            author: record
                .author
                .and_then(|a| a.avatar)
                .and_then(listing::Avatar::new)
                .map(|avatar| listing::Author { avatar }),
            offer: record.offer.map(Into::into),
            location: record.location.and_then(|l| match (l.x, l.y) {
                (Some(x), Some(y)) => Some(listing::Location { x, y }),
                (Some(_) | None, _) => None,
            }),
        }
    }
}

impl From<OfferRecord> for listing::Offer {
    fn from(record: OfferRecord) -> Self {
        Self {
            title: record
                .title
                .as_deref()
                .map(str::trim)
                .and_then(listing::Title::new),
            address: record
                .address
                .as_deref()
                .map(str::trim)
                .and_then(listing::Address::new),
            price: record.price.map(Price::new),
            kind: record.kind.as_deref().and_then(|s| s.parse().ok()),
            rooms: record.rooms,
            guests: record.guests,
            checkin: record.checkin.as_deref().and_then(|s| s.parse().ok()),
            checkout: record.checkout.as_deref().and_then(|s| s.parse().ok()),
            features: record
                .features
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect(),
            description: record
                .description
                .as_deref()
                .map(str::trim)
                .and_then(listing::Description::new),
            photos: record
                .photos
                .into_iter()
                .filter_map(listing::PhotoUrl::new)
                .collect(),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Price;

    use crate::domain::{listing, Listing};

    use super::ListingRecord;

    fn decode(json: &str) -> Listing {
        serde_json::from_str::<ListingRecord>(json).unwrap().into()
    }

    #[test]
    fn decodes_a_complete_record() {
        let listing = decode(
            r#"{
                "author": {"avatar": "img/avatars/user03.png"},
                "offer": {
                    "title": "Roomy place near the station",
                    "address": "35.68950, 139.69200",
                    "price": 52000,
                    "type": "palace",
                    "rooms": 3,
                    "guests": 3,
                    "checkin": "12:00",
                    "checkout": "14:00",
                    "features": ["wifi", "parking", "wifi"],
                    "description": "Nice place.",
                    "photos": ["http://example.com/1.jpg"]
                },
                "location": {"x": 35.6895, "y": 139.692}
            }"#,
        );

        let offer = listing.offer.unwrap();
        assert_eq!(
            offer.title.unwrap().to_string(),
            "Roomy place near the station",
        );
        assert_eq!(offer.price, Some(Price::new(52_000)));
        assert_eq!(offer.kind, Some(listing::Kind::Palace));
        assert_eq!(offer.checkin, Some(listing::CheckTime::Twelve));
        assert_eq!(offer.checkout, Some(listing::CheckTime::Fourteen));
        // Duplicates on the wire collapse into the set.
        assert_eq!(offer.features.len(), 2);
        assert_eq!(listing.location.unwrap().x, 35.6895);
        assert!(listing.author.is_some());
    }

    #[test]
    fn absent_and_unknown_fields_degrade_gracefully() {
        let listing = decode(
            r#"{
                "offer": {
                    "title": "  padded  ",
                    "type": "castle",
                    "checkin": "23:59",
                    "features": ["wifi", "jacuzzi"]
                }
            }"#,
        );

        assert!(listing.author.is_none());
        assert!(listing.location.is_none());

        let offer = listing.offer.unwrap();
        // Wire values get trimmed before the domain check.
        assert_eq!(offer.title.unwrap().to_string(), "padded");
        assert!(offer.price.is_none());
        // Unrecognized enum values degrade into absence.
        assert!(offer.kind.is_none());
        assert!(offer.checkin.is_none());
        assert_eq!(offer.features.len(), 1);
        assert!(offer.features.contains(listing::Feature::Wifi));
    }

    #[test]
    fn offerless_record_still_decodes() {
        let listing = decode(r#"{"location": {"x": 35.0}}"#);

        assert!(listing.offer.is_none());
        // A half-filled location is as good as none.
        assert!(listing.location.is_none());
    }
}
