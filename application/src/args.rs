//! [`Args`] definitions.

use clap::Parser;
use common::price;
use service::{
    domain::listing,
    filter::{Criteria, Selection},
};

/// Demo of the listings map: loads the collection, applies the provided
/// filter criteria and renders the visible pins.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Housing kind to keep on the map.
    #[arg(long, value_name = "KIND")]
    pub housing_type: Option<listing::Kind>,

    /// Price bucket to keep on the map.
    #[arg(long, value_name = "BUCKET")]
    pub housing_price: Option<price::Bucket>,

    /// Exact number of rooms to keep on the map.
    #[arg(long, value_name = "N")]
    pub housing_rooms: Option<listing::Rooms>,

    /// Exact number of guests to keep on the map.
    #[arg(long, value_name = "N")]
    pub housing_guests: Option<listing::Guests>,

    /// Feature the kept offers are required to provide (repeatable).
    #[arg(long = "feature", value_name = "FEATURE")]
    pub features: Vec<listing::Feature>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Builds the filter [`Criteria`] out of the provided options.
    ///
    /// [`None`] is returned if no filter option was given at all.
    #[must_use]
    pub fn criteria(&self) -> Option<Criteria> {
        let criteria = Criteria {
            kind: self.housing_type.map_or(Selection::Any, Selection::Exactly),
            price: self
                .housing_price
                .map_or(Selection::Any, Selection::Exactly),
            rooms: self
                .housing_rooms
                .map_or(Selection::Any, Selection::Exactly),
            guests: self
                .housing_guests
                .map_or(Selection::Any, Selection::Exactly),
            features: self.features.iter().copied().collect(),
        };

        (criteria != Criteria::default()).then_some(criteria)
    }
}
