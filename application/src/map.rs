//! Map presentation port.

use service::domain::{listing::Location, Listing};
use tracing as log;

use crate::card::Card;

/// Geographic position on the map canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// Latitude of this [`Position`].
    pub lat: f64,

    /// Longitude of this [`Position`].
    pub lng: f64,
}

impl Position {
    /// Renders this [`Position`] the way the address field displays it.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lng)
    }
}

impl From<Location> for Position {
    fn from(location: Location) -> Self {
        Self { lat: location.x, lng: location.y }
    }
}

/// Single rendered listing marker.
#[derive(Clone, Debug)]
pub struct Pin {
    /// [`Position`] of this [`Pin`] on the canvas.
    pub position: Position,

    /// Popup [`Card`] of this [`Pin`].
    pub card: Card,
}

impl Pin {
    /// Builds the [`Pin`] of the provided [`Listing`].
    ///
    /// [`None`] is returned for a [`Listing`] without a location: it gets
    /// no marker, whatever else it carries.
    #[must_use]
    pub fn of(listing: &Listing) -> Option<Self> {
        listing.location.map(|location| Self {
            position: location.into(),
            card: Card::of(listing),
        })
    }
}

/// Presentation side of the map widget.
///
/// Implementations fully discard and recreate their pin handles on every
/// visible-set change; there is no incremental diffing.
pub trait MapCanvas {
    /// Places (or returns) the draggable main marker at the provided
    /// [`Position`].
    fn render_main_marker(&mut self, position: Position);

    /// Renders the provided [`Pin`]s.
    ///
    /// Always preceded by a [`MapCanvas::clear_pins()`] call.
    fn render_pins(&mut self, pins: &[Pin]);

    /// Removes every rendered listing [`Pin`].
    fn clear_pins(&mut self);
}

/// [`MapCanvas`] rendering into the log output.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceCanvas {
    /// Number of currently rendered pins.
    pins: usize,
}

impl MapCanvas for TraceCanvas {
    fn render_main_marker(&mut self, position: Position) {
        log::info!("main marker at {}", position.address());
    }

    fn render_pins(&mut self, pins: &[Pin]) {
        for pin in pins {
            log::info!(
                "pin at {}: {}",
                pin.position.address(),
                pin.card.summary(),
            );
        }
        log::info!("{} pin(s) rendered", pins.len());
        self.pins = pins.len();
    }

    fn clear_pins(&mut self) {
        if self.pins > 0 {
            log::debug!("{} pin(s) cleared", self.pins);
        }
        self.pins = 0;
    }
}

#[cfg(test)]
mod spec {
    use service::domain::{listing::Location, Listing};

    use super::{Pin, Position};

    #[test]
    fn address_renders_with_five_decimals() {
        let position = Position { lat: 35.652832, lng: 139.839478 };
        assert_eq!(position.address(), "35.65283, 139.83948");
    }

    #[test]
    fn locationless_listing_gets_no_pin() {
        assert!(Pin::of(&Listing::default()).is_none());

        let with_location = Listing {
            location: Some(Location { x: 35.68, y: 139.75 }),
            ..Listing::default()
        };
        assert!(Pin::of(&with_location).is_some());
    }
}
