//! [`Submission`] definitions.

use common::Price;

use crate::upload::FileUpload;

use super::listing::{
    Address, CheckTime, Description, Features, Guests, Kind, Rooms, Title,
};

/// New listing announcement composed by the advert form.
///
/// Unlike a server-sourced [`Listing`], a [`Submission`] is complete by
/// construction: it only exists once every form field has passed
/// validation.
///
/// [`Listing`]: super::Listing
#[derive(Clone, Debug)]
pub struct Submission {
    /// [`Title`] of the announced offer.
    pub title: Title,

    /// [`Address`] of the announced offer.
    pub address: Address,

    /// [`Price`] per night of the announced offer.
    pub price: Price,

    /// Housing [`Kind`] of the announced offer.
    pub kind: Kind,

    /// Number of rooms of the announced offer.
    pub rooms: Rooms,

    /// Number of guests the announced offer hosts.
    pub guests: Guests,

    /// [`CheckTime`] guests may check in after.
    pub checkin: CheckTime,

    /// [`CheckTime`] guests must check out before.
    pub checkout: CheckTime,

    /// [`Features`] of the announced offer.
    pub features: Features,

    /// [`Description`] of the announced offer, if any was given.
    pub description: Option<Description>,

    /// Avatar image of the announcing author, if any was attached.
    pub avatar: Option<FileUpload>,

    /// Photos of the announced offer.
    pub photos: Vec<FileUpload>,
}
