use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct OrganiserRow {
    pub id: i64,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct EventRow {
    pub id: i64,
    pub organiser_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub venue_location: Option<String>,
    pub availability: Option<i32>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

/// Field set for a new organiser; the store assigns the id.
#[derive(Debug, Clone, Default)]
pub struct NewOrganiser {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
}

/// Field set for a new event; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub organiser_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub venue_location: Option<String>,
    pub availability: Option<i32>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

impl NewOrganiser {
    pub(crate) fn into_row(self, id: i64) -> OrganiserRow {
        OrganiserRow {
            id,
            name: self.name,
            logo: self.logo,
            description: self.description,
        }
    }
}

impl NewEvent {
    pub(crate) fn into_row(self, id: i64) -> EventRow {
        EventRow {
            id,
            organiser_id: self.organiser_id,
            name: self.name,
            description: self.description,
            venue: self.venue,
            venue_location: self.venue_location,
            availability: self.availability,
            date: self.date,
            image: self.image,
            price: self.price,
        }
    }
}
