//! Filter criteria for list queries and the predicates built from them.
//!
//! A [`Predicate`] is an always-true base condition AND-ed with zero or more
//! "field contains substring" conditions. The same predicate can be rendered
//! into a Postgres `WHERE` clause or evaluated in memory against a row.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};

use crate::models::{EventRow, OrganiserRow};

/// A text column that list queries may filter on.
pub trait FilterField: Copy + Eq + fmt::Debug {
    fn column(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Name,
    Description,
    Venue,
    VenueLocation,
}

impl FilterField for EventField {
    fn column(self) -> &'static str {
        match self {
            EventField::Name => "name",
            EventField::Description => "description",
            EventField::Venue => "venue",
            EventField::VenueLocation => "venue_location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganiserField {
    Name,
    Description,
}

impl FilterField for OrganiserField {
    fn column(self) -> &'static str {
        match self {
            OrganiserField::Name => "name",
            OrganiserField::Description => "description",
        }
    }
}

/// Read access to the filterable columns of a row.
pub trait Filterable<F: FilterField> {
    fn field(&self, field: F) -> Option<&str>;
}

impl Filterable<EventField> for EventRow {
    fn field(&self, field: EventField) -> Option<&str> {
        match field {
            EventField::Name => self.name.as_deref(),
            EventField::Description => self.description.as_deref(),
            EventField::Venue => self.venue.as_deref(),
            EventField::VenueLocation => self.venue_location.as_deref(),
        }
    }
}

impl Filterable<OrganiserField> for OrganiserRow {
    fn field(&self, field: OrganiserField) -> Option<&str> {
        match field {
            OrganiserField::Name => self.name.as_deref(),
            OrganiserField::Description => self.description.as_deref(),
        }
    }
}

/// `field LIKE '%needle%'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contains<F> {
    pub field: F,
    pub needle: String,
}

impl<F> Contains<F> {
    pub fn pattern(&self) -> String {
        format!("%{}%", self.needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate<F> {
    conditions: Vec<Contains<F>>,
}

impl<F: FilterField> Default for Predicate<F> {
    fn default() -> Self {
        Self::always()
    }
}

impl<F: FilterField> Predicate<F> {
    /// The condition that matches every row.
    pub fn always() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn and_contains(mut self, field: F, needle: impl Into<String>) -> Self {
        self.conditions.push(Contains {
            field,
            needle: needle.into(),
        });
        self
    }

    pub fn conditions(&self) -> &[Contains<F>] {
        &self.conditions
    }

    /// Appends ` WHERE TRUE [AND <column> LIKE $n]*` to `query`.
    pub fn push_where(&self, query: &mut QueryBuilder<'_, Postgres>) {
        query.push(" WHERE TRUE");
        for condition in &self.conditions {
            query.push(" AND ");
            query.push(condition.field.column());
            query.push(" LIKE ");
            query.push_bind(condition.pattern());
        }
    }

    /// Evaluates the predicate against a row with SQL `LIKE` semantics.
    /// A NULL column never matches a condition on it.
    pub fn matches<R: Filterable<F>>(&self, row: &R) -> bool {
        self.conditions.iter().all(|condition| {
            row.field(condition.field)
                .is_some_and(|value| like(value, &condition.pattern()))
        })
    }
}

/// Filter criteria for `events`. Unknown keys are ignored on
/// deserialization and explicit nulls read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub venue_location: Option<String>,
}

impl EventFilter {
    pub fn predicate(&self) -> Predicate<EventField> {
        let mut predicate = Predicate::always();
        for (field, value) in [
            (EventField::Name, &self.name),
            (EventField::Description, &self.description),
            (EventField::Venue, &self.venue),
            (EventField::VenueLocation, &self.venue_location),
        ] {
            if let Some(needle) = value {
                predicate = predicate.and_contains(field, needle.clone());
            }
        }
        predicate
    }
}

/// Filter criteria for `organisers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganiserFilter {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl OrganiserFilter {
    pub fn predicate(&self) -> Predicate<OrganiserField> {
        let mut predicate = Predicate::always();
        if let Some(needle) = &self.name {
            predicate = predicate.and_contains(OrganiserField::Name, needle.clone());
        }
        if let Some(needle) = &self.description {
            predicate = predicate.and_contains(OrganiserField::Description, needle.clone());
        }
        predicate
    }
}

pub fn event_predicate(filter: Option<&EventFilter>) -> Predicate<EventField> {
    filter
        .map(EventFilter::predicate)
        .unwrap_or_else(Predicate::always)
}

pub fn organiser_predicate(filter: Option<&OrganiserFilter>) -> Predicate<OrganiserField> {
    filter
        .map(OrganiserFilter::predicate)
        .unwrap_or_else(Predicate::always)
}

enum Token {
    AnySequence,
    AnyChar,
    Literal(char),
}

// Postgres LIKE: `%` any run, `_` one char, `\` escapes the next char.
fn like(value: &str, pattern: &str) -> bool {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => Token::AnySequence,
            '_' => Token::AnyChar,
            '\\' => Token::Literal(chars.next().unwrap_or('\\')),
            other => Token::Literal(other),
        });
    }

    let value: Vec<char> = value.chars().collect();
    // reachable[i]: the tokens consumed so far can match value[..i]
    let mut reachable = vec![false; value.len() + 1];
    reachable[0] = true;

    for token in &tokens {
        let mut next = vec![false; value.len() + 1];
        match token {
            Token::AnySequence => {
                let mut seen = false;
                for i in 0..=value.len() {
                    seen |= reachable[i];
                    next[i] = seen;
                }
            }
            Token::AnyChar => {
                for i in 1..=value.len() {
                    next[i] = reachable[i - 1];
                }
            }
            Token::Literal(expected) => {
                for i in 1..=value.len() {
                    next[i] = reachable[i - 1] && value[i - 1] == *expected;
                }
            }
        }
        reachable = next;
    }

    reachable[value.len()]
}
