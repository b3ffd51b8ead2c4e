//! Typed identifiers for model objects.
//!
//! Ids are plain sequence numbers tagged with a marker type, so a comment id
//! can never be passed where some other kind of id is expected.

use derive_where::derive_where;
use std::{
    fmt::{Display, Formatter},
    marker::PhantomData,
};

#[derive_where(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Debug,
    Default,
    Hash,
    Serialize,
    Deserialize
)]
#[serde(transparent)]
pub struct Id<Marker>(u64, #[serde(skip)] PhantomData<Marker>);

impl<Marker> Id<Marker> {
    #[must_use]
    pub fn new(inner: u64) -> Self {
        Self(inner, PhantomData)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<Marker> From<u64> for Id<Marker> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<Marker> From<Id<Marker>> for u64 {
    fn from(value: Id<Marker>) -> Self {
        value.get()
    }
}

/// Hands out ids in increasing order, never repeating one.
#[derive_where(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct IdGenerator<Marker> {
    next: u64,
    phantom_data: PhantomData<Marker>,
}

impl<Marker> IdGenerator<Marker> {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Id::new(0))
    }

    #[must_use]
    pub fn starting_at(first: Id<Marker>) -> Self {
        Self {
            next: first.get(),
            phantom_data: PhantomData,
        }
    }

    #[must_use]
    pub fn peek(&self) -> Id<Marker> {
        Id::new(self.next)
    }

    pub fn generate(&mut self) -> Id<Marker> {
        let id = self.peek();
        self.next = self
            .next
            .checked_add(1)
            .expect("Id space exhausted.");
        id
    }
}
