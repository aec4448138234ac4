//! World configuration.

use crate::{error::Error, rules::Boundary, world::World};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
/// Nothing here can be changed once the world exists.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 80)]
    pub width: usize,

    /// Height.
    #[educe(Default = 60)]
    pub height: usize,

    /// How neighbors outside the grid are treated.
    pub boundary: Boundary,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the boundary policy.
    pub fn set_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the size is zero or too large.
    pub fn world(&self) -> Result<World, Error> {
        World::new(self)
    }
}
