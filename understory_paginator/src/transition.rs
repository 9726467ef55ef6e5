// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition strategies used when the paginator swaps views.
//!
//! A [`Transition`] is handed the outgoing and incoming views and is expected to
//! start whatever visual effect the host supports. The paginator does not wait
//! for the effect to finish and does not serialize overlapping transitions.
//!
//! Hosts that want the paginator to build default transitions on demand provide
//! a [`TransitionFactory`]. [`FlipFactory`] is a ready-made factory for views
//! implementing [`Flip`], and [`NoTransition`] swaps views instantly.

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

/// Direction of a paginator step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards the end of the sequence.
    Forward,
    /// Towards the start of the sequence.
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        })
    }
}

/// A pluggable transition between two views.
pub trait Transition<V> {
    /// Start transitioning from `outgoing` to `incoming`.
    ///
    /// This is fire-and-forget: implementations should hand the effect to the
    /// host and return without waiting for it to complete.
    fn run(&mut self, outgoing: &V, incoming: &V);

    /// Duration used for subsequent runs.
    fn duration(&self) -> Duration;

    /// Sets the duration used for subsequent runs.
    fn set_duration(&mut self, duration: Duration);
}

/// Builds default transitions for a paginator.
///
/// This stands in for whatever host context is needed to construct the
/// toolkit's native effects. It is supplied once, when the paginator is built,
/// and consulted whenever a default transition must be synthesized.
pub trait TransitionFactory<V> {
    /// Builds the default transition used when stepping forward.
    fn forward(&self) -> Box<dyn Transition<V>>;

    /// Builds the default transition used when stepping backward.
    fn backward(&self) -> Box<dyn Transition<V>>;

    /// Builds the default transition for `direction`.
    fn make(&self, direction: Direction) -> Box<dyn Transition<V>> {
        match direction {
            Direction::Forward => self.forward(),
            Direction::Backward => self.backward(),
        }
    }
}

/// Side a [`FlipTransition`] turns towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlipSide {
    /// The outgoing view turns over to the left.
    Left,
    /// The outgoing view turns over to the right.
    Right,
}

/// Views that can play a card flip towards another view.
pub trait Flip {
    /// Start flipping `self` over to reveal `incoming`.
    fn start_flip(&self, incoming: &Self, side: FlipSide, duration: Duration);
}

/// A card flip from the outgoing view to the incoming one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlipTransition {
    side: FlipSide,
    duration: Duration,
}

impl FlipTransition {
    /// Duration used when none is configured.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

    /// Creates a flip towards `side` with [`Self::DEFAULT_DURATION`].
    #[must_use]
    pub const fn new(side: FlipSide) -> Self {
        Self {
            side,
            duration: Self::DEFAULT_DURATION,
        }
    }

    /// Creates a flip to the right, the default forward transition.
    #[must_use]
    pub const fn right() -> Self {
        Self::new(FlipSide::Right)
    }

    /// Creates a flip to the left, the default backward transition.
    #[must_use]
    pub const fn left() -> Self {
        Self::new(FlipSide::Left)
    }

    /// Returns this flip with the given duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Side this flip turns towards.
    #[must_use]
    pub const fn side(&self) -> FlipSide {
        self.side
    }
}

impl<V: Flip> Transition<V> for FlipTransition {
    fn run(&mut self, outgoing: &V, incoming: &V) {
        outgoing.start_flip(incoming, self.side, self.duration);
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}

/// Factory producing a right flip forward and a left flip backward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlipFactory {
    /// Duration given to every flip this factory builds.
    pub duration: Duration,
}

impl Default for FlipFactory {
    fn default() -> Self {
        Self {
            duration: FlipTransition::DEFAULT_DURATION,
        }
    }
}

impl<V: Flip> TransitionFactory<V> for FlipFactory {
    fn forward(&self) -> Box<dyn Transition<V>> {
        Box::new(FlipTransition::right().with_duration(self.duration))
    }

    fn backward(&self) -> Box<dyn Transition<V>> {
        Box::new(FlipTransition::left().with_duration(self.duration))
    }
}

/// Instant swap without any visual effect.
///
/// Also usable as a [`TransitionFactory`] for hosts that never animate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoTransition {
    /// Stored so that duration setters round-trip; never used for timing.
    pub duration: Duration,
}

impl<V> Transition<V> for NoTransition {
    fn run(&mut self, _outgoing: &V, _incoming: &V) {}

    fn duration(&self) -> Duration {
        self.duration
    }

    fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}

impl<V> TransitionFactory<V> for NoTransition {
    fn forward(&self) -> Box<dyn Transition<V>> {
        Box::new(*self)
    }

    fn backward(&self) -> Box<dyn Transition<V>> {
        Box::new(*self)
    }
}
