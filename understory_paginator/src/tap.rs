// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition for the tap-to-advance gesture.
//!
//! [`TapState`] turns raw pointer down/move/up events on a view into taps. Hosts
//! whose toolkit already reports clicks can skip it and call
//! [`Paginator::tap_view`](crate::Paginator::tap_view) directly.
//!
//! ## Tap rules
//!
//! A pointer up produces [`TapResult::Tap`] when all of these hold:
//! 1. A press is active.
//! 2. Down and up landed on the same view.
//! 3. The pointer never travelled further than the slop from the down position,
//!    neither during `on_move` nor at release (if a slop is configured).
//! 4. The press was not held longer than the hold limit (if configured).
//!
//! ```
//! use kurbo::Point;
//! use understory_paginator::{TapResult, TapState};
//!
//! let mut taps = TapState::new();
//! taps.on_down(0, Point::new(10.0, 10.0), 1_000);
//! assert_eq!(taps.on_up(0, Point::new(12.0, 11.0), 1_080), TapResult::Tap(0));
//!
//! // A swipe is not a tap.
//! taps.on_down(0, Point::new(10.0, 10.0), 2_000);
//! assert!(taps.on_move(Point::new(90.0, 10.0)));
//! assert_eq!(taps.on_up(0, Point::new(90.0, 10.0), 2_050), TapResult::Rejected(Some(0)));
//! ```

use kurbo::Point;

/// An active press on a view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Press {
    /// Index of the view the press started on.
    pub index: usize,
    /// Pointer position at press time.
    pub position: Point,
    /// Press timestamp in milliseconds.
    pub time: u64,
    /// True once the pointer moved beyond the slop.
    pub slop_exceeded: bool,
}

/// Outcome of a pointer up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// A tap on the view at this index.
    Tap(usize),
    /// No tap; carries the index the press started on, if there was a press.
    Rejected(Option<usize>),
}

/// Single-pointer tap recognizer.
#[derive(Clone, Debug)]
pub struct TapState {
    press: Option<Press>,
    /// Maximum pointer travel, in the host's coordinate units, before a press
    /// stops counting as a tap. `None` allows any travel.
    pub slop: Option<f64>,
    /// Maximum time in milliseconds between down and up. `None` allows any
    /// hold time.
    pub hold_limit: Option<u64>,
}

impl TapState {
    /// Default slop in logical pixels.
    pub const DEFAULT_SLOP: f64 = 10.0;
    /// Default hold limit in milliseconds.
    pub const DEFAULT_HOLD_LIMIT: u64 = 500;

    /// Creates a recognizer with [`Self::DEFAULT_SLOP`] and [`Self::DEFAULT_HOLD_LIMIT`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_thresholds(Some(Self::DEFAULT_SLOP), Some(Self::DEFAULT_HOLD_LIMIT))
    }

    /// Creates a recognizer with custom thresholds.
    #[must_use]
    pub const fn with_thresholds(slop: Option<f64>, hold_limit: Option<u64>) -> Self {
        Self {
            press: None,
            slop,
            hold_limit,
        }
    }

    /// Records a pointer down on the view at `index`, replacing any active press.
    pub fn on_down(&mut self, index: usize, position: Point, timestamp: u64) {
        self.press = Some(Press {
            index,
            position,
            time: timestamp,
            slop_exceeded: false,
        });
    }

    /// Tracks pointer movement during a press.
    ///
    /// Returns `true` if this move is the one that pushed the press beyond the slop.
    pub fn on_move(&mut self, position: Point) -> bool {
        let (Some(press), Some(slop)) = (self.press.as_mut(), self.slop) else {
            return false;
        };
        if press.slop_exceeded || press.position.distance(position) <= slop {
            return false;
        }
        press.slop_exceeded = true;
        true
    }

    /// Processes a pointer up on the view at `index` and ends the press.
    pub fn on_up(&mut self, index: usize, position: Point, timestamp: u64) -> TapResult {
        let Some(press) = self.press.take() else {
            return TapResult::Rejected(None);
        };

        if press.index != index || press.slop_exceeded {
            return TapResult::Rejected(Some(press.index));
        }

        let travel_ok = self
            .slop
            .is_none_or(|slop| press.position.distance(position) <= slop);
        let hold_ok = self
            .hold_limit
            .is_none_or(|limit| timestamp.saturating_sub(press.time) <= limit);

        if travel_ok && hold_ok {
            TapResult::Tap(press.index)
        } else {
            TapResult::Rejected(Some(press.index))
        }
    }

    /// Abandons the active press.
    ///
    /// Returns `true` if a press was active.
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// The active press, if any.
    #[must_use]
    pub const fn press(&self) -> Option<&Press> {
        self.press.as_ref()
    }
}

impl Default for TapState {
    fn default() -> Self {
        Self::new()
    }
}
