// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_paginator --heading-base-level=0

//! Understory Paginator: a headless controller for paging through views.
//!
//! Given an ordered, non-empty sequence of host views, a [`Paginator`] steps
//! forward and backward through them, starting a [`Transition`] for every step.
//! It can optionally:
//!
//! - wrap around at either end ([`WrapMode::Loop`]),
//! - keep a tap-to-advance gesture attached to the current view,
//! - notify an [`EndListener`] when a forward step lands on the last view.
//!
//! The core concepts are:
//!
//! - [`PageView`]: the one capability the paginator needs from a host view,
//!   attaching and detaching the tap-to-advance gesture.
//! - [`Transition`]: a pluggable, fire-and-forget effect between an outgoing
//!   and an incoming view. [`FlipTransition`] delegates a card flip to views
//!   implementing [`Flip`]; [`NoTransition`] swaps instantly.
//! - [`TransitionFactory`]: builds default forward/backward transitions from
//!   host context, supplied once when the paginator is built.
//! - [`TapState`]: turns pointer down/up into taps for hosts that do not report
//!   clicks themselves.
//!
//! This crate deliberately does **not** render anything or own an event loop.
//! Host frameworks are responsible for:
//!
//! - Owning the widgets behind each view handle.
//! - Forwarding taps on the view holding the gesture to [`Paginator::tap`]
//!   (or pointer events to [`Paginator::pointer_down`] / [`Paginator::pointer_up`]).
//! - Playing the effect a [`Transition`] asks for.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_paginator::{NoTransition, PageView, Paginator, WrapMode};
//!
//! #[derive(Debug)]
//! struct Card {
//!     id: u32,
//!     tappable: bool,
//! }
//!
//! impl PageView for Card {
//!     fn set_tap_to_advance(&mut self, attached: bool) {
//!         self.tappable = attached;
//!     }
//! }
//!
//! let cards = (0..3).map(|id| Card { id, tappable: false }).collect::<Vec<_>>();
//! let mut pager = Paginator::builder(cards)
//!     .wrap(WrapMode::Loop)
//!     .factory(NoTransition::default())
//!     .listener(|| println!("last card"))
//!     .build()
//!     .unwrap();
//!
//! // Only the current card carries the gesture.
//! assert!(pager.current_view().tappable);
//!
//! pager.advance();
//! pager.advance(); // prints "last card"
//! assert_eq!(pager.current_view().id, 2);
//!
//! // Looping wraps back to the first card.
//! let step = pager.advance().unwrap();
//! assert!(step.wrapped);
//! assert_eq!(pager.current_view().id, 0);
//! ```
//!
//! ## Flip transitions
//!
//! Views that can play a card flip implement [`Flip`]; [`FlipFactory`] then
//! provides a right flip forward and a left flip backward.
//!
//! ```rust
//! use core::cell::Cell;
//! use core::time::Duration;
//! use understory_paginator::{Flip, FlipFactory, FlipSide, PageView, Paginator};
//!
//! #[derive(Debug, Default)]
//! struct Page {
//!     last_flip: Cell<Option<FlipSide>>,
//! }
//!
//! impl PageView for Page {
//!     fn set_tap_to_advance(&mut self, _attached: bool) {}
//! }
//!
//! impl Flip for Page {
//!     fn start_flip(&self, _incoming: &Self, side: FlipSide, _duration: Duration) {
//!         self.last_flip.set(Some(side));
//!     }
//! }
//!
//! let mut pager = Paginator::new(vec![Page::default(), Page::default()], FlipFactory::default())
//!     .unwrap();
//! pager.set_backward_duration(Duration::from_millis(250));
//!
//! pager.advance();
//! assert_eq!(pager.views()[0].last_flip.get(), Some(FlipSide::Right));
//! pager.retreat();
//! assert_eq!(pager.views()[1].last_flip.get(), Some(FlipSide::Left));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` builds that rely on `libm` for the tap slop distance.
//! - `serde`: derives `Serialize`/`Deserialize` for [`PaginatorOptions`] and
//!   the small enums it uses.
//!
//! Steps are logged with `tracing` at `debug` level; ignored requests and
//! gesture moves at `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod paginator;
mod tap;
mod transition;

pub use error::{ErrorKind, PaginatorError};
pub use paginator::{
    EndListener, PageView, Paginator, PaginatorBuilder, PaginatorOptions, Step, WrapMode,
};
pub use tap::{Press, TapResult, TapState};
pub use transition::{
    Direction, Flip, FlipFactory, FlipSide, FlipTransition, NoTransition, Transition,
    TransitionFactory,
};
