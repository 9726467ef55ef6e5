// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pages through a small deck of console "cards" with flip transitions.
//!
//! Run with `RUST_LOG=understory_paginator=trace` to see the paginator's own
//! events alongside the demo output.

use core::time::Duration;

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_paginator::{Flip, FlipFactory, FlipSide, PageView, Paginator, WrapMode};

#[derive(Debug)]
struct Card {
    title: &'static str,
    tappable: bool,
}

impl PageView for Card {
    fn set_tap_to_advance(&mut self, attached: bool) {
        self.tappable = attached;
    }
}

impl Flip for Card {
    fn start_flip(&self, incoming: &Self, side: FlipSide, duration: Duration) {
        tracing::info!(
            from = self.title,
            to = incoming.title,
            ?side,
            ms = duration.as_millis() as u64,
            "flip"
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cards = ["Welcome", "Swipe", "Tap", "Done"]
        .into_iter()
        .map(|title| Card {
            title,
            tappable: false,
        })
        .collect::<Vec<_>>();

    let mut pager = Paginator::builder(cards)
        .wrap(WrapMode::Loop)
        .factory(FlipFactory::default())
        .listener(|| tracing::info!("reached the last card"))
        .build()
        .expect("four cards and a flip factory");
    pager.set_backward_duration(Duration::from_millis(250));

    // Two taps on the card holding the gesture.
    for t in [0_u64, 400] {
        let index = pager.cursor();
        pager.pointer_down(index, Point::new(40.0, 40.0), t);
        pager.pointer_up(index, Point::new(42.0, 41.0), t + 60);
    }

    pager.advance();
    pager.retreat();
    // The second of these wraps back to the first card.
    pager.advance();
    pager.advance();

    tracing::info!(
        current = pager.current_view().title,
        tappable = pager.current_view().tappable,
        "done"
    );
}
