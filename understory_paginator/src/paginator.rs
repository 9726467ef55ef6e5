// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paginator controller and its builder.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::Point;
use tracing::{debug, trace};

use crate::{Direction, PaginatorError, TapResult, TapState, Transition, TransitionFactory};

/// A host view managed by a [`Paginator`].
///
/// The paginator never inspects view content. It only toggles the
/// tap-to-advance gesture and hands views to [`Transition`]s.
pub trait PageView {
    /// Attach (`true`) or detach (`false`) the tap-to-advance gesture.
    ///
    /// While attached, the host should forward taps on this view to
    /// [`Paginator::tap`] (or pointer events to [`Paginator::pointer_down`] and
    /// friends).
    fn set_tap_to_advance(&mut self, attached: bool);
}

/// Receives a notification when a forward step lands on the last view.
///
/// Implemented for every `FnMut()` closure.
pub trait EndListener {
    /// Called synchronously from within [`Paginator::advance`].
    fn on_end_reached(&mut self);
}

impl<F: FnMut()> EndListener for F {
    fn on_end_reached(&mut self) {
        self();
    }
}

/// Behavior at the ends of the sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// Stop at the first and last views.
    #[default]
    Never,
    /// Continue from the last view to the first and vice versa.
    Loop,
}

/// Plain configuration for a [`Paginator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PaginatorOptions {
    /// Behavior at the ends of the sequence.
    pub wrap: WrapMode,
    /// Whether the current view carries the tap-to-advance gesture.
    pub tap_to_advance: bool,
    /// Overrides the duration of the default forward transition.
    pub forward_duration: Option<Duration>,
    /// Overrides the duration of the default backward transition.
    pub backward_duration: Option<Duration>,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Never,
            tap_to_advance: true,
            forward_duration: None,
            backward_duration: None,
        }
    }
}

/// Description of a step a paginator performed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Direction of the step.
    pub direction: Direction,
    /// Index of the outgoing view.
    pub from: usize,
    /// Index of the incoming view, now current.
    pub to: usize,
    /// True if the step wrapped around an end of the sequence.
    pub wrapped: bool,
}

/// Builder for a [`Paginator`].
///
/// Transitions not supplied explicitly are built from the factory; building
/// fails with [`PaginatorError::MissingTransition`] when neither is available.
pub struct PaginatorBuilder<V> {
    views: Vec<V>,
    options: PaginatorOptions,
    forward: Option<Box<dyn Transition<V>>>,
    backward: Option<Box<dyn Transition<V>>>,
    factory: Option<Box<dyn TransitionFactory<V>>>,
    listener: Option<Box<dyn EndListener>>,
    taps: TapState,
}

impl<V: fmt::Debug> fmt::Debug for PaginatorBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatorBuilder")
            .field("views", &self.views)
            .field("options", &self.options)
            .field("has_forward", &self.forward.is_some())
            .field("has_backward", &self.backward.is_some())
            .field("has_factory", &self.factory.is_some())
            .field("has_listener", &self.listener.is_some())
            .field("taps", &self.taps)
            .finish()
    }
}

impl<V: PageView> PaginatorBuilder<V> {
    /// Starts a builder over `views` with [`PaginatorOptions::default`].
    #[must_use]
    pub fn new(views: Vec<V>) -> Self {
        Self {
            views,
            options: PaginatorOptions::default(),
            forward: None,
            backward: None,
            factory: None,
            listener: None,
            taps: TapState::new(),
        }
    }

    /// Replaces all plain options at once.
    #[must_use]
    pub fn options(mut self, options: PaginatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the behavior at the ends of the sequence.
    #[must_use]
    pub fn wrap(mut self, wrap: WrapMode) -> Self {
        self.options.wrap = wrap;
        self
    }

    /// Enables or disables the tap-to-advance gesture.
    #[must_use]
    pub fn tap_to_advance(mut self, enabled: bool) -> Self {
        self.options.tap_to_advance = enabled;
        self
    }

    /// Supplies the default forward transition.
    #[must_use]
    pub fn forward(mut self, transition: impl Transition<V> + 'static) -> Self {
        self.forward = Some(Box::new(transition));
        self
    }

    /// Supplies the default backward transition.
    #[must_use]
    pub fn backward(mut self, transition: impl Transition<V> + 'static) -> Self {
        self.backward = Some(Box::new(transition));
        self
    }

    /// Supplies the factory used to build missing default transitions.
    #[must_use]
    pub fn factory(mut self, factory: impl TransitionFactory<V> + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Registers the end listener.
    #[must_use]
    pub fn listener(mut self, listener: impl EndListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Replaces the tap recognizer, for example to change its thresholds.
    #[must_use]
    pub fn tap_state(mut self, taps: TapState) -> Self {
        self.taps = taps;
        self
    }

    /// Builds the paginator.
    ///
    /// With the tap-to-advance gesture enabled, the first view gets the gesture.
    pub fn build(self) -> Result<Paginator<V>, PaginatorError> {
        if self.views.is_empty() {
            return Err(PaginatorError::EmptyViews);
        }
        let factory = self.factory.as_deref();
        let mut forward = resolve_transition(self.forward, factory, Direction::Forward)?;
        let mut backward = resolve_transition(self.backward, factory, Direction::Backward)?;
        if let Some(duration) = self.options.forward_duration {
            forward.set_duration(duration);
        }
        if let Some(duration) = self.options.backward_duration {
            backward.set_duration(duration);
        }

        let mut paginator = Paginator {
            views: self.views,
            cursor: 0,
            wrap: self.options.wrap,
            tap_to_advance: self.options.tap_to_advance,
            forward,
            backward,
            factory: self.factory,
            listener: self.listener,
            taps: self.taps,
        };
        if paginator.tap_to_advance {
            paginator.views[0].set_tap_to_advance(true);
        }
        debug!(
            len = paginator.views.len(),
            wrap = ?paginator.wrap,
            tap_to_advance = paginator.tap_to_advance,
            "paginator built"
        );
        Ok(paginator)
    }
}

fn resolve_transition<V>(
    explicit: Option<Box<dyn Transition<V>>>,
    factory: Option<&dyn TransitionFactory<V>>,
    direction: Direction,
) -> Result<Box<dyn Transition<V>>, PaginatorError> {
    match (explicit, factory) {
        (Some(transition), _) => Ok(transition),
        (None, Some(factory)) => Ok(factory.make(direction)),
        (None, None) => Err(PaginatorError::MissingTransition(direction)),
    }
}

/// Steps forward and backward through a non-empty sequence of views.
///
/// The paginator owns:
/// - the views and a cursor pointing at the current one,
/// - default forward and backward [`Transition`]s,
/// - the [`WrapMode`],
/// - an optional [`EndListener`],
/// - the tap-to-advance gesture mode and its [`TapState`].
///
/// Every mutation takes `&mut self`; it is meant to be driven from the host's
/// UI thread. Transitions are started and not awaited.
///
/// With tap-to-advance enabled, exactly one view (the current one) holds the
/// gesture. On every step the outgoing view is detached before the incoming
/// view is attached.
pub struct Paginator<V> {
    views: Vec<V>,
    cursor: usize,
    wrap: WrapMode,
    tap_to_advance: bool,
    forward: Box<dyn Transition<V>>,
    backward: Box<dyn Transition<V>>,
    factory: Option<Box<dyn TransitionFactory<V>>>,
    listener: Option<Box<dyn EndListener>>,
    taps: TapState,
}

impl<V: fmt::Debug> fmt::Debug for Paginator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("views", &self.views)
            .field("cursor", &self.cursor)
            .field("wrap", &self.wrap)
            .field("tap_to_advance", &self.tap_to_advance)
            .field("forward_duration", &self.forward.duration())
            .field("backward_duration", &self.backward.duration())
            .field("has_factory", &self.factory.is_some())
            .field("has_listener", &self.listener.is_some())
            .field("taps", &self.taps)
            .finish_non_exhaustive()
    }
}

impl<V: PageView> Paginator<V> {
    /// Creates a paginator with default transitions from `factory`, the
    /// tap-to-advance gesture enabled, and no wrapping.
    pub fn new(
        views: Vec<V>,
        factory: impl TransitionFactory<V> + 'static,
    ) -> Result<Self, PaginatorError> {
        PaginatorBuilder::new(views).factory(factory).build()
    }

    /// Starts a [`PaginatorBuilder`].
    #[must_use]
    pub fn builder(views: Vec<V>) -> PaginatorBuilder<V> {
        PaginatorBuilder::new(views)
    }

    /// Moves to the next view using the default forward transition.
    ///
    /// Returns `None` without touching anything when already on the last view
    /// and not wrapping, or when there is only one view.
    pub fn advance(&mut self) -> Option<Step> {
        self.advance_inner(None)
    }

    /// Moves to the next view using `transition` instead of the default.
    pub fn advance_with(&mut self, transition: &mut dyn Transition<V>) -> Option<Step> {
        self.advance_inner(Some(transition))
    }

    /// Moves to the previous view using the default backward transition.
    ///
    /// Returns `None` without touching anything when already on the first view
    /// and not wrapping, or when there is only one view.
    pub fn retreat(&mut self) -> Option<Step> {
        self.retreat_inner(None)
    }

    /// Moves to the previous view using `transition` instead of the default.
    pub fn retreat_with(&mut self, transition: &mut dyn Transition<V>) -> Option<Step> {
        self.retreat_inner(Some(transition))
    }

    fn advance_inner(&mut self, transition: Option<&mut dyn Transition<V>>) -> Option<Step> {
        let last = self.views.len() - 1;
        if self.cursor < last {
            let to = self.cursor + 1;
            let step = self.step(to, Direction::Forward, false, transition);
            if to == last {
                self.notify_end();
            }
            Some(step)
        } else if self.wrap == WrapMode::Loop && last > 0 {
            Some(self.step(0, Direction::Forward, true, transition))
        } else {
            trace!(cursor = self.cursor, "advance ignored at end");
            None
        }
    }

    fn retreat_inner(&mut self, transition: Option<&mut dyn Transition<V>>) -> Option<Step> {
        let last = self.views.len() - 1;
        if self.cursor > 0 {
            Some(self.step(self.cursor - 1, Direction::Backward, false, transition))
        } else if self.wrap == WrapMode::Loop && last > 0 {
            Some(self.step(last, Direction::Backward, true, transition))
        } else {
            trace!(cursor = self.cursor, "retreat ignored at start");
            None
        }
    }

    /// Moves the cursor to `to` and starts the transition from the previous
    /// current view. All cursor changes caused by stepping go through here.
    fn step(
        &mut self,
        to: usize,
        direction: Direction,
        wrapped: bool,
        transition: Option<&mut dyn Transition<V>>,
    ) -> Step {
        let from = self.cursor;
        self.move_gesture(from, to);
        self.cursor = to;

        let outgoing = &self.views[from];
        let incoming = &self.views[to];
        match (transition, direction) {
            (Some(transition), _) => transition.run(outgoing, incoming),
            (None, Direction::Forward) => self.forward.run(outgoing, incoming),
            (None, Direction::Backward) => self.backward.run(outgoing, incoming),
        }

        debug!(%direction, from, to, wrapped, "paginator step");
        Step {
            direction,
            from,
            to,
            wrapped,
        }
    }

    fn move_gesture(&mut self, from: usize, to: usize) {
        if !self.tap_to_advance || from == to {
            return;
        }
        self.views[from].set_tap_to_advance(false);
        self.views[to].set_tap_to_advance(true);
        trace!(from, to, "tap gesture moved");
    }

    fn notify_end(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            debug!(cursor = self.cursor, "end of views reached");
            listener.on_end_reached();
        }
    }

    /// Performs the tap-to-advance gesture: exactly [`Self::advance`] with the
    /// default forward transition.
    ///
    /// Does nothing while the gesture is disabled.
    pub fn tap(&mut self) -> Option<Step> {
        if !self.tap_to_advance {
            trace!("tap ignored, gesture disabled");
            return None;
        }
        self.advance()
    }

    /// Handles a tap on the view at `index`.
    ///
    /// Only the view holding the gesture (the current one) advances.
    pub fn tap_view(&mut self, index: usize) -> Option<Step> {
        if index != self.cursor {
            trace!(index, cursor = self.cursor, "tap ignored, not the current view");
            return None;
        }
        self.tap()
    }

    /// Feeds a pointer down on the view at `index` into the tap recognizer.
    pub fn pointer_down(&mut self, index: usize, position: Point, timestamp: u64) {
        if self.tap_to_advance {
            self.taps.on_down(index, position, timestamp);
        }
    }

    /// Feeds pointer movement into the tap recognizer.
    pub fn pointer_move(&mut self, position: Point) {
        if self.taps.on_move(position) {
            trace!("press moved beyond tap slop");
        }
    }

    /// Feeds a pointer up on the view at `index` into the tap recognizer and
    /// advances when it completes a tap on the current view.
    pub fn pointer_up(&mut self, index: usize, position: Point, timestamp: u64) -> Option<Step> {
        match self.taps.on_up(index, position, timestamp) {
            TapResult::Tap(index) => self.tap_view(index),
            TapResult::Rejected(_) => None,
        }
    }

    /// Abandons any press tracked by the tap recognizer.
    pub fn pointer_cancel(&mut self) {
        self.taps.cancel();
    }

    /// The tap recognizer.
    #[must_use]
    pub fn tap_state(&self) -> &TapState {
        &self.taps
    }

    /// Mutable access to the tap recognizer, for example to change its thresholds.
    pub fn tap_state_mut(&mut self) -> &mut TapState {
        &mut self.taps
    }

    /// Returns `true` while the tap-to-advance gesture is enabled.
    #[must_use]
    pub fn is_tap_to_advance(&self) -> bool {
        self.tap_to_advance
    }

    /// Enables or disables the tap-to-advance gesture, attaching it to or
    /// detaching it from the current view.
    pub fn set_tap_to_advance(&mut self, enabled: bool) {
        if enabled == self.tap_to_advance {
            return;
        }
        self.tap_to_advance = enabled;
        self.views[self.cursor].set_tap_to_advance(enabled);
        if !enabled {
            self.taps.cancel();
        }
    }

    /// The current view.
    #[must_use]
    pub fn current_view(&self) -> &V {
        &self.views[self.cursor]
    }

    /// Index of the current view.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Makes the view at `index` current without running a transition.
    ///
    /// The tap-to-advance gesture follows the cursor.
    pub fn set_cursor(&mut self, index: usize) -> Result<(), PaginatorError> {
        let len = self.views.len();
        if index >= len {
            return Err(PaginatorError::CursorOutOfRange { index, len });
        }
        self.move_gesture(self.cursor, index);
        self.cursor = index;
        Ok(())
    }

    /// Index [`Self::advance`] would move to, if any.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        if self.cursor + 1 < self.views.len() {
            Some(self.cursor + 1)
        } else if self.wrap == WrapMode::Loop && self.views.len() > 1 {
            Some(0)
        } else {
            None
        }
    }

    /// View [`Self::advance`] would move to, if any.
    #[must_use]
    pub fn next_view(&self) -> Option<&V> {
        self.next_index().map(|index| &self.views[index])
    }

    /// View [`Self::retreat`] would move to, if any.
    #[must_use]
    pub fn previous_view(&self) -> Option<&V> {
        if self.cursor > 0 {
            Some(&self.views[self.cursor - 1])
        } else if self.wrap == WrapMode::Loop && self.views.len() > 1 {
            self.views.last()
        } else {
            None
        }
    }

    /// Returns `true` if a view follows the current one, ignoring wrapping.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.views.len()
    }

    /// Returns `true` if a view precedes the current one, ignoring wrapping.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// All views in order.
    #[must_use]
    pub fn views(&self) -> &[V] {
        &self.views
    }

    /// Mutable access to a single view.
    pub fn view_mut(&mut self, index: usize) -> Option<&mut V> {
        self.views.get_mut(index)
    }

    /// Number of views. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Always `false`; a paginator cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Replaces all views and returns the previous ones.
    ///
    /// The cursor returns to the first view. Fails without changing anything
    /// if `views` is empty.
    pub fn set_views(&mut self, views: Vec<V>) -> Result<Vec<V>, PaginatorError> {
        if views.is_empty() {
            return Err(PaginatorError::EmptyViews);
        }
        if self.tap_to_advance {
            self.views[self.cursor].set_tap_to_advance(false);
        }
        let previous = core::mem::replace(&mut self.views, views);
        self.cursor = 0;
        self.taps.cancel();
        if self.tap_to_advance {
            self.views[0].set_tap_to_advance(true);
        }
        debug!(len = self.views.len(), "paginator views replaced");
        Ok(previous)
    }

    /// Appends a view to the end of the sequence.
    pub fn push_view(&mut self, view: V) {
        self.views.push(view);
        trace!(len = self.views.len(), "view appended");
    }

    /// Behavior at the ends of the sequence.
    #[must_use]
    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Sets the behavior at the ends of the sequence.
    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.wrap = wrap;
    }

    /// The default forward transition.
    #[must_use]
    pub fn forward_transition(&self) -> &dyn Transition<V> {
        &*self.forward
    }

    /// The default backward transition.
    #[must_use]
    pub fn backward_transition(&self) -> &dyn Transition<V> {
        &*self.backward
    }

    /// Replaces the default forward transition.
    ///
    /// `None` rebuilds it from the factory, failing with
    /// [`PaginatorError::MissingTransition`] when there is none.
    pub fn set_forward_transition(
        &mut self,
        transition: Option<Box<dyn Transition<V>>>,
    ) -> Result<(), PaginatorError> {
        self.forward =
            resolve_transition(transition, self.factory.as_deref(), Direction::Forward)?;
        Ok(())
    }

    /// Replaces the default backward transition.
    ///
    /// `None` rebuilds it from the factory, failing with
    /// [`PaginatorError::MissingTransition`] when there is none.
    pub fn set_backward_transition(
        &mut self,
        transition: Option<Box<dyn Transition<V>>>,
    ) -> Result<(), PaginatorError> {
        self.backward =
            resolve_transition(transition, self.factory.as_deref(), Direction::Backward)?;
        Ok(())
    }

    /// Supplies or replaces the factory used to rebuild default transitions.
    pub fn set_factory(&mut self, factory: impl TransitionFactory<V> + 'static) {
        self.factory = Some(Box::new(factory));
    }

    /// Sets the duration of the default forward transition.
    pub fn set_forward_duration(&mut self, duration: Duration) {
        self.forward.set_duration(duration);
    }

    /// Sets the duration of the default backward transition.
    pub fn set_backward_duration(&mut self, duration: Duration) {
        self.backward.set_duration(duration);
    }

    /// Registers the end listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl EndListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the end listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Returns `true` if an end listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, NoTransition};
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::{Cell, RefCell};

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Event {
        Attach(char),
        Detach(char),
        Run(&'static str, char, char),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug)]
    struct TestView {
        name: char,
        tappable: bool,
        log: Log,
    }

    impl PageView for TestView {
        fn set_tap_to_advance(&mut self, attached: bool) {
            self.tappable = attached;
            self.log.borrow_mut().push(if attached {
                Event::Attach(self.name)
            } else {
                Event::Detach(self.name)
            });
        }
    }

    struct Recorder {
        label: &'static str,
        duration: Duration,
        log: Log,
    }

    impl Transition<TestView> for Recorder {
        fn run(&mut self, outgoing: &TestView, incoming: &TestView) {
            self.log
                .borrow_mut()
                .push(Event::Run(self.label, outgoing.name, incoming.name));
        }

        fn duration(&self) -> Duration {
            self.duration
        }

        fn set_duration(&mut self, duration: Duration) {
            self.duration = duration;
        }
    }

    struct RecorderFactory {
        log: Log,
    }

    impl TransitionFactory<TestView> for RecorderFactory {
        fn forward(&self) -> Box<dyn Transition<TestView>> {
            Box::new(Recorder {
                label: "forward",
                duration: Duration::from_millis(300),
                log: self.log.clone(),
            })
        }

        fn backward(&self) -> Box<dyn Transition<TestView>> {
            Box::new(Recorder {
                label: "backward",
                duration: Duration::from_millis(300),
                log: self.log.clone(),
            })
        }
    }

    fn views(names: &str, log: &Log) -> Vec<TestView> {
        names
            .chars()
            .map(|name| TestView {
                name,
                tappable: false,
                log: log.clone(),
            })
            .collect()
    }

    fn paginator(names: &str, wrap: WrapMode) -> (Paginator<TestView>, Log) {
        let log = Log::default();
        let paginator = PaginatorBuilder::new(views(names, &log))
            .wrap(wrap)
            .factory(RecorderFactory { log: log.clone() })
            .build()
            .unwrap();
        log.borrow_mut().clear();
        (paginator, log)
    }

    fn count_ends(paginator: &mut Paginator<TestView>) -> Rc<Cell<u32>> {
        let ends = Rc::new(Cell::new(0));
        let counter = ends.clone();
        paginator.set_listener(move || counter.set(counter.get() + 1));
        ends
    }

    fn holders(paginator: &Paginator<TestView>) -> Vec<char> {
        paginator
            .views()
            .iter()
            .filter(|v| v.tappable)
            .map(|v| v.name)
            .collect()
    }

    fn current(paginator: &Paginator<TestView>) -> char {
        paginator.current_view().name
    }

    #[test]
    fn three_views_without_wrap() {
        let (mut p, log) = paginator("ABC", WrapMode::Never);
        let ends = count_ends(&mut p);
        assert_eq!(current(&p), 'A');
        assert_eq!(holders(&p), vec!['A']);

        p.advance();
        assert_eq!(current(&p), 'B');
        assert_eq!(holders(&p), vec!['B']);
        assert_eq!(ends.get(), 0);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Detach('A'),
                Event::Attach('B'),
                Event::Run("forward", 'A', 'B'),
            ]
        );

        p.advance();
        assert_eq!(current(&p), 'C');
        assert_eq!(ends.get(), 1);

        log.borrow_mut().clear();
        assert_eq!(p.advance(), None);
        assert_eq!(current(&p), 'C');
        assert_eq!(p.cursor(), 2);
        assert_eq!(holders(&p), vec!['C']);
        assert_eq!(ends.get(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn three_views_with_wrap() {
        let (mut p, log) = paginator("ABC", WrapMode::Loop);
        let ends = count_ends(&mut p);

        p.advance();
        p.advance();
        let step = p.advance().unwrap();

        assert_eq!(current(&p), 'A');
        assert_eq!(p.cursor(), 0);
        assert!(step.wrapped);
        assert_eq!((step.from, step.to), (2, 0));
        assert_eq!(log.borrow().last(), Some(&Event::Run("forward", 'C', 'A')));
        assert_eq!(holders(&p), vec!['A']);
        // Wrapping past the end does not count as reaching it.
        assert_eq!(ends.get(), 1);
    }

    #[test]
    fn last_view_is_reached_after_len_minus_one_advances() {
        for len in 1..=6 {
            let names: alloc::string::String = "ABCDEF".chars().take(len).collect();
            let (mut p, _log) = paginator(&names, WrapMode::Never);
            for _ in 0..len - 1 {
                assert!(p.advance().is_some());
            }
            assert_eq!(p.cursor(), len - 1);
            assert_eq!(p.advance(), None);
            assert_eq!(p.cursor(), len - 1);
        }
    }

    #[test]
    fn wrap_returns_to_start_after_len_advances() {
        for len in 2..=6 {
            let names: alloc::string::String = "ABCDEF".chars().take(len).collect();
            let (mut p, _log) = paginator(&names, WrapMode::Loop);
            let mut last_step = None;
            for _ in 0..len {
                last_step = p.advance();
            }
            assert_eq!(p.cursor(), 0);
            assert_eq!(
                last_step,
                Some(Step {
                    direction: Direction::Forward,
                    from: len - 1,
                    to: 0,
                    wrapped: true,
                })
            );
        }
    }

    #[test]
    fn retreat_undoes_advance_at_interior_positions() {
        let (mut p, log) = paginator("ABCD", WrapMode::Never);
        p.advance();
        p.advance();
        assert_eq!(current(&p), 'C');

        log.borrow_mut().clear();
        p.retreat();
        assert_eq!(current(&p), 'B');
        assert_eq!(holders(&p), vec!['B']);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Detach('C'),
                Event::Attach('B'),
                Event::Run("backward", 'C', 'B'),
            ]
        );

        p.advance();
        p.retreat();
        assert_eq!(current(&p), 'B');
    }

    #[test]
    fn retreat_at_start_without_wrap_is_ignored() {
        let (mut p, log) = paginator("ABC", WrapMode::Never);
        assert_eq!(p.retreat(), None);
        assert_eq!(p.cursor(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn retreat_wrap_moves_gesture_off_the_first_view() {
        let (mut p, log) = paginator("ABC", WrapMode::Loop);
        let step = p.retreat().unwrap();

        assert!(step.wrapped);
        assert_eq!(current(&p), 'C');
        assert_eq!(holders(&p), vec!['C']);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Detach('A'),
                Event::Attach('C'),
                Event::Run("backward", 'A', 'C'),
            ]
        );
    }

    #[test]
    fn listener_ignores_retreat_and_fires_on_each_landing() {
        let (mut p, _log) = paginator("ABC", WrapMode::Never);
        let ends = count_ends(&mut p);

        p.advance();
        p.advance();
        assert_eq!(ends.get(), 1);

        p.retreat();
        p.retreat();
        assert_eq!(ends.get(), 1);

        p.advance();
        assert_eq!(ends.get(), 1);
        p.advance();
        assert_eq!(ends.get(), 2);
    }

    #[test]
    fn new_listener_replaces_the_old_one() {
        let (mut p, _log) = paginator("AB", WrapMode::Never);
        let first = count_ends(&mut p);
        let second = count_ends(&mut p);
        assert!(p.has_listener());

        p.advance();
        assert_eq!((first.get(), second.get()), (0, 1));

        p.clear_listener();
        assert!(!p.has_listener());
    }

    #[test]
    fn single_view_never_transitions() {
        for wrap in [WrapMode::Never, WrapMode::Loop] {
            let (mut p, log) = paginator("A", wrap);
            let ends = count_ends(&mut p);
            assert_eq!(p.advance(), None);
            assert_eq!(p.retreat(), None);
            assert_eq!(p.next_view().map(|v| v.name), None);
            assert_eq!(ends.get(), 0);
            assert!(log.borrow().is_empty());
        }
    }

    #[test]
    fn explicit_transition_overrides_the_default_once() {
        let (mut p, log) = paginator("ABC", WrapMode::Never);
        let mut custom = Recorder {
            label: "custom",
            duration: Duration::ZERO,
            log: log.clone(),
        };

        p.advance_with(&mut custom);
        p.advance();
        p.retreat_with(&mut custom);

        let runs: Vec<Event> = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Run(..)))
            .cloned()
            .collect();
        assert_eq!(
            runs,
            vec![
                Event::Run("custom", 'A', 'B'),
                Event::Run("forward", 'B', 'C'),
                Event::Run("custom", 'C', 'B'),
            ]
        );
    }

    #[test]
    fn empty_views_are_rejected() {
        let err = PaginatorBuilder::<TestView>::new(Vec::new())
            .factory(NoTransition::default())
            .build()
            .unwrap_err();
        assert_eq!(err, PaginatorError::EmptyViews);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn missing_transitions_without_factory_are_rejected() {
        let log = Log::default();
        let err = PaginatorBuilder::new(views("AB", &log))
            .build()
            .unwrap_err();
        assert_eq!(err, PaginatorError::MissingTransition(Direction::Forward));
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        let err = PaginatorBuilder::new(views("AB", &log))
            .forward(NoTransition::default())
            .build()
            .unwrap_err();
        assert_eq!(err, PaginatorError::MissingTransition(Direction::Backward));

        // Nothing was attached by the failed builds.
        assert!(log.borrow().is_empty());

        let p = PaginatorBuilder::new(views("AB", &log))
            .forward(NoTransition::default())
            .backward(NoTransition::default())
            .build();
        assert!(p.is_ok());
    }

    #[test]
    fn resetting_a_default_transition_needs_a_factory() {
        let log = Log::default();
        let mut p = PaginatorBuilder::new(views("AB", &log))
            .forward(NoTransition::default())
            .backward(NoTransition::default())
            .build()
            .unwrap();

        assert_eq!(
            p.set_forward_transition(None),
            Err(PaginatorError::MissingTransition(Direction::Forward))
        );

        p.set_factory(RecorderFactory { log: log.clone() });
        p.set_forward_transition(None).unwrap();
        p.set_backward_transition(Some(Box::new(NoTransition::default())))
            .unwrap();
        log.borrow_mut().clear();

        p.advance();
        p.retreat();
        let runs = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Run(..)))
            .count();
        assert_eq!(runs, 1);
    }

    #[test]
    fn durations_apply_to_their_own_direction() {
        let (mut p, _log) = paginator("AB", WrapMode::Never);
        p.set_forward_duration(Duration::from_millis(100));
        p.set_backward_duration(Duration::from_millis(700));

        assert_eq!(p.forward_transition().duration(), Duration::from_millis(100));
        assert_eq!(p.backward_transition().duration(), Duration::from_millis(700));
    }

    #[test]
    fn options_configure_durations_and_wrap() {
        let log = Log::default();
        let p = PaginatorBuilder::new(views("AB", &log))
            .options(PaginatorOptions {
                wrap: WrapMode::Loop,
                tap_to_advance: false,
                forward_duration: Some(Duration::from_millis(50)),
                backward_duration: None,
            })
            .factory(RecorderFactory { log: log.clone() })
            .build()
            .unwrap();

        assert_eq!(p.wrap(), WrapMode::Loop);
        assert!(!p.is_tap_to_advance());
        assert_eq!(p.forward_transition().duration(), Duration::from_millis(50));
        assert_eq!(p.backward_transition().duration(), Duration::from_millis(300));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn set_cursor_validates_and_moves_the_gesture() {
        let (mut p, log) = paginator("ABC", WrapMode::Never);
        assert_eq!(
            p.set_cursor(3),
            Err(PaginatorError::CursorOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(p.cursor(), 0);

        p.set_cursor(2).unwrap();
        assert_eq!(current(&p), 'C');
        assert_eq!(holders(&p), vec!['C']);
        assert!(!log.borrow().iter().any(|e| matches!(e, Event::Run(..))));
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn set_views_resets_the_cursor() {
        let (mut p, log) = paginator("ABC", WrapMode::Never);
        p.advance();

        assert_eq!(p.set_views(Vec::new()).unwrap_err(), PaginatorError::EmptyViews);
        assert_eq!(current(&p), 'B');

        let old = p.set_views(views("XY", &log)).unwrap();
        assert_eq!(old.len(), 3);
        assert!(old.iter().all(|v| !v.tappable));
        assert_eq!(current(&p), 'X');
        assert_eq!(holders(&p), vec!['X']);
    }

    #[test]
    fn pushed_views_extend_the_sequence() {
        let (mut p, log) = paginator("AB", WrapMode::Never);
        p.advance();
        assert!(!p.has_next());

        p.push_view(TestView {
            name: 'C',
            tappable: false,
            log: log.clone(),
        });
        assert_eq!(p.len(), 3);
        assert!(p.has_next());
        assert_eq!(p.next_view().map(|v| v.name), Some('C'));
        p.advance();
        assert_eq!(current(&p), 'C');
    }

    #[test]
    fn neighbours_respect_wrap() {
        let (mut p, _log) = paginator("ABC", WrapMode::Never);
        assert_eq!(p.previous_view().map(|v| v.name), None);
        assert_eq!(p.next_view().map(|v| v.name), Some('B'));

        p.set_wrap(WrapMode::Loop);
        assert_eq!(p.previous_view().map(|v| v.name), Some('C'));
        p.set_cursor(2).unwrap();
        assert_eq!(p.next_index(), Some(0));
    }

    #[test]
    fn toggling_the_gesture_keeps_one_holder() {
        let (mut p, _log) = paginator("ABC", WrapMode::Never);
        p.advance();

        p.set_tap_to_advance(false);
        assert!(holders(&p).is_empty());
        assert_eq!(p.tap(), None);
        p.advance();
        assert!(holders(&p).is_empty());

        p.set_tap_to_advance(true);
        assert_eq!(holders(&p), vec!['C']);
    }

    #[test]
    fn taps_only_advance_from_the_current_view() {
        let (mut p, log) = paginator("ABC", WrapMode::Never);

        assert_eq!(p.tap_view(1), None);
        assert_eq!(current(&p), 'A');

        p.tap_view(0);
        assert_eq!(current(&p), 'B');
        assert_eq!(log.borrow().last(), Some(&Event::Run("forward", 'A', 'B')));

        p.tap();
        assert_eq!(current(&p), 'C');
    }

    #[test]
    fn pointer_taps_drive_the_gesture() {
        let (mut p, _log) = paginator("ABC", WrapMode::Never);

        p.pointer_down(0, Point::new(5.0, 5.0), 1000);
        assert!(p.pointer_up(0, Point::new(6.0, 5.0), 1050).is_some());
        assert_eq!(current(&p), 'B');

        // A swipe on the current view is not a tap.
        p.pointer_down(1, Point::new(5.0, 5.0), 2000);
        p.pointer_move(Point::new(80.0, 5.0));
        assert_eq!(p.pointer_up(1, Point::new(80.0, 5.0), 2050), None);
        assert_eq!(current(&p), 'B');

        p.pointer_down(1, Point::new(5.0, 5.0), 3000);
        p.pointer_cancel();
        assert_eq!(p.pointer_up(1, Point::new(5.0, 5.0), 3010), None);
        assert!(!p.tap_state().is_pressed());
    }

    #[test]
    fn new_uses_factory_defaults_with_gesture_and_no_wrap() {
        let log = Log::default();
        let mut p = Paginator::new(views("AB", &log), RecorderFactory { log: log.clone() })
            .unwrap();
        assert!(p.is_tap_to_advance());
        assert_eq!(p.wrap(), WrapMode::Never);
        assert_eq!(holders(&p), vec!['A']);

        p.advance();
        assert_eq!(p.advance(), None);
    }
}
