//! Top level view state: which overlays are open and how far the orbit
//! ring has spun.
//!
//! [`ViewState`] only flips flags. The consequences of the portfolio panel
//! opening (spin the ring, scroll to the CV a moment later) live in
//! [`PortfolioReaction`], which the UI runs whenever the flag changes.
//! [`RingSpin`] decides when the ring may actually show a new angle.

use std::time::Duration;

use crate::scroll::Anchor;

/// Ring rotation once the portfolio panel is open.
pub const SPIN_DEGREES: f64 = 720.0;

/// Time between opening the panel and scrolling to the CV. The slide-in
/// must already be under way when the page scrolls.
pub const SCROLL_DELAY: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Portfolio,
    Contact,
}

/// Where a click on an overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    portfolio_open: bool,
    contact_open: bool,
    rotation: f64,
}

impl ViewState {
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Portfolio => self.portfolio_open,
            OverlayKind::Contact => self.contact_open,
        }
    }

    /// Opening an overlay that is already open changes nothing.
    pub fn open(&mut self, kind: OverlayKind) {
        self.set(kind, true);
    }

    pub fn close(&mut self, kind: OverlayKind) {
        self.set(kind, false);
    }

    fn set(&mut self, kind: OverlayKind, open: bool) {
        let flag = match kind {
            OverlayKind::Portfolio => &mut self.portfolio_open,
            OverlayKind::Contact => &mut self.contact_open,
        };
        if *flag != open {
            log::debug!("{:?} overlay {}", kind, if open { "opened" } else { "closed" });
            *flag = open;
        }
    }

    pub fn open_portfolio(&mut self) {
        self.open(OverlayKind::Portfolio);
    }

    pub fn close_portfolio(&mut self) {
        self.close(OverlayKind::Portfolio);
    }

    pub fn open_contact(&mut self) {
        self.open(OverlayKind::Contact);
    }

    pub fn close_contact(&mut self) {
        self.close(OverlayKind::Contact);
    }

    /// A click on the contact overlay closes it unless it hit the dialog.
    pub fn contact_clicked(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close_contact();
        }
    }

    pub fn portfolio_open(&self) -> bool {
        self.portfolio_open
    }

    pub fn contact_open(&self) -> bool {
        self.contact_open
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}

/// The angle the orbit ring is drawn at, trailing [`ViewState::rotation`].
///
/// A freshly mounted ring has to be drawn at its old angle for one frame
/// before a spin, or its CSS transition has nothing to start from. Spins
/// are therefore handed back to the caller to apply on a later frame, while
/// a reset to 0 is shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingSpin {
    shown: f64,
}

impl RingSpin {
    /// Follows a new target angle. Returns the angle to pass to
    /// [`RingSpin::frame`] later, if it cannot be shown now.
    pub fn retarget(&mut self, target: f64) -> Option<f64> {
        if target == self.shown {
            None
        } else if target == 0.0 {
            self.shown = 0.0;
            None
        } else {
            Some(target)
        }
    }

    /// Shows a deferred angle, unless the target moved on in the meantime.
    pub fn frame(&mut self, scheduled: f64, target: f64) {
        if scheduled == target {
            self.shown = scheduled;
        }
    }

    pub fn shown(&self) -> f64 {
        self.shown
    }
}

/// A one-shot timer that scrolls to an anchor when it fires.
pub trait DeferredScroll {
    /// Arms the timer, replacing any timer already armed.
    fn schedule(&mut self, anchor: Anchor);
    /// Disarms the timer. Nothing happens if it is not armed.
    fn cancel(&mut self);
}

/// Applies the side effects of the portfolio panel's `open` flag.
///
/// Owns the scroll timer: it is armed on open and cancelled on close, on a
/// reopen, and when the reaction is dropped.
pub struct PortfolioReaction<S: DeferredScroll> {
    scroll: S,
    was_open: bool,
}

impl<S: DeferredScroll> PortfolioReaction<S> {
    pub fn new(scroll: S) -> Self {
        Self {
            scroll,
            was_open: false,
        }
    }

    /// Brings `state` in line with its portfolio flag. Repeated calls
    /// without a transition are ignored.
    pub fn react(&mut self, state: &mut ViewState) {
        let open = state.portfolio_open;
        if open == self.was_open {
            return;
        }
        self.was_open = open;
        self.scroll.cancel();
        if open {
            state.rotation = SPIN_DEGREES;
            self.scroll.schedule(Anchor::Cv);
        } else {
            state.rotation = 0.0;
        }
    }
}

impl<S: DeferredScroll> Drop for PortfolioReaction<S> {
    fn drop(&mut self) {
        self.scroll.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        due: Option<(Duration, Anchor)>,
        fired: Vec<Anchor>,
    }

    /// Timer driven by hand. Clones share one clock, so the test keeps a
    /// handle after giving the timer to the reaction.
    #[derive(Clone, Default)]
    struct VirtualTimer(Rc<RefCell<Clock>>);

    impl VirtualTimer {
        fn advance(&self, by: Duration) {
            let mut clock = self.0.borrow_mut();
            clock.now += by;
            if let Some((at, anchor)) = clock.due {
                if at <= clock.now {
                    clock.due = None;
                    clock.fired.push(anchor);
                }
            }
        }

        fn fired(&self) -> Vec<Anchor> {
            self.0.borrow().fired.clone()
        }

        fn is_armed(&self) -> bool {
            self.0.borrow().due.is_some()
        }
    }

    impl DeferredScroll for VirtualTimer {
        fn schedule(&mut self, anchor: Anchor) {
            let mut clock = self.0.borrow_mut();
            clock.due = Some((clock.now + SCROLL_DELAY, anchor));
        }

        fn cancel(&mut self) {
            self.0.borrow_mut().due = None;
        }
    }

    fn setup() -> (ViewState, PortfolioReaction<VirtualTimer>, VirtualTimer) {
        let timer = VirtualTimer::default();
        (
            ViewState::default(),
            PortfolioReaction::new(timer.clone()),
            timer,
        )
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert!(!state.portfolio_open());
        assert!(!state.contact_open());
        assert_eq!(state.rotation(), 0.0);
    }

    #[test]
    fn test_open_scrolls_to_cv_once() {
        let (mut state, mut reaction, timer) = setup();
        state.open_portfolio();
        reaction.react(&mut state);
        assert!(state.portfolio_open());
        assert_eq!(state.rotation(), SPIN_DEGREES);

        timer.advance(SCROLL_DELAY - Duration::from_millis(1));
        assert!(timer.fired().is_empty());

        timer.advance(Duration::from_millis(1));
        assert_eq!(timer.fired(), vec![Anchor::Cv]);

        timer.advance(SCROLL_DELAY * 4);
        assert_eq!(timer.fired().len(), 1);
    }

    #[test]
    fn test_close_before_delay_cancels_scroll() {
        let (mut state, mut reaction, timer) = setup();
        state.open_portfolio();
        reaction.react(&mut state);
        timer.advance(Duration::from_millis(100));

        state.close_portfolio();
        reaction.react(&mut state);
        assert_eq!(state.rotation(), 0.0);

        timer.advance(SCROLL_DELAY * 2);
        assert!(timer.fired().is_empty());
    }

    #[test]
    fn test_reopen_restarts_delay() {
        let (mut state, mut reaction, timer) = setup();
        state.open_portfolio();
        reaction.react(&mut state);
        timer.advance(Duration::from_millis(300));
        state.close_portfolio();
        reaction.react(&mut state);
        state.open_portfolio();
        reaction.react(&mut state);

        // the first timer would have fired at 350ms
        timer.advance(Duration::from_millis(100));
        assert!(timer.fired().is_empty());
        timer.advance(SCROLL_DELAY);
        assert_eq!(timer.fired(), vec![Anchor::Cv]);
    }

    #[test]
    fn test_react_without_transition_is_ignored() {
        let (mut state, mut reaction, timer) = setup();
        reaction.react(&mut state);
        state.open_portfolio();
        reaction.react(&mut state);
        timer.advance(Duration::from_millis(200));
        // a redundant run must not push the deadline back
        state.open_portfolio();
        reaction.react(&mut state);
        timer.advance(Duration::from_millis(150));
        assert_eq!(timer.fired(), vec![Anchor::Cv]);
    }

    #[test]
    fn test_drop_cancels_pending_scroll() {
        let (mut state, mut reaction, timer) = setup();
        state.open_portfolio();
        reaction.react(&mut state);
        assert!(timer.is_armed());
        drop(reaction);
        assert!(!timer.is_armed());
        timer.advance(SCROLL_DELAY);
        assert!(timer.fired().is_empty());
    }

    #[test]
    fn test_rotation_follows_open_flag() {
        let (mut state, mut reaction, _timer) = setup();
        for _ in 0..3 {
            state.open_portfolio();
            reaction.react(&mut state);
            assert_eq!(state.rotation(), SPIN_DEGREES);
            state.close_portfolio();
            reaction.react(&mut state);
            assert_eq!(state.rotation(), 0.0);
        }
    }

    #[test]
    fn test_spin_waits_for_a_frame() {
        let (mut state, mut reaction, _timer) = setup();
        let mut ring = RingSpin::default();
        assert_eq!(ring.retarget(state.rotation()), None);

        state.open_portfolio();
        reaction.react(&mut state);
        let next = ring.retarget(state.rotation());
        assert_eq!(next, Some(SPIN_DEGREES));
        // the ring is still drawn at rest until the frame runs
        assert_eq!(ring.shown(), 0.0);

        ring.frame(SPIN_DEGREES, state.rotation());
        assert_eq!(ring.shown(), SPIN_DEGREES);
        assert_eq!(ring.retarget(state.rotation()), None);
    }

    #[test]
    fn test_reset_is_immediate() {
        let mut ring = RingSpin::default();
        let next = ring.retarget(SPIN_DEGREES).expect("deferred spin");
        ring.frame(next, SPIN_DEGREES);
        assert_eq!(ring.retarget(0.0), None);
        assert_eq!(ring.shown(), 0.0);
    }

    #[test]
    fn test_stale_frame_is_ignored() {
        let (mut state, mut reaction, _timer) = setup();
        let mut ring = RingSpin::default();
        state.open_portfolio();
        reaction.react(&mut state);
        let next = ring.retarget(state.rotation()).expect("deferred spin");

        // closed again before the frame came round
        state.close_portfolio();
        reaction.react(&mut state);
        assert_eq!(ring.retarget(state.rotation()), None);
        ring.frame(next, state.rotation());
        assert_eq!(ring.shown(), 0.0);
    }

    #[test]
    fn test_contact_click_targets() {
        let mut state = ViewState::default();
        state.open_contact();
        state.contact_clicked(ClickTarget::Content);
        assert!(state.contact_open());
        state.contact_clicked(ClickTarget::Backdrop);
        assert!(!state.contact_open());
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut state = ViewState::default();
        state.open_contact();
        state.open_portfolio();
        state.close_contact();
        assert!(state.is_open(OverlayKind::Portfolio));
        assert!(!state.is_open(OverlayKind::Contact));
    }

    #[test]
    fn test_open_twice_does_not_stack() {
        let mut state = ViewState::default();
        state.open(OverlayKind::Contact);
        state.open(OverlayKind::Contact);
        state.close(OverlayKind::Contact);
        assert!(!state.is_open(OverlayKind::Contact));
    }

    #[test]
    fn test_label_entry_leaves_state_unchanged() {
        use crate::navigation::ORBIT_ENTRIES;
        use crate::scroll::tests::RecordingHost;

        let mut state = ViewState::default();
        state.open_portfolio();
        let before = state;
        let host = RecordingHost::with(&[Anchor::Cv]);
        let skills = ORBIT_ENTRIES
            .iter()
            .find(|e| e.label == "Skills")
            .expect("skills entry");
        skills.activate(&host);
        assert_eq!(state, before);
        assert!(host.scrolled.borrow().is_empty());
    }
}
