use thiserror::Error;

/// Named sections the page can scroll to. The id is the element id in the
/// rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Cv,
    Projects,
    Contact,
}

impl Anchor {
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Cv => "cv",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no element with id `{0}`")]
    MissingAnchor(&'static str),
    #[error("window has no document")]
    NoDocument,
    #[error("no browser to scroll")]
    Unavailable,
}

/// Something that can bring an anchor into view.
pub trait ScrollHost {
    fn scroll_into_view(&self, anchor: Anchor) -> Result<(), ScrollError>;
}

/// Scrolls to `anchor`, treating every failure as a no-op.
///
/// Returns whether the host actually scrolled.
pub fn scroll_to(host: &impl ScrollHost, anchor: Anchor) -> bool {
    match host.scroll_into_view(anchor) {
        Ok(()) => {
            log::debug!("scrolled to #{}", anchor.id());
            true
        }
        Err(e) => {
            log::warn!("skipping scroll to #{}: {}", anchor.id(), e);
            false
        }
    }
}

/// Smooth scrolling on the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScroll;

#[cfg(feature = "hydrate")]
impl ScrollHost for BrowserScroll {
    fn scroll_into_view(&self, anchor: Anchor) -> Result<(), ScrollError> {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ScrollError::NoDocument)?;
        let el = document
            .get_element_by_id(anchor.id())
            .ok_or(ScrollError::MissingAnchor(anchor.id()))?;
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }
}

#[cfg(not(feature = "hydrate"))]
impl ScrollHost for BrowserScroll {
    fn scroll_into_view(&self, _anchor: Anchor) -> Result<(), ScrollError> {
        Err(ScrollError::Unavailable)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Host whose page only contains `present`; records every scroll.
    pub(crate) struct RecordingHost {
        pub present: Vec<Anchor>,
        pub scrolled: RefCell<Vec<Anchor>>,
    }

    impl RecordingHost {
        pub fn with(present: &[Anchor]) -> Self {
            Self {
                present: present.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollHost for RecordingHost {
        fn scroll_into_view(&self, anchor: Anchor) -> Result<(), ScrollError> {
            if !self.present.contains(&anchor) {
                return Err(ScrollError::MissingAnchor(anchor.id()));
            }
            self.scrolled.borrow_mut().push(anchor);
            Ok(())
        }
    }

    #[test]
    fn test_anchor_ids() {
        assert_eq!(Anchor::Cv.id(), "cv");
        assert_eq!(Anchor::Projects.id(), "projects");
        assert_eq!(Anchor::Contact.id(), "contact");
    }

    #[test]
    fn test_scroll_to_present_anchor() {
        let host = RecordingHost::with(&[Anchor::Cv]);
        assert!(scroll_to(&host, Anchor::Cv));
        assert_eq!(*host.scrolled.borrow(), vec![Anchor::Cv]);
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let host = RecordingHost::with(&[]);
        assert!(!scroll_to(&host, Anchor::Projects));
        assert!(host.scrolled.borrow().is_empty());
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_browser_scroll_without_browser() {
        assert_eq!(
            BrowserScroll.scroll_into_view(Anchor::Cv),
            Err(ScrollError::Unavailable)
        );
        assert!(!scroll_to(&BrowserScroll, Anchor::Cv));
    }
}
