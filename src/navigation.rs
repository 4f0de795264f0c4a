//! The orbit menu: a fixed ring of entries around the center profile card.

use crate::content::Icon;
use crate::scroll::{scroll_to, Anchor, ScrollHost};

/// How far from the ring's center each chip sits, as a share of the ring.
pub const ORBIT_RADIUS: &str = "-38%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub icon: Icon,
    /// Entries without an action are plain labels.
    pub action: Option<Anchor>,
}

impl NavigationEntry {
    /// Runs the bound action, if any. Returns whether anything scrolled.
    pub fn activate(&self, host: &impl ScrollHost) -> bool {
        match self.action {
            Some(anchor) => scroll_to(host, anchor),
            None => false,
        }
    }
}

pub static ORBIT_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry {
        label: "CV & About",
        icon: Icon::File,
        action: Some(Anchor::Cv),
    },
    NavigationEntry {
        label: "Skills",
        icon: Icon::Wrench,
        action: None,
    },
    NavigationEntry {
        label: "Experience",
        icon: Icon::Rocket,
        action: None,
    },
    NavigationEntry {
        label: "Education",
        icon: Icon::File,
        action: None,
    },
    NavigationEntry {
        label: "Projects",
        icon: Icon::Branch,
        action: Some(Anchor::Projects),
    },
    NavigationEntry {
        label: "Contact",
        icon: Icon::Mail,
        action: Some(Anchor::Contact),
    },
];

/// Angle in degrees of entry `index` when `total` entries share the ring.
pub fn orbit_angle(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    index as f64 * 360.0 / total as f64
}

/// CSS transform for a chip: rotate onto its spoke, push out to the ring,
/// then undo both its own angle and the ring's so the label stays upright.
pub fn chip_transform(index: usize, total: usize, ring_rotation: f64) -> String {
    let angle = orbit_angle(index, total);
    format!(
        "rotate({angle}deg) translateY({ORBIT_RADIUS}) translateX(0) rotate({}deg)",
        -(angle + ring_rotation)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::tests::RecordingHost;

    #[test]
    fn test_evenly_spaced() {
        let total = ORBIT_ENTRIES.len();
        let angles = (0..total).map(|i| orbit_angle(i, total)).collect::<Vec<_>>();
        assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
        assert_eq!(orbit_angle(0, 0), 0.0);
    }

    #[test]
    fn test_chip_transform_counter_rotates() {
        assert_eq!(
            chip_transform(1, 4, 0.0),
            "rotate(90deg) translateY(-38%) translateX(0) rotate(-90deg)"
        );
        assert_eq!(
            chip_transform(2, 4, 720.0),
            "rotate(180deg) translateY(-38%) translateX(0) rotate(-900deg)"
        );
    }

    #[test]
    fn test_label_entries_do_nothing() {
        let host = RecordingHost::with(&[Anchor::Cv, Anchor::Projects, Anchor::Contact]);
        let skills = ORBIT_ENTRIES
            .iter()
            .find(|e| e.label == "Skills")
            .expect("skills entry");
        assert!(!skills.activate(&host));
        assert!(host.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_actions_scroll_to_their_section() {
        let host = RecordingHost::with(&[Anchor::Cv, Anchor::Projects, Anchor::Contact]);
        for entry in ORBIT_ENTRIES {
            entry.activate(&host);
        }
        assert_eq!(
            *host.scrolled.borrow(),
            vec![Anchor::Cv, Anchor::Projects, Anchor::Contact]
        );
    }

    #[test]
    fn test_missing_section_does_not_panic() {
        let host = RecordingHost::with(&[]);
        assert!(!ORBIT_ENTRIES[0].activate(&host));
    }
}
