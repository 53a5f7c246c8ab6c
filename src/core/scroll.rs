//! Scroll-position rules: header state, parallax, active section, anchor targets.

/// Whether the header should carry its "scrolled" state.
///
/// Strictly greater than the threshold; no hysteresis.
pub fn is_header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Vertical parallax for a row of decorations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxProfile {
    pub base_speed: f64,
    pub speed_step: f64,
}

impl ParallaxProfile {
    pub fn new(base_speed: f64, speed_step: f64) -> Self {
        Self {
            base_speed,
            speed_step,
        }
    }

    /// Speed coefficient of the decoration at `index`
    pub fn speed(&self, index: usize) -> f64 {
        self.base_speed + index as f64 * self.speed_step
    }

    /// Vertical translation (px) of the decoration at `index`
    pub fn offset(&self, index: usize, scroll_y: f64) -> f64 {
        scroll_y * self.speed(index)
    }

    /// Inline `transform` value for the decoration at `index`
    pub fn transform(&self, index: usize, scroll_y: f64) -> String {
        format!("translateY({}px)", self.offset(index, scroll_y))
    }
}

/// Vertical extent of a page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open range `[top, top + height)`
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Document position probed for the active section.
pub fn nav_probe(scroll_y: f64, header_height: f64, probe_offset: f64) -> f64 {
    scroll_y + header_height + probe_offset
}

/// Id of the section containing `probe`.
///
/// When sections overlap the last one in document order wins.
pub fn active_section(sections: &[SectionSpan], probe: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Whether a navigation link's href points at the section `id`.
pub fn link_targets_section(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Target id of an in-page anchor, or `None` for bare `#` and other links.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
}

/// Scroll destination that leaves the target just below the fixed header.
pub fn anchor_scroll_top(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Header
    // ========================================================================

    #[test]
    fn test_header_threshold_is_strict() {
        for offset in [0.0, 10.0, 49.9, 50.0] {
            assert!(!is_header_scrolled(offset, 50.0), "offset {offset}");
        }
        for offset in [50.1, 51.0, 400.0, 10_000.0] {
            assert!(is_header_scrolled(offset, 50.0), "offset {offset}");
        }
    }

    // ========================================================================
    // Parallax
    // ========================================================================

    #[test]
    fn test_parallax_speed_per_index() {
        let profile = ParallaxProfile::new(0.3, 0.1);
        assert!((profile.speed(0) - 0.3).abs() < 1e-9);
        assert!((profile.speed(1) - 0.4).abs() < 1e-9);
        assert!((profile.speed(2) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_parallax_offset_and_transform() {
        let profile = ParallaxProfile::new(0.5, 0.25);
        assert_eq!(profile.offset(0, 200.0), 100.0);
        assert_eq!(profile.offset(2, 200.0), 200.0);
        assert_eq!(profile.transform(0, 0.0), "translateY(0px)");
        assert_eq!(profile.transform(1, 100.0), "translateY(75px)");
    }

    // ========================================================================
    // Active section
    // ========================================================================

    fn sections() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("a", 0.0, 500.0),
            SectionSpan::new("b", 500.0, 700.0),
        ]
    }

    #[test]
    fn test_active_section_picks_containing_span() {
        let sections = sections();
        // scrollY 420 + header 80 + 100 = 600
        let probe = nav_probe(420.0, 80.0, 100.0);
        assert_eq!(probe, 600.0);
        assert_eq!(active_section(&sections, probe), Some("b"));
        assert_eq!(active_section(&sections, 250.0), Some("a"));
    }

    #[test]
    fn test_active_section_boundaries() {
        let sections = sections();
        assert_eq!(active_section(&sections, 499.9), Some("a"));
        assert_eq!(active_section(&sections, 500.0), Some("b"));
        assert_eq!(active_section(&sections, 1200.0), None);
        assert_eq!(active_section(&sections, -1.0), None);
        assert_eq!(active_section(&[], 10.0), None);
    }

    #[test]
    fn test_active_section_overlap_last_wins() {
        let sections = vec![
            SectionSpan::new("outer", 0.0, 1000.0),
            SectionSpan::new("inner", 200.0, 100.0),
        ];
        assert_eq!(active_section(&sections, 250.0), Some("inner"));
        assert_eq!(active_section(&sections, 350.0), Some("outer"));
    }

    #[test]
    fn test_link_targets_section() {
        assert!(link_targets_section("#b", "b"));
        assert!(!link_targets_section("#a", "b"));
        assert!(!link_targets_section("b", "b"));
        assert!(!link_targets_section("/page#b", "b"));
    }

    // ========================================================================
    // Anchors
    // ========================================================================

    #[test]
    fn test_anchor_fragment() {
        assert_eq!(anchor_fragment("#contact"), Some("contact"));
        assert_eq!(anchor_fragment("#"), None);
        assert_eq!(anchor_fragment(""), None);
        assert_eq!(anchor_fragment("/about"), None);
        assert_eq!(anchor_fragment("https://example.com/#x"), None);
    }

    #[test]
    fn test_anchor_scroll_top_subtracts_header() {
        assert_eq!(anchor_scroll_top(1800.0, 80.0), 1720.0);
        assert_eq!(anchor_scroll_top(40.0, 80.0), -40.0);
    }
}
