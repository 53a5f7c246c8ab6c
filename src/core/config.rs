//! Page interaction configuration.
//!
//! Every field has a default matching the MovianTech markup, so an empty
//! document (`{}`) or no configuration at all yields the stock behavior. Pages
//! override individual values through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="page-interactions-config">
//!   { "counter_duration_ms": 2000, "locale": "en-US" }
//! </script>
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::core::PageError;

/// Id of the inline `<script type="application/json">` block holding overrides
pub const CONFIG_ELEMENT_ID: &str = "page-interactions-config";

/// Element ids and CSS selectors the behaviors bind to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Id of the fixed page header
    pub header_id: String,
    /// Id of the hamburger button
    pub menu_toggle_id: String,
    /// Id of the mobile navigation panel
    pub mobile_menu_id: String,
    /// Links inside the mobile panel that close it
    pub mobile_links: String,
    /// In-page anchors eligible for smooth scrolling
    pub anchors: String,
    /// Elements revealed once on first sight
    pub reveal: String,
    /// Sections tracked by the navigation highlighter
    pub sections: String,
    /// Desktop navigation links
    pub nav_links: String,
    /// Buttons receiving the ripple effect
    pub buttons: String,
    /// Price amounts animated by the counter
    pub prices: String,
    /// Hero background decorations moved by parallax
    pub parallax: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header_id: "header".to_string(),
            menu_toggle_id: "menuToggle".to_string(),
            mobile_menu_id: "mobileMenu".to_string(),
            mobile_links: ".mobile-nav-link, .mobile-menu .btn".to_string(),
            anchors: r##"a[href^="#"]"##.to_string(),
            reveal: ".feature-card, .process-step, .service-card, .plan-card, .seo-card, \
                     .contact-card, .about-content, .seo-content"
                .to_string(),
            sections: "section[id]".to_string(),
            nav_links: ".nav-link".to_string(),
            buttons: ".btn".to_string(),
            prices: ".plan-price .amount".to_string(),
            parallax: ".hero-blob".to_string(),
        }
    }
}

/// CSS classes written by the behaviors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub scrolled: String,
    pub active: String,
    pub reveal_pending: String,
    pub visible: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            scrolled: "scrolled".to_string(),
            active: "active".to_string(),
            reveal_pending: "animate-on-scroll".to_string(),
            visible: "visible".to_string(),
        }
    }
}

/// Tunables for every page behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: ClassNames,

    /// Scroll offset (px) past which the header is marked scrolled
    pub header_scroll_threshold: f64,
    /// Debounce window for the header scroll check
    pub header_debounce_ms: u64,

    /// Extra probe offset (px) below the header used to pick the active section
    pub nav_probe_offset: f64,
    /// Debounce window for the navigation highlighter
    pub nav_debounce_ms: u64,

    /// Fraction of an element that must be visible to reveal it
    pub reveal_threshold: f64,
    /// Delay added per element within one intersection batch
    pub reveal_stagger_ms: u64,

    /// Lifetime of a ripple overlay
    pub ripple_duration_ms: u64,

    /// Parallax speed of the first decoration
    pub parallax_base_speed: f64,
    /// Speed added for each following decoration
    pub parallax_speed_step: f64,

    /// Fraction of a price element that must be visible to start counting
    pub counter_threshold: f64,
    /// Duration of the count-up animation
    pub counter_duration_ms: u64,
    /// BCP 47 tag selecting the thousands separator
    pub locale: String,

    /// Global object of the icon library (`lucide.createIcons()`)
    pub icon_global: String,
    /// Images fetched once at start-up
    pub preload_images: Vec<String>,
    /// Maximum level written to the browser console
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: ClassNames::default(),
            header_scroll_threshold: 50.0,
            header_debounce_ms: 10,
            nav_probe_offset: 100.0,
            nav_debounce_ms: 50,
            reveal_threshold: 0.1,
            reveal_stagger_ms: 100,
            ripple_duration_ms: 600,
            parallax_base_speed: 0.3,
            parallax_speed_step: 0.1,
            counter_threshold: 0.5,
            counter_duration_ms: 1500,
            locale: "pt-BR".to_string(),
            icon_global: "lucide".to_string(),
            preload_images: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let trimmed = json.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    pub fn header_debounce(&self) -> Duration {
        Duration::from_millis(self.header_debounce_ms)
    }

    pub fn nav_debounce(&self) -> Duration {
        Duration::from_millis(self.nav_debounce_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn ripple_duration(&self) -> Duration {
        Duration::from_millis(self.ripple_duration_ms)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    /// Console log level, falling back to `INFO` for unknown names
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
