//! Ripple overlay geometry and lifetime

use std::time::Duration;

use crate::core::timer::Scheduler;

/// Name of the injected `@keyframes` rule
pub const RIPPLE_KEYFRAMES_NAME: &str = "ripple";

/// Diameter of the overlay before scaling
pub const RIPPLE_SIZE_PX: f64 = 100.0;

/// Stylesheet defining the ripple animation, injected once per page
pub fn keyframes_css() -> String {
    format!(
        "@keyframes {RIPPLE_KEYFRAMES_NAME} {{\n  \
         to {{\n    transform: scale(4);\n    opacity: 0;\n  }}\n\
         }}\n"
    )
}

/// Transient overlay spawned on a button click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Left edge relative to the button
    pub left: f64,
    /// Top edge relative to the button
    pub top: f64,
    pub lifetime: Duration,
}

impl Ripple {
    /// Center the overlay on a click given in viewport coordinates
    pub fn at_click(
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
        lifetime: Duration,
    ) -> Self {
        let half = RIPPLE_SIZE_PX / 2.0;
        Self {
            left: client_x - rect_left - half,
            top: client_y - rect_top - half,
            lifetime,
        }
    }

    /// Inline style for the overlay `<span>`
    pub fn overlay_style(&self) -> String {
        format!(
            "position: absolute; background: rgba(255, 255, 255, 0.3); border-radius: 50%; \
             pointer-events: none; width: {size}px; height: {size}px; \
             left: {left}px; top: {top}px; \
             transform: scale(0); animation: {name} {secs}s ease-out;",
            size = RIPPLE_SIZE_PX,
            left = self.left,
            top = self.top,
            name = RIPPLE_KEYFRAMES_NAME,
            secs = self.lifetime.as_secs_f64(),
        )
    }

    /// Arrange for `remove` to run once the animation has played out.
    ///
    /// Each ripple owns its own timer; later clicks never shorten or extend it.
    pub fn schedule_removal<S, F>(&self, scheduler: &S, remove: F)
    where
        S: Scheduler,
        F: FnOnce() + 'static,
    {
        scheduler.defer(self.lifetime, remove);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timer::manual::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_overlay_centered_on_click() {
        let ripple = Ripple::at_click(130.0, 75.0, 100.0, 50.0, ms(600));
        assert_eq!(ripple.left, -20.0);
        assert_eq!(ripple.top, -25.0);
    }

    #[test]
    fn test_overlay_style() {
        let ripple = Ripple::at_click(60.0, 60.0, 0.0, 0.0, ms(600));
        let style = ripple.overlay_style();
        assert!(style.contains("left: 10px;"));
        assert!(style.contains("top: 10px;"));
        assert!(style.contains("width: 100px; height: 100px; left: 10px; top: 10px;"));
        assert!(style.contains("animation: ripple 0.6s ease-out;"));
    }

    #[test]
    fn test_keyframes_css() {
        assert_eq!(
            keyframes_css(),
            "@keyframes ripple {\n  to {\n    transform: scale(4);\n    opacity: 0;\n  }\n}\n"
        );
    }

    #[test]
    fn test_each_ripple_removed_after_its_own_lifetime() {
        let scheduler = ManualScheduler::new();
        let live = Rc::new(RefCell::new(Vec::new()));

        let spawn = |id: u32| {
            live.borrow_mut().push(id);
            let live = live.clone();
            Ripple::at_click(0.0, 0.0, 0.0, 0.0, ms(600))
                .schedule_removal(&scheduler, move || live.borrow_mut().retain(|r| *r != id));
        };

        spawn(1);
        scheduler.advance(ms(300));
        spawn(2);

        scheduler.advance(ms(299));
        assert_eq!(*live.borrow(), vec![1, 2]);
        scheduler.advance(ms(1));
        assert_eq!(*live.borrow(), vec![2]);

        scheduler.advance(ms(299));
        assert_eq!(*live.borrow(), vec![2]);
        scheduler.advance(ms(1));
        assert!(live.borrow().is_empty());
    }
}
