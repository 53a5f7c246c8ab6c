use std::cell::RefCell;
use std::rc::Rc;

use super::{Bindings, PageContext};
use crate::core::{PageError, Scheduler, TriggerSet};
use crate::ui::dom;
use crate::ui::observer::VisibilityObserver;

/// Reveal cards once, staggered within each intersection batch.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    let config = &ctx.config;
    let elements = Rc::new(dom::query_all(&ctx.document, &config.selectors.reveal));
    if elements.is_empty() {
        tracing::debug!("No reveal targets on page");
        return Ok(());
    }

    let pending = Rc::new(RefCell::new(TriggerSet::new()));
    let stagger = config.reveal_stagger();
    let visible_class = config.classes.visible.clone();
    let scheduler = ctx.scheduler;

    let targets = elements.clone();
    let triggers = pending.clone();
    let observer = VisibilityObserver::new(config.reveal_threshold, move |entries, observer| {
        let intersecting = entries
            .iter()
            .filter(|entry| entry.is_intersecting())
            .filter_map(|entry| {
                let target = entry.target();
                targets.iter().position(|element| *element == target)
            });
        let fired = triggers.borrow_mut().fire_batch(intersecting, stagger);

        for (index, delay) in fired {
            let element = targets[index].clone();
            observer.unobserve(&element);
            let class = visible_class.clone();
            scheduler.defer(delay, move || dom::set_class(&element, &class, true));
        }
    })?;

    {
        let mut armed = pending.borrow_mut();
        for (index, element) in elements.iter().enumerate() {
            dom::set_class(element, &config.classes.reveal_pending, true);
            armed.arm(index);
        }
    }
    for element in elements.iter() {
        observer.observe(element);
    }

    bindings.keep_observer(observer);
    Ok(())
}
