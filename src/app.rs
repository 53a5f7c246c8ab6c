use leptos::prelude::*;

use crate::core::PageConfig;

/// Binds the page behaviors for as long as the component is mounted.
///
/// For Leptos apps that render the marketing markup themselves; static pages
/// call `init()` instead. Without an explicit `config` the inline
/// configuration block of the page is used.
#[component]
pub fn PageInteractions(#[prop(optional)] config: Option<PageConfig>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::ui::PageInteractionController;

        // Disposed together with the owner, which unbinds the page.
        let controller = StoredValue::new_local(None::<PageInteractionController>);

        Effect::new(move |_| {
            if controller.with_value(Option::is_some) {
                return;
            }
            let installed = match config.clone() {
                Some(config) => PageInteractionController::install(config),
                None => PageInteractionController::install_from_page(),
            };
            match installed {
                Ok(installed) => controller.set_value(Some(installed)),
                Err(err) => tracing::error!(error = %err, "Page interactions unavailable"),
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        // Behaviors only decorate existing markup
        <div class="hidden"></div>
    }
}
