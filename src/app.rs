use cardcatalog_core::{fetcher_from, load_catalog, CatalogController};
use dioxus::prelude::*;

use crate::context::launch_options;
use crate::pages::Catalog;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The card catalog
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Catalog {},
}

/// Root application component.
///
/// Owns the catalog controller, starts the boot fetches, and provides
/// global styles and routing.
#[component]
pub fn App() -> Element {
    let mut controller: Signal<CatalogController> =
        use_signal(|| CatalogController::new(launch_options().config.highlight));

    use_context_provider(|| controller);

    // Boot once on mount; the first real render happens after both fetches settle
    use_hook(move || {
        spawn(async move {
            let options = launch_options();
            let loaded = match fetcher_from(options.root.as_deref(), &options.config.base_url) {
                Ok(fetcher) => load_catalog(fetcher, &options.config).await,
                Err(e) => Err(e),
            };

            match loaded {
                Ok(catalog) => controller.write().install(catalog),
                Err(e) => {
                    tracing::error!("Failed to load catalog: {}", e);
                    controller.write().fail_boot();
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
