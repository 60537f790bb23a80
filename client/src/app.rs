//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::submit::Submitter;
use crate::pages::{
    asset_status::AssetStatusPage, home::HomePage, register::RegisterPage, repayment::RepaymentPage,
    tasks::TasksPage, verification::VerificationPage, wallet_demo::WalletDemoPage,
};
use crate::state::{tasks::TasksState, wallet::WalletState};

/// Keep the shared wallet state in step with account and network switches
/// made inside the wallet.
#[cfg(feature = "hydrate")]
fn track_provider_events(wallet: RwSignal<WalletState>) {
    use crate::net::wallet::{balance_of, watch_provider};

    let watched = watch_provider(move |event| {
        let Some(Some(refresh)) = wallet.try_update(|w| w.apply_event(event)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match balance_of(&refresh.address).await {
                Ok(balance) => {
                    wallet.try_update(|w| w.balance_loaded(&refresh, balance));
                }
                Err(e) => log::warn!("balance refresh failed: {e}"),
            }
        });
    });
    if let Err(e) = watched {
        log::debug!("wallet events not tracked: {e}");
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Wallet and task state are app-wide so they survive route changes; the
/// asset submitter is injected here so pages never pick an implementation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let wallet = RwSignal::new(WalletState::default());
    provide_context(wallet);
    #[cfg(feature = "hydrate")]
    track_provider_events(wallet);
    provide_context(RwSignal::new(TasksState::default()));
    provide_context(Submitter::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/rwa-portal.css"/>
        <Title text="ChainCredit | RWA Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("assets"), StaticSegment("register")) view=RegisterPage/>
                <Route path=(StaticSegment("assets"), StaticSegment("status")) view=AssetStatusPage/>
                <Route path=(StaticSegment("assets"), StaticSegment("verification")) view=VerificationPage/>
                <Route path=StaticSegment("repayment") view=RepaymentPage/>
                <Route path=StaticSegment("wallet-demo") view=WalletDemoPage/>
                <Route path=StaticSegment("tasks") view=TasksPage/>
            </Routes>
        </Router>
    }
}
