//! Connect/disconnect widget for the injected browser wallet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `RwSignal<WalletState>`; the provider calls
//! themselves live in `net::wallet`.

use leptos::prelude::*;

use crate::state::wallet::{ConnectorKind, WalletState, short_address};

#[component]
pub fn WalletConnect() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let on_connect = Callback::new(move |kind: ConnectorKind| {
        if wallet.get_untracked().is_pending() {
            return;
        }
        wallet.update(WalletState::begin_connect);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::wallet::connect(kind).await {
                Ok(account) => wallet.update(|w| w.connected(account)),
                Err(e) => {
                    log::warn!("wallet connect via {} failed: {e}", kind.name());
                    wallet.update(|w| w.failed(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = kind;
    });

    let on_disconnect = move |_| {
        wallet.update(WalletState::disconnect);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::net::wallet::disconnect());
    };

    view! {
        <div class="wallet-connect">
            <Show
                when=move || wallet.get().is_connected()
                fallback=move || {
                    view! {
                        <div class="wallet-connect__connectors">
                            <For
                                each=move || wallet.get().connectors
                                key=|c| c.uid
                                children=move |connector| {
                                    let kind = connector.kind;
                                    view! {
                                        <button
                                            class="btn btn--primary btn--sm"
                                            disabled=move || wallet.get().is_pending()
                                            on:click=move |_| on_connect.run(kind)
                                        >
                                            {connector.name}
                                        </button>
                                    }
                                }
                            />
                        </div>
                        <Show when=move || wallet.get().error.is_some()>
                            <p class="wallet-connect__error">{move || wallet.get().error.unwrap_or_default()}</p>
                        </Show>
                    }
                }
            >
                <div class="wallet-connect__account">
                    <p class="wallet-connect__address">
                        "Connected: "
                        {move || wallet.get().address().map(short_address).unwrap_or_default()}
                    </p>
                    <button class="btn btn--outline btn--sm" on:click=on_disconnect>
                        "Disconnect"
                    </button>
                </div>
            </Show>
        </div>
    }
}
