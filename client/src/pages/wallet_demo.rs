//! Wallet connection demo: connector buttons, account and network info.

#[cfg(test)]
#[path = "wallet_demo_test.rs"]
mod wallet_demo_test;

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::main_layout::{MainLayout, crumbs};
use crate::components::wallet_connect::WalletConnect;
use crate::state::wallet::{WalletState, chain_name};

fn chain_summary(chain_id: Option<u64>) -> String {
    chain_id.map_or_else(|| "Not connected".to_owned(), |id| format!("{} ({id})", chain_name(id)))
}

/// Re-read the latest block while the page is mounted and a wallet is
/// connected.
#[cfg(feature = "hydrate")]
fn poll_block_number(wallet: RwSignal<WalletState>) {
    use crate::net::wallet::{BLOCK_POLL_INTERVAL, block_number};

    // Disposed with the page; ends the loop after navigation.
    let mounted = RwSignal::new(());
    leptos::task::spawn_local(async move {
        while mounted.try_get_untracked().is_some() {
            if wallet.with_untracked(WalletState::is_connected) {
                match block_number().await {
                    Ok(number) => wallet.update(|w| w.block_observed(number)),
                    Err(e) => log::debug!("block number poll failed: {e}"),
                }
            }
            gloo_timers::future::sleep(BLOCK_POLL_INTERVAL).await;
        }
    });
}

fn block_summary(block_number: Option<u64>) -> String {
    block_number.map_or_else(|| "Waiting for block...".to_owned(), |n| format!("#{n}"))
}

#[component]
pub fn WalletDemoPage() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let account = move || wallet.get().account;
    #[cfg(feature = "hydrate")]
    poll_block_number(wallet);

    view! {
        <MainLayout breadcrumbs=crumbs(&[("Wallet", "/wallet-demo")])>
            <div class="page page--narrow">
                <div class="page__header">
                    <h1>"Wallet"</h1>
                    <p class="muted">"Connect a browser wallet to view account and network details"</p>
                </div>

                <GlassCard title="Wallet Connection">
                    <WalletConnect />
                </GlassCard>

                <Show when=move || wallet.get().is_connected()>
                    <GlassCard title="Account Information">
                        <div class="kv-list">
                            <div>
                                <span class="muted">"Address"</span>
                                <span class="mono">{move || account().map(|a| a.address).unwrap_or_default()}</span>
                            </div>
                            <div>
                                <span class="muted">"Chain"</span>
                                <span>{move || chain_summary(wallet.get().chain_id())}</span>
                            </div>
                            <Show when=move || wallet.get().balance_display().is_some()>
                                <div>
                                    <span class="muted">"Balance"</span>
                                    <span>{move || wallet.get().balance_display().unwrap_or_default()}</span>
                                </div>
                            </Show>
                            <div>
                                <span class="muted">"Connector"</span>
                                <span>{move || account().map(|a| a.connector.name()).unwrap_or_default()}</span>
                            </div>
                        </div>
                    </GlassCard>
                </Show>

                <GlassCard title="Network Information">
                    <div class="kv-list">
                        <div>
                            <span class="muted">"Current Chain"</span>
                            <span>{move || chain_summary(wallet.get().chain_id())}</span>
                        </div>
                        <Show when=move || wallet.get().is_connected()>
                            <div>
                                <span class="muted">"Latest Block"</span>
                                <span class="mono">{move || block_summary(wallet.get().block_number)}</span>
                            </div>
                        </Show>
                    </div>
                </GlassCard>
            </div>
        </MainLayout>
    }
}
