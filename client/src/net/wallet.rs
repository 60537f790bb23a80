//! Browser wallet calls over the injected EIP-1193 provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `window.ethereum` is the only transport. The app asks for accounts, reads
//! the chain id, balance and latest block, and never builds or signs a
//! transaction. Results land in `state::wallet::WalletState`, and the
//! provider's `accountsChanged` / `chainChanged` events are forwarded as
//! `WalletEvent`s so the state follows switches made inside the wallet.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures are classified into `WalletError` by their EIP-1193
//! `code`; the widget shows `to_string()` as a single line. Server builds get
//! stubs that report the wallet as unavailable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use std::time::Duration;

use crate::state::wallet::{ConnectorKind, WalletAccount, WalletEvent};

/// EIP-1193 "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// How often the wallet page re-reads the latest block.
pub const BLOCK_POLL_INTERVAL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("no browser wallet detected")]
    NoProvider,
    #[error("connection request rejected")]
    Rejected,
    #[error("wallet error: {0}")]
    Provider(String),
    #[error("{0} connector is not supported in this build")]
    Unsupported(&'static str),
    #[error("{0} is not available")]
    Unavailable(String),
}

/// Map an EIP-1193 error object's fields to a `WalletError`.
pub fn classify_provider_error(code: Option<i64>, message: Option<String>) -> WalletError {
    match code {
        Some(USER_REJECTED_CODE) => WalletError::Rejected,
        _ => WalletError::Provider(message.unwrap_or_else(|| "unknown provider error".to_owned())),
    }
}

/// Parse an Ethereum JSON-RPC hex quantity (`0x`-prefixed, no leading zeros
/// required).
pub fn parse_hex_quantity(raw: &str) -> Option<u128> {
    let digits = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u128::from_str_radix(digits, 16).ok()
}

/// Decode a `chainChanged` payload (hex chain id).
pub fn chain_changed_event(raw: &str) -> Option<WalletEvent> {
    parse_hex_quantity(raw)
        .and_then(|id| u64::try_from(id).ok())
        .map(WalletEvent::ChainChanged)
}

/// Ask the provider for access and read account, chain and balance.
///
/// # Errors
///
/// Returns a [`WalletError`] when no provider is injected, the user rejects
/// the request, the provider answers with an error, or the connector cannot
/// be used from this build.
pub async fn connect(kind: ConnectorKind) -> Result<WalletAccount, WalletError> {
    #[cfg(feature = "hydrate")]
    {
        browser::connect(kind).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kind;
        Err(WalletError::Unavailable("wallet on server".to_owned()))
    }
}

/// Latest block number on the wallet's current chain.
///
/// # Errors
///
/// Returns a [`WalletError`] when no provider is injected or the call fails.
pub async fn block_number() -> Result<u64, WalletError> {
    #[cfg(feature = "hydrate")]
    {
        browser::block_number().await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(WalletError::Unavailable("wallet on server".to_owned()))
    }
}

/// Current balance of `address` in wei.
///
/// # Errors
///
/// Returns a [`WalletError`] when no provider is injected or the call fails.
pub async fn balance_of(address: &str) -> Result<Option<u128>, WalletError> {
    #[cfg(feature = "hydrate")]
    {
        let provider = browser::provider()?;
        browser::balance(&provider, address).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = address;
        Err(WalletError::Unavailable("wallet on server".to_owned()))
    }
}

/// Forward the provider's account and chain events to `on_event` for the
/// lifetime of the page.
///
/// # Errors
///
/// Returns a [`WalletError`] when no provider is injected or it does not
/// support event listeners.
pub fn watch_provider(on_event: impl Fn(WalletEvent) + 'static) -> Result<(), WalletError> {
    #[cfg(feature = "hydrate")]
    {
        browser::watch(std::rc::Rc::new(on_event))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_event;
        Err(WalletError::Unavailable("wallet on server".to_owned()))
    }
}

/// Drop the dapp's account permission where the provider supports it.
/// Local state is cleared by the caller regardless of the outcome.
pub async fn disconnect() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = browser::revoke_permissions().await {
            log::debug!("wallet permission revoke skipped: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use js_sys::{Array, Function, Object, Promise, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{WalletError, chain_changed_event, classify_provider_error, parse_hex_quantity};
    use crate::state::wallet::{ConnectorKind, WalletAccount, WalletEvent};

    pub(super) fn provider() -> Result<JsValue, WalletError> {
        let window = web_sys::window().ok_or(WalletError::NoProvider)?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).map_err(|_| WalletError::NoProvider)?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return Err(WalletError::NoProvider);
        }
        Ok(ethereum)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn js_error(value: &JsValue) -> WalletError {
        let code = Reflect::get(value, &JsValue::from_str("code")).ok().and_then(|c| c.as_f64()).map(|c| c as i64);
        let message = Reflect::get(value, &JsValue::from_str("message")).ok().and_then(|m| m.as_string());
        classify_provider_error(code, message)
    }

    async fn request(provider: &JsValue, method: &str, params: Option<Array>) -> Result<JsValue, WalletError> {
        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method)).map_err(|e| js_error(&e))?;
        if let Some(params) = params {
            Reflect::set(&args, &JsValue::from_str("params"), &params).map_err(|e| js_error(&e))?;
        }
        let func: Function = Reflect::get(provider, &JsValue::from_str("request"))
            .map_err(|e| js_error(&e))?
            .dyn_into()
            .map_err(|_| WalletError::NoProvider)?;
        let promise: Promise = func
            .call1(provider, &args)
            .map_err(|e| js_error(&e))?
            .dyn_into()
            .map_err(|_| WalletError::Provider(format!("{method} did not return a promise")))?;
        JsFuture::from(promise).await.map_err(|e| js_error(&e))
    }

    fn is_metamask(provider: &JsValue) -> bool {
        Reflect::get(provider, &JsValue::from_str("isMetaMask")).ok().and_then(|v| v.as_bool()).unwrap_or(false)
    }

    pub(super) async fn connect(kind: ConnectorKind) -> Result<WalletAccount, WalletError> {
        if kind == ConnectorKind::WalletConnect {
            return Err(WalletError::Unsupported("WalletConnect"));
        }
        let provider = provider()?;
        if kind == ConnectorKind::MetaMask && !is_metamask(&provider) {
            return Err(WalletError::Unavailable("MetaMask".to_owned()));
        }

        let accounts: Array = request(&provider, "eth_requestAccounts", None)
            .await?
            .dyn_into()
            .map_err(|_| WalletError::Provider("unexpected accounts response".to_owned()))?;
        let address = accounts
            .get(0)
            .as_string()
            .ok_or_else(|| WalletError::Provider("no account returned".to_owned()))?;

        let chain_id = request(&provider, "eth_chainId", None)
            .await?
            .as_string()
            .and_then(|hex| parse_hex_quantity(&hex))
            .and_then(|id| u64::try_from(id).ok())
            .ok_or_else(|| WalletError::Provider("unreadable chain id".to_owned()))?;

        let balance_wei = balance(&provider, &address).await.unwrap_or_else(|e| {
            log::warn!("balance lookup failed: {e}");
            None
        });

        log::info!("wallet connected on chain {chain_id}");
        Ok(WalletAccount { address, chain_id, balance_wei, connector: kind })
    }

    pub(super) async fn balance(provider: &JsValue, address: &str) -> Result<Option<u128>, WalletError> {
        let params = Array::of2(&JsValue::from_str(address), &JsValue::from_str("latest"));
        let value = request(provider, "eth_getBalance", Some(params)).await?;
        Ok(value.as_string().and_then(|hex| parse_hex_quantity(&hex)))
    }

    pub(super) async fn block_number() -> Result<u64, WalletError> {
        let provider = provider()?;
        request(&provider, "eth_blockNumber", None)
            .await?
            .as_string()
            .and_then(|hex| parse_hex_quantity(&hex))
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| WalletError::Provider("unreadable block number".to_owned()))
    }

    pub(super) fn watch(on_event: Rc<dyn Fn(WalletEvent)>) -> Result<(), WalletError> {
        let provider = provider()?;
        let on: Function = Reflect::get(&provider, &JsValue::from_str("on"))
            .map_err(|e| js_error(&e))?
            .dyn_into()
            .map_err(|_| WalletError::Provider("provider does not emit events".to_owned()))?;

        let forward = Rc::clone(&on_event);
        let accounts_changed = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            let accounts: Vec<String> = value
                .dyn_into::<Array>()
                .map(|list| list.iter().filter_map(|v| v.as_string()).collect())
                .unwrap_or_default();
            forward(WalletEvent::AccountsChanged(accounts));
        });
        let chain_changed = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            match value.as_string().as_deref().and_then(chain_changed_event) {
                Some(event) => on_event(event),
                None => log::warn!("ignoring unreadable chainChanged payload"),
            }
        });

        on.call2(&provider, &JsValue::from_str("accountsChanged"), accounts_changed.as_ref().unchecked_ref())
            .map_err(|e| js_error(&e))?;
        on.call2(&provider, &JsValue::from_str("chainChanged"), chain_changed.as_ref().unchecked_ref())
            .map_err(|e| js_error(&e))?;

        // Listeners stay registered until the page unloads.
        accounts_changed.forget();
        chain_changed.forget();
        Ok(())
    }

    pub(super) async fn revoke_permissions() -> Result<(), WalletError> {
        let provider = provider()?;
        let permission = Object::new();
        Reflect::set(&permission, &JsValue::from_str("eth_accounts"), &Object::new()).map_err(|e| js_error(&e))?;
        request(&provider, "wallet_revokePermissions", Some(Array::of1(&permission))).await?;
        Ok(())
    }
}
