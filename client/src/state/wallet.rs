//! Wallet connection state and chain/connector configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app only reads wallet data and triggers connect/disconnect. Key
//! management and signing stay inside the browser wallet; `net::wallet`
//! performs the provider calls and this module holds what they return.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

/// An EVM chain the app knows how to name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const MAINNET: Chain = Chain { id: 1, name: "Mainnet", symbol: "ETH" };
pub const SEPOLIA: Chain = Chain { id: 11_155_111, name: "Sepolia", symbol: "SepoliaETH" };

/// Chains offered by the connect widget.
pub const SUPPORTED_CHAINS: [Chain; 2] = [MAINNET, SEPOLIA];

pub fn chain_by_id(id: u64) -> Option<Chain> {
    SUPPORTED_CHAINS.into_iter().find(|c| c.id == id)
}

/// Display name for a chain id; unknown chains show as `Unknown`.
pub fn chain_name(id: u64) -> &'static str {
    chain_by_id(id).map_or("Unknown", |c| c.name)
}

/// Wallet connector families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorKind {
    Injected,
    MetaMask,
    WalletConnect,
}

impl ConnectorKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Injected => "Injected",
            Self::MetaMask => "MetaMask",
            Self::WalletConnect => "WalletConnect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connector {
    pub uid: &'static str,
    pub kind: ConnectorKind,
    pub name: &'static str,
}

/// Connectors offered to the user. WalletConnect needs a project id.
pub fn configured_connectors(walletconnect_project_id: Option<&str>) -> Vec<Connector> {
    let mut connectors = vec![
        Connector { uid: "injected", kind: ConnectorKind::Injected, name: ConnectorKind::Injected.name() },
        Connector { uid: "metaMask", kind: ConnectorKind::MetaMask, name: ConnectorKind::MetaMask.name() },
    ];
    if walletconnect_project_id.is_some_and(|id| !id.trim().is_empty()) {
        connectors.push(Connector {
            uid: "walletConnect",
            kind: ConnectorKind::WalletConnect,
            name: ConnectorKind::WalletConnect.name(),
        });
    }
    connectors
}

/// Project id baked in at build time.
pub fn build_walletconnect_project_id() -> Option<&'static str> {
    option_env!("WALLETCONNECT_PROJECT_ID")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Account data read from the provider after connecting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletAccount {
    pub address: String,
    pub chain_id: u64,
    pub balance_wei: Option<u128>,
    pub connector: ConnectorKind,
}

/// Provider notifications that change the connected account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletEvent {
    /// New account list, most recently selected first. Empty means the
    /// user disconnected the site inside the wallet.
    AccountsChanged(Vec<String>),
    ChainChanged(u64),
}

/// Balance that must be re-read after an account or chain switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceRefresh {
    pub address: String,
    pub chain_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletState {
    pub status: WalletStatus,
    pub account: Option<WalletAccount>,
    pub connectors: Vec<Connector>,
    /// Last connection failure, shown under the connector buttons.
    pub error: Option<String>,
    /// Latest block seen by the poller on the current chain.
    pub block_number: Option<u64>,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            status: WalletStatus::Disconnected,
            account: None,
            connectors: configured_connectors(build_walletconnect_project_id()),
            error: None,
            block_number: None,
        }
    }
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        self.status == WalletStatus::Connected && self.account.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.status == WalletStatus::Connecting
    }

    pub fn address(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.address.as_str())
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.account.as_ref().map(|a| a.chain_id)
    }

    /// Balance like `1.2346 ETH`, four fraction digits.
    pub fn balance_display(&self) -> Option<String> {
        let account = self.account.as_ref()?;
        let wei = account.balance_wei?;
        let symbol = chain_by_id(account.chain_id).map_or("ETH", |c| c.symbol);
        Some(format!("{} {symbol}", format_ether(wei, 4)))
    }

    pub fn begin_connect(&mut self) {
        self.status = WalletStatus::Connecting;
        self.error = None;
    }

    pub fn connected(&mut self, account: WalletAccount) {
        self.status = WalletStatus::Connected;
        self.account = Some(account);
        self.error = None;
        self.block_number = None;
    }

    pub fn failed(&mut self, message: String) {
        self.disconnect();
        self.error = Some(message);
    }

    pub fn disconnect(&mut self) {
        self.status = WalletStatus::Disconnected;
        self.account = None;
        self.block_number = None;
    }

    /// Fold a provider event into the connected account. Events while
    /// disconnected are ignored.
    pub fn apply_event(&mut self, event: WalletEvent) -> Option<BalanceRefresh> {
        if !self.is_connected() {
            return None;
        }
        match event {
            WalletEvent::AccountsChanged(accounts) => {
                let Some(address) = accounts.into_iter().next() else {
                    self.disconnect();
                    return None;
                };
                let account = self.account.as_mut()?;
                if address.eq_ignore_ascii_case(&account.address) {
                    return None;
                }
                account.address = address;
                account.balance_wei = None;
                Some(BalanceRefresh { address: account.address.clone(), chain_id: account.chain_id })
            }
            WalletEvent::ChainChanged(chain_id) => {
                let account = self.account.as_mut()?;
                if account.chain_id == chain_id {
                    return None;
                }
                account.chain_id = chain_id;
                account.balance_wei = None;
                self.block_number = None;
                Some(BalanceRefresh { address: account.address.clone(), chain_id })
            }
        }
    }

    /// Store a re-read balance unless the account or chain moved on since.
    pub fn balance_loaded(&mut self, refresh: &BalanceRefresh, balance_wei: Option<u128>) {
        if let Some(account) = self.account.as_mut() {
            if account.address == refresh.address && account.chain_id == refresh.chain_id {
                account.balance_wei = balance_wei;
            }
        }
    }

    /// Record a polled block number; older numbers never replace newer ones.
    pub fn block_observed(&mut self, number: u64) {
        if self.is_connected() && self.block_number.is_none_or(|seen| number > seen) {
            self.block_number = Some(number);
        }
    }
}

/// `0x1234...abcd` form of an address. Short inputs are returned unchanged.
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_owned();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Format a wei amount in ether with `precision` rounded fraction digits.
pub fn format_ether(wei: u128, precision: u32) -> String {
    const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;
    let scale = 10u128.pow(precision);
    let unit = WEI_PER_ETHER / scale;
    let scaled = (wei + unit / 2) / unit;
    let whole = scaled / scale;
    let frac = scaled % scale;
    format!("{whole}.{frac:0width$}", width = precision as usize)
}
