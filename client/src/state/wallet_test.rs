use super::*;

fn account(chain_id: u64, balance_wei: Option<u128>) -> WalletAccount {
    WalletAccount {
        address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_owned(),
        chain_id,
        balance_wei,
        connector: ConnectorKind::Injected,
    }
}

#[test]
fn chain_name_resolves_known_chains() {
    assert_eq!(chain_name(1), "Mainnet");
    assert_eq!(chain_name(11_155_111), "Sepolia");
    assert_eq!(chain_name(137), "Unknown");
}

#[test]
fn walletconnect_offered_only_with_project_id() {
    let without = configured_connectors(None);
    assert_eq!(without.iter().map(|c| c.name).collect::<Vec<_>>(), vec!["Injected", "MetaMask"]);

    let blank = configured_connectors(Some("  "));
    assert_eq!(blank.len(), 2);

    let with = configured_connectors(Some("abc123"));
    assert_eq!(with.last().map(|c| c.kind), Some(ConnectorKind::WalletConnect));
}

#[test]
fn short_address_keeps_prefix_and_suffix() {
    assert_eq!(short_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"), "0x71C7...976F");
    assert_eq!(short_address("0x1234"), "0x1234");
}

#[test]
fn format_ether_rounds_to_precision() {
    assert_eq!(format_ether(0, 4), "0.0000");
    assert_eq!(format_ether(1_000_000_000_000_000_000, 4), "1.0000");
    assert_eq!(format_ether(1_234_567_000_000_000_000, 4), "1.2346");
    assert_eq!(format_ether(50_000_000_000_000, 4), "0.0001");
}

#[test]
fn wallet_state_lifecycle() {
    let mut state = WalletState::default();
    assert!(!state.is_connected());

    state.begin_connect();
    assert!(state.is_pending());

    state.connected(account(1, Some(2_500_000_000_000_000_000)));
    assert!(state.is_connected());
    assert_eq!(state.chain_id(), Some(1));
    assert_eq!(state.balance_display().as_deref(), Some("2.5000 ETH"));

    state.disconnect();
    assert!(!state.is_connected());
    assert_eq!(state.address(), None);
}

#[test]
fn wallet_state_failure_records_message() {
    let mut state = WalletState::default();
    state.begin_connect();
    state.failed("connection request rejected".to_owned());
    assert_eq!(state.status, WalletStatus::Disconnected);
    assert_eq!(state.error.as_deref(), Some("connection request rejected"));
}

#[test]
fn balance_display_uses_chain_symbol() {
    let mut state = WalletState::default();
    state.connected(account(11_155_111, Some(0)));
    assert_eq!(state.balance_display().as_deref(), Some("0.0000 SepoliaETH"));
    state.connected(account(1, None));
    assert_eq!(state.balance_display(), None);
}

fn connected_state() -> WalletState {
    let mut state = WalletState::default();
    state.connected(account(1, Some(2_500_000_000_000_000_000)));
    state
}

#[test]
fn account_switch_updates_address_and_requests_balance() {
    let mut state = connected_state();
    let refresh = state.apply_event(WalletEvent::AccountsChanged(vec!["0xabc0000000000000000000000000000000000001".to_owned()]));

    assert_eq!(
        refresh,
        Some(BalanceRefresh { address: "0xabc0000000000000000000000000000000000001".to_owned(), chain_id: 1 })
    );
    assert_eq!(state.address(), Some("0xabc0000000000000000000000000000000000001"));
    assert_eq!(state.balance_display(), None);

    state.balance_loaded(&refresh.unwrap(), Some(1_000_000_000_000_000_000));
    assert_eq!(state.balance_display().as_deref(), Some("1.0000 ETH"));
}

#[test]
fn same_account_in_other_case_is_not_a_switch() {
    let mut state = connected_state();
    let event = WalletEvent::AccountsChanged(vec!["0x71c7656ec7ab88b098defb751b7401b5f6d8976f".to_owned()]);
    assert_eq!(state.apply_event(event), None);
    assert_eq!(state.balance_display().as_deref(), Some("2.5000 ETH"));
}

#[test]
fn empty_account_list_disconnects() {
    let mut state = connected_state();
    assert_eq!(state.apply_event(WalletEvent::AccountsChanged(Vec::new())), None);
    assert!(!state.is_connected());
    assert_eq!(state.status, WalletStatus::Disconnected);
}

#[test]
fn chain_switch_updates_chain_and_clears_block() {
    let mut state = connected_state();
    state.block_observed(21_000_000);

    let refresh = state.apply_event(WalletEvent::ChainChanged(11_155_111)).unwrap();
    assert_eq!(refresh.chain_id, 11_155_111);
    assert_eq!(state.chain_id(), Some(11_155_111));
    assert_eq!(state.block_number, None);
    assert_eq!(state.balance_display(), None);

    assert_eq!(state.apply_event(WalletEvent::ChainChanged(11_155_111)), None);
}

#[test]
fn stale_balance_from_previous_chain_is_ignored() {
    let mut state = connected_state();
    let first = state.apply_event(WalletEvent::ChainChanged(11_155_111)).unwrap();
    state.apply_event(WalletEvent::ChainChanged(1));

    state.balance_loaded(&first, Some(7));
    assert_eq!(state.balance_display(), None);
}

#[test]
fn events_while_disconnected_are_ignored() {
    let mut state = WalletState::default();
    assert_eq!(state.apply_event(WalletEvent::ChainChanged(1)), None);
    assert_eq!(state.apply_event(WalletEvent::AccountsChanged(vec!["0x1".to_owned()])), None);
    assert!(state.account.is_none());
}

#[test]
fn block_number_only_moves_forward_while_connected() {
    let mut state = WalletState::default();
    state.block_observed(5);
    assert_eq!(state.block_number, None);

    let mut state = connected_state();
    state.block_observed(100);
    state.block_observed(99);
    assert_eq!(state.block_number, Some(100));
    state.block_observed(101);
    assert_eq!(state.block_number, Some(101));

    state.disconnect();
    assert_eq!(state.block_number, None);
}
