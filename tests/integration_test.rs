use wallet_profile::*;

const ALICE: &str = "account_rdx12yy8n09a0w907vrjyj4hws2yptrm3rdjv84l9sr24e3w7pk7nuxst8";

fn name(s: &str) -> DisplayName {
    DisplayName::new(s).unwrap()
}

#[test]
fn test_rename_alice_to_satoshi() {
    let wallet = Wallet::new(Profile::placeholder());
    let address = AccountAddress::try_from_bech32(ALICE).unwrap();

    let before = wallet.profile_snapshot();
    assert!(before.networks().len() >= 2);
    assert_eq!(before.networks()[0].id(), NetworkId::Mainnet);
    assert!(before.networks()[0].accounts().len() >= 2);
    assert_eq!(before.networks()[0].accounts()[0].address(), &address);
    assert_eq!(before.networks()[0].accounts()[0].display_name().value(), "Alice");

    let account = wallet.change_name_of_account(&address, name("Satoshi")).unwrap();
    assert_eq!(account.display_name().value(), "Satoshi");

    let after = wallet.profile_snapshot();
    assert_eq!(
        before.account_by_address(&address).unwrap().display_name().value(),
        "Alice"
    );
    assert_eq!(
        after.account_by_address(&address).unwrap().display_name().value(),
        "Satoshi"
    );
    assert_ne!(before, after);
    assert_ne!(before.fingerprint(), after.fingerprint());
}

#[test]
fn test_rename_unknown_account_fails_and_keeps_state() {
    let wallet = Wallet::new(Profile::placeholder());
    let before = wallet.profile_snapshot();
    let unknown = AccountAddress::placeholder_other();

    let result = wallet.change_name_of_account(&unknown, name("Nobody"));

    assert_eq!(result, Err(WalletError::AccountNotFound(unknown)));
    assert_eq!(wallet.profile_snapshot(), before);
    assert_eq!(wallet.profile_snapshot().fingerprint(), before.fingerprint());
}

#[test]
fn test_rename_round_trip_restores_profile() {
    let wallet = Wallet::new(Profile::placeholder());
    let original = wallet.profile_snapshot();
    let bob = AccountAddress::placeholder_bob();

    wallet.change_name_of_account(&bob, name("Robert")).unwrap();
    assert_ne!(wallet.profile_snapshot(), original);
    wallet.change_name_of_account(&bob, name("Bob")).unwrap();

    assert_eq!(wallet.profile_snapshot(), original);
}

#[test]
fn test_rename_preserves_order() {
    let wallet = Wallet::new(Profile::placeholder());
    let before = wallet.profile_snapshot();

    wallet
        .change_name_of_account(&AccountAddress::placeholder_diana(), name("Dee"))
        .unwrap();
    wallet
        .change_name_of_account(&AccountAddress::placeholder_alice(), name("Al"))
        .unwrap();

    let after = wallet.profile_snapshot();
    assert_eq!(after.networks().ids(), before.networks().ids());
    for (old, new) in before.networks().iter().zip(after.networks().iter()) {
        assert_eq!(old.accounts().ids(), new.accounts().ids());
    }
}

#[test]
fn test_returned_account_is_independent() {
    let wallet = Wallet::new(Profile::placeholder());
    let alice = AccountAddress::placeholder_alice();

    let first = wallet.change_name_of_account(&alice, name("First")).unwrap();
    let looked_up = wallet.account_by_address(&alice).unwrap();
    wallet.change_name_of_account(&alice, name("Second")).unwrap();

    assert_eq!(first.display_name().value(), "First");
    assert_eq!(looked_up.display_name().value(), "First");
    assert_eq!(
        wallet.account_by_address(&alice).unwrap().display_name().value(),
        "Second"
    );
}

#[test]
fn test_add_account_then_rename() {
    let wallet = Wallet::new(Profile::placeholder());
    let erin = Account::new(
        AccountAddress::placeholder_stokenet_other(),
        name("Erin"),
        AppearanceId::from_number_of_accounts_on_network(2),
    );
    let before = wallet.profile_snapshot();

    wallet.add_account(erin.clone()).unwrap();
    let renamed = wallet
        .change_name_of_account(erin.address(), name("Erin B"))
        .unwrap();

    assert_eq!(renamed.appearance_id().value(), 2);
    let stokenet = wallet.accounts_on_network(NetworkId::Stokenet).unwrap();
    assert_eq!(stokenet.len(), 3);
    assert_eq!(stokenet[2].display_name().value(), "Erin B");
    assert_eq!(before.accounts_on_network(NetworkId::Stokenet).unwrap().len(), 2);
}

#[test]
fn test_profile_json_roundtrip_through_wallet() {
    let wallet = Wallet::new(Profile::placeholder());
    wallet.rename_account(ALICE, "Satoshi").unwrap();

    let json = serde_json::to_string(&wallet.profile_snapshot()).unwrap();
    let restored: Profile = serde_json::from_str(&json).unwrap();
    let reloaded = Wallet::new(restored);

    assert_eq!(reloaded.profile_snapshot(), wallet.profile_snapshot());
}

#[test]
fn test_errors_display() {
    let err = WalletError::AccountNotFound(AccountAddress::placeholder_other());
    assert!(err.to_string().starts_with("Account not found: account_rdx1"));
    let err = WalletError::from(ValidationError::EmptyName);
    assert_eq!(err.to_string(), "Validation error: Display name must not be empty");
}
