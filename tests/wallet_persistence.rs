//! End-to-end wallet tests against the real file store: what one wallet
//! writes, a fresh wallet (and a raw read of the blob) must see.

use cardz::form::GiftCardFormData;
use cardz::store::fs::FileStore;
use cardz::wallet::CardWallet;

fn form(brand: &str, amount: &str) -> GiftCardFormData {
    GiftCardFormData {
        brand: brand.to_string(),
        amount: amount.to_string(),
        currency: "USD".to_string(),
        expiration_date: "31-12-2030".to_string(),
        card_number: None,
        pin: None,
        notes: None,
    }
}

#[test]
fn a_fresh_wallet_sees_what_the_previous_one_wrote() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().join("data");

    let created = {
        let mut wallet = CardWallet::new(FileStore::new(root.clone()));
        wallet.load().unwrap();
        let first = wallet.create(&form("Amazon", "50")).unwrap();
        wallet.create(&form("Starbucks", "25.50")).unwrap();
        first
    };

    let mut wallet = CardWallet::new(FileStore::new(root.clone()));
    wallet.load().unwrap();
    assert_eq!(wallet.cards().len(), 2);
    assert_eq!(wallet.cards()[0].id, created.id);
    assert_eq!(wallet.cards()[0].amount, 50.0);
    assert_eq!(wallet.cards()[1].brand, "Starbucks");

    // The blob on disk is one JSON array with the documented field names.
    let blob = std::fs::read_to_string(root.join("gift_cards.json")).unwrap();
    assert!(blob.trim_start().starts_with('['));
    assert!(blob.contains("\"expirationDate\": \"31-12-2030\""));
    assert!(blob.contains("\"createdAt\""));
}

#[test]
fn delete_is_durable() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().to_path_buf();

    let mut wallet = CardWallet::new(FileStore::new(root.clone()));
    wallet.load().unwrap();
    let card = wallet.create(&form("Amazon", "50")).unwrap();
    wallet.delete(card.id).unwrap();

    let mut reopened = CardWallet::new(FileStore::new(root));
    reopened.load().unwrap();
    assert!(reopened.cards().is_empty());
}

#[test]
fn corrupt_blob_surfaces_the_load_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().to_path_buf();
    std::fs::write(root.join("gift_cards.json"), "{ definitely not an array").unwrap();

    let mut wallet = CardWallet::new(FileStore::new(root));
    assert!(wallet.load().is_err());
    assert_eq!(wallet.error(), Some("Failed to load gift cards"));
    assert!(wallet.cards().is_empty());
}
