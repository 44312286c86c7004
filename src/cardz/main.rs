use cardz::currency;
use cardz::error::{CardzError, Result};
use cardz::form::{self, GiftCardFormData, ValidationError};
use cardz::model::GiftCard;
use cardz::store::fs::FileStore;
use cardz::wallet::CardWallet;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod args;
mod print;

use args::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut wallet = CardWallet::new(FileStore::new(data_dir()?));
    wallet.load()?;

    match cli.command {
        Commands::Add {
            brand,
            amount,
            currency,
            expires,
            number,
            pin,
            notes,
        } => handle_add(
            &mut wallet,
            GiftCardFormData {
                brand,
                amount,
                currency,
                expiration_date: expires,
                card_number: number,
                pin,
                notes,
            },
        ),
        Commands::List { currency, expiring } => handle_list(&wallet, currency, expiring),
        Commands::Show { index, reveal } => handle_show(&wallet, index, reveal),
        Commands::Edit {
            index,
            brand,
            amount,
            currency,
            expires,
            number,
            pin,
            notes,
        } => handle_edit(
            &mut wallet,
            index,
            FieldOverrides {
                brand,
                amount,
                currency,
                expires,
                number,
                pin,
                notes,
            },
        ),
        Commands::Delete { index } => handle_delete(&mut wallet, index),
        Commands::Currencies => {
            print::print_currencies();
            Ok(())
        }
    }
}

/// Data directory: `CARDZ_HOME` when set (tests, portable installs),
/// otherwise the platform data dir.
fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("CARDZ_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "cardz", "cardz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CardzError::Store("Could not determine a data directory".to_string()))
}

/// Map a 1-based `cardz list` position to the record id the wallet wants.
fn resolve(wallet: &CardWallet<FileStore>, index: usize) -> Result<Uuid> {
    index
        .checked_sub(1)
        .and_then(|i| wallet.cards().get(i))
        .map(|card| card.id)
        .ok_or_else(|| CardzError::Store(format!("No card at position {}", index)))
}

fn handle_add(wallet: &mut CardWallet<FileStore>, form: GiftCardFormData) -> Result<()> {
    form.validate()?;
    let card = wallet.create(&form)?;
    print::print_success(&format!(
        "Card added: {} — {}",
        card.brand,
        currency::format_amount(card.amount, &card.currency)
    ));
    Ok(())
}

fn handle_list(
    wallet: &CardWallet<FileStore>,
    currency: Option<String>,
    expiring: bool,
) -> Result<()> {
    let wanted = currency.map(|c| c.to_uppercase());
    let rows: Vec<(usize, &GiftCard)> = wallet
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| (i + 1, card))
        .filter(|(_, card)| match &wanted {
            Some(code) => card.currency == *code,
            None => true,
        })
        .filter(|(_, card)| !expiring || cardz::dates::is_expiring_soon(&card.expiration_date))
        .collect();
    print::print_cards(&rows);
    Ok(())
}

fn handle_show(wallet: &CardWallet<FileStore>, index: usize, reveal: bool) -> Result<()> {
    let id = resolve(wallet, index)?;
    let card = wallet.get(id).ok_or(CardzError::CardNotFound(id))?;
    print::print_card(index, card, reveal);
    Ok(())
}

struct FieldOverrides {
    brand: Option<String>,
    amount: Option<String>,
    currency: Option<String>,
    expires: Option<String>,
    number: Option<String>,
    pin: Option<String>,
    notes: Option<String>,
}

fn handle_edit(
    wallet: &mut CardWallet<FileStore>,
    index: usize,
    overrides: FieldOverrides,
) -> Result<()> {
    let id = resolve(wallet, index)?;
    let card = wallet
        .get(id)
        .cloned()
        .ok_or(CardzError::CardNotFound(id))?;

    // Only the supplied fields get the form rules; stored values (including
    // legacy ISO expiration dates) pass through untouched.
    if let Some(brand) = &overrides.brand {
        if brand.trim().is_empty() {
            return Err(ValidationError::BrandRequired.into());
        }
    }
    if let Some(amount) = &overrides.amount {
        form::validate_amount(amount)?;
    }
    if let Some(code) = &overrides.currency {
        if !currency::is_supported(code) {
            return Err(ValidationError::UnsupportedCurrency(code.clone()).into());
        }
    }
    if let Some(expires) = &overrides.expires {
        form::validate_expiration(expires)?;
    }

    let form = GiftCardFormData {
        brand: overrides.brand.unwrap_or(card.brand),
        amount: overrides.amount.unwrap_or_else(|| card.amount.to_string()),
        currency: overrides.currency.unwrap_or(card.currency),
        expiration_date: overrides.expires.unwrap_or(card.expiration_date),
        card_number: overrides.number.or(card.card_number),
        pin: overrides.pin.or(card.pin),
        notes: overrides.notes.or(card.notes),
    };

    let updated = wallet.update(id, &form)?;
    print::print_success(&format!("Card updated: {}", updated.brand));
    Ok(())
}

fn handle_delete(wallet: &mut CardWallet<FileStore>, index: usize) -> Result<()> {
    let id = resolve(wallet, index)?;
    let brand = wallet
        .get(id)
        .map(|card| card.brand.clone())
        .unwrap_or_default();
    wallet.delete(id)?;
    print::print_success(&format!("Card deleted: {}", brand));
    Ok(())
}
