use cardz::currency;
use cardz::dates;
use cardz::model::GiftCard;
use colored::Colorize;

const BRAND_WIDTH: usize = 22;
const AMOUNT_WIDTH: usize = 12;

pub fn print_success(message: &str) {
    println!("{}", message.green());
}

/// One row per card, keyed by its position in the unfiltered list so the
/// printed index always works with `show`/`edit`/`delete`.
pub fn print_cards(rows: &[(usize, &GiftCard)]) {
    if rows.is_empty() {
        println!("No gift cards found.");
        return;
    }

    for (index, card) in rows {
        // Pad before coloring; ANSI escapes confuse width specifiers.
        let brand = format!("{:<width$}", card.brand, width = BRAND_WIDTH);
        let amount = format!(
            "{:<width$}",
            currency::format_amount(card.amount, &card.currency),
            width = AMOUNT_WIDTH
        );
        println!(
            "{:>3}. {} {} {}",
            index,
            brand.bold(),
            amount,
            expiry_label(&card.expiration_date),
        );
    }
}

pub fn print_card(index: usize, card: &GiftCard, reveal: bool) {
    println!("{} {}", format!("{}.", index).yellow(), card.brand.bold());
    println!("--------------------------------");

    let currency_note = currency::find(&card.currency)
        .map(|c| format!("{} {} {}", c.flag, card.currency, c.name))
        .unwrap_or_else(|| card.currency.clone());
    println!(
        "Balance:  {} ({})",
        currency::format_amount(card.amount, &card.currency),
        currency_note
    );
    println!("Expires:  {}", expiry_label(&card.expiration_date));

    if let Some(number) = &card.card_number {
        println!("Number:   {}", masked(number, reveal));
    }
    if let Some(pin) = &card.pin {
        let shown = if reveal {
            pin.clone()
        } else {
            "••••".to_string()
        };
        println!("PIN:      {}", shown);
    }
    if let Some(notes) = &card.notes {
        println!("Notes:    {}", notes);
    }

    println!(
        "{}",
        format!(
            "Added {} · Updated {}",
            card.created_at.format("%b %-d, %Y"),
            card.updated_at.format("%b %-d, %Y")
        )
        .dimmed()
    );
}

pub fn print_currencies() {
    for c in currency::CURRENCIES {
        println!("{} {}  {:<4} {}", c.flag, c.code, c.symbol, c.name);
    }
}

fn expiry_label(expiration_date: &str) -> String {
    let display = dates::format_date(expiration_date);
    if dates::is_expired(expiration_date) {
        format!("expired {}", display).red().to_string()
    } else if dates::is_expiring_soon(expiration_date) {
        let days = dates::days_until_expiration(expiration_date);
        format!("expires {} (in {} days)", display, days)
            .yellow()
            .to_string()
    } else {
        format!("expires {}", display)
    }
}

fn masked(number: &str, reveal: bool) -> String {
    if reveal {
        return number.to_string();
    }
    let chars: Vec<char> = number.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("•••• {}", tail)
}
