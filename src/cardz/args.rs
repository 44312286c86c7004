use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardz")]
#[command(about = "Local gift card wallet for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a gift card
    #[command(alias = "a")]
    Add {
        /// Brand or store name, e.g. "Amazon"
        #[arg(long)]
        brand: String,

        /// Balance, e.g. 50 or 25.50
        #[arg(long)]
        amount: String,

        /// 3-letter currency code (see `cardz currencies`)
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Expiration date as DD-MM-YYYY
        #[arg(long)]
        expires: String,

        /// Card number, for reference
        #[arg(long)]
        number: Option<String>,

        /// Card PIN
        #[arg(long)]
        pin: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List gift cards
    #[command(alias = "ls")]
    List {
        /// Only cards in this currency
        #[arg(short, long)]
        currency: Option<String>,

        /// Only cards expiring within the next 30 days
        #[arg(long)]
        expiring: bool,
    },

    /// Show one card in full
    #[command(alias = "s")]
    Show {
        /// Position in `cardz list`
        index: usize,

        /// Print the card number and PIN unmasked
        #[arg(long)]
        reveal: bool,
    },

    /// Edit a card; flags you leave out keep their stored values
    #[command(alias = "e")]
    Edit {
        /// Position in `cardz list`
        index: usize,

        #[arg(long)]
        brand: Option<String>,

        #[arg(long)]
        amount: Option<String>,

        #[arg(long)]
        currency: Option<String>,

        /// New expiration date as DD-MM-YYYY
        #[arg(long)]
        expires: Option<String>,

        #[arg(long)]
        number: Option<String>,

        #[arg(long)]
        pin: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a card
    #[command(alias = "rm")]
    Delete {
        /// Position in `cardz list`
        index: usize,
    },

    /// List the supported currencies
    Currencies,
}
