use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use wallet_profile::*;

#[derive(Parser)]
#[command(name = "profile-cli")]
#[command(about = "Inspect and edit a placeholder wallet profile")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML); WALLET__* environment variables override it
    #[arg(short, long, global = true, default_value = "wallet.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the placeholder profile
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename an account and print the profile before and after
    Rename {
        /// Bech32m account address
        #[arg(short, long)]
        address: String,

        /// New display name
        #[arg(short, long)]
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match WalletConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };
    init_logging(&config.logging);

    let wallet = Wallet::with_config(Profile::placeholder(), config);

    let result = match cli.command {
        Commands::Show { json } => handle_show(&wallet, json),
        Commands::Rename { address, name } => handle_rename(&wallet, &address, &name),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_snapshot(snapshot: &ProfileSnapshot) {
    for network in snapshot.networks() {
        println!("{} ({} accounts)", network.id(), network.accounts().len());
        for account in network.accounts() {
            println!("  {}", account);
        }
    }
    println!("Fingerprint: {}", snapshot.fingerprint());
}

fn handle_show(wallet: &Wallet, json: bool) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let snapshot = wallet.profile_snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot);
    }
    Ok(())
}

fn handle_rename(
    wallet: &Wallet,
    address: &str,
    name: &str,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let before = wallet.profile_snapshot();
    let account = wallet.rename_account(address, name)?;
    let after = wallet.profile_snapshot();

    println!("Renamed: {}", account);
    println!("\nBefore:");
    print_snapshot(&before);
    println!("\nAfter:");
    print_snapshot(&after);

    Ok(())
}
