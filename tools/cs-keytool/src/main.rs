//! # CellSign Key Tool
//!
//! Generates and checks the Ed25519 key material a cell broadcasts with.
//! The secret seed printed by `generate` goes into the gNB configuration
//! (or the `CS_SECRET_KEY` environment variable); the public key is what
//! gets provisioned to terminals.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use shared_crypto::{self_test, Ed25519KeyPair, Ed25519PublicKey};

#[derive(Parser)]
#[command(name = "cs-keytool", about = "CellSign broadcast key tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fresh keypair and print both halves as hex.
    Generate,

    /// Derive the public key for an existing secret seed.
    Derive {
        /// Secret seed, 64 hex chars.
        #[arg(long)]
        secret: String,
    },

    /// Check that a secret/public pair are consistent. Exits non-zero on
    /// failure.
    SelfTest {
        /// Secret seed, 64 hex chars.
        #[arg(long)]
        secret: String,
        /// Claimed public key, 64 hex chars.
        #[arg(long)]
        public: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            let keypair = Ed25519KeyPair::generate();
            println!("secret_key: {}", hex_seed(&keypair));
            println!("public_key: {}", keypair.public_key().to_hex());
        }
        Command::Derive { secret } => {
            let keypair =
                Ed25519KeyPair::from_seed_hex(&secret).context("Invalid secret seed")?;
            println!("public_key: {}", keypair.public_key().to_hex());
        }
        Command::SelfTest { secret, public } => {
            let keypair =
                Ed25519KeyPair::from_seed_hex(&secret).context("Invalid secret seed")?;
            let claimed = Ed25519PublicKey::from_hex(&public).context("Invalid public key")?;
            self_test(&keypair, &claimed).context("Self-test failed")?;
            println!("self-test: OK");
        }
    }

    Ok(())
}

fn hex_seed(keypair: &Ed25519KeyPair) -> String {
    let seed = keypair.to_seed();
    seed.iter().map(|b| format!("{b:02x}")).collect()
}
