//! PVSS CLI
//!
//! Command-line interface for running PVSS sessions locally:
//! - Escrow a fresh secret to a set of participants
//! - Decrypt each participant's share with its own key
//! - Pool a quorum of decrypted shares back into the secret

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use elliptic_curve::CurveArithmetic;
use pvss_core::{
    pvss, FixedRandom, KeyPair, NistP256, Point, RandomSource, Scalar, Secp256k1, SeededRandom,
    SharingConfig, SystemRandom,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};

/// PVSS - publicly verifiable secret sharing over elliptic curves
#[derive(Parser)]
#[command(name = "pvss")]
#[command(about = "Escrow and reconstruct secrets shared over an elliptic curve")]
#[command(version)]
struct Cli {
    /// Curve to share over
    #[arg(short, long, env = "PVSS_CURVE", value_enum, default_value_t = CurveName::P256)]
    curve: CurveName,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a complete escrow / decrypt / pool session locally
    Run {
        /// Threshold (t-of-n)
        #[arg(short, long, default_value_t = pvss_core::DEFAULT_THRESHOLD)]
        threshold: usize,

        /// Number of participants
        #[arg(short = 'n', long, default_value_t = pvss_core::DEFAULT_PARTICIPANTS)]
        participants: usize,

        /// Sharing configuration file (JSON), overrides threshold and participants
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for reproducible randomness
        #[arg(short, long, env = "PVSS_SEED", conflicts_with = "fixed")]
        seed: Option<u64>,

        /// Use the fixed all-ones randomness (debugging only)
        #[arg(long)]
        fixed: bool,

        /// Share identifiers to pool (comma-separated), defaults to the first t shares
        #[arg(short, long)]
        pool_with: Option<String>,
    },

    /// Show curve parameters
    Params,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CurveName {
    K256,
    P256,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into());
    if cli.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    match cli.command {
        Commands::Run {
            threshold,
            participants,
            ref config,
            seed,
            fixed,
            ref pool_with,
        } => {
            let config = match config {
                Some(path) => load_config(path)?,
                None => SharingConfig::new(threshold, participants)?,
            };
            let pool_with = pool_with.as_deref().map(parse_share_ids).transpose()?;

            let matched = match (fixed, seed) {
                (true, _) => dispatch(cli.curve, &config, pool_with.as_deref(), &mut FixedRandom)?,
                (false, Some(seed)) => dispatch(
                    cli.curve,
                    &config,
                    pool_with.as_deref(),
                    &mut SeededRandom::from_seed(seed),
                )?,
                (false, None) => dispatch(
                    cli.curve,
                    &config,
                    pool_with.as_deref(),
                    &mut SystemRandom,
                )?,
            };

            if !matched {
                bail!("Pooled secret does not match the dealer's secret");
            }
        }
        Commands::Params => match cli.curve {
            CurveName::K256 => show_params::<Secp256k1>(cli.curve),
            CurveName::P256 => show_params::<NistP256>(cli.curve),
        },
    }

    Ok(())
}

fn dispatch<R: RandomSource>(
    curve: CurveName,
    config: &SharingConfig,
    pool_with: Option<&[u64]>,
    rng: &mut R,
) -> Result<bool> {
    match curve {
        CurveName::K256 => run_session::<Secp256k1, R>(config, pool_with, rng),
        CurveName::P256 => run_session::<NistP256, R>(config, pool_with, rng),
    }
}

fn run_session<C: CurveArithmetic, R: RandomSource>(
    config: &SharingConfig,
    pool_with: Option<&[u64]>,
    rng: &mut R,
) -> Result<bool> {
    info!(
        n_participants = config.n_participants,
        threshold = config.threshold,
        "Starting session"
    );

    let parties: Vec<KeyPair<C>> = (0..config.n_participants)
        .map(|_| KeyPair::generate(&mut *rng))
        .collect();
    let publics: Vec<Point<C>> = parties.iter().map(|kp| *kp.public()).collect();

    let (dealer_secret, shares) = pvss::escrow(config.threshold, &publics, rng)?;

    let selected: Vec<usize> = match pool_with {
        Some(sids) => sids
            .iter()
            .map(|sid| {
                shares
                    .iter()
                    .position(|share| share.sid == *sid)
                    .with_context(|| format!("No share with identifier {}", sid))
            })
            .collect::<Result<_>>()?,
        None => (0..config.threshold).collect(),
    };

    let decrypted = selected
        .iter()
        .map(|&i| pvss::decrypt_share(&shares[i], parties[i].secret()))
        .collect::<pvss_core::Result<Vec<_>>>()?;

    let pooled = pvss::pool(&decrypted, config.threshold)?;
    let matched = pooled == dealer_secret;

    if matched {
        info!(shares = decrypted.len(), "Secret reconstructed");
    } else {
        warn!(shares = decrypted.len(), "Reconstructed secret differs from dealer's");
    }

    println!("Dealer secret: {}", hex::encode(dealer_secret.as_bytes()));
    println!("Pooled secret: {}", hex::encode(pooled.as_bytes()));
    println!(
        "Pooled from:   {:?}",
        decrypted.iter().map(|d| d.sid).collect::<Vec<_>>()
    );
    println!("Match:         {}", matched);

    Ok(matched)
}

fn show_params<C: CurveArithmetic>(curve: CurveName) {
    println!("Curve Parameters:");
    println!("  Curve: {:?}", curve);
    println!("  Order: {}", hex::encode(Scalar::<C>::modulus_bytes()));
    println!("  Scalar width: {} bytes", Scalar::<C>::width());
    println!(
        "  Generator x: {}",
        hex::encode(Point::<C>::generator().to_secret_material().as_bytes())
    );
}

fn load_config(path: &Path) -> Result<SharingConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: SharingConfig = serde_json::from_str(&json)?;
    config.validate()?;
    Ok(config)
}

fn parse_share_ids(list: &str) -> Result<Vec<u64>> {
    let ids = list
        .split(',')
        .map(|s| s.trim().parse())
        .collect::<std::result::Result<Vec<u64>, _>>()?;
    Ok(ids)
}
