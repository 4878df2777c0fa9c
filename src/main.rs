//! Photograph Entropy Signing CLI
//!
//! Command-line front end for generating a photograph-seeded key pair
//! and for signing and verifying files with detached signatures.

use clap::{Args, Parser, Subcommand};
use photo_entropy_sign::{
    analysis::StatisticalTests,
    config::FileConfig,
    extraction::Extractor,
    keys::{generate_from_source, load_private_key, KeyStore},
    seeding::SeedMode,
    signing::{sign_file, verify_file},
    source::{EnumerationOrder, ImageCorpus, SourceConfig},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Bits analyzed by default, matching the offline analysis workflow.
const DEFAULT_ANALYZE_BITS: usize = 100_000;

#[derive(Parser)]
#[command(name = "photo-entropy-sign", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate and save an RSA key pair seeded from photographs.
    Keygen {
        #[command(flatten)]
        source: SourceArgs,
        /// Reproduce keys from the photographs alone (testing only).
        #[arg(long)]
        deterministic: bool,
        /// Replace an existing key pair.
        #[arg(long)]
        force: bool,
    },
    /// Sign a file, writing a detached .sig next to it.
    Sign {
        file: PathBuf,
        /// Private key PEM (defaults to the configured path).
        #[arg(long)]
        private_key: Option<PathBuf>,
    },
    /// Verify a file against a detached signature.
    Verify {
        file: PathBuf,
        #[arg(long)]
        public_key: PathBuf,
        #[arg(long)]
        signature: PathBuf,
    },
    /// Report statistics for bits extracted from the photographs.
    ///
    /// Samples 100000 bits unless --bits is given. The configured
    /// `num_needed` sizes key generation only.
    Analyze {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Photograph directory.
    #[arg(long)]
    source: Option<PathBuf>,
    /// Number of bits to extract.
    #[arg(long)]
    bits: Option<usize>,
    /// Visit images sorted by file name.
    #[arg(long)]
    by_name: bool,
}

impl SourceArgs {
    fn apply(&self, config: &mut SourceConfig) {
        if let Some(dir) = &self.source {
            config.directory = dir.clone();
        }
        if let Some(bits) = self.bits {
            config.num_needed = bits;
        }
        if self.by_name {
            config.order = EnumerationOrder::ByName;
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::from(2);
            }
        },
        None => FileConfig::default(),
    };

    match cli.command {
        Command::Keygen {
            source,
            deterministic,
            force,
        } => keygen(config, &source, deterministic, force),
        Command::Sign { file, private_key } => sign(config, file, private_key),
        Command::Verify {
            file,
            public_key,
            signature,
        } => verify(file, public_key, signature),
        Command::Analyze { source } => analyze(config, &source),
    }
}

fn keygen(
    mut config: FileConfig,
    args: &SourceArgs,
    deterministic: bool,
    force: bool,
) -> ExitCode {
    args.apply(&mut config.source);
    let store = KeyStore::from_config(&config.keys);
    let mode = if deterministic {
        warn!("Deterministic mode: keys depend only on the photographs");
        SeedMode::Deterministic
    } else {
        SeedMode::Supplemented
    };

    info!("Photograph Entropy Signer v{}", photo_entropy_sign::VERSION);

    let generate = || {
        let corpus = ImageCorpus::open(&config.source.directory, config.source.order);
        generate_from_source(&corpus, &config.source, &config.analysis, mode)
    };

    let result = if force {
        generate().and_then(|pair| store.save(&pair))
    } else {
        store.load_or_generate(generate).map(|_| ())
    };

    match result {
        Ok(()) => {
            println!("private key: {}", store.private_path().display());
            println!("public key:  {}", store.public_path().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Key generation failed: {}", e);
            ExitCode::from(2)
        }
    }
}

fn sign(config: FileConfig, file: PathBuf, private_key: Option<PathBuf>) -> ExitCode {
    let key_path = private_key.unwrap_or(config.keys.private_key);

    let result = load_private_key(&key_path).and_then(|key| sign_file(&file, &key));

    match result {
        Ok(sig_path) => {
            println!(
                "File signed successfully. Signature saved as {}.",
                sig_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Signing failed: {}", e);
            ExitCode::from(2)
        }
    }
}

fn verify(file: PathBuf, public_key: PathBuf, signature: PathBuf) -> ExitCode {
    match verify_file(&file, &public_key, &signature) {
        Ok(true) => {
            println!("The file is valid.");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("The file is not valid.");
            ExitCode::from(1)
        }
        Err(e) => {
            error!("Verification could not be performed: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Source settings for `analyze`: the configured directory, order and
/// pixel window, with the analysis sample size in place of `num_needed`.
fn analysis_source(config: &SourceConfig, args: &SourceArgs) -> SourceConfig {
    let mut source = SourceConfig {
        num_needed: DEFAULT_ANALYZE_BITS,
        ..config.clone()
    };
    args.apply(&mut source);
    source
}

fn analyze(config: FileConfig, args: &SourceArgs) -> ExitCode {
    let source = analysis_source(&config.source, args);

    if let Err(e) = source.validate() {
        error!("Invalid source configuration: {}", e);
        return ExitCode::from(2);
    }

    let corpus = ImageCorpus::open(&source.directory, source.order);
    let batch = Extractor::from_config(&source).extract(&corpus, source.num_needed);
    let stats = StatisticalTests::analyze(&batch);

    println!("images used:      {}", batch.source_images());
    println!("bits extracted:   {} / {}", stats.bit_count, source.num_needed);
    println!("bit bias:         {:+.4}", stats.bit_bias);
    println!(
        "byte entropy:     {:.4} bits/byte over {} bytes",
        stats.shannon_entropy, stats.byte_count
    );
    println!("autocorrelation:  {:+.4}", stats.autocorrelation);

    match config.analysis.check(&stats) {
        Ok(()) => println!("quality:          ok"),
        Err(violation) => println!("quality:          {}", violation),
    }

    ExitCode::SUCCESS
}
