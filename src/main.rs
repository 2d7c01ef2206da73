//! Zeta Node
//!
//! Resolves the network from the command line, verifies the parameter table
//! and prints what the rest of the node would run with.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zeta_core::chainparams::{init_registry, select_params_from_flags, ChainSummary};
use zeta_core::checkpoints;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use the test network
    #[arg(long)]
    testnet: bool,
    /// Use the regression test network
    #[arg(long)]
    regtest: bool,
    /// Disable checkpoint enforcement
    #[arg(long)]
    no_checkpoints: bool,
    /// Print the parameter summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Selection must precede everything that reads chain parameters.
    init_registry().context("chain parameter table failed verification")?;
    let chain = select_params_from_flags(cli.testnet, cli.regtest)?;
    if cli.no_checkpoints {
        checkpoints::set_enabled(false);
    }

    let summary = ChainSummary::new(chain.params);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Network:        {}", summary.network);
    println!("Message start:  {}", summary.message_start);
    println!("Ports:          p2p {} / rpc {}", summary.default_port, summary.rpc_port);
    println!("PoW limit:      {}", summary.pow_limit_bits);
    println!("Halving every:  {} blocks", summary.subsidy_halving_interval);
    println!();
    println!("Genesis Block Information:");
    println!("  Hash:        {}", summary.genesis.hash);
    println!("  Merkle Root: {}", summary.genesis.merkle_root);
    println!("  Timestamp:   {}", summary.genesis.timestamp);
    println!("  Bits:        0x{:08x}", summary.genesis.bits);
    println!("  Nonce:       {}", summary.genesis.nonce);
    println!();
    println!("Seeds:");
    for seed in &summary.dns_seeds {
        println!("  dns    {}", seed.host);
    }
    for seed in &summary.fixed_seeds {
        println!("  fixed  {}", seed.addr);
    }
    println!();
    println!(
        "Checkpoints:    {} (estimated height >= {})",
        summary.checkpoints, summary.total_blocks_estimate
    );

    info!(
        network = %summary.network,
        require_rpc_password = summary.require_rpc_password,
        data_dir = summary.data_dir,
        "chain parameters ready"
    );

    Ok(())
}
