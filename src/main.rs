use anyhow::Result;
use atelier::core::log::init_logging;
use atelier::core::payment::PaymentForm;
use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display financial summaries for all projects
    Summary,
    /// Display task completion progress for all projects
    Progress,
    /// Display fee totals for all proposals
    Proposals,
    /// Validate client payment details
    Payment(PaymentArgs),
}

#[derive(Args)]
struct PaymentArgs {
    /// Payment method: credit, debit, paypal, zelle or bitcoin
    #[arg(long)]
    method: Option<String>,

    #[arg(long)]
    card_number: Option<String>,

    /// Card expiry as MM/YY
    #[arg(long)]
    expiry: Option<String>,

    #[arg(long)]
    cvv: Option<String>,

    #[arg(long)]
    paypal_email: Option<String>,

    /// Zelle phone as (NNN) NNN-NNNN
    #[arg(long)]
    zelle_phone: Option<String>,

    #[arg(long)]
    bitcoin_address: Option<String>,

    #[arg(long)]
    amount: Option<f64>,
}

impl From<PaymentArgs> for PaymentForm {
    fn from(args: PaymentArgs) -> PaymentForm {
        PaymentForm {
            payment_method: args.method,
            card_number: args.card_number,
            expiry_date: args.expiry,
            cvv: args.cvv,
            paypal_email: args.paypal_email,
            zelle_phone: args.zelle_phone,
            bitcoin_address: args.bitcoin_address,
            amount: args.amount,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => atelier::cli::setup::setup(),
        Some(Commands::Payment(args)) => atelier::cli::payment::run(&args.into()),
        Some(Commands::Summary) => {
            atelier::run_command(atelier::AppCommand::Summary, cli.config_path.as_deref())
        }
        Some(Commands::Progress) => {
            atelier::run_command(atelier::AppCommand::Progress, cli.config_path.as_deref())
        }
        Some(Commands::Proposals) => {
            atelier::run_command(atelier::AppCommand::Proposals, cli.config_path.as_deref())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
