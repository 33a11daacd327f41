//! stayquote CLI: quote stays from the command line.
//!
//! Emits the quote as pretty JSON with amounts rounded for presentation.
//! `--now` pins the reference time so interpretations are reproducible.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use stayquote::{
    BedType, ExtraHours, HourlyTier, PaymentMethod, PricingEngine, QueryInterpreter, RateTable,
    StayRequest,
};

#[derive(Parser)]
#[command(name = "stayquote", version, about = "Quote a lodging stay from a form or a transcript")]
struct Cli {
    /// YAML rate-table override; compiled-in reference rates otherwise.
    #[arg(long, env = "STAYQUOTE_RATES")]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interpret a spoken transcript into a quote.
    Interpret {
        transcript: String,

        /// Reference time, e.g. "2026-08-05T10:00:00". Defaults to now.
        #[arg(long)]
        now: Option<NaiveDateTime>,
    },

    /// Price the fixed 4-hour short-stay block.
    ShortStay {
        #[arg(long)]
        jacuzzi: bool,

        #[arg(long, default_value_t = 0)]
        extra_hours: u32,

        #[arg(long, value_enum, default_value = "standard")]
        tier: TierArg,

        #[arg(long, value_enum)]
        payment: PaymentArg,
    },

    /// Price an explicit date range.
    MultiNight {
        /// Check-in date, e.g. "2026-08-07".
        #[arg(long)]
        check_in: NaiveDate,

        #[arg(long, default_value_t = 1)]
        nights: u32,

        #[arg(long, value_enum, default_value = "queen")]
        bed: BedArg,

        #[arg(long)]
        jacuzzi: bool,

        #[arg(long)]
        smoking: bool,

        /// Early check-in offset in hours (non-positive; clamped to -6).
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        early: i64,

        /// Late check-out hours past the standard check-out.
        #[arg(long, default_value_t = 0)]
        late: i64,

        #[arg(long, value_enum, default_value = "standard")]
        tier: TierArg,

        #[arg(long, value_enum)]
        payment: PaymentArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BedArg {
    Queen,
    King,
    TwoBeds,
}

impl From<BedArg> for BedType {
    fn from(arg: BedArg) -> Self {
        match arg {
            BedArg::Queen => BedType::Queen,
            BedArg::King => BedType::King,
            BedArg::TwoBeds => BedType::QueenTwoBeds,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TierArg {
    Standard,
    Premium,
}

impl From<TierArg> for HourlyTier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Standard => HourlyTier::Standard,
            TierArg::Premium => HourlyTier::Premium,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PaymentArg {
    Cash,
    Card,
}

impl From<PaymentArg> for PaymentMethod {
    fn from(arg: PaymentArg) -> Self {
        match arg {
            PaymentArg::Cash => PaymentMethod::Cash,
            PaymentArg::Card => PaymentMethod::Card,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let rates = match &cli.rates {
        Some(path) => RateTable::load(path)
            .with_context(|| format!("loading rate table from {}", path.display()))?,
        None => RateTable::default(),
    };
    let engine = PricingEngine::new(rates);

    let quote = match cli.command {
        Command::Interpret { transcript, now } => {
            let now = now.unwrap_or_else(|| Local::now().naive_local());
            QueryInterpreter::with_engine(engine)
                .interpret(&transcript, now)
                .context("transcript could not be interpreted")?
        }
        Command::ShortStay {
            jacuzzi,
            extra_hours,
            tier,
            payment,
        } => engine.quote_short_stay(jacuzzi, extra_hours, tier.into(), payment.into()),
        Command::MultiNight {
            check_in,
            nights,
            bed,
            jacuzzi,
            smoking,
            early,
            late,
            tier,
            payment,
        } => {
            let request = StayRequest::from_nights(check_in, nights, bed.into(), jacuzzi, smoking);
            engine.quote_multi_night(
                &request,
                ExtraHours::clamped(early, late),
                tier.into(),
                payment.into(),
            )
        }
    };

    println!("{}", serde_json::to_string_pretty(&quote.rounded())?);
    Ok(())
}
