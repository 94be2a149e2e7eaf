use celestial_fundargs::angle::{try_days_to_hms, try_radians_to_dms, DmsFmt, Sexagesimal};
use celestial_fundargs::utils::jd_to_centuries;
use celestial_fundargs::FundamentalArgument;
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "fundarg")]
#[command(about = "Evaluate IERS 2003 fundamental arguments and decompose angles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate fundamental arguments at an epoch
    #[command(group(ArgGroup::new("epoch").required(true).args(["t", "jd"])))]
    Args {
        /// TDB Julian centuries from J2000.0
        #[arg(long, allow_hyphen_values = true)]
        t: Option<f64>,
        /// TDB Julian Date, or its first part when --jd2 is given
        #[arg(long)]
        jd: Option<f64>,
        /// Second part of a two-part Julian Date, added to --jd
        #[arg(long, requires = "jd", default_value = "0.0", allow_hyphen_values = true)]
        jd2: f64,
        /// Argument name or symbol (repeatable; default all)
        #[arg(long = "arg")]
        args: Vec<String>,
        /// Decimal places on the arcseconds
        #[arg(long, default_value = "4")]
        ndp: u8,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Decompose an interval in days into hours, minutes, seconds, fraction
    Hms {
        #[arg(allow_hyphen_values = true)]
        days: f64,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        ndp: i32,
    },
    /// Decompose an angle in radians into degrees, arcminutes, arcseconds, fraction
    Dms {
        #[arg(allow_hyphen_values = true)]
        radians: f64,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        ndp: i32,
    },
}

#[derive(serde::Serialize)]
struct JsonArgument {
    name: &'static str,
    symbol: &'static str,
    radians: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Args {
            t,
            jd,
            jd2,
            args,
            ndp,
            format,
        } => {
            let t = epoch_centuries(t, jd, jd2)?;
            let selected = select_arguments(&args)?;
            log::debug!("evaluating {} arguments at t={t}", selected.len());

            match format {
                OutputFormat::Table => print_table(&selected, t, ndp),
                OutputFormat::Json => print_json(&selected, t)?,
            }
        }
        Commands::Hms { days, ndp } => {
            let s = try_days_to_hms(ndp, days)?;
            print_fields(&s, ["h", "m", "s", "frac"]);
        }
        Commands::Dms { radians, ndp } => {
            let s = try_radians_to_dms(ndp, radians)?;
            print_fields(&s, ["deg", "arcmin", "arcsec", "frac"]);
        }
    }

    Ok(())
}

fn epoch_centuries(t: Option<f64>, jd: Option<f64>, jd2: f64) -> anyhow::Result<f64> {
    match (t, jd) {
        (Some(t), _) => Ok(t),
        (None, Some(jd)) => Ok(jd_to_centuries(jd, jd2)),
        (None, None) => anyhow::bail!("one of --t or --jd is required"),
    }
}

fn select_arguments(names: &[String]) -> anyhow::Result<Vec<FundamentalArgument>> {
    if names.is_empty() {
        return Ok(FundamentalArgument::ALL.to_vec());
    }
    names
        .iter()
        .map(|n| {
            n.parse::<FundamentalArgument>()
                .map_err(|e| anyhow::anyhow!("Cannot parse argument '{}': {}", n, e))
        })
        .collect()
}

fn print_table(args: &[FundamentalArgument], t: f64, ndp: u8) {
    let dms = DmsFmt { frac_digits: ndp };
    println!("t = {t} Julian centuries (TDB) from J2000.0");
    for arg in args {
        let value = arg.evaluate(t);
        println!(
            "{:>5} {:<26} {:>22.15} rad  {}",
            arg.symbol(),
            arg.name(),
            value,
            dms.fmt(value)
        );
    }
}

fn print_json(args: &[FundamentalArgument], t: f64) -> anyhow::Result<()> {
    let values: Vec<JsonArgument> = args
        .iter()
        .map(|a| JsonArgument {
            name: a.name(),
            symbol: a.symbol(),
            radians: a.evaluate(t),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}

fn print_fields(s: &Sexagesimal, labels: [&str; 4]) {
    println!("{s}");
    println!("sign={}", s.sign);
    for (label, value) in labels.iter().zip(s.fields()) {
        println!("{label}={value}");
    }
}
