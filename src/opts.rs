use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{format_err, Context, Error};
use calc::{Field, RawInput, Thresholds, DEFAULT_CURRENCY};
use serde::Deserialize;
use structopt::StructOpt;

use crate::theme::Theme;

pub fn resolve_opts() -> Opts {
    let opts = get_cli_opts();

    match get_config_opts() {
        Ok(Some(config_opts)) => merge_opts(opts, config_opts),
        Ok(None) => opts,
        Err(e) => {
            eprintln!("Ignoring config file: {:#}", e);
            opts
        }
    }
}

fn get_cli_opts() -> Opts {
    Opts::from_args()
}

fn get_config_opts() -> Result<Option<Opts>, Error> {
    let config_dir = dirs_next::config_dir()
        .ok_or_else(|| format_err!("Could not get config directory"))?
        .join("tartan");

    let config_path = config_dir.join("config.yml");

    let config = match fs::read_to_string(&config_path) {
        Ok(config) => config,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", config_path.display()))
        }
    };

    let opts = serde_yaml::from_str(&config)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    Ok(Some(opts))
}

/// Command line values win, the config file fills in whatever was left unset.
fn merge_opts(mut opts: Opts, config_opts: Opts) -> Opts {
    // Options
    opts.price = opts.price.or(config_opts.price);
    opts.rent = opts.rent.or(config_opts.rent);
    opts.expenses = opts.expenses.or(config_opts.expenses);
    opts.deposit = opts.deposit.or(config_opts.deposit);
    opts.currency = opts.currency.or(config_opts.currency);
    opts.yield_threshold = opts.yield_threshold.or(config_opts.yield_threshold);
    opts.roi_threshold = opts.roi_threshold.or(config_opts.roi_threshold);
    opts.log_file = opts.log_file.or(config_opts.log_file);
    opts.log_level = opts.log_level.or(config_opts.log_level);

    // Flags
    opts.hide_help = opts.hide_help || config_opts.hide_help;
    opts.json = opts.json || config_opts.json;
    opts.summary = opts.summary || config_opts.summary;

    // Config only
    opts.theme = config_opts.theme;

    opts
}

#[derive(Debug, StructOpt, Clone, Deserialize, Default)]
#[structopt(
    name = "tartan",
    about = "Buy-to-let ROI calculator in your terminal",
    version = env!("CARGO_PKG_VERSION")
)]
#[serde(default)]
pub struct Opts {
    // Options
    //
    #[structopt(short, long, allow_hyphen_values = true)]
    /// Purchase price of the property, thousands separators allowed
    pub price: Option<String>,
    #[structopt(short, long, allow_hyphen_values = true)]
    /// Expected monthly rental income
    pub rent: Option<String>,
    #[structopt(short, long, allow_hyphen_values = true)]
    /// Annual operating costs, excluding mortgage payments [default: 0]
    pub expenses: Option<String>,
    #[structopt(short, long, allow_hyphen_values = true)]
    /// Deposit as a percentage of the purchase price [default: 25]
    pub deposit: Option<String>,
    #[structopt(short, long)]
    /// Currency symbol shown before amounts [default: £]
    pub currency: Option<String>,
    #[structopt(long)]
    /// Rental yield (%) at or above which the yield is highlighted [default: 6]
    pub yield_threshold: Option<f64>,
    #[structopt(long)]
    /// Cash-on-cash ROI (%) at or above which the ROI is highlighted [default: 15]
    pub roi_threshold: Option<f64>,
    #[structopt(long, parse(from_os_str))]
    /// Write logs to this file
    pub log_file: Option<PathBuf>,
    #[structopt(long)]
    /// Log level filter, overridden by RUST_LOG [default: info]
    pub log_level: Option<String>,

    // Flags
    //
    #[structopt(short, long)]
    /// Print the results and exit instead of opening the calculator
    pub summary: bool,
    #[structopt(long)]
    /// Print the summary as JSON
    pub json: bool,
    #[structopt(long)]
    /// Hide help icon in top right
    pub hide_help: bool,

    #[structopt(skip)]
    pub theme: Option<Theme>,
}

impl Opts {
    /// Form values given up front, unset fields stay empty
    pub fn raw_input(&self) -> RawInput {
        let mut raw = RawInput::default();

        let values = [&self.price, &self.rent, &self.expenses, &self.deposit];
        for (field, value) in Field::ALL.iter().zip(values.iter()) {
            if let Some(value) = value {
                raw.set(*field, value.as_str());
            }
        }

        raw
    }

    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();

        Thresholds {
            rental_yield: self.yield_threshold.unwrap_or(defaults.rental_yield),
            cash_on_cash_roi: self.roi_threshold.unwrap_or(defaults.cash_on_cash_roi),
        }
    }

    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args() {
        let opts = Opts::from_iter(&[
            "tartan",
            "--price",
            "200,000",
            "-r",
            "1200",
            "--expenses",
            "-500",
            "--summary",
            "--roi-threshold",
            "12.5",
        ]);

        assert_eq!(opts.price.as_deref(), Some("200,000"));
        assert_eq!(opts.rent.as_deref(), Some("1200"));
        assert_eq!(opts.expenses.as_deref(), Some("-500"));
        assert!(opts.summary);
        assert!(!opts.json);
        assert_eq!(opts.thresholds().cash_on_cash_roi, 12.5);
        assert_eq!(opts.thresholds().rental_yield, 6.0);
    }

    #[test]
    fn test_cli_wins_over_config() {
        let cli = Opts {
            price: Some("150000".into()),
            summary: false,
            ..Opts::default()
        };
        let config: Opts = serde_yaml::from_str(
            "price: '999'\nrent: '800'\ncurrency: '$'\nsummary: true\ntheme:\n  emphasis: '#00FF00'\n",
        )
        .unwrap();

        let opts = merge_opts(cli, config);

        assert_eq!(opts.price.as_deref(), Some("150000"));
        assert_eq!(opts.rent.as_deref(), Some("800"));
        assert_eq!(opts.currency(), "$");
        assert!(opts.summary);
        assert_eq!(
            opts.theme().emphasis(),
            tui::style::Color::Rgb(0, 255, 0)
        );
    }

    #[test]
    fn test_bad_theme_color_is_config_error() {
        let config: Result<Opts, _> =
            serde_yaml::from_str("currency: '$'\ntheme:\n  emphasis: 'é12345'\n");

        assert!(config.is_err());
    }

    #[test]
    fn test_defaults() {
        let opts = Opts::default();

        assert_eq!(opts.currency(), "£");
        assert_eq!(opts.log_level(), "info");
        assert_eq!(opts.thresholds(), Thresholds::default());
        assert_eq!(opts.raw_input(), RawInput::default());
        assert_eq!(opts.theme(), Theme::default());
    }

    #[test]
    fn test_raw_input_from_opts() {
        let opts = Opts {
            price: Some("200,000".into()),
            rent: Some("1,200".into()),
            deposit: Some("10".into()),
            ..Opts::default()
        };

        let raw = opts.raw_input();

        assert_eq!(raw.property_price, "200,000");
        assert_eq!(raw.monthly_rent, "1,200");
        assert_eq!(raw.annual_expenses, "");
        assert_eq!(raw.deposit_percent, "10");
    }
}
