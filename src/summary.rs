use std::io::{self, Write};

use anyhow::Result;
use calc::{OutputField, Report};
use tracing::{info, warn};

use crate::opts::Opts;

/// Evaluates the inputs given on the command line and prints the results.
pub fn run(opts: &Opts) -> Result<()> {
    let raw = opts.raw_input();

    let result = calc::evaluate(&raw).map_err(|e| {
        warn!(input = ?raw, "rejected input");
        e
    })?;

    info!(?result, "calculated");

    let report = Report::new(&result, &opts.thresholds(), opts.currency());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &report)?;
    }

    Ok(())
}

/// One `label: value` line per output field, emphasized values marked with `*`.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    for field in OutputField::ALL.iter() {
        let marker = if report.is_emphasized(*field) { " *" } else { "" };

        writeln!(
            out,
            "{: <20}{}{}",
            format!("{}:", field.label()),
            report.value(*field),
            marker
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use calc::{RoiResult, Thresholds};

    use super::*;

    #[test]
    fn test_write_report() {
        let result = RoiResult {
            rental_yield_percent: 6.0,
            cash_on_cash_roi_percent: -20.0,
            monthly_cash_flow: -166.666,
            deposit_amount: 10000.0,
        };
        let report = Report::new(&result, &Thresholds::default(), "£");

        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();

        let expected = "\
Rental Yield:       6.0% *
Cash-on-Cash ROI:   -20.0%
Monthly Cash Flow:  £-167
Initial Investment: £10,000
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_run_rejects_missing_rent() {
        let opts = Opts {
            price: Some("300000".into()),
            rent: Some("0".into()),
            summary: true,
            ..Opts::default()
        };

        let err = run(&opts).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Please enter valid property price and monthly rent values."
        );
        assert!(err.downcast_ref::<calc::InvalidInputError>().is_some());
    }
}
