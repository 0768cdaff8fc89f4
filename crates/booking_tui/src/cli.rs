use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "booking", version, about = "Book an appointment from the terminal")]
pub struct Cli {
    /// Config file to load on top of the platform config directory
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Tick rate, i.e. number of ticks per second
    #[arg(
        short,
        long,
        global = true,
        value_name = "FLOAT",
        default_value_t = 4.0,
        value_parser = positive_rate
    )]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(
        short,
        long,
        global = true,
        value_name = "FLOAT",
        default_value_t = 30.0,
        value_parser = positive_rate
    )]
    pub frame_rate: f64,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Cmd {
    /// Run the interactive booking form
    #[default]
    Run,
    /// Print the clinic and its services, then exit
    Services,
}

/// Rates become tick and frame periods, so they must be finite and above zero.
fn positive_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("expected a positive number, got {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["booking"]).unwrap();
        assert_eq!(cli.cmd.unwrap_or_default(), Cmd::Run);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli =
            Cli::try_parse_from(["booking", "services", "--config", "spa.toml", "-t", "2"]).unwrap();
        assert_eq!(cli.cmd, Some(Cmd::Services));
        assert_eq!(cli.config, Some(PathBuf::from("spa.toml")));
        assert_eq!(cli.tick_rate, 2.0);
    }

    #[test]
    fn rates_must_be_positive_and_finite() {
        for bad in ["0", "-1", "0.0", "inf", "NaN", "fast"] {
            assert!(Cli::try_parse_from(["booking", "-t", bad]).is_err(), "-t {bad}");
            assert!(Cli::try_parse_from(["booking", "-f", bad]).is_err(), "-f {bad}");
        }
        assert!(Cli::try_parse_from(["booking", "-f=0"]).is_err());
        assert!(Cli::try_parse_from(["booking", "--tick-rate", "0"]).is_err());
    }

    #[test]
    fn fractional_rates_are_accepted() {
        let cli = Cli::try_parse_from(["booking", "-t", "0.5", "-f", "60"]).unwrap();
        assert_eq!(cli.tick_rate, 0.5);
        assert_eq!(cli.frame_rate, 60.0);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["booking", "cancel"]).is_err());
    }
}
