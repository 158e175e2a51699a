use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Procedural star field generator
#[derive(Debug, Parser)]
#[command(name = "starfield", version, about)]
pub struct Args {
    /// TOML file with generation settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the random number generator
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Generate a world and print the generation report
    Generate,
    /// Inspect the sector under a point
    Sector {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Pick a random star, optionally near another one
    Random {
        /// Name of the star to search around
        #[arg(long, requires = "within")]
        near: Option<String>,
        /// Maximum distance from the `near` star, in world units
        #[arg(long, requires = "near")]
        within: Option<f64>,
    },
    /// Plan a multi-hop route between two named stars
    Route {
        from: String,
        to: String,
        /// Maximum length of a single hop, in world units
        #[arg(short, long)]
        range: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_options_and_subcommand() {
        let args = Args::parse_from(["starfield", "--seed", "7", "sector", "150", "250.5"]);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.config, None);
        assert_eq!(args.command, Some(Command::Sector { x: 150.0, y: 250.5 }));
    }

    #[test]
    fn command_is_optional() {
        let args = Args::parse_from(["starfield", "-c", "galaxy.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("galaxy.toml")));
        assert_eq!(args.command, None);
    }

    #[test]
    fn route_requires_range() {
        assert!(Args::try_parse_from(["starfield", "route", "A1-0", "B2-0"]).is_err());
        let args =
            Args::try_parse_from(["starfield", "route", "A1-0", "B2-0", "--range", "300"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Route {
                from: "A1-0".to_string(),
                to: "B2-0".to_string(),
                range: 300.0,
            })
        );
    }

    #[test]
    fn near_and_within_go_together() {
        assert!(Args::try_parse_from(["starfield", "random", "--near", "A1-0"]).is_err());
        assert!(Args::try_parse_from(["starfield", "random", "--within", "50"]).is_err());
        assert!(Args::try_parse_from(["starfield", "random"]).is_ok());
    }
}
