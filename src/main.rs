// main.rs
//
// Thin driver: sample a strip, print its area and edge length, and
// optionally export it for viewing.
//
//     mobius [RADIUS] [WIDTH] [RESOLUTION] [--stl PATH]

use clap::Parser;
use mobius::float_types::Real;
use mobius::{MobiusStrip, StripParameters};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mobius")]
#[command(version, about = "Estimate the surface area and edge length of a Möbius strip")]
struct Cli {
    /// Distance from the centre to the middle of the strip
    #[arg(default_value_t = StripParameters::default().radius)]
    radius: Real,

    /// Strip width, measured across the band
    #[arg(default_value_t = StripParameters::default().width)]
    width: Real,

    /// Samples per parameter axis (at least 2)
    #[arg(default_value_t = StripParameters::default().resolution)]
    resolution: usize,

    /// Write the triangulated strip to this STL file
    #[arg(long, value_name = "PATH")]
    stl: Option<PathBuf>,
}

impl Cli {
    fn parameters(&self) -> StripParameters {
        StripParameters::new(self.radius, self.width, self.resolution)
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let params = cli.parameters();
    log::info!(
        "Möbius strip: R={} w={} n={}",
        params.radius,
        params.width,
        params.resolution
    );

    let strip = MobiusStrip::from_parameters(params)?;
    let m = strip.measure();
    println!("Surface Area: {}", m.surface_area);
    println!("Edge Length: {}", m.edge_length);

    if let Some(path) = &cli.stl {
        #[cfg(feature = "stl-io")]
        strip.write_stl(path)?;
        #[cfg(not(feature = "stl-io"))]
        log::warn!("ignoring --stl {}: built without `stl-io`", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_use_the_default_strip() {
        let cli = Cli::try_parse_from(["mobius"]).unwrap();
        assert_eq!(cli.parameters(), StripParameters::default());
        assert!(cli.stl.is_none());
    }

    #[test]
    fn positional_arguments_fill_in_order() {
        let cli = Cli::try_parse_from(["mobius", "2.5", "0.3"]).unwrap();
        assert_eq!(cli.parameters(), StripParameters::new(2.5, 0.3, 200));

        let cli = Cli::try_parse_from(["mobius", "2.5", "0.3", "64"]).unwrap();
        assert_eq!(cli.parameters(), StripParameters::new(2.5, 0.3, 64));
    }

    #[test]
    fn malformed_values_are_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["mobius", "1.0", "0.4", "-5"]).is_err());
        assert!(Cli::try_parse_from(["mobius", "1.0", "0.4", "2.5"]).is_err());

        let err = Cli::try_parse_from(["mobius", "one"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("RADIUS"));

        let err = Cli::try_parse_from(["mobius", "1", "0.4", "10", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn out_of_range_values_fail_validation_not_parsing() {
        let cli = Cli::try_parse_from(["mobius", "1.0", "0.4", "1"]).unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn stl_export_is_opt_in() {
        let cli = Cli::try_parse_from(["mobius", "--stl", "out/strip.stl"]).unwrap();
        assert_eq!(cli.stl, Some(PathBuf::from("out/strip.stl")));
        assert_eq!(cli.parameters(), StripParameters::default());

        let cli = Cli::try_parse_from(["mobius", "1.5", "--stl", "a.stl", "0.2"]).unwrap();
        assert_eq!(cli.parameters(), StripParameters::new(1.5, 0.2, 200));
    }
}
