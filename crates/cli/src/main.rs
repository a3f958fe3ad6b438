use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use donation_core::CompatibilityService;
use donation_types::BloodType;

#[derive(Parser, Debug)]
#[command(name = "blood-compat", version)]
#[command(about = "Check whether a donor's blood type can be given to a recipient")]
struct Cli {
    /// Donor blood type, e.g. O-
    #[arg(allow_hyphen_values = true)]
    donor_type: String,
    /// Recipient blood type, e.g. AB+
    #[arg(allow_hyphen_values = true)]
    recipient_type: String,
    /// Reject anything that is not one of the eight ABO/Rh blood types
    #[arg(long)]
    strict: bool,
}

/// Prints `true:<message>` or `false:<message>`.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    match run(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::from(1)
        }
    }
}

/// Usage errors exit with 1 rather than clap's default of 2. Help and version output is not
/// an error.
fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {}", err)
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    if cli.strict {
        BloodType::parse(&cli.donor_type)?;
        BloodType::parse(&cli.recipient_type)?;
    }

    let check = CompatibilityService::check(&cli.donor_type, &cli.recipient_type);
    Ok(format!("{}:{}", check.compatible, check.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("blood-compat").chain(args.iter().copied()))
    }

    #[test]
    fn test_compatible_pair_prints_true() {
        let cli = parse(&["O-", "AB+"]).unwrap();
        assert_eq!(
            run(&cli).unwrap(),
            "true:Donor (O-) can donate to recipient (AB+)."
        );
    }

    #[test]
    fn test_incompatible_pair_prints_false() {
        let cli = parse(&["AB+", "O-"]).unwrap();
        assert_eq!(
            run(&cli).unwrap(),
            "false:Donor (AB+) cannot donate to recipient (O-)."
        );
    }

    #[test]
    fn test_lowercase_input_is_quoted_as_given() {
        let cli = parse(&["a+", "ab+"]).unwrap();
        assert_eq!(
            run(&cli).unwrap(),
            "true:Donor (a+) can donate to recipient (ab+)."
        );
    }

    #[test]
    fn test_wrong_argument_count_is_a_usage_error() {
        let err = parse(&["O-"]).expect_err("recipient is required");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["O-", "A+", "B+"]).expect_err("too many arguments");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_usage_errors_exit_with_one() {
        for args in [&[][..], &["O-"][..], &["O-", "A+", "B+"][..]] {
            let err = parse(args).expect_err("wrong argument count");
            assert_eq!(usage_exit_code(&err), 1, "args {args:?}");
        }
    }

    #[test]
    fn test_help_and_version_exit_with_zero() {
        for flag in ["--help", "--version"] {
            let err = parse(&[flag]).expect_err("clap reports help and version as errors");
            assert_eq!(usage_exit_code(&err), 0, "{flag}");
        }
    }

    #[test]
    fn test_hyphenated_values_are_blood_types_not_flags() {
        let cli = parse(&["-x", "O-"]).unwrap();
        assert_eq!(
            run(&cli).unwrap(),
            "false:Donor (-x) cannot donate to recipient (O-)."
        );

        let cli = parse(&["A+", "-x"]).unwrap();
        assert_eq!(
            run(&cli).unwrap(),
            "false:Donor (A+) cannot donate to recipient (-x)."
        );
    }

    #[test]
    fn test_unknown_types_pass_without_strict() {
        let cli = parse(&["C+", "A+"]).unwrap();
        assert_eq!(
            run(&cli).unwrap(),
            "false:Donor (C+) cannot donate to recipient (A+)."
        );
    }

    #[test]
    fn test_strict_rejects_unknown_types() {
        let cli = parse(&["--strict", "O-", "C+"]).unwrap();
        let err = run(&cli).expect_err("C+ is not a blood type");
        assert_eq!(error_line(&err), "Error: unrecognised blood type 'C+'");

        let cli = parse(&["--strict", "b-", "AB-"]).unwrap();
        assert_eq!(
            run(&cli).unwrap(),
            "true:Donor (b-) can donate to recipient (AB-)."
        );
    }
}
