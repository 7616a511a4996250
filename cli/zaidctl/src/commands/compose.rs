//! Compose command.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use tracing::warn;
use zaid_id::{compose, CitizenshipStatus, Decoder, Gender, IdComponents};

use crate::error::CliError;
use crate::output::{print_single, print_success, print_table, FieldRow, OutputFormat};

use super::CommandContext;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderArg {
    Female,
    Male,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Female => Gender::Female,
            GenderArg::Male => Gender::Male,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CitizenshipArg {
    Citizen,
    PermanentResident,
}

impl From<CitizenshipArg> for CitizenshipStatus {
    fn from(arg: CitizenshipArg) -> Self {
        match arg {
            CitizenshipArg::Citizen => CitizenshipStatus::Citizen,
            CitizenshipArg::PermanentResident => CitizenshipStatus::PermanentResident,
        }
    }
}

/// Compose command - build an ID number with a correct check digit.
#[derive(Debug, Args)]
pub struct ComposeCommand {
    /// Date of birth (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    dob: NaiveDate,

    #[arg(long, value_enum)]
    gender: GenderArg,

    #[arg(long, value_enum, default_value = "citizen")]
    citizenship: CitizenshipArg,

    /// Gender sequence (0-4999 female, 5000-9999 male). Defaults to the
    /// first sequence of the gender's band.
    #[arg(long)]
    sequence: Option<u16>,

    /// Legacy indicator digit.
    #[arg(long, default_value_t = 8)]
    legacy: u8,
}

impl ComposeCommand {
    fn components(&self) -> Result<IdComponents, CliError> {
        let gender = Gender::from(self.gender);
        let mut components = IdComponents::new(self.dob, gender, self.citizenship.into())
            .with_legacy_digit(self.legacy);

        if let Some(sequence) = self.sequence {
            components = components.with_sequence(sequence);
            if sequence <= 9999 && components.gender() != gender {
                return Err(CliError::SequenceGenderMismatch { sequence, gender });
            }
        }

        Ok(components)
    }

    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let components = self.components()?;
        let id_number = compose(&components).map_err(CliError::from)?;

        if let Err(reason) = Decoder::new().validate(id_number.as_str()) {
            warn!(
                id_number = %id_number,
                reason = reason.code(),
                "Composed ID number does not decode with the default settings"
            );
        }

        match ctx.format {
            OutputFormat::Json => {
                let out = serde_json::json!({
                    "id_number": id_number,
                    "date_of_birth": components.date_of_birth,
                    "gender": components.gender(),
                    "citizenship_status": components.citizenship,
                });
                print_single(&out);
            }
            OutputFormat::Table => {
                print_success(&id_number);
                print_table(&[
                    FieldRow::new("Date of birth", components.date_of_birth),
                    FieldRow::new("Sequence", format!("{:04}", components.sequence)),
                    FieldRow::new("Gender", components.gender()),
                    FieldRow::new("Citizenship", components.citizenship),
                ]);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use zaid_id::ComposeError;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        cmd: ComposeCommand,
    }

    fn parse(args: &[&str]) -> ComposeCommand {
        let mut argv = vec!["compose"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().cmd
    }

    #[test]
    fn defaults_to_first_sequence_of_band() {
        let cmd = parse(&["--dob", "1980-01-01", "--gender", "male"]);
        let components = cmd.components().unwrap();
        assert_eq!(components.sequence, 5000);
        assert_eq!(components.citizenship, CitizenshipStatus::Citizen);
        assert_eq!(components.legacy_digit, 8);
    }

    #[test]
    fn explicit_sequence_and_citizenship() {
        let cmd = parse(&[
            "--dob",
            "1975-04-30",
            "--gender",
            "female",
            "--citizenship",
            "permanent-resident",
            "--sequence",
            "4999",
        ]);
        let components = cmd.components().unwrap();
        assert_eq!(compose(&components).unwrap(), "7504304999185");
    }

    #[test]
    fn sequence_must_match_gender() {
        let cmd = parse(&["--dob", "1980-01-01", "--gender", "female", "--sequence", "5009"]);
        assert!(matches!(
            cmd.components(),
            Err(CliError::SequenceGenderMismatch { sequence: 5009, .. })
        ));
    }

    #[test]
    fn out_of_range_sequence_is_a_compose_error() {
        let cmd = parse(&["--dob", "1980-01-01", "--gender", "male", "--sequence", "12000"]);
        let components = cmd.components().unwrap();
        assert_eq!(
            compose(&components),
            Err(ComposeError::SequenceOutOfRange(12000))
        );
    }
}
