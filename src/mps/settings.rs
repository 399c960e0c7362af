use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field {0}")]
    BadFieldValue(&'static str),
}

/// Compression applied to an MPS file.
///
/// No compression codec is built in.  Requesting one writes plain text to
/// the same path and logs a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Compression {
    #[default]
    Plain,
    Gzip,
    Bzip2,
}

/// Number format for values in an MPS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MpsFormat {
    /// 12 significant digits
    #[default]
    Normal,
    /// 17 significant digits, enough to round trip any f64
    ExtraPrecision,
    /// the 16 hex digits of the IEEE 754 bit pattern
    IeeeHex,
}

/// Settings for MPS output

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MpsSettings {
    ///compression of the output file
    #[builder(default = "Compression::Plain")]
    pub compression: Compression,

    ///number format
    #[builder(default = "MpsFormat::Normal")]
    pub format: MpsFormat,

    ///number of (name, value) pairs per line in COLUMNS, RHS and RANGES (1 or 2)
    #[builder(default = "2")]
    pub number_across: u32,

    ///problem name written on the NAME line
    #[builder(default = r#""BLANK".to_string()"#)]
    pub problem_name: String,

    ///name of the objective row
    #[builder(default = r#""OBJROW".to_string()"#)]
    pub objective_name: String,
}

impl Default for MpsSettings {
    fn default() -> MpsSettings {
        MpsSettingsBuilder::default().build().unwrap()
    }
}

impl MpsSettings {
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_number_across(self.number_across)?;
        validate_name(&self.problem_name, "problem_name")?;
        validate_name(&self.objective_name, "objective_name")?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for MpsSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        MpsSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl MpsSettingsBuilder {
    /// check that any fields given so far are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(number_across) = self.number_across {
            validate_number_across(number_across)?;
        }
        if let Some(ref problem_name) = self.problem_name {
            validate_name(problem_name, "problem_name")?;
        }
        if let Some(ref objective_name) = self.objective_name {
            validate_name(objective_name, "objective_name")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_number_across(number_across: u32) -> Result<(), SettingsError> {
    match number_across {
        1 | 2 => Ok(()),
        _ => Err(SettingsError::BadFieldValue("number_across")),
    }
}

// MPS fields are whitespace delimited
fn validate_name(name: &str, field: &'static str) -> Result<(), SettingsError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        Err(SettingsError::BadFieldValue(field))
    } else {
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    let settings = MpsSettings::default();
    assert_eq!(settings.number_across, 2);
    assert_eq!(settings.problem_name, "BLANK");
    assert!(settings.validate().is_ok());

    // number_across must be 1 or 2
    let built = MpsSettingsBuilder::default().number_across(3).build();
    assert!(matches!(
        built,
        Err(MpsSettingsBuilderError::ValidationError(_))
    ));

    let built = MpsSettingsBuilder::default()
        .objective_name("cost row".to_string())
        .build();
    assert!(built.is_err());

    // fields set directly are caught by validate
    let settings = MpsSettings {
        number_across: 0,
        ..MpsSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("number_across"))
    );
}
