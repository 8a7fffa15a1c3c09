//! Validation behind the registration and booking forms.
//!
//! Error messages are the ones shown next to the offending field.

use std::sync::LazyLock;

use regex::Regex;
use shared::{CreateUserRequest, TimeInterval, TimeIntervalsRequest};
use thiserror::Error;

static RE_USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_-]+$").expect("valid username regex"));
static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z ]+$").expect("valid name regex"));
// Leading and doubled dots are rejected in `is_valid_email`
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("valid email regex")
});

pub const MIN_TEXT_LENGTH: usize = 3;
/// Minimum length of an availability interval, in minutes
pub const MIN_INTERVAL_MINUTES: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Mínimo de 3 caracteres.")]
    TooShort,
    #[error("Use apenas letras minúsculas hifens e underlines.")]
    InvalidUsername,
    #[error("Não utilize números")]
    InvalidName,
    #[error("O nome precisa ter no mínimo 3 catacteres.")]
    NameTooShort,
    #[error("Digite um e-mail válido.")]
    InvalidEmail,
    #[error("Informe os 7 dias da semana (recebido {0}).")]
    WrongDayCount(usize),
    #[error("Dia da semana inválido: {0}.")]
    InvalidWeekDay(u32),
    #[error("Você precisa selecionar pelo menos um dia da semana.")]
    NoDaySelected,
    #[error("O intervalo de horário deve ser igual ou maior a 1h.")]
    IntervalTooShort,
    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("Horário inválido: \"{0}\".")]
    Malformed(String),
    #[error("Horário fora do intervalo: \"{0}\".")]
    OutOfRange(String),
}

/// Per-field errors of the register form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFormErrors {
    pub username: Option<ValidationError>,
    pub name: Option<ValidationError>,
}

/// Per-field errors of the booking confirmation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmFormErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

/// Validated booking confirmation data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmForm {
    pub name: String,
    pub email: String,
    pub observations: Option<String>,
}

/// Claimed username: at least 3 characters of `a-z`, `_` or `-`.
pub fn validate_username(username: &str) -> Result<String, ValidationError> {
    if username.chars().count() < MIN_TEXT_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if !RE_USERNAME.is_match(username) {
        return Err(ValidationError::InvalidUsername);
    }
    Ok(username.to_string())
}

/// Full name: at least 3 characters, letters and spaces only.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    if name.chars().count() < MIN_TEXT_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if !RE_NAME.is_match(name) {
        return Err(ValidationError::InvalidName);
    }
    Ok(name.to_string())
}

pub fn validate_register_form(
    username: &str,
    name: &str,
) -> Result<CreateUserRequest, RegisterFormErrors> {
    match (validate_username(username), validate_name(name)) {
        (Ok(username), Ok(name)) => Ok(CreateUserRequest { name, username }),
        (username, name) => Err(RegisterFormErrors {
            username: username.err(),
            name: name.err(),
        }),
    }
}

/// Address with a dotted domain whose last label has at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && RE_EMAIL.is_match(email)
}

pub fn validate_confirm_form(
    name: &str,
    email: &str,
    observations: &str,
) -> Result<ConfirmForm, ConfirmFormErrors> {
    let name_error =
        (name.chars().count() < MIN_TEXT_LENGTH).then_some(ValidationError::NameTooShort);
    let email_error = (!is_valid_email(email)).then_some(ValidationError::InvalidEmail);

    if name_error.is_some() || email_error.is_some() {
        return Err(ConfirmFormErrors {
            name: name_error,
            email: email_error,
        });
    }

    let observations = observations.trim();
    Ok(ConfirmForm {
        name: name.to_string(),
        email: email.to_string(),
        observations: (!observations.is_empty()).then(|| observations.to_string()),
    })
}

/// `"HH:MM"` to minutes since midnight
pub fn convert_time_string_to_minutes(time: &str) -> Result<u32, TimeParseError> {
    let malformed = || TimeParseError::Malformed(time.to_string());

    let (hours, minutes) = time.split_once(':').ok_or_else(malformed)?;
    let hours: u32 = hours.trim().parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| malformed())?;

    if hours > 23 || minutes > 59 {
        return Err(TimeParseError::OutOfRange(time.to_string()));
    }
    Ok(hours * 60 + minutes)
}

/// Minutes since midnight back to `"HH:MM"`
pub fn convert_minutes_to_time_string(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// One row of the availability form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeIntervalInput {
    /// 0 = Sunday .. 6 = Saturday
    pub week_day: u32,
    pub enabled: bool,
    pub start_time: String,
    pub end_time: String,
}

/// Form defaults: weekdays 08:00 to 18:00, weekends off
pub fn default_time_intervals() -> Vec<TimeIntervalInput> {
    (0..7)
        .map(|week_day| TimeIntervalInput {
            week_day,
            enabled: (1..=5).contains(&week_day),
            start_time: "08:00".to_string(),
            end_time: "18:00".to_string(),
        })
        .collect()
}

/// Keep the enabled days, convert them to minutes and check each lasts at
/// least an hour.
pub fn validate_time_intervals(
    inputs: &[TimeIntervalInput],
) -> Result<TimeIntervalsRequest, ValidationError> {
    if inputs.len() != 7 {
        return Err(ValidationError::WrongDayCount(inputs.len()));
    }
    if let Some(input) = inputs.iter().find(|input| input.week_day > 6) {
        return Err(ValidationError::InvalidWeekDay(input.week_day));
    }

    let enabled: Vec<&TimeIntervalInput> = inputs.iter().filter(|input| input.enabled).collect();
    if enabled.is_empty() {
        return Err(ValidationError::NoDaySelected);
    }

    let intervals = enabled
        .into_iter()
        .map(|input| -> Result<TimeInterval, TimeParseError> {
            Ok(TimeInterval {
                week_day: input.week_day,
                start_time_in_minutes: convert_time_string_to_minutes(&input.start_time)?,
                end_time_in_minutes: convert_time_string_to_minutes(&input.end_time)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let all_long_enough = intervals.iter().all(|interval| {
        interval.end_time_in_minutes >= interval.start_time_in_minutes + MIN_INTERVAL_MINUTES
    });
    if !all_long_enough {
        return Err(ValidationError::IntervalTooShort);
    }

    Ok(TimeIntervalsRequest { intervals })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username("jane_doe-1"), Err(ValidationError::InvalidUsername));
        assert_eq!(validate_username("jane_doe"), Ok("jane_doe".to_string()));
        assert_eq!(validate_username("ab"), Err(ValidationError::TooShort));
        // Length is reported before the character set
        assert_eq!(validate_username("AB"), Err(ValidationError::TooShort));
        assert_eq!(validate_username("Jane"), Err(ValidationError::InvalidUsername));
        assert_eq!(validate_username("jane doe"), Err(ValidationError::InvalidUsername));
        assert_eq!(validate_username("jane\n"), Err(ValidationError::InvalidUsername));
        assert_eq!(
            ValidationError::InvalidUsername.to_string(),
            "Use apenas letras minúsculas hifens e underlines."
        );
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Jane Doe"), Ok("Jane Doe".to_string()));
        assert_eq!(validate_name("Jo"), Err(ValidationError::TooShort));
        assert_eq!(validate_name("Jane 2"), Err(ValidationError::InvalidName));
        assert_eq!(validate_name("JANE doe"), Ok("JANE doe".to_string()));
        assert_eq!(validate_name("Jane-Doe"), Err(ValidationError::InvalidName));
        assert_eq!(validate_name("José"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_validate_register_form_collects_field_errors() {
        let request = validate_register_form("jane", "Jane Doe").unwrap();
        assert_eq!(request.username, "jane");
        assert_eq!(request.name, "Jane Doe");

        let errors = validate_register_form("J", "Jane 2").unwrap_err();
        assert_eq!(errors.username, Some(ValidationError::TooShort));
        assert_eq!(errors.name, Some(ValidationError::InvalidName));

        let errors = validate_register_form("jane", "J").unwrap_err();
        assert_eq!(errors.username, None);
        assert_eq!(errors.name, Some(ValidationError::TooShort));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("jhondoe@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.com.br"));
        assert!(!is_valid_email("jhondoe"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jhon@example"));
        assert!(!is_valid_email("jhon@example..com"));
        assert!(!is_valid_email("jhon doe@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email(".jhon@example.com"));
        assert!(!is_valid_email("jhon..doe@example.com"));
        assert!(!is_valid_email("jhon.@example.com"));
    }

    #[test]
    fn test_is_valid_email_rejects_malformed_domains_and_local_parts() {
        assert!(!is_valid_email("jane@ex!ample.c"));
        assert!(!is_valid_email("jane@-.-"));
        assert!(!is_valid_email("j(a)ne@example.com"));
        assert!(!is_valid_email("jane@exa_mple.c0m"));
        assert!(!is_valid_email("jane@example.c"));
        assert!(is_valid_email("Jane.O'Neil@Example.COM"));
        assert!(is_valid_email("jane-doe_1@sub-domain.example.io"));
    }

    #[test]
    fn test_validate_confirm_form() {
        let form = validate_confirm_form("Jane Doe", "jane@example.com", "  ").unwrap();
        assert_eq!(form.observations, None);

        let form = validate_confirm_form("Jane Doe", "jane@example.com", "Call me first").unwrap();
        assert_eq!(form.observations.as_deref(), Some("Call me first"));

        let errors = validate_confirm_form("Jo", "nope", "").unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::NameTooShort));
        assert_eq!(errors.email, Some(ValidationError::InvalidEmail));
        assert_eq!(errors.name.unwrap().to_string(), "O nome precisa ter no mínimo 3 catacteres.");
    }

    #[test]
    fn test_convert_time_string_to_minutes() {
        assert_eq!(convert_time_string_to_minutes("08:30"), Ok(510));
        assert_eq!(convert_time_string_to_minutes("00:00"), Ok(0));
        assert_eq!(convert_time_string_to_minutes("23:59"), Ok(1439));
        assert!(matches!(
            convert_time_string_to_minutes("0830"),
            Err(TimeParseError::Malformed(_))
        ));
        assert!(matches!(
            convert_time_string_to_minutes("aa:00"),
            Err(TimeParseError::Malformed(_))
        ));
        assert!(matches!(
            convert_time_string_to_minutes("24:00"),
            Err(TimeParseError::OutOfRange(_))
        ));
        assert_eq!(convert_minutes_to_time_string(510), "08:30");
    }

    #[test]
    fn test_default_time_intervals() {
        let defaults = default_time_intervals();

        assert_eq!(defaults.len(), 7);
        assert!(!defaults[0].enabled);
        assert!(defaults[1..=5].iter().all(|input| input.enabled));
        assert!(!defaults[6].enabled);
        assert!(defaults
            .iter()
            .all(|input| input.start_time == "08:00" && input.end_time == "18:00"));
    }

    #[test]
    fn test_validate_time_intervals_keeps_enabled_days() {
        let request = validate_time_intervals(&default_time_intervals()).unwrap();

        assert_eq!(request.intervals.len(), 5);
        assert_eq!(
            request.intervals[0],
            TimeInterval {
                week_day: 1,
                start_time_in_minutes: 480,
                end_time_in_minutes: 1080,
            }
        );
    }

    #[test]
    fn test_validate_time_intervals_requires_a_day() {
        let inputs: Vec<TimeIntervalInput> = default_time_intervals()
            .into_iter()
            .map(|input| TimeIntervalInput { enabled: false, ..input })
            .collect();

        assert_eq!(validate_time_intervals(&inputs), Err(ValidationError::NoDaySelected));
    }

    #[test]
    fn test_validate_time_intervals_requires_an_hour() {
        let mut inputs = default_time_intervals();
        inputs[2].start_time = "10:00".to_string();
        inputs[2].end_time = "10:59".to_string();
        assert_eq!(validate_time_intervals(&inputs), Err(ValidationError::IntervalTooShort));

        inputs[2].end_time = "11:00".to_string();
        assert!(validate_time_intervals(&inputs).is_ok());
    }

    #[test]
    fn test_disabled_days_are_not_checked() {
        let mut inputs = default_time_intervals();
        inputs[0].start_time = "not a time".to_string();

        assert!(validate_time_intervals(&inputs).is_ok());
    }

    #[test]
    fn test_validate_time_intervals_shape() {
        let mut inputs = default_time_intervals();
        inputs.pop();
        assert_eq!(validate_time_intervals(&inputs), Err(ValidationError::WrongDayCount(6)));

        let mut inputs = default_time_intervals();
        inputs[3].week_day = 9;
        assert_eq!(validate_time_intervals(&inputs), Err(ValidationError::InvalidWeekDay(9)));
    }
}
