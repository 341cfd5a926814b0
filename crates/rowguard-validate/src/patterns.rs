//! Compiled format patterns shared by the string rules.

use std::sync::OnceLock;

use regex::Regex;

/// `YYYY-MM-DDThh:mm:ss.sssZ` with per-month day limits (February capped at 29).
const DATE_PATTERN: &str = concat!(
    r"^[0-9]{4}-(",
    r"(0[13578]|1[02])-(0[1-9]|[12][0-9]|3[01])",
    r"|(0[469]|11)-(0[1-9]|[12][0-9]|30)",
    r"|(02)-(0[1-9]|[12][0-9])",
    r")T(0[0-9]|1[0-9]|2[0-3]):(0[0-9]|[1-5][0-9]):(0[0-9]|[1-5][0-9])\.[0-9]{3}Z$",
);

const UUID_PATTERN: &str =
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

const EMAIL_PATTERN: &str = concat!(
    r#"(?i)^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
    r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
);

const TIME_PATTERN: &str = r"^([0-1]?[0-9]|2[0-4]):([0-5][0-9])(:[0-5][0-9])?$";

static DATE: OnceLock<Option<Regex>> = OnceLock::new();
static UUID: OnceLock<Option<Regex>> = OnceLock::new();
static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
static TIME: OnceLock<Option<Regex>> = OnceLock::new();

fn is_match(cell: &'static OnceLock<Option<Regex>>, pattern: &str, input: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(input))
}

pub(crate) fn is_date(input: &str) -> bool {
    is_match(&DATE, DATE_PATTERN, input)
}

pub(crate) fn is_uuid(input: &str) -> bool {
    is_match(&UUID, UUID_PATTERN, input)
}

pub(crate) fn is_email(input: &str) -> bool {
    is_match(&EMAIL, EMAIL_PATTERN, input)
}

pub(crate) fn is_time(input: &str) -> bool {
    is_match(&TIME, TIME_PATTERN, input)
}
