use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Display offset of the clinic's wall clock relative to UTC, in hours.
pub const LOCAL_OFFSET_HOURS: i64 = -3;

/// Accepted payment methods, as (submitted value, display label)
pub const PAYMENT_METHODS: [(&str, &str); 6] = [
    ("cash", "Cash"),
    ("credit_card", "Credit card"),
    ("debit_card", "Debit card"),
    ("pix", "Pix"),
    ("bank_transfer", "Bank transfer"),
    ("insurance", "Insurance"),
];

/// Display label of a payment method value, falling back to the raw value
pub fn method_label(method: &str) -> &str {
    PAYMENT_METHODS
        .iter()
        .find(|(value, _)| *value == method)
        .map(|(_, label)| *label)
        .unwrap_or(method)
}

/// Formats an amount of cents as Brazilian currency, e.g. "R$ 1.234,56"
pub fn format_brl(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let reais = abs / 100;
    let centavos = abs % 100;

    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, centavos)
}

/// Parses a currency input like "120", "120,50" or "1.234,56" into cents
pub fn parse_brl_input(input: &str) -> Option<i32> {
    let cleaned = input
        .trim()
        .trim_start_matches("R$")
        .trim()
        .replace('.', "");
    if cleaned.is_empty() {
        return None;
    }

    let (reais_part, centavos_part) = match cleaned.split_once(',') {
        Some((r, c)) => (r, c),
        None => (cleaned.as_str(), ""),
    };

    let reais: i64 = reais_part.parse().ok()?;
    let centavos: i64 = match centavos_part.len() {
        0 => 0,
        1 => centavos_part.parse::<i64>().ok()? * 10,
        2 => centavos_part.parse().ok()?,
        _ => return None,
    };

    let cents = reais.checked_mul(100)?.checked_add(centavos)?;
    i32::try_from(cents).ok()
}

/// Formats a UTC instant as local "DD/MM/YYYY HH:MM"
pub fn format_datetime_local(instant: DateTime<Utc>) -> String {
    (instant + Duration::hours(LOCAL_OFFSET_HOURS))
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// The local calendar date of the current moment, as "YYYY-MM-DD"
pub fn today_local() -> String {
    (Utc::now() + Duration::hours(LOCAL_OFFSET_HOURS))
        .format("%Y-%m-%d")
        .to_string()
}

/// The local calendar date `days` days from now, as "YYYY-MM-DD"
pub fn local_date_offset(days: i64) -> String {
    (Utc::now() + Duration::hours(LOCAL_OFFSET_HOURS) + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Converts a stored "HH:MM:SS" UTC time-of-day to a local "HH:MM" input value
pub fn utc_hms_to_local_hm(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M:%S") {
        Ok(parsed) => (parsed + Duration::hours(LOCAL_OFFSET_HOURS))
            .format("%H:%M")
            .to_string(),
        Err(_) => String::new(),
    }
}

/// Converts a local "HH:MM" input value to the stored "HH:MM:SS" UTC form
pub fn local_hm_to_utc_hms(time: &str) -> Option<String> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(
        (parsed - Duration::hours(LOCAL_OFFSET_HOURS))
            .format("%H:%M:%S")
            .to_string(),
    )
}

/// True when the date input value is a well-formed calendar date
pub fn is_valid_date(input: &str) -> bool {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
}
