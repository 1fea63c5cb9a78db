//! Currency display formatting.
//!
//! Amounts are stored as integer cents everywhere; this module only renders
//! them for reports, exports and email templates.

/// Formats an amount of cents as Brazilian currency, e.g. "R$ 1.234,56".
///
/// Negative amounts render with a leading minus sign: "-R$ 12,00".
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
