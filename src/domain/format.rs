// Number formatting in the pt-BR convention: `.` groups thousands, `,`
// separates decimals, at most three fraction digits.

const MAX_FRACTION_DIGITS: usize = 3;

/// `1250000.0` → `"1.250.000"`, `1234.5` → `"1.234,5"`.
pub fn brl_number(value: f64) -> String {
    let (int_part, frac_part) = split(value);
    let grouped = group_thousands(&int_part);
    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}

/// Like [`brl_number`] without grouping, for small quantities such as areas.
pub fn decimal_comma(value: f64) -> String {
    let (int_part, frac_part) = split(value);
    let sign = if value < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part},{frac_part}")
    }
}

fn split(value: f64) -> (String, String) {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, ""));
    (
        int_part.to_string(),
        frac_part.trim_end_matches('0').to_string(),
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
