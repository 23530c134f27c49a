//! Display formatting. Amounts use comma thousands separators with a
//! currency suffix; editor dates use the Korean long form.

use chrono::{Datelike, NaiveDate, Weekday};

/// Get the English name for a month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Calendar header title, e.g. "March 2024"
pub fn format_month_year(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

fn korean_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "일요일",
        Weekday::Mon => "월요일",
        Weekday::Tue => "화요일",
        Weekday::Wed => "수요일",
        Weekday::Thu => "목요일",
        Weekday::Fri => "금요일",
        Weekday::Sat => "토요일",
    }
}

/// Long Korean date with weekday, e.g. "2024년 3월 15일 금요일"
pub fn format_korean_long_date(date: NaiveDate) -> String {
    format!(
        "{}년 {}월 {}일 {}",
        date.year(),
        date.month(),
        date.day(),
        korean_weekday(date.weekday())
    )
}

/// Format an amount with thousands separators, at most three fraction
/// digits, and the currency symbol as a suffix: `50000.0` -> "50,000₩".
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}{}", amount, currency_symbol);
    }

    let rounded = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}{}", sign, grouped, currency_symbol)
    } else {
        format!("{}{}.{}{}", sign, grouped, frac_part, currency_symbol)
    }
}
