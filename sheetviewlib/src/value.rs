//! Value coercion for cell comparison.
//!
//! A cell is a raw string until it has to be ordered. Coercion tries,
//! in order: number (Brazilian separators, `.` thousands and `,`
//! decimal), calendar date (ISO or `D/M/Y`), then plain text. Two
//! cells only compare numerically or chronologically when *both*
//! coerce to the same variant; mixed pairs degrade to text comparison
//! without error.
//!
//! Text comparison approximates `localeCompare("pt-BR", numeric,
//! base)`: case-insensitive, diacritic-insensitive over the
//! Portuguese Latin-1 range, with digit runs compared as numbers
//! ("a2" sorts before "a10").

use std::cmp::Ordering;

use chrono::NaiveDate;

/// Comparison key for a single cell.
///
/// The total, order-preserving form of the "number if possible, else
/// date, else string" rule. Numeric parse takes precedence, so a bare
/// `"2024"` is a number, never a year.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Finite numeric value
    Number(f64),
    /// Calendar date
    Date(NaiveDate),
    /// Plain text fallback
    Text(String),
}

/// Coerce a raw cell into its comparison key.
///
/// Empty and whitespace-only cells coerce to text, never to a number
/// or date.
pub fn coerce(raw: &str) -> SortKey {
    if let Some(n) = parse_number(raw) {
        return SortKey::Number(n);
    }
    if let Some(d) = parse_date(raw) {
        return SortKey::Date(d);
    }
    SortKey::Text(raw.to_string())
}

/// Compare two raw cells using coercion.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (coerce(a), coerce(b)) {
        (SortKey::Number(na), SortKey::Number(nb)) => {
            na.partial_cmp(&nb).unwrap_or(Ordering::Equal)
        }
        (SortKey::Date(da), SortKey::Date(db)) => da.cmp(&db),
        _ => compare_text(a, b),
    }
}

/// Parse a number with Brazilian separators.
///
/// Every `.` is stripped as a thousands separator before the first
/// `,` becomes the decimal point, so `"1.234,56"` is 1234.56 and
/// `"1.5"` is 15.
fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let s = s.replace('.', "").replacen(',', ".", 1);
    let n: f64 = s.parse().ok()?;
    n.is_finite().then_some(n)
}

/// Parse a date: ISO (`Y-M-D` with a 4-digit year, `/` or `-`)
/// first, then `D[/-]M[/-]Y` with 1-2 digit day and month and a 2 or
/// 4 digit year. A 2-digit year is 2000+YY. The result must exist on
/// the calendar.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split(['/', '-']).collect();
    if parts.len() != 3 {
        return None;
    }
    if !parts
        .iter()
        .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    // A 4-digit lead can only be a year
    if parts[0].len() == 4 {
        let year: i32 = parts[0].parse().ok()?;
        let month: u32 = parts[1].parse().ok()?;
        let day: u32 = parts[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let (d, m, y) = (parts[0], parts[1], parts[2]);
    if d.len() > 2 || m.len() > 2 || (y.len() != 2 && y.len() != 4) {
        return None;
    }
    let day: u32 = d.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    let mut year: i32 = y.parse().ok()?;
    if y.len() == 2 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Natural-order text comparison: folded characters, digit runs as
/// numbers.
fn compare_text(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let ord = compare_digit_runs(&mut ca, &mut cb);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = fold_char(x).cmp(&fold_char(y));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

/// Consume one digit run from each side and compare them as integers
/// of arbitrary length.
fn compare_digit_runs(
    a: &mut std::iter::Peekable<std::str::Chars<'_>>,
    b: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Ordering {
    let ra = take_digits(a);
    let rb = take_digits(b);
    let ta = ra.trim_start_matches('0');
    let tb = rb.trim_start_matches('0');
    ta.len().cmp(&tb.len()).then_with(|| ta.cmp(tb))
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = it.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}

/// Fold to lowercase and strip diacritics common in Portuguese text.
fn fold_char(c: char) -> char {
    let c = c.to_lowercase().next().unwrap_or(c);
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_brazilian_number() {
        assert_eq!(coerce("1.234,56"), SortKey::Number(1234.56));
    }

    #[test]
    fn test_coerce_plain_number() {
        assert_eq!(coerce("42"), SortKey::Number(42.0));
        assert_eq!(coerce("  10 "), SortKey::Number(10.0));
    }

    #[test]
    fn test_dot_is_thousands_separator() {
        // "1.5" reads as 15, not 1.5 — the dot is always thousands
        assert_eq!(coerce("1.5"), SortKey::Number(15.0));
    }

    #[test]
    fn test_coerce_slash_date() {
        let expect = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(coerce("31/12/2025"), SortKey::Date(expect));
    }

    #[test]
    fn test_coerce_dash_date_two_digit_year() {
        let expect = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(coerce("1-2-26"), SortKey::Date(expect));
    }

    #[test]
    fn test_coerce_iso_date() {
        let expect = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(coerce("2025-12-31"), SortKey::Date(expect));
    }

    #[test]
    fn test_coerce_text_fallback() {
        assert_eq!(coerce("abc"), SortKey::Text("abc".to_string()));
    }

    #[test]
    fn test_empty_string_is_text() {
        assert_eq!(coerce(""), SortKey::Text(String::new()));
        assert_eq!(coerce("   "), SortKey::Text("   ".to_string()));
    }

    #[test]
    fn test_bare_year_is_number() {
        // Numeric parse wins over a plausible year-string
        assert_eq!(coerce("2024"), SortKey::Number(2024.0));
    }

    #[test]
    fn test_invalid_calendar_date_is_text() {
        assert!(matches!(coerce("31/02/2025"), SortKey::Text(_)));
    }

    #[test]
    fn test_us_style_date_is_text() {
        // Month 31 does not exist; D/M/Y is the only slash form
        assert!(matches!(coerce("12/31/2025"), SortKey::Text(_)));
    }

    #[test]
    fn test_compare_numbers() {
        assert_eq!(compare_values("2", "10"), Ordering::Less);
        assert_eq!(compare_values("10,5", "10,4"), Ordering::Greater);
    }

    #[test]
    fn test_compare_dates() {
        assert_eq!(compare_values("01/01/2025", "31/12/2024"), Ordering::Greater);
    }

    #[test]
    fn test_mixed_pair_degrades_to_text() {
        // "10" vs "abc": lexically '1' < 'a'
        assert_eq!(compare_values("10", "abc"), Ordering::Less);
    }

    #[test]
    fn test_text_compare_case_insensitive() {
        assert_eq!(compare_values("ana", "ANA"), Ordering::Equal);
    }

    #[test]
    fn test_text_compare_accent_insensitive() {
        assert_eq!(compare_values("José", "jose"), Ordering::Equal);
        assert_eq!(compare_values("Ângela", "angela"), Ordering::Equal);
    }

    #[test]
    fn test_text_compare_numeric_aware() {
        assert_eq!(compare_values("item2", "item10"), Ordering::Less);
    }
}
