/*!
 * Parsing and printing of raw ir strings
 */

use num_integer::Integer;
use std::fmt::Write;

/// Print a mark/space sequence as a raw IR string, `+` for mark and `-`
/// for space.
pub fn print_to_string(raw: &[u32]) -> String {
    let mut s = String::new();

    for (i, v) in raw.iter().enumerate() {
        let _ = write!(
            s,
            "{}{}{}",
            if i == 0 { "" } else { " " },
            if i.is_even() { "+" } else { "-" },
            v
        );
    }

    s
}

/// Parse a raw IR string of the form `+9000 -4500 +560`. The leading `+`
/// and `-` may be omitted, but when present they must alternate correctly.
pub fn parse(s: &str) -> Result<Vec<u32>, String> {
    let mut raw = Vec::new();
    let mut mark = true;

    for e in s.split(|c: char| c.is_whitespace() || c == ',') {
        if e.is_empty() {
            continue;
        }

        let mut chars = e.chars().peekable();

        match chars.peek() {
            Some('+') => {
                if !mark {
                    return Err("unexpected ‘+’ encountered".into());
                }
                chars.next();
            }
            Some('-') => {
                if mark {
                    return Err("unexpected ‘-’ encountered".into());
                }
                chars.next();
            }
            Some(ch) if !ch.is_numeric() => {
                return Err(format!("unexpected ‘{}’ encountered", ch));
            }
            _ => (),
        }

        let v = chars.collect::<String>();

        let v = v.parse().map_err(|_| format!("invalid number ‘{}’", v))?;

        if v == 0 {
            return Err("nonsensical 0 duration".into());
        }

        raw.push(v);

        mark = !mark;
    }

    if raw.is_empty() {
        return Err("missing duration".into());
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print() {
        assert_eq!(print_to_string(&[100, 50, 75]), "+100 -50 +75");
    }

    #[test]
    fn parse_signed() {
        assert_eq!(parse("+100 -50 +75"), Ok(vec![100, 50, 75]));
        assert_eq!(parse("100,50,75"), Ok(vec![100, 50, 75]));
        assert_eq!(parse("100  \n50\r +75"), Ok(vec![100, 50, 75]));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse("+100 +50"), Err("unexpected ‘+’ encountered".into()));
        assert_eq!(
            parse("+100 -50 -75"),
            Err("unexpected ‘-’ encountered".into())
        );
        assert_eq!(parse("+x"), Err("invalid number ‘x’".into()));
        assert_eq!(parse("+0"), Err("nonsensical 0 duration".into()));
        assert_eq!(parse("  "), Err("missing duration".into()));
    }
}
