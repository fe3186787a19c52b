/*!
 * Reading lirc mode2 style pulse/space files
 */

use crate::Message;

/// Parse pulse/space text as produced by lirc's `mode2` tool. Some drivers
/// report consecutive pulses or spaces rather than alternating ones; these
/// are folded into one. Leading spaces are dropped.
pub fn parse(s: &str) -> Result<Message, String> {
    let mut raw: Vec<u32> = Vec::new();
    let mut carrier = None;

    for (line_no, line) in s.lines().enumerate() {
        let line_no = line_no + 1;

        let mut words = line.split_whitespace();

        let is_pulse = match words.next() {
            Some("pulse") => true,
            Some("space") => false,
            Some("timeout") => false,
            Some("carrier") => {
                let hz: u32 = match words.next() {
                    Some(w) => w
                        .parse()
                        .map_err(|_| format!("line {}: invalid carrier ‘{}’", line_no, w))?,
                    None => return Err(format!("line {}: missing carrier value", line_no)),
                };

                if carrier.is_some() && carrier != Some(hz) {
                    return Err(format!("line {}: carrier specified more than once", line_no));
                }

                carrier = Some(hz);
                continue;
            }
            Some(w) if w.starts_with('#') || w.starts_with("//") => continue,
            Some(w) => return Err(format!("line {}: unexpected ‘{}’", line_no, w)),
            None => continue,
        };

        let value: u32 = match words.next() {
            Some(w) => match w.parse() {
                Ok(0) => return Err(format!("line {}: nonsensical 0 duration", line_no)),
                Ok(n) => n,
                Err(_) => return Err(format!("line {}: invalid duration ‘{}’", line_no, w)),
            },
            None => return Err(format!("line {}: missing duration", line_no)),
        };

        if let Some(w) = words.next() {
            if !w.starts_with('#') && !w.starts_with("//") {
                return Err(format!("line {}: unexpected ‘{}’", line_no, w));
            }
        }

        if is_pulse {
            if raw.len() % 2 == 1 {
                // consecutive pulses fold
                if let Some(last) = raw.last_mut() {
                    *last += value;
                }
            } else {
                raw.push(value);
            }
        } else if raw.len() % 2 == 0 {
            // consecutive spaces fold, leading spaces are dropped
            if let Some(last) = raw.last_mut() {
                *last += value;
            }
        } else {
            raw.push(value);
        }
    }

    if raw.is_empty() {
        return Err("missing pulse".into());
    }

    Ok(Message {
        carrier,
        duty_cycle: None,
        raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding() {
        assert_eq!(parse("pulse 1\npulse 2").unwrap().raw, vec![3]);
        assert_eq!(
            parse("space 1\nspace 2\npulse 1\npulse 2").unwrap().raw,
            vec![3]
        );
        assert_eq!(
            parse("pulse 100\nspace 10\nspace 50").unwrap().raw,
            vec![100, 60]
        );
    }

    #[test]
    fn carrier_and_comments() {
        let message = parse("carrier 38000\npulse 9000\nspace 4500 # header\npulse 560").unwrap();

        assert_eq!(message.carrier, Some(38000));
        assert_eq!(message.raw, vec![9000, 4500, 560]);
    }

    #[test]
    fn errors() {
        assert_eq!(parse(""), Err("missing pulse".into()));
        assert_eq!(
            parse("pulse 0"),
            Err("line 1: nonsensical 0 duration".into())
        );
        assert_eq!(parse("pulse"), Err("line 1: missing duration".into()));
        assert_eq!(
            parse("polse 100"),
            Err("line 1: unexpected ‘polse’".into())
        );
        assert_eq!(
            parse("pulse 100\nspace 10\ncarrier x"),
            Err("line 3: invalid carrier ‘x’".into())
        );
        assert_eq!(
            parse("pulse 100\npulse 50 foobar"),
            Err("line 2: unexpected ‘foobar’".into())
        );
    }
}
