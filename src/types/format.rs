//! Printf-style formatting of short messages.
//!
//! The formatter is deliberately strict: a null argument to `%s` is an error.
//! Lenient callers substitute nulls before calling [`sprintf`] (see
//! [`substitute_nulls`]), so the formatter itself never guesses.
//!
//! Supported conversions:
//!
//! | Conversion | Argument rendering |
//! |------------|--------------------|
//! | `%s` | strings verbatim, other scalars via `Display`, containers as JSON |
//! | `%d`, `%i` | integer part of a number or numeric string, `NaN` otherwise |
//! | `%f` | fixed-point, six digits unless a precision is given |
//! | `%j` | JSON text of any value |
//! | `%%` | a literal `%` |
//!
//! Flags `-` (left-justify), `0` (zero-pad numbers), and `+` (force sign) are
//! honoured along with a field width and a `.precision`.
//!
//! # Examples
//!
//! ```
//! use causal_error::types::format::sprintf;
//! use serde_json::json;
//!
//! let text = sprintf("%s error: %3d problems", &[json!("very bad"), json!(15)]).unwrap();
//! assert_eq!(text, "very bad error:  15 problems");
//! ```

use serde_json::Value;

use crate::types::config_error::FormatError;

#[derive(Debug, Default, Clone, Copy)]
struct Directive {
    left: bool,
    zero: bool,
    plus: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Formats `template` with positional `args`.
///
/// Arguments beyond the last conversion are ignored.
pub fn sprintf(template: &str, args: &[Value]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.char_indices().peekable();
    let mut next_arg = 0usize;

    while let Some((offset, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&(_, flag)) = chars.peek() {
            match flag {
                '-' => directive.left = true,
                '0' => directive.zero = true,
                '+' => directive.plus = true,
                _ => break,
            }
            chars.next();
        }
        directive.width = take_number(&mut chars);
        if matches!(chars.peek(), Some(&(_, '.'))) {
            chars.next();
            directive.precision = Some(take_number(&mut chars).unwrap_or(0));
        }

        let (_, conversion) = chars.next().ok_or(FormatError::UnterminatedSpecifier { offset })?;
        if conversion == '%' {
            out.push('%');
            continue;
        }

        let index = next_arg;
        let arg = args.get(index).ok_or(FormatError::MissingArgument { index })?;
        next_arg += 1;

        let (body, numeric) = match conversion {
            's' => (render_string(arg, index, directive.precision)?, false),
            'd' | 'i' => (render_integer(arg, directive.plus), true),
            'f' => (render_float(arg, directive.plus, directive.precision.unwrap_or(6)), true),
            'j' => (arg.to_string(), false),
            other => return Err(FormatError::UnsupportedConversion { conversion: other }),
        };
        pad_into(&mut out, &body, directive, numeric);
    }

    Ok(out)
}

/// Replaces every null argument with the literal text `"null"`.
///
/// This is the lenient policy applied before [`sprintf`] unless strict
/// formatting was requested.
pub fn substitute_nulls(args: Vec<Value>) -> Vec<Value> {
    args.into_iter()
        .map(|arg| match arg {
            Value::Null => Value::String("null".into()),
            other => other,
        })
        .collect()
}

fn take_number<I>(chars: &mut core::iter::Peekable<I>) -> Option<usize>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut value: Option<usize> = None;
    while let Some(&(_, c)) = chars.peek() {
        let Some(digit) = c.to_digit(10) else { break };
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    value
}

fn render_string(arg: &Value, index: usize, precision: Option<usize>) -> Result<String, FormatError> {
    let text = match arg {
        Value::Null => return Err(FormatError::NullArgument { index }),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        container => container.to_string(),
    };
    Ok(match precision {
        Some(max) => text.chars().take(max).collect(),
        None => text,
    })
}

fn as_number(arg: &Value) -> Option<f64> {
    match arg {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        _ => None,
    }
}

fn render_integer(arg: &Value, plus: bool) -> String {
    if let Value::Number(n) = arg {
        if let Some(i) = n.as_i64() {
            return signed(i.to_string(), i >= 0, plus);
        }
        if let Some(u) = n.as_u64() {
            return signed(u.to_string(), true, plus);
        }
    }
    match as_number(arg) {
        Some(f) if f.is_finite() => {
            let floored = f.floor();
            signed(format!("{floored:.0}"), floored >= 0.0, plus)
        },
        _ => "NaN".into(),
    }
}

fn render_float(arg: &Value, plus: bool, precision: usize) -> String {
    match as_number(arg) {
        Some(f) if f.is_finite() => signed(format!("{f:.precision$}"), f >= 0.0, plus),
        _ => "NaN".into(),
    }
}

fn signed(digits: String, non_negative: bool, plus: bool) -> String {
    if plus && non_negative {
        format!("+{digits}")
    } else {
        digits
    }
}

fn pad_into(out: &mut String, body: &str, directive: Directive, numeric: bool) {
    let len = body.chars().count();
    let fill = directive.width.unwrap_or(0).saturating_sub(len);
    if fill == 0 {
        out.push_str(body);
        return;
    }

    if directive.left {
        out.push_str(body);
        out.extend(core::iter::repeat_n(' ', fill));
    } else if directive.zero && numeric && body != "NaN" {
        // Zeros go between the sign and the digits.
        let (sign, digits) = match body.strip_prefix(['-', '+']) {
            Some(rest) => body.split_at(body.len() - rest.len()),
            None => ("", body),
        };
        out.push_str(sign);
        out.extend(core::iter::repeat_n('0', fill));
        out.push_str(digits);
    } else {
        out.extend(core::iter::repeat_n(' ', fill));
        out.push_str(body);
    }
}
