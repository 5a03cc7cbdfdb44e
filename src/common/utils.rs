//! 共通ユーティリティ関数群（トリム、ASCII小文字化、浮動小数点解析）

/// トリム対象の空白文字（SP, HT, LF, CR, FF, VT）
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// 前後の空白文字を取り除いた部分文字列を返す
pub fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

/// ASCII英字のみを小文字化する（ロケール非依存）
pub fn to_lower_ascii(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// トリムしてから小文字化する
pub fn normalize_token(s: &str) -> String {
    to_lower_ascii(trim(s))
}

/// 文字列先頭の数値表記を `f32` として解釈する（`strtof` 相当）
///
/// 先頭の空白は読み飛ばし、数値として読める最長の接頭辞だけを使う
/// （`"0.5abc"` は `0.5`）。10進表記に加えて `inf` / `infinity`
/// （大文字小文字を問わず、符号付き可）と `0x1p-1` のような16進表記を受け付ける。
/// 数字が一つもない場合、`nan`、および `f32` の範囲外
/// （オーバーフロー・アンダーフロー）の場合は `None` を返す。
pub fn parse_float(s: &str) -> Option<f32> {
    let s = s.trim_start_matches(WHITESPACE);
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = if is_infinity(body) {
        f32::INFINITY
    } else if has_hex_digits(body) {
        parse_hex(&body[2..])?
    } else {
        parse_decimal(body)?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// `inf` で始まるか（`infinity` も含む）
fn is_infinity(body: &str) -> bool {
    body.get(..3)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("inf"))
}

/// `0x` の後に16進数字が続くか。続かなければ `0` までの10進表記として扱う。
fn has_hex_digits(body: &str) -> bool {
    let bytes = body.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' || !matches!(bytes[1], b'x' | b'X') {
        return false;
    }
    match bytes[2] {
        b'.' => bytes.get(3).map_or(false, |b| b.is_ascii_hexdigit()),
        b => b.is_ascii_hexdigit(),
    }
}

fn parse_decimal(body: &str) -> Option<f32> {
    let bytes = body.as_bytes();
    let mut end = skip_digits(bytes, 0);
    let mut digit_count = end;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let frac_end = skip_digits(bytes, frac_start);
        digit_count += frac_end - frac_start;
        end = frac_end;
    }

    if digit_count == 0 {
        return None;
    }

    // 指数部は数字が続く場合のみ取り込む
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_end = skip_digits(bytes, exp_end);
        if exp_digits_end > exp_end {
            end = exp_digits_end;
        }
    }

    let literal = &body[..end];
    let value = literal.parse::<f32>().ok()?;
    check_range(value, has_nonzero_mantissa(literal))
}

/// `0x` を除いた16進表記（仮数部と省略可能な `p` 指数部）を解釈する
fn parse_hex(digits: &str) -> Option<f32> {
    let bytes = digits.as_bytes();
    let mut mantissa = 0.0f64;
    let mut exponent: i32 = 0;
    let mut nonzero = false;
    let mut pos = 0;

    while let Some(d) = hex_digit(bytes, pos) {
        mantissa = mantissa * 16.0 + f64::from(d);
        nonzero |= d != 0;
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(d) = hex_digit(bytes, pos) {
            mantissa = mantissa * 16.0 + f64::from(d);
            nonzero |= d != 0;
            exponent = exponent.saturating_sub(4);
            pos += 1;
        }
    }

    // 2進指数部も数字が続く場合のみ取り込む
    if matches!(bytes.get(pos), Some(b'p') | Some(b'P')) {
        let mut exp_start = pos + 1;
        let negative = match bytes.get(exp_start) {
            Some(b'-') => {
                exp_start += 1;
                true
            }
            Some(b'+') => {
                exp_start += 1;
                false
            }
            _ => false,
        };
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            let magnitude = digits[exp_start..exp_end]
                .parse::<i32>()
                .unwrap_or(i32::MAX);
            exponent = if negative {
                exponent.saturating_sub(magnitude)
            } else {
                exponent.saturating_add(magnitude)
            };
        }
    }

    let value = (mantissa * 2f64.powi(exponent)) as f32;
    check_range(value, nonzero)
}

fn hex_digit(bytes: &[u8], pos: usize) -> Option<u32> {
    bytes.get(pos).and_then(|b| char::from(*b).to_digit(16))
}

/// オーバーフローとアンダーフローを弾く
fn check_range(value: f32, nonzero: bool) -> Option<f32> {
    if !value.is_finite() || (value == 0.0 && nonzero) {
        return None;
    }
    Some(value)
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

fn has_nonzero_mantissa(literal: &str) -> bool {
    literal
        .chars()
        .take_while(|c| *c != 'e' && *c != 'E')
        .any(|c| ('1'..='9').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("  text/html\t"), "text/html");
        assert_eq!(trim("\r\n\x0b\x0cq=1 "), "q=1");
        assert_eq!(trim("   "), "");
        assert_eq!(trim("inner space"), "inner space");
    }

    #[test]
    fn test_to_lower_ascii() {
        assert_eq!(to_lower_ascii("Text/HTML"), "text/html");
        // ASCII以外はそのまま
        assert_eq!(to_lower_ascii("ÄPPLICATION/X"), "Äpplication/x");
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Application/JSON "), "application/json");
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("0.5"), Some(0.5));
        assert_eq!(parse_float("1"), Some(1.0));
        assert_eq!(parse_float("  .25"), Some(0.25));
        assert_eq!(parse_float("1."), Some(1.0));
        assert_eq!(parse_float("+0.8"), Some(0.8));
        assert_eq!(parse_float("-0.5"), Some(-0.5));
        assert_eq!(parse_float("5e-1"), Some(0.5));
        assert_eq!(parse_float("0"), Some(0.0));
        assert_eq!(parse_float("0.000"), Some(0.0));
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("0.5abc"), Some(0.5));
        assert_eq!(parse_float("1e"), Some(1.0));
        assert_eq!(parse_float("2E+x"), Some(2.0));
    }

    #[test]
    fn test_parse_float_rejects() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("nan"), None);
        assert_eq!(parse_float("in"), None);
        assert_eq!(parse_float("0x1p999"), None);
        assert_eq!(parse_float("0x1p-999"), None);
        assert_eq!(parse_float("1e99"), None);
        assert_eq!(parse_float("1e-99"), None);
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("inf"), Some(f32::INFINITY));
        assert_eq!(parse_float("Infinity"), Some(f32::INFINITY));
        assert_eq!(parse_float("+INF"), Some(f32::INFINITY));
        assert_eq!(parse_float("-inf"), Some(f32::NEG_INFINITY));
        assert_eq!(parse_float("infx"), Some(f32::INFINITY));
    }

    #[test]
    fn test_parse_float_hex() {
        assert_eq!(parse_float("0x1p-1"), Some(0.5));
        assert_eq!(parse_float("0X.8"), Some(0.5));
        assert_eq!(parse_float("0x1.8p0"), Some(1.5));
        assert_eq!(parse_float("-0x1p-2"), Some(-0.25));
        assert_eq!(parse_float("0xAp-4"), Some(0.625));
        // 指数部の数字がなければ "p" の手前まで
        assert_eq!(parse_float("0x1p"), Some(1.0));
        // 16進数字が続かなければ "0" として読む
        assert_eq!(parse_float("0x"), Some(0.0));
        assert_eq!(parse_float("0xg"), Some(0.0));
    }
}
