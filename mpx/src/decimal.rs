// Places the decimal point into the digit string returned by `mpfr_get_str`.
//
// `digits` is `[-]d1d2...dn` and stands for `0.d1d2...dn * 10^exp`. The result
// never uses exponent notation; any fractional part loses its trailing zeros.
pub(crate) fn place_point(digits: &str, exp: i64) -> String {
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };

    if digits.is_empty() || digits.bytes().all(|b| b == b'0') {
        return "0".to_owned();
    }

    let len = digits.len() as i64;
    let mut s = String::with_capacity(digits.len() + exp.unsigned_abs() as usize + 3);
    if negative {
        s.push('-');
    }

    if exp > 0 && exp <= len {
        // 12345e3 -> 123.45
        let (int, frac) = digits.split_at(exp as usize);
        s.push_str(int);
        if !frac.is_empty() {
            s.push('.');
            s.push_str(frac);
        }
    } else if exp > 0 {
        // 12345e7 -> 1234500
        s.push_str(digits);
        s.extend(core::iter::repeat('0').take((exp - len) as usize));
    } else {
        // 12345e-2 -> 0.0012345
        s.push_str("0.");
        s.extend(core::iter::repeat('0').take(exp.unsigned_abs() as usize));
        s.push_str(digits);
    }

    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }

    s
}
