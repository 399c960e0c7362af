use super::{get_infinity, MpsFormat};

// significant digits for the decimal formats
const NORMAL_DIGITS: usize = 12;
const EXTRA_DIGITS: usize = 17;

/// Format a value for an MPS field.  Non-finite values are clamped to
/// the current infinity bound.
pub(crate) fn format_value(value: f64, format: MpsFormat) -> String {
    let value = if value.is_nan() {
        0.0
    } else if value.is_infinite() {
        get_infinity().copysign(value)
    } else {
        value
    };

    match format {
        MpsFormat::Normal => format_general(value, NORMAL_DIGITS),
        MpsFormat::ExtraPrecision => format_general(value, EXTRA_DIGITS),
        MpsFormat::IeeeHex => format!("{:016X}", value.to_bits()),
    }
}

// C "%.<sig>g" style: shortest of fixed or scientific notation with
// `sig` significant digits and trailing zeros removed
fn format_general(value: f64, sig: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // the exponent after rounding to `sig` digits decides the notation
    let sci = format!("{:.*e}", sig - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exp < -4 || exp >= sig as i32 {
        _exp_str_reformat(format!("{}e{}", trim_zeros(mantissa), exp))
    } else {
        let decimals = (sig as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

// Rust prints exponents as e.g. "1e5" or "1e-5", but MPS readers expect the
// C style "1e+05" or "1e-05"

fn _exp_str_reformat(mut thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let has_sign = thestr[eidx + 1..].starts_with('-');

    let has_short_exp = {
        if !has_sign {
            thestr.len() == eidx + 2
        } else {
            thestr.len() == eidx + 3
        }
    };

    let chars;
    if !has_sign {
        if has_short_exp {
            chars = "+0";
        } else {
            chars = "+";
        }
    } else if has_short_exp {
        chars = "0";
    } else {
        chars = "";
    }

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_format_general() {
    assert_eq!(format_value(0.0, MpsFormat::Normal), "0");
    assert_eq!(format_value(1.0, MpsFormat::Normal), "1");
    assert_eq!(format_value(-2.5, MpsFormat::Normal), "-2.5");
    assert_eq!(format_value(100.0, MpsFormat::Normal), "100");
    assert_eq!(format_value(0.1, MpsFormat::Normal), "0.1");
    assert_eq!(format_value(1.0 / 3.0, MpsFormat::Normal), "0.333333333333");
    assert_eq!(format_value(0.0001, MpsFormat::Normal), "0.0001");
    assert_eq!(format_value(0.00001, MpsFormat::Normal), "1e-05");
    assert_eq!(format_value(1e30, MpsFormat::Normal), "1e+30");
    assert_eq!(format_value(-1.5e-300, MpsFormat::Normal), "-1.5e-300");
    assert_eq!(format_value(123456789012.0, MpsFormat::Normal), "123456789012");
    assert_eq!(format_value(1234567890123.0, MpsFormat::Normal), "1.23456789012e+12");

    // rounding can carry into the next decade
    assert_eq!(format_value(999999999999.9, MpsFormat::Normal), "1e+12");
}

#[test]
fn test_format_extra_and_hex() {
    assert_eq!(
        format_value(0.1, MpsFormat::ExtraPrecision),
        "0.10000000000000001"
    );
    assert_eq!(format_value(1.0, MpsFormat::IeeeHex), "3FF0000000000000");
    assert_eq!(format_value(-2.0, MpsFormat::IeeeHex), "C000000000000000");
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat("1e5".to_string()), "1e+05");
    assert_eq!(_exp_str_reformat("1e-5".to_string()), "1e-05");
    assert_eq!(_exp_str_reformat("1e30".to_string()), "1e+30");
    assert_eq!(_exp_str_reformat("1e-300".to_string()), "1e-300");
}
