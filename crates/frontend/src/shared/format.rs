//! Форматирование чисел для таблиц и карточек показателей

use contracts::shared::indicators::ValueFormat;

/// Разделение тысяч неразрывным пробелом: 1234567 -> "1 234 567"
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Денежная сумма: 1350.5 -> "1 350,50 ₽"
pub fn format_money(val: f64) -> String {
    let int_part = val.trunc() as i64;
    let frac = ((val.abs() - val.abs().trunc()) * 100.0).round() as i64;
    format!("{},{:02}\u{00a0}₽", format_thousands(int_part), frac)
}

/// Значение по формату показателя
pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let int_part = val.trunc() as i64;
            let frac = ((val.abs() - val.abs().trunc()) * 100.0).round() as i64;
            if frac == 0 {
                format!("{}\u{00a0}{}", format_thousands(int_part), currency)
            } else {
                format!(
                    "{},{:02}\u{00a0}{}",
                    format_thousands(int_part),
                    frac,
                    currency
                )
            }
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize).replace('.', ",")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouped_with_nbsp() {
        assert_eq!(format_thousands(1_234_567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_thousands(-1000), "-1\u{00a0}000");
        assert_eq!(format_thousands(42), "42");
    }

    #[test]
    fn money_keeps_two_decimals() {
        assert_eq!(format_money(1350.5), "1\u{00a0}350,50\u{00a0}₽");
    }

    #[test]
    fn value_format_variants() {
        assert_eq!(format_value(1500.0, &ValueFormat::rub()), "1\u{00a0}500\u{00a0}₽");
        assert_eq!(format_value(1234.6, &ValueFormat::Integer), "1\u{00a0}235");
        assert_eq!(
            format_value(0.5, &ValueFormat::Number { decimals: 2 }),
            "0,50"
        );
    }
}
