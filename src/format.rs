//! pt-BR presentation helpers. The only place results get rounded.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::decimal::{Money, Rate};

/// format as Brazilian reais, e.g. `R$ 10.503,25` or `-R$ 1.000,00`
pub fn format_brl(amount: Money) -> String {
    let rounded = amount.round_currency().as_decimal();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}R$ {},{}", if negative { "-" } else { "" }, grouped, fraction)
}

/// format a percentage value with `dp` places and a comma separator, e.g. `5,03%`
pub fn format_percentage(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", dp as usize, rounded);
    format!("{}%", text.replace('.', ","))
}

/// monthly rate as shown on the result screen, four places
pub fn format_rate(rate: Rate) -> String {
    format_percentage(rate.as_percentage(), 4)
}
