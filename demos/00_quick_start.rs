/// quick start - one compound and one simple calculation
use legal_calc_rs::chrono::NaiveDate;
use legal_calc_rs::{
    compute, format_brl, format_percentage, CalculationInput, CalculationMode, Money,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let compound = CalculationInput::new(
        CalculationMode::CompoundInterest,
        Money::from_major(10_000),
        NaiveDate::from_ymd_opt(2023, 1, 15).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("bad date")?,
        "INPC",
    );
    let result = compute(&compound)?;

    println!("=== juros compostos, INPC ===");
    println!("meses: {}", result.elapsed_months);
    println!("valor corrigido: {}", format_brl(result.corrected_value));
    println!("correção: {}", format_percentage(result.percentage_change, 2));
    for entry in &result.monthly_breakdown {
        println!(
            "  mês {:>2}: {} -> {} (+{})",
            entry.month_index,
            format_brl(entry.value_before),
            format_brl(entry.value_after),
            format_brl(entry.monthly_accrual)
        );
    }

    // an index outside the table falls back to 0.5% a month
    let simple = CalculationInput::new(
        CalculationMode::SimpleInterest,
        Money::from_major(5_000),
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2024, 7, 1).ok_or("bad date")?,
        "UFIR",
    );
    let result = compute(&simple)?;
    println!("\n=== juros simples, índice desconhecido ===");
    println!("taxa mensal: {}", result.monthly_rate);
    println!("valor corrigido: {}", format_brl(result.corrected_value));

    Ok(())
}
