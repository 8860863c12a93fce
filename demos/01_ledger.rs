/// ledger - recording, linking and searching calculations with controlled time
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use legal_calc_rs::{
    CalculationBuilder, CalculationLedger, CalculationMode, Money, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();
    let mut ledger = CalculationLedger::new();

    let correction = CalculationBuilder::new()
        .title("Correção Monetária - Processo 1000001")
        .mode(CalculationMode::MonetaryCorrection)
        .index("IPCA")
        .principal(Money::from_major(25_000))
        .start_date(NaiveDate::from_ymd_opt(2022, 7, 1).ok_or("bad date")?)
        .build_with_time(&time)?;
    let correction_id = ledger.record(correction);

    controller.advance(Duration::minutes(10));
    let labor = CalculationBuilder::new()
        .title("Verbas rescisórias")
        .mode_str("Atualização Trabalhista")?
        .index("IGP-M")
        .principal(Money::from_str_exact("18350.40")?)
        .start_date_str("2023-03-10")?
        .notes("aguardando homologação")
        .build_with_time(&time)?;
    ledger.record(labor);

    controller.advance(Duration::days(1));
    ledger.link_to_process(correction_id, "1000001-00.2024.8.00.0000", &time)?;

    println!("=== cálculos ({}) ===", ledger.len());
    for record in ledger.records() {
        for line in record.summary() {
            println!("{}", line);
        }
        println!();
    }

    println!("busca 'processo': {} resultado(s)", ledger.search("processo").len());
    println!("{:?}", ledger.summary());

    if let Some(record) = ledger.get(correction_id) {
        println!("\n{}", record.json());
    }

    Ok(())
}
