//! 簡單需求預測示例

use mrp_forecast::{
    render_csv, render_outcome, ConversionRate, Decimal, ForecastConfig, ForecastService,
    InMemoryDataSource, RawSalesRow,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 簡單需求預測示例 ===\n");

    // 創建資料來源（含一筆格式錯誤的銷售列）
    let source = InMemoryDataSource::new()
        .with_sales_rows(
            "1",
            vec![
                RawSalesRow::new("20251101", 100.0),
                RawSalesRow::new("20251102", 108.0),
                RawSalesRow::new("20251103", 119.0),
                RawSalesRow {
                    date: None,
                    quantity: Some(500.0),
                },
                RawSalesRow::new("20251104", 131.0),
            ],
        )
        .with_conversion_rates(
            "1",
            vec![
                ConversionRate::new("Steel-Tube".to_string(), Decimal::from(3)),
                ConversionRate::new("Wheel".to_string(), Decimal::from(2)),
                ConversionRate::new("Paint".to_string(), Decimal::new(25, 2)),
            ],
        )
        .with_sales_rows("2", vec![RawSalesRow::new("20251101", 40.0)]);

    let service = ForecastService::new(source, ForecastConfig::default());

    for product_id in ["1", "2"] {
        println!("產品 {}:", product_id);
        let outcome = service.forecast(product_id);
        println!("{}", render_outcome(&outcome));

        if let Ok(result) = &outcome {
            println!("CSV 報表:\n{}", render_csv(result, product_id)?);
        }
    }

    Ok(())
}
