//! 銷售歷史模型

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 單筆銷售記錄
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// 日期序數（天）
    pub date: i64,

    /// 銷售數量
    pub quantity: f64,
}

impl SalesRecord {
    /// 創建新的銷售記錄
    pub fn new(date: i64, quantity: f64) -> Self {
        Self { date, quantity }
    }

    /// 以日曆日期創建（日期序數 = 西元元年起算天數）
    pub fn from_date(date: NaiveDate, quantity: f64) -> Self {
        Self::new(day_ordinal(date), quantity)
    }
}

/// 單一產品的銷售序列
///
/// 記錄順序即呼叫端提供的順序，不要求日期遞增，也容許重複日期。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSeries {
    /// 產品ID
    pub product_id: String,

    /// 銷售記錄
    pub records: Vec<SalesRecord>,
}

impl SalesSeries {
    /// 創建空的銷售序列
    pub fn new(product_id: String) -> Self {
        Self {
            product_id,
            records: Vec::new(),
        }
    }

    /// 建構器模式：設置全部記錄
    pub fn with_records(mut self, records: Vec<SalesRecord>) -> Self {
        self.records = records;
        self
    }

    /// 建構器模式：追加一筆記錄
    pub fn with_record(mut self, date: i64, quantity: f64) -> Self {
        self.push(SalesRecord::new(date, quantity));
        self
    }

    /// 追加記錄
    pub fn push(&mut self, record: SalesRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 第一筆記錄（時間原點）
    pub fn first(&self) -> Option<&SalesRecord> {
        self.records.first()
    }

    /// 最後一筆記錄（預測點）
    pub fn last(&self) -> Option<&SalesRecord> {
        self.records.last()
    }
}

/// 資料來源中的原始銷售列（欄位可能缺失）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSalesRow {
    /// 日期文字
    pub date: Option<String>,

    /// 銷售數量
    pub quantity: Option<f64>,
}

impl RawSalesRow {
    /// 創建完整的原始列
    pub fn new(date: impl Into<String>, quantity: f64) -> Self {
        Self {
            date: Some(date.into()),
            quantity: Some(quantity),
        }
    }

    /// 轉換為銷售記錄；日期無法解析、數量缺失或非有限非負值時回傳 None
    pub fn to_record(&self) -> Option<SalesRecord> {
        let date = parse_sales_date(self.date.as_deref()?)?;
        let quantity = self.quantity.filter(|q| q.is_finite() && *q >= 0.0)?;
        Some(SalesRecord::new(date, quantity))
    }
}

/// 解析銷售日期文字為日期序數
///
/// 接受 `YYYYMMDD`、`YYYY-MM-DD`，或直接的整數日期序數。
pub fn parse_sales_date(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.len() == 8 && text.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(text, "%Y%m%d").ok().map(day_ordinal);
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(day_ordinal(date));
    }

    text.parse::<i64>().ok()
}

fn day_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}
