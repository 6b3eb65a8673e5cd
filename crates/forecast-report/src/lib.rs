//! # Forecast Report
//!
//! 預測結果的呈現與匯出格式（只產生字串，不做檔案 I/O）

pub mod csv_export;
pub mod summary;

// Re-export 主要函數
pub use csv_export::render_csv;
pub use summary::{render_outcome, render_summary};

/// 報表錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("CSV 寫入錯誤: {0}")]
    Csv(#[from] csv::Error),

    #[error("輸出緩衝錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error("報表內容不是有效的 UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
