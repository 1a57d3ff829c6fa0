//! 상품 목록/주문 CSV로 영수증을 만드는 모듈 모음.

pub mod catalog;
pub mod receipt;

pub use catalog::*;
pub use receipt::*;

use std::path::PathBuf;

use thiserror::Error;

/// 영수증 생성 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("파일을 찾을 수 없음: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("파일 접근 권한 없음: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("파일 입출력 오류 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("CSV 파싱 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("{}:{line} 행 오류: {reason}", path.display())]
    InvalidRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("주문서에 알 수 없는 상품 번호: {0}")]
    UnknownProduct(String),
}
