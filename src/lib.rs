//! 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod fitness;
pub mod grocery;
pub mod logging;
pub mod promotion;
pub mod quantity;
pub mod ui_cli;
pub mod units;
pub mod vehicle;
pub mod water;
