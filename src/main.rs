use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use everyday_toolbox::app::{self, AppError, MenuChoice};
use everyday_toolbox::quantity::QuantityKind;
use everyday_toolbox::{config, conversion, logging};

#[derive(Debug, Parser)]
#[command(name = "everyday_toolbox_cli")]
#[command(about = "수압/피트니스/영수증/타이어/연비 계산 도구 모음")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,

    /// 생략하면 메인 메뉴를 띄운다.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 급수탑에서 주택까지 수압 계산
    Water,
    /// 운동/칼로리 기록 세션
    Fitness,
    /// CSV 주문서로 영수증 출력
    Receipt {
        #[arg(long)]
        products: Option<PathBuf>,
        #[arg(long)]
        request: Option<PathBuf>,
    },
    /// 타이어 체적 계산 및 기록
    Tire {
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// 주행거리/연료량으로 연비 계산
    Fuel,
    /// 단위 변환 (예: convert pressure 100 kPa psi)
    Convert {
        kind: QuantityKind,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let choice = match cli.command {
        None => return app::run(&mut cfg, &cli.config),
        Some(Command::Convert {
            kind,
            value,
            from,
            to,
        }) => {
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{value} {from} = {result:.4} {to}");
            return Ok(());
        }
        Some(Command::Water) => MenuChoice::WaterSupply,
        Some(Command::Fitness) => MenuChoice::Fitness,
        Some(Command::Receipt { products, request }) => {
            if let Some(path) = products {
                cfg.receipt.products_path = path;
            }
            if let Some(path) = request {
                cfg.receipt.request_path = path;
            }
            MenuChoice::Receipt
        }
        Some(Command::Tire { log }) => {
            if let Some(path) = log {
                cfg.tire.log_path = path;
            }
            MenuChoice::TireVolume
        }
        Some(Command::Fuel) => MenuChoice::FuelEfficiency,
    };
    app::run_tool(choice, &mut cfg)
}
