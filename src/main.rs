use std::process::ExitCode;

use property_cost_estimator::{app, cli::Cli, logging};

/// 프로그램의 엔트리 포인트. 로그를 설정한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    app::run(cli)?;
    Ok(())
}
