use std::process::ExitCode;

use canvass::{configuration::get_configuration, startup::run};
use env_logger::Env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = match get_configuration() {
        Ok(configuration) => configuration,
        Err(e) => {
            log::error!("Failed to read configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(configuration).await {
        Ok(summary) => {
            log::info!("Done. {} rows written", summary.rows_written);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Run aborted: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
