#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

use std::process::ExitCode;

use config::args::{self, AppMode};
use server::{BirthdayAppServer, api_doc::ApiDoc, app::AppState};

const BACKEND_SEMVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let args = args::get_config();

    if let Some(AppMode::OpenApi) = args.mode {
        return handle_open_api_mode();
    }

    let config = match config::get_config(args, BACKEND_SEMVER_VERSION.to_string()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:?}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async { BirthdayAppServer::new(config).run().await });

    ExitCode::SUCCESS
}

fn handle_open_api_mode() -> ExitCode {
    let config = config::Config::minimal_config(BACKEND_SEMVER_VERSION.to_string());
    let state = AppState::new(config.into());
    match ApiDoc::all(state).to_pretty_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
