use anyhow::Result;
use std::process;

use kibana_me_logs::{app, cli, display, logging};

fn main() {
    let args = cli::parse_args();
    let colour = display::colours_enabled(args.no_color);

    match run(args, colour) {
        Ok(code) => process::exit(code),
        Err(e) => {
            log::debug!("Run failed: {:?}", e);
            println!("{}", display::error_line(&format!("{:#}", e), colour));
            process::exit(1);
        }
    }
}

fn run(args: cli::Args, colour: bool) -> Result<i32> {
    cli::validate_args(&args)?;

    let Some((kibana_app, target_app)) = args.targets() else {
        println!("{}", cli::usage());
        return Ok(1);
    };

    let config_manager = app::load_configuration(&args)?;

    let log_config = app::configure_logging(&args, &config_manager)?;
    logging::init_logger(log_config)?;

    app::run_dashboard(&args, &config_manager, kibana_app, target_app, colour)?;
    Ok(0)
}
