use std::env;
use std::process::ExitCode;

use quadplot::configuration::Configuration;
use quadplot::plotter::QuadraticPlotter;
use quadplot::quadploterror::QuadPlotError;
use quadplot::request::Request;

const USAGE: &str = "usage: quadplot <request.json> [config.json]";

fn run(request_path: &str, config_path: Option<&str>) -> Result<String, QuadPlotError> {
    let configuration = match config_path {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new()
    };
    let request = Request::from_reader(request_path)?;
    let plotter = QuadraticPlotter::new(configuration);
    let spec = plotter.run(&request)?;
    log::info!("built plot '{}' with {} series and {} features",
               spec.title(), spec.series().len(), spec.features().len());
    Ok(spec.to_json()?)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(request_path) = args.first() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(request_path, args.get(1).map(String::as_str)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        },
        Err(error) => {
            log::error!("{}", error);
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}
