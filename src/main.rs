use std::{error::Error, path::PathBuf, process, sync::Arc};

use tracing::{error, info};

use soul_gui::{
    app::{config::BACKEND_URL_ENV, App, Config},
    backend::HttpGateway,
    dir::SoulDirectory,
    logger::setup_logger,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(PathBuf),
    BackendUrl(String),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();
    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--datadir" => match iter.next() {
                Some(path) => res.push(Arg::DatadirPath(PathBuf::from(path))),
                None => return Err("missing arg to --datadir".into()),
            },
            "--backend" => match iter.next() {
                Some(url) => res.push(Arg::BackendUrl(url)),
                None => return Err("missing arg to --backend".into()),
            },
            _ => return Err(format!("Unknown argument '{}'", arg).into()),
        }
    }
    Ok(res)
}

fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );
    }));
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    dotenv::dotenv().ok();

    let mut datadir = None;
    let mut backend_url = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(path) => datadir = Some(SoulDirectory::new(path)),
            Arg::BackendUrl(url) => backend_url = Some(url),
        }
    }

    let datadir = match datadir.or_else(SoulDirectory::new_default) {
        Some(datadir) => datadir,
        None => {
            eprintln!("Error: unable to resolve the home directory, use --datadir");
            process::exit(1);
        }
    };

    let datadir_existed = datadir.exists();
    let config_file = datadir.config_file();
    let config_found = config_file.exists();
    let mut config = Config::from_file(&config_file)?;
    let env_override = config.apply_env();
    if let Some(url) = backend_url {
        config.backend_url = url;
    }

    setup_logger(&datadir, config.log_level())?;
    setup_panic_hook();

    if !datadir_existed {
        info!("Created data directory {}", datadir.path().display());
    }
    if !config_found {
        info!("No configuration file at {}, using defaults", config_file.display());
    }
    if env_override {
        info!("Backend url overridden by {}", BACKEND_URL_ENV);
    }

    let gateway = HttpGateway::new(
        &config.backend_url,
        config.request_timeout(),
        config.blocks_per_mine,
    )?;
    info!(
        "Soul GUI v{} on {} using node at {}",
        VERSION, config.network, config.backend_url
    );

    iced::application(App::title, App::update, App::view)
        .theme(|_| iced::Theme::Dark)
        .window_size(iced::Size::new(1200.0, 800.0))
        .run_with(move || App::new(config, Arc::new(gateway)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("soul")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parses_known_flags() {
        assert_eq!(parse_args(args(&[])).unwrap(), vec![]);
        assert_eq!(
            parse_args(args(&["--datadir", "/tmp/soul", "--backend", "http://node:8181"])).unwrap(),
            vec![
                Arg::DatadirPath(PathBuf::from("/tmp/soul")),
                Arg::BackendUrl("http://node:8181".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_unknown_or_incomplete_flags() {
        assert!(parse_args(args(&["--datadir"])).is_err());
        assert!(parse_args(args(&["--network", "regtest"])).is_err());
    }
}
