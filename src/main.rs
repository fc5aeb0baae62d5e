use starfield_backdrop::{command, BackdropConfig, CliArgs};

fn main() {
    let config = CliArgs::from_matches(&command().get_matches())
        .and_then(|args| BackdropConfig::resolve(&args));
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("Failed to start runtime: {}", err);
            std::process::exit(1);
        }
    };

    rt.block_on(starfield_backdrop::run_with(config));
}
