use std::{io, path::PathBuf};

use clap::Parser;
use rand::SeedableRng as _;

use claby::Random;
use tlaby::{
    app::{self, AppError, Session},
    logging,
    settings::{parse_level, Settings},
};

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "tlaby")]
struct Args {
    #[clap(short, long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, help = "Seed for the random generator, overrides the settings")]
    seed: Option<u64>,
    #[clap(short, long, help = "Log level, overrides the settings")]
    log_level: Option<String>,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let settings_path = match args.config {
        Some(path) => path,
        None => Settings::default_path()?,
    };

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    better_panic::install();

    let level = match &args.log_level {
        Some(level) => parse_level(level)?,
        None => settings.log_level()?,
    };
    logging::init(level);

    let rng = match args.seed.or(settings.seed) {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Random::seed_from_u64(seed)
        }
        None => Random::from_entropy(),
    };

    let mut session = Session::new(rng, settings.markers, settings.default_algorithm);
    app::run(&mut session, &settings.prompt, io::stdin().lock(), io::stdout())?;

    Ok(())
}
