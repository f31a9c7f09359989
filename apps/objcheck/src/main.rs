//! objcheck CLI binary entry point.
//! Delegates to the library for loading and checks, then prints results.

use clap::Parser;
use objcheck::cli::{Cli, Commands};
use objcheck::config::{self, Effective};
use objcheck::models::catalog::Catalog;
use objcheck::utils::{error_prefix, info_prefix, note_prefix};
use objcheck::{listing, loader, output, validate};

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    )
    .init();

    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            root,
            catalogs,
            output,
            strict,
        } => {
            let eff = config::resolve_effective(
                root.as_deref(),
                &catalogs,
                output.as_deref(),
                if strict { Some(true) } else { None },
                None,
            );
            require_catalogs(&eff);
            let outcome = validate::run_validation(&eff.catalog_base, &eff.catalogs);
            let code = validate::outcome_exit_code(&outcome, eff.strict);
            match outcome {
                Ok(reports) => {
                    if let Err(e) = output::print_check(&reports, eff.output) {
                        eprintln!("{} failed to render results: {}", error_prefix(), e);
                        std::process::exit(validate::EXIT_LOAD_FAILURE);
                    }
                }
                Err(e) => eprintln!("{} {}", error_prefix(), e),
            }
            std::process::exit(code);
        }
        Commands::List {
            root,
            catalogs,
            output,
            sort,
        } => {
            let eff =
                config::resolve_effective(root.as_deref(), &catalogs, output.as_deref(), None, sort);
            require_catalogs(&eff);
            let catalog = match load_merged(&eff) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    std::process::exit(validate::EXIT_LOAD_FAILURE);
                }
            };
            let rows = listing::list_objects(&catalog, eff.sort);
            if let Err(e) = output::print_list(&rows, eff.output) {
                eprintln!("{} failed to render listing: {}", error_prefix(), e);
                std::process::exit(validate::EXIT_LOAD_FAILURE);
            }
        }
    }
}

/// Exit with a hint when neither the CLI nor a config file names a catalog.
fn require_catalogs(eff: &Effective) {
    if eff.using_defaults() && eff.output != config::OutputMode::Json {
        eprintln!("{} No objcheck.toml found; using defaults.", note_prefix());
    }
    if eff.catalogs.is_empty() {
        eprintln!(
            "{} No catalog configured. Pass --catalog or set `catalogs` in objcheck.toml.",
            error_prefix()
        );
        std::process::exit(validate::EXIT_LOAD_FAILURE);
    }
    if eff.output != config::OutputMode::Json {
        eprintln!("{} Catalogs: [{}]", info_prefix(), eff.catalogs.join(", "));
    }
}

/// Load every matched catalog and concatenate their classes in path order.
fn load_merged(eff: &Effective) -> Result<Catalog, loader::LoadError> {
    let mut classes = Vec::new();
    for p in loader::resolve_catalogs(&eff.catalog_base, &eff.catalogs)? {
        classes.extend(loader::load_catalog(&p)?.classes);
    }
    Ok(Catalog::new(classes))
}
