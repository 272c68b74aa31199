use clap::Parser;
use headmerge::application::{
    ConfigService, InitService, InspectTagsService, MergeHeadService, MergeOptions,
};
use headmerge::cli::{format_merged_pages, format_tag_list, Cli, Commands};
use headmerge::error::HeadmergeError;
use headmerge::infrastructure::{FileSystemSite, LogLevel, SiteRepository};
use headmerge::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Flag level, else the discovered site's configured level, else the default
fn resolve_log_level(flag: Option<&str>) -> Result<LogLevel, HeadmergeError> {
    if let Some(level) = flag {
        return level.parse();
    }

    Ok(FileSystemSite::discover()
        .and_then(|site| site.load_config())
        .map(|config| config.log_level)
        .unwrap_or_default())
}

fn run(cli: Cli) -> Result<(), HeadmergeError> {
    init_logging(resolve_log_level(cli.log_level.as_deref())?);

    match cli.command {
        Some(Commands::Init { path }) => {
            let config = InitService::execute(&path)?;
            println!("Initialized headmerge site at {}", path.display());
            println!("Layout: {}", config.layout.display());
            println!("Pages: {}", config.pages.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let site = FileSystemSite::discover()?;
            let service = ConfigService::new(site);

            if list {
                let config = service.list()?;
                println!("layout = {}", config.layout.display());
                println!("pages = {}", config.pages.display());
                println!("log_level = {}", config.log_level);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: headmerge config [--list | <key> [<value>]]");
                println!("Valid keys: layout, pages, log_level, created");
                Ok(())
            }
        }
        Some(Commands::Merge {
            pages,
            layout,
            output,
            out_dir,
        }) => {
            let service = MergeHeadService::new(FileSystemSite::discover().ok());
            let options = MergeOptions {
                pages,
                layout,
                output,
                out_dir,
            };

            let merged = service.execute(&options)?;
            let written = service.write_outputs(&merged, &options)?;
            if written.is_empty() {
                print!("{}", format_merged_pages(&merged));
            } else {
                for path in written {
                    println!("Wrote {}", path.display());
                }
            }
            Ok(())
        }
        Some(Commands::Tags { file }) => {
            let tags = InspectTagsService::execute(&file)?;
            print!("{}", format_tag_list(&tags));
            Ok(())
        }
        None => {
            println!("headmerge - Layout/page head merging for static sites");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
