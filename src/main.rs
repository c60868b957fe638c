use clap::Parser;
use semtag::application::{
    init, CheckService, ConfigService, DocumentOptions, DocumentService, ListSitesService,
    ListTagsService,
};
use semtag::cli::{format_diagnostics, format_site_list, format_tag_list, Cli, Commands};
use semtag::domain::tags::Linter;
use semtag::error::SemtagError;
use semtag::infrastructure::FileSystemRepository;

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

fn run(cli: Cli) -> Result<(), SemtagError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("source_dir = {}", config.source_dir);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: semtag config [--list | <key> [<value>]]");
                println!("Valid keys: source_dir, created");
                Ok(())
            }
        }
        Commands::Sites { query } => {
            let repo = FileSystemRepository::discover()?;
            let sites = ListSitesService::new(repo).execute(&query)?;
            print!("{}", format_site_list(&sites));
            if sites.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Tags => {
            let repo = FileSystemRepository::discover()?;
            let tags = ListTagsService::new(repo).execute()?;
            print!("{}", format_tag_list(&tags));
            if tags.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Check => {
            let repo = FileSystemRepository::discover()?;
            let diagnostics = CheckService::new(repo).execute()?;
            print!("{}", format_diagnostics(&diagnostics));

            let errors = Linter::error_count(&diagnostics);
            let warnings = Linter::warning_count(&diagnostics);
            if errors > 0 {
                Err(SemtagError::ChecksFailed { errors, warnings })
            } else {
                Ok(())
            }
        }
        Commands::Doc { tag, output } => {
            let repo = FileSystemRepository::discover()?;
            let service = DocumentService::new(repo);
            let path = service.execute(DocumentOptions { tag, output })?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}
