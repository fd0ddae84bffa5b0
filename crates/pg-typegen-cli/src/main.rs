//! pg-typegen CLI - PostgreSQL column types to Go type identifiers.

use clap::{Parser, Subcommand};
use pg_typegen::{
    build_enums, build_structs, render_go, resolve_mapping, Catalog, ColumnDescriptor, Config,
    DriverProfile, ResolveOptions, TypegenError,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "pg-typegen")]
#[command(about = "Resolve PostgreSQL column types to Go type identifiers")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "pg-typegen.yaml")]
    config: PathBuf,

    /// Override go.sql_package: database/sql or pgx/v4
    #[arg(long)]
    driver: Option<String>,

    /// Log a warning for every unresolved type
    #[arg(long)]
    debug: bool,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one column type
    Resolve {
        /// Catalog file (YAML or JSON) with enums and composite types
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Declared column type, e.g. int8 or billing.status
        #[arg(value_name = "TYPE")]
        declared_type: String,

        /// Column is NOT NULL
        #[arg(long)]
        not_null: bool,

        /// Column is an array
        #[arg(long)]
        array: bool,
    },

    /// Generate Go models for every table in a catalog
    Models {
        /// Catalog file (YAML or JSON)
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Check configuration and catalog files
    Validate {
        /// Catalog file (YAML or JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), TypegenError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let mut config = Config::load(&cli.config)?;
    info!("Loaded configuration from {:?}", cli.config);

    // Apply overrides
    if let Some(driver) = cli.driver {
        config.go.sql_package = Some(driver);
    }
    if cli.debug {
        config.debug = true;
    }
    let opts = config.resolve_options();
    debug!(driver = %opts.driver.unwrap_or_default(), "resolution options ready");

    match cli.command {
        Commands::Resolve {
            catalog,
            declared_type,
            not_null,
            array,
        } => {
            let catalog = match catalog {
                Some(path) => load_catalog(&path)?,
                None => Catalog::new("public"),
            };
            let column = ColumnDescriptor::new(&declared_type)
                .not_null(not_null)
                .array(array);
            let mapping = resolve_mapping(&catalog, &column, &opts);

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&mapping)?);
            } else {
                println!("{}", mapping.go_type);
            }
        }

        Commands::Models { catalog } => {
            let catalog = load_catalog(&catalog)?;
            let enums = build_enums(&catalog, &opts);
            let structs = build_structs(&catalog, &opts);
            info!(
                "Generated {} enums and {} structs",
                enums.len(),
                structs.len()
            );

            if cli.output_json {
                let json = serde_json::json!({
                    "package": config.go.package,
                    "enums": enums,
                    "structs": structs,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                print!("{}", render_go(&config.go.package, &enums, &structs)?);
            }
        }

        Commands::Validate { catalog } => {
            let catalog = catalog.as_deref().map(load_catalog).transpose()?;
            let summary = ValidationSummary::new(&config, catalog.as_ref(), &opts);

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&summary.to_json())?);
            } else {
                summary.print();
            }
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog, TypegenError> {
    let catalog = Catalog::load(path)?;
    info!(
        "Loaded catalog from {:?} ({} schemas)",
        path,
        catalog.schemas.len()
    );
    Ok(catalog)
}

/// Counts reported by `validate`.
struct ValidationSummary {
    package: String,
    driver: DriverProfile,
    schemas: usize,
    enums: usize,
    composite_types: usize,
    tables: usize,
    unresolved_columns: Vec<String>,
}

impl ValidationSummary {
    fn new(config: &Config, catalog: Option<&Catalog>, opts: &ResolveOptions) -> Self {
        let mut summary = Self {
            package: config.go.package.clone(),
            driver: opts.driver.unwrap_or_default(),
            schemas: 0,
            enums: 0,
            composite_types: 0,
            tables: 0,
            unresolved_columns: Vec::new(),
        };

        let Some(catalog) = catalog else {
            return summary;
        };

        for schema in catalog.user_schemas() {
            summary.schemas += 1;
            summary.enums += schema.enums.len();
            summary.composite_types += schema.composite_types.len();
            summary.tables += schema.tables.len();

            for table in &schema.tables {
                for col in &table.columns {
                    if resolve_mapping(catalog, &col.descriptor(), opts).is_dynamic() {
                        summary.unresolved_columns.push(format!(
                            "{}.{}.{} ({})",
                            schema.name, table.name, col.name, col.data_type
                        ));
                    }
                }
            }
        }

        summary
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "package": self.package,
            "sql_package": self.driver.sql_package(),
            "schemas": self.schemas,
            "enums": self.enums,
            "composite_types": self.composite_types,
            "tables": self.tables,
            "unresolved_columns": self.unresolved_columns,
        })
    }

    fn print(&self) {
        println!("Configuration OK");
        println!("  package:     {}", self.package);
        println!("  sql_package: {}", self.driver);
        println!("Catalog:");
        println!("  schemas:         {}", self.schemas);
        println!("  enums:           {}", self.enums);
        println!("  composite types: {}", self.composite_types);
        println!("  tables:          {}", self.tables);
        if !self.unresolved_columns.is_empty() {
            println!("Unresolved columns (interface{{}}):");
            for col in &self.unresolved_columns {
                println!("  {}", col);
            }
        }
    }
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries generated output; logs go to stderr.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
