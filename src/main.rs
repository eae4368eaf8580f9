//! Prospecta CLI - company research and B2B email drafting
//!
//! The pipeline logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, running the interactive loop and handling
//! top-level errors.

use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prospecta::llm::LlmClient;
use prospecta::search::SearchClient;
use prospecta::{email, research, Category, Config, Drafted, SearchEngine, ALL_CATEGORIES};

#[derive(Parser)]
#[command(name = "prospecta")]
#[command(author, version, about = "Research a company and draft B2B outreach emails", long_about = None)]
struct Cli {
    /// Path to a config file (skips the default lookup)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Research a company and print the structured facts
    Research {
        /// Company or buyer name
        company: String,
        /// Search engine to use
        #[arg(long, value_enum)]
        engine: Option<SearchEngine>,
    },
    /// Run the full pipeline and print the drafted email
    Draft {
        /// Company or buyer name
        company: String,
        /// Email category to draft
        #[arg(long, value_enum, default_value = "product-updates")]
        category: Category,
        /// Search engine to use
        #[arg(long, value_enum)]
        engine: Option<SearchEngine>,
    },
}

/// Clients built once at startup and reused for every request.
struct Pipeline {
    search: SearchClient,
    llm: LlmClient,
    engine: SearchEngine,
}

impl Pipeline {
    fn from_config(config: &Config) -> anyhow::Result<Self> {
        let search = SearchClient::new(config.brightdata_key()?, config.search.zone.clone())?;
        let mut llm = LlmClient::new(config.openai_key()?, config.agent.model.clone())?;
        if let Some(temperature) = config.agent.temperature {
            llm = llm.with_temperature(temperature);
        }
        info!(model = llm.model(), engine = %config.search.engine, "clients initialized");
        Ok(Self {
            search,
            llm,
            engine: SearchEngine::from_config(&config.search.engine),
        })
    }

    /// Search and extract: the first half of the pipeline.
    async fn research_company(&self, company: &str, engine: SearchEngine) -> prospecta::CompanyInfo {
        let results = self.search.search(company, engine).await;
        if results.is_empty() {
            println!("{}", "No search results found.".yellow());
        }
        research::research(&self.llm, company, &results).await
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let pipeline = Pipeline::from_config(&config)?;

    match cli.command {
        Some(Commands::Research { company, engine }) => {
            let engine = engine.unwrap_or(pipeline.engine);
            let info = pipeline.research_company(&company, engine).await;
            println!("{}", info.to_pretty_json());
        }
        Some(Commands::Draft {
            company,
            category,
            engine,
        }) => {
            let engine = engine.unwrap_or(pipeline.engine);
            let info = pipeline.research_company(&company, engine).await;
            let drafted = email::draft(&pipeline.llm, &info, category).await;
            print_draft(&drafted);
        }
        None => {
            run_interactive(&pipeline).await?;
        }
    }

    Ok(())
}

/// The interactive loop: query → research → category menu → draft, until the
/// user types `exit`. No step failure ends the loop; everything degrades.
async fn run_interactive(pipeline: &Pipeline) -> anyhow::Result<()> {
    println!("{}", "Prospecta - B2B outreach assistant".bold());
    println!("Type a company name to research, or 'exit' to quit.\n");

    loop {
        let query: String = match Input::new()
            .with_prompt("Company")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // Closed stdin behaves like an explicit exit.
            Err(_) => break,
        };

        let query = query.trim().to_string();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") {
            break;
        }

        println!("Researching: {}\n", query.as_str().cyan());
        let info = pipeline.research_company(&query, pipeline.engine).await;

        println!("{}", "Company info:".bold());
        println!("{}\n", info.to_pretty_json());

        println!("{}", "Email categories:".bold());
        for (i, category) in ALL_CATEGORIES.iter().enumerate() {
            println!("  {}. {}", i + 1, category.label());
        }

        let choice: String = Input::new()
            .with_prompt("Category [1-8]")
            .allow_empty(true)
            .interact_text()
            .unwrap_or_default();
        let category = Category::from_menu_choice(&choice);
        println!("Drafting a '{}' email...\n", category.label().cyan());

        let drafted = email::draft(&pipeline.llm, &info, category).await;
        print_draft(&drafted);
        println!();
    }

    Ok(())
}

fn print_draft(drafted: &Drafted) {
    match drafted {
        Drafted::Email(_) => println!("{}\n{}", "Draft email:".bold().green(), drafted),
        Drafted::Raw(_) => println!("{}\n{}", "Unstructured model output:".yellow(), drafted),
        Drafted::Unavailable(_) => println!("{}", drafted.to_string().yellow()),
    }
}
