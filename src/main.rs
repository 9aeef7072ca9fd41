use clap::Parser;
use yapi_tidy::config::{parse_project_ref, presets, Cli, Command};
use yapi_tidy::core::action;
use yapi_tidy::domain::model::SortOutcome;
use yapi_tidy::utils::{logger, validation::Validate};
use yapi_tidy::{clipboard, MenuService, SortEngine, SortPlanner, YapiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting yapi-tidy");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: Cli) -> yapi_tidy::Result<()> {
    let Cli {
        server,
        token,
        command,
        ..
    } = cli;

    match command {
        Command::Sort {
            project,
            category,
            dry_run,
            action_keywords,
        } => {
            let project_id = parse_project_ref(&project)?;
            let keywords = if action_keywords.is_empty() {
                action::default_action_keywords()
            } else {
                action_keywords
            };

            let client = YapiClient::from_server(&server, token)?;
            let engine = SortEngine::new(client, SortPlanner::new(keywords)?);

            let outcome = engine.sort_category(project_id, &category, dry_run).await?;
            print_outcome(&outcome);
        }

        Command::Categories { project } => {
            let project_id = parse_project_ref(&project)?;
            let client = YapiClient::from_server(&server, token)?;

            let categories = client.fetch_menu(project_id).await?;
            println!("{} 个分类:", categories.len());
            for category in &categories {
                println!("  {} ({} 个接口)", category.name, category.list.len());
            }
        }

        Command::Presets { presets_file } => {
            let list = presets::resolve_presets(presets_file.as_deref())?;
            for preset in &list {
                println!("{:<6} {}", preset.kind.as_str(), preset.label);
            }
        }

        Command::Copy {
            label,
            presets_file,
        } => {
            let list = presets::resolve_presets(presets_file.as_deref())?;
            let preset = presets::find(&list, &label)?;

            let mut chain = clipboard::default_chain();
            let tier = clipboard::copy_with_fallback(&preset.text, &mut chain)?;

            tracing::info!(tier, label = %preset.label, "Snippet copied");
            println!("✅ 已复制 '{}' ({})", preset.label, tier);
        }
    }

    Ok(())
}

fn print_outcome(outcome: &SortOutcome) {
    println!("分类 '{}' ({} 个接口):", outcome.category, outcome.plan.len());

    let mut current_subject: Option<&str> = None;
    for (index, entry) in outcome.plan.entries.iter().enumerate() {
        if current_subject != Some(entry.subject.as_str()) {
            println!("  [{}]", entry.subject);
            current_subject = Some(entry.subject.as_str());
        }
        println!("  {:>3}. {}", index, entry.title);
    }

    if outcome.applied {
        println!("✅ 新顺序已提交");
    } else {
        println!("ℹ️ dry run，未提交");
    }
}
