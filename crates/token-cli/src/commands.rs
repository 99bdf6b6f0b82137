use crate::{Cli, Commands};
use anyhow::{Context, Result};
use serde::Serialize;
use token_core::flatten::flatten_tokens;
use token_core::resolve::{lookup_reference, Resolution};
use token_core::showcase::semantic_rows;
use token_core::{build_site, check_catalog, Category, SiteConfig, TokenCatalog};
use tracing::info;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct ResolveOut {
    reference: String,
    value: String,
    resolved: bool,
}

/// Runs one command. `Ok(false)` means the command completed but found problems.
pub fn run(cli: Cli) -> Result<bool> {
    let mut config = SiteConfig::from_env();
    if let Some(dir) = cli.tokens {
        config.tokens_dir = Some(dir);
    }

    let catalog = config
        .load_catalog()
        .with_context(|| format!("loading tokens from {}", config.source().describe()))?;

    match cli.command {
        Commands::Resolve { reference } => {
            let out = resolve(&catalog, &reference);
            print_one(cli.json, &out, |r| r.value.clone())?;
            Ok(true)
        }
        Commands::Semantic => {
            let rows = semantic_rows(&catalog);
            print_out(cli.json, &rows, |r| {
                format!("{}\t{}\t{}\t{}", r.path, r.reference, r.value, r.description)
            })?;
            Ok(true)
        }
        Commands::List { category } => {
            let category = Category::from(category);
            let tokens = catalog
                .document(category)
                .map(|doc| flatten_tokens(doc, &[] as &[&str]))
                .unwrap_or_default();
            print_out(cli.json, &tokens, |t| {
                format!(
                    "{}\t{}\t{}\t{}",
                    t.path,
                    t.value,
                    t.kind.as_deref().unwrap_or("-"),
                    t.description
                )
            })?;
            Ok(true)
        }
        Commands::Build { out, format, title } => {
            if let Some(out) = out {
                config.out_dir = out;
            }
            if let Some(format) = format {
                config.format = format.into();
            }
            if let Some(title) = title {
                config.title = title;
            }
            let report = build_site(&catalog, &config)?;
            info!(pages = report.pages.len(), "site built");
            print_one(cli.json, &report, |r| {
                format!("wrote {} pages to {}", r.pages.len(), r.out_dir.display())
            })?;
            Ok(true)
        }
        Commands::Check => {
            let report = check_catalog(&catalog);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.is_clean(),
                        data: &report
                    })?
                );
            } else {
                for u in &report.unresolved {
                    println!("unresolved\t{}\t{}\t{}", u.path, u.reference, u.reason);
                }
                for g in &report.empty_groups {
                    println!("empty-group\t{}", g);
                }
                for t in &report.untyped {
                    println!("untyped\t{}", t);
                }
                for l in &report.literals {
                    println!("literal\t{}", l);
                }
                if report.is_clean() {
                    println!("all references resolve");
                }
            }
            Ok(report.is_clean())
        }
    }
}

fn resolve(catalog: &TokenCatalog, reference: &str) -> ResolveOut {
    match lookup_reference(reference, catalog.primitives()) {
        Resolution::Resolved(leaf) => ResolveOut {
            reference: reference.to_string(),
            value: leaf.value.display(),
            resolved: true,
        },
        _ => ResolveOut {
            reference: reference.to_string(),
            value: reference.to_string(),
            resolved: false,
        },
    }
}

fn print_out<T: Serialize>(json: bool, data: &[T], row: impl Fn(&T) -> String) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

fn print_one<T: Serialize>(json: bool, data: &T, row: impl Fn(&T) -> String) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(data));
    }
    Ok(())
}
