use anyhow::{bail, Context, Result};
use chanakya_prompts::{assemble_prompt, TemplateKind, Values};
use chanakya_server::ServerConfig;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "chanakya-server", about = "Chanakya coaching prompt service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    server: ServerConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a prompt template to stdout
    Render {
        /// Template to render (general or perma)
        kind: String,
        /// Placeholder value as name=value (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        values: Vec<String>,
        /// Fill missing placeholders with this value instead of failing
        #[arg(long)]
        default: Option<String>,
    },
    /// List the placeholders a template expects
    Placeholders {
        /// Template to inspect (general or perma)
        kind: String,
    },
}

fn parse_values(pairs: &[String]) -> Result<Values> {
    let mut values = Values::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("expected NAME=VALUE, got '{pair}'");
        };
        values.insert(name.trim().to_string(), value.to_string());
    }
    Ok(values)
}

fn run_render(kind: &str, pairs: &[String], default: Option<&str>) -> Result<String> {
    let kind = TemplateKind::parse(kind)?;
    let values = parse_values(pairs)?;
    assemble_prompt(kind, &values, default).with_context(|| format!("rendering {kind} prompt"))
}

/// One placeholder name per line.
fn run_placeholders(kind: &str) -> Result<String> {
    let kind = TemplateKind::parse(kind)?;
    Ok(kind
        .template()
        .placeholders()
        .iter()
        .map(|name| format!("{name}\n"))
        .collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            kind,
            values,
            default,
        }) => {
            print!("{}", run_render(&kind, &values, default.as_deref())?);
        }
        Some(Commands::Placeholders { kind }) => {
            print!("{}", run_placeholders(&kind)?);
        }
        None => {
            let config = cli.server;
            let addr = config.addr();
            if let Some(ref default) = config.missing_default {
                info!("missing placeholders will render as '{default}'");
            }
            let listener = TcpListener::bind(addr).await?;
            info!("chanakya-server listening on http://{addr}");
            chanakya_server::serve(listener, &config).await?;
        }
    }

    Ok(())
}
