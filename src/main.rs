use anyhow::{bail, Context};
use bitcodin_client::config::cli::{
    Cli, CodecCommand, Command, InputCommand, JobCommand, OutputCommand, ProfileCommand,
    TransferCommand,
};
use bitcodin_client::utils::{logger, validation::Validate};
use bitcodin_client::{
    camelize, parse_s3_url, to_domain, to_wire, underscore, BitcodinClient, BitcodinError, Input,
    TomlConfig,
};
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let file = match cli.load_toml() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    if cli.json_logs || file.as_ref().is_some_and(TomlConfig::json_logs) {
        logger::init_json_logger(file.as_ref().and_then(TomlConfig::log_level));
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = run(&cli, file.as_ref()).await {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<BitcodinError>())
        .map_or(1, BitcodinError::exit_code)
}

async fn run(cli: &Cli, file: Option<&TomlConfig>) -> anyhow::Result<()> {
    match &cli.command {
        Command::Codec(command) => run_codec(command),
        Command::S3Url { url } => match parse_s3_url(url) {
            Some(location) => print_json(&location),
            None => bail!("Not a recognised S3 URL: {}", url),
        },
        Command::Input(command) => run_input(&connect(cli, file)?, command).await,
        Command::Output(command) => run_output(&connect(cli, file)?, command).await,
        Command::Profile(command) => run_profile(&connect(cli, file)?, command).await,
        Command::Job(command) => run_job(&connect(cli, file)?, command).await,
        Command::Transfer(command) => run_transfer(&connect(cli, file)?, command).await,
    }
}

fn connect(cli: &Cli, file: Option<&TomlConfig>) -> anyhow::Result<BitcodinClient> {
    let config = cli.client_config(file)?;
    config
        .validate()
        .context("Configuration validation failed")?;
    if cli.verbose {
        tracing::debug!("Client config: {:?}", config);
    }

    let client = BitcodinClient::new(&config)?;
    tracing::info!("🚀 Using bitcodin API at {}", client.base_url());
    Ok(client)
}

fn run_codec(command: &CodecCommand) -> anyhow::Result<()> {
    match command {
        CodecCommand::Camelize {
            key,
            capitalize_first,
        } => println!("{}", camelize(key, *capitalize_first)),
        CodecCommand::Underscore { key } => println!("{}", underscore(key)),
        CodecCommand::ToWire {
            json,
            capitalize_first,
        } => print_json(&to_wire(&parse_document(json)?, *capitalize_first))?,
        CodecCommand::ToDomain { json } => print_json(&to_domain(&parse_document(json)?))?,
    }
    Ok(())
}

async fn run_input(client: &BitcodinClient, command: &InputCommand) -> anyhow::Result<()> {
    match command {
        InputCommand::Create { url, params } => {
            let params: Input = read_params(params)?;
            let input = match url {
                Some(url) => Input::with_url(url.clone(), params),
                None => params,
            };
            let created = client.create_input(&input).await?;
            tracing::info!("✅ Created input {:?}", created.input_id);
            print_json(&created)
        }
        InputCommand::Get { id } => print_json(&client.get_input(*id).await?),
        InputCommand::List { page, reload } => print_json(&client.list_inputs(*page, *reload).await?),
    }
}

async fn run_output(client: &BitcodinClient, command: &OutputCommand) -> anyhow::Result<()> {
    match command {
        OutputCommand::Create { params } => {
            let created = client.create_output(&read_params(params)?).await?;
            tracing::info!("✅ Created output {:?}", created.output_id);
            print_json(&created)
        }
        OutputCommand::Get { id } => print_json(&client.get_output(*id).await?),
        OutputCommand::List { page, reload } => {
            print_json(&client.list_outputs(*page, *reload).await?)
        }
    }
}

async fn run_profile(client: &BitcodinClient, command: &ProfileCommand) -> anyhow::Result<()> {
    match command {
        ProfileCommand::Create { params } => {
            let created = client.create_encoding_profile(&read_params(params)?).await?;
            tracing::info!("✅ Created encoding profile {:?}", created.encoding_profile_id);
            print_json(&created)
        }
        ProfileCommand::Get { id } => print_json(&client.get_encoding_profile(*id).await?),
        ProfileCommand::List { page } => print_json(&client.list_encoding_profiles(*page).await?),
    }
}

async fn run_job(client: &BitcodinClient, command: &JobCommand) -> anyhow::Result<()> {
    match command {
        JobCommand::Create { params } => {
            let created = client.create_job(&read_params(params)?).await?;
            tracing::info!("✅ Created job {:?}", created.job_id);
            print_json(&created)
        }
        JobCommand::Get { id } => print_json(&client.get_job(*id).await?),
        JobCommand::Status { id } => print_json(&client.job_status(*id).await?),
        JobCommand::Manifest { id } => print_json(&client.job_manifest(*id).await?),
        JobCommand::List {
            status,
            page,
            reload,
        } => print_json(&client.list_jobs(*status, *page, *reload).await?),
    }
}

async fn run_transfer(client: &BitcodinClient, command: &TransferCommand) -> anyhow::Result<()> {
    match command {
        TransferCommand::Create { job_id, output_id } => {
            let transfer = client.transfer_job(*job_id, *output_id).await?;
            tracing::info!("📦 Transfer of job {} to output {} queued", job_id, output_id);
            print_json(&transfer)
        }
        TransferCommand::List { job_id, reload } => {
            print_json(&client.list_transfers(*job_id, *reload).await?)
        }
    }
}

/// Inline JSON, or `@path` to read it from a file.
fn read_params<T: DeserializeOwned>(raw: &str) -> anyhow::Result<T> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read params file {}", path))?,
        None => raw.to_string(),
    };
    serde_json::from_str(&text)
        .map_err(BitcodinError::from)
        .context("--params must be a snake_case JSON object")
}

fn parse_document(raw: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw)
        .map_err(BitcodinError::from)
        .context("Argument is not valid JSON")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
