use clap::{Parser, Subcommand};
use hirehub_client::core::form::{role_destination, SubmitOutcome};
use hirehub_client::utils::{logger, validation};
use hirehub_client::{
    CandidateClient, CliConfig, ClientConfig, Destination, FileTokenStore, LoginForm,
    NavigationEffect, SignupFlow, SubmissionClient, SubmissionResult, TokenStore, TomlConfig,
};
use std::path::Path;

#[derive(Parser)]
#[command(name = "hirehub")]
#[command(about = "HireHub auth and candidate-profile client")]
struct Cli {
    #[arg(long, help = "Load configuration from a TOML file")]
    config: Option<String>,

    #[command(flatten)]
    args: CliConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with an email address or 10 digit mobile number
    Login {
        #[arg(long)]
        identifier: String,

        #[arg(long)]
        password: String,

        #[arg(long, help = "Role label to continue as after login")]
        role: Option<String>,
    },
    /// Register with an email address
    RegisterEmail {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// Register with a mobile number
    RegisterPhone {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        password: String,
    },
    /// Manage uploaded certificates
    Certificates {
        #[command(subcommand)]
        action: CertificateAction,
    },
    /// Remove the stored session token
    Logout,
}

#[derive(Subcommand)]
enum CertificateAction {
    /// List uploaded certificates
    List,
    /// Upload a PDF certificate
    Upload {
        #[arg(long)]
        name: String,

        #[arg(long)]
        file: String,
    },
    /// Delete a certificate by id
    Delete {
        #[arg(long)]
        id: String,
    },
}

struct CliNavigator;

impl NavigationEffect for CliNavigator {
    fn navigate(&self, destination: Destination) {
        println!("➡️  Continue to: {:?}", destination);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 配置來源：TOML 檔案優先，否則使用命令列參數
    let file_config = match &cli.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };

    let verbose = cli.args.verbose
        || file_config
            .as_ref()
            .map(|config| config.verbose())
            .unwrap_or(false);
    let json_logs = cli.args.log_json
        || file_config
            .as_ref()
            .map(|config| config.json_logs())
            .unwrap_or(false);

    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting hirehub CLI");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli.args);
    }

    if let Some(config) = &file_config {
        if let Err(e) = config.validate_config() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    let (client, token_store) = match &file_config {
        Some(config) => build_context(config)?,
        None => build_context(&cli.args)?,
    };

    match cli.command {
        Command::Login {
            identifier,
            password,
            role,
        } => {
            let form = LoginForm::new(client, token_store, CliNavigator);
            let outcome = form.submit(&identifier, &password).await?;
            let succeeded = report_outcome(&outcome);

            if succeeded {
                if let Some(label) = role {
                    match role_destination(&label) {
                        Some(destination) => println!("➡️  Continue to: {:?}", destination),
                        None => eprintln!("❌ Unknown role label: {}", label),
                    }
                }
            } else {
                std::process::exit(1);
            }
        }
        Command::RegisterEmail {
            first_name,
            last_name,
            email,
            password,
        } => {
            let mut flow = SignupFlow::new(client, CliNavigator);
            flow.set_name(&first_name, &last_name);
            let outcome = flow.submit_email(&email, &password).await?;
            flow.finish();

            if !report_outcome(&outcome) {
                std::process::exit(1);
            }
        }
        Command::RegisterPhone {
            first_name,
            last_name,
            phone,
            password,
        } => {
            let mut flow = SignupFlow::new(client, CliNavigator);
            flow.set_name(&first_name, &last_name);
            let outcome = flow.submit_phone(&phone, &password).await?;
            flow.finish();

            if !report_outcome(&outcome) {
                std::process::exit(1);
            }
        }
        Command::Certificates { action } => {
            let candidate = match &file_config {
                Some(config) => CandidateClient::new(config, token_store)?,
                None => CandidateClient::new(&cli.args, token_store)?,
            };
            run_certificate_action(&candidate, action).await?;
        }
        Command::Logout => {
            token_store.clear_token().await?;
            println!("✅ Logged out");
        }
    }

    Ok(())
}

fn build_context(
    config: &impl ClientConfig,
) -> Result<(SubmissionClient, FileTokenStore), Box<dyn std::error::Error>> {
    let client = SubmissionClient::new(config)?;
    let token_store = FileTokenStore::new(config.token_path().to_string());
    Ok((client, token_store))
}

async fn run_certificate_action(
    candidate: &CandidateClient<FileTokenStore>,
    action: CertificateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CertificateAction::List => {
            let certificates = candidate.list_certificates().await?;
            if certificates.is_empty() {
                println!("No certificates uploaded yet");
            }
            for certificate in certificates {
                println!(
                    "📄 {} (id: {}, file: {})",
                    certificate.certificate_name,
                    certificate.id.as_deref().unwrap_or("-"),
                    certificate.file_key.as_deref().unwrap_or("-"),
                );
            }
        }
        CertificateAction::Upload { name, file } => {
            validation::validate_file_extension("file", &file, &["pdf"])?;

            let file_name = Path::new(&file)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("certificate.pdf");
            let data = tokio::fs::read(&file).await?;

            let result = candidate.upload_certificate(&name, file_name, data).await?;
            if !report_result(&result) {
                std::process::exit(1);
            }
        }
        CertificateAction::Delete { id } => {
            let result = candidate.delete_certificate(&id).await?;
            if !report_result(&result) {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

fn report_outcome(outcome: &SubmitOutcome) -> bool {
    match outcome {
        SubmitOutcome::Completed(result) => report_result(result),
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors {
                eprintln!("❌ {:?}: {}", field, message);
            }
            false
        }
        SubmitOutcome::Blocked => {
            eprintln!("⏳ A submission is already in flight");
            false
        }
        SubmitOutcome::Abandoned => false,
    }
}

fn report_result(result: &SubmissionResult) -> bool {
    if result.is_success() {
        println!("✅ {}", result.user_message());
        true
    } else {
        if let SubmissionResult::NetworkError { detail, .. } = result {
            tracing::error!("Network failure detail: {}", detail);
        }
        eprintln!("❌ {}", result.user_message());
        false
    }
}
