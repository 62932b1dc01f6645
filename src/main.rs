use clap::{Parser, ValueEnum};
use cloudsdk::app_config::AppConfig;
use cloudsdk::responses::{
    CallFunctionResponse, ClaimCodeResponse, CompleteDevice, LogInResponse, SimpleDevice, SimpleResponse, TokenResponse, VariableType,
};
use cloudsdk::{DecodeError, DecodePolicy, decode, decode_list, decode_variable};
use std::fmt::Debug;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Decodes a device cloud API response payload and prints the decoded model.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Response shape to decode the payload as.
    kind: Kind,
    /// File holding the payload; stdin when omitted.
    file: Option<PathBuf>,
    /// Declared type of the variable, for `variable` payloads.
    #[arg(long, value_enum, default_value_t = VariableKind::Opaque)]
    variable_type: VariableKind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Devices,
    Device,
    Token,
    LogIn,
    CallFunction,
    Simple,
    ClaimCode,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariableKind {
    Int,
    Double,
    String,
    Opaque,
}

impl From<VariableKind> for VariableType {
    fn from(kind: VariableKind) -> Self {
        match kind {
            VariableKind::Int => VariableType::Int,
            VariableKind::Double => VariableType::Double,
            VariableKind::String => VariableType::String,
            VariableKind::Opaque => VariableType::Opaque,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    log_started();

    let config = AppConfig::load()?;
    log_loaded(&config);

    let body = read_payload(cli.file.as_ref())?;
    info!("Decoding {} bytes as {:?}...", body.len(), cli.kind);

    match print_decoded(cli.kind, cli.variable_type.into(), &body, config.decode()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("❌ Could not decode the payload: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn log_started() {
    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

fn log_loaded(config: &AppConfig) {
    info!(policy = ?config.decode(), "✅  Loaded configuration");
}

fn read_payload(file: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path),
        None => {
            let mut body = Vec::new();
            std::io::stdin().read_to_end(&mut body)?;
            Ok(body)
        }
    }
}

fn print_decoded(kind: Kind, variable_type: VariableType, body: &[u8], policy: &DecodePolicy) -> Result<(), DecodeError> {
    match kind {
        Kind::Devices => print(decode_list::<SimpleDevice>(body, policy)?),
        Kind::Device => print(decode::<CompleteDevice>(body, policy)?),
        Kind::Token => print(decode::<TokenResponse>(body, policy)?),
        Kind::LogIn => print(decode::<LogInResponse>(body, policy)?),
        Kind::CallFunction => print(decode::<CallFunctionResponse>(body, policy)?),
        Kind::Simple => print(decode::<SimpleResponse>(body, policy)?),
        Kind::ClaimCode => print(decode::<ClaimCodeResponse>(body, policy)?),
        Kind::Variable => print(decode_variable(body, variable_type, policy)?),
    }
    Ok(())
}

fn print(decoded: impl Debug) {
    println!("{:#?}", decoded);
}
