use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::record::{RecordInput, ValueInput};
use crate::error::{Error, Result};
use crate::providers::route53::Route53Config;
use crate::reconciler::Intent;

#[derive(Parser, Debug)]
#[command(name = "route53-record")]
#[command(about = "Reconcile a single DNS record set against a Route 53 hosted zone", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Action,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Action {
    /// Create the record set, or replace it with --overwrite
    Create(RecordArgs),
    /// Delete the record set if it exists
    Delete(RecordArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// JSON resource file; flags override its fields
    #[arg(long, env = "ROUTE53_RECORD_INPUT")]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long = "type")]
    pub record_type: Option<String>,

    #[arg(long)]
    pub ttl: Option<u32>,

    /// Record value; repeat for multiple values
    #[arg(long = "value")]
    pub values: Vec<String>,

    /// UPSERT instead of CREATE
    #[arg(long)]
    pub overwrite: bool,

    /// Use an in-memory stub instead of Route 53
    #[arg(long)]
    pub mock: bool,

    /// Hosted zone id, with or without the /hostedzone/ prefix
    #[arg(long, env = "ROUTE53_ZONE")]
    pub zone: Option<String>,

    #[arg(long)]
    pub aws_access_key_id: Option<String>,

    #[arg(long)]
    pub aws_secret_access_key: Option<String>,

    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    #[arg(long, env = "ROUTE53_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Exit non-zero when Route 53 rejects the change
    #[arg(long)]
    pub strict: bool,
}

/// Resource attributes as read from an `--input` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResourceFile {
    #[serde(flatten)]
    pub record: RecordInput,
    pub zone: Option<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
}

impl ResourceFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub intent: Intent,
    pub record: RecordInput,
    pub zone: String,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub route53: Route53Config,
    pub strict: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let (intent, args) = match cli.action {
            Action::Create(args) => (Intent::Create, args),
            Action::Delete(args) => (Intent::Delete, args),
        };
        let file = match &args.input {
            Some(path) => ResourceFile::load(path)?,
            None => ResourceFile::default(),
        };
        Self::merge(intent, args, file)
    }

    pub fn merge(intent: Intent, args: RecordArgs, file: ResourceFile) -> Result<Self> {
        let ResourceFile {
            mut record,
            zone,
            aws_access_key_id,
            aws_secret_access_key,
        } = file;

        if let Some(name) = args.name {
            record.name = name;
        }
        if args.record_type.is_some() {
            record.record_type = args.record_type;
        }
        if args.ttl.is_some() {
            record.ttl = args.ttl;
        }
        match args.values.len() {
            0 => {}
            1 => record.value = ValueInput::One(args.values[0].clone()),
            _ => record.value = ValueInput::Many(args.values),
        }
        record.overwrite |= args.overwrite;
        record.mock |= args.mock;

        if record.name.trim().is_empty() {
            return Err(Error::Config("a record name is required".to_string()));
        }
        let zone = args
            .zone
            .or(zone)
            .filter(|z| !z.trim().is_empty())
            .ok_or_else(|| Error::Config("a hosted zone id is required".to_string()))?;

        Ok(Config {
            intent,
            record,
            zone,
            aws_access_key_id: args.aws_access_key_id.or(aws_access_key_id),
            aws_secret_access_key: args.aws_secret_access_key.or(aws_secret_access_key),
            route53: Route53Config {
                region: args.region,
                endpoint_url: args.endpoint_url,
            },
            strict: args.strict,
        })
    }
}
