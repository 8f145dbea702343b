use anyhow::{anyhow, Context, Result};
use hashbench_core::{
    AlgorithmKind, BenchConfig, ExecutionCoordinator, HashPipeline, HashRequest, OutputFormat,
    ResultLog, SaltSpec,
};
use std::env;

const USAGE: &str = "Usage: hashbench <sha256|sha512|md5|bcrypt|argon2id|all> <input> [salt]";

#[tokio::main]
async fn main() -> Result<()> {
    let config = BenchConfig::from_env();
    hashbench_core::init(&config)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let (algorithm, input) = match args.as_slice() {
        [algorithm, input, ..] => (algorithm.as_str(), input.clone()),
        _ => return Err(anyhow!(USAGE)),
    };
    let salt = args.get(2).cloned().unwrap_or_default();

    let kinds: Vec<AlgorithmKind> = if algorithm.eq_ignore_ascii_case("all") {
        AlgorithmKind::ALL.to_vec()
    } else {
        vec![algorithm.parse().context(USAGE)?]
    };

    let mut coordinator = ExecutionCoordinator::new(HashPipeline::new(config.salt_resolver()));
    let mut log = ResultLog::new();

    for kind in kinds {
        let Some(variant) = config.selection(kind).to_variant() else {
            continue;
        };
        let request = HashRequest::new(input.clone(), SaltSpec::new(salt.clone()), variant);
        coordinator.run(request, &mut log).await?;
    }

    for error in log.errors() {
        eprintln!("{}", error);
    }

    match config.output_format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(log.results())?),
        OutputFormat::Text => {
            for result in log.results() {
                println!("{}", result);
            }
        }
    }

    Ok(())
}
