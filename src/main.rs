use clap::Parser;
use log::{error, LevelFilter};
use mnid::{Account, Command, Config, Opt, OutputFormat};
use serde_json::json;
use std::process;

fn main() {
    let opt = Opt::parse();

    let config = match resolve_config(&opt) {
        Ok(config) => config,
        Err(e) => {
            env_logger::builder().filter_level(LevelFilter::Warn).init();
            error!("Error: {e}");
            process::exit(1);
        }
    };

    env_logger::builder()
        .filter_level(config.level_filter())
        .init();

    match run_command(opt.command, config.output) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    }
}

// CLI flags win over the environment and the settings file
fn resolve_config(opt: &Opt) -> mnid::Result<Config> {
    let mut config = Config::load()?;
    if let Some(output) = opt.output {
        config.output = output;
    }
    if let Some(level) = &opt.log_level {
        config.set_log_level(level)?;
    }
    Ok(config)
}

/// Runs one subcommand and returns what should be printed
fn run_command(command: Command, output: OutputFormat) -> mnid::Result<String> {
    let rendered = match command {
        Command::Encode { network, address } => {
            let encoded = mnid::encode(&network, &address)?;
            render_mnid(&encoded, output)?
        }
        Command::EncodeBlank => render_mnid(&mnid::encode_account(None), output)?,
        Command::Decode { mnid } => {
            let account = Account::from_mnid(&mnid)?;
            match output {
                OutputFormat::Text => render_account(&account),
                OutputFormat::Json => serde_json::to_string_pretty(&account)?,
            }
        }
        Command::Check { candidate } => {
            let looks_like_mnid = mnid::is_mnid(&candidate);
            match output {
                OutputFormat::Text => looks_like_mnid.to_string(),
                OutputFormat::Json => {
                    json!({ "candidate": candidate, "is_mnid": looks_like_mnid }).to_string()
                }
            }
        }
        Command::Inspect { candidate } => {
            let report = mnid::inspect(&candidate);
            match output {
                OutputFormat::Text => match &report.account {
                    Some(account) => format!("{}\n{}", report.status(), render_account(account)),
                    None => report.status(),
                },
                OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            }
        }
    };
    Ok(rendered)
}

fn render_mnid(encoded: &str, output: OutputFormat) -> mnid::Result<String> {
    Ok(match output {
        OutputFormat::Text => encoded.to_string(),
        OutputFormat::Json => serde_json::to_string(&json!({ "mnid": encoded }))?,
    })
}

fn render_account(account: &Account) -> String {
    format!(
        "network: {}\naddress: {}",
        account.network(),
        account.address()
    )
}
