use anyhow::Result;
use log::{debug, info};
use multipay_cli::planner::{self, PreviewReport, RunwayReport};
use multipay_cli::utils::{format_amount, format_duration, format_table, truncate_address};
use multipay_cli::{Config, OutputFormat};
use serde::Serialize;
use serde_json::json;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn status_command(config: &Config, format: OutputFormat) -> Result<()> {
    let burn = planner::burn_report(config)?;
    let interval = config.treasury.pay_interval;

    if format == OutputFormat::Json {
        return print_json(&json!({
            "rpc_url": config.network.rpc_url,
            "network_passphrase": config.network.network_passphrase,
            "contract_id": config.contract.default_contract_id,
            "base_asset": config.treasury.base_asset,
            "employees": burn.employees.len(),
            "monthly_burn": burn.total,
            "pay_interval": interval,
        }));
    }

    println!("Multipay Treasury Status");
    println!("========================");
    println!();
    println!("Network:");
    println!("  RPC: {}", config.network.rpc_url);
    println!("  Passphrase: {}", config.network.network_passphrase);
    println!(
        "  Contract ID: {}",
        config.contract.default_contract_id.as_deref().unwrap_or("Not set")
    );
    println!();
    println!("Payroll:");
    println!("  Base asset: {}", config.treasury.base_asset);
    println!("  Employees: {}", burn.employees.len());
    println!(
        "  Monthly burn: {}",
        format_amount(burn.total, config.treasury.decimals)
    );
    println!("  Pay interval: {}", format_duration(interval));

    Ok(())
}

pub async fn burnrate_command(config: &Config, format: OutputFormat) -> Result<()> {
    let report = planner::burn_report(config)?;
    info!("Monthly burn of {} employees: {}", report.employees.len(), report.total);

    if format == OutputFormat::Json {
        return print_json(&report);
    }

    let decimals = config.treasury.decimals;
    let rows: Vec<Vec<String>> = report
        .employees
        .iter()
        .map(|line| {
            vec![
                truncate_address(&line.address, 6),
                format_amount(line.yearly_salary, decimals),
                format_amount(line.monthly_salary, decimals),
            ]
        })
        .collect();
    println!("{}", format_table(&["Employee", "Yearly", "Monthly"], &rows));
    println!(
        "Total monthly burn: {} {}",
        format_amount(report.total, decimals),
        config.treasury.base_asset
    );
    Ok(())
}

pub async fn runway_command(
    config: &Config,
    balance: Option<i128>,
    format: OutputFormat,
) -> Result<()> {
    let burn = planner::burn_report(config)?.total;
    let balance = match balance {
        Some(balance) => balance,
        None => planner::base_equivalent_balance(config)?,
    };
    debug!("Runway over balance {} and burn {}", balance, burn);
    let report = planner::runway_report(balance, burn);

    if format == OutputFormat::Json {
        return print_json(&report);
    }
    print_runway(&report, config);
    Ok(())
}

fn print_runway(report: &RunwayReport, config: &Config) {
    let decimals = config.treasury.decimals;
    println!(
        "Balance: {} {}",
        format_amount(report.balance, decimals),
        config.treasury.base_asset
    );
    println!("Monthly burn: {}", format_amount(report.monthly_burn, decimals));
    if report.unbounded {
        println!("Runway: unbounded");
    } else {
        println!("Runway: {} days", report.days);
    }
}

pub async fn preview_command(
    config: &Config,
    employee: &str,
    now: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let now = match now {
        Some(now) => now,
        None => u64::try_from(chrono::Utc::now().timestamp())?,
    };
    let report = planner::preview(config, employee, now)?;
    info!("Previewed payday of {} at {}", employee, now);

    if format == OutputFormat::Json {
        return print_json(&report);
    }
    print_preview(&report, config);
    Ok(())
}

fn print_preview(report: &PreviewReport, config: &Config) {
    let decimals = config.treasury.decimals;
    let rows: Vec<Vec<String>> = report
        .legs
        .iter()
        .map(|leg| {
            vec![
                leg.asset.clone(),
                format!("{}%", leg.percentage),
                format_amount(leg.base_share, decimals),
                format_amount(leg.amount, decimals),
            ]
        })
        .collect();

    println!("Payday for {}", truncate_address(&report.employee, 6));
    println!("{}", format_table(&["Asset", "Share", "Base value", "Amount"], &rows));
    println!(
        "Gross: {}  Disbursed: {}",
        format_amount(report.gross, decimals),
        format_amount(report.disbursed, decimals)
    );
}
