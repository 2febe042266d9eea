//! Doctor command - validate configuration and show status

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use zerohunger_domain::SessionStore;

use crate::args::DoctorArgs;
use crate::commands::session_store;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    backend: CheckResult,
    session: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        backend: CheckResult::error("Not checked"),
        session: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    // Check config
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            Some(c)
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {}", e));
            None
        }
    };

    if let Some(ref config) = config {
        report.backend = check_backend(config);
        report.session = check_session(config).await;
    }

    // Determine overall status
    let checks = [&report.config, &report.backend, &report.session];
    let has_error = checks.iter().any(|c| c.is_error());
    let all_ok = checks.iter().all(|c| c.is_ok());

    report.overall = if has_error {
        "error".to_string()
    } else if all_ok {
        "ok".to_string()
    } else {
        "warn".to_string()
    };

    // Output report
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

fn check_backend(config: &AppConfig) -> CheckResult {
    let base_url = config.backend.base_url.trim();
    if base_url.is_empty() {
        return CheckResult::error(
            "No backend base_url configured. Run 'zerohunger config init' and edit [backend].",
        );
    }

    let env_var = config.backend.api_key_env.trim();
    if env_var.is_empty() {
        return CheckResult::error("No API key env var configured for the backend");
    }

    // Check if the env var is set (without revealing the value)
    match std::env::var(env_var) {
        Ok(val) if !val.is_empty() => CheckResult::ok(format!(
            "Backend: {}, API key: {} (set)",
            base_url, env_var
        )),
        _ => CheckResult::warn(format!(
            "Backend: {}, API key: {} (not set)",
            base_url, env_var
        )),
    }
}

async fn check_session(config: &AppConfig) -> CheckResult {
    match session_store(config).load().await {
        Ok(Some(session)) => CheckResult::ok(format!("Signed in as {}", session.email)),
        Ok(None) => CheckResult::warn("Not signed in"),
        Err(e) => CheckResult::error(format!("Session cache unreadable: {}", e)),
    }
}

fn print_report(report: &DoctorReport) {
    println!("zerohunger Doctor Report");
    println!("========================");
    println!();

    print_check("Config", &report.config);
    print_check("Backend", &report.backend);
    print_check("Session", &report.session);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());

    if report.overall == "ok" {
        println!();
        println!("Ready to go! Try: zerohunger listings");
    }
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}
