use anyhow::Context;
use clap::Parser;
use ksa_signup::config::toml_config::{self, FormRules};
use ksa_signup::config::{CheckKind, Command, MaskKind};
use ksa_signup::utils::error::ErrorSeverity;
use ksa_signup::utils::logger::{self, LogFormat};
use ksa_signup::utils::validation::Validate;
use ksa_signup::{
    format_phone, format_tax_id, is_valid_email, is_valid_phone, is_valid_state, is_valid_tax_id,
    BrazilianValidator, CliConfig, LogSink, SignupController, SignupError,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // logs go to stderr, results to stdout
    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, format);

    tracing::debug!("CLI config: {:?}", config);

    match config.command {
        Command::Submit {
            form,
            rules,
            dry_run,
        } => submit(&form, rules.as_deref(), dry_run),
        Command::Mask { kind, value } => {
            let masked = match kind {
                MaskKind::TaxId => format_tax_id(&value),
                MaskKind::Phone => format_phone(&value),
            };
            println!("{}", masked);
            Ok(())
        }
        Command::Check { kind, value } => {
            let valid = match kind {
                CheckKind::TaxId => is_valid_tax_id(&value),
                CheckKind::Phone => is_valid_phone(&value),
                CheckKind::Email => is_valid_email(&value),
                CheckKind::State => is_valid_state(Some(value.as_str())),
            };
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn submit(form_path: &str, rules_path: Option<&str>, dry_run: bool) -> anyhow::Result<()> {
    let rules = match rules_path {
        Some(path) => {
            tracing::info!("📁 Loading form rules from: {}", path);
            FormRules::from_file(path)
                .with_context(|| format!("Failed to load rules file '{}'", path))?
        }
        None => FormRules::default(),
    };

    if let Err(e) = rules.validate() {
        tracing::error!("❌ Form rules validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let form = toml_config::load_form(form_path)
        .with_context(|| format!("Failed to load form file '{}'", form_path))?;

    let mut controller = SignupController::new(BrazilianValidator::new(&rules), LogSink);
    controller.open();
    controller.fill(form);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - submission will not be delivered");
        let issues = controller.check();
        if issues.is_empty() {
            println!("✅ Form is valid");
            return Ok(());
        }
        for issue in &issues {
            println!("❌ {}: {}", issue.field, issue.message);
        }
        std::process::exit(1);
    }

    match controller.submit() {
        Ok(outcome) => {
            println!("✅ {}", outcome.confirmation);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Submission failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            if let SignupError::InvalidForm(issues) = &e {
                for issue in issues {
                    eprintln!("❌ {}: {}", issue.field, issue.message);
                }
            } else {
                eprintln!("❌ {}", e.user_friendly_message());
            }
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
