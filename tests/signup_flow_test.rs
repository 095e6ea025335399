use anyhow::Result;
use ksa_signup::config::toml_config::load_form;
use ksa_signup::domain::model::{FormField, ModalState, Submission};
use ksa_signup::domain::ports::SubmissionSink;
use ksa_signup::{BrazilianValidator, FormRules, LogSink, SignupController, SignupError};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct RecordingSink {
    delivered: Arc<Mutex<Vec<Submission>>>,
}

impl SubmissionSink for RecordingSink {
    fn deliver(&self, submission: &Submission) -> ksa_signup::Result<()> {
        self.delivered.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

struct FailingSink;

impl SubmissionSink for FailingSink {
    fn deliver(&self, _submission: &Submission) -> ksa_signup::Result<()> {
        Err(SignupError::DeliveryError {
            message: "offline".to_string(),
        })
    }
}

const COMPLETE_FORM: &str = r#"
institution_name = "Escola Municipal Rio Verde"
tax_id = "45.723.174/0001-10"
state = "SP"
city = "São Paulo"
institution_type = "publica"
student_count = "501-1000"
responsible_name = "Ana Paula Souza"
responsible_role = "Diretora"
email = "ana@escola.com"
phone = "11987654321"
message = "Desejo integrar minha instituição ao sistema KSA."
terms_accepted = true
"#;

fn write_form(dir: &TempDir, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("form.toml");
    std::fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_complete_form_from_file_is_delivered() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let form = load_form(write_form(&temp_dir, COMPLETE_FORM)?)?;

    let sink = RecordingSink::default();
    let mut controller = SignupController::new(BrazilianValidator::default(), sink.clone());
    controller.open();
    controller.fill(form);
    assert_eq!(controller.form().phone, "(11) 98765-4321");

    let outcome = controller.submit()?;
    assert_eq!(
        outcome.confirmation,
        "Solicitação enviada com sucesso! Entraremos em contato em breve."
    );

    let delivered = sink.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].tax_id_digits, "45723174000110");
    assert_eq!(delivered[0].form.student_count, "501-1000");
    assert_eq!(controller.modal_state(), ModalState::Closed);
    Ok(())
}

#[test]
fn test_empty_form_reports_every_required_field() {
    let mut controller = SignupController::new(BrazilianValidator::default(), LogSink);
    controller.open();

    let err = controller.submit().unwrap_err();
    let SignupError::InvalidForm(issues) = err else {
        panic!("expected InvalidForm");
    };
    let fields: Vec<FormField> = issues.iter().map(|i| i.field).collect();
    assert_eq!(
        fields,
        vec![
            FormField::InstitutionName,
            FormField::TaxId,
            FormField::State,
            FormField::City,
            FormField::ResponsibleName,
            FormField::Email,
            FormField::Phone,
            FormField::Terms,
        ]
    );
}

#[test]
fn test_rules_relax_terms_and_tighten_message() -> Result<()> {
    let rules = FormRules::from_toml_str(
        r#"
[message]
max_length = 20

[submission]
require_terms = false
"#,
    )?;
    let temp_dir = TempDir::new()?;
    let mut form = load_form(write_form(&temp_dir, COMPLETE_FORM)?)?;
    form.terms_accepted = false;

    let mut controller = SignupController::new(BrazilianValidator::new(&rules), LogSink);
    controller.open();
    controller.fill(form);

    let fields: Vec<FormField> = controller.check().iter().map(|i| i.field).collect();
    assert_eq!(fields, vec![FormField::Message]);

    controller.set_message("Olá");
    assert!(controller.check().is_empty());
    Ok(())
}

#[test]
fn test_failed_delivery_keeps_modal_open() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let form = load_form(write_form(&temp_dir, COMPLETE_FORM)?)?;

    let mut controller = SignupController::new(BrazilianValidator::default(), FailingSink);
    controller.open();
    controller.fill(form.clone());

    assert!(matches!(
        controller.submit(),
        Err(SignupError::DeliveryError { .. })
    ));
    assert_eq!(controller.modal_state(), ModalState::Open);
    assert_eq!(controller.form().institution_name, form.institution_name);
    Ok(())
}

#[test]
fn test_missing_form_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_form(temp_dir.path().join("missing.toml"));
    assert!(matches!(result, Err(SignupError::IoError(_))));
}

#[test]
fn test_overlong_phone_in_form_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let content = COMPLETE_FORM.replace("phone = \"11987654321\"", "phone = \"119876543210\"");
    let form = load_form(write_form(&temp_dir, &content)?)?;

    let sink = RecordingSink::default();
    let mut controller = SignupController::new(BrazilianValidator::default(), sink.clone());
    controller.open();
    controller.fill(form);

    let fields: Vec<FormField> = controller.check().iter().map(|i| i.field).collect();
    assert_eq!(fields, vec![FormField::Phone]);
    assert!(matches!(controller.submit(), Err(SignupError::InvalidForm(_))));
    assert!(sink.delivered.lock().unwrap().is_empty());
    Ok(())
}
