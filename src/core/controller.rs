use crate::core::contact::is_enter_submit_suppressed;
use crate::core::phone::{normalize_phone, MOBILE_LENGTH};
use crate::core::tax_id::normalize_tax_id;
use crate::domain::model::{
    FieldIssue, FieldStatus, FormField, ModalState, SignupForm, Submission, SubmitOutcome,
};
use crate::domain::ports::{FormValidator, SubmissionSink};
use crate::utils::error::{Result, SignupError};
use chrono::Utc;

pub const CONFIRMATION_MESSAGE: &str =
    "Solicitação enviada com sucesso! Entraremos em contato em breve.";

/// Owns the sign-up modal: its open state, the field values and the submit flow.
pub struct SignupController<V: FormValidator, S: SubmissionSink> {
    validator: V,
    sink: S,
    form: SignupForm,
    modal: ModalState,
}

impl<V: FormValidator, S: SubmissionSink> SignupController<V, S> {
    pub fn new(validator: V, sink: S) -> Self {
        Self {
            validator,
            sink,
            form: SignupForm::default(),
            modal: ModalState::Closed,
        }
    }

    pub fn open(&mut self) {
        tracing::debug!("Sign-up modal opened");
        self.modal = ModalState::Open;
    }

    /// Closes the modal and clears every field.
    pub fn close(&mut self) {
        tracing::debug!("Sign-up modal closed");
        self.modal = ModalState::Closed;
        self.form = SignupForm::default();
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Replaces all field values at once, masking the tax ID and phone as typing would.
    ///
    /// A phone with more digits than the mask holds is stored as given so `check` still
    /// rejects it instead of validating a truncated number.
    pub fn fill(&mut self, form: SignupForm) {
        self.form = form;
        self.form.tax_id = self.validator.format_tax_id(&self.form.tax_id);
        if normalize_phone(&self.form.phone).len() <= MOBILE_LENGTH {
            self.form.phone = self.validator.format_phone(&self.form.phone);
        }
    }

    pub fn on_tax_id_input(&mut self, raw: &str) -> &str {
        self.form.tax_id = self.validator.format_tax_id(raw);
        &self.form.tax_id
    }

    pub fn on_phone_input(&mut self, raw: &str) -> &str {
        self.form.phone = self.validator.format_phone(raw);
        &self.form.phone
    }

    /// Returns true when the keypress must not reach the form (Enter outside the textarea).
    pub fn on_key(&self, key: &str, in_textarea: bool) -> bool {
        is_enter_submit_suppressed(key, in_textarea)
    }

    pub fn set_email(&mut self, value: &str) {
        self.form.email = value.to_string();
    }

    pub fn on_email_blur(&self) -> FieldStatus {
        if self.form.email.is_empty() {
            FieldStatus::Empty
        } else if self.validator.is_valid_email(&self.form.email) {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    pub fn set_institution_name(&mut self, value: &str) {
        self.form.institution_name = value.to_string();
    }

    pub fn set_state(&mut self, value: Option<&str>) {
        self.form.state = value.map(str::to_string);
    }

    pub fn set_city(&mut self, value: &str) {
        self.form.city = value.to_string();
    }

    pub fn set_institution_type(&mut self, value: &str) {
        self.form.institution_type = value.to_string();
    }

    pub fn set_student_count(&mut self, value: &str) {
        self.form.student_count = value.to_string();
    }

    pub fn set_responsible_name(&mut self, value: &str) {
        self.form.responsible_name = value.to_string();
    }

    pub fn set_responsible_role(&mut self, value: &str) {
        self.form.responsible_role = value.to_string();
    }

    pub fn set_message(&mut self, value: &str) {
        self.form.message = value.to_string();
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.form.terms_accepted = accepted;
    }

    /// Runs every submit-time check and returns the failures in page order.
    pub fn check(&self) -> Vec<FieldIssue> {
        let v = &self.validator;
        let form = &self.form;
        let mut issues = Vec::new();

        if form.institution_name.trim().is_empty() {
            issues.push(FieldIssue::new(
                FormField::InstitutionName,
                "Por favor, informe o nome da instituição.",
            ));
        }

        if !v.is_valid_tax_id(&form.tax_id) {
            issues.push(FieldIssue::new(
                FormField::TaxId,
                "Por favor, insira um CNPJ válido com 14 dígitos.",
            ));
        }

        if !v.is_valid_state(form.state.as_deref()) {
            issues.push(FieldIssue::new(FormField::State, "Por favor, selecione um estado."));
        }

        if form.city.trim().is_empty() {
            issues.push(FieldIssue::new(FormField::City, "Por favor, informe a cidade."));
        }

        if !v.validate_name(&form.responsible_name).valid {
            issues.push(FieldIssue::new(
                FormField::ResponsibleName,
                "Por favor, informe o nome completo do responsável.",
            ));
        }

        if !v.is_valid_email(&form.email) {
            issues.push(FieldIssue::new(FormField::Email, "Por favor, insira um e-mail válido."));
        }

        if !v.is_valid_phone(&form.phone) {
            issues.push(FieldIssue::new(
                FormField::Phone,
                "Por favor, insira um telefone válido.",
            ));
        }

        let message = v.validate_message(&form.message);
        if message.too_long {
            issues.push(FieldIssue::new(
                FormField::Message,
                "A mensagem excede o limite de caracteres.",
            ));
        } else if message.too_short {
            issues.push(FieldIssue::new(FormField::Message, "A mensagem é muito curta."));
        }

        if v.requires_terms() && !form.terms_accepted {
            issues.push(FieldIssue::new(
                FormField::Terms,
                "Você precisa aceitar os termos de uso para continuar.",
            ));
        }

        issues
    }

    /// Validates, delivers the record to the sink, then closes the modal.
    ///
    /// The form is left untouched when validation or delivery fails.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        if self.modal != ModalState::Open {
            return Err(SignupError::ModalClosed);
        }

        let issues = self.check();
        if !issues.is_empty() {
            for issue in &issues {
                tracing::debug!(field = %issue.field, "{}", issue.message);
            }
            return Err(SignupError::InvalidForm(issues));
        }

        let submission = self.build_submission();
        self.sink.deliver(&submission)?;

        tracing::info!("✅ Sign-up submitted for {}", submission.form.institution_name);
        self.close();

        Ok(SubmitOutcome {
            submission,
            confirmation: CONFIRMATION_MESSAGE,
        })
    }

    fn build_submission(&self) -> Submission {
        let mut form = self.form.clone();
        form.institution_name = form.institution_name.trim().to_string();
        form.city = form.city.trim().to_string();
        form.responsible_name = self.validator.validate_name(&form.responsible_name).trimmed;

        Submission {
            tax_id_digits: normalize_tax_id(&form.tax_id),
            phone_digits: normalize_phone(&form.phone),
            form,
            submitted_at: Utc::now(),
        }
    }
}
