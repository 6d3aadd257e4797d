use chrono::{SecondsFormat, Utc};

use crate::core::engine::{NumerologyEngine, NumerologyReport};
use crate::core::recommendation::Recommendation;
use crate::domain::model::{BirthInput, CustomRequest, Sex};
use crate::domain::ports::{ConfigProvider, Notifier};
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::is_blank;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const REQUEST_SENT: &str = "Your request has been sent! Our team will contact you.";

/// Raw form values; any of them may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub sex: Option<Sex>,
}

/// Extra fields collected by the custom bracelet form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomDetails {
    pub phone: Option<String>,
    pub problems: Option<String>,
}

/// A completed calculation together with the form values it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub sex: Sex,
    pub report: NumerologyReport,
    pub recommendation: Recommendation,
}

/// Shell state. Transitions borrow the current state and return the next one,
/// so a failed transition leaves the caller's state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Idle,
    Calculated(Reading),
    CustomFormOpen(Reading),
}

impl Session {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Session::Idle => "idle",
            Session::Calculated(_) => "calculated",
            Session::CustomFormOpen(_) => "custom_form_open",
        }
    }

    pub fn reading(&self) -> Option<&Reading> {
        match self {
            Session::Idle => None,
            Session::Calculated(reading) | Session::CustomFormOpen(reading) => Some(reading),
        }
    }

    /// Validates the form and runs the engine. Allowed while no custom form is open.
    pub fn calculate(
        &self,
        form: &FormInput,
        engine: &NumerologyEngine,
        config: &impl ConfigProvider,
    ) -> Result<Session> {
        if let Session::CustomFormOpen(_) = self {
            return Err(self.invalid("calculate"));
        }

        let blank = [&form.name, &form.email, &form.dob]
            .iter()
            .any(|field| is_blank(field.as_deref()));
        let (name, email, dob, sex) = match (&form.name, &form.email, &form.dob, form.sex) {
            (Some(name), Some(email), Some(dob), Some(sex)) if !blank => {
                (name.clone(), email.clone(), dob.clone(), sex)
            }
            _ => {
                return Err(NumerologyError::ValidationError {
                    message: FILL_ALL_FIELDS.to_string(),
                })
            }
        };

        let report = engine.calculate(&BirthInput {
            date_of_birth: dob.clone(),
            sex,
        })?;
        let recommendation =
            Recommendation::for_missing(&report.missing, config.catalog(), config.product_base_url());

        tracing::info!(
            "Calculated reading for {}: {} missing number(s)",
            email,
            report.missing.len()
        );

        Ok(Session::Calculated(Reading {
            name,
            email,
            dob,
            sex,
            report,
            recommendation,
        }))
    }

    /// Only offered when two or more numbers are missing.
    pub fn open_custom_form(&self) -> Result<Session> {
        match self {
            Session::Calculated(reading) if reading.recommendation.offers_custom_request() => {
                Ok(Session::CustomFormOpen(reading.clone()))
            }
            _ => Err(self.invalid("open_custom_form")),
        }
    }

    pub fn build_custom_request(&self, details: &CustomDetails) -> Result<CustomRequest> {
        let reading = match self {
            Session::CustomFormOpen(reading) => reading,
            _ => return Err(self.invalid("submit_custom")),
        };

        Ok(CustomRequest {
            name: reading.name.clone(),
            dob: reading.dob.clone(),
            sex: reading.sex,
            email: reading.email.clone(),
            phone: details.phone.clone().unwrap_or_default(),
            problems: details.problems.clone().unwrap_or_default(),
            missing: reading.report.missing_joined(),
            personality: reading.report.personality,
            destiny: reading.report.destiny,
            kua: reading.report.kua,
            requested_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Sends the request once. On success the form closes and the confirmation
    /// message is returned; on failure the form stays open.
    pub async fn submit_custom(
        &self,
        details: &CustomDetails,
        notifier: &dyn Notifier,
    ) -> Result<(Session, &'static str)> {
        let request = self.build_custom_request(details)?;
        notifier.send(&request).await?;

        match self {
            Session::CustomFormOpen(reading) => {
                Ok((Session::Calculated(reading.clone()), REQUEST_SENT))
            }
            _ => Err(self.invalid("submit_custom")),
        }
    }

    fn invalid(&self, action: &str) -> NumerologyError {
        NumerologyError::InvalidTransitionError {
            state: self.state_name().to_string(),
            action: action.to_string(),
        }
    }
}
