use anyhow::Result;
use httpmock::prelude::*;
use numerology_grid::adapters::notifier::notifier_from_config;
use numerology_grid::app::session::REQUEST_SENT;
use numerology_grid::config::toml_config::AppConfig;
use numerology_grid::domain::ports::ConfigProvider;
use numerology_grid::utils::validation::Validate;
use numerology_grid::{
    CatalogVariant, CrystalCatalog, CustomDetails, FormInput, HttpNotifier, NumerologyEngine,
    NumerologyError, Overrides, Recommendation, Session, Settings, Sex,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn form() -> FormInput {
    FormInput {
        name: Some("Meera".to_string()),
        email: Some("meera@example.com".to_string()),
        dob: Some("05121990".to_string()),
        sex: Some(Sex::Female),
    }
}

/// Full flow: settings file -> reading -> custom form -> webhook delivery.
#[tokio::test]
async fn test_custom_request_delivered_to_configured_endpoint() -> Result<()> {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/bracelet").json_body_partial(
            r#"{
                "name": "Meera",
                "dob": "05121990",
                "sex": "Female",
                "email": "meera@example.com",
                "phone": "555-0101",
                "problems": "Low energy",
                "missing": "3, 4, 6, 7, 8",
                "personality": 5,
                "destiny": 9,
                "kua": 5
            }"#,
        );
        then.status(202);
    });

    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"
[catalog]
variant = "planetary"

[notifier]
endpoint = "{}"
timeout_seconds = 5
"#,
        server.url("/bracelet")
    )?;

    let file = AppConfig::from_file(config_file.path())?;
    file.validate()?;
    let settings = Settings::resolve(Some(&file), &Overrides::default())?;
    assert_eq!(settings.catalog(), &CrystalCatalog::builtin(CatalogVariant::Planetary));

    let session = Session::new().calculate(&form(), &NumerologyEngine::new(), &settings)?;
    match &session.reading().unwrap().recommendation {
        Recommendation::Combination { picks } => {
            assert_eq!(picks.len(), 5);
            assert!(picks[0].crystal.starts_with("Jupiter"));
        }
        other => panic!("expected combination, got {:?}", other),
    }

    let open = session.open_custom_form()?;
    let details = CustomDetails {
        phone: Some("555-0101".to_string()),
        problems: Some("Low energy".to_string()),
    };
    let notifier = notifier_from_config(&settings);
    let (next, message) = open.submit_custom(&details, notifier.as_ref()).await?;

    hook.assert();
    assert_eq!(message, REQUEST_SENT);
    assert_eq!(next.state_name(), "calculated");
    Ok(())
}

#[tokio::test]
async fn test_rejected_request_leaves_form_open() -> Result<()> {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/bracelet");
        then.status(500).body("mailer offline");
    });

    let settings = Settings::default();
    let open = Session::new()
        .calculate(&form(), &NumerologyEngine::new(), &settings)?
        .open_custom_form()?;

    let notifier = HttpNotifier::new(server.url("/bracelet"));
    let err = open
        .submit_custom(&CustomDetails::default(), &notifier)
        .await
        .unwrap_err();

    hook.assert();
    assert!(matches!(err, NumerologyError::NotificationError { status: 500, .. }));
    assert_eq!(
        err.user_friendly_message(),
        "Your request could not be sent. Please try again later."
    );
    assert_eq!(open.state_name(), "custom_form_open");
    Ok(())
}

#[tokio::test]
async fn test_without_endpoint_request_is_only_logged() -> Result<()> {
    let settings = Settings::default();
    let open = Session::new()
        .calculate(&form(), &NumerologyEngine::new(), &settings)?
        .open_custom_form()?;

    let notifier = notifier_from_config(&settings);
    let (_, message) = open.submit_custom(&CustomDetails::default(), notifier.as_ref()).await?;

    assert_eq!(message, REQUEST_SENT);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    let settings = Settings::default();
    let open = Session::new()
        .calculate(&form(), &NumerologyEngine::new(), &settings)
        .unwrap()
        .open_custom_form()
        .unwrap();

    // Nothing listens on port 9 locally.
    let notifier = HttpNotifier::new("http://127.0.0.1:9/hook");
    let err = open
        .submit_custom(&CustomDetails::default(), &notifier)
        .await
        .unwrap_err();

    assert!(matches!(err, NumerologyError::ApiError(_)));
}
