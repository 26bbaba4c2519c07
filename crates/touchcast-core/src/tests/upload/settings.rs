use crate::{CoreError, Framing, UploadSettings, tests::fakes::upload_settings};

use std::time::Duration;

/// WHAT: Settings that cannot form a request are rejected
/// WHY: Misconfiguration should fail at startup, not on the first upload
#[test]
fn given_invalid_upload_settings_when_validating_then_rejected() {
    // Given: One broken field per case
    let cases: Vec<(&str, UploadSettings)> = vec![
        (
            "empty host",
            UploadSettings {
                host: " ".to_string(),
                ..upload_settings()
            },
        ),
        (
            "zero port",
            UploadSettings {
                port: 0,
                ..upload_settings()
            },
        ),
        (
            "relative path",
            UploadSettings {
                path: "api/voice".to_string(),
                ..upload_settings()
            },
        ),
        (
            "zero response timeout",
            UploadSettings {
                response_timeout: Duration::ZERO,
                ..upload_settings()
            },
        ),
        (
            "boundary with newline",
            UploadSettings {
                framing: Framing::Multipart {
                    boundary: "a\r\nb".to_string(),
                },
                ..upload_settings()
            },
        ),
    ];

    for (name, settings) in cases {
        // When: Validating
        let result = settings.validate();

        // Then: InvalidSettings
        assert!(
            matches!(result, Err(CoreError::InvalidSettings { .. })),
            "{} accepted",
            name
        );
    }
}

/// WHAT: Well-formed settings pass in both framings
/// WHY: Validation must not reject working configurations
#[test]
fn given_valid_upload_settings_when_validating_then_accepted() {
    let multipart = UploadSettings {
        framing: Framing::Multipart {
            boundary: "----touchcast".to_string(),
        },
        ..upload_settings()
    };

    assert!(upload_settings().validate().is_ok());
    assert!(multipart.validate().is_ok());
}
