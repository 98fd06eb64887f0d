//! Unit tests for the OTP boundary service

use std::io;
use std::sync::{Arc, Mutex};

use jarvi_shared::config::{OtpConfig, TokenPolicy};
use tracing_subscriber::fmt::MakeWriter;

use crate::domain::entities::{Code, Token};
use crate::errors::OtpError;
use crate::services::otp::{derive, CodeDerivation, OtpService};

const TOKEN: &str = "c0ffee-2f6a-4b1e-9d7c-5a3e8b1f0d42";

fn strict_service() -> OtpService {
    OtpService::new(OtpConfig::default().with_token_policy(
        TokenPolicy::default().with_min_length(16).with_max_length(64),
    ))
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_issue_code_matches_codec() {
    let service = strict_service();
    let code = service.issue_code(TOKEN).unwrap();
    assert_eq!(code.as_str(), derive(TOKEN));
}

#[test]
fn test_check_code_success() {
    let service = strict_service();
    let code = service.issue_code(TOKEN).unwrap();

    assert!(service.check_code(TOKEN, code.as_str()).is_ok());
    assert!(service.is_match(TOKEN, code.as_str()));
}

#[test]
fn test_check_code_is_repeatable() {
    // Single-use semantics belong to the token store, not the service
    let service = strict_service();
    let code = service.issue_code(TOKEN).unwrap();

    for _ in 0..3 {
        assert!(service.check_code(TOKEN, code.as_str()).is_ok());
    }
}

#[test]
fn test_check_code_wrong_code() {
    let service = strict_service();
    let code = service.issue_code(TOKEN).unwrap();
    let wrong = Code::from_value(code.value() + 1);

    assert_eq!(
        service.check_code(TOKEN, wrong.as_str()),
        Err(OtpError::InvalidOrExpiredCode)
    );
    assert!(!service.is_match(TOKEN, wrong.as_str()));
}

#[test]
fn test_check_code_malformed_candidate_is_generic_rejection() {
    let service = strict_service();

    for candidate in ["12345", "1234567", "12a456", ""] {
        assert_eq!(
            service.check_code(TOKEN, candidate),
            Err(OtpError::InvalidOrExpiredCode),
            "candidate {:?}",
            candidate
        );
    }
}

#[test]
fn test_token_policy_enforced() {
    let service = strict_service();

    assert_eq!(service.issue_code(""), Err(OtpError::EmptyToken));
    assert_eq!(service.issue_code("   "), Err(OtpError::EmptyToken));
    assert_eq!(
        service.issue_code("short"),
        Err(OtpError::TokenTooShort { min: 16, actual: 5 })
    );
    assert_eq!(
        service.issue_code(&"x".repeat(65)),
        Err(OtpError::TokenTooLong { max: 64, actual: 65 })
    );

    let code = derive("short");
    assert_eq!(
        service.check_code("short", &code),
        Err(OtpError::TokenTooShort { min: 16, actual: 5 })
    );
    assert!(!service.is_match("short", &code));
}

#[test]
fn test_permissive_policy_accepts_short_tokens() {
    let service = OtpService::new(OtpConfig::default().with_token_policy(TokenPolicy::permissive()));
    let code = service.issue_code("abc").unwrap();
    assert_eq!(code.as_str(), "432319");
}

#[test]
fn test_with_custom_codec() {
    struct LengthCode;

    impl CodeDerivation for LengthCode {
        fn derive(&self, token: &Token) -> Code {
            Code::from_value(token.len() as u32)
        }
    }

    let service = OtpService::with_codec(LengthCode, OtpConfig::default());
    assert_eq!(service.issue_code(TOKEN).unwrap().as_str(), "000034");
    assert!(service.is_match(TOKEN, "000034"));
    assert_eq!(service.config().token, TokenPolicy::default());
}

#[test]
fn test_logs_never_contain_secrets() {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    let service = strict_service();
    let code = derive(TOKEN);

    tracing::subscriber::with_default(subscriber, || {
        service.issue_code(TOKEN).unwrap();
        service.check_code(TOKEN, &code).unwrap();
        service.check_code(TOKEN, "000000").ok();
        service.issue_code("short-secret").ok();
    });

    let logs = buffer.contents();
    assert!(logs.contains("otp_derived"));
    assert!(logs.contains("otp_accepted"));
    assert!(logs.contains("otp_rejected") || code == "000000");
    assert!(logs.contains("otp_token_rejected"));
    assert!(!logs.contains(TOKEN));
    assert!(!logs.contains(&code));
    assert!(!logs.contains("short-secret"));
}
