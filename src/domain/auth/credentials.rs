//! 관리자 자격 증명 검증

use subtle::ConstantTimeEq;

/// 로그인 자격 증명 검증기
///
/// 검증 방식(설정값 비교, 외부 저장소 등)을 교체할 수 있도록 트레이트로 분리합니다.
pub trait CredentialVerifier: Send + Sync {
    /// 자격 증명이 맞으면 세션에 저장할 사용자 이름을 반환
    fn verify(&self, username: &str, password: &str) -> Option<String>;

    /// 변경 요청을 수행할 수 있는 주체인지 여부
    fn is_privileged(&self, username: &str) -> bool;
}

/// 설정에 지정된 단일 관리자 계정과 비교하는 검증기
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<String> {
        // 두 값을 모두 비교한 뒤 판정 (단락 평가 없음)
        let username_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());

        if bool::from(username_ok & password_ok) {
            Some(self.username.clone())
        } else {
            None
        }
    }

    fn is_privileged(&self, username: &str) -> bool {
        bool::from(self.username.as_bytes().ct_eq(username.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> StaticCredentials {
        StaticCredentials::new("admin", "12345678")
    }

    #[test]
    fn should_accept_configured_admin() {
        assert_eq!(verifier().verify("admin", "12345678"), Some("admin".to_string()));
    }

    #[test]
    fn should_reject_wrong_password_or_username() {
        let verifier = verifier();

        assert!(verifier.verify("admin", "1234567").is_none());
        assert!(verifier.verify("Admin", "12345678").is_none());
        assert!(verifier.verify("", "").is_none());
    }

    #[test]
    fn only_admin_should_be_privileged() {
        let verifier = verifier();

        assert!(verifier.is_privileged("admin"));
        assert!(!verifier.is_privileged("guest"));
    }
}
