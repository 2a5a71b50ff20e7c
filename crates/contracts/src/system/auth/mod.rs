/// Static admin password. A UI gate only, not a security boundary.
pub const ADMIN_SECRET: &str = "NCC@@2025";

/// Проверка пароля администратора (точное сравнение строк)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential {
    secret: String,
}

impl AdminCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.secret == input
    }
}

impl Default for AdminCredential {
    fn default() -> Self {
        Self::new(ADMIN_SECRET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let credential = AdminCredential::default();
        assert!(credential.matches("NCC@@2025"));
        assert!(!credential.matches("ncc@@2025"));
        assert!(!credential.matches("NCC@@2025 "));
        assert!(!credential.matches(""));
    }
}
