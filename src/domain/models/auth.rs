use serde::{Deserialize, Serialize};

use super::user::ROLE_ADMIN;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// The caller of a request, as asserted by a verified access token.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: i64,
    pub email: String,
    pub role: String,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Admins may act on anyone; everyone else only on themselves.
    pub fn can_manage(&self, user_id: i64) -> bool {
        self.is_admin() || self.user_id == user_id
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(rename = "papel")]
    pub role: String,
    #[serde(rename = "nome")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_permissions() {
        let user = Principal { user_id: 7, email: "a@a.com".into(), role: "usuario".into() };
        assert!(user.can_manage(7));
        assert!(!user.can_manage(8));
        assert!(!user.is_admin());

        let admin = Principal { user_id: 1, email: "b@b.com".into(), role: "admin".into() };
        assert!(admin.can_manage(8));
    }
}
