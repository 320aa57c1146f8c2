use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// 엔드포인트가 요구하는 역할 조건
///
/// 역할 이름은 접두사 없이(`"ADMIN"`) 지정합니다.
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 인증된 주체이면 역할과 무관하게 허용
    Authenticated,
    /// 지정한 역할 필요
    Single(String),
}

impl RequiredRole {
    /// 상품 변경(생성/교체/삭제)에 필요한 역할
    pub fn admin() -> Self {
        RequiredRole::Single("ADMIN".to_string())
    }

    pub fn is_satisfied(&self, user: &AuthenticatedUser) -> bool {
        match self {
            RequiredRole::Authenticated => true,
            RequiredRole::Single(required_role) => user.has_role(required_role),
        }
    }
}
