//! User self-service operations: profile, password change, phone change.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use todo_auth::password::{PasswordHasher, PasswordValidator};
use todo_auth::{Principal, UserStore};
use todo_core::error::AppError;
use todo_entity::user::User;

const ACCOUNT_NOT_FOUND: &str = "Cannot find your account details";

/// Required length of a phone number.
pub const PHONE_NUMBER_LEN: usize = 10;

/// Body of a password change.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current password.
    pub old_password: String,
    /// Desired password.
    pub new_password: String,
    /// Desired password, repeated.
    pub confirm_new_password: String,
}

/// Handles user self-service operations.
#[derive(Clone)]
pub struct UserService {
    /// User store.
    store: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            store,
            hasher,
            validator,
        }
    }

    /// Gets the caller's account. Missing and inactive accounts are both `NotFound`.
    pub async fn profile(&self, principal: &Principal) -> Result<User, AppError> {
        self.store
            .find_by_username(&principal.username)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| AppError::not_found(ACCOUNT_NOT_FOUND))
    }

    /// Changes the caller's password after checking the old one.
    pub async fn change_password(
        &self,
        principal: &Principal,
        request: ChangePasswordRequest,
    ) -> Result<(), AppError> {
        let user = self.profile(principal).await?;

        if !self
            .hasher
            .verify_password(&request.old_password, &user.password_hash)
        {
            return Err(AppError::unauthorized("Incorrect old password"));
        }

        if request.new_password != request.confirm_new_password {
            return Err(AppError::unauthorized(
                "Confirm new password must match new password",
            ));
        }

        self.validator.validate(&request.new_password)?;
        self.validator
            .validate_not_same(&request.old_password, &request.new_password)?;

        let password_hash = self.hasher.hash_password(&request.new_password)?;
        self.store
            .update_password_hash(user.id, &password_hash)
            .await?;

        info!(user_id = user.id, "Password changed");
        Ok(())
    }

    /// Replaces the caller's phone number.
    pub async fn change_phone(
        &self,
        principal: &Principal,
        new_phone_number: &str,
    ) -> Result<(), AppError> {
        if new_phone_number.chars().count() != PHONE_NUMBER_LEN {
            return Err(AppError::validation(format!(
                "Phone number must be exactly {PHONE_NUMBER_LEN} characters"
            )));
        }

        let user = self
            .store
            .find_by_id(principal.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(ACCOUNT_NOT_FOUND))?;

        if user.phone_number == new_phone_number {
            return Err(AppError::validation("Your new phone number is already taken"));
        }

        self.store.update_phone(user.id, new_phone_number).await?;

        info!(user_id = user.id, "Phone number changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_auth::MemoryUserStore;
    use todo_core::config::AuthConfig;
    use todo_core::error::ErrorKind;
    use todo_entity::user::{CreateUser, UserRole};

    struct Fixture {
        service: UserService,
        store: Arc<MemoryUserStore>,
        hasher: Arc<PasswordHasher>,
        principal: Principal,
    }

    async fn fixture(is_active: bool) -> Fixture {
        let mut config = AuthConfig::default();
        config.argon2.memory_kib = 256;
        config.argon2.iterations = 1;

        let hasher = Arc::new(PasswordHasher::new(&config).unwrap());
        let store = Arc::new(MemoryUserStore::new());
        let user = store
            .insert(CreateUser {
                email: "jane@example.com".to_string(),
                username: "jane".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                password_hash: hasher.hash_password("12345aA@").unwrap(),
                is_active,
                role: UserRole::user(),
                phone_number: "1111111111".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            service: UserService::new(
                store.clone(),
                hasher.clone(),
                Arc::new(PasswordValidator::new(&config)),
            ),
            store,
            hasher,
            principal: Principal {
                username: user.username,
                user_id: user.id,
                role: user.role,
            },
        }
    }

    fn change(old: &str, new: &str, confirm: &str) -> ChangePasswordRequest {
        ChangePasswordRequest {
            old_password: old.to_string(),
            new_password: new.to_string(),
            confirm_new_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_profile() {
        let f = fixture(true).await;
        let user = f.service.profile(&f.principal).await.unwrap();
        assert_eq!(user.username, "jane");
    }

    #[tokio::test]
    async fn test_inactive_profile_not_found() {
        let f = fixture(false).await;
        let err = f.service.profile(&f.principal).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
        assert_eq!(err.message, ACCOUNT_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_profile_looks_up_token_subject() {
        let f = fixture(true).await;
        let renamed = Principal {
            username: "ghost".to_string(),
            ..f.principal.clone()
        };

        let err = f.service.profile(&renamed).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_change_password() {
        let f = fixture(true).await;
        f.service
            .change_password(&f.principal, change("12345aA@", "newpass12", "newpass12"))
            .await
            .unwrap();

        let stored = f.store.find_by_id(f.principal.user_id).await.unwrap().unwrap();
        assert!(f.hasher.verify_password("newpass12", &stored.password_hash));
        assert!(!f.hasher.verify_password("12345aA@", &stored.password_hash));
    }

    #[tokio::test]
    async fn test_change_password_rejections() {
        let f = fixture(true).await;

        let wrong_old = f
            .service
            .change_password(&f.principal, change("nope", "newpass12", "newpass12"))
            .await
            .unwrap_err();
        assert!(wrong_old.is(ErrorKind::Unauthorized));
        assert_eq!(wrong_old.message, "Incorrect old password");

        let mismatch = f
            .service
            .change_password(&f.principal, change("12345aA@", "newpass12", "newpass13"))
            .await
            .unwrap_err();
        assert!(mismatch.is(ErrorKind::Unauthorized));

        let unchanged = f
            .service
            .change_password(&f.principal, change("12345aA@", "12345aA@", "12345aA@"))
            .await
            .unwrap_err();
        assert!(unchanged.is(ErrorKind::Validation));
    }

    #[tokio::test]
    async fn test_change_phone() {
        let f = fixture(true).await;
        f.service.change_phone(&f.principal, "2222222222").await.unwrap();

        let stored = f.store.find_by_id(f.principal.user_id).await.unwrap().unwrap();
        assert_eq!(stored.phone_number, "2222222222");
    }

    #[tokio::test]
    async fn test_change_phone_rejections() {
        let f = fixture(true).await;

        let same = f.service.change_phone(&f.principal, "1111111111").await.unwrap_err();
        assert!(same.is(ErrorKind::Validation));
        assert_eq!(same.message, "Your new phone number is already taken");

        let short = f.service.change_phone(&f.principal, "12345").await.unwrap_err();
        assert!(short.is(ErrorKind::Validation));
    }
}
