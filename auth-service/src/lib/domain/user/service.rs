use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use tokio::sync::OnceCell;

use crate::domain::user::models::AuthSession;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Plaintext behind the hash checked when a login names no known account.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Domain service implementation of the authentication workflow.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Argon2 work runs on the blocking pool so request tasks keep the reactor free.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    decoy_hash: OnceCell<String>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token handler
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
            decoy_hash: OnceCell::new(),
        }
    }

    async fn hash_password(&self, password: Password) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
            .await
            .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(UserError::from)
    }

    /// Run a full verification against a hash made with the configured cost,
    /// so an unknown email takes as long as a wrong password.
    async fn verify_decoy(&self, password: Password) -> Result<(), UserError> {
        let decoy_hash = self
            .decoy_hash
            .get_or_try_init(|| async {
                self.hash_password(Password::new(DECOY_PASSWORD.to_string())?)
                    .await
            })
            .await?
            .clone();

        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || {
            let _ = authenticator.verify_password(password.expose(), &decoy_hash);
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Password verification task failed: {}", e)))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<AuthSession, UserError> {
        let credentials = Credentials::new(command.email, command.password)?;

        let password_hash = self.hash_password(credentials.password).await?;

        let user = self
            .repository
            .create(&credentials.email, &password_hash)
            .await?;

        let token = self
            .authenticator
            .generate_token(user.id.0, user.email.as_str())?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthSession { token, user })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthSession, UserError> {
        let credentials = Credentials::new(command.email, command.password)
            .map_err(|_| UserError::InvalidCredentials)?;

        let user = match self.repository.find_by_email(&credentials.email).await? {
            Some(user) => user,
            None => {
                self.verify_decoy(credentials.password).await?;
                return Err(UserError::InvalidCredentials);
            }
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password;
        let stored_hash = user.password_hash.clone();
        let user_id = user.id.0;
        let email = user.email.as_str().to_string();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(password.expose(), &stored_hash, user_id, &email)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Password verification task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
            AuthenticationError::JwtError(err) => UserError::Token(err),
        })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            token: result.access_token,
            user,
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
