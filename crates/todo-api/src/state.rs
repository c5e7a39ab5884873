//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use todo_auth::{
    Authenticator, JwtDecoder, JwtEncoder, MemoryUserStore, PasswordHasher, PasswordValidator,
    PrincipalResolver, UserStore,
};
use todo_core::config::AppConfig;
use todo_core::error::AppError;
use todo_database::DatabasePool;
use todo_database::repositories::{TodoRepository, UserRepository};
use todo_service::{AdminTodoService, MemoryTodoStore, TodoService, TodoStore, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool, absent when running on in-memory stores
    pub db: Option<DatabasePool>,

    // ── Auth ─────────────────────────────────────────────────
    /// Bearer token to principal resolution
    pub principal_resolver: Arc<PrincipalResolver>,
    /// Login and registration
    pub authenticator: Arc<Authenticator>,

    // ── Services ─────────────────────────────────────────────
    /// Account self-service
    pub user_service: Arc<UserService>,
    /// Owner-scoped task operations
    pub todo_service: Arc<TodoService>,
    /// Admin task operations
    pub admin_todo_service: Arc<AdminTodoService>,
}

impl AppState {
    /// Wires every component over the given stores.
    pub fn new(
        config: Arc<AppConfig>,
        user_store: Arc<dyn UserStore>,
        todo_store: Arc<dyn TodoStore>,
    ) -> Result<Self, AppError> {
        let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let principal_resolver = Arc::new(PrincipalResolver::new(jwt_decoder));
        let authenticator = Arc::new(Authenticator::new(
            &config.auth,
            Arc::clone(&user_store),
            Arc::clone(&password_hasher),
            jwt_encoder,
        )?);

        let user_service = Arc::new(UserService::new(
            user_store,
            password_hasher,
            password_validator,
        ));
        let todo_service = Arc::new(TodoService::new(Arc::clone(&todo_store)));
        let admin_todo_service = Arc::new(AdminTodoService::new(todo_store));

        Ok(Self {
            config,
            db: None,
            principal_resolver,
            authenticator,
            user_service,
            todo_service,
            admin_todo_service,
        })
    }

    /// State backed by PostgreSQL repositories.
    pub fn with_database(config: Arc<AppConfig>, db: DatabasePool) -> Result<Self, AppError> {
        let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
        let todo_repo = Arc::new(TodoRepository::new(db.pool().clone()));

        let mut state = Self::new(config, user_repo, todo_repo)?;
        state.db = Some(db);
        Ok(state)
    }

    /// State backed by empty process-local stores.
    pub fn in_memory(config: Arc<AppConfig>) -> Result<Self, AppError> {
        Self::new(
            config,
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryTodoStore::new()),
        )
    }
}
