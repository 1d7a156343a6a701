use std::sync::Arc;

use creative_hub_core::content::{ModeratedContent, Project, TeamMember, Testimonial};
use creative_hub_core::ports::{RoleResolver, StoreError};
use creative_hub_core::roles::Role;
use creative_hub_core::service::ModerationService;
use creative_hub_db::memory::{MemoryModerationStore, MemoryRoleResolver};
use creative_hub_db::repositories::{ModerationRepo, UserRepo};
use creative_hub_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Database pool; `None` when running on the in-memory backend.
    pub pool: Option<DbPool>,
    pub roles: Arc<dyn RoleResolver>,
    pub projects: ModerationService<Project>,
    pub team_members: ModerationService<TeamMember>,
    pub testimonials: ModerationService<Testimonial>,
}

impl AppState {
    /// State backed by Postgres repositories sharing `pool`.
    pub fn postgres(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            roles: Arc::new(UserRepo::new(pool.clone())),
            projects: ModerationService::new(Arc::new(
                ModerationRepo::<Project>::new(pool.clone()),
            )),
            team_members: ModerationService::new(Arc::new(
                ModerationRepo::<TeamMember>::new(pool.clone()),
            )),
            testimonials: ModerationService::new(Arc::new(
                ModerationRepo::<Testimonial>::new(pool.clone()),
            )),
            pool: Some(pool),
        }
    }

    /// State backed by process-local stores.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            pool: None,
            roles: Arc::new(MemoryRoleResolver::new()),
            projects: ModerationService::new(Arc::new(MemoryModerationStore::<Project>::new())),
            team_members: ModerationService::new(Arc::new(
                MemoryModerationStore::<TeamMember>::new(),
            )),
            testimonials: ModerationService::new(Arc::new(
                MemoryModerationStore::<Testimonial>::new(),
            )),
        }
    }

    /// Grant the admin role to every identity in `ADMIN_EMAILS`.
    pub async fn seed_admins(&self) -> Result<(), StoreError> {
        for email in &self.config.admin_emails {
            self.roles.assign_role(email, Role::Admin).await?;
            tracing::info!(email = %email, "Seeded admin role");
        }
        Ok(())
    }
}

/// Selects the moderation service for a content kind, so handlers can be
/// written once over `T`.
pub trait ContentServices<T: ModeratedContent> {
    fn moderation(&self) -> &ModerationService<T>;
}

impl ContentServices<Project> for AppState {
    fn moderation(&self) -> &ModerationService<Project> {
        &self.projects
    }
}

impl ContentServices<TeamMember> for AppState {
    fn moderation(&self) -> &ModerationService<TeamMember> {
        &self.team_members
    }
}

impl ContentServices<Testimonial> for AppState {
    fn moderation(&self) -> &ModerationService<Testimonial> {
        &self.testimonials
    }
}
