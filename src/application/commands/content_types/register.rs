use super::ContentTypeCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::content_type::ContentTypeDefinition,
};

pub struct RegisterContentTypeCommand {
    pub definition: ContentTypeDefinition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created,
    AlreadyRegistered,
}

/// The definition in effect after registration, which is the stored one when
/// the type already existed.
#[derive(Debug, Clone)]
pub struct ContentTypeRegistration {
    pub definition: ContentTypeDefinition,
    pub outcome: RegistrationOutcome,
}

impl ContentTypeCommandService {
    pub async fn ensure_registered(
        &self,
        command: RegisterContentTypeCommand,
    ) -> ApplicationResult<ContentTypeRegistration> {
        let RegisterContentTypeCommand { definition } = command;

        if let Some(existing) = self.registry.find(&definition.slug).await? {
            tracing::info!(content_type = %existing.slug, "content type already registered");
            return Ok(ContentTypeRegistration {
                definition: existing,
                outcome: RegistrationOutcome::AlreadyRegistered,
            });
        }

        if self.registry.register_if_absent(&definition).await? {
            tracing::info!(content_type = %definition.slug, "content type registered");
            return Ok(ContentTypeRegistration {
                definition,
                outcome: RegistrationOutcome::Created,
            });
        }

        // Lost a race with another registrant; theirs stands.
        let existing = self
            .registry
            .find(&definition.slug)
            .await?
            .ok_or_else(|| {
                ApplicationError::infrastructure(format!(
                    "content type {} was neither created nor found",
                    definition.slug
                ))
            })?;
        tracing::info!(content_type = %existing.slug, "content type registered concurrently");
        Ok(ContentTypeRegistration {
            definition: existing,
            outcome: RegistrationOutcome::AlreadyRegistered,
        })
    }
}
