use super::map_sqlx;
use crate::domain::content_type::{
    ContentTypeDefinition, ContentTypeLabels, ContentTypeRegistry, ContentTypeSlug,
    SupportedFeature,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteContentTypeRegistry {
    pool: SqlitePool,
}

impl SqliteContentTypeRegistry {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentTypeRow {
    slug: String,
    name: String,
    singular_name: String,
    public: bool,
    has_archive: bool,
    show_in_rest: bool,
    supports: String,
    rewrite_slug: String,
}

impl TryFrom<ContentTypeRow> for ContentTypeDefinition {
    type Error = DomainError;

    fn try_from(row: ContentTypeRow) -> Result<Self, Self::Error> {
        let supports = row
            .supports
            .split(',')
            .map(str::trim)
            .filter(|feature| !feature.is_empty())
            .map(SupportedFeature::parse)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(ContentTypeDefinition {
            slug: ContentTypeSlug::new(row.slug)?,
            labels: ContentTypeLabels {
                name: row.name,
                singular_name: row.singular_name,
            },
            public: row.public,
            has_archive: row.has_archive,
            show_in_rest: row.show_in_rest,
            supports,
            rewrite_slug: row.rewrite_slug,
        })
    }
}

fn encode_supports(features: &[SupportedFeature]) -> String {
    features
        .iter()
        .copied()
        .map(SupportedFeature::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl ContentTypeRegistry for SqliteContentTypeRegistry {
    async fn find(&self, slug: &ContentTypeSlug) -> DomainResult<Option<ContentTypeDefinition>> {
        let row = sqlx::query_as::<_, ContentTypeRow>(
            "SELECT slug, name, singular_name, public, has_archive, show_in_rest, supports, rewrite_slug
             FROM content_types WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContentTypeDefinition::try_from).transpose()
    }

    async fn register_if_absent(&self, definition: &ContentTypeDefinition) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO content_types
                (slug, name, singular_name, public, has_archive, show_in_rest, supports, rewrite_slug)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(definition.slug.as_str())
        .bind(definition.labels.name.as_str())
        .bind(definition.labels.singular_name.as_str())
        .bind(definition.public)
        .bind(definition.has_archive)
        .bind(definition.show_in_rest)
        .bind(encode_supports(&definition.supports))
        .bind(definition.rewrite_slug.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database;

    async fn registry() -> SqliteContentTypeRegistry {
        let pool = database::init_pool("sqlite::memory:").await.unwrap();
        database::run_migrations(&pool).await.unwrap();
        SqliteContentTypeRegistry::new(pool)
    }

    fn definition(name: &str, rewrite: &str) -> ContentTypeDefinition {
        let mut def = ContentTypeDefinition::public_with_archive(
            ContentTypeSlug::new("rt-celebs").unwrap(),
            ContentTypeLabels {
                name: name.into(),
                singular_name: format!("{name} item"),
            },
            vec![SupportedFeature::Title, SupportedFeature::Thumbnail],
        );
        def.rewrite_slug = rewrite.into();
        def
    }

    #[tokio::test]
    async fn find_returns_none_for_unknown_slug() {
        let registry = registry().await;
        let slug = ContentTypeSlug::new("rt-celebs").unwrap();
        assert!(registry.find(&slug).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn register_then_find_round_trips_definition() {
        let registry = registry().await;
        let def = definition("RT Celebs", "rt-celebs");
        assert!(registry.register_if_absent(&def).await.unwrap());

        let stored = registry.find(&def.slug).await.unwrap().unwrap();
        assert_eq!(stored, def);
    }

    #[tokio::test]
    async fn second_registration_keeps_first_definition() {
        let registry = registry().await;
        let first = definition("First", "people");
        let second = definition("Second", "rt-celebs");

        assert!(registry.register_if_absent(&first).await.unwrap());
        assert!(!registry.register_if_absent(&second).await.unwrap());

        let stored = registry.find(&first.slug).await.unwrap().unwrap();
        assert_eq!(stored.labels.name, "First");
        assert_eq!(stored.rewrite_slug, "people");
    }
}
