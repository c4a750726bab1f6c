//! Organiser operations over the repository trait.
//!
//! Unlike events, an organiser update rewrites every field: a field missing
//! from the request is stored as null rather than kept.

use infra::filter::{organiser_predicate, OrganiserFilter};
use infra::models::{NewOrganiser, OrganiserRow};
use infra::repos::OrganiserRepository;

use crate::gql::error::{EntityKind, GqlError};

/// Replacement values for an organiser's writable fields.
#[derive(Debug, Clone, Default)]
pub struct OrganiserFields {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
}

pub async fn read_organiser(
    organisers: &dyn OrganiserRepository,
    id: i64,
) -> Result<Option<OrganiserRow>, GqlError> {
    tracing::debug!(organiser_id = id, "reading organiser");
    Ok(organisers.find_by_id(id).await?)
}

pub async fn list_organisers(
    organisers: &dyn OrganiserRepository,
    filter: Option<&OrganiserFilter>,
) -> Result<Vec<OrganiserRow>, GqlError> {
    let predicate = organiser_predicate(filter);
    tracing::debug!(conditions = predicate.conditions().len(), "listing organisers");
    Ok(organisers.find_all(&predicate).await?)
}

pub async fn create_organiser(
    organisers: &dyn OrganiserRepository,
    new_organiser: NewOrganiser,
) -> Result<OrganiserRow, GqlError> {
    let row = organisers.insert(new_organiser).await?;
    tracing::info!(organiser_id = row.id, "created organiser");
    Ok(row)
}

pub async fn update_organiser(
    organisers: &dyn OrganiserRepository,
    id: i64,
    fields: OrganiserFields,
) -> Result<OrganiserRow, GqlError> {
    let mut organiser = organisers
        .find_by_id(id)
        .await?
        .ok_or(GqlError::NotFound(EntityKind::Organiser))?;

    organiser.name = fields.name;
    organiser.logo = fields.logo;
    organiser.description = fields.description;

    let row = organisers.save(&organiser).await?;
    tracing::info!(organiser_id = row.id, "updated organiser");
    Ok(row)
}

/// Deletes the organiser (and, through the store, its events) and returns its id.
pub async fn delete_organiser(
    organisers: &dyn OrganiserRepository,
    id: i64,
) -> Result<i64, GqlError> {
    if organisers.find_by_id(id).await?.is_none() {
        return Err(GqlError::NotFound(EntityKind::Organiser));
    }

    organisers.delete(id).await?;
    tracing::info!(organiser_id = id, "deleted organiser");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra::memory::MemoryStore;

    async fn seed(store: &MemoryStore) -> OrganiserRow {
        create_organiser(
            store,
            NewOrganiser {
                name: Some("Body & Soul".into()),
                logo: Some("bas.svg".into()),
                description: Some("Summer festival".into()),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let store = MemoryStore::new();
        let before = seed(&store).await;

        let after = update_organiser(
            &store,
            before.id,
            OrganiserFields {
                name: Some("Body & Soul Festival".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(after.name.as_deref(), Some("Body & Soul Festival"));
        // Omitted fields are cleared, not preserved.
        assert_eq!(after.logo, None);
        assert_eq!(after.description, None);
        assert_eq!(read_organiser(&store, before.id).await.unwrap(), Some(after));
    }

    #[tokio::test]
    async fn strict_operations_fail_on_missing_organiser() {
        let store = MemoryStore::new();

        assert_eq!(read_organiser(&store, 5).await.unwrap(), None);
        assert!(matches!(
            update_organiser(&store, 5, OrganiserFields::default()).await,
            Err(GqlError::NotFound(EntityKind::Organiser))
        ));
        assert!(matches!(
            delete_organiser(&store, 5).await,
            Err(GqlError::NotFound(EntityKind::Organiser))
        ));
    }

    #[tokio::test]
    async fn delete_returns_id_and_removes_row() {
        let store = MemoryStore::new();
        let organiser = seed(&store).await;

        assert_eq!(
            delete_organiser(&store, organiser.id).await.unwrap(),
            organiser.id
        );
        assert!(list_organisers(&store, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_matches_description_substring() {
        let store = MemoryStore::new();
        let organiser = seed(&store).await;
        create_organiser(
            &store,
            NewOrganiser {
                name: Some("Hidden".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let hits = list_organisers(
            &store,
            Some(&OrganiserFilter {
                description: Some("festival".into()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(hits, vec![organiser]);
    }
}
