use crate::{
    backend::{ApiClient, Resource, repository::Repository},
    error::ApiError,
    types::{Material, MaterialDraft, MaterialPatch, RecordId},
    utils,
};

#[derive(Debug, Clone, Copy)]
pub struct Materials;

impl Resource for Materials {
    type Record = Material;
    type Draft = MaterialDraft;
    type Patch = MaterialPatch;
    /// Parent topic.
    type Scope = RecordId;

    const NAME: &'static str = "material";
    const BASE: &'static str = "/api/materials";

    fn list_path(topic_id: RecordId) -> String {
        format!("{}/?topic_id={}", Self::BASE, topic_id)
    }

    fn scope_of(material: &Material) -> RecordId {
        material.topic
    }
}

pub type MaterialRepository = Repository<Materials>;

/// Materials of a topic ordered by kind name.
pub async fn sorted_by_kind(
    client: &ApiClient,
    topic_id: RecordId,
) -> Result<Vec<Material>, ApiError> {
    let mut materials = Repository::<Materials>::new(client).list(topic_id).await?;
    utils::sort_materials_by_kind(&mut materials);
    Ok(materials)
}
