use crate::{
    backend::{ApiClient, materials::Materials},
    error::ApiError,
    types::{Material, MaterialDraft, MaterialPatch, RecordId},
    utils,
    views::ResourceView,
};

/// Study materials of one topic, always ordered by kind.
#[derive(Debug, Clone)]
pub struct MaterialShelf {
    materials: ResourceView<Materials>,
}

impl MaterialShelf {
    pub fn new(client: &ApiClient, topic_id: RecordId) -> Self {
        Self {
            materials: ResourceView::new(client, topic_id),
        }
    }

    pub fn topic_id(&self) -> RecordId {
        self.materials.scope()
    }

    pub fn materials(&self) -> &ResourceView<Materials> {
        &self.materials
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.materials.load().await?;
        self.resort();
        Ok(())
    }

    pub async fn create(&mut self, draft: &MaterialDraft) -> Result<Material, ApiError> {
        let material = self.materials.create(draft).await?;
        self.resort();
        Ok(material)
    }

    pub async fn update(
        &mut self,
        id: RecordId,
        patch: &MaterialPatch,
    ) -> Result<Material, ApiError> {
        let material = self.materials.update(id, patch).await?;
        self.resort();
        Ok(material)
    }

    pub async fn delete(&mut self, id: RecordId) -> Result<(), ApiError> {
        self.materials.delete(id).await
    }

    fn resort(&mut self) {
        self.materials.sort_by(utils::compare_material_kinds);
    }
}
