use tabled::Table;

use crate::{
    backend::materials::MaterialRepository,
    cli::{open, with_spinner},
    error, info,
    routes::Route,
    success,
    types::{MaterialDraft, MaterialPatch, MaterialTableRow, RecordId},
    utils,
    views::MaterialShelf,
};

/// Lists the study materials of a topic, grouped by kind.
pub async fn list_materials(topic_id: RecordId) {
    let session = open(Route::Materials { topic_id }).await;
    let mut shelf = MaterialShelf::new(session.client(), topic_id);

    if let Err(e) = with_spinner("Fetching materials...", shelf.load()).await {
        error!("Failed to load materials. Err: {}", e);
    }

    let materials = shelf.materials().records();
    if materials.is_empty() {
        info!("Topic #{} has no materials yet.", topic_id);
        return;
    }

    let rows: Vec<MaterialTableRow> = materials
        .iter()
        .map(|m| MaterialTableRow {
            id: m.id,
            kind: m.kind.to_string(),
            name: utils::truncate(&m.name, 40),
            link: m.link.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub async fn add_material(draft: MaterialDraft) {
    let session = open(Route::Materials {
        topic_id: draft.topic,
    })
    .await;
    let mut shelf = MaterialShelf::new(session.client(), draft.topic);

    match with_spinner("Saving material...", shelf.create(&draft)).await {
        Ok(m) => success!("Created {} '{}' (#{})", m.kind, m.name, m.id),
        Err(e) => error!("Failed to save material. Err: {}", e),
    }
}

pub async fn update_material(id: RecordId, patch: MaterialPatch) {
    let session = open(Route::Dashboard).await;
    let materials = MaterialRepository::new(session.client());

    match with_spinner("Saving material...", materials.update(id, &patch)).await {
        Ok(m) => success!("Updated {} '{}' (#{})", m.kind, m.name, m.id),
        Err(e) => error!("Failed to update material. Err: {}", e),
    }
}

pub async fn delete_material(id: RecordId) {
    let session = open(Route::Dashboard).await;
    let materials = MaterialRepository::new(session.client());

    match with_spinner("Deleting material...", materials.delete(id)).await {
        Ok(()) => success!("Deleted material #{}", id),
        Err(e) => error!("Failed to delete material. Err: {}", e),
    }
}
